use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::model::{FilterMode, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFilter {
    All,
    Pending,
}

impl From<ListFilter> for FilterMode {
    fn from(filter: ListFilter) -> Self {
        match filter {
            ListFilter::All => FilterMode::All,
            ListFilter::Pending => FilterMode::Pending,
        }
    }
}

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A single-screen task list for your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file (default: ~/.config/taskdeck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive task list (default in a terminal)
    Tui,

    /// Add a task from the command line
    Add {
        /// Task name
        name: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
    },

    /// List tasks to stdout (for scripting)
    List {
        /// Which tasks to show
        #[arg(value_enum, default_value = "all")]
        filter: ListFilter,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Toggle a task between pending and completed
    Toggle {
        /// Task id (shown by `list --format json`)
        id: TaskId,
    },

    /// Delete a single task
    Delete {
        /// Task id
        id: TaskId,
    },

    /// Delete all tasks and remove the store file
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Print the active config (resolved, with defaults)
    Config,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
