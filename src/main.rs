use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::info;

mod cli;
mod config;
mod error;
mod model;
mod store;
mod tui;

use cli::{Cli, Command};
use config::Config;
use error::{Result, TaskdeckError};
use model::{FilterMode, Task};
use store::TaskStore;

pub const EMPTY_FIELDS_MSG: &str = "Task name and due date must be filled.";
pub const NO_TASKS_MSG: &str = "There are no tasks to delete.";
pub const CONFIRM_CLEAR_MSG: &str = "Are you sure you want to delete ALL tasks?";

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!("Starting taskdeck");

    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(1);
        }
    };

    // TTY = interactive screen, non-TTY = plain listing
    let is_tty = atty::is(atty::Stream::Stdout);
    let command = cli.command.unwrap_or_else(|| {
        if is_tty {
            Command::Tui
        } else {
            Command::List {
                filter: cli::ListFilter::All,
                format: "text".into(),
            }
        }
    });

    match run(command, config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(command: Command, config: Config) -> Result<()> {
    let store = TaskStore::new(config.storage_path());

    match command {
        Command::Tui => {
            tui::run(store, config)?;
        }
        Command::Add { name, date } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(TaskdeckError::Input(EMPTY_FIELDS_MSG.into()));
            }

            let task = Task::new(name, date);
            let id = task.id;
            store.append(task)?;
            println!("✓ Created task: {} (ID: {})", name, id);
        }
        Command::List { filter, format } => {
            let mode = FilterMode::from(filter);

            let tasks = store.load()?;
            let visible: Vec<&Task> = tasks.iter().filter(|t| mode.admits(t)).collect();

            match format.as_str() {
                "json" => {
                    let json = serde_json::to_string_pretty(&visible)?;
                    println!("{}", json);
                }
                _ => {
                    if visible.is_empty() {
                        println!("{}", mode.empty_message());
                    } else {
                        for task in visible {
                            println!(
                                "{} {}  {}  {}",
                                task.status_icon(),
                                task.name,
                                task.date,
                                task.status_label()
                            );
                        }
                    }
                }
            }
        }
        Command::Toggle { id } => {
            if store.toggle(id)? {
                println!("✓ Toggled task {}", id);
            } else {
                println!("No task with ID {}", id);
            }
        }
        Command::Delete { id } => {
            if store.remove(id)? {
                println!("✓ Deleted task {}", id);
            } else {
                println!("No task with ID {}", id);
            }
        }
        Command::Clear { yes } => {
            let tasks = store.load()?;
            if tasks.is_empty() {
                return Err(TaskdeckError::Input(NO_TASKS_MSG.into()));
            }

            if !yes && !confirm_on_stdin()? {
                println!("Aborted.");
                return Ok(());
            }

            store.clear()?;
            println!("✓ Deleted {} tasks.", tasks.len());
        }
        Command::Config => {
            let config_toml = toml::to_string_pretty(&config).map_err(|e| {
                TaskdeckError::Config(format!("Failed to serialize config: {}", e))
            })?;
            println!("{}", config_toml);
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn confirm_on_stdin() -> Result<bool> {
    print!("{} [y/N] ", CONFIRM_CLEAR_MSG);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}
