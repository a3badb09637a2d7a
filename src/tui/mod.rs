use crossterm::{
    event::{self, Event, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::store::TaskStore;
use crate::tui::app::{App, AppMode, StatusLevel};
use crate::tui::keybindings::{Action, KeyBindings};
use crate::tui::theme::Theme;

pub mod app;
pub mod keybindings;
pub mod theme;
pub mod ui;
pub mod views;

pub fn run(store: TaskStore, config: Config) -> crate::error::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::load(&config.general.theme);

    let mut app = App::new(store);
    app.refresh_tasks();

    loop {
        terminal.draw(|f| ui::render(f, &app, &theme))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = handle_key(key, &app) {
                    process_action(action, &mut app);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key(key: KeyEvent, app: &App) -> Option<Action> {
    match app.mode {
        AppMode::Normal => KeyBindings::handle_normal(key),
        AppMode::Input => KeyBindings::handle_input(key),
        AppMode::Confirm => KeyBindings::handle_confirm(key),
        AppMode::Alert => KeyBindings::handle_alert(key),
        AppMode::Help => KeyBindings::handle_help(key),
    }
}

fn process_action(action: Action, app: &mut App) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveUp => {
            app.move_selection_up();
        }
        Action::MoveDown => {
            app.move_selection_down();
        }
        Action::ToggleTask => {
            app.toggle_selected();
        }
        Action::DeleteTask => {
            app.delete_selected();
        }
        Action::AddTask => {
            app.start_add();
        }
        Action::DeleteAll => {
            app.start_delete_all();
        }
        Action::ToggleFilter => {
            app.toggle_filter();
        }
        Action::Refresh => {
            app.refresh_tasks();
            app.set_status("Tasks refreshed", StatusLevel::Info);
        }
        Action::Help => {
            app.toggle_help();
        }
        Action::Cancel => match app.mode {
            AppMode::Help => app.toggle_help(),
            AppMode::Confirm => app.cancel_confirm(),
            AppMode::Alert => app.dismiss_alert(),
            _ => app.cancel_input(),
        },
        Action::Submit => {
            if app.mode == AppMode::Confirm {
                app.confirm_delete_all();
            } else {
                app.submit_add();
            }
        }
        Action::NextField => {
            app.switch_field();
        }
        Action::Backspace => {
            app.input_backspace();
        }
        Action::Char(c) => {
            app.input_char(c);
        }
    }
}
