use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleTask,
    DeleteTask,
    AddTask,
    DeleteAll,
    ToggleFilter,
    Refresh,
    Help,
    Cancel,
    Submit,
    NextField,
    Backspace,
    Char(char),
}

pub struct KeyBindings;

impl KeyBindings {
    pub fn handle_normal(key: KeyEvent) -> Option<Action> {
        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),

            // Actions
            KeyCode::Char('x') | KeyCode::Enter => Some(Action::ToggleTask),
            KeyCode::Char('d') => Some(Action::DeleteTask),
            KeyCode::Char('a') => Some(Action::AddTask),
            KeyCode::Char('D') => Some(Action::DeleteAll),
            KeyCode::Char('f') => Some(Action::ToggleFilter),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('?') => Some(Action::Help),

            _ => None,
        }
    }

    pub fn handle_input(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    pub fn handle_confirm(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        }
    }

    pub fn handle_alert(_key: KeyEvent) -> Option<Action> {
        // Any key dismisses the alert
        Some(Action::Cancel)
    }

    pub fn handle_help(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => Some(Action::Cancel),
            _ => Some(Action::Cancel), // Any key closes help
        }
    }
}
