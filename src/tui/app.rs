use chrono::{Local, NaiveDate};

use crate::model::{FilterMode, Task, TaskId};
use crate::store::TaskStore;
use crate::{CONFIRM_CLEAR_MSG, EMPTY_FIELDS_MSG, NO_TASKS_MSG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Input,
    Confirm,
    Alert,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Name,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// The whole screen's state in one place: filter mode, the add form, and a
/// per-frame snapshot of the store. Every mutation goes through the store
/// and is followed by `refresh_tasks`, so the snapshot never drifts from
/// what is persisted.
pub struct App {
    pub mode: AppMode,
    pub tasks: Vec<Task>,
    pub filter: FilterMode,
    pub selected: usize,
    pub name_input: String,
    pub date_input: String,
    pub active_field: InputField,
    pub alert_message: String,
    pub confirm_message: String,
    pub status_message: Option<(String, StatusLevel)>,
    pub store: TaskStore,
    pub should_quit: bool,
    alert_return: AppMode,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self {
            mode: AppMode::Normal,
            tasks: Vec::new(),
            filter: FilterMode::All,
            selected: 0,
            name_input: String::new(),
            date_input: String::new(),
            active_field: InputField::Name,
            alert_message: String::new(),
            confirm_message: String::new(),
            status_message: None,
            store,
            should_quit: false,
            alert_return: AppMode::Normal,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some((message.into(), level));
    }

    /// Reloads the snapshot from the store and clamps the cursor to the
    /// visible list.
    pub fn refresh_tasks(&mut self) {
        match self.store.load() {
            Ok(tasks) => {
                self.tasks = tasks;
                let visible = self.visible_tasks().len();
                if self.selected >= visible && visible > 0 {
                    self.selected = visible - 1;
                }
            }
            Err(e) => {
                self.set_status(format!("Error loading tasks: {}", e), StatusLevel::Error);
            }
        }
    }

    /// Display list: the full snapshot, or only pending tasks, in insertion
    /// order either way.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.admits(t)).collect()
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selected).map(|t| t.id)
    }

    pub fn move_selection_down(&mut self) {
        let visible = self.visible_tasks().len();
        if visible > 0 && self.selected < visible - 1 {
            self.selected += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Opens the add form. The date field pre-fills with today as a soft
    /// minimum; earlier dates are still accepted on submit.
    pub fn start_add(&mut self) {
        self.mode = AppMode::Input;
        self.active_field = InputField::Name;
        self.name_input.clear();
        self.date_input = Local::now().date_naive().to_string();
    }

    pub fn cancel_input(&mut self) {
        self.mode = AppMode::Normal;
        self.name_input.clear();
        self.date_input.clear();
    }

    pub fn switch_field(&mut self) {
        self.active_field = match self.active_field {
            InputField::Name => InputField::Date,
            InputField::Date => InputField::Name,
        };
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            InputField::Name => self.name_input.push(c),
            InputField::Date => self.date_input.push(c),
        }
    }

    pub fn input_backspace(&mut self) {
        match self.active_field {
            InputField::Name => self.name_input.pop(),
            InputField::Date => self.date_input.pop(),
        };
    }

    /// Validates and appends. A blank name or an empty/unparseable date
    /// raises a blocking alert and leaves both the store and the form
    /// untouched.
    pub fn submit_add(&mut self) {
        let name = self.name_input.trim().to_string();
        let date: Option<NaiveDate> = self.date_input.trim().parse().ok();

        let date = match date {
            Some(d) if !name.is_empty() => d,
            _ => {
                self.raise_alert(EMPTY_FIELDS_MSG, AppMode::Input);
                return;
            }
        };

        if let Err(e) = self.store.append(Task::new(name.clone(), date)) {
            self.set_status(format!("Failed to save task: {}", e), StatusLevel::Error);
            self.mode = AppMode::Normal;
            return;
        }

        self.name_input.clear();
        self.date_input.clear();
        self.mode = AppMode::Normal;
        self.refresh_tasks();
        self.set_status(format!("Created: {}", name), StatusLevel::Success);
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let was_pending = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| !t.completed)
            .unwrap_or(false);

        match self.store.toggle(id) {
            Ok(true) => {
                let msg = if was_pending {
                    "Task completed"
                } else {
                    "Task marked as pending"
                };
                self.set_status(msg, StatusLevel::Success);
            }
            Ok(false) => {}
            Err(e) => {
                self.set_status(format!("Failed to toggle task: {}", e), StatusLevel::Error);
            }
        }
        self.refresh_tasks();
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };

        match self.store.remove(id) {
            Ok(true) => self.set_status("Task deleted", StatusLevel::Success),
            Ok(false) => {}
            Err(e) => {
                self.set_status(format!("Failed to delete task: {}", e), StatusLevel::Error);
            }
        }
        self.refresh_tasks();
    }

    /// Delete-all checks the full collection, not the filtered view.
    pub fn start_delete_all(&mut self) {
        match self.store.load() {
            Ok(tasks) if tasks.is_empty() => {
                self.raise_alert(NO_TASKS_MSG, AppMode::Normal);
            }
            Ok(_) => {
                self.confirm_message = CONFIRM_CLEAR_MSG.to_string();
                self.mode = AppMode::Confirm;
            }
            Err(e) => {
                self.set_status(format!("Error loading tasks: {}", e), StatusLevel::Error);
            }
        }
    }

    pub fn confirm_delete_all(&mut self) {
        match self.store.clear() {
            Ok(()) => {
                self.filter = FilterMode::All;
                self.selected = 0;
                self.set_status("All tasks deleted", StatusLevel::Success);
            }
            Err(e) => {
                self.set_status(format!("Failed to delete tasks: {}", e), StatusLevel::Error);
            }
        }
        self.mode = AppMode::Normal;
        self.refresh_tasks();
    }

    pub fn cancel_confirm(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.toggled();
        self.selected = 0;
    }

    pub fn raise_alert(&mut self, message: impl Into<String>, return_to: AppMode) {
        self.alert_message = message.into();
        self.alert_return = return_to;
        self.mode = AppMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.mode = self.alert_return;
    }

    pub fn toggle_help(&mut self) {
        if self.mode == AppMode::Help {
            self.mode = AppMode::Normal;
        } else {
            self.mode = AppMode::Help;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));
        let mut app = App::new(store);
        app.refresh_tasks();
        (dir, app)
    }

    fn add(app: &mut App, name: &str, date: &str) {
        app.start_add();
        app.name_input = name.to_string();
        app.date_input = date.to_string();
        app.submit_add();
    }

    #[test]
    fn test_add_appends_pending_task() {
        let (_dir, mut app) = test_app();
        add(&mut app, "Buy milk", "2025-01-01");

        assert_eq!(app.mode, AppMode::Normal);
        let tasks = app.store.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Buy milk");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_trims_name() {
        let (_dir, mut app) = test_app();
        add(&mut app, "  Buy milk  ", "2025-01-01");
        assert_eq!(app.store.load().unwrap()[0].name, "Buy milk");
    }

    #[test]
    fn test_add_empty_name_alerts_without_saving() {
        let (_dir, mut app) = test_app();
        add(&mut app, "   ", "2025-01-01");

        assert_eq!(app.mode, AppMode::Alert);
        assert_eq!(app.alert_message, EMPTY_FIELDS_MSG);
        assert!(app.store.load().unwrap().is_empty());

        // Dismissing returns to the form with fields intact
        app.dismiss_alert();
        assert_eq!(app.mode, AppMode::Input);
        assert_eq!(app.date_input, "2025-01-01");
    }

    #[test]
    fn test_add_bad_date_alerts_without_saving() {
        let (_dir, mut app) = test_app();
        add(&mut app, "Buy milk", "");
        assert_eq!(app.mode, AppMode::Alert);
        assert!(app.store.load().unwrap().is_empty());

        app.dismiss_alert();
        add(&mut app, "Buy milk", "not-a-date");
        assert_eq!(app.mode, AppMode::Alert);
        assert!(app.store.load().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_selected_flips_completed() {
        let (_dir, mut app) = test_app();
        add(&mut app, "Buy milk", "2025-01-01");

        app.toggle_selected();
        assert!(app.tasks[0].completed);

        app.toggle_selected();
        assert!(!app.tasks[0].completed);
    }

    #[test]
    fn test_delete_selected_preserves_order() {
        let (_dir, mut app) = test_app();
        add(&mut app, "a", "2025-01-01");
        add(&mut app, "b", "2025-01-02");
        add(&mut app, "c", "2025-01-03");

        app.selected = 1;
        app.delete_selected();

        let names: Vec<_> = app.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_all_on_empty_alerts() {
        let (_dir, mut app) = test_app();
        app.start_delete_all();
        assert_eq!(app.mode, AppMode::Alert);
        assert_eq!(app.alert_message, NO_TASKS_MSG);

        app.dismiss_alert();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_delete_all_resets_filter() {
        let (_dir, mut app) = test_app();
        add(&mut app, "Buy milk", "2025-01-01");
        app.toggle_filter();
        assert_eq!(app.filter, FilterMode::Pending);

        app.start_delete_all();
        assert_eq!(app.mode, AppMode::Confirm);
        app.confirm_delete_all();

        assert_eq!(app.filter, FilterMode::All);
        assert!(app.tasks.is_empty());
        assert!(!app.store.path().exists());
    }

    #[test]
    fn test_cancel_confirm_changes_nothing() {
        let (_dir, mut app) = test_app();
        add(&mut app, "Buy milk", "2025-01-01");

        app.start_delete_all();
        app.cancel_confirm();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_pending_filter_hides_completed_in_order() {
        let (_dir, mut app) = test_app();
        add(&mut app, "a", "2025-01-01");
        add(&mut app, "b", "2025-01-02");
        add(&mut app, "c", "2025-01-03");

        app.selected = 1;
        app.toggle_selected();
        app.toggle_filter();

        let names: Vec<_> = app.visible_tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);

        app.toggle_filter();
        assert_eq!(app.visible_tasks().len(), 3);
    }

    #[test]
    fn test_completed_task_vanishes_from_pending_view() {
        // Full walk-through: add, complete, filter, unfilter.
        let (_dir, mut app) = test_app();
        add(&mut app, "Buy milk", "2025-01-01");

        app.toggle_selected();
        app.toggle_filter();
        assert!(app.visible_tasks().is_empty());

        app.toggle_filter();
        assert_eq!(app.visible_tasks().len(), 1);
        assert!(app.visible_tasks()[0].completed);
    }
}
