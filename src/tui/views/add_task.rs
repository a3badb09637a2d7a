use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputField};
use crate::tui::theme::Theme;

/// Two-field entry form: task name and due date, Tab to switch.
pub fn draw_form(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let popup = super::centered_rect(60, 30, area);
    f.render_widget(Clear, popup);

    let outer = Block::default()
        .title(" Add Task ")
        .borders(Borders::ALL)
        .border_style(theme.style_accent());
    let inner = outer.inner(popup);
    f.render_widget(outer, popup);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let field_border = |field: InputField| {
        if app.active_field == field {
            theme.style_accent()
        } else {
            theme.style_muted()
        }
    };

    let name = Paragraph::new(app.name_input.clone())
        .block(
            Block::default()
                .title(" Name ")
                .borders(Borders::ALL)
                .border_style(field_border(InputField::Name)),
        )
        .style(theme.style_default());
    f.render_widget(name, fields[0]);

    let date = Paragraph::new(app.date_input.clone())
        .block(
            Block::default()
                .title(" Due date (YYYY-MM-DD) ")
                .borders(Borders::ALL)
                .border_style(field_border(InputField::Date)),
        )
        .style(theme.style_default());
    f.render_widget(date, fields[1]);

    let (cursor_area, buffer) = match app.active_field {
        InputField::Name => (fields[0], &app.name_input),
        InputField::Date => (fields[1], &app.date_input),
    };
    // Char count, not byte length, so multibyte input keeps the cursor in place
    let cursor_offset = buffer.chars().count() as u16;
    f.set_cursor_position((cursor_area.x + cursor_offset + 1, cursor_area.y + 1));

    let hint = Paragraph::new(format!(
        "Tab switch field  Enter save  Esc cancel  (today is {})",
        Local::now().date_naive()
    ))
    .style(theme.style_muted())
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup.x,
        y: popup.y + popup.height,
        width: popup.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, layout::Position, Terminal};
    use tempfile::TempDir;

    use crate::store::TaskStore;
    use crate::tui::app::App;
    use crate::tui::theme::Theme;

    fn cursor_after(name: &str) -> Position {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(TaskStore::new(dir.path().join("tasks.json")));
        app.start_add();
        app.name_input = name.to_string();

        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| crate::tui::ui::render(f, &app, &theme))
            .unwrap();
        terminal.get_cursor_position().unwrap()
    }

    #[test]
    fn test_cursor_counts_chars_not_bytes() {
        // Same char count, different byte count
        assert_eq!(cursor_after("abc"), cursor_after("abé"));
    }
}
