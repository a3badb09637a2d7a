use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::model::Task;
use crate::tui::app::{App, StatusLevel};
use crate::tui::theme::Theme;

pub fn draw_task_list(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let task_area = chunks[0];
    let status_area = chunks[1];

    let visible = app.visible_tasks();

    let mut items: Vec<ListItem> = Vec::new();
    for (idx, task) in visible.iter().enumerate() {
        let style = if idx == app.selected {
            theme.style_selected().add_modifier(Modifier::BOLD)
        } else {
            theme.style_default()
        };

        let content = format_task_line(task, theme, task_area.width);
        items.push(ListItem::new(content).style(style));
    }

    if items.is_empty() {
        items.push(ListItem::new(app.filter.empty_message()).style(theme.style_muted()));
    }

    let tasks_block = Block::default()
        .title(format!(" Tasks ({}/{}) ", visible.len(), app.tasks.len()))
        .borders(Borders::ALL)
        .border_style(theme.style_muted());

    let list = List::new(items).block(tasks_block);
    f.render_widget(list, task_area);

    // The filter control's label always shows the mode a press switches to,
    // even while a status message occupies the rest of the line.
    let mut status_spans = vec![
        Span::styled("f", theme.style_accent()),
        Span::styled(format!(" {}  ", app.filter.toggle_label()), theme.style_muted()),
    ];

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme.style_default(),
            StatusLevel::Success => theme.style_success(),
            StatusLevel::Warning => theme.style_warning(),
            StatusLevel::Error => theme.style_error(),
        };
        status_spans.push(Span::styled(msg.clone(), style));
    } else {
        status_spans.extend([
            Span::styled("a", theme.style_accent()),
            Span::styled(" add  ", theme.style_muted()),
            Span::styled("x", theme.style_accent()),
            Span::styled(" toggle  ", theme.style_muted()),
            Span::styled("d", theme.style_accent()),
            Span::styled(" delete  ", theme.style_muted()),
            Span::styled("D", theme.style_accent()),
            Span::styled(" delete all  ", theme.style_muted()),
            Span::styled("?", theme.style_accent()),
            Span::styled(" help", theme.style_muted()),
        ]);
    }

    let status_bar = Paragraph::new(Text::from(vec![Line::from(status_spans)])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.style_muted()),
    );
    f.render_widget(status_bar, status_area);
}

fn format_task_line<'a>(task: &'a Task, theme: &'a Theme, width: u16) -> Line<'a> {
    let icon_style = if task.completed {
        theme.style_success()
    } else {
        theme.style_default()
    };

    // Completed names render struck through
    let name_style = if task.completed {
        theme.style_muted().add_modifier(Modifier::CROSSED_OUT)
    } else {
        theme.style_default()
    };

    let status_style = if task.completed {
        theme.style_success()
    } else {
        theme.style_warning()
    };

    let date_str = task.date.to_string();
    let status_str = task.status_label();

    // Char counts, not byte lengths: names can be multibyte
    let left_len = 2 + task.status_icon().chars().count() + 1 + task.name.chars().count();
    let right_len = date_str.chars().count() + 2 + status_str.chars().count();
    let available = width.saturating_sub(2) as usize;

    let padding = if left_len + right_len < available {
        available - left_len - right_len
    } else {
        1
    };

    Line::from(vec![
        Span::raw("  "), // Indent
        Span::styled(format!("{} ", task.status_icon()), icon_style),
        Span::styled(task.name.clone(), name_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(date_str, theme.style_muted()),
        Span::raw("  "),
        Span::styled(status_str, status_style),
    ])
}

pub fn draw_help(f: &mut Frame, theme: &Theme, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keybindings",
            theme.style_accent().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("j, ↓", theme.style_accent()),
            Span::styled("     Move selection down", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("k, ↑", theme.style_accent()),
            Span::styled("     Move selection up", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("x, Enter", theme.style_accent()),
            Span::styled(" Toggle task complete/pending", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("a", theme.style_accent()),
            Span::styled("         Add a task", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("d", theme.style_accent()),
            Span::styled("         Delete selected task", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("D", theme.style_accent()),
            Span::styled("         Delete ALL tasks", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("f", theme.style_accent()),
            Span::styled("         Toggle pending-only filter", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("r", theme.style_accent()),
            Span::styled("         Reload from storage", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("?", theme.style_accent()),
            Span::styled("         Toggle this help", theme.style_default()),
        ]),
        Line::from(vec![
            Span::styled("q, Esc", theme.style_accent()),
            Span::styled("   Quit", theme.style_default()),
        ]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text)).block(
        Block::default()
            .title(" Help (? to close) ")
            .borders(Borders::ALL)
            .border_style(theme.style_accent()),
    );

    let area = super::centered_rect(60, 60, area);
    f.render_widget(Clear, area);
    f.render_widget(help_paragraph, area);
}
