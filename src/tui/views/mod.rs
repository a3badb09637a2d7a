use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

pub mod add_task;
pub mod alert;
pub mod confirm;
pub mod task_list;

/// Small centered modal: a bordered message with a one-line hint below it.
/// Shared by the confirm and alert popups.
pub fn draw_modal(
    f: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    border: Style,
    message: &str,
    hint: &str,
) {
    let popup = centered_rect(50, 15, area);
    f.render_widget(Clear, popup);

    let text = Paragraph::new(message.to_string())
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border),
        )
        .style(theme.style_default())
        .alignment(Alignment::Center);
    f.render_widget(text, popup);

    let hint_area = Rect {
        x: popup.x,
        y: popup.y + popup.height + 1,
        width: popup.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(hint.to_string())
            .style(theme.style_muted())
            .alignment(Alignment::Center),
        hint_area,
    );
}


/// Popup geometry: a rect of the given percentage size, centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
