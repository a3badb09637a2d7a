use ratatui::{layout::Rect, Frame};

use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn draw_confirm(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    super::draw_modal(
        f,
        theme,
        area,
        " Confirm ",
        theme.style_warning(),
        &app.confirm_message,
        "y / Enter = confirm    n / Esc = cancel",
    );
}
