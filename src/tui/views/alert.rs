use ratatui::{layout::Rect, Frame};

use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Blocking notice; the triggering operation has already been aborted.
pub fn draw_alert(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    super::draw_modal(
        f,
        theme,
        area,
        " Alert ",
        theme.style_error(),
        &app.alert_message,
        "press any key",
    );
}
