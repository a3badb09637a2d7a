use ratatui::Frame;

use crate::tui::app::{App, AppMode};
use crate::tui::theme::Theme;
use crate::tui::views::{add_task, alert, confirm, task_list};

pub fn render(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();

    f.render_widget(
        ratatui::widgets::Block::default().style(theme.style_default()),
        area,
    );

    task_list::draw_task_list(f, app, theme, area);

    match app.mode {
        AppMode::Input => add_task::draw_form(f, app, theme, area),
        AppMode::Confirm => confirm::draw_confirm(f, app, theme, area),
        AppMode::Alert => alert::draw_alert(f, app, theme, area),
        AppMode::Help => task_list::draw_help(f, theme, area),
        AppMode::Normal => {}
    }
}
