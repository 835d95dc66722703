// UI submodules
mod archive_page;
mod biometric_page;
mod common;
mod dashboard_page;
mod logs_page;
mod masks_page;
mod overlays;
mod settings_page;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use super::app::App;
use super::palette::Palette;
use crate::dashboard::Page;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.dashboard.theme.current());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + tabs
            Constraint::Min(10),   // Page
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, &palette, main_chunks[0]);

    let area = main_chunks[1];
    match app.page() {
        Page::Dashboard => dashboard_page::draw(frame, app, &palette, area),
        Page::Settings => settings_page::draw(frame, app, &palette, area),
        Page::Masks => masks_page::draw(frame, app, &palette, area),
        Page::Logs => logs_page::draw(frame, app, &palette, area),
        Page::Biometric => biometric_page::draw(frame, app, &palette, area),
        Page::Archive => archive_page::draw(frame, app, &palette, area),
    }

    draw_status_bar(frame, app, &palette, main_chunks[2]);
    draw_footer(frame, app, &palette, main_chunks[3]);

    // 弹窗覆盖在最上层
    if app.show_help {
        overlays::draw_help(frame, &palette);
    }
    if let Some(input) = &app.input {
        overlays::draw_input(frame, input, &palette);
    }
    if let Some(request) = &app.modal {
        overlays::draw_dialog(frame, request, &palette);
    }
}
