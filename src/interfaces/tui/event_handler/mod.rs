//! Event handling for TUI
//!
//! 按优先级分发按键：对话框 > 输入框 > 帮助 > 全局快捷键 > 当前页面

mod pages;

use ratatui::crossterm::event::KeyCode;

use crate::dashboard::Page;
use crate::interfaces::tui::app::App;

use pages::*;

/// Handle one key press. Returns `true` when the app should exit
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    if app.modal.is_some() {
        handle_modal(app, key_code);
        return false;
    }

    if app.input.is_some() {
        handle_input(app, key_code);
        return false;
    }

    if app.show_help {
        if matches!(key_code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return false;
    }

    match key_code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab => app.next_page(),
        KeyCode::F(2) => app.toggle_theme(),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            if let Some(page) = Page::from_index(index) {
                app.show_page(page);
            }
        }
        code => match app.page() {
            Page::Dashboard => handle_dashboard_page(app, code),
            Page::Settings => handle_settings_page(app, code),
            Page::Masks => handle_masks_page(app, code),
            Page::Logs => handle_logs_page(app, code),
            Page::Biometric => handle_biometric_page(app, code),
            Page::Archive => handle_archive_page(app, code),
        },
    }
    false
}

fn handle_modal(app: &mut App, key_code: KeyCode) {
    let is_confirm = matches!(
        app.modal,
        Some(crate::interfaces::tui::dialogs::DialogRequest::Confirm { .. })
    );
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') if is_confirm => app.resolve_modal(true),
        KeyCode::Enter if is_confirm => app.resolve_modal(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_modal(false),
        KeyCode::Enter => app.resolve_modal(false),
        _ => {}
    }
}

fn handle_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => {
            if let Some(input) = app.input.as_mut() {
                input.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.input.as_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
}
