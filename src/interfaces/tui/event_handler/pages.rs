use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, InputTarget, SettingsColumn};
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

pub fn handle_dashboard_page(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('s') => app.start_system(),
        KeyCode::Char('x') => app.stop_system(),
        KeyCode::Char('r') => app.refresh_status(),
        KeyCode::Char('c') => app.cycle_camera_filter(),
        _ => {}
    }
}

pub fn handle_settings_page(app: &mut App, key_code: KeyCode) {
    let columns = SettingsColumn::ALL.len();
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_cursor.camera = app.settings_cursor.camera.saturating_sub(1)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = app.settings_camera_count().saturating_sub(1);
            app.settings_cursor.camera = (app.settings_cursor.camera + 1).min(last);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.settings_cursor.column = (app.settings_cursor.column + columns - 1) % columns;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.settings_cursor.column = (app.settings_cursor.column + 1) % columns
        }
        KeyCode::Char(' ') => app.activate_setting(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.drag_sensitivity(true),
        KeyCode::Char('-') => app.drag_sensitivity(false),
        KeyCode::Enter => {
            if app.settings_cursor.column() == SettingsColumn::Sensitivity {
                app.commit_sensitivity();
            } else {
                app.activate_setting();
            }
        }
        KeyCode::Char('a') => app.apply_camera(),
        KeyCode::Char('r') => app.reload_settings(),
        _ => {}
    }
}

pub fn handle_masks_page(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.mask_selected = app.mask_selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            let last = app.mask_count().saturating_sub(1);
            app.mask_selected = (app.mask_selected + 1).min(last);
        }
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_mask(),
        KeyCode::Char('r') => app.refresh_masks(),
        _ => {}
    }
}

pub fn handle_logs_page(app: &mut App, key_code: KeyCode) {
    let step = PAGE_SCROLL_STEP as isize;
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_logs(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_logs(-1),
        KeyCode::PageUp => app.scroll_logs(step),
        KeyCode::PageDown => app.scroll_logs(-step),
        KeyCode::End => app.log_offset = 0,
        KeyCode::Char('f') => app.cycle_log_level(),
        KeyCode::Char('d') => app.begin_input(InputTarget::LogDate),
        KeyCode::Char('r') => app.refresh_logs(),
        _ => {}
    }
}

pub fn handle_biometric_page(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('n') => app.begin_input(InputTarget::BiometricName),
        KeyCode::Char('p') => app.begin_input(InputTarget::BiometricPhotos),
        KeyCode::Char('u') => app.upload_photos(),
        KeyCode::Char('t') => app.train_model(),
        _ => {}
    }
}

pub fn handle_archive_page(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('h') => app.begin_input(InputTarget::ArchiveHost),
        KeyCode::Char('u') => app.begin_input(InputTarget::ArchiveUser),
        KeyCode::Char('p') => app.begin_input(InputTarget::ArchivePath),
        KeyCode::Char('w') => app.begin_input(InputTarget::ArchivePassword),
        KeyCode::Char('S') => app.save_archive_settings(),
        KeyCode::Char('d') => app.begin_input(InputTarget::ArchiveDate),
        KeyCode::Char('f') => app.begin_input(InputTarget::ArchiveTimeFrom),
        KeyCode::Char('t') => app.begin_input(InputTarget::ArchiveTimeTo),
        KeyCode::Enter => app.search_archive(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.archive_selected = app.archive_selected.saturating_sub(1)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = app.archive_row_count().saturating_sub(1);
            app.archive_selected = (app.archive_selected + 1).min(last);
        }
        KeyCode::Char(' ') => app.toggle_archive_row(),
        KeyCode::Char('a') => app.toggle_archive_all(),
        KeyCode::Char('g') => app.download_archive(),
        _ => {}
    }
}
