//! 界面操作
//!
//! 网络操作一律放到后台任务里执行，事件循环不等待结果；
//! 结果通过控制器视图和对话框回到界面。

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use super::{App, InputTarget, SettingsColumn, TextInput};
use crate::dashboard::{Outcome, Page};
use crate::interfaces::tui::constants::SENSITIVITY_STEP;

impl App {
    fn spawn<F>(&self, action: &'static str, operation: F)
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        tokio::spawn(async move {
            let outcome = operation.await;
            debug!("{} finished: {:?}", action, outcome);
        });
    }

    pub fn show_page(&mut self, page: Page) {
        let dashboard = self.dashboard.clone();
        tokio::spawn(async move {
            dashboard.show_page(page).await;
        });
        self.status_message.clear();
    }

    pub fn next_page(&mut self) {
        self.show_page(self.page().next());
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.dashboard.theme.toggle();
        self.status_message = format!("{} ({})", self.dashboard.theme.label(), theme);
    }

    // ============ Dashboard ============

    /// 按钮不可用时按键无效
    pub fn start_system(&self) {
        if !self.dashboard.system.view().read().start.enabled {
            return;
        }
        let system = self.dashboard.system.clone();
        self.spawn("start", async move { system.start().await });
    }

    pub fn stop_system(&self) {
        if !self.dashboard.system.view().read().stop.enabled {
            return;
        }
        let system = self.dashboard.system.clone();
        self.spawn("stop", async move { system.stop().await });
    }

    pub fn refresh_status(&self) {
        let system = self.dashboard.system.clone();
        self.spawn("status", async move { system.refresh_status().await });
    }

    pub fn cycle_camera_filter(&mut self) {
        let filter = self.dashboard.grid.cycle();
        self.status_message = format!("Камеры: {}", filter);
    }

    // ============ Settings ============

    pub fn reload_settings(&self) {
        let settings = self.dashboard.settings.clone();
        self.spawn("settings load", async move { settings.load().await });
    }

    /// Space：切换复选框，或在数值列上打开输入
    pub fn activate_setting(&mut self) {
        let Some(camera) = self.selected_camera() else {
            return;
        };
        match self.settings_cursor.column() {
            SettingsColumn::Flag(setting) => {
                let checked = {
                    let view = self.dashboard.settings.view();
                    let view = view.read();
                    view.cameras
                        .get(&camera)
                        .and_then(|controls| controls.flags.get(&setting))
                        .map(|checkbox| checkbox.checked)
                };
                if let Some(checked) = checked {
                    let settings = self.dashboard.settings.clone();
                    self.spawn("set flag", async move {
                        settings.set_flag(camera, setting, !checked).await
                    });
                }
            }
            SettingsColumn::Timeout => self.begin_input(InputTarget::SettingsTimeout(camera)),
            SettingsColumn::Sensitivity => self.commit_sensitivity(),
        }
    }

    fn camera_value(
        &self,
        camera: u32,
        pick: impl Fn(&crate::dashboard::settings::CameraControls) -> u32,
    ) -> Option<u32> {
        let view = self.dashboard.settings.view();
        let view = view.read();
        view.cameras.get(&camera).map(pick)
    }

    /// 滑块拖动只改本地值，Enter 松开时才提交
    pub fn drag_sensitivity(&mut self, up: bool) {
        let Some(camera) = self.selected_camera() else {
            return;
        };
        if self.settings_cursor.column() != SettingsColumn::Sensitivity {
            return;
        }
        if let Some(current) = self.camera_value(camera, |c| c.sensitivity) {
            let value = if up {
                current.saturating_add(SENSITIVITY_STEP)
            } else {
                current.saturating_sub(SENSITIVITY_STEP)
            };
            self.dashboard.settings.drag_sensitivity(camera, value);
        }
    }

    pub fn commit_sensitivity(&mut self) {
        let Some(camera) = self.selected_camera() else {
            return;
        };
        if let Some(value) = self.camera_value(camera, |c| c.sensitivity) {
            let settings = self.dashboard.settings.clone();
            self.spawn("commit sensitivity", async move {
                settings.commit_sensitivity(camera, value).await
            });
        }
    }

    pub fn apply_camera(&self) {
        if let Some(camera) = self.selected_camera() {
            let settings = self.dashboard.settings.clone();
            self.spawn("apply", async move { settings.apply(camera).await });
        }
    }

    // ============ Masks ============

    pub fn refresh_masks(&self) {
        let masks = self.dashboard.masks.clone();
        self.spawn("masks", async move { masks.refresh().await });
    }

    pub fn delete_selected_mask(&self) {
        let filename = {
            let view = self.dashboard.masks.view();
            let view = view.read();
            view.rows
                .get(self.mask_selected)
                .map(|row| row.filename.clone())
        };
        if let Some(filename) = filename {
            let masks = self.dashboard.masks.clone();
            self.spawn("delete mask", async move { masks.delete(&filename).await });
        }
    }

    // ============ Logs ============

    pub fn refresh_logs(&mut self) {
        self.log_offset = 0;
        let logs = self.dashboard.logs.clone();
        self.spawn("logs", async move { logs.refresh().await });
    }

    pub fn cycle_log_level(&mut self) {
        self.log_offset = 0;
        let logs = self.dashboard.logs.clone();
        self.spawn("log level", async move { logs.cycle_status_filter().await });
    }

    pub fn scroll_logs(&mut self, lines_up: isize) {
        let max = self.log_line_count().saturating_sub(1);
        self.log_offset = self.log_offset.saturating_add_signed(lines_up).min(max);
    }

    // ============ Biometric ============

    pub fn train_model(&self) {
        let biometric = self.dashboard.biometric.clone();
        self.spawn("train", async move { biometric.train().await });
    }

    pub fn upload_photos(&self) {
        let biometric = self.dashboard.biometric.clone();
        self.spawn("upload", async move { biometric.upload().await });
    }

    // ============ Archive ============

    pub fn save_archive_settings(&self) {
        let archive = self.dashboard.archive.clone();
        self.spawn("archive settings", async move { archive.save_settings().await });
    }

    pub fn search_archive(&mut self) {
        self.archive_selected = 0;
        let archive = self.dashboard.archive.clone();
        self.spawn("archive search", async move { archive.search().await });
    }

    pub fn toggle_archive_row(&self) {
        self.dashboard.archive.toggle_file(self.archive_selected);
    }

    pub fn toggle_archive_all(&self) {
        self.dashboard.archive.toggle_select_all();
    }

    pub fn download_archive(&self) {
        let archive = self.dashboard.archive.clone();
        self.spawn("archive download", async move { archive.download().await });
    }

    // ============ Text input ============

    /// 打开输入框，预填当前值
    pub fn begin_input(&mut self, target: InputTarget) {
        let value = match target {
            InputTarget::SettingsTimeout(camera) => self
                .camera_value(camera, |c| c.timeout)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            InputTarget::LogDate => self.dashboard.logs.view().read().date_filter.clone(),
            InputTarget::BiometricName => self.dashboard.biometric.view().read().user_name.clone(),
            InputTarget::BiometricPhotos => self
                .dashboard
                .biometric
                .view()
                .read()
                .photos
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            InputTarget::ArchivePassword => String::new(),
            _ => {
                let view = self.dashboard.archive.view();
                let view = view.read();
                match target {
                    InputTarget::ArchiveHost => view.form.remote_host.clone(),
                    InputTarget::ArchiveUser => view.form.remote_user.clone(),
                    InputTarget::ArchivePath => view.form.remote_path.clone(),
                    InputTarget::ArchiveDate => view.date.clone(),
                    InputTarget::ArchiveTimeFrom => view.time_from.clone(),
                    InputTarget::ArchiveTimeTo => view.time_to.clone(),
                    _ => String::new(),
                }
            }
        };
        self.input = Some(TextInput::new(target, value));
    }

    /// Enter：把输入写回控制器
    pub fn submit_input(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };
        let value = input.value.trim().to_string();
        let archive = self.dashboard.archive.clone();
        match input.target {
            InputTarget::SettingsTimeout(camera) => match value.parse::<u32>() {
                Ok(timeout) => {
                    let settings = self.dashboard.settings.clone();
                    self.spawn("set timeout", async move {
                        settings.set_timeout(camera, timeout).await
                    });
                }
                Err(_) => self.status_message = format!("Некорректное число: {}", value),
            },
            InputTarget::LogDate => {
                self.log_offset = 0;
                let logs = self.dashboard.logs.clone();
                self.spawn("log date", async move { logs.set_date_filter(&value).await });
            }
            InputTarget::BiometricName => self.dashboard.biometric.set_user_name(&value),
            InputTarget::BiometricPhotos => {
                let photos: Vec<PathBuf> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect();
                self.dashboard.biometric.select_photos(photos);
            }
            InputTarget::ArchiveHost => archive.set_remote_host(&value),
            InputTarget::ArchiveUser => archive.set_remote_user(&value),
            InputTarget::ArchivePath => archive.set_remote_path(&value),
            // 密码原样保存，不做 trim
            InputTarget::ArchivePassword => archive.set_password(&input.value),
            InputTarget::ArchiveDate => archive.set_date(&value),
            InputTarget::ArchiveTimeFrom => {
                let to = archive.view().read().time_to.clone();
                archive.set_time_range(&value, &to);
            }
            InputTarget::ArchiveTimeTo => {
                let from = archive.view().read().time_from.clone();
                archive.set_time_range(&from, &value);
            }
        }
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
    }
}
