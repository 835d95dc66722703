//! App state
//!
//! 界面只保存光标、输入框和弹窗这类纯展示状态；业务状态全部在控制器视图里。

mod actions;
mod input;

pub use input::{InputTarget, TextInput};

use std::sync::Arc;

use tokio::sync::mpsc;

use super::dialogs::DialogRequest;
use crate::dashboard::{Dashboard, Page, SettingType};

/// 摄像头设置页中的一列控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsColumn {
    Flag(SettingType),
    Timeout,
    Sensitivity,
}

impl SettingsColumn {
    pub const ALL: [SettingsColumn; 6] = [
        SettingsColumn::Flag(SettingType::Faces),
        SettingsColumn::Flag(SettingType::Motion),
        SettingsColumn::Flag(SettingType::Recording),
        SettingsColumn::Flag(SettingType::Triggered),
        SettingsColumn::Timeout,
        SettingsColumn::Sensitivity,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SettingsColumn::Flag(setting) => setting.title(),
            SettingsColumn::Timeout => "Таймаут",
            SettingsColumn::Sensitivity => "Чувствительность",
        }
    }
}

/// 设置页光标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsCursor {
    pub camera: usize,
    pub column: usize,
}

impl SettingsCursor {
    pub fn column(&self) -> SettingsColumn {
        SettingsColumn::ALL[self.column % SettingsColumn::ALL.len()]
    }
}

pub struct App {
    pub dashboard: Arc<Dashboard>,
    dialog_queue: mpsc::UnboundedReceiver<DialogRequest>,

    // Modal state
    pub modal: Option<DialogRequest>,
    pub input: Option<TextInput>,
    pub show_help: bool,

    // Per-page cursors
    pub settings_cursor: SettingsCursor,
    pub mask_selected: usize,
    pub archive_selected: usize,
    /// 距离日志末尾的行数
    pub log_offset: usize,

    pub status_message: String,
}

impl App {
    pub fn new(
        dashboard: Arc<Dashboard>,
        dialog_queue: mpsc::UnboundedReceiver<DialogRequest>,
    ) -> Self {
        Self {
            dashboard,
            dialog_queue,
            modal: None,
            input: None,
            show_help: false,
            settings_cursor: SettingsCursor::default(),
            mask_selected: 0,
            archive_selected: 0,
            log_offset: 0,
            status_message: String::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.dashboard.router.active()
    }

    /// 取出下一个待处理的对话框（同一时间只展示一个）
    pub fn poll_dialogs(&mut self) {
        if self.modal.is_none()
            && let Ok(request) = self.dialog_queue.try_recv()
        {
            self.modal = Some(request);
        }
    }

    /// 回答当前对话框
    pub fn resolve_modal(&mut self, accepted: bool) {
        if let Some(request) = self.modal.take() {
            request.resolve(accepted);
        }
    }

    /// 设置页中光标所在的摄像头
    pub fn selected_camera(&self) -> Option<u32> {
        let view = self.dashboard.settings.view();
        let view = view.read();
        view.cameras
            .keys()
            .nth(self.settings_cursor.camera)
            .copied()
    }

    pub fn settings_camera_count(&self) -> usize {
        self.dashboard.settings.view().read().cameras.len()
    }

    pub fn mask_count(&self) -> usize {
        self.dashboard.masks.view().read().rows.len()
    }

    pub fn archive_row_count(&self) -> usize {
        self.dashboard.archive.view().read().rows().len()
    }

    pub fn log_line_count(&self) -> usize {
        self.dashboard.logs.view().read().lines.len()
    }

    /// 列表刷新后把越界的光标拉回末尾
    pub fn clamp_cursors(&mut self) {
        let clamp = |index: usize, len: usize| index.min(len.saturating_sub(1));
        self.settings_cursor.camera =
            clamp(self.settings_cursor.camera, self.settings_camera_count());
        self.mask_selected = clamp(self.mask_selected, self.mask_count());
        self.archive_selected = clamp(self.archive_selected, self.archive_row_count());
        self.log_offset = clamp(self.log_offset, self.log_line_count());
    }
}
