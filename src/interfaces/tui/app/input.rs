//! 单行文本输入

use crate::dashboard::messages;

/// 输入框写入的目标字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    SettingsTimeout(u32),
    LogDate,
    BiometricName,
    BiometricPhotos,
    ArchiveHost,
    ArchiveUser,
    ArchivePath,
    ArchivePassword,
    ArchiveDate,
    ArchiveTimeFrom,
    ArchiveTimeTo,
}

impl InputTarget {
    pub fn title(self) -> String {
        match self {
            InputTarget::SettingsTimeout(camera) => format!("Таймаут, камера {} (сек)", camera),
            InputTarget::LogDate => "Дата логов (YYYY-MM-DD)".to_string(),
            InputTarget::BiometricName => "Имя пользователя".to_string(),
            InputTarget::BiometricPhotos => "Фотографии (пути через запятую)".to_string(),
            InputTarget::ArchiveHost => "Адрес сервера".to_string(),
            InputTarget::ArchiveUser => "Пользователь".to_string(),
            InputTarget::ArchivePath => "Путь к архиву".to_string(),
            InputTarget::ArchivePassword => messages::archive::PASSWORD_HINT.to_string(),
            InputTarget::ArchiveDate => "Дата (YYYY-MM-DD)".to_string(),
            InputTarget::ArchiveTimeFrom => "Время с (HH:MM)".to_string(),
            InputTarget::ArchiveTimeTo => "Время по (HH:MM)".to_string(),
        }
    }

    pub fn masked(self) -> bool {
        matches!(self, InputTarget::ArchivePassword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub target: InputTarget,
    pub value: String,
}

impl TextInput {
    pub fn new(target: InputTarget, value: impl Into<String>) -> Self {
        Self {
            target,
            value: value.into(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn display_value(&self) -> String {
        if self.target.masked() {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
