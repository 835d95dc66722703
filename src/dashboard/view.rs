//! View-model primitives shared by the controllers

use std::sync::Arc;

use parking_lot::RwLock;

/// A view model shared between its controller and the front end
pub type SharedView<T> = Arc<RwLock<T>>;

pub fn shared<T>(value: T) -> SharedView<T> {
    Arc::new(RwLock::new(value))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
        }
    }
}

/// Visual class of a status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    /// Neutral, e.g. "in progress"
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Inline status area (banner) owned by a controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusPanel {
    pub kind: StatusKind,
    pub text: String,
    pub visible: bool,
}

impl StatusPanel {
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.kind = kind;
        self.text = text.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// How a user action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Backend accepted the request
    Completed,
    /// Local precondition failed, nothing was sent
    Invalid,
    /// Operator declined the confirmation
    Cancelled,
    /// Request failed or was rejected
    Failed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_panel_show_hide() {
        let mut panel = StatusPanel::default();
        assert!(!panel.visible);
        panel.show(StatusKind::Error, "Выберите дату");
        assert!(panel.visible);
        assert_eq!(panel.kind, StatusKind::Error);
        panel.hide();
        assert!(!panel.visible);
        assert_eq!(panel.text, "Выберите дату");
    }
}
