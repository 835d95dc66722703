//! Day/night theme preference

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::messages;
use super::preferences::LocalStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 只有 "light" 是浅色，其余一律按深色处理
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label shown on the toggle control for this theme
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => messages::theme::DAY,
            Theme::Dark => messages::theme::NIGHT,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeStore {
    store: Arc<LocalStore>,
    current: RwLock<Theme>,
}

impl ThemeStore {
    pub fn new(store: Arc<LocalStore>) -> Self {
        let current = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self {
            store,
            current: RwLock::new(current),
        }
    }

    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    pub fn label(&self) -> &'static str {
        self.current().label()
    }

    /// Flip the theme and persist it. A failed write keeps the in-memory
    /// theme switched; the next toggle tries again.
    pub fn toggle(&self) -> Theme {
        let next = {
            let mut current = self.current.write();
            *current = current.toggled();
            *current
        };
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
        info!("Theme switched to {}", next);
        next
    }
}
