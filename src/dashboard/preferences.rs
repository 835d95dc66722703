//! Durable local preferences
//!
//! A flat string key/value table stored as TOML. Every `set` writes the file
//! through immediately. A missing or unreadable file is treated as empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::{DashboardError, Result};

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl LocalStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        debug!("Loaded {} preference(s) from {}", entries.len(), path.display());
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let snapshot = {
            let mut entries = self.entries.write();
            entries.insert(key.to_string(), value.to_string());
            entries.clone()
        };
        self.persist(&snapshot)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                DashboardError::preferences(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let content = toml::to_string(entries)?;
        std::fs::write(&self.path, content).map_err(|e| {
            DashboardError::preferences(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!("Cannot read preferences {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };
    match toml::from_str(&content) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Ignoring malformed preferences {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}
