//! Camera settings synchronization
//!
//! Mirrors the server-held per-camera configuration into local controls and
//! pushes each user edit back as one isolated update. Edits are optimistic:
//! a failed update is logged and remembered in `last_sync_error`, the control
//! keeps the value the operator chose.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info, warn};

use super::dialogs::Dialogs;
use super::generation::RequestGeneration;
use super::messages;
use super::view::{Outcome, SharedView, shared};
use crate::client::{CameraSettingUpdate, DashboardApi, SensitivityUpdate, SettingsSnapshot};
use crate::errors::DashboardError;

pub const DEFAULT_TIMEOUT_SECS: u32 = 10;
pub const DEFAULT_SENSITIVITY: u32 = 25;
pub const MIN_SENSITIVITY: u32 = 5;
pub const MAX_SENSITIVITY: u32 = 100;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Faces,
    Motion,
    Recording,
    Triggered,
}

impl SettingType {
    pub fn title(self) -> &'static str {
        match self {
            SettingType::Faces => "Лица",
            SettingType::Motion => "Движение",
            SettingType::Recording => "Запись",
            SettingType::Triggered => "По событию",
        }
    }
}

/// A checkbox fixed by policy: never written by a snapshot, never editable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedSetting {
    pub camera_id: u32,
    pub setting: SettingType,
}

impl FromStr for LockedSetting {
    type Err = DashboardError;

    /// `"<camera>:<setting>"`, e.g. `"0:faces"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DashboardError::config(format!("Invalid locked setting: {}", s));
        let (camera, setting) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            camera_id: camera.trim().parse().map_err(|_| invalid())?,
            setting: setting.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for LockedSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.camera_id, self.setting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checkbox {
    pub checked: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraControls {
    pub flags: BTreeMap<SettingType, Checkbox>,
    pub timeout: u32,
    pub sensitivity: u32,
    /// Live value label next to the slider
    pub sensitivity_label: String,
}

impl Default for CameraControls {
    fn default() -> Self {
        Self {
            flags: SettingType::iter().map(|s| (s, Checkbox::default())).collect(),
            timeout: DEFAULT_TIMEOUT_SECS,
            sensitivity: DEFAULT_SENSITIVITY,
            sensitivity_label: DEFAULT_SENSITIVITY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsView {
    pub cameras: BTreeMap<u32, CameraControls>,
    pub last_sync_error: Option<String>,
}

fn clamp_sensitivity(value: u32) -> u32 {
    value.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY)
}

pub struct SettingsController {
    api: Arc<dyn DashboardApi>,
    dialogs: Arc<dyn Dialogs>,
    view: SharedView<SettingsView>,
    load_generation: RequestGeneration,
}

impl SettingsController {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        dialogs: Arc<dyn Dialogs>,
        cameras: &[u32],
        locked: &[LockedSetting],
    ) -> Self {
        let mut view = SettingsView::default();
        for &camera_id in cameras {
            view.cameras.insert(camera_id, CameraControls::default());
        }
        for lock in locked {
            match view
                .cameras
                .get_mut(&lock.camera_id)
                .and_then(|c| c.flags.get_mut(&lock.setting))
            {
                Some(checkbox) => checkbox.locked = true,
                None => warn!("Locked setting {} refers to an unknown camera", lock),
            }
        }

        Self {
            api,
            dialogs,
            view: shared(view),
            load_generation: RequestGeneration::new(),
        }
    }

    pub fn view(&self) -> SharedView<SettingsView> {
        self.view.clone()
    }

    /// Fetch the full snapshot and apply it to every known control
    pub async fn load(&self) -> Outcome {
        let generation = self.load_generation.issue();
        match self.api.camera_settings().await {
            Ok(snapshot) => {
                if !self.load_generation.is_current(generation) {
                    debug!("Dropping stale settings snapshot");
                    return Outcome::Completed;
                }
                self.apply_snapshot(&snapshot);
                Outcome::Completed
            }
            Err(e) => {
                warn!("Error loading settings: {}", e);
                Outcome::Failed
            }
        }
    }

    fn apply_snapshot(&self, snapshot: &SettingsSnapshot) {
        let mut view = self.view.write();

        for (camera_id, flags) in &snapshot.settings {
            let Some(controls) = view.cameras.get_mut(camera_id) else {
                debug!("Snapshot has camera {} with no controls", camera_id);
                continue;
            };
            for (name, &value) in flags {
                let Ok(setting) = name.parse::<SettingType>() else {
                    debug!("Unknown setting type {} for camera {}", name, camera_id);
                    continue;
                };
                if let Some(checkbox) = controls.flags.get_mut(&setting)
                    && !checkbox.locked
                {
                    checkbox.checked = value;
                }
            }
            controls.timeout = match snapshot.timeouts.get(camera_id) {
                Some(&timeout) if timeout > 0 => timeout,
                _ => DEFAULT_TIMEOUT_SECS,
            };
        }

        for (camera_id, &value) in &snapshot.motion_sensitivity {
            if let Some(controls) = view.cameras.get_mut(camera_id) {
                controls.sensitivity = value;
                controls.sensitivity_label = value.to_string();
            }
        }
    }

    pub async fn set_flag(&self, camera_id: u32, setting: SettingType, checked: bool) -> Outcome {
        {
            let mut view = self.view.write();
            let Some(checkbox) = view
                .cameras
                .get_mut(&camera_id)
                .and_then(|c| c.flags.get_mut(&setting))
            else {
                warn!("No {} control for camera {}", setting, camera_id);
                return Outcome::Invalid;
            };
            if checkbox.locked {
                warn!("Setting {} for camera {} is locked", setting, camera_id);
                return Outcome::Invalid;
            }
            checkbox.checked = checked;
        }

        let update = CameraSettingUpdate::flag(camera_id, setting.to_string(), checked);
        match self.api.update_camera_setting(&update).await {
            Ok(_) => {
                debug!("Setting {} for camera {} = {}", setting, camera_id, checked);
                self.record_sync(None)
            }
            Err(e) => {
                warn!("Error updating setting: {}", e);
                self.record_sync(Some(e.user_message()))
            }
        }
    }

    pub async fn set_timeout(&self, camera_id: u32, timeout: u32) -> Outcome {
        {
            let mut view = self.view.write();
            let Some(controls) = view.cameras.get_mut(&camera_id) else {
                warn!("No timeout control for camera {}", camera_id);
                return Outcome::Invalid;
            };
            controls.timeout = timeout;
        }

        match self
            .api
            .update_camera_setting(&CameraSettingUpdate::timeout(camera_id, timeout))
            .await
        {
            Ok(_) => {
                debug!("Timeout for camera {} = {}", camera_id, timeout);
                self.record_sync(None)
            }
            Err(e) => {
                warn!("Error updating timeout: {}", e);
                self.record_sync(Some(e.user_message()))
            }
        }
    }

    /// Intermediate slider position; local only
    pub fn drag_sensitivity(&self, camera_id: u32, value: u32) {
        let value = clamp_sensitivity(value);
        if let Some(controls) = self.view.write().cameras.get_mut(&camera_id) {
            controls.sensitivity = value;
            controls.sensitivity_label = value.to_string();
        }
    }

    /// Slider released: send the value
    pub async fn commit_sensitivity(&self, camera_id: u32, value: u32) -> Outcome {
        let value = clamp_sensitivity(value);
        {
            let mut view = self.view.write();
            let Some(controls) = view.cameras.get_mut(&camera_id) else {
                warn!("No sensitivity control for camera {}", camera_id);
                return Outcome::Invalid;
            };
            controls.sensitivity = value;
            controls.sensitivity_label = value.to_string();
        }

        let update = SensitivityUpdate {
            camera_id,
            sensitivity: value,
        };
        match self.api.update_sensitivity(&update).await {
            Ok(ack) => {
                debug!(
                    "Camera {} sensitivity updated: {:?}",
                    camera_id, ack.sensitivity
                );
                self.record_sync(None)
            }
            Err(e) => {
                warn!("Error updating sensitivity: {}", e);
                self.record_sync(Some(e.user_message()))
            }
        }
    }

    /// Push the stored settings of one camera to the running system
    pub async fn apply(&self, camera_id: u32) -> Outcome {
        match self.api.apply_camera_settings(camera_id).await {
            Ok(_) => {
                info!("Settings applied to camera {}", camera_id);
                self.dialogs.alert(&messages::settings::applied(camera_id)).await;
                Outcome::Completed
            }
            Err(e) => {
                warn!("Failed to apply settings to camera {}: {}", camera_id, e);
                self.dialogs.alert(&e.user_message()).await;
                Outcome::Failed
            }
        }
    }

    fn record_sync(&self, error: Option<String>) -> Outcome {
        let outcome = if error.is_some() {
            Outcome::Failed
        } else {
            Outcome::Completed
        };
        self.view.write().last_sync_error = error;
        outcome
    }
}
