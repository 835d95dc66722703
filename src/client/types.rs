//! Wire types for the backend JSON contracts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generic acknowledgement (`{}`, `{success: true}` or `{message}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `/login` answer. Rejections also arrive in this shape (with HTTP 401).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub running: bool,
}

/// Full point-in-time read of camera configuration.
///
/// Flag names are kept as strings so the snapshot survives setting types this
/// client has no control for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub settings: BTreeMap<u32, BTreeMap<String, bool>>,
    #[serde(default)]
    pub timeouts: BTreeMap<u32, u32>,
    #[serde(default)]
    pub motion_sensitivity: BTreeMap<u32, u32>,
}

/// Isolated update of one camera field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraSettingUpdate {
    pub camera_id: u32,
    pub setting_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl CameraSettingUpdate {
    pub fn flag(camera_id: u32, setting_type: impl Into<String>, value: bool) -> Self {
        Self {
            camera_id,
            setting_type: setting_type.into(),
            value: Some(value),
            timeout: None,
        }
    }

    pub fn timeout(camera_id: u32, timeout: u32) -> Self {
        Self {
            camera_id,
            setting_type: "timeout".to_string(),
            value: None,
            timeout: Some(timeout),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensitivityUpdate {
    pub camera_id: u32,
    pub sensitivity: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SensitivityAck {
    #[serde(default)]
    pub sensitivity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskDescriptor {
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MaskInventory {
    #[serde(default)]
    pub masks: BTreeMap<u32, Vec<MaskDescriptor>>,
}

/// Query string of `/api/logs`; empty filters are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub logs: Vec<String>,
}

/// One photo of a biometric enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Remote archive connection as reported by the backend.
///
/// `remote_password` is only ever a hint (e.g. a masked value), never the
/// stored secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArchiveSettings {
    #[serde(default)]
    pub remote_user: String,
    #[serde(default)]
    pub remote_host: String,
    #[serde(default)]
    pub remote_path: String,
    #[serde(default)]
    pub remote_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveSettingsUpdate {
    pub remote_user: String,
    pub remote_host: String,
    pub remote_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveSearchRequest {
    pub date: String,
    pub time_from: String,
    pub time_to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveFile {
    pub path: String,
    pub filename: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArchiveSearchResult {
    #[serde(default)]
    pub files: Vec<ArchiveFile>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveFileRef {
    pub path: String,
    pub filename: String,
}

impl From<&ArchiveFile> for ArchiveFileRef {
    fn from(file: &ArchiveFile) -> Self {
        Self {
            path: file.path.clone(),
            filename: file.filename.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveDownloadRequest {
    pub files: Vec<ArchiveFileRef>,
}

/// Answer of `/api/archive/download`; `errors` lists per-file failures
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArchiveDownloadTicket {
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Body of any non-success answer
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
