//! Backend client layer
//!
//! Every controller talks to the CCTV backend through the [`DashboardApi`]
//! trait. [`HttpClient`] is the production implementation; tests plug in a
//! scripted in-memory backend.
//!
//! # Error mapping
//!
//! - Transport failures (connect, timeout, TLS) → `ClientError::Network`
//! - Non-2xx responses → `ClientError::Server` carrying the body's `error` field
//! - Bodies that do not match the expected shape → `ClientError::Decode`

mod http;
pub mod types;

pub use http::HttpClient;
pub use types::*;

use std::fmt;

use async_trait::async_trait;

/// Message used when the backend rejects a request without an `error` field
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request never produced a response
    Network(String),
    /// Backend answered with a non-success status
    Server { status: u16, message: String },
    /// Response body could not be decoded
    Decode(String),
    /// Base URL or endpoint could not be built
    InvalidUrl(String),
    /// Local file needed for the request could not be read
    Io(String),
}

impl ClientError {
    /// Message shown to the operator in alerts and status panels.
    ///
    /// Backend rejections read "Ошибка: …", everything that never reached a
    /// decodable answer reads "Ошибка соединения: …".
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => format!("Ошибка: {}", message),
            ClientError::Network(msg)
            | ClientError::Decode(msg)
            | ClientError::InvalidUrl(msg)
            | ClientError::Io(msg) => format!("Ошибка соединения: {}", msg),
        }
    }

    /// The bare reason without the UI prefix
    pub fn reason(&self) -> &str {
        match self {
            ClientError::Server { message, .. } => message,
            ClientError::Network(msg)
            | ClientError::Decode(msg)
            | ClientError::InvalidUrl(msg)
            | ClientError::Io(msg) => msg,
        }
    }

    pub fn is_server_rejection(&self) -> bool {
        matches!(self, ClientError::Server { .. })
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {}", msg),
            ClientError::Server { status, message } => write!(f, "HTTP {}: {}", status, message),
            ClientError::Decode(msg) => write!(f, "decode error: {}", msg),
            ClientError::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
            ClientError::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

pub type ClientResult<T> = Result<T, ClientError>;

// ============ DashboardApi ============

/// The backend surface the dashboard consumes.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Form login; the session is kept by the implementation
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResult>;

    async fn system_status(&self) -> ClientResult<SystemStatus>;
    async fn start_system(&self) -> ClientResult<Ack>;
    async fn stop_system(&self) -> ClientResult<Ack>;

    async fn camera_settings(&self) -> ClientResult<SettingsSnapshot>;
    async fn update_camera_setting(&self, update: &CameraSettingUpdate) -> ClientResult<Ack>;
    async fn apply_camera_settings(&self, camera_id: u32) -> ClientResult<Ack>;
    async fn update_sensitivity(&self, update: &SensitivityUpdate)
    -> ClientResult<SensitivityAck>;

    async fn list_masks(&self) -> ClientResult<MaskInventory>;
    async fn delete_mask(&self, filename: &str) -> ClientResult<Ack>;

    async fn fetch_logs(&self, query: &LogQuery) -> ClientResult<LogPage>;

    async fn train_model(&self) -> ClientResult<Ack>;
    async fn upload_photos(&self, user_name: &str, photos: Vec<PhotoUpload>) -> ClientResult<Ack>;

    async fn archive_settings(&self) -> ClientResult<ArchiveSettings>;
    async fn save_archive_settings(
        &self,
        update: &ArchiveSettingsUpdate,
    ) -> ClientResult<ArchiveSettings>;
    async fn search_archive(&self, request: &ArchiveSearchRequest)
    -> ClientResult<ArchiveSearchResult>;
    async fn request_archive_download(
        &self,
        request: &ArchiveDownloadRequest,
    ) -> ClientResult<ArchiveDownloadTicket>;

    /// Fetch the bundle behind a `download_url` handed out by the backend
    async fn fetch_download(&self, url: &str) -> ClientResult<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_server() {
        let err = ClientError::Server {
            status: 400,
            message: "Система уже запущена".into(),
        };
        assert_eq!(err.user_message(), "Ошибка: Система уже запущена");
        assert!(err.is_server_rejection());
    }

    #[test]
    fn test_user_message_network() {
        let err = ClientError::Network("connection refused".into());
        assert_eq!(err.user_message(), "Ошибка соединения: connection refused");
        assert!(!err.is_server_rejection());
    }

    #[test]
    fn test_display_server_error() {
        let err = ClientError::Server {
            status: 404,
            message: "Mask not found".into(),
        };
        assert_eq!(format!("{}", err), "HTTP 404: Mask not found");
        assert_eq!(err.reason(), "Mask not found");
    }

    #[test]
    fn test_client_error_is_std_error() {
        let err = ClientError::Decode("bad json".into());
        let _: &dyn std::error::Error = &err;
    }
}
