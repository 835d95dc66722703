//! reqwest-backed implementation of [`DashboardApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use super::types::*;
use super::{ClientError, ClientResult, DashboardApi, UNKNOWN_ERROR};

/// HTTP client for the CCTV backend.
///
/// Holds a cookie jar so the session obtained by [`DashboardApi::login`] is
/// sent with every later request.
pub struct HttpClient {
    base: Url,
    http: Client,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let http = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path)?;
        trace!("GET {}", url);
        let resp = self.send(self.http.get(url)).await?;
        decode(resp).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path)?;
        trace!("POST {}", url);
        let resp = self
            .send(self.http.post(url).json(&serde_json::json!({})))
            .await?;
        decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        trace!("POST {}", url);
        let resp = self.send(self.http.post(url).json(body)).await?;
        decode(resp).await
    }
}

/// Decode a JSON answer, turning non-success statuses into `ClientError::Server`
async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    if status.is_success() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    debug!("Backend rejected request with {}: {}", status, message);
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl DashboardApi for HttpClient {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResult> {
        let url = self.endpoint("/login")?;
        let resp = self
            .send(
                self.http
                    .post(url)
                    .form(&[("username", username), ("password", password)]),
            )
            .await?;
        // 401 still carries {success: false, error}
        resp.json::<LoginResult>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn system_status(&self) -> ClientResult<SystemStatus> {
        self.get_json("/api/system/status").await
    }

    async fn start_system(&self) -> ClientResult<Ack> {
        self.post_empty("/api/system/start").await
    }

    async fn stop_system(&self) -> ClientResult<Ack> {
        self.post_empty("/api/system/stop").await
    }

    async fn camera_settings(&self) -> ClientResult<SettingsSnapshot> {
        self.get_json("/api/settings/cameras").await
    }

    async fn update_camera_setting(&self, update: &CameraSettingUpdate) -> ClientResult<Ack> {
        self.post_json("/api/settings/cameras", update).await
    }

    async fn apply_camera_settings(&self, camera_id: u32) -> ClientResult<Ack> {
        self.post_json(
            "/api/settings/apply",
            &serde_json::json!({ "camera_id": camera_id }),
        )
        .await
    }

    async fn update_sensitivity(
        &self,
        update: &SensitivityUpdate,
    ) -> ClientResult<SensitivityAck> {
        self.post_json("/api/settings/sensitivity", update).await
    }

    async fn list_masks(&self) -> ClientResult<MaskInventory> {
        self.get_json("/api/masks/list").await
    }

    async fn delete_mask(&self, filename: &str) -> ClientResult<Ack> {
        self.post_json(
            "/api/masks/delete",
            &serde_json::json!({ "filename": filename }),
        )
        .await
    }

    async fn fetch_logs(&self, query: &LogQuery) -> ClientResult<LogPage> {
        let url = self.endpoint("/api/logs")?;
        trace!("GET {} {:?}", url, query);
        let resp = self.send(self.http.get(url).query(query)).await?;
        decode(resp).await
    }

    async fn train_model(&self) -> ClientResult<Ack> {
        self.post_empty("/api/biometric/train").await
    }

    async fn upload_photos(&self, user_name: &str, photos: Vec<PhotoUpload>) -> ClientResult<Ack> {
        let url = self.endpoint("/api/biometric/upload")?;
        let mut form = Form::new().text("user_name", user_name.to_string());
        for photo in photos {
            form = form.part("files", Part::bytes(photo.bytes).file_name(photo.file_name));
        }
        let resp = self.send(self.http.post(url).multipart(form)).await?;
        decode(resp).await
    }

    async fn archive_settings(&self) -> ClientResult<ArchiveSettings> {
        self.get_json("/api/archive/settings").await
    }

    async fn save_archive_settings(
        &self,
        update: &ArchiveSettingsUpdate,
    ) -> ClientResult<ArchiveSettings> {
        self.post_json("/api/archive/settings", update).await
    }

    async fn search_archive(
        &self,
        request: &ArchiveSearchRequest,
    ) -> ClientResult<ArchiveSearchResult> {
        self.post_json("/api/archive/search", request).await
    }

    async fn request_archive_download(
        &self,
        request: &ArchiveDownloadRequest,
    ) -> ClientResult<ArchiveDownloadTicket> {
        self.post_json("/api/archive/download", request).await
    }

    async fn fetch_download(&self, url: &str) -> ClientResult<Vec<u8>> {
        // download_url may be absolute or relative to the backend
        let url = self.endpoint(url)?;
        let resp = self.send(self.http.get(url)).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: UNKNOWN_ERROR.to_string(),
            });
        }
        resp.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ClientError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_join() {
        let client = HttpClient::new("http://127.0.0.1:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint("/api/system/status").unwrap().as_str(),
            "http://127.0.0.1:5000/api/system/status"
        );
        assert_eq!(
            client
                .endpoint("http://archive.local/bundle.zip")
                .unwrap()
                .as_str(),
            "http://archive.local/bundle.zip"
        );
    }
}
