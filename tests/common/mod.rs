//! Shared test fixtures: a scripted in-memory backend and recording dialogs

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use octo_dashboard::client::*;
use octo_dashboard::dashboard::{Dashboard, DashboardOptions, Dialogs};

pub fn server_error(message: &str) -> ClientError {
    ClientError::Server {
        status: 500,
        message: message.to_string(),
    }
}

pub fn network_error() -> ClientError {
    ClientError::Network("connection refused".to_string())
}

/// Scripted backend.
///
/// Every endpoint answers with the value currently stored in its slot; the
/// answer is captured when the call starts, before any scripted delay.
pub struct MockApi {
    calls: Mutex<Vec<String>>,
    delays: Mutex<HashMap<&'static str, VecDeque<Duration>>>,

    pub login: Mutex<ClientResult<LoginResult>>,
    pub status: Mutex<ClientResult<SystemStatus>>,
    pub start: Mutex<ClientResult<Ack>>,
    pub stop: Mutex<ClientResult<Ack>>,
    pub snapshot: Mutex<ClientResult<SettingsSnapshot>>,
    pub setting_update: Mutex<ClientResult<Ack>>,
    pub apply: Mutex<ClientResult<Ack>>,
    pub sensitivity: Mutex<ClientResult<SensitivityAck>>,
    pub masks: Mutex<ClientResult<MaskInventory>>,
    pub delete_mask: Mutex<ClientResult<Ack>>,
    pub logs: Mutex<ClientResult<LogPage>>,
    pub train: Mutex<ClientResult<Ack>>,
    pub upload: Mutex<ClientResult<Ack>>,
    pub archive_settings: Mutex<ClientResult<ArchiveSettings>>,
    pub save_archive_settings: Mutex<ClientResult<ArchiveSettings>>,
    pub search: Mutex<ClientResult<ArchiveSearchResult>>,
    pub download: Mutex<ClientResult<ArchiveDownloadTicket>>,
    pub fetch: Mutex<ClientResult<Vec<u8>>>,

    pub uploaded: Mutex<Vec<(String, Vec<PhotoUpload>)>>,
    pub archive_updates: Mutex<Vec<ArchiveSettingsUpdate>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            delays: Mutex::new(HashMap::new()),
            login: Mutex::new(Ok(LoginResult {
                success: true,
                error: None,
                role: Some("admin".to_string()),
            })),
            status: Mutex::new(Ok(SystemStatus::default())),
            start: Mutex::new(Ok(Ack::default())),
            stop: Mutex::new(Ok(Ack::default())),
            snapshot: Mutex::new(Ok(SettingsSnapshot::default())),
            setting_update: Mutex::new(Ok(Ack::default())),
            apply: Mutex::new(Ok(Ack::default())),
            sensitivity: Mutex::new(Ok(SensitivityAck::default())),
            masks: Mutex::new(Ok(MaskInventory::default())),
            delete_mask: Mutex::new(Ok(Ack::default())),
            logs: Mutex::new(Ok(LogPage::default())),
            train: Mutex::new(Ok(Ack::default())),
            upload: Mutex::new(Ok(Ack::default())),
            archive_settings: Mutex::new(Ok(ArchiveSettings::default())),
            save_archive_settings: Mutex::new(Ok(ArchiveSettings::default())),
            search: Mutex::new(Ok(ArchiveSearchResult::default())),
            download: Mutex::new(Ok(ArchiveDownloadTicket::default())),
            fetch: Mutex::new(Ok(Vec::new())),
            uploaded: Mutex::new(Vec::new()),
            archive_updates: Mutex::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Delay the next call of `endpoint`
    pub fn delay_next(&self, endpoint: &'static str, delay: Duration) {
        self.delays
            .lock()
            .entry(endpoint)
            .or_default()
            .push_back(delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Calls whose record starts with `endpoint`
    pub fn count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.split(' ').next() == Some(endpoint))
            .count()
    }

    async fn respond<T: Clone>(
        &self,
        endpoint: &'static str,
        record: String,
        slot: &Mutex<ClientResult<T>>,
    ) -> ClientResult<T> {
        self.calls.lock().push(record);
        let answer = slot.lock().clone();
        let delay = self
            .delays
            .lock()
            .get_mut(endpoint)
            .and_then(|queue| queue.pop_front());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        answer
    }
}

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[async_trait]
impl DashboardApi for MockApi {
    async fn login(&self, username: &str, _password: &str) -> ClientResult<LoginResult> {
        self.respond("login", format!("login {}", username), &self.login)
            .await
    }

    async fn system_status(&self) -> ClientResult<SystemStatus> {
        self.respond("system_status", "system_status".into(), &self.status)
            .await
    }

    async fn start_system(&self) -> ClientResult<Ack> {
        self.respond("start_system", "start_system".into(), &self.start)
            .await
    }

    async fn stop_system(&self) -> ClientResult<Ack> {
        self.respond("stop_system", "stop_system".into(), &self.stop)
            .await
    }

    async fn camera_settings(&self) -> ClientResult<SettingsSnapshot> {
        self.respond("camera_settings", "camera_settings".into(), &self.snapshot)
            .await
    }

    async fn update_camera_setting(&self, update: &CameraSettingUpdate) -> ClientResult<Ack> {
        let record = format!("update_camera_setting {}", json(update));
        self.respond("update_camera_setting", record, &self.setting_update)
            .await
    }

    async fn apply_camera_settings(&self, camera_id: u32) -> ClientResult<Ack> {
        let record = format!("apply_camera_settings {}", camera_id);
        self.respond("apply_camera_settings", record, &self.apply)
            .await
    }

    async fn update_sensitivity(
        &self,
        update: &SensitivityUpdate,
    ) -> ClientResult<SensitivityAck> {
        let record = format!("update_sensitivity {}", json(update));
        self.respond("update_sensitivity", record, &self.sensitivity)
            .await
    }

    async fn list_masks(&self) -> ClientResult<MaskInventory> {
        self.respond("list_masks", "list_masks".into(), &self.masks)
            .await
    }

    async fn delete_mask(&self, filename: &str) -> ClientResult<Ack> {
        let record = format!("delete_mask {}", filename);
        self.respond("delete_mask", record, &self.delete_mask)
            .await
    }

    async fn fetch_logs(&self, query: &LogQuery) -> ClientResult<LogPage> {
        let record = format!("fetch_logs {}", json(query));
        self.respond("fetch_logs", record, &self.logs).await
    }

    async fn train_model(&self) -> ClientResult<Ack> {
        self.respond("train_model", "train_model".into(), &self.train)
            .await
    }

    async fn upload_photos(&self, user_name: &str, photos: Vec<PhotoUpload>) -> ClientResult<Ack> {
        let record = format!("upload_photos {} {}", user_name, photos.len());
        self.uploaded.lock().push((user_name.to_string(), photos));
        self.respond("upload_photos", record, &self.upload).await
    }

    async fn archive_settings(&self) -> ClientResult<ArchiveSettings> {
        self.respond(
            "archive_settings",
            "archive_settings".into(),
            &self.archive_settings,
        )
        .await
    }

    async fn save_archive_settings(
        &self,
        update: &ArchiveSettingsUpdate,
    ) -> ClientResult<ArchiveSettings> {
        self.archive_updates.lock().push(update.clone());
        let record = format!("save_archive_settings {}", update.remote_host);
        self.respond("save_archive_settings", record, &self.save_archive_settings)
            .await
    }

    async fn search_archive(
        &self,
        request: &ArchiveSearchRequest,
    ) -> ClientResult<ArchiveSearchResult> {
        let record = format!("search_archive {}", json(request));
        self.respond("search_archive", record, &self.search).await
    }

    async fn request_archive_download(
        &self,
        request: &ArchiveDownloadRequest,
    ) -> ClientResult<ArchiveDownloadTicket> {
        let record = format!("request_archive_download {}", json(request));
        self.respond("request_archive_download", record, &self.download)
            .await
    }

    async fn fetch_download(&self, url: &str) -> ClientResult<Vec<u8>> {
        let record = format!("fetch_download {}", url);
        self.respond("fetch_download", record, &self.fetch).await
    }
}

/// Dialogs that answer confirmations with a fixed value and record everything
pub struct RecordingDialogs {
    answer: AtomicBool,
    pub confirms: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingDialogs {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            answer: AtomicBool::new(true),
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        })
    }

    pub fn declining() -> Arc<Self> {
        let dialogs = Self::accepting();
        dialogs.answer.store(false, Ordering::SeqCst);
        dialogs
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().clone()
    }
}

#[async_trait]
impl Dialogs for RecordingDialogs {
    async fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }

    async fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}

/// Dashboard over the mock with preferences and downloads inside `dir`
pub fn dashboard_in(
    dir: &Path,
    api: Arc<MockApi>,
    dialogs: Arc<RecordingDialogs>,
) -> Arc<Dashboard> {
    let options = DashboardOptions {
        preferences_file: dir.join("prefs.toml"),
        downloads_dir: dir.join("downloads"),
        ..DashboardOptions::default()
    };
    Dashboard::new(api, dialogs, options)
}

pub fn snapshot(
    settings: &[(u32, &[(&str, bool)])],
    timeouts: &[(u32, u32)],
    sensitivity: &[(u32, u32)],
) -> SettingsSnapshot {
    SettingsSnapshot {
        settings: settings
            .iter()
            .map(|(camera, flags)| {
                (
                    *camera,
                    flags
                        .iter()
                        .map(|(name, value)| (name.to_string(), *value))
                        .collect::<BTreeMap<_, _>>(),
                )
            })
            .collect(),
        timeouts: timeouts.iter().copied().collect(),
        motion_sensitivity: sensitivity.iter().copied().collect(),
    }
}

pub fn archive_file(name: &str) -> ArchiveFile {
    ArchiveFile {
        path: format!("/srv/archive/{}", name),
        filename: name.to_string(),
        time: "12:00".to_string(),
    }
}
