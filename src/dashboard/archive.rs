//! Archive page: remote connection settings, search and batch download
//!
//! Selection lives on the rows of the latest search result, so a new search
//! discards it. Banners that auto-hide are fenced by a generation: a timer
//! only hides the banner it was scheduled for.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::busy::BusySlot;
use super::dialogs::Dialogs;
use super::generation::{Generation, RequestGeneration};
use super::messages::archive as text;
use super::view::{Button, Outcome, SharedView, StatusKind, StatusPanel, shared};
use crate::client::{
    ArchiveDownloadRequest, ArchiveDownloadTicket, ArchiveFile, ArchiveFileRef,
    ArchiveSearchRequest, ArchiveSettingsUpdate, ClientError, DashboardApi, UNKNOWN_ERROR,
};

const FALLBACK_ARCHIVE_NAME: &str = "archive.zip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionForm {
    pub remote_user: String,
    pub remote_host: String,
    pub remote_path: String,
    /// Typed in this session; never filled from the server
    pub password: String,
    pub password_placeholder: String,
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self {
            remote_user: String::new(),
            remote_host: String::new(),
            remote_path: String::new(),
            password: String::new(),
            password_placeholder: text::PASSWORD_HINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRow {
    pub file: ArchiveFile,
    pub checked: bool,
}

/// Content of the results pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArchiveResults {
    #[default]
    Idle,
    /// Placeholder while a search is in flight
    Searching,
    Found(Vec<ArchiveRow>),
    NotFound,
    Failed(String),
}

impl ArchiveResults {
    pub fn rows(&self) -> &[ArchiveRow] {
        match self {
            ArchiveResults::Found(rows) => rows,
            _ => &[],
        }
    }

    /// Placeholder text for every state without rows
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ArchiveResults::Idle | ArchiveResults::Found(_) => None,
            ArchiveResults::Searching => Some(text::SEARCHING_PLACEHOLDER),
            ArchiveResults::NotFound => Some(text::NOT_FOUND_DETAIL),
            ArchiveResults::Failed(message) => Some(message.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    pub visible: bool,
    pub percent: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveView {
    pub form: ConnectionForm,
    pub connection_status: StatusPanel,
    pub date: String,
    pub time_from: String,
    pub time_to: String,
    pub search_button: Button,
    pub search_status: StatusPanel,
    pub results: ArchiveResults,
    /// Batch-action bar (select all, download)
    pub actions_visible: bool,
    pub select_all_label: String,
    pub download_button: Button,
    pub progress: DownloadProgress,
    pub last_download: Option<PathBuf>,
}

impl ArchiveView {
    fn new(date: String) -> Self {
        Self {
            form: ConnectionForm::default(),
            connection_status: StatusPanel::default(),
            date,
            time_from: String::new(),
            time_to: String::new(),
            search_button: Button::new(text::SEARCH_LABEL, true),
            search_status: StatusPanel::default(),
            results: ArchiveResults::Idle,
            actions_visible: false,
            select_all_label: text::SELECT_ALL.to_string(),
            download_button: Button::new(text::DOWNLOAD_LABEL, true),
            progress: DownloadProgress::default(),
            last_download: None,
        }
    }

    pub fn rows(&self) -> &[ArchiveRow] {
        self.results.rows()
    }
}

#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    pub busy_interval: Duration,
    /// Delay before the connection banner and download progress hide
    pub banner_hide: Duration,
    pub downloads_dir: PathBuf,
}

pub struct ArchiveController {
    api: Arc<dyn DashboardApi>,
    dialogs: Arc<dyn Dialogs>,
    view: SharedView<ArchiveView>,
    options: ArchiveOptions,
    settings_generation: RequestGeneration,
    search_generation: RequestGeneration,
    banner_generation: Arc<RequestGeneration>,
    progress_generation: Arc<RequestGeneration>,
    search_busy: BusySlot,
    download_busy: BusySlot,
}

impl ArchiveController {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        dialogs: Arc<dyn Dialogs>,
        options: ArchiveOptions,
    ) -> Self {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self {
            api,
            dialogs,
            view: shared(ArchiveView::new(today)),
            options,
            settings_generation: RequestGeneration::new(),
            search_generation: RequestGeneration::new(),
            banner_generation: Arc::new(RequestGeneration::new()),
            progress_generation: Arc::new(RequestGeneration::new()),
            search_busy: BusySlot::new(),
            download_busy: BusySlot::new(),
        }
    }

    pub fn view(&self) -> SharedView<ArchiveView> {
        self.view.clone()
    }

    // ---- form inputs ----

    pub fn set_remote_user(&self, value: &str) {
        self.view.write().form.remote_user = value.to_string();
    }

    pub fn set_remote_host(&self, value: &str) {
        self.view.write().form.remote_host = value.to_string();
    }

    pub fn set_remote_path(&self, value: &str) {
        self.view.write().form.remote_path = value.to_string();
    }

    pub fn set_password(&self, value: &str) {
        self.view.write().form.password = value.to_string();
    }

    pub fn set_date(&self, value: &str) {
        self.view.write().date = value.to_string();
    }

    pub fn set_time_range(&self, from: &str, to: &str) {
        let mut view = self.view.write();
        view.time_from = from.to_string();
        view.time_to = to.to_string();
    }

    // ---- connection settings ----

    /// Fill the connection form from the server. Empty fields in the answer
    /// leave the form untouched.
    pub async fn load_settings(&self) -> Outcome {
        let generation = self.settings_generation.issue();
        match self.api.archive_settings().await {
            Ok(settings) => {
                if !self.settings_generation.is_current(generation) {
                    debug!("Dropping stale archive settings");
                    return Outcome::Completed;
                }
                let mut view = self.view.write();
                let form = &mut view.form;
                if !settings.remote_user.is_empty() {
                    form.remote_user = settings.remote_user;
                }
                if let Some(hint) = settings.remote_password.filter(|p| !p.is_empty()) {
                    form.password_placeholder = hint;
                }
                if !settings.remote_host.is_empty() {
                    form.remote_host = settings.remote_host;
                }
                if !settings.remote_path.is_empty() {
                    form.remote_path = settings.remote_path;
                }
                Outcome::Completed
            }
            Err(e) => {
                warn!("Error loading archive settings: {}", e);
                Outcome::Failed
            }
        }
    }

    pub async fn save_settings(&self) -> Outcome {
        let banner = self.banner_generation.issue();
        let update = {
            let mut view = self.view.write();
            let host = view.form.remote_host.trim().to_string();
            if host.is_empty() {
                view.connection_status.show(StatusKind::Error, text::HOST_REQUIRED);
                return Outcome::Invalid;
            }
            let form = &view.form;
            ArchiveSettingsUpdate {
                remote_user: form.remote_user.trim().to_string(),
                remote_host: host,
                remote_path: form.remote_path.trim().to_string(),
                remote_password: (!form.password.is_empty()).then(|| form.password.clone()),
            }
        };

        let result = self.api.save_archive_settings(&update).await;
        let outcome = {
            let mut view = self.view.write();
            match result {
                Ok(_) => {
                    info!("Archive settings saved for {}", update.remote_host);
                    view.connection_status.show(StatusKind::Success, text::SETTINGS_SAVED);
                    view.form.password.clear();
                    view.form.password_placeholder = text::PASSWORD_SAVED_HINT.to_string();
                    Outcome::Completed
                }
                Err(e) => {
                    warn!("Failed to save archive settings: {}", e);
                    view.connection_status.show(StatusKind::Error, e.user_message());
                    Outcome::Failed
                }
            }
        };

        self.hide_later(self.banner_generation.clone(), banner, |view| {
            view.connection_status.hide()
        });
        outcome
    }

    // ---- search ----

    pub async fn search(&self) -> Outcome {
        let (request, label) = {
            let mut view = self.view.write();
            if view.date.trim().is_empty() {
                view.search_status.show(StatusKind::Error, text::DATE_REQUIRED);
                return Outcome::Invalid;
            }
            view.search_button.enabled = false;
            view.search_status.show(StatusKind::Info, text::SEARCHING);
            view.results = ArchiveResults::Searching;
            view.actions_visible = false;
            view.select_all_label = text::SELECT_ALL.to_string();
            let request = ArchiveSearchRequest {
                date: view.date.trim().to_string(),
                time_from: view.time_from.trim().to_string(),
                time_to: view.time_to.trim().to_string(),
            };
            (request, view.search_button.label.clone())
        };

        let target = self.view.clone();
        let ticket = self
            .search_busy
            .begin(&label, self.options.busy_interval, move |frame| {
                target.write().search_button.label = frame.to_string()
            });
        let generation = self.search_generation.issue();

        let result = self.api.search_archive(&request).await;

        // 较新的搜索仍在进行时，按钮与动画归它所有
        if !self.search_generation.is_current(generation) {
            debug!("Dropping stale archive search for {}", request.date);
            return Outcome::Completed;
        }
        self.search_busy.end(ticket);
        let mut view = self.view.write();
        view.search_button.enabled = true;

        match result {
            Ok(found) if !found.files.is_empty() => {
                info!("Archive search {}: {} file(s)", request.date, found.count);
                view.search_status.show(StatusKind::Success, text::found(found.count));
                view.results = ArchiveResults::Found(
                    found
                        .files
                        .into_iter()
                        .map(|file| ArchiveRow {
                            file,
                            checked: false,
                        })
                        .collect(),
                );
                view.actions_visible = true;
                Outcome::Completed
            }
            Ok(_) => {
                view.search_status.show(StatusKind::Warning, text::NOT_FOUND);
                view.results = ArchiveResults::NotFound;
                Outcome::Completed
            }
            Err(e) => {
                warn!("Archive search failed: {}", e);
                view.search_status.show(StatusKind::Error, e.user_message());
                let placeholder = if e.is_server_rejection() {
                    text::SEARCH_FAILED
                } else {
                    text::SERVER_UNREACHABLE
                };
                view.results = ArchiveResults::Failed(placeholder.to_string());
                Outcome::Failed
            }
        }
    }

    // ---- selection ----

    /// Flip one row; returns the new checked state
    pub fn toggle_file(&self, index: usize) -> Option<bool> {
        let mut view = self.view.write();
        match &mut view.results {
            ArchiveResults::Found(rows) => rows.get_mut(index).map(|row| {
                row.checked = !row.checked;
                row.checked
            }),
            _ => None,
        }
    }

    /// Check every row unless all are already checked, in which case clear them
    pub fn toggle_select_all(&self) {
        let mut view = self.view.write();
        let all_checked = view.rows().iter().all(|row| row.checked);
        if let ArchiveResults::Found(rows) = &mut view.results {
            for row in rows.iter_mut() {
                row.checked = !all_checked;
            }
        }
        view.select_all_label = if all_checked {
            text::SELECT_ALL
        } else {
            text::DESELECT_ALL
        }
        .to_string();
    }

    pub fn selected_files(&self) -> Vec<ArchiveFileRef> {
        self.view
            .read()
            .rows()
            .iter()
            .filter(|row| row.checked)
            .map(|row| ArchiveFileRef::from(&row.file))
            .collect()
    }

    // ---- download ----

    pub async fn download(&self) -> Outcome {
        let files = self.selected_files();
        if files.is_empty() {
            self.dialogs.alert(text::NOTHING_SELECTED).await;
            return Outcome::Invalid;
        }

        let progress = self.progress_generation.issue();
        let label = {
            let mut view = self.view.write();
            view.progress = DownloadProgress {
                visible: true,
                percent: 0,
                text: text::preparing(files.len()),
            };
            view.download_button.enabled = false;
            view.download_button.label.clone()
        };
        let target = self.view.clone();
        let ticket = self
            .download_busy
            .begin(&label, self.options.busy_interval, move |frame| {
                target.write().download_button.label = frame.to_string()
            });

        let result = self
            .api
            .request_archive_download(&ArchiveDownloadRequest { files })
            .await;

        if self.download_busy.end(ticket) {
            self.view.write().download_button.enabled = true;
        }

        match result {
            Ok(ArchiveDownloadTicket {
                download_url: Some(url),
                filename,
                count,
                errors,
            }) => {
                if self.progress_generation.is_current(progress) {
                    let mut status = text::ready(count);
                    if !errors.is_empty() {
                        status.push_str(&text::partial_errors(errors.len()));
                    }
                    let mut view = self.view.write();
                    view.progress.percent = 100;
                    view.progress.text = status;
                }

                let outcome = match self.save_download(&url, &filename).await {
                    Ok(path) => {
                        info!("Archive saved to {}", path.display());
                        self.view.write().last_download = Some(path);
                        Outcome::Completed
                    }
                    Err(e) => {
                        warn!("Failed to fetch archive {}: {}", url, e);
                        self.dialogs.alert(&text::download_failed(e.reason())).await;
                        Outcome::Failed
                    }
                };

                self.hide_later(self.progress_generation.clone(), progress, |view| {
                    view.progress.visible = false
                });
                outcome
            }
            Ok(_) => {
                self.fail_progress(progress, format!("Ошибка: {}", UNKNOWN_ERROR));
                self.dialogs.alert(&text::download_failed(UNKNOWN_ERROR)).await;
                Outcome::Failed
            }
            Err(e) => {
                warn!("Archive download request failed: {}", e);
                if e.is_server_rejection() {
                    self.fail_progress(progress, e.user_message());
                    self.dialogs.alert(&text::download_failed(e.reason())).await;
                } else {
                    self.fail_progress(progress, text::CONNECTION_FAILED.to_string());
                    self.dialogs.alert(&e.user_message()).await;
                }
                Outcome::Failed
            }
        }
    }

    fn fail_progress(&self, progress: Generation, status: String) {
        if self.progress_generation.is_current(progress) {
            let mut view = self.view.write();
            view.progress.percent = 0;
            view.progress.text = status;
        }
    }

    async fn save_download(&self, url: &str, filename: &str) -> Result<PathBuf, ClientError> {
        let bytes = self.api.fetch_download(url).await?;
        let dir = &self.options.downloads_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| ClientError::Io(format!("{}: {}", dir.display(), e)))?;
        let path = dir.join(safe_file_name(filename));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| ClientError::Io(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    fn hide_later<F>(&self, generations: Arc<RequestGeneration>, generation: Generation, hide: F)
    where
        F: FnOnce(&mut ArchiveView) + Send + 'static,
    {
        let view = self.view.clone();
        let delay = self.options.banner_hide;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generations.is_current(generation) {
                hide(&mut *view.write());
            }
        });
    }
}

/// Keep only the final path component of a server-supplied name
fn safe_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_ARCHIVE_NAME.to_string())
}
