//! Biometric enrollment: model training and photo upload

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use super::generation::RequestGeneration;
use super::messages::biometric as text;
use super::view::{Outcome, SharedView, StatusKind, StatusPanel, shared};
use crate::client::{DashboardApi, PhotoUpload};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiometricView {
    pub train_status: StatusPanel,
    pub upload_status: StatusPanel,
    pub user_name: String,
    pub photos: Vec<PathBuf>,
}

pub struct BiometricController {
    api: Arc<dyn DashboardApi>,
    view: SharedView<BiometricView>,
    train_generation: RequestGeneration,
    upload_generation: RequestGeneration,
}

impl BiometricController {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            view: shared(BiometricView::default()),
            train_generation: RequestGeneration::new(),
            upload_generation: RequestGeneration::new(),
        }
    }

    pub fn view(&self) -> SharedView<BiometricView> {
        self.view.clone()
    }

    pub fn set_user_name(&self, name: &str) {
        self.view.write().user_name = name.to_string();
    }

    pub fn select_photos<I, P>(&self, photos: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.view.write().photos = photos.into_iter().map(Into::into).collect();
    }

    pub async fn train(&self) -> Outcome {
        let generation = self.train_generation.issue();
        self.view
            .write()
            .train_status
            .show(StatusKind::Info, text::TRAINING);

        let result = self.api.train_model().await;
        if !self.train_generation.is_current(generation) {
            return Outcome::Completed;
        }

        let mut view = self.view.write();
        match result {
            Ok(_) => {
                info!("Model training finished");
                view.train_status.show(StatusKind::Success, text::TRAINED);
                Outcome::Completed
            }
            Err(e) => {
                warn!("Model training failed: {}", e);
                view.train_status.show(StatusKind::Error, e.user_message());
                Outcome::Failed
            }
        }
    }

    pub async fn upload(&self) -> Outcome {
        let (user_name, photos) = {
            let mut view = self.view.write();
            let user_name = view.user_name.trim().to_string();
            if user_name.is_empty() {
                view.upload_status.show(StatusKind::Error, text::NAME_REQUIRED);
                return Outcome::Invalid;
            }
            if view.photos.is_empty() {
                view.upload_status.show(StatusKind::Error, text::PHOTOS_REQUIRED);
                return Outcome::Invalid;
            }
            view.upload_status.show(StatusKind::Info, text::UPLOADING);
            (user_name, view.photos.clone())
        };
        let generation = self.upload_generation.issue();

        let uploads = match read_photos(&photos).await {
            Ok(uploads) => uploads,
            Err(message) => {
                warn!("{}", message);
                self.view
                    .write()
                    .upload_status
                    .show(StatusKind::Error, message);
                return Outcome::Invalid;
            }
        };

        let result = self.api.upload_photos(&user_name, uploads).await;
        if !self.upload_generation.is_current(generation) {
            return Outcome::Completed;
        }

        let mut view = self.view.write();
        match result {
            Ok(ack) => {
                info!("Uploaded {} photo(s) for {}", photos.len(), user_name);
                let message = ack.message.unwrap_or_else(|| text::UPLOADED.to_string());
                view.upload_status.show(StatusKind::Success, message);
                view.user_name.clear();
                view.photos.clear();
                Outcome::Completed
            }
            Err(e) => {
                warn!("Photo upload failed: {}", e);
                view.upload_status.show(StatusKind::Error, e.user_message());
                Outcome::Failed
            }
        }
    }
}

async fn read_photos(paths: &[PathBuf]) -> Result<Vec<PhotoUpload>, String> {
    let mut uploads = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| format!("Ошибка: {}: {}", path.display(), e))?;
        uploads.push(PhotoUpload {
            file_name: file_name_of(path),
            bytes,
        });
    }
    Ok(uploads)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string())
}
