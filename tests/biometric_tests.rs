//! Biometric enrollment: photo upload and model training

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockApi, network_error, server_error};
use octo_dashboard::client::Ack;
use octo_dashboard::dashboard::view::StatusKind;
use octo_dashboard::dashboard::{BiometricController, Outcome};
use tempfile::TempDir;

fn upload_status(biometric: &BiometricController) -> (StatusKind, String) {
    let view = biometric.view();
    let view = view.read();
    (view.upload_status.kind, view.upload_status.text.clone())
}

#[tokio::test]
async fn test_upload_requires_name_then_photos() {
    let api = MockApi::new();
    let biometric = BiometricController::new(api.clone());

    biometric.select_photos(["/tmp/a.jpg"]);
    assert_eq!(biometric.upload().await, Outcome::Invalid);
    assert_eq!(
        upload_status(&biometric),
        (StatusKind::Error, "Введите имя пользователя".to_string())
    );

    biometric.set_user_name("  Иван  ");
    biometric.select_photos(Vec::<std::path::PathBuf>::new());
    assert_eq!(biometric.upload().await, Outcome::Invalid);
    assert_eq!(
        upload_status(&biometric),
        (StatusKind::Error, "Выберите фотографии".to_string())
    );

    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_upload_success_clears_form() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("ivan_1.jpg");
    let second = dir.path().join("ivan_2.jpg");
    std::fs::write(&first, b"one").unwrap();
    std::fs::write(&second, b"two").unwrap();

    let api = MockApi::new();
    let biometric = BiometricController::new(api.clone());
    biometric.set_user_name(" Иван ");
    biometric.select_photos([first, second]);

    assert_eq!(biometric.upload().await, Outcome::Completed);

    assert_eq!(api.calls(), vec!["upload_photos Иван 2"]);
    let uploaded = api.uploaded.lock().clone();
    let (name, photos) = &uploaded[0];
    assert_eq!(name, "Иван");
    assert_eq!(photos[0].file_name, "ivan_1.jpg");
    assert_eq!(photos[1].bytes, b"two");

    assert_eq!(
        upload_status(&biometric),
        (StatusKind::Success, "Фотографии загружены!".to_string())
    );
    let view = biometric.view().read().clone();
    assert!(view.user_name.is_empty());
    assert!(view.photos.is_empty());
}

#[tokio::test]
async fn test_upload_shows_server_message() {
    let dir = TempDir::new().unwrap();
    let photo = dir.path().join("p.jpg");
    std::fs::write(&photo, b"x").unwrap();

    let api = MockApi::new();
    *api.upload.lock() = Ok(Ack {
        success: Some(true),
        message: Some("3 фото сохранено".to_string()),
    });
    let biometric = BiometricController::new(api.clone());
    biometric.set_user_name("anna");
    biometric.select_photos([photo]);

    biometric.upload().await;
    assert_eq!(upload_status(&biometric).1, "3 фото сохранено");
}

#[tokio::test]
async fn test_upload_failure_keeps_form() {
    let dir = TempDir::new().unwrap();
    let photo = dir.path().join("p.jpg");
    std::fs::write(&photo, b"x").unwrap();

    let api = MockApi::new();
    *api.upload.lock() = Err(server_error("no face detected"));
    let biometric = BiometricController::new(api.clone());
    biometric.set_user_name("anna");
    biometric.select_photos([photo.clone()]);

    assert_eq!(biometric.upload().await, Outcome::Failed);
    assert_eq!(
        upload_status(&biometric),
        (StatusKind::Error, "Ошибка: no face detected".to_string())
    );
    let view = biometric.view().read().clone();
    assert_eq!(view.user_name, "anna");
    assert_eq!(view.photos, vec![photo]);
}

#[tokio::test]
async fn test_unreadable_photo_is_not_sent() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    let biometric = BiometricController::new(api.clone());
    biometric.set_user_name("anna");
    biometric.select_photos([dir.path().join("missing.jpg")]);

    assert_eq!(biometric.upload().await, Outcome::Invalid);
    assert!(api.calls().is_empty());
    assert_eq!(upload_status(&biometric).0, StatusKind::Error);
}

#[tokio::test(start_paused = true)]
async fn test_train_shows_progress_then_result() {
    let api = MockApi::new();
    api.delay_next("train_model", Duration::from_secs(2));
    let biometric = Arc::new(BiometricController::new(api.clone()));

    let training = tokio::spawn({
        let biometric = biometric.clone();
        async move { biometric.train().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    {
        let view = biometric.view().read().clone();
        assert_eq!(view.train_status.kind, StatusKind::Info);
        assert_eq!(view.train_status.text, "Обучение модели...");
        assert!(view.train_status.visible);
    }

    assert_eq!(training.await.unwrap(), Outcome::Completed);
    let view = biometric.view().read().clone();
    assert_eq!(view.train_status.kind, StatusKind::Success);
    assert_eq!(view.train_status.text, "Модель успешно обучена!");
}

#[tokio::test]
async fn test_train_failure() {
    let api = MockApi::new();
    *api.train.lock() = Err(network_error());
    let biometric = BiometricController::new(api.clone());

    assert_eq!(biometric.train().await, Outcome::Failed);
    let view = biometric.view().read().clone();
    assert_eq!(view.train_status.kind, StatusKind::Error);
    assert_eq!(
        view.train_status.text,
        "Ошибка соединения: connection refused"
    );
}
