//! Dashboard composition: navigation hooks, startup, polling, theme, login

mod common;

use std::time::Duration;

use common::{MockApi, RecordingDialogs, dashboard_in, network_error, server_error};
use octo_dashboard::client::{LoginResult, SystemStatus};
use octo_dashboard::dashboard::{CameraFilter, Outcome, Page, RunState, Theme};
use tempfile::TempDir;

#[tokio::test]
async fn test_entering_logs_and_archive_loads_them() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    let dashboard = dashboard_in(dir.path(), api.clone(), RecordingDialogs::accepting());

    assert_eq!(dashboard.router.active(), Page::Dashboard);

    dashboard.show_page(Page::Settings).await;
    dashboard.show_page(Page::Masks).await;
    assert!(api.calls().is_empty());

    dashboard.show_page(Page::Logs).await;
    assert_eq!(api.calls(), vec!["fetch_logs {}"]);

    dashboard.show_page(Page::Archive).await;
    assert_eq!(dashboard.router.active(), Page::Archive);
    assert_eq!(api.count("archive_settings"), 1);

    // 再次进入同一页面会重新加载
    dashboard.show_page(Page::Logs).await;
    assert_eq!(api.count("fetch_logs"), 2);
}

#[tokio::test]
async fn test_initialize_loads_status_settings_and_masks() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    *api.status.lock() = Ok(SystemStatus { running: true });
    let dashboard = dashboard_in(dir.path(), api.clone(), RecordingDialogs::accepting());

    dashboard.initialize().await;

    assert_eq!(api.count("system_status"), 1);
    assert_eq!(api.count("camera_settings"), 1);
    assert_eq!(api.count("list_masks"), 1);
    assert_eq!(api.calls().len(), 3);
    assert_eq!(dashboard.system.state(), RunState::Running);
    assert!(dashboard.masks.view().read().loaded);
}

#[tokio::test(start_paused = true)]
async fn test_polling_runs_until_stopped() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    let dashboard = dashboard_in(dir.path(), api.clone(), RecordingDialogs::accepting());

    let polling = dashboard.start_polling();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(api.calls().is_empty());

    // 轮询失败不会让循环停下
    *api.status.lock() = Err(network_error());
    tokio::time::sleep(Duration::from_millis(10_500)).await;
    assert_eq!(api.count("system_status"), 2);
    assert_eq!(api.count("list_masks"), 1);

    polling.stop();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(api.count("system_status"), 2);
    assert_eq!(api.count("list_masks"), 1);
}

#[tokio::test]
async fn test_theme_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let dashboard = dashboard_in(dir.path(), MockApi::new(), RecordingDialogs::accepting());
    assert_eq!(dashboard.theme.current(), Theme::Dark);
    let label = dashboard.theme.label();

    assert_eq!(dashboard.theme.toggle(), Theme::Light);
    assert_eq!(dashboard.theme.label(), "День");

    let reopened = dashboard_in(dir.path(), MockApi::new(), RecordingDialogs::accepting());
    assert_eq!(reopened.theme.current(), Theme::Light);

    reopened.theme.toggle();
    assert_eq!(reopened.theme.current(), Theme::Dark);
    assert_eq!(reopened.theme.label(), label);
}

#[tokio::test]
async fn test_camera_filter_cycles_over_configured_cameras() {
    let dir = TempDir::new().unwrap();
    let dashboard = dashboard_in(dir.path(), MockApi::new(), RecordingDialogs::accepting());

    assert_eq!(dashboard.grid.tiles().len(), 4);
    assert_eq!(dashboard.grid.cycle(), CameraFilter::Only(0));
    let visible: Vec<u32> = dashboard
        .grid
        .tiles()
        .into_iter()
        .filter(|tile| tile.visible)
        .map(|tile| tile.camera_id)
        .collect();
    assert_eq!(visible, vec![0]);
}

#[tokio::test]
async fn test_login_success() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    let dashboard = dashboard_in(dir.path(), api.clone(), RecordingDialogs::accepting());

    assert_eq!(
        dashboard.session.login("operator", "pw").await,
        Outcome::Completed
    );
    let session = dashboard.session.view().read().clone();
    assert!(session.logged_in);
    assert_eq!(session.role.as_deref(), Some("admin"));
    assert_eq!(session.error, None);
    assert_eq!(api.calls(), vec!["login operator"]);
}

#[tokio::test]
async fn test_login_rejected() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    *api.login.lock() = Ok(LoginResult {
        success: false,
        error: Some("Неверный пароль".to_string()),
        role: None,
    });
    let dashboard = dashboard_in(dir.path(), api.clone(), RecordingDialogs::accepting());

    assert_eq!(dashboard.session.login("operator", "x").await, Outcome::Failed);
    assert!(!dashboard.session.view().read().logged_in);
    assert_eq!(dashboard.session.error().as_deref(), Some("Неверный пароль"));

    *api.login.lock() = Ok(LoginResult::default());
    dashboard.session.login("operator", "x").await;
    assert_eq!(dashboard.session.error().as_deref(), Some("Ошибка входа"));
}

#[tokio::test]
async fn test_login_transport_failure() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new();
    *api.login.lock() = Err(server_error("bad gateway"));
    let dashboard = dashboard_in(dir.path(), api.clone(), RecordingDialogs::accepting());

    assert_eq!(dashboard.session.login("operator", "x").await, Outcome::Failed);
    assert_eq!(
        dashboard.session.error().as_deref(),
        Some("Ошибка соединения с сервером")
    );
}
