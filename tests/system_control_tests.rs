//! Start/stop control against the scripted backend

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockApi, RecordingDialogs, network_error, server_error};
use octo_dashboard::client::SystemStatus;
use octo_dashboard::dashboard::system_control::SystemView;
use octo_dashboard::dashboard::{Outcome, RunState, SystemController};

const FRAME: Duration = Duration::from_millis(400);

fn controller(api: &Arc<MockApi>, dialogs: &Arc<RecordingDialogs>) -> Arc<SystemController> {
    Arc::new(SystemController::new(api.clone(), dialogs.clone(), FRAME))
}

fn assert_buttons_exclusive(view: &SystemView) {
    assert!(
        !(view.start.enabled && view.stop.enabled),
        "start and stop enabled together: {:?}",
        view
    );
}

#[tokio::test]
async fn test_status_stopped_presentation() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.status.lock() = Ok(SystemStatus { running: false });
    let system = controller(&api, &dialogs);

    assert_eq!(system.refresh_status().await, Outcome::Completed);

    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Stopped);
    assert!(view.start.enabled);
    assert!(!view.stop.enabled);
    assert_eq!(view.status_text, "Остановлена");
    assert_eq!(view.status_color, "#f44336");
}

#[tokio::test]
async fn test_status_running_presentation() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.status.lock() = Ok(SystemStatus { running: true });
    let system = controller(&api, &dialogs);

    system.refresh_status().await;

    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Running);
    assert!(!view.start.enabled);
    assert!(view.stop.enabled);
    assert_eq!(view.status_text, "Запущена");
    assert_eq!(view.status_color, "#4caf50");
}

#[tokio::test]
async fn test_status_failure_keeps_state() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.status.lock() = Ok(SystemStatus { running: true });
    let system = controller(&api, &dialogs);
    system.refresh_status().await;

    *api.status.lock() = Err(network_error());
    assert_eq!(system.refresh_status().await, Outcome::Failed);
    assert_eq!(system.state(), RunState::Running);
    assert!(dialogs.alerts().is_empty());
}

#[tokio::test]
async fn test_start_declined_sends_nothing() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::declining();
    let system = controller(&api, &dialogs);

    assert_eq!(system.start().await, Outcome::Cancelled);
    assert_eq!(api.count("start_system"), 0);
    assert_eq!(
        dialogs.confirms(),
        vec!["Запустить систему CCTV с текущими настройками из раздела Settings?"]
    );
    assert_eq!(system.state(), RunState::Stopped);
}

#[tokio::test]
async fn test_start_success() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    let system = controller(&api, &dialogs);

    assert_eq!(system.start().await, Outcome::Completed);

    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Running);
    assert!(!view.start.enabled);
    assert!(view.stop.enabled);
    assert_eq!(view.start.label, "Запустить");
    assert_eq!(
        dialogs.alerts(),
        vec!["Система запущена!\n\nНастройки применены автоматически."]
    );
}

#[tokio::test]
async fn test_start_failure_reenables_start() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.start.lock() = Err(server_error("camera 2 busy"));
    let system = controller(&api, &dialogs);

    assert_eq!(system.start().await, Outcome::Failed);

    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Stopped);
    assert!(view.start.enabled);
    assert!(!view.stop.enabled);
    assert_eq!(view.start.label, "Запустить");
    assert_eq!(dialogs.alerts(), vec!["Ошибка: camera 2 busy"]);
}

#[tokio::test]
async fn test_stop_has_no_confirmation() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::declining();
    *api.status.lock() = Ok(SystemStatus { running: true });
    let system = controller(&api, &dialogs);
    system.refresh_status().await;

    assert_eq!(system.stop().await, Outcome::Completed);
    assert!(dialogs.confirms().is_empty());
    assert_eq!(dialogs.alerts(), vec!["Система остановлена"]);
    assert_eq!(system.state(), RunState::Stopped);
}

#[tokio::test]
async fn test_stop_network_failure() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.status.lock() = Ok(SystemStatus { running: true });
    *api.stop.lock() = Err(network_error());
    let system = controller(&api, &dialogs);
    system.refresh_status().await;

    assert_eq!(system.stop().await, Outcome::Failed);
    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Running);
    assert!(view.stop.enabled);
    assert_eq!(
        dialogs.alerts(),
        vec!["Ошибка соединения: connection refused"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_busy_animation_cycles_and_restores() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    api.delay_next("start_system", Duration::from_millis(1000));
    let system = controller(&api, &dialogs);

    let running = tokio::spawn({
        let system = system.clone();
        async move { system.start().await }
    });

    let label = || system.view().read().start.label.clone();

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(label(), "...");
    assert!(!system.view().read().start.enabled);

    tokio::time::sleep(FRAME).await;
    assert_eq!(label(), ".");
    tokio::time::sleep(FRAME).await;
    assert_eq!(label(), "..");

    assert_eq!(running.await.unwrap(), Outcome::Completed);
    assert_eq!(label(), "Запустить");

    // 动画结束后标签不再变化
    tokio::time::sleep(FRAME * 3).await;
    assert_eq!(label(), "Запустить");
}

#[tokio::test(start_paused = true)]
async fn test_poll_during_command_is_not_applied() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    api.delay_next("start_system", Duration::from_millis(1000));
    *api.status.lock() = Ok(SystemStatus { running: false });
    let system = controller(&api, &dialogs);

    let running = tokio::spawn({
        let system = system.clone();
        async move { system.start().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    system.refresh_status().await;
    {
        let view = system.view().read().clone();
        assert_eq!(view.state, RunState::Starting);
        assert!(!view.start.enabled);
        assert_buttons_exclusive(&view);
    }

    running.await.unwrap();
    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Running);
    assert_buttons_exclusive(&view);
}

#[tokio::test]
async fn test_buttons_never_both_enabled() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    let system = controller(&api, &dialogs);

    assert_buttons_exclusive(&system.view().read());
    for running in [true, false, true] {
        *api.status.lock() = Ok(SystemStatus { running });
        system.refresh_status().await;
        assert_buttons_exclusive(&system.view().read());
    }
    system.stop().await;
    assert_buttons_exclusive(&system.view().read());
    *api.start.lock() = Err(server_error("nope"));
    system.start().await;
    assert_buttons_exclusive(&system.view().read());
}

#[tokio::test]
async fn test_start_while_running_is_ignored() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.start.lock() = Err(server_error("Система уже запущена"));
    let system = controller(&api, &dialogs);
    system.apply_status(true);

    assert_eq!(system.start().await, Outcome::Invalid);
    assert_eq!(api.count("start_system"), 0);
    assert!(dialogs.confirms().is_empty());
    assert!(dialogs.alerts().is_empty());

    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Running);
    assert_eq!(view.status_text, "Запущена");
    assert!(view.stop.enabled);
    assert_buttons_exclusive(&view);
}

#[tokio::test]
async fn test_stop_while_stopped_is_ignored() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    let system = controller(&api, &dialogs);

    assert_eq!(system.stop().await, Outcome::Invalid);
    assert_eq!(api.count("stop_system"), 0);
    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Stopped);
    assert_buttons_exclusive(&view);
}

#[tokio::test]
async fn test_failure_restores_both_buttons_and_status() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.stop.lock() = Err(server_error("camera 1 busy"));
    let system = controller(&api, &dialogs);
    system.apply_status(true);

    assert_eq!(system.stop().await, Outcome::Failed);
    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Running);
    assert!(!view.start.enabled);
    assert!(view.stop.enabled);
    assert_eq!(view.status_text, "Запущена");
    assert_eq!(view.status_color, "#4caf50");
    assert_eq!(view.stop.label, "Остановить");
}

#[tokio::test(start_paused = true)]
async fn test_second_press_during_command_is_ignored() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    api.delay_next("start_system", Duration::from_millis(1000));
    let system = controller(&api, &dialogs);

    let running = tokio::spawn({
        let system = system.clone();
        async move { system.start().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(system.start().await, Outcome::Invalid);
    assert_eq!(system.stop().await, Outcome::Invalid);
    assert_buttons_exclusive(&system.view().read());

    assert_eq!(running.await.unwrap(), Outcome::Completed);
    assert_eq!(api.count("start_system"), 1);
    assert_eq!(api.count("stop_system"), 0);
    assert_eq!(dialogs.confirms().len(), 1);
    assert_eq!(system.state(), RunState::Running);
}

#[tokio::test(start_paused = true)]
async fn test_stale_status_answer_is_dropped() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.status.lock() = Ok(SystemStatus { running: true });
    api.delay_next("system_status", Duration::from_millis(1000));
    let system = controller(&api, &dialogs);

    let older = tokio::spawn({
        let system = system.clone();
        async move { system.refresh_status().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    *api.status.lock() = Ok(SystemStatus { running: false });
    assert_eq!(system.refresh_status().await, Outcome::Completed);
    assert_eq!(system.state(), RunState::Stopped);

    assert_eq!(older.await.unwrap(), Outcome::Completed);
    let view = system.view().read().clone();
    assert_eq!(view.state, RunState::Stopped);
    assert_eq!(view.status_text, "Остановлена");
    assert_buttons_exclusive(&view);
}
