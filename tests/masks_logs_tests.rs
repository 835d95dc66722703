//! Mask inventory and log viewer

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use common::{MockApi, RecordingDialogs, server_error};
use octo_dashboard::client::{LogPage, MaskDescriptor, MaskInventory};
use octo_dashboard::dashboard::{LogController, MaskController, Outcome};

fn inventory(entries: &[(u32, &[&str])]) -> MaskInventory {
    MaskInventory {
        masks: entries
            .iter()
            .map(|(camera, files)| {
                (
                    *camera,
                    files
                        .iter()
                        .map(|f| MaskDescriptor {
                            filename: f.to_string(),
                        })
                        .collect(),
                )
            })
            .collect::<BTreeMap<_, _>>(),
    }
}

fn labels(masks: &MaskController) -> Vec<String> {
    masks
        .view()
        .read()
        .rows
        .iter()
        .map(|row| row.label.clone())
        .collect()
}

#[tokio::test]
async fn test_refresh_lists_masks() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.masks.lock() = Ok(inventory(&[(1, &["mask_1.png"]), (0, &["mask_0.png"])]));
    let masks = MaskController::new(api.clone(), dialogs.clone());

    assert_eq!(masks.refresh().await, Outcome::Completed);
    assert_eq!(
        labels(&masks),
        vec!["Камера 0: mask_0.png", "Камера 1: mask_1.png"]
    );
}

#[tokio::test]
async fn test_confirmed_delete_refetches() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.masks.lock() = Ok(inventory(&[(0, &["mask_0.png"])]));
    let masks = MaskController::new(api.clone(), dialogs.clone());
    masks.refresh().await;

    *api.masks.lock() = Ok(MaskInventory::default());
    assert_eq!(masks.delete("mask_0.png").await, Outcome::Completed);

    assert_eq!(
        api.calls(),
        vec!["list_masks", "delete_mask mask_0.png", "list_masks"]
    );
    assert_eq!(dialogs.confirms(), vec!["Удалить эту маску?"]);
    assert!(labels(&masks).is_empty());
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::declining();
    let masks = MaskController::new(api.clone(), dialogs.clone());

    assert_eq!(masks.delete("mask_0.png").await, Outcome::Cancelled);
    assert_eq!(api.count("delete_mask"), 0);
    assert_eq!(api.count("list_masks"), 0);
}

#[tokio::test]
async fn test_failed_delete_alerts_and_keeps_list() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.masks.lock() = Ok(inventory(&[(2, &["m.png"])]));
    *api.delete_mask.lock() = Err(server_error("Mask not found"));
    let masks = MaskController::new(api.clone(), dialogs.clone());
    masks.refresh().await;

    assert_eq!(masks.delete("m.png").await, Outcome::Failed);
    assert_eq!(dialogs.alerts(), vec!["Ошибка: Mask not found"]);
    assert_eq!(api.count("list_masks"), 1);
    assert_eq!(labels(&masks), vec!["Камера 2: m.png"]);
}

#[tokio::test]
async fn test_refresh_failure_keeps_list() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    *api.masks.lock() = Ok(inventory(&[(0, &["a.png"])]));
    let masks = MaskController::new(api.clone(), dialogs.clone());
    masks.refresh().await;

    *api.masks.lock() = Err(server_error("boom"));
    assert_eq!(masks.refresh().await, Outcome::Failed);
    assert_eq!(labels(&masks), vec!["Камера 0: a.png"]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_mask_answer_is_dropped() {
    let api = MockApi::new();
    let dialogs = RecordingDialogs::accepting();
    let masks = Arc::new(MaskController::new(api.clone(), dialogs.clone()));

    *api.masks.lock() = Ok(inventory(&[(0, &["old.png"])]));
    api.delay_next("list_masks", Duration::from_millis(500));
    let slow = tokio::spawn({
        let masks = masks.clone();
        async move { masks.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(1)).await;

    *api.masks.lock() = Ok(inventory(&[(1, &["new.png"])]));
    masks.refresh().await;
    assert_eq!(labels(&masks), vec!["Камера 1: new.png"]);

    slow.await.unwrap();
    assert_eq!(labels(&masks), vec!["Камера 1: new.png"]);
}

#[tokio::test]
async fn test_logs_refresh_scrolls_to_bottom() {
    let api = MockApi::new();
    *api.logs.lock() = Ok(LogPage {
        logs: vec![
            "2026-10-19 10:00:00 INFO started".to_string(),
            "2026-10-19 10:00:05 WARNING camera 2 lag".to_string(),
            "2026-10-19 10:01:00 ERROR camera 3 lost".to_string(),
        ],
    });
    let logs = LogController::new(api.clone());

    assert_eq!(logs.refresh().await, Outcome::Completed);

    let view = logs.view().read().clone();
    assert_eq!(view.scroll, 2);
    assert_eq!(
        view.content(),
        "2026-10-19 10:00:00 INFO started\n\
         2026-10-19 10:00:05 WARNING camera 2 lag\n\
         2026-10-19 10:01:00 ERROR camera 3 lost"
    );
    assert_eq!(api.calls(), vec!["fetch_logs {}"]);
}

#[tokio::test]
async fn test_log_filters_go_into_query() {
    let api = MockApi::new();
    let logs = LogController::new(api.clone());

    logs.set_status_filter("ERROR").await;
    logs.set_date_filter("2026-10-19").await;

    assert_eq!(
        api.calls(),
        vec![
            r#"fetch_logs {"status":"ERROR"}"#,
            r#"fetch_logs {"status":"ERROR","date":"2026-10-19"}"#,
        ]
    );
}

#[tokio::test]
async fn test_cycle_status_filter_wraps() {
    let api = MockApi::new();
    let logs = LogController::new(api.clone());

    let mut seen = Vec::new();
    for _ in 0..5 {
        logs.cycle_status_filter().await;
        seen.push(logs.view().read().status_filter.clone());
    }
    assert_eq!(seen, vec!["DEBUG", "INFO", "WARNING", "ERROR", ""]);
    assert_eq!(api.calls().last().map(String::as_str), Some("fetch_logs {}"));
}

#[tokio::test]
async fn test_log_failure_keeps_content() {
    let api = MockApi::new();
    *api.logs.lock() = Ok(LogPage {
        logs: vec!["line".to_string()],
    });
    let logs = LogController::new(api.clone());
    logs.refresh().await;

    *api.logs.lock() = Err(server_error("gone"));
    assert_eq!(logs.refresh().await, Outcome::Failed);
    assert_eq!(logs.view().read().content(), "line");
}
