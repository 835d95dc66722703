//! Log viewer

use std::sync::Arc;

use tracing::{debug, warn};

use super::generation::RequestGeneration;
use super::view::{Outcome, SharedView, shared};
use crate::client::{DashboardApi, LogQuery};

/// Level filters offered by the viewer; the empty entry means "all"
pub const LOG_LEVELS: [&str; 5] = ["", "DEBUG", "INFO", "WARNING", "ERROR"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogView {
    pub status_filter: String,
    /// `YYYY-MM-DD`, empty for the newest log file
    pub date_filter: String,
    pub lines: Vec<String>,
    /// First visible line; refresh pins it to the last line
    pub scroll: usize,
}

impl LogView {
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    fn query(&self) -> LogQuery {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        LogQuery {
            status: non_empty(&self.status_filter),
            date: non_empty(&self.date_filter),
        }
    }
}

pub struct LogController {
    api: Arc<dyn DashboardApi>,
    view: SharedView<LogView>,
    generation: RequestGeneration,
}

impl LogController {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            view: shared(LogView::default()),
            generation: RequestGeneration::new(),
        }
    }

    pub fn view(&self) -> SharedView<LogView> {
        self.view.clone()
    }

    pub async fn refresh(&self) -> Outcome {
        let query = self.view.read().query();
        let generation = self.generation.issue();

        match self.api.fetch_logs(&query).await {
            Ok(page) => {
                if !self.generation.is_current(generation) {
                    debug!("Dropping stale log page");
                    return Outcome::Completed;
                }
                let mut view = self.view.write();
                view.scroll = page.logs.len().saturating_sub(1);
                view.lines = page.logs;
                Outcome::Completed
            }
            Err(e) => {
                warn!("Error loading logs: {}", e);
                Outcome::Failed
            }
        }
    }

    pub async fn set_status_filter(&self, status: &str) -> Outcome {
        self.view.write().status_filter = status.to_string();
        self.refresh().await
    }

    pub async fn set_date_filter(&self, date: &str) -> Outcome {
        self.view.write().date_filter = date.to_string();
        self.refresh().await
    }

    /// Move to the next entry of [`LOG_LEVELS`] and refresh
    pub async fn cycle_status_filter(&self) -> Outcome {
        let next = {
            let view = self.view.read();
            let position = LOG_LEVELS
                .iter()
                .position(|level| level.eq_ignore_ascii_case(&view.status_filter))
                .unwrap_or(0);
            LOG_LEVELS[(position + 1) % LOG_LEVELS.len()]
        };
        self.set_status_filter(next).await
    }
}
