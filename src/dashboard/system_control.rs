//! System start/stop control
//!
//! Exactly one of the two buttons is actionable for a settled run state.
//! While a command is in flight its button is disabled and animated; status
//! polls that land in that window are not applied.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::busy::BusySlot;
use super::dialogs::Dialogs;
use super::generation::RequestGeneration;
use super::messages::system as text;
use super::view::{Button, Outcome, SharedView, shared};
use crate::client::DashboardApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl RunState {
    pub fn is_transitional(self) -> bool {
        matches!(self, RunState::Starting | RunState::Stopping)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemView {
    pub state: RunState,
    pub start: Button,
    pub stop: Button,
    pub status_text: String,
    /// CSS-style hex colour of the status text
    pub status_color: String,
}

impl Default for SystemView {
    fn default() -> Self {
        let mut view = Self {
            state: RunState::Stopped,
            start: Button::new(text::START_LABEL, true),
            stop: Button::new(text::STOP_LABEL, false),
            status_text: String::new(),
            status_color: String::new(),
        };
        view.settle(false);
        view
    }
}

impl SystemView {
    fn settle(&mut self, running: bool) {
        if running {
            self.state = RunState::Running;
            self.start.enabled = false;
            self.stop.enabled = true;
            self.status_text = text::STATUS_RUNNING.to_string();
            self.status_color = text::COLOR_RUNNING.to_string();
        } else {
            self.state = RunState::Stopped;
            self.start.enabled = true;
            self.stop.enabled = false;
            self.status_text = text::STATUS_STOPPED.to_string();
            self.status_color = text::COLOR_STOPPED.to_string();
        }
    }
}

#[derive(Clone, Copy)]
enum Command {
    Start,
    Stop,
}

pub struct SystemController {
    api: Arc<dyn DashboardApi>,
    dialogs: Arc<dyn Dialogs>,
    view: SharedView<SystemView>,
    status_generation: RequestGeneration,
    start_busy: BusySlot,
    stop_busy: BusySlot,
    busy_interval: Duration,
}

impl SystemController {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        dialogs: Arc<dyn Dialogs>,
        busy_interval: Duration,
    ) -> Self {
        Self {
            api,
            dialogs,
            view: shared(SystemView::default()),
            status_generation: RequestGeneration::new(),
            start_busy: BusySlot::new(),
            stop_busy: BusySlot::new(),
            busy_interval,
        }
    }

    pub fn view(&self) -> SharedView<SystemView> {
        self.view.clone()
    }

    pub fn state(&self) -> RunState {
        self.view.read().state
    }

    /// Reflect a server-reported run state
    pub fn apply_status(&self, running: bool) {
        self.view.write().settle(running);
    }

    pub async fn refresh_status(&self) -> Outcome {
        let generation = self.status_generation.issue();
        match self.api.system_status().await {
            Ok(status) => {
                if !self.status_generation.is_current(generation) {
                    debug!("Dropping stale system status");
                    return Outcome::Completed;
                }
                let mut view = self.view.write();
                if view.state.is_transitional() {
                    debug!("Command in flight, status poll not applied");
                } else {
                    view.settle(status.running);
                }
                Outcome::Completed
            }
            Err(e) => {
                error!("Error checking system status: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Whether the command's button is actionable in the current settled state
    fn ready_for(view: &SystemView, command: Command) -> bool {
        match command {
            Command::Start => view.state == RunState::Stopped && view.start.enabled,
            Command::Stop => view.state == RunState::Running && view.stop.enabled,
        }
    }

    pub async fn start(&self) -> Outcome {
        if !Self::ready_for(&self.view.read(), Command::Start) {
            debug!("Start ignored, button disabled");
            return Outcome::Invalid;
        }
        if !self.dialogs.confirm(text::START_CONFIRM).await {
            debug!("Start declined");
            return Outcome::Cancelled;
        }
        self.run(Command::Start).await
    }

    pub async fn stop(&self) -> Outcome {
        self.run(Command::Stop).await
    }

    async fn run(&self, command: Command) -> Outcome {
        let (slot, label) = {
            let mut view = self.view.write();
            // 确认对话框期间状态可能已被轮询改变
            if !Self::ready_for(&view, command) {
                debug!("System command ignored in state {:?}", view.state);
                return Outcome::Invalid;
            }
            let button = match command {
                Command::Start => {
                    view.state = RunState::Starting;
                    &mut view.start
                }
                Command::Stop => {
                    view.state = RunState::Stopping;
                    &mut view.stop
                }
            };
            button.enabled = false;
            let label = button.label.clone();
            let slot = match command {
                Command::Start => &self.start_busy,
                Command::Stop => &self.stop_busy,
            };
            (slot, label)
        };

        let target = self.view.clone();
        let ticket = slot.begin(&label, self.busy_interval, move |frame| {
            let mut view = target.write();
            match command {
                Command::Start => view.start.label = frame.to_string(),
                Command::Stop => view.stop.label = frame.to_string(),
            }
        });

        // 让在途的状态轮询失效
        self.status_generation.issue();

        let result = match command {
            Command::Start => self.api.start_system().await,
            Command::Stop => self.api.stop_system().await,
        };
        slot.end(ticket);

        let started = matches!(command, Command::Start);
        match result {
            Ok(_) => {
                self.view.write().settle(started);
                info!("System {}", if started { "started" } else { "stopped" });
                let notice = if started { text::STARTED } else { text::STOPPED };
                self.dialogs.alert(notice).await;
                Outcome::Completed
            }
            Err(e) => {
                warn!("System command failed: {}", e);
                // 回到命令之前的稳定状态
                self.view.write().settle(!started);
                self.dialogs.alert(&e.user_message()).await;
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_keeps_exactly_one_button_enabled() {
        let mut view = SystemView::default();
        for running in [true, false, true] {
            view.settle(running);
            assert_ne!(view.start.enabled, view.stop.enabled);
        }
    }

    #[test]
    fn test_stopped_presentation() {
        let mut view = SystemView::default();
        view.settle(false);
        assert_eq!(view.status_text, "Остановлена");
        assert_eq!(view.status_color, "#f44336");
        assert!(view.start.enabled);
        assert!(!view.stop.enabled);
    }
}
