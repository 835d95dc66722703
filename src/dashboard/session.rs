//! Login session

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use super::messages::session as text;
use super::view::{Outcome, SharedView, shared};
use crate::client::DashboardApi;
use crate::errors::DashboardError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub logged_in: bool,
    pub role: Option<String>,
    pub error: Option<String>,
}

pub struct SessionController {
    api: Arc<dyn DashboardApi>,
    view: SharedView<SessionView>,
    failure: Mutex<Option<DashboardError>>,
}

impl SessionController {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            view: shared(SessionView::default()),
            failure: Mutex::new(None),
        }
    }

    pub fn view(&self) -> SharedView<SessionView> {
        self.view.clone()
    }

    /// The session cookie is kept by the client; later calls reuse it.
    pub async fn login(&self, username: &str, password: &str) -> Outcome {
        let result = self.api.login(username, password).await;
        let mut view = self.view.write();
        let failure = match result {
            Ok(answer) if answer.success => {
                info!("Logged in as {} ({:?})", username, answer.role);
                *view = SessionView {
                    logged_in: true,
                    role: answer.role,
                    error: None,
                };
                *self.failure.lock() = None;
                return Outcome::Completed;
            }
            Ok(answer) => {
                warn!("Login rejected for {}", username);
                let message = answer.error.unwrap_or_else(|| text::LOGIN_FAILED.to_string());
                view.error = Some(message.clone());
                DashboardError::login(message)
            }
            Err(e) => {
                warn!("Login request failed: {}", e);
                view.error = Some(text::SERVER_UNREACHABLE.to_string());
                if e.is_server_rejection() {
                    DashboardError::from(e)
                } else {
                    DashboardError::network(text::SERVER_UNREACHABLE)
                }
            }
        };
        view.logged_in = false;
        *self.failure.lock() = Some(failure);
        Outcome::Failed
    }

    /// Why the last login failed
    pub fn failure(&self) -> Option<DashboardError> {
        self.failure.lock().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.view.read().error.clone()
    }
}
