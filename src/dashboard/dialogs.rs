//! Modal dialogs seam
//!
//! Controllers ask for confirmation before destructive or expensive actions and
//! report some failures through alerts. Front ends decide how those look.

use async_trait::async_trait;

#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Ask the operator a yes/no question
    async fn confirm(&self, message: &str) -> bool;

    /// Show a blocking notice
    async fn alert(&self, message: &str);
}

/// Dialogs that accept every confirmation and only log alerts.
///
/// Used for non-interactive runs (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

#[async_trait]
impl Dialogs for AssumeYes {
    async fn confirm(&self, message: &str) -> bool {
        tracing::debug!("Auto-confirmed: {}", message);
        true
    }

    async fn alert(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
