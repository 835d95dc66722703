//! TUI mode

use crate::runtime::lifetime::startup::pre_startup;
use crate::system::logging::LogTarget;

/// Run TUI mode; logs go to a file while the terminal is taken over
pub async fn run_tui(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let context = pre_startup(config_path, LogTarget::FileOnly)?;
    crate::interfaces::tui::run_tui(&context.config).await
}
