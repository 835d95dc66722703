use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{AppConfig, init_config};
use crate::system::logging::{LogTarget, init_logging};

/// 启动后的全局上下文
///
/// 日志 guard 必须存活到进程结束，否则缓冲中的日志会丢失。
pub struct StartupContext {
    pub config: Arc<AppConfig>,
    _log_guard: WorkerGuard,
}

/// CLI / TUI 启动前处理：.env、配置文件、日志
pub fn pre_startup(config_path: Option<&str>, target: LogTarget) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();

    // .env 缺失不是错误；日志装好之后再记录
    let env_file = dotenvy::dotenv().ok();

    let config = init_config(config_path).context("Failed to load configuration")?;
    let guard = init_logging(&config, target).context("Failed to initialize logging")?;

    if let Some(path) = env_file {
        debug!("Loaded environment from {}", path.display());
    }

    info!(
        "octo-dashboard v{} (backend {})",
        env!("CARGO_PKG_VERSION"),
        config.backend.base_url
    );
    debug!("Pre-startup completed in {:?}", start_time.elapsed());

    Ok(StartupContext {
        config,
        _log_guard: guard,
    })
}
