use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, Result};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "octo-dashboard.toml";

/// 环境变量前缀，例如 OCTO__BACKEND__BASE_URL=http://10.0.0.5:5000
pub const ENV_PREFIX: &str = "OCTO";

/// 应用配置（从 TOML 加载，环境变量可覆盖）
///
/// - backend: 后端地址、超时、登录凭据
/// - dashboard: 摄像头列表、轮询周期、本地文件位置
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// 未显式指定路径时配置文件可以不存在；显式指定的文件必须存在
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("dashboard.cameras")
                    .with_list_parse_key("dashboard.locked_settings")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DashboardError::config(format!("Failed to build config: {}", e)))?;

        let config = settings
            .try_deserialize::<AppConfig>()
            .map_err(|e| DashboardError::config(format!("Failed to deserialize config: {}", e)))?;

        if Path::new(path).exists() {
            tracing::debug!("Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端连接配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 单个请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// 仪表盘行为配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_cameras")]
    pub cameras: Vec<u32>,
    /// 策略锁定的复选框，格式 "<camera>:<setting>"
    #[serde(default)]
    pub locked_settings: Vec<String>,
    #[serde(default = "default_status_poll_secs")]
    pub status_poll_secs: u64,
    #[serde(default = "default_mask_poll_secs")]
    pub mask_poll_secs: u64,
    #[serde(default = "default_busy_frame_ms")]
    pub busy_frame_ms: u64,
    #[serde(default = "default_banner_hide_secs")]
    pub banner_hide_secs: u64,
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
    #[serde(default = "default_downloads_dir")]
    pub downloads_dir: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_cameras() -> Vec<u32> {
    vec![0, 1, 2, 3]
}

fn default_status_poll_secs() -> u64 {
    5
}

fn default_mask_poll_secs() -> u64 {
    10
}

fn default_busy_frame_ms() -> u64 {
    400
}

fn default_banner_hide_secs() -> u64 {
    3
}

fn default_preferences_file() -> String {
    "octo-preferences.toml".to_string()
}

fn default_downloads_dir() -> String {
    "downloads".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            username: None,
            password: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            cameras: default_cameras(),
            locked_settings: Vec::new(),
            status_poll_secs: default_status_poll_secs(),
            mask_poll_secs: default_mask_poll_secs(),
            busy_frame_ms: default_busy_frame_ms(),
            banner_hide_secs: default_banner_hide_secs(),
            preferences_file: default_preferences_file(),
            downloads_dir: default_downloads_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
