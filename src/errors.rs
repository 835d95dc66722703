use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub enum DashboardError {
    Config(String),
    Network(String),
    Server(String),
    Validation(String),
    FileOperation(String),
    Serialization(String),
    Preferences(String),
    Login(String),
    Terminal(String),
}

impl DashboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "E001",
            DashboardError::Network(_) => "E002",
            DashboardError::Server(_) => "E003",
            DashboardError::Validation(_) => "E004",
            DashboardError::FileOperation(_) => "E005",
            DashboardError::Serialization(_) => "E006",
            DashboardError::Preferences(_) => "E007",
            DashboardError::Login(_) => "E008",
            DashboardError::Terminal(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "Configuration Error",
            DashboardError::Network(_) => "Network Error",
            DashboardError::Server(_) => "Backend Error",
            DashboardError::Validation(_) => "Validation Error",
            DashboardError::FileOperation(_) => "File Operation Error",
            DashboardError::Serialization(_) => "Serialization Error",
            DashboardError::Preferences(_) => "Preferences Error",
            DashboardError::Login(_) => "Login Error",
            DashboardError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DashboardError::Config(msg)
            | DashboardError::Network(msg)
            | DashboardError::Server(msg)
            | DashboardError::Validation(msg)
            | DashboardError::FileOperation(msg)
            | DashboardError::Serialization(msg)
            | DashboardError::Preferences(msg)
            | DashboardError::Login(msg)
            | DashboardError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI/TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DashboardError {}

// 便捷的构造函数
impl DashboardError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        DashboardError::Config(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        DashboardError::Network(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        DashboardError::Server(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DashboardError::Validation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DashboardError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DashboardError::Serialization(msg.into())
    }

    pub fn preferences<T: Into<String>>(msg: T) -> Self {
        DashboardError::Preferences(msg.into())
    }

    pub fn login<T: Into<String>>(msg: T) -> Self {
        DashboardError::Login(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        DashboardError::Terminal(msg.into())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DashboardError {
    fn from(err: toml::ser::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<ClientError> for DashboardError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Server { message, .. } => DashboardError::Server(message),
            ClientError::Network(msg) => DashboardError::Network(msg),
            ClientError::Decode(msg) => DashboardError::Serialization(msg),
            ClientError::InvalidUrl(msg) => DashboardError::Config(msg),
            ClientError::Io(msg) => DashboardError::FileOperation(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
