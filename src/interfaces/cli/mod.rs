//! CLI interface module
//!
//! Every command drives the same dashboard controllers as the TUI and prints
//! their view models once the operation has finished.

pub mod commands;
mod dialogs;

pub use dialogs::ConsoleDialogs;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cli::{Commands, ConfigCommands};
use crate::client::HttpClient;
use crate::config::AppConfig;
use crate::dashboard::{AssumeYes, Dashboard, DashboardOptions, Dialogs, Outcome};
use crate::errors::DashboardError;

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    RequestError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::RequestError(msg) => format!("Request error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<DashboardError> for CliError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Config(msg) => CliError::ConfigError(msg),
            DashboardError::Network(msg)
            | DashboardError::Server(msg)
            | DashboardError::Login(msg) => CliError::RequestError(msg),
            DashboardError::Validation(msg) => CliError::ParseError(msg),
            other => CliError::CommandError(other.message().to_string()),
        }
    }
}

/// Map a controller outcome to the command result.
///
/// The controller has already reported details through its dialogs or
/// status panel; this only decides the exit status.
pub(crate) fn finish(outcome: Outcome, action: &str) -> Result<(), CliError> {
    match outcome {
        Outcome::Completed => Ok(()),
        Outcome::Cancelled => {
            println!("Aborted.");
            Ok(())
        }
        Outcome::Invalid => {
            Err(DashboardError::validation(format!("{} was not sent", action)).into())
        }
        Outcome::Failed => Err(CliError::CommandError(format!("{} failed", action))),
    }
}

/// Build the backend client and dashboard, logging in when credentials are
/// configured. `assume_yes` answers every confirmation with yes.
pub async fn connect(config: &AppConfig, assume_yes: bool) -> Result<Arc<Dashboard>, CliError> {
    let dialogs: Arc<dyn Dialogs> = if assume_yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(ConsoleDialogs)
    };
    connect_with(config, dialogs).await
}

/// Same as [`connect`] with front-end supplied dialogs
pub async fn connect_with(
    config: &AppConfig,
    dialogs: Arc<dyn Dialogs>,
) -> Result<Arc<Dashboard>, CliError> {
    let api = HttpClient::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.timeout_secs.max(1)),
    )
    .map_err(DashboardError::from)?;

    let dashboard = Dashboard::new(
        Arc::new(api),
        dialogs,
        DashboardOptions::from_config(config),
    );

    if let Some(username) = config.backend.username.as_deref() {
        let password = match config.backend.password.clone() {
            Some(password) => password,
            None => commands::prompt_password(username)?,
        };
        commands::login_with(&dashboard, username, &password).await?;
    } else {
        debug!("No backend username configured, continuing without login");
    }

    Ok(dashboard)
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(config: &AppConfig, cmd: Commands) -> Result<(), CliError> {
    if cmd.is_local() {
        return match cmd {
            Commands::Theme { action } => commands::run_theme_command(config, action),
            Commands::Config {
                action: ConfigCommands::Generate { output_path, force },
            } => commands::config_generate(output_path, force).await,
            _ => Err(CliError::CommandError("Not a local command".to_string())),
        };
    }

    if let Commands::Login { username } = cmd {
        return commands::login(config, username).await;
    }

    let assume_yes = match &cmd {
        Commands::Start { yes } => *yes,
        Commands::Masks {
            action: crate::cli::MaskCommands::Delete { yes, .. },
        } => *yes,
        _ => false,
    };
    let dashboard = connect(config, assume_yes).await?;

    match cmd {
        Commands::Status => commands::show_status(&dashboard).await,
        Commands::Start { .. } => commands::start_system(&dashboard).await,
        Commands::Stop => commands::stop_system(&dashboard).await,
        Commands::Settings { action } => commands::run_settings_command(&dashboard, action).await,
        Commands::Masks { action } => commands::run_mask_command(&dashboard, action).await,
        Commands::Logs { status, date } => commands::show_logs(&dashboard, status, date).await,
        Commands::Biometric { action } => {
            commands::run_biometric_command(&dashboard, action).await
        }
        Commands::Archive { action } => commands::run_archive_command(&dashboard, action).await,
        Commands::Login { .. } | Commands::Theme { .. } | Commands::Config { .. } => {
            Err(CliError::CommandError("Handled above".to_string()))
        }
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started from the mode router".to_string(),
        )),
    }
}
