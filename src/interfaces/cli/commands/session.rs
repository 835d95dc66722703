//! 登录命令

use std::io::{self, IsTerminal};

use colored::Colorize;

use crate::config::AppConfig;
use crate::dashboard::{Dashboard, Outcome};
use crate::errors::DashboardError;
use crate::interfaces::cli::{CliError, connect};

/// 交互式输入密码
pub fn prompt_password(username: &str) -> Result<String, CliError> {
    if !io::stdin().is_terminal() {
        return Err(CliError::ConfigError(
            "No password configured. Set backend.password or OCTO__BACKEND__PASSWORD, or run interactively."
                .to_string(),
        ));
    }
    rpassword::prompt_password(format!("Password for {}: ", username))
        .map_err(|e| CliError::CommandError(format!("Failed to read password: {}", e)))
}

pub async fn login_with(
    dashboard: &Dashboard,
    username: &str,
    password: &str,
) -> Result<(), CliError> {
    match dashboard.session.login(username, password).await {
        Outcome::Completed => Ok(()),
        _ => Err(dashboard
            .session
            .failure()
            .unwrap_or_else(|| DashboardError::login("login failed"))
            .into()),
    }
}

/// 运行 login 命令
pub async fn login(config: &AppConfig, username: Option<String>) -> Result<(), CliError> {
    let username = username
        .or_else(|| config.backend.username.clone())
        .ok_or_else(|| CliError::ParseError("No username given".to_string()))?;
    let password = match &config.backend.password {
        Some(password) if config.backend.username.as_deref() == Some(username.as_str()) => {
            password.clone()
        }
        _ => prompt_password(&username)?,
    };

    let mut anonymous = config.clone();
    anonymous.backend.username = None;
    let dashboard = connect(&anonymous, false).await?;
    login_with(&dashboard, &username, &password).await?;

    let role = dashboard.session.view().read().role.clone();
    println!(
        "{} Logged in as {} ({})",
        "✓".bold().green(),
        username.cyan(),
        role.unwrap_or_else(|| "user".to_string()).dimmed()
    );
    Ok(())
}
