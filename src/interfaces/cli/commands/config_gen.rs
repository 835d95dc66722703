//! `config generate`：写出默认配置

use std::path::Path;

use colored::Colorize;

use crate::config::AppConfig;
use crate::dashboard::Dialogs;
use crate::interfaces::cli::{CliError, ConsoleDialogs};

const DEFAULT_OUTPUT: &str = "octo-dashboard.example.toml";

/// Write the default [`AppConfig`] as TOML. An existing file is only
/// replaced with `force` or after the console confirms it.
pub async fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    if !force
        && Path::new(&path).exists()
        && !ConsoleDialogs
            .confirm(&format!("{} уже существует. Перезаписать?", path))
            .await
    {
        println!("{}", "Отменено".yellow());
        return Ok(());
    }

    AppConfig::default().save_to_file(&path).map_err(|e| {
        CliError::CommandError(format!("Не удалось записать {}: {}", path, e))
    })?;

    println!("{} {}", "Конфигурация записана:".green(), path.blue());
    println!(
        "  {}",
        "Переменные окружения имеют приоритет, например OCTO__BACKEND__BASE_URL".dimmed()
    );
    Ok(())
}
