use std::sync::Arc;

use colored::Colorize;

use crate::cli::ThemeCommands;
use crate::config::AppConfig;
use crate::dashboard::{LocalStore, ThemeStore};
use crate::interfaces::cli::CliError;

pub fn run_theme_command(config: &AppConfig, action: ThemeCommands) -> Result<(), CliError> {
    let store = Arc::new(LocalStore::open(&config.dashboard.preferences_file));
    let themes = ThemeStore::new(store);
    let theme = match action {
        ThemeCommands::Show => themes.current(),
        ThemeCommands::Toggle => themes.toggle(),
    };
    println!("{} ({})", themes.label().bold(), theme.to_string().dimmed());
    Ok(())
}
