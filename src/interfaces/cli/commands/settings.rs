//! Camera settings commands

use colored::Colorize;

use crate::cli::SettingsCommands;
use crate::dashboard::Dashboard;
use crate::dashboard::settings::SettingsView;
use crate::interfaces::cli::{CliError, finish};

fn print_settings(view: &SettingsView) {
    for (camera_id, controls) in &view.cameras {
        println!("{} {}", "Camera".bold(), camera_id.to_string().bold().cyan());
        for (setting, checkbox) in &controls.flags {
            let state = if checkbox.checked {
                "on".green()
            } else {
                "off".red()
            };
            let lock = if checkbox.locked { " (locked)" } else { "" };
            println!("  {:<10} {}{}", setting.to_string(), state, lock.dimmed());
        }
        println!("  {:<10} {}s", "timeout", controls.timeout);
        println!("  {:<10} {}", "motion", controls.sensitivity_label);
    }
}

/// 编辑后打印同步结果，更新失败只作为警告显示
fn report_sync(view: &SettingsView) {
    match &view.last_sync_error {
        Some(error) => println!("{} {}", "⚠".bold().yellow(), error.yellow()),
        None => println!("{} Saved", "✓".bold().green()),
    }
}

pub async fn run_settings_command(
    dashboard: &Dashboard,
    action: SettingsCommands,
) -> Result<(), CliError> {
    let settings = &dashboard.settings;
    finish(settings.load().await, "Settings request")?;

    match action {
        SettingsCommands::Show => {
            print_settings(&settings.view().read());
            Ok(())
        }
        SettingsCommands::Set {
            camera,
            setting,
            enabled,
        } => {
            let outcome = settings.set_flag(camera, setting, enabled).await;
            report_sync(&settings.view().read());
            finish(outcome, "Setting update")
        }
        SettingsCommands::Timeout { camera, seconds } => {
            let outcome = settings.set_timeout(camera, seconds).await;
            report_sync(&settings.view().read());
            finish(outcome, "Timeout update")
        }
        SettingsCommands::Sensitivity { camera, value } => {
            let outcome = settings.commit_sensitivity(camera, value).await;
            report_sync(&settings.view().read());
            finish(outcome, "Sensitivity update")
        }
        SettingsCommands::Apply { camera } => finish(settings.apply(camera).await, "Apply"),
    }
}
