//! Status / start / stop commands

use colored::Colorize;

use crate::dashboard::Dashboard;
use crate::dashboard::system_control::SystemView;
use crate::interfaces::cli::{CliError, finish};

fn print_status(view: &SystemView) {
    let status = if view.start.enabled {
        view.status_text.red()
    } else {
        view.status_text.green()
    };
    println!("{}", "CCTV System".bold().green());
    println!("  {}: {}", "Status".cyan(), status);
    println!(
        "  {}: {}",
        "Actions".cyan(),
        match (view.start.enabled, view.stop.enabled) {
            (true, _) => "start",
            (_, true) => "stop",
            _ => "-",
        }
    );
}

pub async fn show_status(dashboard: &Dashboard) -> Result<(), CliError> {
    let outcome = dashboard.system.refresh_status().await;
    finish(outcome, "Status request")?;
    print_status(&dashboard.system.view().read());
    Ok(())
}

pub async fn start_system(dashboard: &Dashboard) -> Result<(), CliError> {
    dashboard.system.refresh_status().await;
    if !dashboard.system.view().read().start.enabled {
        println!("{} System is already running", "ℹ".bold().blue());
        return Ok(());
    }
    finish(dashboard.system.start().await, "Start")
}

pub async fn stop_system(dashboard: &Dashboard) -> Result<(), CliError> {
    dashboard.system.refresh_status().await;
    if !dashboard.system.view().read().stop.enabled {
        println!("{} System is not running", "ℹ".bold().blue());
        return Ok(());
    }
    finish(dashboard.system.stop().await, "Stop")
}
