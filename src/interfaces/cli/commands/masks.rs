//! Mask commands

use colored::Colorize;

use crate::cli::MaskCommands;
use crate::dashboard::Dashboard;
use crate::interfaces::cli::{CliError, finish};

pub async fn run_mask_command(dashboard: &Dashboard, action: MaskCommands) -> Result<(), CliError> {
    match action {
        MaskCommands::List => {
            finish(dashboard.masks.refresh().await, "Mask request")?;
            let view = dashboard.masks.view();
            let view = view.read();
            if view.rows.is_empty() {
                println!("{} No masks", "ℹ".bold().blue());
            }
            for row in &view.rows {
                println!("  {}", row.label);
            }
            Ok(())
        }
        MaskCommands::Delete { filename, .. } => {
            finish(dashboard.masks.delete(&filename).await, "Mask delete")?;
            println!("{} {}", "✓".bold().green(), filename);
            Ok(())
        }
    }
}
