//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod archive;
mod biometric;
mod config_gen;
mod logs;
mod masks;
mod session;
mod settings;
mod system;
mod theme;

pub use archive::*;
pub use biometric::*;
pub use config_gen::*;
pub use logs::*;
pub use masks::*;
pub use session::*;
pub use settings::*;
pub use system::*;
pub use theme::*;

use colored::Colorize;

use crate::dashboard::view::{StatusKind, StatusPanel};

/// Print a controller status panel if it is showing
pub(crate) fn print_panel(panel: &StatusPanel) {
    if !panel.visible {
        return;
    }
    let line = match panel.kind {
        StatusKind::Success => format!("{} {}", "✓".bold().green(), panel.text),
        StatusKind::Error => format!("{} {}", "✗".bold().red(), panel.text.red()),
        StatusKind::Warning => format!("{} {}", "⚠".bold().yellow(), panel.text),
        StatusKind::Info => format!("{} {}", "ℹ".bold().blue(), panel.text),
    };
    println!("{}", line);
}
