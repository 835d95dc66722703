//! Mode routing
//!
//! - CLI mode: one subcommand, then exit
//! - TUI mode: `tui` subcommand, or no subcommand when the feature is on

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Cli;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    /// Nothing to run; print usage
    Help,
}

/// Detect which mode to run from the parsed arguments
pub fn detect_mode(cli: &Cli) -> Mode {
    match &cli.command {
        #[cfg(feature = "tui")]
        Some(crate::cli::Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[cfg(not(feature = "cli"))]
        Some(_) => Mode::Help,
        #[cfg(feature = "tui")]
        None => Mode::Tui,
        #[cfg(not(feature = "tui"))]
        None => Mode::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    #[cfg(feature = "cli")]
    fn test_subcommand_selects_cli() {
        let cli = Cli::try_parse_from(["octo-dashboard", "status"]).unwrap();
        assert_eq!(detect_mode(&cli), Mode::Cli);
    }

    #[test]
    #[cfg(feature = "tui")]
    fn test_tui_is_default() {
        let cli = Cli::try_parse_from(["octo-dashboard"]).unwrap();
        assert_eq!(detect_mode(&cli), Mode::Tui);
        let cli = Cli::try_parse_from(["octo-dashboard", "tui"]).unwrap();
        assert_eq!(detect_mode(&cli), Mode::Tui);
    }
}
