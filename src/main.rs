use clap::{CommandFactory, Parser};

use octo_dashboard::cli::Cli;
use octo_dashboard::runtime::modes::{Mode, detect_mode};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match detect_mode(&cli) {
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return;
            };
            if let Err(e) =
                octo_dashboard::runtime::modes::run_cli(cli.config.as_deref(), command).await
            {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = octo_dashboard::runtime::modes::run_tui(cli.config.as_deref()).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Mode::Help => {
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
            }
        }
    }
}
