//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for octo-dashboard using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dashboard::SettingType;

/// OCTO CCTV dashboard client
#[derive(Parser)]
#[command(name = "octo-dashboard")]
#[command(version)]
#[command(about = "Terminal dashboard for the OCTO CCTV system", long_about = None)]
pub struct Cli {
    /// Configuration file (default: octo-dashboard.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Log in and check the credentials
    Login {
        /// Username (default: backend.username from config)
        username: Option<String>,
    },

    /// Show whether the CCTV system is running
    Status,

    /// Start the CCTV system with the stored camera settings
    Start {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Stop the CCTV system
    Stop,

    /// Per-camera settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Privacy masks
    Masks {
        #[command(subcommand)]
        action: MaskCommands,
    },

    /// Show backend log lines
    Logs {
        /// Level filter (INFO, WARNING, ERROR, ...)
        #[arg(long)]
        status: Option<String>,

        /// Log date (YYYY-MM-DD), default: newest log
        #[arg(long)]
        date: Option<String>,
    },

    /// Face recognition enrollment
    Biometric {
        #[command(subcommand)]
        action: BiometricCommands,
    },

    /// Recording archive on the remote server
    Archive {
        #[command(subcommand)]
        action: ArchiveCommands,
    },

    /// Day/night theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the settings of every camera
    Show,

    /// Enable or disable one setting
    Set {
        camera: u32,

        /// faces, motion, recording or triggered
        setting: SettingType,

        /// on/off, true/false, yes/no
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },

    /// Motion timeout in seconds
    Timeout { camera: u32, seconds: u32 },

    /// Motion sensitivity (5-100)
    Sensitivity { camera: u32, value: u32 },

    /// Push the stored settings of a camera to the running system
    Apply { camera: u32 },
}

#[derive(Subcommand)]
pub enum MaskCommands {
    /// List masks of all cameras
    List,

    /// Delete a mask file
    Delete {
        filename: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum BiometricCommands {
    /// Retrain the face recognition model
    Train,

    /// Upload photos of a person
    Upload {
        /// Person name
        name: String,

        /// Photo files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ArchiveCommands {
    /// Remote archive connection
    Settings {
        #[command(subcommand)]
        action: ArchiveSettingsCommands,
    },

    /// Find recordings of a day
    Search {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        from: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        to: Option<String>,
    },

    /// Search a day and download recordings
    Download {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        /// Download every file found
        #[arg(long, conflicts_with = "select", required_unless_present = "select")]
        all: bool,

        /// Positions in the search result, e.g. 1,3,4
        #[arg(long, value_delimiter = ',')]
        select: Vec<usize>,
    },
}

#[derive(Subcommand)]
pub enum ArchiveSettingsCommands {
    /// Show the stored connection
    Show,

    /// Store a new connection
    Set {
        #[arg(long)]
        host: String,

        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        path: Option<String>,

        /// Prompt for a new SSH password; without it the stored one is kept
        #[arg(long)]
        password: bool,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,

    /// Switch between day and night
    Toggle,
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: octo-dashboard.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Commands that never talk to the backend
    pub fn is_local(&self) -> bool {
        matches!(self, Commands::Theme { .. } | Commands::Config { .. })
    }
}
