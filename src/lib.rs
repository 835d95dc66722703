//! octo-dashboard - terminal dashboard for the OCTO CCTV system
//!
//! The CCTV backend does all the real work (capture, detection, recognition,
//! archiving); this crate is its operator console. It keeps local view models
//! in sync with the backend HTTP API and renders them in a TUI or a
//! one-shot CLI.
//!
//! # Features
//! - **cli**: Command-line interface
//! - **tui**: Terminal user interface (default entry point)
//!
//! # Architecture
//! - `client`: Backend HTTP API and its typed payloads
//! - `dashboard`: Controllers and view models, one per page
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

pub mod cli;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod system;
