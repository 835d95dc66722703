//! User interfaces
//!
//! Both front ends drive the same [`crate::dashboard`] controllers.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
