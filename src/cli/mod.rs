//! Command-line interface for the Cover Art Archive client.
//!
//! This module provides the `caa` commands for inspecting cover art listings
//! and downloading images from the shell.

mod commands;

pub use commands::{Cli, run_command};
