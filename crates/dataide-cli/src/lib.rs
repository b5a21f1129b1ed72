//! `dataide` command-line components.
//!
//! - **cli**: clap argument definitions and logging precedence
//! - **commands**: the generate, profile, charts and export commands
//! - **logging**: tracing subscriber setup
//! - **summary**: comfy-table renderings for the terminal

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
