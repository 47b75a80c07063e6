//! Core application functionality
//!
//! This module contains the application boundary:
//! - CLI parsing and validation
//! - User settings file handling
//! - Panic and error handling
//! - Running headless or with the terminal interface

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
