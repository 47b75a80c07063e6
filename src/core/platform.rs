//! Platform-specific functionality and error handling.
//!
//! This module provides process-level setup: panic handling that leaves
//! the terminal usable, error reporting, and CLI argument access.

/// Initialize panic handling.
///
/// A panic while the terminal interface is in raw mode would leave the
/// shell unusable, so the hook restores the terminal before the default
/// report is printed.
pub fn init_panic_handling() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        #[cfg(feature = "tui")]
        crate::tui::restore_terminal();
        default_hook(info);
    }));
}

/// Handle application errors: print to stderr and exit with code 1
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error running notoconf:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
