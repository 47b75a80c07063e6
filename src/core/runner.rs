//! Application runner logic
//!
//! Handles the different ways to run notoconf: config initialization,
//! catalog listing, headless compilation and the terminal interface.

use crate::catalog::{Axis, Catalog};
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::logging;
use crate::session::Session;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Exit status of a headless run whose command is not ready
pub const EXIT_NOT_READY: i32 = 2;

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to appropriate runners.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        match ConfigFile::initialize_config_directory() {
            Ok(()) => {
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Failed to initialize config directory: {}", e);
                std::process::exit(1);
            }
        }
    }

    cli_args.validate().map_err(anyhow::Error::msg)?;

    let loaded = ConfigFile::load();
    let log_level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.as_ref())
        .and_then(|config| config.log_level.clone());

    if let Some(axis) = cli_args.get_axis() {
        logging::init_stderr(log_level.as_deref());
        let config = settings_or_warn(loaded);
        let catalog = load_catalog(&cli_args, config.as_ref())?;
        print!("{}", list_entries(&catalog, axis));
        return Ok(());
    }

    if cli_args.no_tui {
        logging::init_stderr(log_level.as_deref());
        let config = settings_or_warn(loaded);
        let session = build_session(&cli_args, config.as_ref())?;
        println!("{}", headless_output(&session, cli_args.json)?);
        if !session.is_ready() {
            std::process::exit(EXIT_NOT_READY);
        }
        Ok(())
    } else {
        #[cfg(feature = "tui")]
        {
            // The terminal belongs to the interface, so logs go to a file
            let _guard = logging::init_file(log_level.as_deref())?;
            let config = settings_or_warn(loaded);
            let session = build_session(&cli_args, config.as_ref())?;
            let show_all = cli_args.get_show_all_scripts(config.as_ref());
            let command = crate::tui::run_app_with_tui(session, show_all)?;
            println!("{}", command);
            Ok(())
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("TUI feature not compiled. Use --no-tui flag to run without TUI.");
            std::process::exit(1);
        }
    }
}

/// Settings when they loaded; a broken file is logged and ignored
pub fn settings_or_warn(loaded: Result<Option<ConfigFile>>) -> Option<ConfigFile> {
    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring user settings: {:#}", e);
            None
        }
    }
}

/// Builtin catalog unless a file is named on the command line or in settings
pub fn load_catalog(cli_args: &CliArgs, config: Option<&ConfigFile>) -> Result<Catalog> {
    match cli_args.get_catalog_path(config) {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            Catalog::load(&path).with_context(|| format!("Failed to load catalog {:?}", path))
        }
        None => Catalog::builtin(),
    }
}

/// A session with every `--set` change applied in order
pub fn build_session(cli_args: &CliArgs, config: Option<&ConfigFile>) -> Result<Session> {
    let catalog = load_catalog(cli_args, config)?;
    let mut session = Session::with_builder(catalog, &cli_args.get_builder(config));
    for change in cli_args.changes()? {
        session.on_field_changed(change);
    }
    Ok(session)
}

/// The command line, or the full snapshot as pretty JSON
pub fn headless_output(session: &Session, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&session.snapshot())?)
    } else {
        Ok(session.command_line())
    }
}

/// One line per entry: value, display name and markers
pub fn list_entries(catalog: &Catalog, axis: Axis) -> String {
    let entries = catalog.entries(axis);
    let width = entries.iter().map(|e| e.value.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        let mut line = format!("{:<width$}  {}", entry.value, entry.name);
        if entry.default {
            line.push_str("  (default)");
        }
        if entry.disabled {
            line.push_str("  (disabled)");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("notoconf").chain(list.iter().copied()))
    }

    #[test]
    fn test_build_session_applies_changes_in_order() {
        let cli = args(&[
            "--no-tui",
            "--set",
            "scripts=Latin",
            "--set",
            "contrast=Sans",
        ]);
        let session = build_session(&cli, None).unwrap();
        assert!(session.is_ready());
        assert_eq!(
            headless_output(&session, false).unwrap(),
            "python ~/notobuilderCLI.py --scripts Latin --contrast Sans --preset BasicLatin"
        );
    }

    #[test]
    fn test_builder_from_settings() {
        let config = ConfigFile {
            builder: Some("notobuilder".to_string()),
            ..ConfigFile::default()
        };
        let session = build_session(&args(&["--set", "ui=true"]), Some(&config)).unwrap();
        assert_eq!(session.command_line(), "notobuilder --ui");
    }

    #[test]
    fn test_json_output() {
        let session = build_session(&args(&["--set", "scripts=Greek"]), None).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&headless_output(&session, true).unwrap()).unwrap();
        assert_eq!(json["ready"], false);
        assert_eq!(json["state"]["scripts"][0]["value"], "Greek");
    }

    #[test]
    fn test_catalog_from_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, crate::catalog::BUILTIN_CATALOG_JSON).unwrap();
        let config = ConfigFile {
            catalog: Some(path),
            ..ConfigFile::default()
        };
        assert!(load_catalog(&args(&[]), Some(&config)).is_ok());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ \"scripts\": 5 }").unwrap();
        let config = ConfigFile {
            catalog: Some(broken),
            ..ConfigFile::default()
        };
        assert!(load_catalog(&args(&[]), Some(&config)).is_err());
    }

    #[test]
    fn test_broken_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ \"builder\": 7 }").unwrap();
        let loaded = ConfigFile::load_from(&path);
        assert!(loaded.is_err());
        assert_eq!(settings_or_warn(loaded), None);

        let config = ConfigFile {
            builder: Some("notobuilder".to_string()),
            ..ConfigFile::default()
        };
        assert_eq!(settings_or_warn(Ok(Some(config.clone()))), Some(config));
    }

    #[test]
    fn test_list_entries_marks_defaults_and_disabled() {
        let catalog = Catalog::builtin().unwrap();
        let listing = list_entries(&catalog, Axis::Output);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("otf"));
        assert!(lines[0].ends_with("(disabled)"));
        assert!(!lines[1].contains("(disabled)"));
    }
}
