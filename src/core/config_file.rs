//! User configuration file handling
//!
//! Manages settings from ~/.config/notoconf/settings.json

use crate::catalog::BUILTIN_CATALOG_JSON;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// User configuration from ~/.config/notoconf/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Builder invocation placed before the compiled flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<String>,
    /// Catalog JSON replacing the builtin catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Show non-featured scripts in the script list by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_all_scripts: Option<bool>,
    /// Log level filter, e.g. "info" or "notoconf=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl ConfigFile {
    /// Get the path to the notoconf config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("notoconf")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> anyhow::Result<Option<Self>> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file; a missing file gives `None`
    ///
    /// Read and parse failures are returned so the caller can report them
    /// once logging is up.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {:?}", path))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings {:?}", path))?;
        debug!("Loaded user settings from {:?}", path);
        Ok(Some(config))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the complete user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/notoconf directory structure
    /// 2. A settings.json file with default values
    /// 3. A catalog.json copy of the builtin catalog
    /// 4. A logs/ directory for application logs
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    pub fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            let example = ConfigFile {
                builder: Some(crate::command::DEFAULT_BUILDER.to_string()),
                catalog: None,
                show_all_scripts: Some(false),
                log_level: Some("info".to_string()),
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        let catalog_path = config_dir.join("catalog.json");
        if !catalog_path.exists() {
            fs::write(&catalog_path, BUILTIN_CATALOG_JSON)?;
            println!("Copied builtin catalog: {:?}", catalog_path);
        } else {
            println!("Catalog already exists: {:?}", catalog_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - Customize the catalog at: {:?}", catalog_path);
        println!("    (set \"catalog\" in settings.json to use it)");
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}
