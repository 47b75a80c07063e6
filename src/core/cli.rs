//! Command line interface for the notoconf configurator
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Settings that also live in the user
//! configuration file are resolved here, with the command line winning.

use crate::catalog::Axis;
use crate::command::DEFAULT_BUILDER;
use crate::core::config_file::ConfigFile;
use crate::selection::FieldChange;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// notoconf CLI arguments
///
/// Examples:
///   notoconf                                          # Interactive configurator
///   notoconf --set scripts=Latin --set contrast=Sans  # Start with a selection
///   notoconf --no-tui --set scripts=Greek,Latin --set contrast=Serif
///   notoconf --no-tui --json --set +styles=Italic     # Print state as JSON
///   notoconf --list weight                            # Show catalog entries
///   notoconf --builder "notobuilder"                  # Different builder invocation
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "notoconf",
    version,
    about = "Configure a personal Noto font build",
    long_about = "notoconf lets you pick scripts, styles, weights, widths, metrics, character subsets and glyph swaps, keeps those choices consistent with each other, and compiles them into a single command line for the Noto font builder."
)]
pub struct CliArgs {
    /// Field changes applied in order before anything else
    ///
    /// Each change is `field=value`, the same event the interface
    /// produces when you tick a box or type into a field.
    #[clap(
        long = "set",
        short = 's',
        value_name = "FIELD=VALUE",
        allow_hyphen_values = true,
        help = "Apply a field change (repeatable)",
        long_help = "Apply a field change before starting. Repeatable, applied in order. Multi-select fields take comma-separated values (scripts=Latin,Greek); prefix the field with + or - to select or deselect one value (+styles=Italic). Other fields: name, version, contrast, ascender, descender, hinted, ui, swap_altIJ, swap_figures, subset.<Script>, subset_chars, <axis>_all."
    )]
    pub set: Vec<String>,

    /// Print the command and exit instead of opening the interface
    #[clap(
        long = "no-tui",
        help = "Print the compiled command and exit",
        long_help = "Run without the terminal interface: apply the --set changes, print the compiled command to stdout and exit. The exit status is 2 when the command is not ready (no contrast or no script selected)."
    )]
    pub no_tui: bool,

    /// Print state, availability and command as JSON (with --no-tui)
    #[clap(long = "json", help = "Print the full session snapshot as JSON")]
    pub json: bool,

    /// List the catalog entries of one axis and exit
    #[clap(
        long = "list",
        value_name = "AXIS",
        help = "List catalog entries of an axis",
        long_help = "List the catalog entries of one axis and exit. Axes: output, scripts, contrast, styles, weight, width, figures."
    )]
    pub list: Option<String>,

    /// Builder invocation placed in front of the flags
    #[clap(
        long = "builder",
        value_name = "COMMAND",
        help = "Builder invocation prefix",
        long_help = "Builder invocation placed in front of the compiled flags. Defaults to the settings file value, then to 'python ~/notobuilderCLI.py'."
    )]
    pub builder: Option<String>,

    /// Use a catalog JSON file instead of the builtin one
    #[clap(long = "catalog", value_name = "FILE", help = "Catalog JSON file")]
    pub catalog: Option<PathBuf>,

    /// List every script, not only the featured ones
    #[clap(long = "show-all-scripts", help = "Show non-featured scripts")]
    pub show_all_scripts: bool,

    /// Initialize user configuration directory with settings and catalog
    ///
    /// This creates the ~/.config/notoconf directory with:
    /// - settings.json: builder invocation, log level, script list defaults
    /// - catalog.json: a copy of the builtin catalog you can customize
    #[clap(
        long = "new-config",
        help = "Initialize user config directory",
        long_help = "Initialize the ~/.config/notoconf directory with a settings.json file and a copy of the builtin catalog."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.catalog {
            if !path.is_file() {
                return Err(format!(
                    "Catalog file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        if let Some(axis) = &self.list {
            if Axis::from_name(axis).is_none() {
                let available = Axis::ALL.map(|a| a.as_str()).join(", ");
                return Err(format!("Unknown axis: '{axis}'\nAvailable axes: {available}"));
            }
        }

        if self.json && !self.no_tui {
            return Err("--json only applies together with --no-tui".to_string());
        }

        for change in &self.set {
            if let Err(e) = change.parse::<FieldChange>() {
                return Err(format!("Invalid --set '{change}': {e}"));
            }
        }

        Ok(())
    }

    /// Parsed --set changes, in command line order
    pub fn changes(&self) -> anyhow::Result<Vec<FieldChange>> {
        self.set.iter().map(|change| change.parse()).collect()
    }

    /// Get the builder invocation from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--builder)
    /// 2. Config file setting (~/.config/notoconf/settings.json)
    /// 3. Built-in default
    pub fn get_builder(&self, config: Option<&ConfigFile>) -> String {
        if let Some(builder) = &self.builder {
            debug!("Using builder from CLI: {}", builder);
            return builder.clone();
        }
        if let Some(builder) = config.and_then(|c| c.builder.as_ref()) {
            debug!("Using builder from config file: {}", builder);
            return builder.clone();
        }
        DEFAULT_BUILDER.to_string()
    }

    /// Catalog file from CLI args or config file; `None` means builtin
    pub fn get_catalog_path(&self, config: Option<&ConfigFile>) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| config.and_then(|c| c.catalog.clone()))
    }

    pub fn get_show_all_scripts(&self, config: Option<&ConfigFile>) -> bool {
        self.show_all_scripts || config.and_then(|c| c.show_all_scripts).unwrap_or(false)
    }

    pub fn get_axis(&self) -> Option<Axis> {
        self.list.as_deref().and_then(Axis::from_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("notoconf").chain(args.iter().copied()))
    }

    #[test]
    fn test_deselect_changes_are_not_flags() {
        let args = parse(&["--set", "-scripts=Latin", "--set", "descender=-200"]);
        assert_eq!(args.set, vec!["-scripts=Latin", "descender=-200"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_set_is_repeatable_and_ordered() {
        let args = parse(&["--set", "scripts=Latin", "-s", "contrast=Sans", "--no-tui"]);
        assert!(args.validate().is_ok());
        let changes = args.changes().unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1], FieldChange::Contrast("Sans".to_string()));
    }

    #[test]
    fn test_validation_errors() {
        assert!(parse(&["--set", "bogus=1"]).validate().is_err());
        assert!(parse(&["--list", "colours"]).validate().is_err());
        assert!(parse(&["--json"]).validate().is_err());
        assert!(parse(&["--catalog", "/definitely/not/here.json"]).validate().is_err());
        assert!(parse(&["--list", "weight"]).validate().is_ok());
    }

    #[test]
    fn test_builder_priority() {
        let config = ConfigFile {
            builder: Some("from-config".to_string()),
            ..ConfigFile::default()
        };
        assert_eq!(parse(&["--builder", "from-cli"]).get_builder(Some(&config)), "from-cli");
        assert_eq!(parse(&[]).get_builder(Some(&config)), "from-config");
        assert_eq!(parse(&[]).get_builder(None), DEFAULT_BUILDER);
    }

    #[test]
    fn test_show_all_scripts_from_config() {
        let config = ConfigFile {
            show_all_scripts: Some(true),
            ..ConfigFile::default()
        };
        assert!(parse(&[]).get_show_all_scripts(Some(&config)));
        assert!(!parse(&[]).get_show_all_scripts(None));
    }
}
