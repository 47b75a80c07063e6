//! Static reference data for every option axis
//!
//! The catalog enumerates what can be selected: scripts and their subset
//! presets, output formats, contrast classes, styles, weights, widths and
//! figure swaps. It also carries the rules that tie axes together (which
//! styles a script unlocks, which styles block a script's presets, which
//! contrast allows the alternate IJ swap). The catalog never changes once
//! loaded; lookups go through tables built at load time.

pub mod filter;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// The catalog shipped with the binary
pub const BUILTIN_CATALOG_JSON: &str = include_str!("catalog.json");

fn is_false(value: &bool) -> bool {
    !*value
}

/// One selectable value on an axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display label
    pub name: String,
    /// Canonical identifier, unique within its axis
    pub value: String,
    /// Permanently unavailable (e.g. an output format the builder can't produce yet)
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub featured: bool,
}

/// A writing system, with the rules it contributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    #[serde(flatten)]
    pub entry: Entry,
    /// Styles this script makes eligible
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    /// Character-subset presets scoped to this script
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsets: Vec<Entry>,
    /// Selecting this script enables the swap controls
    #[serde(default, skip_serializing_if = "is_false")]
    pub swaps: bool,
    /// Selected styles that disable this script's presets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocking_styles: Vec<String>,
}

impl ScriptEntry {
    pub fn has_subsets(&self) -> bool {
        !self.subsets.is_empty()
    }

    pub fn preset(&self, value: &str) -> Option<&Entry> {
        self.subsets.iter().find(|preset| preset.value == value)
    }

    /// The preset auto-selected when this script's presets become available
    pub fn default_preset(&self) -> Option<&Entry> {
        self.subsets
            .iter()
            .find(|preset| preset.default && !preset.disabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    #[serde(flatten)]
    pub entry: Entry,
    /// At most one style of the same group may stay selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastEntry {
    #[serde(flatten)]
    pub entry: Entry,
    /// Whether the alternate IJ swap is available with this contrast
    #[serde(default, skip_serializing_if = "is_false")]
    pub alt_ij: bool,
}

/// Informational bounds for a vertical metric input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricBound {
    pub name: String,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricBounds {
    pub ascender: MetricBound,
    pub descender: MetricBound,
}

impl Default for MetricBounds {
    fn default() -> Self {
        Self {
            ascender: MetricBound {
                name: "Ascender".to_string(),
                min: 0,
                max: 1000,
            },
            descender: MetricBound {
                name: "Descender".to_string(),
                min: -1000,
                max: 0,
            },
        }
    }
}

/// Option axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Output,
    Scripts,
    Contrast,
    Styles,
    Weight,
    Width,
    Figures,
}

impl Axis {
    pub const ALL: [Axis; 7] = [
        Axis::Output,
        Axis::Scripts,
        Axis::Contrast,
        Axis::Styles,
        Axis::Weight,
        Axis::Width,
        Axis::Figures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Output => "output",
            Axis::Scripts => "scripts",
            Axis::Contrast => "contrast",
            Axis::Styles => "styles",
            Axis::Weight => "weight",
            Axis::Width => "width",
            Axis::Figures => "figures",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.as_str() == name)
    }
}

/// Immutable catalog of every axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub output: Vec<Entry>,
    #[serde(default)]
    pub scripts: Vec<ScriptEntry>,
    #[serde(default)]
    pub contrast: Vec<ContrastEntry>,
    #[serde(default)]
    pub styles: Vec<StyleEntry>,
    #[serde(default)]
    pub weight: Vec<Entry>,
    #[serde(default)]
    pub width: Vec<Entry>,
    #[serde(default)]
    pub figures: Vec<Entry>,
    #[serde(default)]
    pub metrics: MetricBounds,
    #[serde(skip)]
    index: HashMap<Axis, HashMap<String, usize>>,
}

impl Catalog {
    /// Parse the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON).context("Builtin catalog is invalid")
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(contents)?;
        catalog.validate()?;
        catalog.build_index();
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            let mut seen = HashSet::new();
            for entry in self.entries(axis) {
                if !seen.insert(entry.value.as_str()) {
                    bail!("Duplicate value '{}' on axis '{}'", entry.value, axis.as_str());
                }
            }
        }

        let styles: HashSet<&str> = self.styles.iter().map(|s| s.entry.value.as_str()).collect();
        for script in &self.scripts {
            let name = &script.entry.value;
            for style in script.styles.iter().chain(&script.blocking_styles) {
                if !styles.contains(style.as_str()) {
                    bail!("Script '{}' refers to unknown style '{}'", name, style);
                }
            }
            let mut presets = HashSet::new();
            for preset in &script.subsets {
                if !presets.insert(preset.value.as_str()) {
                    bail!("Script '{}' has duplicate preset '{}'", name, preset.value);
                }
            }
            if script.subsets.iter().filter(|p| p.default).count() > 1 {
                bail!("Script '{}' has more than one default preset", name);
            }
        }
        Ok(())
    }

    fn build_index(&mut self) {
        let mut index = HashMap::new();
        for axis in Axis::ALL {
            let by_value: HashMap<String, usize> = self
                .entries(axis)
                .into_iter()
                .enumerate()
                .map(|(i, entry)| (entry.value.clone(), i))
                .collect();
            index.insert(axis, by_value);
        }
        self.index = index;
    }

    /// All entries of an axis, in catalog order
    pub fn entries(&self, axis: Axis) -> Vec<&Entry> {
        match axis {
            Axis::Output => self.output.iter().collect(),
            Axis::Scripts => self.scripts.iter().map(|s| &s.entry).collect(),
            Axis::Contrast => self.contrast.iter().map(|c| &c.entry).collect(),
            Axis::Styles => self.styles.iter().map(|s| &s.entry).collect(),
            Axis::Weight => self.weight.iter().collect(),
            Axis::Width => self.width.iter().collect(),
            Axis::Figures => self.figures.iter().collect(),
        }
    }

    fn position(&self, axis: Axis, value: &str) -> Option<usize> {
        self.index.get(&axis).and_then(|by_value| by_value.get(value)).copied()
    }

    pub fn entry(&self, axis: Axis, value: &str) -> Option<&Entry> {
        let i = self.position(axis, value)?;
        self.entries(axis).get(i).copied()
    }

    /// Known and not permanently disabled
    pub fn is_selectable(&self, axis: Axis, value: &str) -> bool {
        self.entry(axis, value).is_some_and(|entry| !entry.disabled)
    }

    pub fn script(&self, value: &str) -> Option<&ScriptEntry> {
        self.position(Axis::Scripts, value).and_then(|i| self.scripts.get(i))
    }

    pub fn style(&self, value: &str) -> Option<&StyleEntry> {
        self.position(Axis::Styles, value).and_then(|i| self.styles.get(i))
    }

    pub fn contrast(&self, value: &str) -> Option<&ContrastEntry> {
        self.position(Axis::Contrast, value).and_then(|i| self.contrast.get(i))
    }

    /// Scripts owning at least one subset preset
    pub fn subset_scripts(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.scripts.iter().filter(|script| script.has_subsets())
    }
}
