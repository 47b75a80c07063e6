//! The user's current choices across all option axes
//!
//! Created empty at session start and mutated in place by field changes.
//! Multi-select axes keep insertion order and remember when each value was
//! picked, so rules that need "the most recent choice" never depend on
//! where a value happens to sit in a list.

pub mod change;

use crate::catalog::Axis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use change::FieldChange;

/// A selected value and the sequence number it was picked at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub value: String,
    pub seq: u64,
}

/// Ordered set of selected values for one axis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Picks(Vec<Pick>);

impl Picks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|pick| pick.value == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pick> {
        self.0.iter()
    }

    /// Values in selection order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|pick| pick.value.as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values().map(str::to_string).collect()
    }

    /// Highest sequence number on this axis, 0 when empty
    pub fn max_seq(&self) -> u64 {
        self.0.iter().map(|pick| pick.seq).max().unwrap_or(0)
    }

    pub fn seq_of(&self, value: &str) -> Option<u64> {
        self.0.iter().find(|pick| pick.value == value).map(|pick| pick.seq)
    }

    /// Append a value; returns false if it was already present
    pub fn insert(&mut self, value: &str, seq: u64) -> bool {
        if self.contains(value) {
            return false;
        }
        self.0.push(Pick {
            value: value.to_string(),
            seq,
        });
        true
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|pick| pick.value != value);
        self.0.len() != before
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|pick| keep(&pick.value));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Axes that accept several values at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiAxis {
    Output,
    Scripts,
    Styles,
    Weight,
    Width,
}

impl MultiAxis {
    pub const ALL: [MultiAxis; 5] = [
        MultiAxis::Output,
        MultiAxis::Scripts,
        MultiAxis::Styles,
        MultiAxis::Weight,
        MultiAxis::Width,
    ];

    pub fn axis(&self) -> Axis {
        match self {
            MultiAxis::Output => Axis::Output,
            MultiAxis::Scripts => Axis::Scripts,
            MultiAxis::Styles => Axis::Styles,
            MultiAxis::Weight => Axis::Weight,
            MultiAxis::Width => Axis::Width,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.axis().as_str()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.as_str() == name)
    }
}

/// Vertical metrics as typed; parsed only when compiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub ascender: String,
    pub descender: String,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            ascender: "0".to_string(),
            descender: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub name: String,
    pub version: String,
    pub output: Picks,
    pub scripts: Picks,
    pub contrast: String,
    pub styles: Picks,
    pub weight: Picks,
    pub width: Picks,
    pub metrics: Metrics,
    pub hinted: bool,
    pub ui: bool,
    /// Script value -> selected preset value, or empty
    pub subset: BTreeMap<String, String>,
    /// Explicit characters; overrides preset-based subsetting when non-empty
    pub subset_chars: String,
    #[serde(rename = "swap_altIJ")]
    pub swap_alt_ij: bool,
    pub swap_figures: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picks(&self, axis: MultiAxis) -> &Picks {
        match axis {
            MultiAxis::Output => &self.output,
            MultiAxis::Scripts => &self.scripts,
            MultiAxis::Styles => &self.styles,
            MultiAxis::Weight => &self.weight,
            MultiAxis::Width => &self.width,
        }
    }

    pub fn picks_mut(&mut self, axis: MultiAxis) -> &mut Picks {
        match axis {
            MultiAxis::Output => &mut self.output,
            MultiAxis::Scripts => &mut self.scripts,
            MultiAxis::Styles => &mut self.styles,
            MultiAxis::Weight => &mut self.weight,
            MultiAxis::Width => &mut self.width,
        }
    }

    pub fn is_selected(&self, axis: MultiAxis, value: &str) -> bool {
        self.picks(axis).contains(value)
    }

    /// Sequence number newer than every current pick
    pub fn next_seq(&self) -> u64 {
        MultiAxis::ALL
            .into_iter()
            .map(|axis| self.picks(axis).max_seq())
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Select a value, stamping it newer than every current pick
    pub fn select(&mut self, axis: MultiAxis, value: &str) -> bool {
        if self.is_selected(axis, value) {
            return false;
        }
        let seq = self.next_seq();
        self.picks_mut(axis).insert(value, seq)
    }

    pub fn deselect(&mut self, axis: MultiAxis, value: &str) -> bool {
        self.picks_mut(axis).remove(value)
    }

    pub fn is_script_selected(&self, script: &str) -> bool {
        self.scripts.contains(script)
    }

    /// Preset currently chosen for a script, if any
    pub fn preset_for(&self, script: &str) -> Option<&str> {
        self.subset
            .get(script)
            .map(String::as_str)
            .filter(|preset| !preset.is_empty())
    }
}
