//! Field change events
//!
//! Every user interaction is one `FieldChange`. Applying it mutates exactly
//! one field of the selection; restoring cross-field consistency is left to
//! reconciliation. Changes can also be written as `field=value` text, which
//! is how the command line feeds them in.

use super::{MultiAxis, SelectionState};
use crate::catalog::Catalog;
use anyhow::{anyhow, bail, Result};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Version(String),
    Contrast(String),
    /// Select or deselect one value of a multi-select axis
    Toggle {
        axis: MultiAxis,
        value: String,
        selected: bool,
    },
    /// Replace an axis' selection; list order is selection order
    Replace {
        axis: MultiAxis,
        values: Vec<String>,
    },
    /// The per-axis "select all" switch
    SelectAll { axis: MultiAxis, on: bool },
    Ascender(String),
    Descender(String),
    Hinted(bool),
    Ui(bool),
    SwapAltIj(bool),
    SwapFigures(String),
    Preset { script: String, preset: String },
    SubsetChars(String),
}

impl FieldChange {
    pub fn apply(self, catalog: &Catalog, state: &mut SelectionState) {
        match self {
            FieldChange::Name(name) => state.name = name,
            FieldChange::Version(version) => state.version = version,
            FieldChange::Contrast(contrast) => state.contrast = contrast,
            FieldChange::Toggle {
                axis,
                value,
                selected,
            } => {
                if selected {
                    state.select(axis, &value);
                } else {
                    state.deselect(axis, &value);
                }
            }
            FieldChange::Replace { axis, values } => {
                // Values already picked keep their stamp, new ones are newer
                let mut next_seq = state.next_seq();
                let previous = std::mem::take(state.picks_mut(axis));
                for value in values {
                    let seq = match previous.seq_of(&value) {
                        Some(seq) => seq,
                        None => {
                            next_seq += 1;
                            next_seq - 1
                        }
                    };
                    state.picks_mut(axis).insert(&value, seq);
                }
            }
            FieldChange::SelectAll { axis, on } => {
                if on {
                    for entry in catalog.entries(axis.axis()) {
                        if !entry.disabled {
                            state.select(axis, &entry.value);
                        }
                    }
                } else {
                    state.picks_mut(axis).clear();
                }
            }
            FieldChange::Ascender(text) => state.metrics.ascender = text,
            FieldChange::Descender(text) => state.metrics.descender = text,
            FieldChange::Hinted(on) => state.hinted = on,
            FieldChange::Ui(on) => state.ui = on,
            FieldChange::SwapAltIj(on) => state.swap_alt_ij = on,
            FieldChange::SwapFigures(figures) => state.swap_figures = figures,
            FieldChange::Preset { script, preset } => {
                state.subset.insert(script, preset);
            }
            FieldChange::SubsetChars(chars) => state.subset_chars = chars,
        }
    }

    /// Field name as used in `field=value` text
    pub fn field(&self) -> String {
        match self {
            FieldChange::Name(_) => "name".to_string(),
            FieldChange::Version(_) => "version".to_string(),
            FieldChange::Contrast(_) => "contrast".to_string(),
            FieldChange::Toggle { axis, .. } | FieldChange::Replace { axis, .. } => {
                axis.as_str().to_string()
            }
            FieldChange::SelectAll { axis, .. } => format!("{}_all", axis.as_str()),
            FieldChange::Ascender(_) => "ascender".to_string(),
            FieldChange::Descender(_) => "descender".to_string(),
            FieldChange::Hinted(_) => "hinted".to_string(),
            FieldChange::Ui(_) => "ui".to_string(),
            FieldChange::SwapAltIj(_) => "swap_altIJ".to_string(),
            FieldChange::SwapFigures(_) => "swap_figures".to_string(),
            FieldChange::Preset { script, .. } => format!("subset.{script}"),
            FieldChange::SubsetChars(_) => "subset_chars".to_string(),
        }
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => bail!("'{other}' is not a boolean for field '{field}'"),
    }
}

fn split_values(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn multi_axis(name: &str) -> Result<MultiAxis> {
    MultiAxis::from_name(name).ok_or_else(|| anyhow!("'{name}' is not a multi-select field"))
}

impl FromStr for FieldChange {
    type Err = anyhow::Error;

    /// Parse `field=value`. Multi-select fields take comma-separated
    /// values (`scripts=Latin,Greek`), `+field=value` selects one value and
    /// `-field=value` deselects it.
    fn from_str(s: &str) -> Result<Self> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected field=value, got '{s}'"))?;
        let field = field.trim();

        if let Some(axis) = field.strip_prefix('+') {
            return Ok(FieldChange::Toggle {
                axis: multi_axis(axis)?,
                value: value.trim().to_string(),
                selected: true,
            });
        }
        if let Some(axis) = field.strip_prefix('-') {
            return Ok(FieldChange::Toggle {
                axis: multi_axis(axis)?,
                value: value.trim().to_string(),
                selected: false,
            });
        }
        if let Some(script) = field.strip_prefix("subset.") {
            return Ok(FieldChange::Preset {
                script: script.to_string(),
                preset: value.trim().to_string(),
            });
        }

        let change = match field {
            "name" => FieldChange::Name(value.to_string()),
            "version" => FieldChange::Version(value.to_string()),
            "contrast" => FieldChange::Contrast(value.trim().to_string()),
            "ascender" => FieldChange::Ascender(value.to_string()),
            "descender" => FieldChange::Descender(value.to_string()),
            "hinted" => FieldChange::Hinted(parse_bool(field, value)?),
            "ui" => FieldChange::Ui(parse_bool(field, value)?),
            "swap_altIJ" => FieldChange::SwapAltIj(parse_bool(field, value)?),
            "swap_figures" => FieldChange::SwapFigures(value.trim().to_string()),
            "subset_chars" => FieldChange::SubsetChars(value.to_string()),
            "weights_all" => FieldChange::SelectAll {
                axis: MultiAxis::Weight,
                on: parse_bool(field, value)?,
            },
            "widths_all" => FieldChange::SelectAll {
                axis: MultiAxis::Width,
                on: parse_bool(field, value)?,
            },
            other => {
                if let Some(axis) = other.strip_suffix("_all") {
                    FieldChange::SelectAll {
                        axis: multi_axis(axis)?,
                        on: parse_bool(field, value)?,
                    }
                } else if let Some(axis) = MultiAxis::from_name(other) {
                    FieldChange::Replace {
                        axis,
                        values: split_values(value),
                    }
                } else {
                    bail!("Unknown field '{other}'");
                }
            }
        };
        Ok(change)
    }
}
