//! Cross-field consistency
//!
//! After any single-field change the selection is passed through an
//! ordered pipeline of stages. Each stage reads what the previous ones
//! produced: styles are settled before subset presets (Nastaliq blocks the
//! Arabic presets), and both before the swap controls. The pipeline is a
//! fixed point: reconciling an already consistent selection changes nothing.

pub mod known;
pub mod styles;
pub mod subsets;
pub mod swap;

use crate::catalog::Catalog;
use crate::selection::SelectionState;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Derived enablement of controls, recomputed on every pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// Styles made eligible by the selected scripts
    pub styles: BTreeSet<String>,
    /// Subset-capable script -> whether its presets are enabled
    pub presets: BTreeMap<String, bool>,
    /// Figure swap control
    pub swap: bool,
    /// Alternate IJ swap control
    pub swap_alt_ij: bool,
}

impl Availability {
    pub fn is_style_enabled(&self, style: &str) -> bool {
        self.styles.contains(style)
    }

    pub fn presets_enabled(&self, script: &str) -> bool {
        self.presets.get(script).copied().unwrap_or(false)
    }
}

/// A reconciliation stage
pub type Stage = fn(&Catalog, &mut SelectionState, &mut Availability);

/// Stages in application order
pub const PIPELINE: [(&str, Stage); 4] = [
    ("known-values", known::apply),
    ("styles", styles::apply),
    ("subsets", subsets::apply),
    ("swap", swap::apply),
];

#[derive(Debug, Clone)]
pub struct Reconciled {
    pub state: SelectionState,
    pub availability: Availability,
    /// Whether the pass altered the selection
    pub changed: bool,
}

/// Run every stage over a copy of `state`
pub fn reconcile(catalog: &Catalog, state: &SelectionState) -> Reconciled {
    let mut next = state.clone();
    let mut availability = Availability::default();
    for (name, stage) in PIPELINE {
        stage(catalog, &mut next, &mut availability);
        trace!(stage = name, "Reconcile stage applied");
    }
    let changed = next != *state;
    Reconciled {
        state: next,
        availability,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{FieldChange, MultiAxis};

    fn apply_all(catalog: &Catalog, changes: &[&str]) -> SelectionState {
        let mut state = SelectionState::new();
        for change in changes {
            let change: FieldChange = change.parse().unwrap();
            change.apply(catalog, &mut state);
            state = reconcile(catalog, &state).state;
        }
        state
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let scenarios: &[&[&str]] = &[
            &[],
            &["scripts=Latin,Arabic", "+styles=Kufi", "+styles=Nastaliq", "contrast=Sans"],
            &["scripts=Greek,Tamil", "styles=Italic,Kufi,Bogus", "swap_altIJ=true"],
            &["scripts=Cyrillic", "subset_chars=abc", "swap_figures=onum", "output=otf,ttf"],
            &["scripts_all=true", "weights_all=true", "contrast=Serif", "swap_altIJ=true"],
        ];
        for changes in scenarios {
            let once = reconcile(&catalog, &apply_all(&catalog, changes));
            let twice = reconcile(&catalog, &once.state);
            assert_eq!(once.state, twice.state, "not a fixed point: {changes:?}");
            assert_eq!(once.availability, twice.availability);
            assert!(!twice.changed);
        }
    }

    #[test]
    fn test_changed_signal() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = SelectionState::new();
        state.select(MultiAxis::Scripts, "Latin");
        let first = reconcile(&catalog, &state);
        assert!(first.changed, "default preset should have been picked");
        assert!(!reconcile(&catalog, &first.state).changed);
    }

    #[test]
    fn test_stage_order_styles_before_subsets() {
        // Nastaliq only becomes blocking once the styles stage has let it through
        let catalog = Catalog::builtin().unwrap();
        let state = apply_all(&catalog, &["scripts=Arabic", "+styles=Nastaliq"]);
        let result = reconcile(&catalog, &state);
        assert!(!result.availability.presets_enabled("Arabic"));
        assert_eq!(result.state.preset_for("Arabic"), None);
    }

    #[test]
    fn test_deselecting_all_scripts_clears_dependents() {
        let catalog = Catalog::builtin().unwrap();
        let state = apply_all(
            &catalog,
            &[
                "contrast=Sans",
                "scripts=Latin,Greek,Arabic",
                "styles=Italic,Kufi",
                "swap_altIJ=true",
                "swap_figures=tnum",
                "scripts=",
            ],
        );
        assert!(state.styles.is_empty());
        assert!(state.subset.values().all(String::is_empty));
        assert!(!state.swap_alt_ij);
        assert!(state.swap_figures.is_empty());
    }
}
