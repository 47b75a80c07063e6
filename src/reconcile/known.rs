//! Drops values the catalog doesn't know or has disabled
//!
//! Selections can pick up stale values from outside (command line input, a
//! replaced catalog). They are removed silently instead of being rejected.

use super::Availability;
use crate::catalog::{Axis, Catalog};
use crate::selection::{MultiAxis, SelectionState};
use tracing::debug;

pub fn apply(catalog: &Catalog, state: &mut SelectionState, _availability: &mut Availability) {
    for axis in MultiAxis::ALL {
        let picks = state.picks_mut(axis);
        let before = picks.len();
        picks.retain(|value| catalog.is_selectable(axis.axis(), value));
        if picks.len() != before {
            debug!(axis = axis.as_str(), "Dropped unknown or disabled values");
        }
    }

    if !state.contrast.is_empty() && !catalog.is_selectable(Axis::Contrast, &state.contrast) {
        debug!(contrast = %state.contrast, "Dropped unknown contrast");
        state.contrast.clear();
    }

    if !state.swap_figures.is_empty() && !catalog.is_selectable(Axis::Figures, &state.swap_figures) {
        debug!(figures = %state.swap_figures, "Dropped unknown figure swap");
        state.swap_figures.clear();
    }

    state
        .subset
        .retain(|script, _| catalog.script(script).is_some_and(|s| s.has_subsets()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_disabled_values_are_dropped() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = SelectionState::new();
        state.select(MultiAxis::Output, "otf");
        state.select(MultiAxis::Output, "ttf");
        state.select(MultiAxis::Scripts, "Klingon");
        state.select(MultiAxis::Scripts, "Latin");
        state.select(MultiAxis::Weight, "Heavy");
        state.contrast = "Slab".to_string();
        state.swap_figures = "smcp".to_string();
        state.subset.insert("Hebrew".to_string(), "BasicHebrew".to_string());
        state.subset.insert("Latin".to_string(), "BasicLatin".to_string());

        apply(&catalog, &mut state, &mut Availability::default());

        assert_eq!(state.output.to_vec(), vec!["ttf"]);
        assert_eq!(state.scripts.to_vec(), vec!["Latin"]);
        assert!(state.weight.is_empty());
        assert!(state.contrast.is_empty());
        assert!(state.swap_figures.is_empty());
        assert_eq!(state.subset.keys().collect::<Vec<_>>(), vec!["Latin"]);
    }

    #[test]
    fn test_known_values_survive() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = SelectionState::new();
        state.select(MultiAxis::Width, "Condensed");
        state.contrast = "Serif".to_string();
        state.swap_figures = "onum".to_string();
        let before = state.clone();

        apply(&catalog, &mut state, &mut Availability::default());
        assert_eq!(state, before);
    }
}
