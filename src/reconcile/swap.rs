//! Swap control eligibility
//!
//! Swaps need a script that supports them (Latin, Greek, Cyrillic); the
//! alternate IJ additionally needs a contrast that allows it (Sans). Swap
//! fields are cleared whenever their control is disabled.

use super::Availability;
use crate::catalog::Catalog;
use crate::selection::SelectionState;

pub fn apply(catalog: &Catalog, state: &mut SelectionState, availability: &mut Availability) {
    let swap = state
        .scripts
        .values()
        .filter_map(|script| catalog.script(script))
        .any(|script| script.swaps);
    let alt_ij = swap
        && catalog
            .contrast(&state.contrast)
            .is_some_and(|contrast| contrast.alt_ij);

    if !swap {
        state.swap_figures.clear();
    }
    if !alt_ij {
        state.swap_alt_ij = false;
    }

    availability.swap = swap;
    availability.swap_alt_ij = alt_ij;
}
