//! Style eligibility and exclusive style groups
//!
//! A style is enabled iff a selected script lists it. Styles sharing an
//! `exclusive` group (Kufi, Nastaliq) can't be selected together: the one
//! picked last wins.

use super::Availability;
use crate::catalog::{Axis, Catalog};
use crate::selection::SelectionState;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

pub fn apply(catalog: &Catalog, state: &mut SelectionState, availability: &mut Availability) {
    let eligible = eligible_styles(catalog, state);
    state.styles.retain(|style| eligible.contains(style));
    resolve_exclusive(catalog, state);
    availability.styles = eligible;
}

/// Styles unlocked by the currently selected scripts
pub fn eligible_styles(catalog: &Catalog, state: &SelectionState) -> BTreeSet<String> {
    state
        .scripts
        .values()
        .filter_map(|script| catalog.script(script))
        .flat_map(|script| script.styles.iter())
        .filter(|style| catalog.is_selectable(Axis::Styles, style))
        .cloned()
        .collect()
}

fn resolve_exclusive(catalog: &Catalog, state: &mut SelectionState) {
    // group -> (winning style, its selection seq)
    let mut winners: HashMap<&str, (&str, u64)> = HashMap::new();
    for pick in state.styles.iter() {
        let Some(group) = catalog.style(&pick.value).and_then(|s| s.exclusive.as_deref()) else {
            continue;
        };
        let winner = winners.entry(group).or_insert((pick.value.as_str(), pick.seq));
        // Equal stamps only come from hand-built state; position breaks the tie
        if pick.seq >= winner.1 {
            *winner = (pick.value.as_str(), pick.seq);
        }
    }

    let losers: Vec<String> = state
        .styles
        .values()
        .filter(|style| {
            catalog
                .style(style)
                .and_then(|s| s.exclusive.as_deref())
                .and_then(|group| winners.get(group))
                .is_some_and(|(winner, _)| winner != style)
        })
        .map(str::to_string)
        .collect();

    for style in losers {
        debug!(style = %style, "Deselected style replaced by a later exclusive pick");
        state.styles.remove(&style);
    }
}
