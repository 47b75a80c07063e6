//! Subset preset enablement and defaulting
//!
//! A script's presets are enabled only while the script is selected, none of
//! its blocking styles is selected, and no explicit subset characters are
//! given. Disabled presets clear the script's entry. Enabled presets keep a
//! valid user choice and otherwise fall back to the default preset.

use super::Availability;
use crate::catalog::Catalog;
use crate::selection::SelectionState;
use tracing::debug;

pub fn apply(catalog: &Catalog, state: &mut SelectionState, availability: &mut Availability) {
    for script in catalog.subset_scripts() {
        let key = &script.entry.value;
        let blocked = script
            .blocking_styles
            .iter()
            .any(|style| state.styles.contains(style));
        let enabled =
            state.is_script_selected(key) && !blocked && state.subset_chars.is_empty();
        availability.presets.insert(key.clone(), enabled);

        let current = state.subset.entry(key.clone()).or_default();
        if !enabled {
            current.clear();
            continue;
        }

        let valid = script.preset(current).is_some_and(|preset| !preset.disabled);
        if !valid {
            *current = script
                .default_preset()
                .map(|preset| preset.value.clone())
                .unwrap_or_default();
            debug!(script = %key, preset = %current, "Selected default subset preset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::MultiAxis;

    fn run(state: &mut SelectionState) -> Availability {
        let catalog = Catalog::builtin().unwrap();
        let mut availability = Availability::default();
        apply(&catalog, state, &mut availability);
        availability
    }

    #[test]
    fn test_every_subset_script_gets_an_entry() {
        let mut state = SelectionState::new();
        let availability = run(&mut state);
        assert_eq!(
            state.subset.keys().collect::<Vec<_>>(),
            vec!["Arabic", "Cyrillic", "Greek", "Latin", "Tamil"]
        );
        assert!(state.subset.values().all(String::is_empty));
        assert!(availability.presets.values().all(|enabled| !enabled));
    }

    #[test]
    fn test_selecting_script_picks_default_preset() {
        let mut state = SelectionState::new();
        state.select(MultiAxis::Scripts, "Latin");
        state.select(MultiAxis::Scripts, "Tamil");
        let availability = run(&mut state);
        assert!(availability.presets_enabled("Latin"));
        assert!(!availability.presets_enabled("Greek"));
        assert_eq!(state.preset_for("Latin"), Some("BasicLatin"));
        assert_eq!(state.preset_for("Tamil"), Some("BasicTamil"));
        assert_eq!(state.preset_for("Greek"), None);
    }

    #[test]
    fn test_user_choice_survives_later_passes() {
        let mut state = SelectionState::new();
        state.select(MultiAxis::Scripts, "Latin");
        run(&mut state);
        state.subset.insert("Latin".to_string(), "UnicodeLatin".to_string());
        run(&mut state);
        assert_eq!(state.preset_for("Latin"), Some("UnicodeLatin"));
    }

    #[test]
    fn test_invalid_choice_falls_back_to_default() {
        let mut state = SelectionState::new();
        state.select(MultiAxis::Scripts, "Greek");
        state.subset.insert("Greek".to_string(), "BasicLatin".to_string());
        run(&mut state);
        assert_eq!(state.preset_for("Greek"), Some("BasicGreek"));
    }

    #[test]
    fn test_nastaliq_blocks_arabic_presets_only() {
        let mut state = SelectionState::new();
        state.select(MultiAxis::Scripts, "Arabic");
        state.select(MultiAxis::Scripts, "Cyrillic");
        state.select(MultiAxis::Styles, "Nastaliq");
        let availability = run(&mut state);
        assert!(!availability.presets_enabled("Arabic"));
        assert_eq!(state.preset_for("Arabic"), None);
        assert_eq!(state.preset_for("Cyrillic"), Some("BasicCyrillic"));

        state.deselect(MultiAxis::Styles, "Nastaliq");
        state.select(MultiAxis::Styles, "Kufi");
        run(&mut state);
        assert_eq!(state.preset_for("Arabic"), Some("BasicArabic"));
    }

    #[test]
    fn test_subset_chars_disable_all_presets() {
        let mut state = SelectionState::new();
        state.select(MultiAxis::Scripts, "Latin");
        run(&mut state);
        state.subset_chars = "abc".to_string();
        let availability = run(&mut state);
        assert!(!availability.presets_enabled("Latin"));
        assert!(state.subset.values().all(String::is_empty));

        state.subset_chars.clear();
        run(&mut state);
        assert_eq!(state.preset_for("Latin"), Some("BasicLatin"));
    }
}
