//! Command compilation
//!
//! Maps a reconciled selection to the flag string understood by the font
//! builder. Flag groups come out in a fixed order and a group is left out
//! entirely when its value is empty. The exact bytes matter: the builder's
//! argument parser consumes them as-is.

mod number;

use crate::selection::SelectionState;
use serde::Serialize;
use std::collections::BTreeSet;

pub use number::{format_number, parse_number};

/// Builder invocation used when none is configured
pub const DEFAULT_BUILDER: &str = "python ~/notobuilderCLI.py";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledCommand {
    /// Flag groups in emission order, e.g. `--scripts Latin Greek`
    pub flags: Vec<String>,
    /// Contrast and at least one script are set
    pub ready: bool,
}

impl CompiledCommand {
    /// Flag groups joined by single spaces
    pub fn body(&self) -> String {
        self.flags.join(" ")
    }

    /// Full command line: `<builder> <flags>`
    pub fn render(&self, builder: &str) -> String {
        format!("{} {}", builder, self.body())
    }
}

fn push_list<'a>(flags: &mut Vec<String>, flag: &str, values: impl Iterator<Item = &'a str>) {
    let values: Vec<&str> = values.collect();
    if !values.is_empty() {
        flags.push(format!("{} {}", flag, values.join(" ")));
    }
}

pub fn compile(state: &SelectionState) -> CompiledCommand {
    let mut flags = Vec::new();

    if !state.name.is_empty() {
        flags.push(format!("--name \"{}\"", state.name.replace(' ', "-")));
    }
    if !state.version.is_empty() {
        flags.push(format!("--version {}", state.version));
    }
    push_list(&mut flags, "--output", state.output.values());
    push_list(&mut flags, "--scripts", state.scripts.values());
    if !state.contrast.is_empty() {
        flags.push(format!("--contrast {}", state.contrast));
    }
    push_list(&mut flags, "--styles", state.styles.values());
    push_list(&mut flags, "--weight", state.weight.values());
    push_list(&mut flags, "--width", state.width.values());

    if let Some(metrics) = metrics_flag(&state.metrics.ascender, &state.metrics.descender) {
        flags.push(metrics);
    }
    if state.hinted {
        flags.push("--hinted".to_string());
    }
    if state.ui {
        flags.push("--ui".to_string());
    }

    let presets: BTreeSet<&str> = state
        .subset
        .values()
        .map(String::as_str)
        .filter(|preset| !preset.is_empty())
        .collect();
    push_list(&mut flags, "--preset", presets.into_iter());

    if let Some(chars) = subset_chars_argument(&state.subset_chars) {
        flags.push(format!("--subset \"{chars}\""));
    }

    let mut swaps = Vec::new();
    if state.swap_alt_ij {
        swaps.push("altIJ");
    }
    if !state.swap_figures.is_empty() {
        swaps.push(state.swap_figures.as_str());
    }
    push_list(&mut flags, "--swap", swaps.into_iter());

    CompiledCommand {
        flags,
        ready: !state.contrast.is_empty() && !state.scripts.is_empty(),
    }
}

/// `--metrics "<asc> <desc>"` when both parse and at least one is non-zero
fn metrics_flag(ascender: &str, descender: &str) -> Option<String> {
    let ascender = parse_number(ascender)?;
    let descender = parse_number(descender)?;
    if ascender == 0.0 && descender == 0.0 {
        return None;
    }
    Some(format!(
        "--metrics \"{} {}\"",
        format_number(ascender),
        format_number(descender)
    ))
}

/// Deduplicated, space-free, sorted characters with `"` escaped
fn subset_chars_argument(chars: &str) -> Option<String> {
    let unique: BTreeSet<char> = chars.chars().filter(|c| *c != ' ').collect();
    if unique.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(unique.len());
    for c in unique {
        if c == '"' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Some(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::MultiAxis;

    #[test]
    fn test_empty_state_compiles_to_nothing() {
        let command = compile(&SelectionState::new());
        assert!(command.flags.is_empty());
        assert!(!command.ready);
        assert_eq!(command.render(DEFAULT_BUILDER), "python ~/notobuilderCLI.py ");
    }

    #[test]
    fn test_ready_example() {
        let mut state = SelectionState::new();
        state.contrast = "Sans".to_string();
        state.select(MultiAxis::Scripts, "Latin");
        state.subset.insert("Latin".to_string(), "BasicLatin".to_string());
        state.hinted = true;

        let command = compile(&state);
        assert!(command.ready);
        assert_eq!(
            command.render(DEFAULT_BUILDER),
            "python ~/notobuilderCLI.py --scripts Latin --contrast Sans --hinted --preset BasicLatin"
        );
    }

    #[test]
    fn test_not_ready_without_contrast_or_scripts() {
        let mut state = SelectionState::new();
        state.name = "Personal Noto".to_string();
        state.select(MultiAxis::Weight, "Bold");
        assert!(!compile(&state).ready);

        state.contrast = "Serif".to_string();
        assert!(!compile(&state).ready);

        state.contrast.clear();
        state.select(MultiAxis::Scripts, "Thai");
        assert!(!compile(&state).ready);
    }

    #[test]
    fn test_flag_order_is_fixed() {
        let mut state = SelectionState::new();
        state.swap_figures = "tnum".to_string();
        state.swap_alt_ij = true;
        state.subset_chars = "xy".to_string();
        state.subset.insert("Greek".to_string(), "BasicGreek".to_string());
        state.ui = true;
        state.hinted = true;
        state.metrics.ascender = "800".to_string();
        state.select(MultiAxis::Width, "Condensed");
        state.select(MultiAxis::Weight, "Thin");
        state.select(MultiAxis::Styles, "Italic");
        state.contrast = "Sans".to_string();
        state.select(MultiAxis::Scripts, "Greek");
        state.select(MultiAxis::Output, "woff2");
        state.version = "2.001".to_string();
        state.name = "My Font".to_string();

        assert_eq!(
            compile(&state).body(),
            "--name \"My-Font\" --version 2.001 --output woff2 --scripts Greek \
             --contrast Sans --styles Italic --weight Thin --width Condensed \
             --metrics \"800 0\" --hinted --ui --preset BasicGreek --subset \"xy\" \
             --swap altIJ tnum"
        );
    }

    #[test]
    fn test_multi_select_keeps_selection_order() {
        let mut state = SelectionState::new();
        state.select(MultiAxis::Weight, "Black");
        state.select(MultiAxis::Weight, "Thin");
        state.select(MultiAxis::Weight, "Regular");
        assert_eq!(compile(&state).body(), "--weight Black Thin Regular");
    }

    #[test]
    fn test_presets_sorted_and_deduplicated() {
        let mut state = SelectionState::new();
        state.subset.insert("Tamil".to_string(), "BasicTamil".to_string());
        state.subset.insert("Arabic".to_string(), "ExtendedArabic".to_string());
        state.subset.insert("Latin".to_string(), "BasicLatin".to_string());
        state.subset.insert("Greek".to_string(), String::new());
        state.subset.insert("Custom".to_string(), "BasicLatin".to_string());
        assert_eq!(
            compile(&state).body(),
            "--preset BasicLatin BasicTamil ExtendedArabic"
        );
    }

    #[test]
    fn test_subset_chars_example() {
        let mut state = SelectionState::new();
        state.subset_chars = "b a \"c".to_string();
        // '"' sorts before letters; spaces are dropped
        assert_eq!(compile(&state).body(), r#"--subset "\"abc""#);
    }

    #[test]
    fn test_subset_chars_deduplicated() {
        let mut state = SelectionState::new();
        state.subset_chars = "zzyxxé".to_string();
        assert_eq!(compile(&state).body(), "--subset \"xyzé\"");
    }

    #[test]
    fn test_subset_chars_only_spaces_is_omitted() {
        let mut state = SelectionState::new();
        state.subset_chars = "   ".to_string();
        assert!(compile(&state).flags.is_empty());
    }

    #[test]
    fn test_metrics_rules() {
        let cases = [
            ("0", "0", None),
            ("", "", None),
            ("800", "-200", Some("--metrics \"800 -200\"")),
            ("0", "-250", Some("--metrics \"0 -250\"")),
            (" 712.5 ", "0", Some("--metrics \"712.5 0\"")),
            ("abc", "-200", None),
            ("800", "low", None),
        ];
        for (ascender, descender, expected) in cases {
            assert_eq!(
                metrics_flag(ascender, descender).as_deref(),
                expected,
                "ascender={ascender:?} descender={descender:?}"
            );
        }
    }

    #[test]
    fn test_swap_tokens() {
        let mut state = SelectionState::new();
        state.swap_figures = "onum".to_string();
        assert_eq!(compile(&state).body(), "--swap onum");
        state.swap_alt_ij = true;
        state.swap_figures.clear();
        assert_eq!(compile(&state).body(), "--swap altIJ");
    }
}
