//! Subsets tab: per-script presets, custom characters and vertical metrics

use super::form::Row;
use crate::selection::FieldChange;
use crate::session::Session;

pub fn rows(session: &Session) -> Vec<Row> {
    let state = session.state();
    let catalog = session.catalog();
    let availability = session.availability();
    let mut rows = Vec::new();

    for script in catalog.subset_scripts() {
        let enabled = availability.presets_enabled(&script.entry.value);
        rows.push(Row::header(&script.entry.name));
        rows.extend(script.subsets.iter().map(|preset| {
            Row::radio(
                &preset.name,
                state.preset_for(&script.entry.value) == Some(preset.value.as_str()),
                FieldChange::Preset {
                    script: script.entry.value.clone(),
                    preset: preset.value.clone(),
                },
            )
            .disabled(preset.disabled || !enabled)
        }));
    }

    rows.push(Row::header("Custom characters"));
    rows.push(Row::text(
        "Characters",
        &state.subset_chars,
        FieldChange::SubsetChars,
    ));

    let bounds = &catalog.metrics;
    rows.push(Row::header("Metrics"));
    rows.push(Row::text(
        &format!(
            "{} ({}..{})",
            bounds.ascender.name, bounds.ascender.min, bounds.ascender.max
        ),
        &state.metrics.ascender,
        FieldChange::Ascender,
    ));
    rows.push(Row::text(
        &format!(
            "{} ({}..{})",
            bounds.descender.name, bounds.descender.min, bounds.descender.max
        ),
        &state.metrics.descender,
        FieldChange::Descender,
    ));
    rows
}
