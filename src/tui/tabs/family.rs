//! Family tab: name, version, output formats, contrast and build flags

use super::axis_rows;
use super::form::Row;
use crate::selection::{FieldChange, MultiAxis};
use crate::session::Session;

pub fn rows(session: &Session) -> Vec<Row> {
    let state = session.state();
    let catalog = session.catalog();

    let mut rows = vec![
        Row::header("Family"),
        Row::text("Name", &state.name, FieldChange::Name),
        Row::text("Version", &state.version, FieldChange::Version),
        Row::header("Output"),
    ];
    rows.extend(axis_rows(session, MultiAxis::Output, |_| true));

    rows.push(Row::header("Contrast"));
    rows.extend(catalog.contrast.iter().map(|contrast| {
        let entry = &contrast.entry;
        Row::radio(
            &entry.name,
            state.contrast == entry.value,
            FieldChange::Contrast(entry.value.clone()),
        )
        .disabled(entry.disabled)
    }));

    rows.push(Row::header("Build"));
    rows.push(Row::check("Hinted", state.hinted, FieldChange::Hinted(!state.hinted)));
    rows.push(Row::check("UI variant", state.ui, FieldChange::Ui(!state.ui)));
    rows
}
