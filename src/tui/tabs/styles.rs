//! Styles tab: styles, weights and widths
//!
//! A style row is dimmed unless a selected script offers it.

use super::form::Row;
use super::{axis_rows, select_all_row};
use crate::selection::MultiAxis;
use crate::session::Session;

pub fn rows(session: &Session) -> Vec<Row> {
    let availability = session.availability();

    let mut rows = vec![Row::header("Styles")];
    rows.extend(axis_rows(session, MultiAxis::Styles, |style| {
        availability.is_style_enabled(style)
    }));

    rows.push(Row::header("Weight"));
    rows.push(select_all_row(session, MultiAxis::Weight, "All weights"));
    rows.extend(axis_rows(session, MultiAxis::Weight, |_| true));

    rows.push(Row::header("Width"));
    rows.push(select_all_row(session, MultiAxis::Width, "All widths"));
    rows.extend(axis_rows(session, MultiAxis::Width, |_| true));
    rows
}
