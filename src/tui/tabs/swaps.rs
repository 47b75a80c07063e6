//! Swaps tab: alternate IJ and figure styles
//!
//! Picking the figure style that is already chosen clears it.

use super::form::Row;
use crate::selection::FieldChange;
use crate::session::Session;

pub fn rows(session: &Session) -> Vec<Row> {
    let state = session.state();
    let availability = session.availability();

    let mut rows = vec![
        Row::header("Glyphs"),
        Row::check(
            "Alternate IJ",
            state.swap_alt_ij,
            FieldChange::SwapAltIj(!state.swap_alt_ij),
        )
        .disabled(!availability.swap_alt_ij),
        Row::header("Figures"),
    ];
    rows.extend(session.catalog().figures.iter().map(|figure| {
        let checked = state.swap_figures == figure.value;
        let next = if checked {
            String::new()
        } else {
            figure.value.clone()
        };
        Row::radio(&figure.name, checked, FieldChange::SwapFigures(next))
            .disabled(figure.disabled || !availability.swap)
    }));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::selection::MultiAxis;
    use crate::tui::tabs::form::RowKind;

    fn change_of(row: &Row) -> FieldChange {
        match &row.kind {
            RowKind::Choice { change, .. } => change.clone(),
            _ => panic!("expected a choice row"),
        }
    }

    #[test]
    fn test_swaps_need_a_swapping_script() {
        let mut session = Session::new(Catalog::builtin().unwrap());
        assert!(rows(&session)
            .iter()
            .filter(|row| !matches!(row.kind, RowKind::Header))
            .all(|row| row.disabled));

        session.on_field_changed(FieldChange::Toggle {
            axis: MultiAxis::Scripts,
            value: "Greek".to_string(),
            selected: true,
        });
        let rows = rows(&session);
        // Alternate IJ also needs a contrast offering it
        assert!(rows[1].disabled);
        assert!(!rows[3].disabled);
    }

    #[test]
    fn test_figure_radio_toggles_off() {
        let mut session = Session::new(Catalog::builtin().unwrap());
        session.on_field_changed(FieldChange::Toggle {
            axis: MultiAxis::Scripts,
            value: "Latin".to_string(),
            selected: true,
        });
        session.on_field_changed(change_of(&rows(&session)[3]));
        assert_eq!(session.state().swap_figures, "onum");

        session.on_field_changed(change_of(&rows(&session)[3]));
        assert_eq!(session.state().swap_figures, "");
    }
}
