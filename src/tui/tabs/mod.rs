use crate::selection::{FieldChange, MultiAxis};
use crate::session::Session;
use crossterm::event::KeyEvent;
use form::{FormState, Row};
use ratatui::{layout::Rect, Frame};

pub mod family;
pub mod form;
pub mod help;
pub mod scripts;
pub mod styles;
pub mod subsets;
pub mod swaps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabType {
    Scripts,
    Family,
    Styles,
    Subsets,
    Swaps,
    Help,
}

impl TabType {
    pub const ALL: [TabType; 6] = [
        TabType::Scripts,
        TabType::Family,
        TabType::Styles,
        TabType::Subsets,
        TabType::Swaps,
        TabType::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TabType::Scripts => "Scripts",
            TabType::Family => "Family",
            TabType::Styles => "Styles",
            TabType::Subsets => "Subsets",
            TabType::Swaps => "Swaps",
            TabType::Help => "Help",
        }
    }
}

pub struct Tab {
    pub tab_type: TabType,
    pub state: TabState,
}

#[derive(Debug, Clone)]
pub enum TabState {
    Scripts(scripts::ScriptsState),
    Family(FormState),
    Styles(FormState),
    Subsets(FormState),
    Swaps(FormState),
    Help(help::HelpState),
}

impl Tab {
    pub fn new(tab_type: TabType, show_all_scripts: bool) -> Self {
        let state = match tab_type {
            TabType::Scripts => TabState::Scripts(scripts::ScriptsState::new(show_all_scripts)),
            TabType::Family => TabState::Family(FormState::new()),
            TabType::Styles => TabState::Styles(FormState::new()),
            TabType::Subsets => TabState::Subsets(FormState::new()),
            TabType::Swaps => TabState::Swaps(FormState::new()),
            TabType::Help => TabState::Help(help::HelpState::new()),
        };

        Self { tab_type, state }
    }

    /// Whether keystrokes currently go into a text field
    pub fn is_capturing_text(&self) -> bool {
        match &self.state {
            TabState::Scripts(state) => state.is_filtering,
            TabState::Family(state)
            | TabState::Styles(state)
            | TabState::Subsets(state)
            | TabState::Swaps(state) => state.is_editing(),
            TabState::Help(_) => false,
        }
    }

    /// Handle a key; returns the field change it produced, if any
    pub fn handle_key_event(&mut self, key: KeyEvent, session: &Session) -> Option<FieldChange> {
        match &mut self.state {
            TabState::Scripts(state) => scripts::handle_key_event(state, key, session),
            TabState::Family(state) => state.handle_key_event(key, &family::rows(session)),
            TabState::Styles(state) => state.handle_key_event(key, &styles::rows(session)),
            TabState::Subsets(state) => state.handle_key_event(key, &subsets::rows(session)),
            TabState::Swaps(state) => state.handle_key_event(key, &swaps::rows(session)),
            TabState::Help(state) => {
                help::handle_key_event(state, key);
                None
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame, session: &Session, area: Rect) {
        let title = self.tab_type.title();
        match &mut self.state {
            TabState::Scripts(state) => scripts::draw(f, state, session, area),
            TabState::Family(state) => form::draw(f, state, &family::rows(session), title, area),
            TabState::Styles(state) => form::draw(f, state, &styles::rows(session), title, area),
            TabState::Subsets(state) => {
                form::draw(f, state, &subsets::rows(session), title, area)
            }
            TabState::Swaps(state) => form::draw(f, state, &swaps::rows(session), title, area),
            TabState::Help(state) => help::draw(f, state, area),
        }
    }
}

/// All selectable values of the axis are picked
pub fn all_selected(session: &Session, axis: MultiAxis) -> bool {
    let state = session.state();
    let mut selectable = session
        .catalog()
        .entries(axis.axis())
        .into_iter()
        .filter(|entry| !entry.disabled)
        .peekable();
    selectable.peek().is_some() && selectable.all(|entry| state.is_selected(axis, &entry.value))
}

/// The "select all" switch of an axis
pub fn select_all_row(session: &Session, axis: MultiAxis, label: &str) -> Row {
    let on = all_selected(session, axis);
    Row::check(label, on, FieldChange::SelectAll { axis, on: !on })
}

/// One checkbox per catalog entry of the axis
pub fn axis_rows(session: &Session, axis: MultiAxis, enabled: impl Fn(&str) -> bool) -> Vec<Row> {
    session
        .catalog()
        .entries(axis.axis())
        .into_iter()
        .map(|entry| {
            let selected = session.state().is_selected(axis, &entry.value);
            Row::check(
                &entry.name,
                selected,
                FieldChange::Toggle {
                    axis,
                    value: entry.value.clone(),
                    selected: !selected,
                },
            )
            .disabled(entry.disabled || !enabled(&entry.value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use form::RowKind;

    #[test]
    fn test_select_all_row_flips() {
        let mut session = Session::new(Catalog::builtin().unwrap());
        let row = select_all_row(&session, MultiAxis::Weight, "All weights");
        let RowKind::Choice { checked, change, .. } = row.kind else {
            panic!("expected a choice row");
        };
        assert!(!checked);
        session.on_field_changed(change);
        assert!(all_selected(&session, MultiAxis::Weight));

        let row = select_all_row(&session, MultiAxis::Weight, "All weights");
        assert!(matches!(
            row.kind,
            RowKind::Choice {
                checked: true,
                change: FieldChange::SelectAll { on: false, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_disabled_catalog_entries_are_dimmed() {
        let session = Session::new(Catalog::builtin().unwrap());
        let rows = axis_rows(&session, MultiAxis::Output, |_| true);
        let disabled: Vec<&str> = rows
            .iter()
            .filter(|row| row.disabled)
            .map(|row| row.label.as_str())
            .collect();
        assert_eq!(disabled, vec!["OTF", "VAR"]);
    }
}
