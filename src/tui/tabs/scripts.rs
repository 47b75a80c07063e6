use super::form::{self, FormState, Row};
use super::{all_selected, axis_rows};
use crate::catalog::filter::ScriptFilter;
use crate::selection::{FieldChange, MultiAxis};
use crate::session::Session;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ScriptsState {
    pub filter: ScriptFilter,
    pub is_filtering: bool,
    pub form: FormState,
}

impl ScriptsState {
    pub fn new(show_all: bool) -> Self {
        Self {
            filter: ScriptFilter::new(show_all),
            is_filtering: false,
            form: FormState::new(),
        }
    }
}

/// Checkboxes for the scripts the filter lets through
pub fn rows(state: &ScriptsState, session: &Session) -> Vec<Row> {
    let catalog = session.catalog();
    let visible: Vec<&str> = state
        .filter
        .visible(catalog)
        .into_iter()
        .map(|script| script.entry.value.as_str())
        .collect();
    axis_rows(session, MultiAxis::Scripts, |_| true)
        .into_iter()
        .zip(&catalog.scripts)
        .filter(|(_, script)| visible.contains(&script.entry.value.as_str()))
        .map(|(row, _)| row)
        .collect()
}

pub fn handle_key_event(
    state: &mut ScriptsState,
    key: KeyEvent,
    session: &Session,
) -> Option<FieldChange> {
    if state.is_filtering {
        match key.code {
            KeyCode::Esc => {
                state.is_filtering = false;
                state.filter.clear();
            }
            KeyCode::Enter => {
                state.is_filtering = false;
            }
            KeyCode::Backspace => {
                state.filter.query.pop();
                state.form.selected = 0;
            }
            KeyCode::Char(c) => {
                state.filter.query.push(c);
                state.form.selected = 0;
            }
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('/') => {
            state.is_filtering = true;
            state.filter.clear();
            None
        }
        KeyCode::Esc => {
            state.filter.clear();
            None
        }
        KeyCode::Char('f') => {
            state.filter.show_all = !state.filter.show_all;
            None
        }
        KeyCode::Char('a') => Some(FieldChange::SelectAll {
            axis: MultiAxis::Scripts,
            on: !all_selected(session, MultiAxis::Scripts),
        }),
        _ => {
            let rows = rows(state, session);
            state.form.handle_key_event(key, &rows)
        }
    }
}

/// Draw the Scripts tab UI
pub fn draw(f: &mut Frame, state: &mut ScriptsState, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(area);

    let rows = rows(state, session);
    let title = format!(
        "Scripts ({} shown, {} selected)",
        rows.len(),
        session.state().scripts.len()
    );
    form::draw(f, &mut state.form, &rows, &title, chunks[0]);

    let controls_text = if state.is_filtering {
        format!(
            "Filter: {}_ | Press Esc to cancel, Enter to confirm",
            state.filter.query
        )
    } else {
        let listing = if state.filter.show_all {
            "all scripts"
        } else {
            "featured scripts"
        };
        let query = if state.filter.query.is_empty() {
            String::new()
        } else {
            format!("Filter: {} | ", state.filter.query)
        };
        format!(
            "{}Showing {} | Space toggle, / filter, a select all, f show all",
            query, listing
        )
    };

    let controls = Paragraph::new(controls_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Controls", Style::default().fg(Color::Green))),
    );

    f.render_widget(controls, chunks[1]);
}
