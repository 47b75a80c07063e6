//! Row-based form shared by the configuration tabs
//!
//! Tabs describe their content as a list of [`Row`]s rebuilt from the
//! session on every frame; [`FormState`] only remembers the cursor and an
//! in-progress text edit. Activating a row yields the [`FieldChange`] it
//! stands for, which the app feeds back into the session.

use crate::selection::FieldChange;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone)]
pub enum RowKind {
    Header,
    /// Checkbox, or radio button when `radio` is set
    Choice {
        checked: bool,
        radio: bool,
        change: FieldChange,
    },
    /// Free text; every keystroke while editing emits `make(text)`
    Text {
        value: String,
        make: fn(String) -> FieldChange,
    },
}

#[derive(Debug, Clone)]
pub struct Row {
    pub label: String,
    pub kind: RowKind,
    pub disabled: bool,
}

impl Row {
    pub fn header(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: RowKind::Header,
            disabled: false,
        }
    }

    pub fn check(label: &str, checked: bool, change: FieldChange) -> Self {
        Self {
            label: label.to_string(),
            kind: RowKind::Choice {
                checked,
                radio: false,
                change,
            },
            disabled: false,
        }
    }

    pub fn radio(label: &str, checked: bool, change: FieldChange) -> Self {
        Self {
            label: label.to_string(),
            kind: RowKind::Choice {
                checked,
                radio: true,
                change,
            },
            disabled: false,
        }
    }

    pub fn text(label: &str, value: &str, make: fn(String) -> FieldChange) -> Self {
        Self {
            label: label.to_string(),
            kind: RowKind::Text {
                value: value.to_string(),
                make,
            },
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn is_focusable(&self) -> bool {
        !matches!(self.kind, RowKind::Header)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub selected: usize,
    /// Text being edited on the selected row
    pub editing: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Keep the cursor on a focusable row after the rows changed
    pub fn clamp(&mut self, rows: &[Row]) {
        if rows.is_empty() {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.min(rows.len() - 1);
        if !rows[self.selected].is_focusable() {
            self.select_next(rows);
        }
        if !rows[self.selected].is_focusable() {
            self.select_previous(rows);
        }
    }

    pub fn select_next(&mut self, rows: &[Row]) {
        if let Some(offset) = rows
            .iter()
            .skip(self.selected + 1)
            .position(Row::is_focusable)
        {
            self.selected += offset + 1;
        }
    }

    pub fn select_previous(&mut self, rows: &[Row]) {
        if let Some(i) = rows[..self.selected.min(rows.len())]
            .iter()
            .rposition(Row::is_focusable)
        {
            self.selected = i;
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, rows: &[Row]) -> Option<FieldChange> {
        self.clamp(rows);
        let row = rows.get(self.selected)?;

        if let Some(buffer) = &mut self.editing {
            let RowKind::Text { make, .. } = &row.kind else {
                self.editing = None;
                return None;
            };
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.editing = None;
                    None
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    Some(make(buffer.clone()))
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    Some(make(buffer.clone()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(rows);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous(rows);
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                self.clamp(rows);
                None
            }
            KeyCode::End => {
                self.selected = rows.len().saturating_sub(1);
                self.clamp(rows);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter if !row.disabled => match &row.kind {
                RowKind::Choice { change, .. } => Some(change.clone()),
                RowKind::Text { value, .. } => {
                    self.editing = Some(value.clone());
                    None
                }
                RowKind::Header => None,
            },
            _ => None,
        }
    }
}

fn row_line<'a>(row: &'a Row, editing: Option<&'a str>) -> Line<'a> {
    let style = if row.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    match &row.kind {
        RowKind::Header => Line::from(Span::styled(
            row.label.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        RowKind::Choice { checked, radio, .. } => {
            let mark = match (radio, checked) {
                (true, true) => "(•)",
                (true, false) => "( )",
                (false, true) => "[x]",
                (false, false) => "[ ]",
            };
            Line::from(Span::styled(format!("  {} {}", mark, row.label), style))
        }
        RowKind::Text { value, .. } => match editing {
            Some(buffer) => Line::from(vec![
                Span::styled(format!("  {}: ", row.label), style),
                Span::styled(
                    format!("{}_", buffer),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            None => Line::from(Span::styled(format!("  {}: {}", row.label, value), style)),
        },
    }
}

pub fn draw(f: &mut Frame, state: &mut FormState, rows: &[Row], title: &str, area: Rect) {
    state.clamp(rows);
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let editing = if i == state.selected {
                state.editing.as_deref()
            } else {
                None
            };
            ListItem::new(row_line(row, editing))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, Style::default().fg(Color::Green))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}
