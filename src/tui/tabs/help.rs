use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct HelpState {
    pub scroll_offset: u16,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Handle key events for the Help tab
pub fn handle_key_event(state: &mut HelpState, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        KeyCode::Home => {
            state.scroll_offset = 0;
        }
        _ => {}
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::from(vec![Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    )])
}

/// Draw the Help tab UI
pub fn draw(f: &mut Frame, state: &mut HelpState, area: Rect) {
    let help_text = vec![
        heading("Global Controls:"),
        Line::from(""),
        Line::from("  Ctrl+Q / q     - Quit and print the command"),
        Line::from("  Ctrl+Y         - Copy the command to the clipboard"),
        Line::from("  Tab            - Next tab"),
        Line::from("  Shift+Tab      - Previous tab"),
        Line::from("  1-6            - Jump to tab by number"),
        Line::from(""),
        heading("Forms:"),
        Line::from(""),
        Line::from("  ↑/↓ or j/k     - Move between fields"),
        Line::from("  Space/Enter    - Toggle a box or pick an option"),
        Line::from("  Enter          - Edit a text field, Enter or Esc to finish"),
        Line::from("  Dimmed rows are not available for the current selection"),
        Line::from(""),
        heading("Scripts Tab:"),
        Line::from(""),
        Line::from("  /              - Filter scripts by name"),
        Line::from("  Esc            - Clear the filter"),
        Line::from("  a              - Select or deselect all scripts"),
        Line::from("  f              - Show all scripts, not only featured ones"),
        Line::from(""),
        heading("Command:"),
        Line::from(""),
        Line::from("  The command is READY once a contrast and at least one script"),
        Line::from("  are selected. Styles, presets and swaps follow the scripts:"),
        Line::from("  deselecting a script also drops what only it offered."),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true })
        .scroll((state.scroll_offset, 0));

    f.render_widget(paragraph, area);
}
