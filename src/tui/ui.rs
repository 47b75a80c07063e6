use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(6),
            ]
            .as_ref(),
        )
        .split(f.size());

    // Draw tab bar
    draw_tabs(f, app, chunks[0]);

    // Draw current tab content
    let current_tab_idx = app.current_tab;
    app.tabs[current_tab_idx].draw(f, &app.session, chunks[1]);

    // The compiled command is always visible
    draw_command_bar(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let title = format!("{}.{}", i + 1, tab.tab_type.title());
            Line::from(title)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("notoconf"))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.current_tab)
        .divider("│");

    f.render_widget(tabs, area);
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let badge = if app.session.is_ready() {
        Span::styled(
            " READY ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " NOT READY ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut title = vec![Span::raw("Command "), badge];
    if let Some(status) = &app.status {
        let color = if status.is_error {
            Color::Red
        } else {
            Color::Green
        };
        title.push(Span::raw(" "));
        title.push(Span::styled(status.text.as_str(), Style::default().fg(color)));
    }

    let command = Paragraph::new(app.session.command_line())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(command, area);
}
