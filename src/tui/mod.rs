pub mod app;
pub mod clipboard;
pub mod events;
pub mod tabs;
pub mod ui;

use crate::session::Session;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

/// Run the interactive configurator; returns the final command line
pub fn run_app_with_tui(session: Session, show_all_scripts: bool) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_tui(session, show_all_scripts))
}

pub async fn run_tui(session: Session, show_all_scripts: bool) -> Result<String> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(session, show_all_scripts);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    let command = app.session.command_line();
    info!(ready = app.session.is_ready(), "Configurator closed");
    Ok(command)
}

/// Best-effort terminal reset, used from the panic hook
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
}
