use crate::session::Session;
use crate::tui::{
    clipboard,
    events::{handle_events, InputEvent},
    tabs::{Tab, TabType},
    ui,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// How long "Copied!" and similar notices stay in the command bar
pub const STATUS_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

pub struct App {
    pub session: Session,
    pub tabs: Vec<Tab>,
    pub current_tab: usize,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, show_all_scripts: bool) -> Self {
        let tabs = TabType::ALL
            .into_iter()
            .map(|tab_type| Tab::new(tab_type, show_all_scripts))
            .collect();

        Self {
            session,
            tabs,
            current_tab: 0,
            status: None,
            should_quit: false,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();

        // Spawn event handler
        tokio::spawn(handle_events(input_tx));

        let mut ticker = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            tokio::select! {
                // Each event runs to completion, reconcile and compile
                // included, before the next one is read
                input_event = input_rx.recv() => {
                    match input_event {
                        Some(InputEvent::Key(key)) => self.handle_key_event(key),
                        Some(InputEvent::Resize(_, _)) => {
                            // Terminal will automatically handle resize
                        }
                        Some(InputEvent::Quit) | None => {
                            self.should_quit = true;
                        }
                    }
                }

                _ = ticker.tick() => {
                    self.expire_status(Instant::now());
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let capturing = self.current().is_capturing_text();
        match (key.code, key.modifiers) {
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                self.copy_command();
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Tab, _) => {
                self.next_tab();
            }
            (KeyCode::BackTab, _) => {
                self.previous_tab();
            }
            (KeyCode::Char('q'), _) if !capturing => {
                self.should_quit = true;
            }
            (KeyCode::Char(c), _) if !capturing && c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    let tab_index = (digit as usize).saturating_sub(1);
                    if tab_index < self.tabs.len() {
                        self.current_tab = tab_index;
                    }
                }
            }
            _ => {
                // Forward key to current tab
                let current_tab_idx = self.current_tab;
                let change = self.tabs[current_tab_idx].handle_key_event(key, &self.session);
                if let Some(change) = change {
                    if self.session.on_field_changed(change) {
                        debug!(command = %self.session.command_line(), "Command updated");
                    }
                }
            }
        }
    }

    pub fn copy_command(&mut self) {
        let command = self.session.command_line();
        match clipboard::copy(&command) {
            Ok(()) => self.set_status("Copied!", false),
            Err(e) => {
                warn!("Failed to copy command: {}", e);
                self.set_status(&format!("Copy failed: {e}"), true);
            }
        }
    }

    pub fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(Status {
            text: text.to_string(),
            is_error,
            expires_at: Instant::now() + STATUS_DURATION,
        });
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|status| now >= status.expires_at) {
            self.status = None;
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = (self.current_tab + 1) % self.tabs.len();
    }

    pub fn previous_tab(&mut self) {
        if self.current_tab > 0 {
            self.current_tab -= 1;
        } else {
            self.current_tab = self.tabs.len() - 1;
        }
    }

    fn current(&self) -> &Tab {
        &self.tabs[self.current_tab]
    }
}
