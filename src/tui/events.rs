use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
    Quit,
}

/// Poll the terminal and forward key presses until Ctrl+Q or the receiver
/// goes away
pub async fn handle_events(tx: mpsc::UnboundedSender<InputEvent>) -> anyhow::Result<()> {
    loop {
        if event::poll(Duration::from_millis(16))? {
            let sent = match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if key_event.code == KeyCode::Char('q')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        let _ = tx.send(InputEvent::Quit);
                        break;
                    }
                    tx.send(InputEvent::Key(key_event))
                }
                Event::Resize(cols, rows) => tx.send(InputEvent::Resize(cols, rows)),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(16)).await;
    }
    Ok(())
}
