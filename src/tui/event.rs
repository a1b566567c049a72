use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::{Action, Key};

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<Action>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        Ok(translate(event))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<Action>> {
    poll_event_timeout(Duration::ZERO)
}

/// Maps a raw terminal event onto a core action. Mouse, focus and paste
/// events, as well as key releases, have no meaning here.
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(Action::KeyPress(map_key(key_event)))
        }
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Key {
    let modifiers = key_event.modifiers;
    match key_event.code {
        // Ctrl+C quits like `q`
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        // Any other Ctrl/Alt chord is unbound
        _ if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Key::Other,
        KeyCode::Char('q') => Key::Quit,
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Enter | KeyCode::Char(' ') => Key::Activate,
        _ => Key::Other,
    }
}
