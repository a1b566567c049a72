//! # Actions
//!
//! Everything that can happen in the menu becomes an `Action`.
//! User presses Down? That's `Action::KeyPress(Key::Down)`.
//! A request finishes? That's `Action::ActionCompleted(text)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any work the
//! runtime must do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, TerminalSize};
use crate::dispatch::PostRequest;

/// Logical key codes. The terminal adapter maps physical keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Up,
    Down,
    Activate,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    KeyPress(Key),
    Resize { width: u16, height: u16 },
    /// Result text of a finished request (response body or error message).
    ActionCompleted(String),
}

/// What the runtime should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Run this request off the event loop and feed its result back
    /// as `Action::ActionCompleted`.
    Dispatch(PostRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::KeyPress(Key::Quit) => Effect::Quit,
        Action::KeyPress(Key::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
            Effect::None
        }
        Action::KeyPress(Key::Down) => {
            let last = app.row_count().saturating_sub(1);
            if app.cursor < last {
                app.cursor += 1;
            }
            Effect::None
        }
        Action::KeyPress(Key::Activate) => activate(app),
        Action::KeyPress(Key::Other) => Effect::None,
        Action::Resize { width, height } => {
            app.terminal_size = Some(TerminalSize { width, height });
            Effect::None
        }
        Action::ActionCompleted(text) => {
            app.last_response = Some(text);
            Effect::None
        }
    }
}

fn activate(app: &mut App) -> Effect {
    if app.cursor < app.items.len() {
        let index = app.cursor;
        if !app.selected.remove(&index) {
            app.selected.insert(index);
        }
        return Effect::None;
    }

    let Some((button_index, button)) = app.focused_button() else {
        return Effect::None;
    };
    match app.endpoints.get(button.target) {
        Some(url) => {
            info!("Button {} activated -> POST {}", button_index, url);
            Effect::Dispatch(PostRequest {
                button_index,
                url: url.clone(),
            })
        }
        None => {
            debug!(
                "Button {} has no endpoint (target {}, {} configured); ignoring",
                button_index,
                button.target,
                app.endpoints.len()
            );
            Effect::None
        }
    }
}
