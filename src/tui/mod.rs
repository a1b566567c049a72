//! # TUI Adapter
//!
//! The terminal-specific layer. Owns the event loop, translates crossterm
//! events into core `Action`s, runs requests produced by the core in the
//! background, and draws the frame built by [`ui::render_frame`].
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The frame is rebuilt from scratch only after something happened: a key,
//! a resize, or a finished request. Idle iterations just poll.

pub mod event;
pub mod text;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::config::ResolvedConfig;
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::dispatch::{Dispatcher, HttpDispatcher, PostRequest};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// How long to wait for terminal input before checking for finished requests.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let dispatcher: Arc<dyn Dispatcher> = Arc::new(HttpDispatcher::new(config.timeout));
    let mut app = App::new(dispatcher, config.endpoints);
    let theme = Theme::default();

    // Raw mode + alternate screen; restored below even when the loop fails.
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &theme);
    ratatui::restore();

    info!("Event loop finished");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    theme: &Theme,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // The terminal reports no size until it changes, so seed it once.
    let size = terminal.size()?;
    let initial = Action::Resize {
        width: size.width,
        height: size.height,
    };
    apply(app, initial, &tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let frame = ui::render_frame(app, theme);
            ui::draw(terminal.backend_mut(), &frame)?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = poll_event_timeout(POLL_TIMEOUT)?;
        while let Some(action) = pending {
            needs_redraw = true;
            if apply(app, action, &tx) {
                should_quit = true;
                break;
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        // Handle results of background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(app, action, &tx);
        }
    }

    Ok(())
}

/// Runs one action through the core and carries out its effect.
/// Returns true when the loop should stop.
fn apply(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => {
            info!("Quit requested");
            true
        }
        Effect::Dispatch(request) => {
            spawn_request(app, request, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Runs `request` on the tokio runtime. Overlapping requests are allowed;
/// each reports back independently.
fn spawn_request(app: &App, request: PostRequest, tx: mpsc::Sender<Action>) {
    let dispatcher = app.dispatcher.clone();
    tokio::spawn(async move {
        let button_index = request.button_index;
        let text = request.run(dispatcher.as_ref()).await;
        if tx.send(Action::ActionCompleted(text)).is_err() {
            warn!(
                "Failed to deliver result of button {}: receiver dropped",
                button_index
            );
        }
    });
}
