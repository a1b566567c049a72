//! # Application State
//!
//! Core menu state. This module contains domain data only -
//! no terminal types. Presentation (glyphs, colors) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── dispatcher: Arc<dyn Dispatcher>  // performs button requests
//! ├── endpoints: Vec<String>           // button target → URL
//! ├── items: Vec<SelectableItem>       // left column
//! ├── buttons: Vec<ActionButton>       // right column
//! ├── cursor: usize                    // index into items ++ buttons
//! ├── selected: HashSet<usize>         // checked item indices
//! ├── terminal_size: Option<TerminalSize>
//! └── last_response: Option<String>    // most recent request result
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashSet;
use std::sync::Arc;

use crate::dispatch::Dispatcher;

/// Labels of the checkable options, in display order.
pub const DEFAULT_ITEMS: [&str; 3] = ["Tea", "Coffee", "Milk"];

/// Labels of the action buttons, in display order. Button `i` targets endpoint `i`.
pub const DEFAULT_BUTTONS: [&str; 3] = ["Submit Option 1", "Submit Option 2", "Submit Option 3"];

/// A labeled, independently checkable list entry.
///
/// The checked flag is not stored here; membership in `App::selected` is the
/// single source of truth, see [`App::is_checked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub label: String,
}

/// A labeled entry that triggers a request instead of toggling state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    /// Index into `App::endpoints`.
    pub target: usize,
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

pub struct App {
    pub dispatcher: Arc<dyn Dispatcher>,
    pub endpoints: Vec<String>,
    pub items: Vec<SelectableItem>,
    pub buttons: Vec<ActionButton>,
    pub cursor: usize,
    pub selected: HashSet<usize>,
    /// None until the first resize event arrives.
    pub terminal_size: Option<TerminalSize>,
    pub last_response: Option<String>,
}

impl App {
    pub fn new(dispatcher: Arc<dyn Dispatcher>, endpoints: Vec<String>) -> Self {
        Self {
            dispatcher,
            endpoints,
            items: DEFAULT_ITEMS
                .iter()
                .map(|label| SelectableItem {
                    label: label.to_string(),
                })
                .collect(),
            buttons: DEFAULT_BUTTONS
                .iter()
                .enumerate()
                .map(|(target, label)| ActionButton {
                    label: label.to_string(),
                    target,
                })
                .collect(),
            cursor: 0,
            selected: HashSet::new(),
            terminal_size: None,
            last_response: None,
        }
    }

    /// Number of focusable rows: items followed by buttons.
    pub fn row_count(&self) -> usize {
        self.items.len() + self.buttons.len()
    }

    pub fn is_checked(&self, item_index: usize) -> bool {
        self.selected.contains(&item_index)
    }

    /// The button under the cursor, if the cursor is in the buttons region.
    pub fn focused_button(&self) -> Option<(usize, &ActionButton)> {
        let index = self.cursor.checked_sub(self.items.len())?;
        self.buttons.get(index).map(|button| (index, button))
    }
}
