//! Presentation parameters for the menu frame.
//!
//! The renderer only sees a [`Theme`]: eight border glyphs and a handful of
//! text decorators. Decorators take plain text and return text that may
//! carry ANSI styling; the layout code measures through it.

use crossterm::style::{Color, Stylize};
use ratatui::symbols::border;

/// Wraps plain text in presentation (usually a color).
pub type Decorator = fn(&str) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

impl BorderGlyphs {
    /// `╭─╮ │ │ ╰─╯`
    pub fn rounded() -> Self {
        let set = border::ROUNDED;
        Self {
            top_left: set.top_left,
            top_right: set.top_right,
            bottom_left: set.bottom_left,
            bottom_right: set.bottom_right,
            top: set.horizontal_top,
            bottom: set.horizontal_bottom,
            left: set.vertical_left,
            right: set.vertical_right,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub glyphs: BorderGlyphs,
    pub border: Decorator,
    pub cursor: Decorator,
    pub checked: Decorator,
    pub item: Decorator,
    pub button: Decorator,
}

impl Theme {
    /// Rounded border with the menu's truecolor palette.
    pub fn colored() -> Self {
        Self {
            glyphs: BorderGlyphs::rounded(),
            border: |t: &str| t.with(rgb(0xFF, 0xB6, 0xC1)).to_string(),
            cursor: |t: &str| t.with(rgb(0xFF, 0xD7, 0x00)).to_string(),
            checked: |t: &str| t.with(rgb(0x98, 0xFB, 0x98)).to_string(),
            item: |t: &str| t.with(rgb(0x87, 0xCE, 0xFA)).to_string(),
            button: |t: &str| t.with(rgb(0xFF, 0x63, 0x47)).to_string(),
        }
    }

    /// Rounded border, no styling at all.
    pub fn plain() -> Self {
        Self {
            glyphs: BorderGlyphs::rounded(),
            border: str::to_string,
            cursor: str::to_string,
            checked: str::to_string,
            item: str::to_string,
            button: str::to_string,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}
