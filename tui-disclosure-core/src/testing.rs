//! Test utilities for tui-disclosure components
//!
//! - [`key`]: build a `KeyEvent` from a string (`key("ctrl+p")`)
//! - [`key_release`], [`click`]: the other inputs menus care about
//! - [`RenderHarness`]: render into a ratatui `TestBackend` and read the
//!   result back as plain text
//! - `assert_emitted!` / `assert_not_emitted!` / `count_emitted!` for
//!   checking the actions a handler returned
//!
//! # Example
//!
//! ```ignore
//! use tui_disclosure_core::testing::{key, RenderHarness};
//!
//! let actions: Vec<_> = trigger
//!     .handle_event(&EventKind::Key(key("enter")), props)
//!     .into_iter()
//!     .collect();
//! assert_emitted!(actions, MenuAction::Open);
//!
//! let mut harness = RenderHarness::new(30, 8);
//! let output = harness.render_to_string_plain(|frame| menu.render(frame, frame.area(), props));
//! assert!(output.contains("Options"));
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a key press from a key string.
///
/// # Examples
///
/// ```
/// use tui_disclosure_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// assert_eq!(key("space").code, KeyCode::Char(' '));
/// assert!(key("ctrl+p").modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a key release from a key string.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key_release(s: &str) -> KeyEvent {
    KeyEvent {
        kind: KeyEventKind::Release,
        ..key(s)
    }
}

/// Create a press for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string as an [`EventKind::Key`].
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Wrap a string of characters as one key event per character.
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// A left-button press at `(column, row)`.
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render components into an in-memory terminal.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a `width` x `height` buffer.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal should always initialize");
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    ///
    /// # Panics
    ///
    /// Panics if the draw fails.
    pub fn render(&mut self, f: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(f)
            .expect("drawing to TestBackend should not fail");
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return it as text without styling.
    pub fn render_to_string_plain(&mut self, f: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(f))
    }

    /// The buffer from the last draw.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }
}

/// Buffer contents as text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Text within `rect` of `buffer`, one line per row, trailing spaces trimmed.
pub fn buffer_rect_to_string_plain(buffer: &Buffer, rect: Rect) -> String {
    let rect = rect.intersection(buffer.area);
    (rect.y..rect.y + rect.height)
        .map(|y| {
            let line: String = (rect.x..rect.x + rect.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that an action matching the pattern was emitted.
///
/// ```ignore
/// assert_emitted!(actions, MenuAction::Focus(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count actions matching the pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
