//! Event payloads delivered to components

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// The event payload handed to [`Component::handle_event`](crate::Component::handle_event)
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event (press, repeat or release)
    Key(KeyEvent),
    /// Mouse event other than scrolling
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

impl EventKind {
    /// The key event, if this is a key press or auto-repeat
    ///
    /// Release events are filtered out so handlers fire once per keystroke
    /// on terminals that report them.
    pub fn key_press(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) if key.kind != KeyEventKind::Release => Some(key),
            _ => None,
        }
    }

    /// The key event, if this is a key release
    pub fn key_release(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) if key.kind == KeyEventKind::Release => Some(key),
            _ => None,
        }
    }

    /// Position of a left-button press (pointer activation)
    pub fn left_press(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some((*column, *row)),
            _ => None,
        }
    }

    /// Whether this is a left-button press inside `area`
    pub fn is_left_press_in(&self, area: Rect) -> bool {
        self.left_press()
            .is_some_and(|(column, row)| rect_contains(area, column, row))
    }
}

/// Check if a cell lies within `area`
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Result of mapping an event: actions to dispatch plus a render hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    /// Actions to dispatch, in order
    pub actions: Vec<A>,
    /// Whether a component consumed the event
    ///
    /// A consumed event must not be offered to anything else, even when it
    /// produced no actions.
    pub consumed: bool,
    /// Whether to force a re-render
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    /// Nobody handled the event
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            consumed: false,
            needs_render: false,
        }
    }

    /// Handled, but nothing to dispatch
    pub fn consumed() -> Self {
        Self {
            actions: Vec::new(),
            consumed: true,
            needs_render: false,
        }
    }

    /// Collect actions; the event counts as consumed when there is at least one
    pub fn from_actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let actions: Vec<A> = actions.into_iter().collect();
        Self {
            consumed: !actions.is_empty(),
            actions,
            needs_render: false,
        }
    }

    /// Mark that a render is needed
    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }

    /// Whether the event was consumed
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
        EventKind::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_press_filters_release() {
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(EventKind::Key(key).key_press().is_some());

        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::empty();
        let event = EventKind::Key(key);
        assert!(event.key_press().is_none());
        assert!(event.key_release().is_some());
    }

    #[test]
    fn test_left_press_in() {
        let area = Rect::new(2, 3, 10, 1);
        assert!(mouse(MouseEventKind::Down(MouseButton::Left), 2, 3).is_left_press_in(area));
        assert!(mouse(MouseEventKind::Down(MouseButton::Left), 11, 3).is_left_press_in(area));
        assert!(!mouse(MouseEventKind::Down(MouseButton::Left), 12, 3).is_left_press_in(area));
        assert!(!mouse(MouseEventKind::Down(MouseButton::Left), 2, 4).is_left_press_in(area));
        assert!(!mouse(MouseEventKind::Down(MouseButton::Right), 2, 3).is_left_press_in(area));
        assert!(!mouse(MouseEventKind::Up(MouseButton::Left), 2, 3).is_left_press_in(area));
    }

    #[test]
    fn test_outcome_consumed_follows_actions() {
        let outcome = EventOutcome::from_actions(None::<u8>);
        assert!(!outcome.is_consumed());

        let outcome = EventOutcome::from_actions([1u8, 2]);
        assert!(outcome.is_consumed());
        assert_eq!(outcome.actions, vec![1, 2]);

        let outcome = EventOutcome::<u8>::consumed();
        assert!(outcome.is_consumed());
        assert!(outcome.actions.is_empty());
    }
}
