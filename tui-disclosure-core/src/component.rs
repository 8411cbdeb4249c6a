//! Component trait for UI elements driven by props and actions

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props carry the read-only data needed for rendering
/// 2. `handle_event` returns actions, it never mutates shared state
/// 3. `render` draws from props plus the component's own UI state
///
/// Components may keep small UI state in `&mut self` (cursor position, the
/// area they were last drawn into), but anything another component can
/// observe goes through actions.
///
/// # Example
///
/// ```ignore
/// use tui_disclosure_core::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps {
///     on: bool,
///     is_focused: bool,
/// }
///
/// impl Component<AppAction> for Toggle {
///     type Props<'a> = ToggleProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         if !props.is_focused {
///             return None;
///         }
///         match event {
///             EventKind::Key(key) if key.code == KeyCode::Enter => Some(AppAction::Flip),
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.on { "[x]" } else { "[ ]" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Map an event to the actions it should produce
    ///
    /// Returns any `IntoIterator<Item = A>`: `None`, `Some(action)`,
    /// an array or a `Vec`.
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
