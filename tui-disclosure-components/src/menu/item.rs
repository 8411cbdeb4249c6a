//! Menu item: a selectable leaf of the panel

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_disclosure_core::{key_matches, Component, EventKind, MountError, Scope};

use super::context::MenuContext;
use super::state::{FocusNode, FocusRequest, MenuAction};
use super::MenuPartProps;

/// A focusable, selectable menu entry
///
/// Activation (click, or Enter/Space while focused) records the selection,
/// closes the menu and returns focus to the trigger after the next render.
/// An item takes part in the menu only once it has been pushed into a
/// [`MenuPanel`](super::MenuPanel).
pub struct MenuItem {
    ctx: MenuContext,
    index: Option<usize>,
    label: String,
    area: Rect,
}

impl MenuItem {
    /// Mount an item inside a menu container's scope
    pub fn mount(scope: &Scope, label: impl Into<String>) -> Result<Self, MountError> {
        let ctx = scope.inject::<MenuContext>("MenuItem")?;
        Ok(Self {
            ctx,
            index: None,
            label: label.into(),
            area: Rect::default(),
        })
    }

    /// Position in the panel, `None` until pushed into one
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn attach(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self) -> bool {
        self.index
            .is_some_and(|i| self.ctx.is_focused(FocusNode::Item(i)))
    }

    /// Where the item was last drawn; empty while the panel is hidden
    pub fn area(&self) -> Rect {
        self.area
    }

    pub(crate) fn hide(&mut self) {
        self.area = Rect::default();
    }

    fn activate(&self, index: usize) -> Vec<MenuAction> {
        vec![
            MenuAction::Select(index),
            MenuAction::Close,
            MenuAction::FocusAfterRender(FocusRequest::Trigger),
        ]
    }
}

impl Component<MenuAction> for MenuItem {
    type Props<'a> = MenuPartProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = MenuAction> {
        let Some(index) = self.index else {
            return vec![];
        };
        if !self.ctx.is_open() {
            return vec![];
        }
        if event.is_left_press_in(self.area) {
            return self.activate(index);
        }
        match event.key_press() {
            Some(key)
                if self.is_focused() && key_matches(key, &self.ctx.keymap().item_activate) =>
            {
                self.activate(index)
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        let focused = self.is_focused();
        let marker = if focused { "› " } else { "  " };
        let style = if focused {
            props.style.focused
        } else {
            props.style.text
        };
        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(self.label.as_str(), style),
        ];
        if self.index.is_some() && self.ctx.selected() == self.index {
            spans.push(Span::styled(" ✓", props.style.indicator));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }
}
