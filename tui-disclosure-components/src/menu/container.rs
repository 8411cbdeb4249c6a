//! Menu container: owns the menu state and lays out its parts

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};
use tui_disclosure_core::{Component, EventKind, EventOutcome, Scope};

use super::context::MenuContext;
use super::keymap::MenuKeymap;
use super::panel::MenuPanel;
use super::state::{MenuAction, MenuState};
use super::trigger::MenuTrigger;
use super::{MenuPartProps, MenuStyle};

/// Props for [`MenuContainer`]
pub struct MenuContainerProps<'a> {
    /// Title drawn on the wrapping border
    pub title: Option<&'a str>,
    pub style: &'a MenuStyle,
    /// Whether the menu has keyboard focus within the app
    pub is_focused: bool,
}

/// Owner of a menu's state
///
/// Mounting a container creates a child scope holding a fresh
/// [`MenuContext`]; the trigger, panel and items mount into that scope.
/// The container draws a bordered region with the trigger on the first row
/// and the panel (while open) below it, and routes events to the part that
/// holds focus or was clicked.
pub struct MenuContainer {
    ctx: MenuContext,
    scope: Scope,
    trigger: Option<MenuTrigger>,
    panel: Option<MenuPanel>,
}

impl MenuContainer {
    /// Mount with the default keymap
    pub fn mount(parent: &Scope) -> Self {
        Self::mount_with_keymap(parent, MenuKeymap::default())
    }

    pub fn mount_with_keymap(parent: &Scope, keymap: MenuKeymap) -> Self {
        let scope = parent.child();
        let ctx = MenuContext::new(keymap);
        scope.provide(ctx.clone());
        tracing::debug!(scope = ?scope.id(), "Mounted menu container");
        Self {
            ctx,
            scope,
            trigger: None,
            panel: None,
        }
    }

    /// Scope for the menu's parts
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn context(&self) -> &MenuContext {
        &self.ctx
    }

    pub fn menu_state(&self) -> MenuState {
        self.ctx.menu_state()
    }

    pub fn set_trigger(&mut self, trigger: MenuTrigger) {
        self.trigger = Some(trigger);
    }

    pub fn set_panel(&mut self, panel: MenuPanel) {
        self.ctx.set_item_count(panel.items().len());
        self.panel = Some(panel);
    }

    pub fn trigger(&self) -> Option<&MenuTrigger> {
        self.trigger.as_ref()
    }

    pub fn panel(&self) -> Option<&MenuPanel> {
        self.panel.as_ref()
    }

    /// Run an action through the menu reducer; true if the model changed
    pub fn dispatch(&self, action: MenuAction) -> bool {
        self.ctx.dispatch(action)
    }

    /// Apply deferred focus requests; call after each draw
    pub fn after_render(&self) -> bool {
        self.ctx.after_render()
    }

    /// Rows the container needs: border, trigger row and the open panel
    pub fn height(&self) -> u16 {
        let panel = match &self.panel {
            Some(panel) if self.ctx.is_open() => panel.height(),
            _ => 0,
        };
        3u16.saturating_add(panel)
    }

    /// Map an event to menu actions, reporting whether it was consumed
    ///
    /// Clicks go to whichever part was drawn under the pointer. Keys go to
    /// the panel when focus is inside the open panel, otherwise to the
    /// trigger; they are ignored while `props.is_focused` is false.
    pub fn route(
        &mut self,
        event: &EventKind,
        props: MenuContainerProps<'_>,
    ) -> EventOutcome<MenuAction> {
        let part = MenuPartProps { style: props.style };

        if event.left_press().is_some() {
            if let Some(panel) = &mut self.panel {
                let outcome = EventOutcome::from_actions(panel.handle_event(event, part));
                if outcome.is_consumed() {
                    return outcome;
                }
            }
            if let Some(trigger) = &mut self.trigger {
                return EventOutcome::from_actions(trigger.handle_event(event, part));
            }
            return EventOutcome::ignored();
        }

        if !props.is_focused {
            return EventOutcome::ignored();
        }

        if self.ctx.is_open() && self.ctx.focus_in_panel() {
            if let Some(panel) = &mut self.panel {
                return EventOutcome::from_actions(panel.handle_event(event, part));
            }
        }

        match &mut self.trigger {
            Some(trigger) if trigger.suppresses(event) => EventOutcome::consumed(),
            Some(trigger) => EventOutcome::from_actions(trigger.handle_event(event, part)),
            None => EventOutcome::ignored(),
        }
    }

    fn layout(area: Rect) -> (Rect, Rect) {
        let trigger = Rect {
            height: area.height.min(1),
            ..area
        };
        let panel = Rect {
            y: area.y.saturating_add(trigger.height),
            height: area.height.saturating_sub(trigger.height),
            ..area
        };
        (trigger, panel)
    }
}

impl Component<MenuAction> for MenuContainer {
    type Props<'a> = MenuContainerProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = MenuAction> {
        self.route(event, props).actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                props.style.focused_border
            } else {
                props.style.border
            });
        if let Some(title) = props.title {
            block = block.title(format!(" {title} "));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let part = MenuPartProps { style: props.style };
        let (trigger_area, panel_area) = Self::layout(inner);
        if let Some(trigger) = &mut self.trigger {
            trigger.render(frame, trigger_area, part);
        }
        if let Some(panel) = &mut self.panel {
            panel.render(frame, panel_area, part);
        }
    }
}
