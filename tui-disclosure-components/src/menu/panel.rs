//! Menu panel: the item list shown while the menu is open

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear},
    Frame,
};
use tui_disclosure_core::{Component, EventKind, MountError, Scope};

use super::context::MenuContext;
use super::item::MenuItem;
use super::keymap::PanelCommand;
use super::state::{FocusNode, FocusRequest, FocusTarget, MenuAction};
use super::MenuPartProps;

/// The list surface of a menu
///
/// Renders nothing while the menu is closed. While open, it draws its items
/// one per row and handles navigation keys when focus is inside it:
/// Escape closes the menu and focuses the panel root after the next render,
/// Up/Down move between items, Home/End jump to the ends.
pub struct MenuPanel {
    ctx: MenuContext,
    scope: Scope,
    items: Vec<MenuItem>,
    area: Rect,
}

impl MenuPanel {
    /// Mount a panel inside a menu container's scope
    pub fn mount(scope: &Scope) -> Result<Self, MountError> {
        let ctx = scope.inject::<MenuContext>("MenuPanel")?;
        Ok(Self {
            ctx,
            scope: scope.child(),
            items: Vec::new(),
            area: Rect::default(),
        })
    }

    /// Scope that items of this panel mount into
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Append a mounted item; it takes the next position in the list
    ///
    /// Focus targets resolve against exactly the items pushed here.
    pub fn push(&mut self, mut item: MenuItem) {
        item.attach(self.items.len());
        self.items.push(item);
        self.ctx.set_item_count(self.items.len());
    }

    /// Mount an item labelled `label` and add it
    pub fn add_item(&mut self, label: impl Into<String>) -> Result<&mut Self, MountError> {
        let item = MenuItem::mount(&self.scope, label)?;
        self.push(item);
        Ok(self)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Whether the panel is part of the rendered tree
    pub fn is_rendered(&self) -> bool {
        self.ctx.is_open()
    }

    /// Where the panel was last drawn; empty while closed
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Rows needed to show every item, borders included
    pub fn height(&self) -> u16 {
        u16::try_from(self.items.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    fn command_actions(command: PanelCommand) -> Vec<MenuAction> {
        let focus = |target| vec![MenuAction::Focus(FocusRequest::Item(target))];
        match command {
            PanelCommand::Dismiss => vec![
                MenuAction::Close,
                MenuAction::FocusAfterRender(FocusRequest::Panel),
            ],
            PanelCommand::Previous => focus(FocusTarget::Previous),
            PanelCommand::Next => focus(FocusTarget::Next),
            PanelCommand::First => focus(FocusTarget::First),
            PanelCommand::Last => focus(FocusTarget::Last),
        }
    }
}

impl Component<MenuAction> for MenuPanel {
    type Props<'a> = MenuPartProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = MenuAction> {
        if !self.ctx.is_open() {
            return vec![];
        }

        // Items see the event first; the first one to act consumes it
        for item in &mut self.items {
            let actions: Vec<_> = item.handle_event(event, props).into_iter().collect();
            if !actions.is_empty() {
                return actions;
            }
        }

        match event.key_press() {
            Some(key) if self.ctx.focus_in_panel() => self
                .ctx
                .keymap()
                .panel_command(key)
                .map(Self::command_actions)
                .unwrap_or_default(),
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if !self.ctx.is_open() {
            self.area = Rect::default();
            self.items.iter_mut().for_each(MenuItem::hide);
            return;
        }

        let area = Rect {
            height: area.height.min(self.height()),
            ..area
        };
        self.area = area;

        let border_style = if self.ctx.is_focused(FocusNode::Panel) {
            props.style.focused_border
        } else {
            props.style.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        for (row, item) in self.items.iter_mut().enumerate() {
            let y = inner.y.saturating_add(row as u16);
            if y >= inner.bottom() {
                item.hide();
                continue;
            }
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            item.render(frame, row_area, props);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuContainer, MenuStyle};
    use tui_disclosure_core::testing::{key_event, RenderHarness};

    fn menu_with_panel(labels: &[&str]) -> (MenuContainer, MenuPanel) {
        let menu = MenuContainer::mount(&Scope::root());
        let mut panel = MenuPanel::mount(menu.scope()).unwrap();
        for label in labels {
            panel.add_item(*label).unwrap();
        }
        (menu, panel)
    }

    fn events(panel: &mut MenuPanel, event: EventKind) -> Vec<MenuAction> {
        let style = MenuStyle::default();
        panel
            .handle_event(&event, MenuPartProps { style: &style })
            .into_iter()
            .collect()
    }

    fn render(panel: &mut MenuPanel) -> String {
        let style = MenuStyle::default();
        let mut harness = RenderHarness::new(20, 8);
        harness.render_to_string_plain(|frame| {
            panel.render(frame, frame.area(), MenuPartProps { style: &style })
        })
    }

    #[test]
    fn test_mount_outside_container_fails() {
        let err = MenuPanel::mount(&Scope::root()).err().unwrap();
        assert_eq!(err, MountError::missing_context("MenuPanel", "MenuContainer"));
    }

    #[test]
    fn test_rendered_only_while_open() {
        let (menu, mut panel) = menu_with_panel(&["Undo", "Redo"]);

        let output = render(&mut panel);
        assert!(!panel.is_rendered());
        assert!(!output.contains("Undo"));
        assert_eq!(output.trim(), "");
        assert_eq!(panel.area(), Rect::default());

        menu.context().open_menu();
        let output = render(&mut panel);
        assert!(panel.is_rendered());
        assert!(output.contains("Undo"));
        assert!(output.contains("Redo"));
        assert_eq!(panel.area().height, 4);

        menu.context().close_menu();
        assert!(!render(&mut panel).contains("Undo"));
        assert!(panel.items().iter().all(|i| i.area() == Rect::default()));
    }

    #[test]
    fn test_navigation_keys() {
        let (menu, mut panel) = menu_with_panel(&["Undo", "Redo"]);
        menu.context().open_menu();
        menu.context().focus(FocusTarget::First);

        assert_eq!(
            events(&mut panel, key_event("down")),
            vec![MenuAction::Focus(FocusRequest::Item(FocusTarget::Next))]
        );
        assert_eq!(
            events(&mut panel, key_event("up")),
            vec![MenuAction::Focus(FocusRequest::Item(FocusTarget::Previous))]
        );
        assert_eq!(
            events(&mut panel, key_event("end")),
            vec![MenuAction::Focus(FocusRequest::Item(FocusTarget::Last))]
        );
        assert_eq!(
            events(&mut panel, key_event("esc")),
            vec![
                MenuAction::Close,
                MenuAction::FocusAfterRender(FocusRequest::Panel)
            ]
        );
    }

    #[test]
    fn test_focused_item_handles_enter_before_panel() {
        let (menu, mut panel) = menu_with_panel(&["Undo", "Redo"]);
        menu.context().open_menu();
        menu.context().focus(FocusTarget::Index(1));

        let actions = events(&mut panel, key_event("enter"));
        assert_eq!(actions[0], MenuAction::Select(1));
    }

    #[test]
    fn test_keys_ignored_when_focus_outside_panel() {
        let (menu, mut panel) = menu_with_panel(&["Undo"]);
        menu.context().open_menu();
        menu.dispatch(MenuAction::Focus(FocusRequest::Trigger));

        assert!(events(&mut panel, key_event("down")).is_empty());
        assert!(events(&mut panel, key_event("esc")).is_empty());
    }

    #[test]
    fn test_closed_panel_ignores_keys() {
        let (_menu, mut panel) = menu_with_panel(&["Undo"]);
        assert!(events(&mut panel, key_event("esc")).is_empty());
    }

    #[test]
    fn test_push_order_defines_indices() {
        let menu = MenuContainer::mount(&Scope::root());
        let mut panel = MenuPanel::mount(menu.scope()).unwrap();
        let first = MenuItem::mount(panel.scope(), "First").unwrap();
        let second = MenuItem::mount(panel.scope(), "Second").unwrap();
        assert_eq!(first.index(), None);

        panel.push(second);
        panel.push(first);

        let labels: Vec<_> = panel.items().iter().map(MenuItem::label).collect();
        assert_eq!(labels, vec!["Second", "First"]);
        let indices: Vec<_> = panel.items().iter().map(MenuItem::index).collect();
        assert_eq!(indices, vec![Some(0), Some(1)]);
        assert_eq!(menu.context().item_count(), 2);
    }

    #[test]
    fn test_items_never_pushed_are_not_focus_targets() {
        let (menu, mut panel) = menu_with_panel(&["Only"]);
        let stray = MenuItem::mount(panel.scope(), "Stray").unwrap();
        drop(stray);

        menu.context().open_menu();
        menu.context().focus(FocusTarget::Last);
        assert_eq!(menu.context().item_count(), 1);
        assert!(menu.context().is_focused(FocusNode::Item(0)));

        assert!(!menu.context().focus(FocusTarget::Next));
        let output = render(&mut panel);
        assert!(output.contains("› Only"));
        assert!(!output.contains("Stray"));
    }
}
