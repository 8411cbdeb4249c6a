//! Menu trigger: the control that opens and closes the menu

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_disclosure_core::{key_matches, Component, EventKind, MountError, Scope};

use super::context::MenuContext;
use super::state::{FocusNode, FocusRequest, FocusTarget, MenuAction};
use super::MenuPartProps;

/// A focusable control that toggles its menu
///
/// - Click: focus the trigger and toggle the menu
/// - Enter / Space / Down / Up (while focused): open the menu and focus
///   the first item once the panel has been drawn
///
/// While the menu is closed, focus left on the panel root by Escape counts
/// as trigger focus.
pub struct MenuTrigger {
    ctx: MenuContext,
    label: String,
    area: Rect,
}

impl MenuTrigger {
    /// Mount a trigger inside a menu container's scope
    pub fn mount(scope: &Scope, label: impl Into<String>) -> Result<Self, MountError> {
        let ctx = scope.inject::<MenuContext>("MenuTrigger")?;
        Ok(Self {
            ctx,
            label: label.into(),
            area: Rect::default(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Where the trigger was last drawn
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Whether keys reach this trigger
    pub fn has_focus(&self) -> bool {
        self.ctx.is_focused(FocusNode::Trigger)
            || (!self.ctx.is_open() && self.ctx.is_focused(FocusNode::Panel))
    }

    /// Whether the trigger swallows this event without producing actions
    ///
    /// Releasing Space on a focused trigger would otherwise read as a second
    /// activation on terminals that report key releases.
    pub fn suppresses(&self, event: &EventKind) -> bool {
        self.has_focus()
            && event
                .key_release()
                .is_some_and(|key| key.code == KeyCode::Char(' '))
    }
}

impl Component<MenuAction> for MenuTrigger {
    type Props<'a> = MenuPartProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = MenuAction> {
        if event.is_left_press_in(self.area) {
            return vec![MenuAction::Focus(FocusRequest::Trigger), MenuAction::Toggle];
        }

        match event.key_press() {
            Some(key)
                if self.has_focus() && key_matches(key, &self.ctx.keymap().trigger_open) =>
            {
                vec![
                    MenuAction::Open,
                    MenuAction::FocusAfterRender(FocusRequest::Item(FocusTarget::First)),
                ]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        let style = if self.has_focus() {
            props.style.focused
        } else {
            props.style.text
        };
        let indicator = if self.ctx.is_open() {
            props.style.open_indicator
        } else {
            props.style.closed_indicator
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.label), style),
            Span::styled(indicator, props.style.indicator),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuContainer, MenuStyle};
    use tui_disclosure_core::testing::{click, key, key_event, key_release, RenderHarness};
    use tui_disclosure_core::{assert_emitted, assert_not_emitted};

    fn mounted() -> (MenuContainer, MenuTrigger) {
        let menu = MenuContainer::mount(&Scope::root());
        let trigger = MenuTrigger::mount(menu.scope(), "File").unwrap();
        (menu, trigger)
    }

    fn events(trigger: &mut MenuTrigger, event: EventKind) -> Vec<MenuAction> {
        let style = MenuStyle::default();
        trigger
            .handle_event(&event, MenuPartProps { style: &style })
            .into_iter()
            .collect()
    }

    #[test]
    fn test_mount_outside_container_fails() {
        let err = MenuTrigger::mount(&Scope::root(), "File").err().unwrap();
        assert_eq!(err, MountError::missing_context("MenuTrigger", "MenuContainer"));
    }

    #[test]
    fn test_keys_ignored_when_not_focused() {
        let (_menu, mut trigger) = mounted();
        assert!(events(&mut trigger, key_event("enter")).is_empty());
    }

    #[test]
    fn test_open_keys_open_and_defer_focus() {
        let (menu, mut trigger) = mounted();
        menu.dispatch(MenuAction::Focus(FocusRequest::Trigger));

        for k in ["enter", "space", "down", "up"] {
            let actions = events(&mut trigger, EventKind::Key(key(k)));
            assert_eq!(
                actions,
                vec![
                    MenuAction::Open,
                    MenuAction::FocusAfterRender(FocusRequest::Item(FocusTarget::First)),
                ],
                "{k}"
            );
        }
        assert!(events(&mut trigger, key_event("esc")).is_empty());
    }

    #[test]
    fn test_panel_root_focus_reopens_after_dismiss() {
        let (menu, mut trigger) = mounted();
        menu.context().open_menu();
        menu.dispatch(MenuAction::Focus(FocusRequest::Panel));
        // Panel root focus while open belongs to the panel
        assert!(!trigger.has_focus());
        assert!(events(&mut trigger, key_event("enter")).is_empty());

        menu.context().close_menu();
        assert!(trigger.has_focus());
        let actions = events(&mut trigger, key_event("enter"));
        assert_emitted!(actions, MenuAction::Open);
    }

    #[test]
    fn test_space_release_is_suppressed() {
        let (menu, mut trigger) = mounted();
        menu.dispatch(MenuAction::Focus(FocusRequest::Trigger));

        let release = EventKind::Key(key_release("space"));
        assert!(trigger.suppresses(&release));
        assert!(events(&mut trigger, release).is_empty());
        assert!(!trigger.suppresses(&key_event("space")));
    }

    #[test]
    fn test_click_toggles() {
        let (_menu, mut trigger) = mounted();
        let style = MenuStyle::default();
        let mut harness = RenderHarness::new(20, 1);
        harness.render(|frame| {
            trigger.render(frame, frame.area(), MenuPartProps { style: &style })
        });

        let actions = events(&mut trigger, click(2, 0));
        assert_emitted!(actions, MenuAction::Toggle);
        assert_emitted!(actions, MenuAction::Focus(FocusRequest::Trigger));

        let actions = events(&mut trigger, click(2, 1));
        assert_not_emitted!(actions, MenuAction::Toggle);
    }

    #[test]
    fn test_render_shows_label_and_state() {
        let (menu, mut trigger) = mounted();
        let style = MenuStyle::default();
        let mut harness = RenderHarness::new(20, 1);

        let closed = harness.render_to_string_plain(|frame| {
            trigger.render(frame, frame.area(), MenuPartProps { style: &style })
        });
        assert!(closed.contains("File"));
        assert!(closed.contains(style.closed_indicator));

        menu.context().open_menu();
        let open = harness.render_to_string_plain(|frame| {
            trigger.render(frame, frame.area(), MenuPartProps { style: &style })
        });
        assert!(open.contains(style.open_indicator));
    }
}
