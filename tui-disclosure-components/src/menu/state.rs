//! Menu state, focus targets and the reducer that ties them together

use tui_disclosure_core::{Action, DispatchResult};

/// Whether the menu panel is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Whether the panel is visible
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

/// Which item should receive focus, relative to the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    First,
    Previous,
    Next,
    Last,
    Index(usize),
}

impl FocusTarget {
    /// Resolve to an item index given the focused item and the list length
    ///
    /// `current` is the index of the focused item, or `None` when focus is
    /// not on an item. Anything that falls outside `0..len` resolves to
    /// `None`: there is no wraparound, and Previous/Next need a focused
    /// item to be relative to.
    pub fn resolve(self, current: Option<usize>, len: usize) -> Option<usize> {
        let index = match self {
            FocusTarget::First => 0,
            FocusTarget::Last => len.checked_sub(1)?,
            FocusTarget::Index(n) => n,
            FocusTarget::Next => current?.checked_add(1)?,
            FocusTarget::Previous => current?.checked_sub(1)?,
        };
        (index < len).then_some(index)
    }
}

/// A menu element that can hold input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusNode {
    Trigger,
    /// The panel's own root, used as a fallback target after Escape
    Panel,
    Item(usize),
}

/// What a focus call is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusRequest {
    Trigger,
    Panel,
    Item(FocusTarget),
}

/// Everything the menu store tracks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    pub state: MenuState,
    /// Focused menu element; `None` when focus is outside the menu
    pub focused: Option<FocusNode>,
    /// Number of items registered with the menu
    pub item_count: usize,
    /// Index of the most recently activated item
    pub selected: Option<usize>,
}

impl MenuModel {
    /// Index of the focused item, if an item holds focus
    pub fn focused_item(&self) -> Option<usize> {
        match self.focused {
            Some(FocusNode::Item(i)) => Some(i),
            _ => None,
        }
    }

    /// Whether focus is on the panel root or one of its items
    pub fn focus_in_panel(&self) -> bool {
        matches!(self.focused, Some(FocusNode::Panel | FocusNode::Item(_)))
    }

    fn set_focus(&mut self, node: Option<FocusNode>) -> bool {
        if self.focused == node {
            return false;
        }
        self.focused = node;
        true
    }

    fn apply_focus(&mut self, request: FocusRequest) -> bool {
        match request {
            FocusRequest::Trigger => self.set_focus(Some(FocusNode::Trigger)),
            FocusRequest::Panel => self.set_focus(Some(FocusNode::Panel)),
            // Items only exist while the panel is rendered
            FocusRequest::Item(_) if !self.state.is_open() => false,
            FocusRequest::Item(target) => {
                match target.resolve(self.focused_item(), self.item_count) {
                    Some(index) => self.set_focus(Some(FocusNode::Item(index))),
                    None => false,
                }
            }
        }
    }

    fn open(&mut self) -> bool {
        if self.state.is_open() {
            return false;
        }
        self.state = MenuState::Open;
        true
    }

    fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.state = MenuState::Closed;
        // The focused item left the tree with the panel
        if self.focused_item().is_some() {
            self.focused = None;
        }
        true
    }
}

/// Actions understood by the menu store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
    Toggle,
    /// Move focus now
    Focus(FocusRequest),
    /// Move focus once the next frame has been drawn
    FocusAfterRender(FocusRequest),
    /// Record item activation
    Select(usize),
    /// Focus moved outside the menu
    Blur,
}

impl Action for MenuAction {
    fn name(&self) -> &'static str {
        match self {
            MenuAction::Open => "MenuOpen",
            MenuAction::Close => "MenuClose",
            MenuAction::Toggle => "MenuToggle",
            MenuAction::Focus(_) => "MenuFocus",
            MenuAction::FocusAfterRender(_) => "MenuFocusAfterRender",
            MenuAction::Select(_) => "MenuSelect",
            MenuAction::Blur => "MenuBlur",
        }
    }
}

/// Side effects the menu store asks its owner to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    FocusAfterRender(FocusRequest),
}

/// Apply a [`MenuAction`] to the model
///
/// Every transition is idempotent: opening an open menu or closing a
/// closed one reports `changed = false`.
pub fn reducer(model: &mut MenuModel, action: MenuAction) -> DispatchResult<MenuEffect> {
    let changed = match action {
        MenuAction::Open => model.open(),
        MenuAction::Close => model.close(),
        MenuAction::Toggle if model.state.is_open() => model.close(),
        MenuAction::Toggle => model.open(),
        MenuAction::Focus(request) => model.apply_focus(request),
        MenuAction::FocusAfterRender(request) => {
            return DispatchResult::effect(MenuEffect::FocusAfterRender(request));
        }
        MenuAction::Select(index) if index < model.item_count => {
            let changed = model.selected != Some(index);
            model.selected = Some(index);
            changed
        }
        MenuAction::Select(_) => false,
        MenuAction::Blur => model.set_focus(None),
    };

    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_model(item_count: usize, focused: Option<FocusNode>) -> MenuModel {
        MenuModel {
            state: MenuState::Open,
            focused,
            item_count,
            selected: None,
        }
    }

    #[test]
    fn test_resolve_first_and_last() {
        assert_eq!(FocusTarget::First.resolve(None, 3), Some(0));
        assert_eq!(FocusTarget::Last.resolve(None, 3), Some(2));
        assert_eq!(FocusTarget::First.resolve(None, 0), None);
        assert_eq!(FocusTarget::Last.resolve(None, 0), None);
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(FocusTarget::Next.resolve(Some(0), 3), Some(1));
        assert_eq!(FocusTarget::Previous.resolve(Some(2), 3), Some(1));
        assert_eq!(FocusTarget::Next.resolve(Some(2), 3), None);
        assert_eq!(FocusTarget::Previous.resolve(Some(0), 3), None);
        assert_eq!(FocusTarget::Next.resolve(None, 3), None);
        assert_eq!(FocusTarget::Previous.resolve(None, 3), None);
    }

    #[test]
    fn test_resolve_index() {
        assert_eq!(FocusTarget::Index(1).resolve(None, 3), Some(1));
        assert_eq!(FocusTarget::Index(3).resolve(Some(0), 3), None);
    }

    #[test]
    fn test_toggle_alternates_from_closed() {
        let mut model = MenuModel::default();
        let mut expected = MenuState::Closed;
        assert_eq!(model.state, expected);

        for _ in 0..7 {
            assert!(reducer(&mut model, MenuAction::Toggle).changed);
            expected = expected.toggled();
            assert_eq!(model.state, expected);
        }
        assert_eq!(model.state, MenuState::Open);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut model = MenuModel::default();

        assert!(!reducer(&mut model, MenuAction::Close).changed);
        assert!(reducer(&mut model, MenuAction::Open).changed);
        assert!(!reducer(&mut model, MenuAction::Open).changed);
        assert!(reducer(&mut model, MenuAction::Close).changed);
        assert!(!reducer(&mut model, MenuAction::Close).changed);
        assert_eq!(model.state, MenuState::Closed);
    }

    #[test]
    fn test_focus_previous_at_first_item_is_noop() {
        let mut model = open_model(3, Some(FocusNode::Item(0)));
        let result = reducer(
            &mut model,
            MenuAction::Focus(FocusRequest::Item(FocusTarget::Previous)),
        );

        assert!(!result.changed);
        assert_eq!(model.focused, Some(FocusNode::Item(0)));
    }

    #[test]
    fn test_focus_next_at_last_item_is_noop() {
        let mut model = open_model(3, Some(FocusNode::Item(2)));
        let result = reducer(
            &mut model,
            MenuAction::Focus(FocusRequest::Item(FocusTarget::Next)),
        );

        assert!(!result.changed);
        assert_eq!(model.focused, Some(FocusNode::Item(2)));
    }

    #[test]
    fn test_focus_relative_without_focused_item_is_noop() {
        for focused in [None, Some(FocusNode::Trigger), Some(FocusNode::Panel)] {
            let mut model = open_model(3, focused);
            for target in [FocusTarget::Next, FocusTarget::Previous] {
                reducer(&mut model, MenuAction::Focus(FocusRequest::Item(target)));
                assert_eq!(model.focused, focused);
            }
        }
    }

    #[test]
    fn test_focus_first_with_no_items_is_noop() {
        let mut model = open_model(0, Some(FocusNode::Trigger));
        let result = reducer(
            &mut model,
            MenuAction::Focus(FocusRequest::Item(FocusTarget::First)),
        );

        assert!(!result.changed);
        assert_eq!(model.focused, Some(FocusNode::Trigger));
    }

    #[test]
    fn test_item_focus_requires_open_panel() {
        let mut model = MenuModel {
            item_count: 2,
            ..MenuModel::default()
        };
        reducer(
            &mut model,
            MenuAction::Focus(FocusRequest::Item(FocusTarget::First)),
        );
        assert_eq!(model.focused, None);

        reducer(&mut model, MenuAction::Open);
        reducer(
            &mut model,
            MenuAction::Focus(FocusRequest::Item(FocusTarget::First)),
        );
        assert_eq!(model.focused, Some(FocusNode::Item(0)));
    }

    #[test]
    fn test_close_drops_item_focus_but_keeps_trigger_focus() {
        let mut model = open_model(2, Some(FocusNode::Item(1)));
        reducer(&mut model, MenuAction::Close);
        assert_eq!(model.focused, None);

        let mut model = open_model(2, Some(FocusNode::Trigger));
        reducer(&mut model, MenuAction::Close);
        assert_eq!(model.focused, Some(FocusNode::Trigger));
    }

    #[test]
    fn test_focus_after_render_is_an_effect_only() {
        let mut model = open_model(2, None);
        let before = model.clone();
        let result = reducer(
            &mut model,
            MenuAction::FocusAfterRender(FocusRequest::Item(FocusTarget::First)),
        );

        assert!(!result.changed);
        assert_eq!(
            result.effects,
            vec![MenuEffect::FocusAfterRender(FocusRequest::Item(
                FocusTarget::First
            ))]
        );
        assert_eq!(model, before);
    }

    #[test]
    fn test_activation_always_ends_closed() {
        for state in [MenuState::Open, MenuState::Closed] {
            let mut model = MenuModel {
                state,
                item_count: 2,
                ..MenuModel::default()
            };
            reducer(&mut model, MenuAction::Select(1));
            reducer(&mut model, MenuAction::Close);

            assert_eq!(model.state, MenuState::Closed);
            assert_eq!(model.selected, Some(1));
        }
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut model = open_model(2, None);
        assert!(!reducer(&mut model, MenuAction::Select(5)).changed);
        assert_eq!(model.selected, None);
    }

    #[test]
    fn test_blur() {
        let mut model = open_model(2, Some(FocusNode::Trigger));
        assert!(reducer(&mut model, MenuAction::Blur).changed);
        assert!(!reducer(&mut model, MenuAction::Blur).changed);
        assert_eq!(model.focused, None);
    }
}
