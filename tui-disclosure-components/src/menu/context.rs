//! Ambient menu context shared from the container to its descendants

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tui_disclosure_core::{ContextValue, EffectStore, LoggingMiddleware, PostRenderQueue};

use super::keymap::MenuKeymap;
use super::state::{
    reducer, FocusNode, FocusRequest, FocusTarget, MenuAction, MenuEffect, MenuModel, MenuState,
};

type MenuStore = EffectStore<MenuModel, MenuAction, MenuEffect, LoggingMiddleware>;

struct MenuShared {
    store: MenuStore,
    pending: PostRenderQueue<FocusRequest>,
}

/// Handle to a menu's state, published by [`MenuContainer`](super::MenuContainer)
///
/// Trigger, panel and items receive a clone of this at mount. Reads are
/// free for everyone; every change goes through [`dispatch`](Self::dispatch)
/// and the menu reducer. All clones refer to the same menu.
#[derive(Clone)]
pub struct MenuContext {
    shared: Rc<RefCell<MenuShared>>,
    keymap: Rc<MenuKeymap>,
}

impl ContextValue for MenuContext {
    const PROVIDER: &'static str = "MenuContainer";
}

impl fmt::Debug for MenuContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("MenuContext")
            .field("model", shared.store.state())
            .field("pending_focus", &shared.pending.len())
            .finish()
    }
}

impl MenuContext {
    pub(crate) fn new(keymap: MenuKeymap) -> Self {
        let store = EffectStore::with_middleware(
            MenuModel::default(),
            reducer,
            LoggingMiddleware::new(),
        );
        Self {
            shared: Rc::new(RefCell::new(MenuShared {
                store,
                pending: PostRenderQueue::new(),
            })),
            keymap: Rc::new(keymap),
        }
    }

    /// Snapshot of the whole model
    pub fn model(&self) -> MenuModel {
        self.shared.borrow().store.state().clone()
    }

    pub fn menu_state(&self) -> MenuState {
        self.shared.borrow().store.state().state
    }

    pub fn is_open(&self) -> bool {
        self.menu_state().is_open()
    }

    /// The focused menu element, `None` when focus is elsewhere
    pub fn focused(&self) -> Option<FocusNode> {
        self.shared.borrow().store.state().focused
    }

    pub fn is_focused(&self, node: FocusNode) -> bool {
        self.focused() == Some(node)
    }

    /// Whether focus is on the panel root or one of its items
    pub fn focus_in_panel(&self) -> bool {
        self.shared.borrow().store.state().focus_in_panel()
    }

    /// Index of the most recently activated item
    pub fn selected(&self) -> Option<usize> {
        self.shared.borrow().store.state().selected
    }

    pub fn item_count(&self) -> usize {
        self.shared.borrow().store.state().item_count
    }

    pub fn keymap(&self) -> &MenuKeymap {
        &self.keymap
    }

    /// Focus requests waiting for the next render pass
    pub fn pending_focus(&self) -> usize {
        self.shared.borrow().pending.len()
    }

    /// Run `action` through the reducer
    ///
    /// Deferred focus requests produced by the reducer are queued until
    /// [`after_render`](Self::after_render). Returns whether the model
    /// changed.
    pub fn dispatch(&self, action: MenuAction) -> bool {
        let mut shared = self.shared.borrow_mut();
        let result = shared.store.dispatch(action);
        for effect in result.effects {
            match effect {
                MenuEffect::FocusAfterRender(request) => shared.pending.defer(request),
            }
        }
        result.changed
    }

    /// Dispatch several actions in order; true if any changed the model
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = MenuAction>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) | changed)
    }

    pub fn open_menu(&self) -> bool {
        self.dispatch(MenuAction::Open)
    }

    pub fn close_menu(&self) -> bool {
        self.dispatch(MenuAction::Close)
    }

    pub fn toggle_menu(&self) -> bool {
        self.dispatch(MenuAction::Toggle)
    }

    /// Focus an item of the open panel; out-of-range targets are ignored
    pub fn focus(&self, target: FocusTarget) -> bool {
        self.dispatch(MenuAction::Focus(FocusRequest::Item(target)))
    }

    /// Queue a focus request for after the next render pass
    pub fn focus_after_render(&self, request: FocusRequest) {
        self.dispatch(MenuAction::FocusAfterRender(request));
    }

    /// Apply focus requests queued before the frame that was just drawn
    ///
    /// Call once per frame, after drawing. Returns whether focus moved.
    pub fn after_render(&self) -> bool {
        // Release the borrow before dispatching
        let batch = self.shared.borrow_mut().pending.take();
        batch
            .into_iter()
            .fold(false, |changed, request| {
                self.dispatch(MenuAction::Focus(request)) | changed
            })
    }

    /// Resolve item focus against `count` items from now on
    ///
    /// Focus on an item past the new end is dropped.
    pub(crate) fn set_item_count(&self, count: usize) {
        let mut shared = self.shared.borrow_mut();
        let model = shared.store.state_mut();
        model.item_count = count;
        if model.focused_item().is_some_and(|i| i >= count) {
            model.focused = None;
        }
        tracing::trace!(count, "Menu item list changed");
    }
}
