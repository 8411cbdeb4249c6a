//! tui-disclosure: accessible disclosure menus for Rust TUI apps
//!
//! A menu is four parts mounted into a shared [`Scope`]: a container that
//! owns the open/closed state, a trigger, a panel drawn only while open, and
//! the items inside it. State changes go through a reducer; focus moves that
//! depend on the panel being drawn are queued until after the next frame.
//!
//! # Example
//! ```ignore
//! use tui_disclosure::prelude::*;
//!
//! let root = Scope::root();
//! let mut menu = MenuContainer::mount(&root);
//! menu.set_trigger(MenuTrigger::mount(menu.scope(), "File")?);
//! let mut panel = MenuPanel::mount(menu.scope())?;
//! panel.add_item("Open")?.add_item("Save")?.add_item("Quit")?;
//! menu.set_panel(panel);
//! ```

// Re-export everything from core
pub use tui_disclosure_core::*;

// Re-export components
pub use tui_disclosure_components::{
    char_count, format_count, format_duration, menu, CountedTextArea, CountedTextAreaProps,
    MenuAction, MenuContainer, MenuContainerProps, MenuContext, MenuItem, MenuKeymap, MenuPanel,
    MenuState, MenuStyle, MenuTrigger, TrackCard, TrackCardProps,
};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tui_disclosure_core::{Action, Component, ContextValue};

    // Events
    pub use tui_disclosure_core::{
        process_raw_event, spawn_event_poller, EventKind, EventOutcome, RawEvent,
    };

    // Keybindings
    pub use tui_disclosure_core::{format_key_for_display, key_matches, parse_key_string};

    // Store and scopes
    pub use tui_disclosure_core::{
        ConfigError, DispatchResult, EffectStore, LoggingMiddleware, Middleware, MountError,
        NoopMiddleware, PostRenderQueue, Scope,
    };

    // Components
    pub use tui_disclosure_components::prelude::*;

    // Ratatui re-exports
    pub use tui_disclosure_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
