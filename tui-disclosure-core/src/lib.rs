//! Core traits and runtime pieces for tui-disclosure
//!
//! This crate holds the parts of the component model that are not tied to
//! any one widget, following a Redux/Elm-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Action**: values describing a state change
//! - **EffectStore**: state plus a reducer that also returns effects
//! - **Component**: UI elements that render from props and emit actions
//! - **PostRenderQueue**: work that must wait until a frame has been drawn
//! - **Scope**: explicit registry for ambient context shared with a subtree
//!
//! # Main Loop
//!
//! ```ignore
//! loop {
//!     if should_render {
//!         terminal.draw(|frame| ui.render(frame, frame.area()))?;
//!         ui.after_render();              // deferred focus requests land here
//!         should_render = false;
//!     }
//!     let event = process_raw_event(event_rx.recv().await?);
//!     let outcome = ui.handle_event(&event);
//!     for action in outcome.actions {
//!         should_render |= ui.dispatch(action);
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod error;
pub mod event;
pub mod input;
pub mod keybindings;
pub mod post_render;
pub mod scope;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use error::{ConfigError, MountError};
pub use event::{rect_contains, EventKind, EventOutcome};
pub use input::{process_raw_event, spawn_event_poller, RawEvent};
pub use keybindings::{format_key_for_display, key_matches, parse_key_string, validate_bindings};
pub use post_render::PostRenderQueue;
pub use scope::{ContextValue, Scope, ScopeId};
pub use store::{
    DispatchResult, EffectReducer, EffectStore, LoggingMiddleware, Middleware, NoopMiddleware,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, click, key, key_event,
    key_release, type_text, RenderHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::error::{ConfigError, MountError};
    pub use crate::event::{EventKind, EventOutcome};
    pub use crate::input::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::keybindings::{format_key_for_display, key_matches, parse_key_string};
    pub use crate::post_render::PostRenderQueue;
    pub use crate::scope::{ContextValue, Scope};
    pub use crate::store::{
        DispatchResult, EffectStore, LoggingMiddleware, Middleware, NoopMiddleware,
    };

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
