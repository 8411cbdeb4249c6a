//! Presentational components for tui-disclosure
//!
//! Components implement the `Component<A>` trait. The menu parts share one
//! [`MenuContext`](menu::MenuContext) found through the mount scope; the
//! others are plain props-in, actions-out widgets.
//!
//! # Components
//!
//! - [`menu`] - Disclosure menu: container, trigger, panel and items
//! - [`CountedTextArea`] - Multi-line text area with a character counter
//! - [`TrackCard`] - Card showing a music track
//!
//! # Example
//!
//! ```ignore
//! use tui_disclosure_components::{CountedTextArea, CountedTextAreaProps};
//!
//! let mut bio = CountedTextArea::new();
//! bio.render(frame, area, CountedTextAreaProps {
//!     label: "Bio",
//!     value: &state.bio,
//!     placeholder: "Tell us about yourself",
//!     max_chars: Some(280),
//!     is_focused: state.focus == Focus::Bio,
//!     on_change: Action::BioChanged,
//! });
//! ```

pub mod menu;
mod text_area;
mod track_card;

pub use menu::{
    MenuAction, MenuContainer, MenuContainerProps, MenuContext, MenuItem, MenuKeymap, MenuPanel,
    MenuState, MenuStyle, MenuTrigger,
};
pub use text_area::{char_count, format_count, CountedTextArea, CountedTextAreaProps};
pub use track_card::{format_duration, TrackCard, TrackCardProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::menu::{
        FocusNode, FocusRequest, FocusTarget, MenuAction, MenuContainer, MenuContainerProps,
        MenuContext, MenuItem, MenuKeymap, MenuPanel, MenuPartProps, MenuState, MenuStyle,
        MenuTrigger,
    };
    pub use crate::{CountedTextArea, CountedTextAreaProps, TrackCard, TrackCardProps};
}
