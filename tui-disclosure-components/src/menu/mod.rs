//! Disclosure menu: a trigger that reveals a panel of selectable items
//!
//! Four cooperating parts:
//!
//! - [`MenuContainer`] owns the open/closed state and publishes a
//!   [`MenuContext`] into its scope
//! - [`MenuTrigger`] toggles the menu and, when opened from the keyboard,
//!   focuses the first item after the panel has been drawn
//! - [`MenuPanel`] is drawn only while the menu is open and handles
//!   Up/Down/Home/End/Escape
//! - [`MenuItem`] closes the menu on activation and hands focus back to
//!   the trigger
//!
//! Parts find their container through the [`Scope`](tui_disclosure_core::Scope)
//! they are mounted in; mounting one outside a container fails with
//! [`MountError::MissingContext`](tui_disclosure_core::MountError).
//!
//! # Example
//!
//! ```ignore
//! let root = Scope::root();
//! let mut menu = MenuContainer::mount(&root);
//! let trigger = MenuTrigger::mount(menu.scope(), "Options")?;
//! let mut panel = MenuPanel::mount(menu.scope())?;
//! panel.add_item("Rename")?.add_item("Delete")?;
//! menu.set_trigger(trigger);
//! menu.set_panel(panel);
//!
//! // per event
//! let outcome = menu.route(&event, props);
//! let changed = menu.context().dispatch_all(outcome.actions);
//!
//! // per frame
//! terminal.draw(|frame| menu.render(frame, area, props))?;
//! menu.after_render();
//! ```

mod container;
mod context;
mod item;
mod keymap;
mod panel;
mod state;
mod trigger;

pub use container::{MenuContainer, MenuContainerProps};
pub use context::MenuContext;
pub use item::MenuItem;
pub use keymap::{MenuKeymap, PanelCommand};
pub use panel::MenuPanel;
pub use state::{
    reducer, FocusNode, FocusRequest, FocusTarget, MenuAction, MenuEffect, MenuModel, MenuState,
};
pub use trigger::MenuTrigger;

use ratatui::style::{Color, Modifier, Style};

/// Colors and glyphs for every menu part
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub border: Style,
    pub focused_border: Style,
    pub text: Style,
    pub focused: Style,
    pub indicator: Style,
    pub open_indicator: &'static str,
    pub closed_indicator: &'static str,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            text: Style::default(),
            focused: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            indicator: Style::default().fg(Color::Cyan),
            open_indicator: "▴",
            closed_indicator: "▾",
        }
    }
}

/// Props shared by trigger, panel and items
#[derive(Debug, Clone, Copy)]
pub struct MenuPartProps<'a> {
    pub style: &'a MenuStyle,
}
