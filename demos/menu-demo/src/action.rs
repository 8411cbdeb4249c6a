//! Demo actions
//!
//! Menu actions go to the menu's own store through its context; everything
//! else lands here.

use tui_disclosure::Action;

use crate::state::Focus;

#[derive(Clone, Debug, PartialEq)]
pub enum DemoAction {
    /// Tab: move focus to the next pane
    FocusNext,
    /// Shift+Tab: move focus to the previous pane
    FocusPrev,
    /// A click landed in this pane
    FocusPane(Focus),
    /// Bio text changed
    BioChange(String),
    /// Move the track selection by one
    TrackNext,
    TrackPrev,
    /// Start playing the track at this index
    TrackPlay(usize),
    /// An item of the playlist menu was chosen
    MenuChoose(usize),
    Quit,
}

impl Action for DemoAction {
    fn name(&self) -> &'static str {
        match self {
            DemoAction::FocusNext => "FocusNext",
            DemoAction::FocusPrev => "FocusPrev",
            DemoAction::FocusPane(_) => "FocusPane",
            DemoAction::BioChange(_) => "BioChange",
            DemoAction::TrackNext => "TrackNext",
            DemoAction::TrackPrev => "TrackPrev",
            DemoAction::TrackPlay(_) => "TrackPlay",
            DemoAction::MenuChoose(_) => "MenuChoose",
            DemoAction::Quit => "Quit",
        }
    }
}
