//! Demo reducer

use tui_disclosure::DispatchResult;

use crate::action::DemoAction;
use crate::state::DemoState;

/// Work the main loop does on the reducer's behalf
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoEffect {
    Exit,
}

pub fn reducer(state: &mut DemoState, action: DemoAction) -> DispatchResult<DemoEffect> {
    match action {
        DemoAction::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }
        DemoAction::FocusPrev => {
            state.focus = state.focus.prev();
            DispatchResult::changed()
        }
        DemoAction::FocusPane(focus) if focus != state.focus => {
            state.focus = focus;
            DispatchResult::changed()
        }
        DemoAction::FocusPane(_) => DispatchResult::unchanged(),
        DemoAction::BioChange(bio) => {
            state.bio = bio;
            DispatchResult::changed()
        }
        DemoAction::TrackNext => select_track(state, state.selected_track.saturating_add(1)),
        DemoAction::TrackPrev => select_track(state, state.selected_track.saturating_sub(1)),
        DemoAction::TrackPlay(index) if index < state.tracks.len() => {
            state.playing = Some(index);
            DispatchResult::changed()
        }
        DemoAction::TrackPlay(_) => DispatchResult::unchanged(),
        DemoAction::MenuChoose(0) => reducer(state, DemoAction::TrackPlay(state.selected_track)),
        DemoAction::MenuChoose(1) => {
            let next = state.playing.map_or(0, |i| (i + 1) % state.tracks.len().max(1));
            reducer(state, DemoAction::TrackPlay(next))
        }
        DemoAction::MenuChoose(2) => reducer(state, DemoAction::BioChange(String::new())),
        DemoAction::MenuChoose(3) | DemoAction::Quit => DispatchResult::effect(DemoEffect::Exit),
        DemoAction::MenuChoose(_) => DispatchResult::unchanged(),
    }
}

fn select_track(state: &mut DemoState, index: usize) -> DispatchResult<DemoEffect> {
    if index >= state.tracks.len() || index == state.selected_track {
        return DispatchResult::unchanged();
    }
    state.selected_track = index;
    DispatchResult::changed()
}
