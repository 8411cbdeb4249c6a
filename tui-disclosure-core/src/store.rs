//! State store whose reducer returns effects alongside the change flag
//!
//! A reducer here has the shape
//!
//! ```ignore
//! fn reducer(state: &mut S, action: A) -> DispatchResult<E>
//! ```
//!
//! `changed` tells the caller whether to re-render; `effects` are
//! declarative descriptions of follow-up work (for the menu, focus requests
//! that must wait until the next frame is drawn). The store never runs
//! effects itself.
//!
//! # Example
//!
//! ```
//! use tui_disclosure_core::{Action, DispatchResult, EffectStore};
//!
//! #[derive(Clone, Debug)]
//! enum Act {
//!     Show,
//! }
//!
//! impl Action for Act {
//!     fn name(&self) -> &'static str {
//!         "Show"
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Effect {
//!     Announce,
//! }
//!
//! fn reducer(visible: &mut bool, action: Act) -> DispatchResult<Effect> {
//!     match action {
//!         Act::Show if *visible => DispatchResult::unchanged(),
//!         Act::Show => {
//!             *visible = true;
//!             DispatchResult::changed_with(Effect::Announce)
//!         }
//!     }
//! }
//!
//! let mut store = EffectStore::new(false, reducer);
//! let result = store.dispatch(Act::Show);
//! assert!(result.changed);
//! assert_eq!(result.effects, vec![Effect::Announce]);
//! assert!(!store.dispatch(Act::Show).changed);
//! ```

use crate::action::Action;

/// Result of dispatching an action: change flag plus effects to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action
    pub changed: bool,
    /// Effects to be processed after dispatch
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Append an effect
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: DispatchResult<E>) {
        self.changed |= other.changed;
        self.effects.extend(other.effects);
    }

    /// Whether there are effects to process
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that mutates state and reports effects
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Hook around every dispatch
///
/// Implement this for logging, recording actions in tests, and similar
/// cross-cutting concerns.
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs each action through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Log before dispatch
    pub log_before: bool,
    /// Log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log both before and after dispatch
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}

/// Store holding state, an effect reducer and a middleware
pub struct EffectStore<S, A: Action, E, M: Middleware<A> = NoopMiddleware> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    middleware: M,
}

impl<S, A: Action, E> EffectStore<S, A, E> {
    /// Create a store without middleware
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, E, M: Middleware<A>> EffectStore<S, A, E, M> {
    /// Create a store that runs `middleware` around every dispatch
    pub fn with_middleware(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
        }
    }

    /// Run the reducer for `action`
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }

    /// Current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state, bypassing the reducer
    ///
    /// Meant for setup that is not a user-visible transition, such as
    /// registering children at mount.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// The middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// The middleware, mutably
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Add(i32),
        Reset,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Add(_) => "Add",
                TestAction::Reset => "Reset",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum TestEffect {
        Overflowed,
    }

    fn reducer(total: &mut i32, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Add(0) => DispatchResult::unchanged(),
            TestAction::Add(n) => {
                *total += n;
                if *total > 10 {
                    DispatchResult::changed_with(TestEffect::Overflowed)
                } else {
                    DispatchResult::changed()
                }
            }
            TestAction::Reset if *total == 0 => DispatchResult::unchanged(),
            TestAction::Reset => {
                *total = 0;
                DispatchResult::changed()
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(&'static str, bool)>,
        before: usize,
    }

    impl Middleware<TestAction> for Recorder {
        fn before(&mut self, _action: &TestAction) {
            self.before += 1;
        }

        fn after(&mut self, action: &TestAction, state_changed: bool) {
            self.seen.push((action.name(), state_changed));
        }
    }

    #[test]
    fn test_dispatch_reports_changes_and_effects() {
        let mut store = EffectStore::new(0, reducer);

        let result = store.dispatch(TestAction::Add(4));
        assert!(result.changed);
        assert!(!result.has_effects());

        let result = store.dispatch(TestAction::Add(8));
        assert_eq!(result.effects, vec![TestEffect::Overflowed]);
        assert_eq!(*store.state(), 12);

        assert!(!store.dispatch(TestAction::Add(0)).changed);
    }

    #[test]
    fn test_middleware_sees_every_dispatch() {
        let mut store = EffectStore::with_middleware(0, reducer, Recorder::default());

        store.dispatch(TestAction::Reset);
        store.dispatch(TestAction::Add(1));
        store.dispatch(TestAction::Reset);

        assert_eq!(store.middleware().before, 3);
        assert_eq!(
            store.middleware().seen,
            vec![("Reset", false), ("Add", true), ("Reset", true)]
        );
    }

    #[test]
    fn test_merge_results() {
        let mut result = DispatchResult::<TestEffect>::unchanged();
        result.merge(DispatchResult::changed());
        result.merge(DispatchResult::effect(TestEffect::Overflowed));

        assert!(result.changed);
        assert_eq!(result.effects.len(), 1);
    }
}
