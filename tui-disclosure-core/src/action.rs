//! Action trait for state transitions routed through a store

use std::fmt::Debug;

/// Marker trait for values that can be dispatched to an [`EffectStore`](crate::EffectStore)
///
/// Actions describe an intent ("open the menu", "focus the next item").
/// They are `Clone` so middleware can log them after the reducer consumed
/// the original, and `Debug` so tests can print what was emitted.
pub trait Action: Clone + Debug + 'static {
    /// Short, stable name used in log lines
    fn name(&self) -> &'static str;
}
