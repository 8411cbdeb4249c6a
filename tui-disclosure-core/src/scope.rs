//! Scoped registry for ambient context values
//!
//! A [`Scope`] is one node in a tree that mirrors the component tree. A
//! provider (for example a menu container) publishes a value into its own
//! child scope; consumers mounted anywhere below that scope look the value
//! up by type, walking toward the root. Nothing is global: a consumer only
//! sees values provided by its ancestors.
//!
//! ```
//! use tui_disclosure_core::{ContextValue, MountError, Scope};
//!
//! #[derive(Clone)]
//! struct Theme(&'static str);
//!
//! impl ContextValue for Theme {
//!     const PROVIDER: &'static str = "ThemeProvider";
//! }
//!
//! let root = Scope::root();
//! assert!(matches!(
//!     root.inject::<Theme>("Button"),
//!     Err(MountError::MissingContext { .. })
//! ));
//!
//! let themed = root.child();
//! themed.provide(Theme("dark"));
//! let nested = themed.child();
//! assert_eq!(nested.inject::<Theme>("Button").unwrap().0, "dark");
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::MountError;

/// A value that can be published into a [`Scope`]
pub trait ContextValue: Clone + 'static {
    /// Name of the component that provides this value, used in mount errors
    const PROVIDER: &'static str;
}

/// Identity of a scope node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

impl ScopeId {
    fn next() -> Self {
        Self(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct ScopeNode {
    id: ScopeId,
    parent: Option<Scope>,
    provided: RefCell<HashMap<TypeId, Box<dyn Any>>>,
}

/// Handle to a node of the scope tree
///
/// Cloning is cheap and yields a handle to the same node.
#[derive(Clone)]
pub struct Scope {
    node: Rc<ScopeNode>,
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.node.id)
            .field("depth", &self.depth())
            .field("provided", &self.node.provided.borrow().len())
            .finish()
    }
}

impl Scope {
    fn with_parent(parent: Option<Scope>) -> Self {
        Self {
            node: Rc::new(ScopeNode {
                id: ScopeId::next(),
                parent,
                provided: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Create a new tree
    pub fn root() -> Self {
        Self::with_parent(None)
    }

    /// Create a child of this scope
    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    /// Identity of this node
    pub fn id(&self) -> ScopeId {
        self.node.id
    }

    /// Parent scope, `None` for a root
    pub fn parent(&self) -> Option<&Scope> {
        self.node.parent.as_ref()
    }

    /// Number of ancestors
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(scope) = current {
            depth += 1;
            current = scope.parent();
        }
        depth
    }

    /// Publish `value` to this scope and its descendants
    ///
    /// Providing the same type twice on one node replaces the earlier value.
    /// A value provided on a descendant shadows this one for that subtree.
    pub fn provide<T: ContextValue>(&self, value: T) {
        self.node
            .provided
            .borrow_mut()
            .insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Look up a value provided by this scope or one of its ancestors
    pub fn try_inject<T: ContextValue>(&self) -> Option<T> {
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(value) = scope
                .node
                .provided
                .borrow()
                .get(&TypeId::of::<T>())
                .and_then(|v| v.downcast_ref::<T>())
            {
                return Some(value.clone());
            }
            current = scope.parent();
        }
        None
    }

    /// Like [`try_inject`](Self::try_inject), failing with the consumer's name
    pub fn inject<T: ContextValue>(&self, consumer: &'static str) -> Result<T, MountError> {
        self.try_inject()
            .ok_or_else(|| MountError::missing_context(consumer, T::PROVIDER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter(u32);

    impl ContextValue for Counter {
        const PROVIDER: &'static str = "CounterProvider";
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Label(&'static str);

    impl ContextValue for Label {
        const PROVIDER: &'static str = "LabelProvider";
    }

    #[test]
    fn test_inject_walks_to_ancestor() {
        let root = Scope::root();
        root.provide(Counter(1));
        let leaf = root.child().child().child();

        assert_eq!(leaf.depth(), 3);
        assert_eq!(leaf.try_inject::<Counter>(), Some(Counter(1)));
    }

    #[test]
    fn test_sibling_scopes_do_not_see_each_other() {
        let root = Scope::root();
        let left = root.child();
        let right = root.child();
        left.provide(Counter(7));

        assert_eq!(left.try_inject::<Counter>(), Some(Counter(7)));
        assert_eq!(right.try_inject::<Counter>(), None);
        assert_ne!(left.id(), right.id());
    }

    #[test]
    fn test_nearest_provider_wins() {
        let outer = Scope::root();
        outer.provide(Counter(1));
        let inner = outer.child();
        inner.provide(Counter(2));

        assert_eq!(inner.child().try_inject::<Counter>(), Some(Counter(2)));
        assert_eq!(outer.child().try_inject::<Counter>(), Some(Counter(1)));
    }

    #[test]
    fn test_values_are_keyed_by_type() {
        let root = Scope::root();
        root.provide(Label("menu"));

        assert_eq!(root.try_inject::<Label>(), Some(Label("menu")));
        assert_eq!(root.try_inject::<Counter>(), None);
    }

    #[test]
    fn test_inject_error_names_consumer_and_provider() {
        let err = Scope::root().inject::<Counter>("Display").unwrap_err();
        assert_eq!(
            err,
            MountError::MissingContext {
                consumer: "Display",
                provider: "CounterProvider",
            }
        );
    }
}
