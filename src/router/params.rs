//! Path parameters collected while walking a route tree.
//!
//! Names are shared with the tree through `Arc<str>`; a repeated name
//! overwrites the earlier value.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum number of path parameters before heap allocation.
/// Most routes bind ≤4 params (e.g. /users/:id/posts/:post_id).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Inline parameter storage for the lookup path.
///
/// Param names are `Arc<str>` shared with the tree node that declared them,
/// so binding a name is an atomic increment rather than a string copy.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Path parameters accumulated during a lookup.
///
/// Behaves as a map: binding a name that is already present overwrites its
/// value, so with `/user/:id/abc/:id` the deeper `id` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: ParamVec,
}

impl Params {
    /// An empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding of `name`.
    pub(crate) fn insert(&mut self, name: &Arc<str>, value: &str) {
        match self.inner.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.inner.push((Arc::clone(name), value.to_string())),
        }
    }

    /// Value bound to `name`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct names bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bindings in the order their names were first bound.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Copy into a `HashMap`.
    /// Note: This allocates - use `get()` on the request path instead
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.inner
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}
