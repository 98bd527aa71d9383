//! Per-method route trees.
//!
//! Registration mutates the trees and must complete before lookups start;
//! lookups are pure reads and can run from any number of threads once the
//! [`RouteTree`] is shared behind an `Arc` or a plain `&`.

use http::Method;
use std::collections::HashMap;

use super::error::RouteError;
use super::node::{Node, NodeKind};
use super::params::Params;
use super::segment::{classify, Segment};
use super::validate::validate_path;

/// One trie per HTTP method, created lazily on first registration.
#[derive(Debug)]
pub struct RouteTree<H> {
    trees: HashMap<Method, Node<H>>,
}

impl<H> Default for RouteTree<H> {
    fn default() -> Self {
        Self {
            trees: HashMap::new(),
        }
    }
}

/// Outcome of walking a tree: the node the walk stopped on and the params
/// bound along the way.
///
/// The node may carry no handler (e.g. `/a` when only `/a/b` is registered);
/// such a match is not a registered route.
#[derive(Debug)]
pub struct MatchInfo<'a, H> {
    node: &'a Node<H>,
    params: Params,
}

impl<'a, H> MatchInfo<'a, H> {
    /// The node the walk stopped on.
    #[must_use]
    pub fn node(&self) -> &'a Node<H> {
        self.node
    }

    /// Handler of the matched node, `None` if no route ends there.
    #[must_use]
    pub fn handler(&self) -> Option<&'a H> {
        self.node.handler()
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn into_params(self) -> Params {
        self.params
    }
}

impl<H> RouteTree<H> {
    /// An empty set of trees.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` and `path`.
    ///
    /// - A registered route cannot be overwritten: `/user/home` twice conflicts.
    /// - `path` starts with `/`, does not end with `/`, and has no `//`.
    /// - Different params at the same position conflict: `/user/:id` and `/user/:name`.
    /// - Param, regex and wildcard at the same position conflict: `/user/:id` and `/user/*`.
    /// - A name repeated along one path is allowed; the deeper value wins at lookup.
    ///
    /// Every segment is classified before the tree is touched, so a syntax
    /// error leaves the tree as it was. A conflict may leave handler-less
    /// static nodes behind, which lookups report as not found.
    pub fn add_route(&mut self, method: Method, path: &str, handler: H) -> Result<(), RouteError> {
        validate_path(path)?;

        let segments: Vec<Segment<'_>> = match path.strip_prefix('/') {
            Some("") | None => Vec::new(),
            Some(rest) => rest
                .split('/')
                .map(|seg| classify(path, seg))
                .collect::<Result<_, _>>()?,
        };

        let mut node = self.trees.entry(method).or_insert_with(Node::root);
        for segment in &segments {
            node = node.child_or_create(path, segment)?;
        }
        node.bind(path, handler)
    }

    /// Walk the tree for `method` along `path`.
    ///
    /// Leading and trailing slashes are ignored, so `""` and `"/"` both stop
    /// on the root. Returns `None` when there is no tree for the method or
    /// some segment has no eligible child; the walk never retries another
    /// branch. Check [`MatchInfo::handler`] before treating the result as a
    /// registered route.
    #[must_use]
    pub fn find_route(&self, method: &Method, path: &str) -> Option<MatchInfo<'_, H>> {
        let root = self.trees.get(method)?;
        let mut params = Params::new();

        let path = path.trim_matches('/');
        if path.is_empty() {
            return Some(MatchInfo { node: root, params });
        }

        let mut node = root;
        for segment in path.split('/') {
            node = node.child_of(segment, &mut params)?;
        }
        Some(MatchInfo { node, params })
    }

    /// Methods that have a tree.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.trees.keys()
    }

    /// Kind of the root node for `method`, if the tree exists.
    #[must_use]
    pub fn root_kind(&self, method: &Method) -> Option<NodeKind> {
        self.trees.get(method).map(Node::kind)
    }
}
