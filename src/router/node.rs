//! Trie vertex and the per-kind child-creation strategies.
//!
//! A node owns its children exclusively; traversal is always root-to-leaf so
//! no back-pointers are kept. Lookups through a node try its children in a
//! fixed order and never backtrack:
//!
//! 1. static child, exact text
//! 2. regex child, if the segment satisfies its pattern
//! 3. param child
//! 4. wildcard child
//!
//! Registration keeps the regex, param and wildcard children mutually
//! exclusive on any node, so steps 2-4 never compete in a tree built through
//! [`Node::child_or_create`]. The order is still fixed so that lookup stays
//! deterministic should that rule ever be relaxed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::{ConflictKind, RouteError};
use super::params::Params;
use super::segment::{Segment, SegmentPattern};

/// Kind of a tree node, decided by the segment that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Literal segment, also used for the root
    Static,
    /// `:name(pattern)`
    Regex,
    /// `:name`
    Param,
    /// `*`
    Wildcard,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Static => "static",
            NodeKind::Regex => "regex",
            NodeKind::Param => "param",
            NodeKind::Wildcard => "wildcard",
        };
        f.write_str(s)
    }
}

/// One position in a method's route tree.
#[derive(Debug)]
pub struct Node<H> {
    kind: NodeKind,
    /// Segment text that created this node; `/` for the root
    segment: String,
    static_children: HashMap<String, Node<H>>,
    regex_child: Option<Box<Node<H>>>,
    param_child: Option<Box<Node<H>>>,
    star_child: Option<Box<Node<H>>>,
    /// Set for param and regex nodes
    param_name: Option<Arc<str>>,
    /// Set for regex nodes
    pattern: Option<SegmentPattern>,
    handler: Option<H>,
    /// Full route path, set together with `handler`
    route: Option<Arc<str>>,
}

impl<H> Node<H> {
    fn new(kind: NodeKind, segment: &str) -> Self {
        Self {
            kind,
            segment: segment.to_string(),
            static_children: HashMap::new(),
            regex_child: None,
            param_child: None,
            star_child: None,
            param_name: None,
            pattern: None,
            handler: None,
            route: None,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(NodeKind::Static, "/")
    }

    /// Kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Segment text that created this node.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Parameter bound by this node, for param and regex nodes.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// Handler registered on this node, if a route ends here.
    #[must_use]
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Registered path of the route ending here.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    /// Find or create the child for `segment`.
    ///
    /// Re-requesting an existing special child with the same name (and pattern)
    /// returns it. A request that would put two different special children on
    /// this node, or rename an existing one, is a conflict.
    pub(crate) fn child_or_create(
        &mut self,
        path: &str,
        segment: &Segment<'_>,
    ) -> Result<&mut Node<H>, RouteError> {
        match segment {
            Segment::Static(text) => Ok(self.static_child_or_create(text)),
            Segment::Param { name } => self.param_child_or_create(path, name),
            Segment::Regex { name, pattern } => self.regex_child_or_create(path, name, pattern),
            Segment::Wildcard => self.star_child_or_create(path),
        }
    }

    fn static_child_or_create(&mut self, text: &str) -> &mut Node<H> {
        self.static_children
            .entry(text.to_string())
            .or_insert_with(|| Node::new(NodeKind::Static, text))
    }

    fn param_child_or_create(&mut self, path: &str, name: &str) -> Result<&mut Node<H>, RouteError> {
        self.ensure_exclusive(path, NodeKind::Param)?;
        if let Some(existing) = self.param_child.as_deref().and_then(Node::param_name) {
            if existing != name {
                return Err(RouteError::conflict(
                    path,
                    ConflictKind::ParamName {
                        existing: existing.to_string(),
                        requested: name.to_string(),
                    },
                ));
            }
        }
        let child = self.param_child.get_or_insert_with(|| {
            let mut child = Node::new(NodeKind::Param, &format!(":{}", name));
            child.param_name = Some(Arc::from(name));
            Box::new(child)
        });
        Ok(&mut **child)
    }

    fn regex_child_or_create(
        &mut self,
        path: &str,
        name: &str,
        pattern: &SegmentPattern,
    ) -> Result<&mut Node<H>, RouteError> {
        self.ensure_exclusive(path, NodeKind::Regex)?;
        let segment = format!(":{}({})", name, pattern.as_str());
        if let Some(existing) = self.regex_child.as_deref() {
            if existing.param_name() != Some(name) || existing.pattern.as_ref() != Some(pattern) {
                return Err(RouteError::conflict(
                    path,
                    ConflictKind::RegexSpec {
                        existing: existing.segment.clone(),
                        requested: segment,
                    },
                ));
            }
        }
        let child = self.regex_child.get_or_insert_with(|| {
            let mut child = Node::new(NodeKind::Regex, &segment);
            child.param_name = Some(Arc::from(name));
            child.pattern = Some(pattern.clone());
            Box::new(child)
        });
        Ok(&mut **child)
    }

    fn star_child_or_create(&mut self, path: &str) -> Result<&mut Node<H>, RouteError> {
        self.ensure_exclusive(path, NodeKind::Wildcard)?;
        let child = self
            .star_child
            .get_or_insert_with(|| Box::new(Node::new(NodeKind::Wildcard, "*")));
        Ok(&mut **child)
    }

    /// Reject `requested` if another special kind already hangs off this node.
    fn ensure_exclusive(&self, path: &str, requested: NodeKind) -> Result<(), RouteError> {
        let occupied = [
            (NodeKind::Regex, self.regex_child.is_some()),
            (NodeKind::Param, self.param_child.is_some()),
            (NodeKind::Wildcard, self.star_child.is_some()),
        ];
        match occupied
            .iter()
            .find(|(kind, present)| *present && *kind != requested)
        {
            Some(&(existing, _)) => Err(RouteError::conflict(
                path,
                ConflictKind::MixedSpecial {
                    existing,
                    requested,
                },
            )),
            None => Ok(()),
        }
    }

    /// Bind the handler of a fully registered route.
    pub(crate) fn bind(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        if self.handler.is_some() {
            return Err(RouteError::conflict(path, ConflictKind::DuplicateRoute));
        }
        self.handler = Some(handler);
        self.route = Some(Arc::from(path));
        Ok(())
    }

    /// Select the child for one request segment, binding params on the way.
    ///
    /// A wildcard node with no matching child swallows the segment itself,
    /// which makes `*` a catch-all for any deeper segments.
    pub(crate) fn child_of(&self, segment: &str, params: &mut Params) -> Option<&Node<H>> {
        if segment.is_empty() {
            return None;
        }
        if let Some(child) = self.static_children.get(segment) {
            return Some(child);
        }
        if let Some(child) = self.regex_child.as_deref() {
            if child.pattern.as_ref().is_some_and(|p| p.is_match(segment)) {
                child.bind_param(segment, params);
                return Some(child);
            }
        }
        if let Some(child) = self.param_child.as_deref() {
            child.bind_param(segment, params);
            return Some(child);
        }
        if let Some(child) = self.star_child.as_deref() {
            return Some(child);
        }
        if self.kind == NodeKind::Wildcard {
            return Some(self);
        }
        None
    }

    fn bind_param(&self, value: &str, params: &mut Params) {
        if let Some(name) = &self.param_name {
            params.insert(name, value);
        }
    }
}
