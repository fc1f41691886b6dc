//! The directive tree.
//!
//! A [`Tree`] owns every node of one parsed template in an arena; nodes
//! refer to each other by [`NodeId`] index, so the parent back-reference is
//! non-owning by construction and can never form a cycle or extend a
//! lifetime. The parser builds the tree top-down with [`Tree::append`],
//! which runs the node's [`Construct`](crate::Construct) hook exactly once
//! before the node becomes reachable — a node with underived markup cannot
//! be observed, let alone rendered.
//!
//! A tree is built once, rendered once via [`Tree::render`], and discarded.

pub mod node;

pub use node::{Evaluation, Trim, TRIM_LEFT, TRIM_RIGHT};

use node::Node;

use crate::config::{indent, Config};
use crate::construct::{Construct, Plain};
use crate::error::CodegenError;

/// Index of a node within its owning [`Tree`].
///
/// Ids are only meaningful for the tree that issued them; looking up an id
/// from another tree panics (or returns an arbitrary node of the same
/// index). They are never reused within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// An arena-backed tree of template directive nodes.
///
/// Construction mirrors the parse: [`Tree::new`] creates the root (a
/// markup-less [`Plain`] node), then [`Tree::append`] attaches one node per
/// template construct in document order. Child order is render order.
///
/// ```rust
/// use loom_codegen::{ClosureConstruct, Config, Evaluation, Tree};
///
/// let mut tree = Tree::new(Config::default());
/// let root = tree.root();
/// let tag = ClosureConstruct::new(|_, _| Ok(Evaluation::tag("<p>", "</p>")));
/// tree.append(root, "%p", tag, Config::default()).unwrap();
///
/// assert_eq!(tree.render(), "$o.push(\"<p></p>\");\n");
/// ```
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only a root node.
    ///
    /// The root carries no expression and no markup; it exists to anchor
    /// the top-level constructs of the template.
    pub fn new(config: Config) -> Self {
        let code_indent = indent(config.code_block_level);
        let html_indent = indent(config.block_level);
        Self {
            nodes: vec![Node {
                expression: String::new(),
                parent: None,
                children: Vec::new(),
                evaluation: Evaluation::default(),
                construct: Box::new(Plain),
                config,
                code_indent,
                html_indent,
            }],
        }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Construct a node and attach it as the last child of `parent`.
    ///
    /// The construct's [`evaluate`](Construct::evaluate) hook runs here,
    /// once, before any children can be attached to the new node; the
    /// derived markup and flags are immutable afterward. Returns the new
    /// node's id so grandchildren can be attached beneath it — the parent
    /// id stays valid, so chained builds simply call `append` repeatedly
    /// with the same parent.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree. Ids are handed out
    /// by this tree's own `append`/`root`, so an unknown id is a caller
    /// bug, not an input error.
    pub fn append(
        &mut self,
        parent: NodeId,
        expression: impl Into<String>,
        construct: impl Construct + 'static,
        config: Config,
    ) -> Result<NodeId, CodegenError> {
        assert!(
            parent.0 < self.nodes.len(),
            "parent id {} does not belong to this tree",
            parent.0
        );

        let expression = expression.into();
        let evaluation = construct.evaluate(&expression, &config)?;
        let code_indent = indent(config.code_block_level);
        let html_indent = indent(config.block_level);

        let id = NodeId(self.nodes.len());
        tracing::trace!(
            parent = parent.0,
            id = id.0,
            expression = %expression,
            "attached directive node"
        );

        self.nodes.push(Node {
            expression,
            parent: Some(parent),
            children: Vec::new(),
            evaluation,
            construct: Box::new(construct),
            config,
            code_indent,
            html_indent,
        });
        self.nodes[parent.0].children.push(id);

        Ok(id)
    }

    /// A read-only handle to the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(
            id.0 < self.nodes.len(),
            "node id {} does not belong to this tree",
            id.0
        );
        NodeRef { tree: self, id }
    }

    /// Number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Generate host code for the whole tree.
    ///
    /// A single synchronous depth-first walk from the root; the returned
    /// string is the full generated program body, ready for the external
    /// whitespace-resolution pass. Rendering reads the tree without
    /// mutating it, so this is a pure function of the tree's state — but
    /// a tree is conventionally rendered once and discarded.
    pub fn render(&self) -> String {
        tracing::debug!(nodes = self.nodes.len(), "generating host code");
        self.node(self.root()).render()
    }

    pub(crate) fn raw(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// A read-only view of one node and its position in the tree.
///
/// Handles are cheap to copy and borrow the tree they came from. External
/// [`Construct`](crate::Construct) implementations receive a `NodeRef` when
/// overriding emission, giving them the node's expression, configuration,
/// derived markup, and the emission primitives — but no way to mutate the
/// tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    pub(crate) tree: &'t Tree,
    pub(crate) id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The raw source fragment driving this node's semantics. Empty for
    /// the root and for purely structural nodes.
    pub fn expression(&self) -> &'t str {
        &self.tree.raw(self.id).expression
    }

    /// The configuration this node was constructed with.
    pub fn config(&self) -> &'t Config {
        &self.tree.raw(self.id).config
    }

    /// The markup and flags derived by the construct hook.
    pub fn evaluation(&self) -> &'t Evaluation {
        &self.tree.raw(self.id).evaluation
    }

    /// The parent node, if this is not the root.
    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.tree
            .raw(self.id)
            .parent
            .map(|id| NodeRef { tree: self.tree, id })
    }

    /// This node's children, in attachment (= render) order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + '_ {
        self.tree
            .raw(self.id)
            .children
            .iter()
            .map(|&id| NodeRef { tree: self.tree, id })
    }

    /// Whether this node has any children.
    pub fn has_children(&self) -> bool {
        !self.tree.raw(self.id).children.is_empty()
    }

    /// Whether this node's region keeps whitespace verbatim.
    ///
    /// True if this node's own `preserve` flag is set, or any ancestor's
    /// is. Re-walked on each call — ancestry never changes once a tree is
    /// built, and the walk only happens during the single render pass.
    pub fn is_preserved(&self) -> bool {
        if self.evaluation().preserve {
            return true;
        }
        match self.parent() {
            Some(parent) => parent.is_preserved(),
            None => false,
        }
    }
}
