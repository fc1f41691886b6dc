use std::fmt;

use crate::config::Config;
use crate::construct::Construct;
use crate::tree::NodeId;

/// Marker that tells the whitespace-resolution pass to strip whitespace
/// immediately *before* this point in the rendered document.
///
/// Both markers are C1 control characters that cannot occur in legitimate
/// template output. They are embedded raw into generated string literals
/// and survive until the external resolution pass consumes them; they are
/// part of the generated-code contract, not display text.
pub const TRIM_LEFT: char = '\u{0091}';

/// Marker that tells the whitespace-resolution pass to strip whitespace
/// immediately *after* this point in the rendered document.
///
/// See [`TRIM_LEFT`].
pub const TRIM_RIGHT: char = '\u{0092}';

/// Two independent whitespace-removal switches on a node.
///
/// `around` trims whitespace *outside* the node's tag pair (between the
/// node and its siblings); `inside` trims whitespace *just inside* the tag
/// pair (between each tag and the node's content). The switches control
/// where trim markers are placed in the opening and closing markup — see
/// [`Evaluation::opener_markup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trim {
    /// Strip whitespace between this node's tags and its neighbours.
    pub around: bool,
    /// Strip whitespace between this node's tags and its content.
    pub inside: bool,
}

impl Trim {
    /// Trim around the tag pair only.
    pub fn around() -> Self {
        Self {
            around: true,
            inside: false,
        }
    }

    /// Trim inside the tag pair only.
    pub fn inside() -> Self {
        Self {
            around: false,
            inside: true,
        }
    }
}

/// Markup and behaviour flags derived from a node's expression.
///
/// Produced exactly once per node by [`Construct::evaluate`] when the node
/// is attached to the tree, and immutable afterward — rendering only reads
/// these fields. An empty `opener` or `closer` means "no markup of that
/// kind"; the defaults describe a structural node with no markup at all.
///
/// Create with the chained builders:
///
/// ```rust
/// use loom_codegen::{Evaluation, Trim};
///
/// let eval = Evaluation::tag("<pre>", "</pre>")
///     .preserve(true)
///     .trim(Trim::inside());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Opening markup text, or empty for none.
    pub opener: String,
    /// Closing markup text, or empty for none.
    pub closer: String,
    /// When set, none of this node's children produce output. Used for
    /// comment and no-op constructs without markup of their own.
    pub silent: bool,
    /// When set, whitespace inside this node's rendered region is kept
    /// verbatim. Inherited by descendants at render time, never copied
    /// into their own flags.
    pub preserve: bool,
    /// Whitespace-removal switches for the markup of this node.
    pub trim: Trim,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup for a paired tag: both opener and closer at once.
    pub fn tag(opener: impl Into<String>, closer: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
            closer: closer.into(),
            ..Self::default()
        }
    }

    /// Set the opening markup.
    pub fn opener(mut self, opener: impl Into<String>) -> Self {
        self.opener = opener.into();
        self
    }

    /// Set the closing markup.
    pub fn closer(mut self, closer: impl Into<String>) -> Self {
        self.closer = closer.into();
        self
    }

    /// Mark this node's children as non-emitting.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Mark this node's region as whitespace-preserving.
    pub fn preserve(mut self, preserve: bool) -> Self {
        self.preserve = preserve;
        self
    }

    /// Set the whitespace-removal switches.
    pub fn trim(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    /// Whether this node carries both an opener and a closer.
    pub fn is_paired(&self) -> bool {
        !self.opener.is_empty() && !self.closer.is_empty()
    }

    /// Opening markup with trim markers applied.
    ///
    /// `trim.around` places [`TRIM_LEFT`] before the opener (swallowing
    /// whitespace between this node and whatever precedes it);
    /// `trim.inside` places [`TRIM_RIGHT`] after it (swallowing whitespace
    /// between the opening tag and the first child). Together with
    /// [`closer_markup`](Evaluation::closer_markup) this brackets the
    /// node's inner content region exactly.
    pub fn opener_markup(&self) -> String {
        let mut markup = String::with_capacity(self.opener.len() + 2);
        if self.trim.around {
            markup.push(TRIM_LEFT);
        }
        markup.push_str(&self.opener);
        if self.trim.inside {
            markup.push(TRIM_RIGHT);
        }
        markup
    }

    /// Closing markup with trim markers applied.
    ///
    /// The mirror image of [`opener_markup`](Evaluation::opener_markup):
    /// `trim.inside` places [`TRIM_LEFT`] before the closer, `trim.around`
    /// places [`TRIM_RIGHT`] after it.
    pub fn closer_markup(&self) -> String {
        let mut markup = String::with_capacity(self.closer.len() + 2);
        if self.trim.inside {
            markup.push(TRIM_LEFT);
        }
        markup.push_str(&self.closer);
        if self.trim.around {
            markup.push(TRIM_RIGHT);
        }
        markup
    }
}

/// A single directive-tree node.
///
/// Nodes live in their owning [`Tree`](crate::Tree)'s arena; the parent
/// link is a plain index and never extends a node's lifetime. All fields
/// are set during construction and read-only afterward.
pub(crate) struct Node {
    pub(crate) expression: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) evaluation: Evaluation,
    pub(crate) construct: Box<dyn Construct>,
    pub(crate) config: Config,
    /// Indentation prefixed onto every emitted host-code line, derived
    /// once from `config.code_block_level`.
    pub(crate) code_indent: String,
    /// Indentation prefixed onto emitted markup, derived once from
    /// `config.block_level`.
    pub(crate) html_indent: String,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("expression", &self.expression)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("evaluation", &self.evaluation)
            .finish_non_exhaustive()
    }
}
