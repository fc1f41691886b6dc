//! Template-construct hooks.
//!
//! Each concrete template construct (tag, text run, embedded code, comment,
//! filter block) is expressed as a [`Construct`] implementation supplied to
//! [`Tree::append`](crate::Tree::append) — not as a subtype of the node
//! itself. The tree owns the rendering algorithm; constructs only derive a
//! node's markup and flags from its expression, and may optionally take
//! over emission for nodes the structural algorithm cannot express (text
//! runs and host-code fragments).
//!
//! There are two ways to supply a construct:
//!
//! - **Closure-based**: use [`ClosureConstruct`] for evaluate-only
//!   constructs where a full trait implementation would be boilerplate.
//! - **Trait-based**: implement [`Construct`] directly when the construct
//!   needs an emission override or non-trivial state.

use crate::config::Config;
use crate::error::CodegenError;
use crate::tree::{Evaluation, NodeRef};

/// A template construct: the per-variant strategy attached to each node.
///
/// [`evaluate`](Construct::evaluate) is invoked exactly once, when the node
/// is attached to the tree and before any children exist; the [`Evaluation`]
/// it returns is fixed for the node's lifetime. Implementations derive
/// opening/closing markup, the `silent`/`preserve` flags, and the
/// whitespace-removal switches from the node's expression and the
/// invocation [`Config`] — attribute parsing, tag-name resolution, and
/// dialect differences all live here, never in the rendering algorithm.
pub trait Construct: Send + Sync {
    /// Derive markup and behaviour flags from the node's expression.
    ///
    /// The default derives nothing: no markup, no flags. That is the
    /// correct behaviour for the root and for purely structural grouping
    /// nodes.
    fn evaluate(&self, expression: &str, config: &Config) -> Result<Evaluation, CodegenError> {
        let _ = (expression, config);
        Ok(Evaluation::default())
    }

    /// Take over code generation for this node entirely.
    ///
    /// Return `None` (the default) to let the structural rendering
    /// algorithm handle the node. Constructs whose nodes carry no markup
    /// but still produce output — text runs, embedded host-code fragments,
    /// interpolations — return `Some` and build their statement through the
    /// node's emission primitives ([`emit_text`](NodeRef::emit_text),
    /// [`emit_code`](NodeRef::emit_code), [`emit_value`](NodeRef::emit_value)).
    ///
    /// Overrides inside a whitespace-preserving region should return raw
    /// markup text rather than an emission statement, so the preserving
    /// ancestor can fold it into its single literal.
    fn emit(&self, node: &NodeRef<'_>) -> Option<String> {
        let _ = node;
        None
    }
}

/// The do-nothing construct.
///
/// Used by the tree root and by structural grouping nodes that exist only
/// to hold children: derives no markup, sets no flags, and never overrides
/// emission.
pub struct Plain;

impl Construct for Plain {}

/// A [`Construct`] backed by a closure.
///
/// Use this for evaluate-only constructs where implementing the trait
/// manually would be boilerplate. Closure constructs cannot override
/// emission; constructs that emit directly implement [`Construct`].
///
/// ```rust
/// use loom_codegen::{ClosureConstruct, Evaluation, Trim};
///
/// let comment = ClosureConstruct::new(|_, _| {
///     Ok(Evaluation::new().silent(true))
/// });
///
/// let paragraph = ClosureConstruct::new(|_, _| {
///     Ok(Evaluation::tag("<p>", "</p>").trim(Trim::around()))
/// });
/// ```
pub struct ClosureConstruct<F>
where
    F: Fn(&str, &Config) -> Result<Evaluation, CodegenError> + Send + Sync,
{
    func: F,
}

impl<F> ClosureConstruct<F>
where
    F: Fn(&str, &Config) -> Result<Evaluation, CodegenError> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Construct for ClosureConstruct<F>
where
    F: Fn(&str, &Config) -> Result<Evaluation, CodegenError> + Send + Sync,
{
    fn evaluate(&self, expression: &str, config: &Config) -> Result<Evaluation, CodegenError> {
        (self.func)(expression, config)
    }
}
