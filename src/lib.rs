//! # loom-codegen
//!
//! The code-generation core of the loom markup-template compiler. A parsed
//! template becomes a [`Tree`] of directive nodes; rendering the tree
//! produces host-language source code that, when executed by the host
//! runtime, writes the final document by appending fragments to an output
//! buffer.
//!
//! The crate is split into two layers:
//!
//! - **The tree and its rendering algorithm** live here and know nothing
//!   about concrete template syntax: branch selection is purely structural
//!   (children present or not, full tag pair present or not), refined by
//!   the `silent` and `preserve` flags.
//! - **The parser** (external) builds the tree and supplies one
//!   [`Construct`] per node — the hook that derives a node's markup and
//!   flags from its source expression, and optionally takes over emission
//!   for nodes that produce output without markup.
//!
//! ## Quick start
//!
//! ```rust
//! use loom_codegen::{ClosureConstruct, Config, Evaluation, Tree};
//!
//! let mut tree = Tree::new(Config::default());
//! let root = tree.root();
//!
//! let div = ClosureConstruct::new(|_, _| Ok(Evaluation::tag("<div>", "</div>")));
//! let div = tree.append(root, "%div", div, Config::default()).unwrap();
//!
//! let em = ClosureConstruct::new(|_, _| Ok(Evaluation::tag("<em>", "</em>")));
//! tree.append(div, "%em", em, Config::default().block_level(1)).unwrap();
//!
//! assert_eq!(
//!     tree.render(),
//!     "$o.push(\"<div>\");\n$o.push(\"  <em></em>\");\n$o.push(\"</div>\");\n"
//! );
//! ```
//!
//! ## Emitting constructs
//!
//! Nodes that carry no markup but still produce output — text runs,
//! interpolations, embedded host-code fragments — override
//! [`Construct::emit`] and build their statement through the node's
//! emission primitives:
//!
//! ```rust
//! use loom_codegen::{Config, Construct, NodeRef, Tree};
//!
//! struct Interpolation;
//!
//! impl Construct for Interpolation {
//!     fn emit(&self, node: &NodeRef<'_>) -> Option<String> {
//!         Some(node.emit_value(node.expression(), node.config().escape_html))
//!     }
//! }
//!
//! let mut tree = Tree::new(Config::default());
//! let root = tree.root();
//! tree.append(root, "user.name", Interpolation, Config::default()).unwrap();
//!
//! assert_eq!(tree.render(), "$o.push($e(user.name));\n");
//! ```
//!
//! ## Generated-code contract
//!
//! Every emitted statement is prefixed with the node's host-code
//! indentation and terminated with a single newline. Statements append to
//! the conventional output buffer `$o` via `$o.push(...)`; computed values
//! may be routed through the runtime escaping helper `$e(...)`. Two
//! reserved control characters, [`TRIM_LEFT`] and [`TRIM_RIGHT`], are
//! embedded in generated markup literals where a node requests whitespace
//! removal; a separate resolution pass strips the whitespace they mark
//! before the document is final. Neither the runtime helpers nor the
//! resolution pass is part of this crate.

pub mod config;
pub mod construct;
pub mod error;
pub mod tree;

mod render;

pub use config::{indent, Config, Format};
pub use construct::{ClosureConstruct, Construct, Plain};
pub use error::{CodegenError, CodegenErrorKind};
pub use tree::{Evaluation, NodeId, NodeRef, Tree, Trim, TRIM_LEFT, TRIM_RIGHT};
