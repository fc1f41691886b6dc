//! Compiler invocation configuration.
//!
//! A [`Config`] is fixed by the caller when a node is constructed and never
//! mutated afterward. The two nesting levels are converted once into fixed
//! indentation strings at construction time; everything else is consulted
//! by [`Construct`](crate::Construct) implementations when they derive
//! markup from an expression.

use std::fmt;
use std::str::FromStr;

use crate::error::CodegenError;

/// Output markup dialect.
///
/// The dialect never changes how the directive tree is rendered into host
/// code — it is carried for [`Construct`](crate::Construct) implementations,
/// which consult it when deriving markup (e.g. `<br/>` under [`Xhtml`](Format::Xhtml)
/// versus `<br>` under [`Html5`](Format::Html5)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Xhtml,
    Html4,
    #[default]
    Html5,
}

impl Format {
    /// The dialect name as it appears in compiler invocations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xhtml => "xhtml",
            Format::Html4 => "html4",
            Format::Html5 => "html5",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xhtml" => Ok(Format::Xhtml),
            "html4" => Ok(Format::Html4),
            "html5" => Ok(Format::Html5),
            other => Err(CodegenError::unsupported_format(other)),
        }
    }
}

/// Per-node configuration propagated from the compiler invocation.
///
/// Create with [`Config::new()`] and chain builder methods:
///
/// ```rust
/// use loom_codegen::{Config, Format};
///
/// let config = Config::new()
///     .format(Format::Xhtml)
///     .escape_html(false)
///     .block_level(2);
/// ```
///
/// The escape flags and [`Format`] apply to the whole invocation; the two
/// levels are per-node, supplied by the parser as it walks into nested
/// template constructs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether interpolated document content is routed through the runtime
    /// escaping helper by default.
    pub escape_html: bool,

    /// Whether interpolated attribute values are routed through the runtime
    /// escaping helper.
    pub escape_attributes: bool,

    /// Output markup dialect, consulted by constructs deriving markup.
    pub format: Format,

    /// Nesting depth of the generated host code at this node. Every emitted
    /// statement is prefixed with this much indentation.
    pub code_block_level: usize,

    /// Nesting depth of the output markup at this node. Emitted markup is
    /// prefixed with this much indentation unless the node sits inside a
    /// whitespace-preserving region.
    pub block_level: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape_html: true,
            escape_attributes: true,
            format: Format::default(),
            code_block_level: 0,
            block_level: 0,
        }
    }
}

impl Config {
    /// Create a new `Config` with all defaults (escaping on, html5, depth 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the default escaping of interpolated content.
    pub fn escape_html(mut self, on: bool) -> Self {
        self.escape_html = on;
        self
    }

    /// Enable or disable the escaping of interpolated attribute values.
    pub fn escape_attributes(mut self, on: bool) -> Self {
        self.escape_attributes = on;
        self
    }

    /// Set the output markup dialect.
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the host-code nesting depth for this node.
    pub fn code_block_level(mut self, level: usize) -> Self {
        self.code_block_level = level;
        self
    }

    /// Set the output-markup nesting depth for this node.
    pub fn block_level(mut self, level: usize) -> Self {
        self.block_level = level;
        self
    }
}

/// Fixed-width indentation for a nesting depth: two spaces per level.
pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}
