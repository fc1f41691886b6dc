//! Error types for markup derivation and configuration.
//!
//! [`CodegenError`] is produced when a [`Construct`](crate::Construct)
//! implementation cannot derive markup from a node's expression, or when
//! an invocation names an unknown output format. Code generation itself
//! is total — once a tree is built, [`render`](crate::Tree::render) cannot
//! fail.

use std::sync::Arc;
use thiserror::Error;

/// An error raised while building the directive tree.
///
/// Carries a structured [`CodegenErrorKind`], a human-readable message,
/// and an optional underlying error cause.
///
/// # Error chaining
///
/// When an external [`Construct`](crate::Construct) implementation catches
/// an underlying error (attribute parsing, name resolution, etc.), it can
/// preserve the original error chain using [`with_source`](CodegenError::with_source):
///
/// ```rust
/// use loom_codegen::CodegenError;
///
/// fn example() -> Result<(), CodegenError> {
///     let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad attribute table");
///     Err(CodegenError::construct_error("failed to resolve tag attributes").with_source(io_err))
/// }
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CodegenError {
    pub kind: CodegenErrorKind,
    pub message: String,
    /// The underlying error that caused this one, if any.
    ///
    /// Wrapped in `Arc` so that `CodegenError` remains `Clone`.
    #[source]
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl CodegenError {
    pub fn new(kind: CodegenErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying error cause.
    ///
    /// The source is wrapped in an `Arc` so that `CodegenError` remains
    /// `Clone`.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    // Convenience constructors for common error types

    pub fn invalid_expression(expression: &str, reason: &str) -> Self {
        Self::new(
            CodegenErrorKind::InvalidExpression,
            format!("invalid expression `{expression}`: {reason}"),
        )
    }

    pub fn unsupported_format(name: &str) -> Self {
        Self::new(
            CodegenErrorKind::UnsupportedFormat,
            format!("unsupported output format: {name}"),
        )
    }

    pub fn construct_error(message: impl Into<String>) -> Self {
        Self::new(CodegenErrorKind::ConstructError, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    /// A construct could not derive markup from its expression.
    InvalidExpression,
    /// An invocation named an output format this compiler does not know.
    UnsupportedFormat,
    /// An external [`Construct`](crate::Construct) implementation failed.
    ConstructError,
}
