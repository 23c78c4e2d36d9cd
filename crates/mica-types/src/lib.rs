//! Shared types for the Mica compiler.
//!
//! This crate defines the AST node types, source spans, the type-error
//! taxonomy, and the evaluator-facing value-kind contract shared across
//! compiler stages.

pub mod ast;
mod error;
mod span;
mod value;

pub use error::{TypeError, TypeErrorKind};
pub use span::Span;
pub use value::ValueKind;

/// Result type used throughout the Mica compiler.
pub type Result<T> = std::result::Result<T, TypeError>;
