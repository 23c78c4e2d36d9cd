//! Mica static type checker.
//!
//! ```text
//! Mica Source → Lexer → Parser → [Type Checker] → Evaluator
//! ```
//!
//! This crate is the bracketed stage: it consumes the parser's AST
//! (defined in `mica-types`) read-only and either assigns every node a
//! [`Type`] or fails fast with the first [`mica_types::TypeError`].

pub mod checker;
pub mod env;
pub mod ty;

pub use checker::TypeChecker;
pub use env::TypeEnv;
pub use ty::Type;
