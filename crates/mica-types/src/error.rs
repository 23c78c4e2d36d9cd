use crate::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a type check failed.
///
/// Checking is fail-fast: the first violation anywhere in the recursive
/// descent aborts the whole pass, so a failed check produces exactly one of
/// these. Type names are carried pre-rendered (the `Display` form of the
/// checker's `Type`) so this crate stays independent of the type model.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeErrorKind {
    #[error("undefined type '{name}'")]
    UndefinedType { name: String },

    #[error("undefined identifier '{name}'")]
    UndefinedIdentifier { name: String },

    #[error("type '{name}' is already defined in this scope")]
    DuplicateTypeDefinition { name: String },

    #[error("'{type_name}' declares {expected} field(s) but {found} initializer(s) were supplied")]
    FieldCountMismatch {
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("field '{field}' (position {position}) of '{type_name}' expects {expected}, got {found}")]
    FieldTypeMismatch {
        type_name: String,
        field: String,
        position: usize,
        expected: String,
        found: String,
    },

    #[error("operands of '{operator}' must have the same type, got {left} and {right}")]
    OperatorOperandTypeMismatch {
        operator: String,
        left: String,
        right: String,
    },

    #[error("operator '{operator}' is not supported for {operand} (legal operand types: {legal})")]
    OperatorNotSupportedForOperandType {
        operator: String,
        operand: String,
        legal: String,
    },

    #[error("condition must be bool, got {found}")]
    ConditionTypeMismatch { found: String },

    #[error("branches disagree: then-branch is {then_ty}, else-branch is {else_ty}")]
    BranchTypeMismatch { then_ty: String, else_ty: String },

    #[error("cannot assign {found} to '{target}' declared as {expected}")]
    AssignmentTypeMismatch {
        target: String,
        expected: String,
        found: String,
    },

    /// An operand combination passed the legal-operand check but has no
    /// result rule. Indicates a gap in the checker, not a user mistake.
    #[error("internal: no result rule for operator '{operator}' on {operand} operands")]
    UnhandledOperatorCombination { operator: String, operand: String },
}

impl TypeErrorKind {
    /// True for kinds that signal a checker defect rather than a
    /// user-facing diagnostic.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::UnhandledOperatorCombination { .. })
    }
}

/// A type error with the source location of the offending construct.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{span}: {kind}")]
pub struct TypeError {
    #[serde(flatten)]
    pub kind: TypeErrorKind,
    #[serde(flatten)]
    pub span: Span,
}

impl TypeError {
    /// Create a new error.
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}
