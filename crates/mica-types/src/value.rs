use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime value variants the evaluator produces.
///
/// Every type the checker infers maps onto exactly one of these, so a
/// well-typed program can never confront the evaluator with a value shape
/// it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// 32-bit signed integer value.
    Int32,
    /// 32-bit floating value.
    Float32,
    /// String value.
    String,
    /// Boolean value.
    Bool,
    /// A constructed struct value.
    Struct,
    /// A constructed union member value.
    Union,
    /// Absence of a value — declarations, control statements, the program root.
    Empty,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int32 => "int32",
            ValueKind::Float32 => "float32",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Struct => "struct",
            ValueKind::Union => "union",
            ValueKind::Empty => "empty",
        };
        write!(f, "{name}")
    }
}
