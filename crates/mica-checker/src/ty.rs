//! Internal type representation for the Mica type checker.
//!
//! [`Type`] is the semantic type inferred during checking. It is distinct
//! from the syntactic type *names* the parser records on AST nodes; those
//! are resolved against the environment to produce a `Type`.
//!
//! This module also owns the operator legal-operand table. The table is
//! built once for the whole process and never mutated, so independent
//! checks may consult it concurrently without synchronization.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use mica_types::ast::BinOp;
use mica_types::ValueKind;

// ══════════════════════════════════════════════════════════════════════════════
// Type
// ══════════════════════════════════════════════════════════════════════════════

/// A semantic type in Mica.
///
/// Equality is nominal: a struct or union is identified by its declared
/// name, so two independently declared types with identical fields are
/// distinct, and a registered skeleton compares equal to the completed
/// type of the same name.
#[derive(Debug, Clone)]
pub enum Type {
    // ── Primitives ──
    I32,
    F32,
    Bool,
    String,

    // ── User-Defined ──
    /// `struct Name { field: type, ... }` — fields in declaration order.
    Struct {
        name: std::string::String,
        fields: Vec<StructField>,
    },
    /// `union Name { Member { ... }, ... }` — members in declaration order.
    Union {
        name: std::string::String,
        members: Vec<UnionMember>,
    },

    // ── Special ──
    /// Marker for forms that produce no value: declarations, control
    /// statements, the program root.
    Statement,
}

/// A declared field of a struct type (or of a union member).
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: std::string::String,
    pub ty: Type,
}

/// A member of a union type — a named, struct-like alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionMember {
    pub name: std::string::String,
    pub fields: Vec<StructField>,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::I32, Type::I32)
            | (Type::F32, Type::F32)
            | (Type::Bool, Type::Bool)
            | (Type::String, Type::String)
            | (Type::Statement, Type::Statement) => true,
            (Type::Struct { name: a, .. }, Type::Struct { name: b, .. }) => a == b,
            (Type::Union { name: a, .. }, Type::Union { name: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Type {}

impl Type {
    /// Returns true if this type is a member of the `Numbers` set.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::I32 | Type::F32)
    }

    /// The runtime value variant a value of this type evaluates to.
    ///
    /// Total by construction — every inferred type has exactly one
    /// runtime representation.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Type::I32 => ValueKind::Int32,
            Type::F32 => ValueKind::Float32,
            Type::Bool => ValueKind::Bool,
            Type::String => ValueKind::String,
            Type::Struct { .. } => ValueKind::Struct,
            Type::Union { .. } => ValueKind::Union,
            Type::Statement => ValueKind::Empty,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::I32 => write!(f, "i32"),
            Type::F32 => write!(f, "f32"),
            Type::Bool => write!(f, "bool"),
            Type::String => write!(f, "string"),
            Type::Struct { name, .. } => write!(f, "{}", name),
            Type::Union { name, .. } => write!(f, "{}", name),
            Type::Statement => write!(f, "statement"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Operator Legality
// ══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    /// Legal operand types per binary operator.
    ///
    /// Diagnostics cite this table, so its rows are part of the external
    /// contract:
    ///
    /// | operator             | legal operand types     |
    /// |----------------------|-------------------------|
    /// | `+`                  | i32, f32, string        |
    /// | `-` `*` `/` `%`      | i32, f32                |
    /// | `&` `\|` `^`         | bool                    |
    /// | `<<` `>>`            | i32                     |
    /// | `==` `!=`            | i32, f32, string, bool  |
    /// | `<` `>` `<=` `>=`    | i32, f32                |
    /// | `&&` `\|\|`          | bool                    |
    static ref OPERATOR_TABLE: HashMap<BinOp, Vec<Type>> = {
        use BinOp::*;
        let mut table = HashMap::new();
        table.insert(Add, vec![Type::I32, Type::F32, Type::String]);
        for op in [Sub, Mul, Div, Mod] {
            table.insert(op, vec![Type::I32, Type::F32]);
        }
        for op in [BitAnd, BitOr, BitXor] {
            table.insert(op, vec![Type::Bool]);
        }
        for op in [Shl, Shr] {
            table.insert(op, vec![Type::I32]);
        }
        for op in [Eq, NotEq] {
            table.insert(op, vec![Type::I32, Type::F32, Type::String, Type::Bool]);
        }
        for op in [Less, Greater, LessEq, GreaterEq] {
            table.insert(op, vec![Type::I32, Type::F32]);
        }
        for op in [And, Or] {
            table.insert(op, vec![Type::Bool]);
        }
        table
    };

    /// Legal operand types for the unary operators (`-`, `!`, `~`).
    static ref UNARY_OPERANDS: Vec<Type> = vec![Type::I32, Type::F32, Type::Bool];
}

/// The set of operand types `op` accepts.
pub fn legal_operand_types(op: BinOp) -> &'static [Type] {
    OPERATOR_TABLE.get(&op).map(Vec::as_slice).unwrap_or(&[])
}

/// The set of operand types any unary operator accepts.
pub fn unary_operand_types() -> &'static [Type] {
    &UNARY_OPERANDS
}
