//! AST node types for the Mica language.
//!
//! Nodes are produced by the parser and consumed read-only by the type
//! checker; every node carries a [`Span`] for error reporting. Large
//! recursive types are boxed to keep enum sizes reasonable. Field lists
//! are `Vec`s, not maps — source order is significant.

use crate::Span;
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete Mica compilation unit: the program root.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Identifiers
// ══════════════════════════════════════════════════════════════════════════════

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A statement — a syntactic form that produces no value of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var name: type [= initializer]`
    VarDecl(VarDeclStmt),
    /// `target = value`
    Assign(AssignStmt),
    /// `struct Name { field: type, ... }`
    StructDecl(StructDeclStmt),
    /// `union Name { Member { field: type, ... }, ... }`
    UnionDecl(UnionDeclStmt),
    /// `if cond { ... } [else { ... }]`
    If(IfStmt),
    /// An expression in statement position.
    Expr(ExprStmt),
}

impl Stmt {
    /// The source span of the statement.
    pub fn span(&self) -> Span {
        match self {
            Stmt::VarDecl(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::StructDecl(s) => s.span,
            Stmt::UnionDecl(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::Expr(s) => s.expr.span,
        }
    }
}

/// `var name: type` with an optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub name: Ident,
    pub type_name: Ident,
    pub initializer: Option<Expr>,
    pub span: Span,
}

/// `target = value` — assignment to an already-declared identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Ident,
    pub value: Expr,
    pub span: Span,
}

/// `struct Name { field: type, ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclStmt {
    pub name: Ident,
    pub fields: Vec<FieldDef>,
    pub span: Span,
}

/// A declared field: `name: type`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: Ident,
    pub type_name: Ident,
    pub span: Span,
}

/// `union Name { Member { ... }, ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDeclStmt {
    pub name: Ident,
    pub members: Vec<MemberDef>,
    pub span: Span,
}

/// A union member — a named, struct-like alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDef {
    pub name: Ident,
    pub fields: Vec<FieldDef>,
    pub span: Span,
}

/// `if cond { then } [else { else }]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
}

/// `{ statements... }` — opens a child scope for its duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A spanned expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The syntactic form of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `42`
    IntLit(i32),
    /// `3.5`
    FloatLit(f32),
    /// `"text"`
    StringLit(String),
    /// `true` / `false`
    BoolLit(bool),
    /// `Name { field: expr, ... }`
    StructLit { name: Ident, fields: Vec<FieldInit> },
    /// `Name::Member { field: expr, ... }`
    UnionLit {
        name: Ident,
        member: Ident,
        fields: Vec<FieldInit>,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// `condition ? then : else`
    Ternary {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    /// `drop ident` — releases ownership in the evaluator; type-transparent.
    Drop(Box<Expr>),
    /// A reference to a bound identifier.
    Identifier(String),
    /// `{ statements... }` in expression position.
    Block(Box<Block>),
}

/// A field initializer in a struct or union literal, matched positionally
/// against the type's declared fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInit {
    pub name: Ident,
    pub value: Expr,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
    /// `~`
    BitNot,
}

/// Binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    And,
    Or,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Less => "<",
            BinOp::Greater => ">",
            BinOp::LessEq => "<=",
            BinOp::GreaterEq => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        };
        write!(f, "{symbol}")
    }
}
