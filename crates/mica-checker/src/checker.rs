//! Mica type checker — walks a parsed AST and infers a type for every node.
//!
//! Entry point: [`TypeChecker::check`]. The per-node operations
//! [`TypeChecker::check_stmt`], [`TypeChecker::check_expr`] and
//! [`TypeChecker::check_block`] are public so callers can check a single
//! subtree against an environment.
//!
//! Checking is fail-fast: the first violation anywhere in the recursive
//! descent aborts the pass with a [`TypeError`]. The AST is consumed
//! read-only; the only mutable state is the environment's scope chain.

use mica_types::ast::{
    AssignStmt, BinOp, Block, Expr, ExprKind, FieldInit, Ident, IfStmt, Program, Stmt,
    StructDeclStmt, UnaryOp, UnionDeclStmt, VarDeclStmt,
};
use mica_types::{Result, Span, TypeError, TypeErrorKind};

use crate::env::TypeEnv;
use crate::ty::{self, StructField, Type, UnionMember};

// ══════════════════════════════════════════════════════════════════════════════
// TypeChecker
// ══════════════════════════════════════════════════════════════════════════════

/// Walks a parsed [`Program`] and validates all types.
pub struct TypeChecker {
    env: TypeEnv,
}

impl TypeChecker {
    /// Create a new type checker with a fresh environment.
    pub fn new() -> Self {
        Self {
            env: TypeEnv::new(),
        }
    }

    /// Type-check a complete program.
    ///
    /// The program root produces no value, so a successful check yields
    /// the statement marker type.
    pub fn check(&mut self, program: &Program) -> Result<Type> {
        for stmt in &program.statements {
            self.check_stmt(stmt)?;
        }
        Ok(Type::Statement)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statements
    // ══════════════════════════════════════════════════════════════════════

    /// Type-check a single statement.
    pub fn check_stmt(&mut self, stmt: &Stmt) -> Result<Type> {
        match stmt {
            Stmt::VarDecl(decl) => self.check_var_decl(decl),
            Stmt::Assign(assign) => self.check_assign(assign),
            Stmt::StructDecl(decl) => self.check_struct_decl(decl),
            Stmt::UnionDecl(decl) => self.check_union_decl(decl),
            Stmt::If(if_stmt) => self.check_if(if_stmt),
            Stmt::Expr(expr_stmt) => self.check_expr(&expr_stmt.expr),
        }
    }

    fn check_var_decl(&mut self, decl: &VarDeclStmt) -> Result<Type> {
        let init_ty = match &decl.initializer {
            Some(init) => Some((self.check_expr(init)?, init.span)),
            None => None,
        };
        let declared = self.resolve_type_name(&decl.type_name)?;
        if let Some((init_ty, init_span)) = init_ty {
            if init_ty != declared {
                return Err(TypeError::new(
                    TypeErrorKind::AssignmentTypeMismatch {
                        target: decl.name.name.clone(),
                        expected: declared.to_string(),
                        found: init_ty.to_string(),
                    },
                    init_span,
                ));
            }
        }
        Ok(self.env.define(&decl.name.name, declared))
    }

    fn check_assign(&mut self, assign: &AssignStmt) -> Result<Type> {
        let value_ty = self.check_expr(&assign.value)?;
        // Assignment never implicitly declares.
        let target_ty = self
            .env
            .lookup(&assign.target.name)
            .cloned()
            .ok_or_else(|| {
                TypeError::new(
                    TypeErrorKind::UndefinedIdentifier {
                        name: assign.target.name.clone(),
                    },
                    assign.target.span,
                )
            })?;
        if value_ty != target_ty {
            return Err(TypeError::new(
                TypeErrorKind::AssignmentTypeMismatch {
                    target: assign.target.name.clone(),
                    expected: target_ty.to_string(),
                    found: value_ty.to_string(),
                },
                assign.value.span,
            ));
        }
        // The binding is left untouched.
        Ok(target_ty)
    }

    fn check_struct_decl(&mut self, decl: &StructDeclStmt) -> Result<Type> {
        if self.env.is_defined(&decl.name.name) {
            return Err(TypeError::new(
                TypeErrorKind::DuplicateTypeDefinition {
                    name: decl.name.name.clone(),
                },
                decl.name.span,
            ));
        }

        // Register a skeleton under the name first, so a field may refer
        // to the type being declared. Nominal equality makes the skeleton
        // indistinguishable from the completed type.
        self.env.define(
            &decl.name.name,
            Type::Struct {
                name: decl.name.name.clone(),
                fields: Vec::new(),
            },
        );

        let mut fields = Vec::with_capacity(decl.fields.len());
        for field in &decl.fields {
            let ty = self.resolve_type_name(&field.type_name)?;
            fields.push(StructField {
                name: field.name.name.clone(),
                ty,
            });
        }

        self.env.define(
            &decl.name.name,
            Type::Struct {
                name: decl.name.name.clone(),
                fields,
            },
        );
        Ok(Type::Statement)
    }

    fn check_union_decl(&mut self, decl: &UnionDeclStmt) -> Result<Type> {
        if self.env.is_defined(&decl.name.name) {
            return Err(TypeError::new(
                TypeErrorKind::DuplicateTypeDefinition {
                    name: decl.name.name.clone(),
                },
                decl.name.span,
            ));
        }

        self.env.define(
            &decl.name.name,
            Type::Union {
                name: decl.name.name.clone(),
                members: Vec::new(),
            },
        );

        let mut members = Vec::with_capacity(decl.members.len());
        for member in &decl.members {
            let mut fields = Vec::with_capacity(member.fields.len());
            for field in &member.fields {
                let ty = self.resolve_type_name(&field.type_name)?;
                fields.push(StructField {
                    name: field.name.name.clone(),
                    ty,
                });
            }
            members.push(UnionMember {
                name: member.name.name.clone(),
                fields,
            });
        }

        self.env.define(
            &decl.name.name,
            Type::Union {
                name: decl.name.name.clone(),
                members,
            },
        );
        Ok(Type::Statement)
    }

    fn check_if(&mut self, if_stmt: &IfStmt) -> Result<Type> {
        let cond_ty = self.check_expr(&if_stmt.condition)?;
        if cond_ty != Type::Bool {
            return Err(TypeError::new(
                TypeErrorKind::ConditionTypeMismatch {
                    found: cond_ty.to_string(),
                },
                if_stmt.condition.span,
            ));
        }
        self.check_block(&if_stmt.then_block)?;
        if let Some(else_block) = &if_stmt.else_block {
            self.check_block(else_block)?;
        }
        // The if form itself produces no value.
        Ok(Type::Statement)
    }

    /// Type-check a block in a child scope.
    ///
    /// The scope frame lives exactly as long as the block: pushed on
    /// entry, popped on exit (also on failure, so the environment is left
    /// balanced). The block's type is the type of its trailing statement,
    /// or the statement marker when empty.
    pub fn check_block(&mut self, block: &Block) -> Result<Type> {
        self.env.push_scope();
        let result = self.check_block_statements(block);
        self.env.pop_scope();
        result
    }

    fn check_block_statements(&mut self, block: &Block) -> Result<Type> {
        let mut last = Type::Statement;
        for stmt in &block.statements {
            last = self.check_stmt(stmt)?;
        }
        Ok(last)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expressions
    // ══════════════════════════════════════════════════════════════════════

    /// Infer the type of an expression.
    pub fn check_expr(&mut self, expr: &Expr) -> Result<Type> {
        match &expr.kind {
            // ── Literals ──
            ExprKind::IntLit(_) => Ok(Type::I32),
            ExprKind::FloatLit(_) => Ok(Type::F32),
            ExprKind::StringLit(_) => Ok(Type::String),
            ExprKind::BoolLit(_) => Ok(Type::Bool),

            ExprKind::StructLit { name, fields } => self.check_struct_lit(name, fields),
            ExprKind::UnionLit {
                name,
                member,
                fields,
            } => self.check_union_lit(name, member, fields),

            // ── Operators ──
            ExprKind::Unary { op, operand } => self.check_unary(*op, operand),
            ExprKind::Binary { left, op, right } => self.check_binary(left, *op, right),
            ExprKind::Ternary {
                condition,
                then_expr,
                else_expr,
            } => self.check_ternary(condition, then_expr, else_expr),

            // Transparent at the type level; the evaluator interprets the
            // ownership release.
            ExprKind::Drop(inner) => self.check_expr(inner),

            ExprKind::Identifier(name) => self.env.lookup(name).cloned().ok_or_else(|| {
                TypeError::new(
                    TypeErrorKind::UndefinedIdentifier { name: name.clone() },
                    expr.span,
                )
            }),

            ExprKind::Block(block) => self.check_block(block),
        }
    }

    fn check_struct_lit(&mut self, name: &Ident, inits: &[FieldInit]) -> Result<Type> {
        let ty = self.resolve_type_name(name)?;
        let Type::Struct { fields, .. } = &ty else {
            return Err(TypeError::new(
                TypeErrorKind::UndefinedType {
                    name: name.name.clone(),
                },
                name.span,
            ));
        };
        let declared = fields.clone();
        self.check_field_inits(&name.name, &declared, inits, name.span)?;
        Ok(ty)
    }

    fn check_union_lit(
        &mut self,
        name: &Ident,
        member: &Ident,
        inits: &[FieldInit],
    ) -> Result<Type> {
        let ty = self.resolve_type_name(name)?;
        let Type::Union { members, .. } = &ty else {
            return Err(TypeError::new(
                TypeErrorKind::UndefinedType {
                    name: name.name.clone(),
                },
                name.span,
            ));
        };
        let full_name = format!("{}::{}", name.name, member.name);
        let Some(member_def) = members.iter().find(|m| m.name == member.name) else {
            return Err(TypeError::new(
                TypeErrorKind::UndefinedType { name: full_name },
                member.span,
            ));
        };
        let declared = member_def.fields.clone();
        self.check_field_inits(&full_name, &declared, inits, member.span)?;
        Ok(ty)
    }

    /// Match field initializers positionally against the declared fields.
    fn check_field_inits(
        &mut self,
        type_name: &str,
        declared: &[StructField],
        inits: &[FieldInit],
        span: Span,
    ) -> Result<()> {
        if inits.len() != declared.len() {
            return Err(TypeError::new(
                TypeErrorKind::FieldCountMismatch {
                    type_name: type_name.to_string(),
                    expected: declared.len(),
                    found: inits.len(),
                },
                span,
            ));
        }
        for (position, (field, init)) in declared.iter().zip(inits).enumerate() {
            let init_ty = self.check_expr(&init.value)?;
            if init_ty != field.ty {
                return Err(TypeError::new(
                    TypeErrorKind::FieldTypeMismatch {
                        type_name: type_name.to_string(),
                        field: field.name.clone(),
                        position,
                        expected: field.ty.to_string(),
                        found: init_ty.to_string(),
                    },
                    init.value.span,
                ));
            }
        }
        Ok(())
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &Expr) -> Result<Type> {
        let operand_ty = self.check_expr(operand)?;
        let legal = ty::unary_operand_types();
        if !legal.contains(&operand_ty) {
            return Err(TypeError::new(
                TypeErrorKind::OperatorNotSupportedForOperandType {
                    operator: op.to_string(),
                    operand: operand_ty.to_string(),
                    legal: type_list(legal),
                },
                operand.span,
            ));
        }
        Ok(operand_ty)
    }

    fn check_binary(&mut self, left: &Expr, op: BinOp, right: &Expr) -> Result<Type> {
        let left_ty = self.check_expr(left)?;
        let right_ty = self.check_expr(right)?;
        let span = left.span.merge(right.span);

        if left_ty != right_ty {
            return Err(TypeError::new(
                TypeErrorKind::OperatorOperandTypeMismatch {
                    operator: op.to_string(),
                    left: left_ty.to_string(),
                    right: right_ty.to_string(),
                },
                span,
            ));
        }

        let legal = ty::legal_operand_types(op);
        if !legal.contains(&left_ty) {
            return Err(TypeError::new(
                TypeErrorKind::OperatorNotSupportedForOperandType {
                    operator: op.to_string(),
                    operand: left_ty.to_string(),
                    legal: type_list(legal),
                },
                span,
            ));
        }

        // Category refinement, applied after the legal-operand check.
        match op {
            // Logical and equality comparisons yield bool. Equality covers
            // every type the table admits, string and bool included.
            BinOp::And | BinOp::Or | BinOp::Eq | BinOp::NotEq => Ok(Type::Bool),

            // Ordering is numeric-only (the table pins operands to i32/f32).
            BinOp::Less | BinOp::Greater | BinOp::LessEq | BinOp::GreaterEq => Ok(Type::Bool),

            // Arithmetic keeps the common operand type.
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod => match left_ty {
                Type::I32 => Ok(Type::I32),
                Type::F32 => Ok(Type::F32),
                Type::String => Ok(Type::String),
                Type::Bool => Ok(Type::Bool),
                other => Err(TypeError::new(
                    TypeErrorKind::UnhandledOperatorCombination {
                        operator: op.to_string(),
                        operand: other.to_string(),
                    },
                    span,
                )),
            },

            // Bitwise and shift operators keep the common operand type:
            // bool for & | ^, i32 for << >>.
            BinOp::BitAnd | BinOp::BitOr | BinOp::BitXor | BinOp::Shl | BinOp::Shr => Ok(left_ty),
        }
    }

    fn check_ternary(
        &mut self,
        condition: &Expr,
        then_expr: &Expr,
        else_expr: &Expr,
    ) -> Result<Type> {
        let cond_ty = self.check_expr(condition)?;
        let then_ty = self.check_expr(then_expr)?;
        let else_ty = self.check_expr(else_expr)?;

        if cond_ty != Type::Bool {
            return Err(TypeError::new(
                TypeErrorKind::ConditionTypeMismatch {
                    found: cond_ty.to_string(),
                },
                condition.span,
            ));
        }
        if then_ty != else_ty {
            return Err(TypeError::new(
                TypeErrorKind::BranchTypeMismatch {
                    then_ty: then_ty.to_string(),
                    else_ty: else_ty.to_string(),
                },
                then_expr.span.merge(else_expr.span),
            ));
        }
        Ok(then_ty)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Type Resolution
    // ══════════════════════════════════════════════════════════════════════

    fn resolve_type_name(&self, name: &Ident) -> Result<Type> {
        self.env.lookup(&name.name).cloned().ok_or_else(|| {
            TypeError::new(
                TypeErrorKind::UndefinedType {
                    name: name.name.clone(),
                },
                name.span,
            )
        })
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// Render a legal-operand set for diagnostics, in table order.
fn type_list(types: &[Type]) -> String {
    types
        .iter()
        .map(Type::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
