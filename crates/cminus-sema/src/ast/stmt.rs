//! Statement AST nodes

use super::{Expr, VarDecl};
use crate::common::Span;

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn expr(expr: Expr) -> Self {
        let span = expr.span;
        Self::new(StmtKind::Expr(expr), span)
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        let span = target.span.to(value.span);
        Self::new(StmtKind::Assign { target, value }, span)
    }

    pub fn declare(var: VarDecl) -> Self {
        let span = var.span;
        Self::new(StmtKind::Declaration(var), span)
    }

    pub fn block(block: Block) -> Self {
        let span = block.span;
        Self::new(StmtKind::Block(block), span)
    }

    pub fn if_then(condition: Expr, then_branch: Stmt, span: Span) -> Self {
        Self::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: None,
            },
            span,
        )
    }

    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Stmt, span: Span) -> Self {
        Self::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: Some(Box::new(else_branch)),
            },
            span,
        )
    }

    pub fn while_loop(condition: Expr, body: Stmt, span: Span) -> Self {
        Self::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        )
    }

    pub fn ret(value: Option<Expr>, span: Span) -> Self {
        Self::new(StmtKind::Return(value), span)
    }
}

/// Statement kinds
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// Expression statement: expr;
    Expr(Expr),

    /// Assignment: target = value;
    Assign { target: Expr, value: Expr },

    /// Local variable declaration: int x;
    Declaration(VarDecl),

    /// Compound statement: { ... }
    Block(Block),

    /// If statement: if (cond) then [else else]
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// While loop: while (cond) body
    While { condition: Expr, body: Box<Stmt> },

    /// Return statement: return [expr];
    Return(Option<Expr>),

    /// Empty statement: ;
    Empty,
}

/// Compound statement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Self { stmts, span }
    }
}
