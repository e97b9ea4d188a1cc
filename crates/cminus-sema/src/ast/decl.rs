//! Declaration AST nodes

use super::{Block, TypeSpec};
use crate::common::Span;

/// Top-level declaration node
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub span: Span,
}

impl Declaration {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn variable(var: VarDecl) -> Self {
        let span = var.span;
        Self::new(DeclKind::Variable(var), span)
    }

    pub fn function(func: FuncDecl) -> Self {
        let span = func.span;
        Self::new(DeclKind::Function(func), span)
    }
}

/// Declaration kinds
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// Variable declaration: int x; float v[8];
    Variable(VarDecl),

    /// Function definition
    Function(FuncDecl),
}

/// Variable declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub ty: TypeSpec,
    pub span: Span,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: TypeSpec, span: Span) -> Self {
        Self {
            name: name.into(),
            ty,
            span,
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeSpec,
    pub span: Span,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeSpec, span: Span) -> Self {
        Self {
            name: name.into(),
            ty,
            span,
        }
    }
}

/// Function definition: `int add(int a, int b) { ... }`
///
/// A `(void)` parameter list is represented by an empty `params`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub return_type: TypeSpec,
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

impl FuncDecl {
    pub fn new(
        name: impl Into<String>,
        return_type: TypeSpec,
        params: Vec<Param>,
        body: Block,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            params,
            body,
            span,
        }
    }
}
