//! Abstract Syntax Tree definitions
//!
//! The tree is produced by an external parser and is read-only to the
//! analyzer. Constructors exist so hosts and tests can build trees directly.

mod types;
mod expr;
mod stmt;
mod decl;

pub use types::*;
pub use expr::*;
pub use stmt::*;
pub use decl::*;

/// A complete program (one translation unit)
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Function definitions in source order
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.declarations.iter().filter_map(|decl| match &decl.kind {
            DeclKind::Function(func) => Some(func),
            DeclKind::Variable(_) => None,
        })
    }
}
