//! Semantic analysis module
//!
//! This module performs scope resolution and type checking.

mod scope;
mod diagnostics;
mod analyzer;
mod expr;
mod stmt;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod fixture;

pub use scope::{DuplicateDeclaration, ScopeListing, Symbol, SymbolKind, SymbolTable};
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind, Severity};
pub use analyzer::{ExprTypes, SemanticAnalyzer};
