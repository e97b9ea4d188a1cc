//! C-minus semantic analyzer
//!
//! Checks a parsed C-minus program for scope and type errors and reports
//! every problem it finds as a [`sema::Diagnostic`].
//!
//! ## Architecture
//!
//! - **AST** (`ast/`): Program tree handed over by a parser
//! - **Types** (`types/`): Semantic types and compatibility rules
//! - **Sema** (`sema/`): Symbol table, diagnostics and the checker itself
//! - **Driver** (`driver/`): Entry points, configuration and results
//! - **Common** (`common/`): Spans, errors and terminal rendering

pub mod common;
pub mod ast;
pub mod types;
pub mod sema;
pub mod driver;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, Span};
pub use driver::{check_program, check_program_with, Analysis, AnalyzerConfig};
pub use sema::{Diagnostic, DiagnosticKind, SemanticAnalyzer};
pub use types::Type;
