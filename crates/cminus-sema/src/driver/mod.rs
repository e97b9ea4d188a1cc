//! Analysis entry points and run configuration

use crate::ast::Program;
use crate::common::{CompileError, CompileResult};
use crate::sema::{Diagnostic, ExprTypes, ScopeListing, SemanticAnalyzer, Symbol};

/// Options for one analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Keep the computed type of every expression
    pub record_types: bool,
    /// Stop storing diagnostics after this many; the rest are only counted
    pub max_diagnostics: Option<usize>,
    /// List every frame's symbols (global after registration, locals on
    /// exit), both as debug events and in `Analysis::scopes`
    pub dump_symbols: bool,
}

/// Outcome of analyzing one program
#[derive(Debug, Clone)]
pub struct Analysis {
    diagnostics: Vec<Diagnostic>,
    suppressed: usize,
    globals: Vec<Symbol>,
    types: Option<ExprTypes>,
    scopes: Vec<ScopeListing>,
}

impl Analysis {
    pub(crate) fn new(
        diagnostics: Vec<Diagnostic>,
        suppressed: usize,
        globals: Vec<Symbol>,
        types: Option<ExprTypes>,
        scopes: Vec<ScopeListing>,
    ) -> Self {
        Self {
            diagnostics,
            suppressed,
            globals,
            types,
            scopes,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty() || self.suppressed > 0
    }

    /// Diagnostics in the order they were found
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics dropped past `max_diagnostics`
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Global variables and functions in declaration order
    pub fn globals(&self) -> &[Symbol] {
        &self.globals
    }

    /// Recorded expression types, if `record_types` was set
    pub fn types(&self) -> Option<&ExprTypes> {
        self.types.as_ref()
    }

    /// Frame listings in the order they were dumped; empty unless
    /// `dump_symbols` was set
    pub fn scopes(&self) -> &[ScopeListing] {
        &self.scopes
    }

    /// `Ok` with the recorded types if the program is well-typed
    pub fn into_result(self) -> CompileResult<Option<ExprTypes>> {
        if !self.has_errors() {
            return Ok(self.types);
        }
        let count = self.diagnostics.len() + self.suppressed;
        let first = self
            .diagnostics
            .first()
            .map(|d| d.message.clone())
            .unwrap_or_default();
        Err(CompileError::semantic(count, first))
    }
}

/// Check `program` with the default configuration
pub fn check_program(program: &Program) -> Analysis {
    check_program_with(program, &AnalyzerConfig::default())
}

pub fn check_program_with(program: &Program, config: &AnalyzerConfig) -> Analysis {
    SemanticAnalyzer::with_config(config).analyze(program)
}
