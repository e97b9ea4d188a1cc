//! Semantic analyzer - program-level driver and declarations

use std::collections::HashMap;

use crate::ast::*;
use crate::common::Span;
use crate::driver::{Analysis, AnalyzerConfig};
use crate::types::Type;
use super::diagnostics::{DiagnosticCollector, DiagnosticKind};
use super::scope::{ScopeListing, SymbolKind, SymbolTable};

/// Computed type of every checked expression, keyed by its span
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExprTypes {
    types: HashMap<Span, Type>,
}

impl ExprTypes {
    pub fn get(&self, span: Span) -> Option<&Type> {
        self.types.get(&span)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub(super) fn insert(&mut self, span: Span, ty: Type) {
        self.types.insert(span, ty);
    }
}

/// The function whose body is being checked
#[derive(Debug, Clone)]
pub(super) struct FunctionContext {
    pub name: String,
    pub return_type: Type,
}

/// Where an object type is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ObjectRole {
    Variable,
    Parameter,
}

impl ObjectRole {
    fn noun(self) -> &'static str {
        match self {
            ObjectRole::Variable => "variable",
            ObjectRole::Parameter => "parameter",
        }
    }
}

/// Why a written type cannot be the type of a variable or parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InvalidObjectType {
    Void,
    VoidElement,
    ZeroLength,
    MissingLength,
}

/// Type of a variable or parameter declared as `spec`
pub(super) fn object_type(spec: &TypeSpec, role: ObjectRole) -> Result<Type, InvalidObjectType> {
    match &spec.kind {
        TypeSpecKind::Void => Err(InvalidObjectType::Void),
        TypeSpecKind::Array { element, size } => {
            if element.is_void() {
                return Err(InvalidObjectType::VoidElement);
            }
            match size {
                Some(0) => return Err(InvalidObjectType::ZeroLength),
                None if role == ObjectRole::Variable => return Err(InvalidObjectType::MissingLength),
                _ => {}
            }
            let element = object_type(element, ObjectRole::Variable)?;
            Ok(Type::Array {
                element: Box::new(element),
                size: *size,
            })
        }
        _ => Ok(Type::from_spec(spec)),
    }
}

/// Semantic analyzer for scope resolution and type checking
///
/// One analyzer checks one program; `analyze` consumes it so no state
/// survives between runs.
pub struct SemanticAnalyzer {
    pub(super) symbols: SymbolTable,
    pub(super) diagnostics: DiagnosticCollector,
    pub(super) current_function: Option<FunctionContext>,
    pub(super) expr_types: Option<ExprTypes>,
    /// Frames captured on exit, if symbol dumping is on
    scope_listings: Option<Vec<ScopeListing>>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::with_config(&AnalyzerConfig::default())
    }

    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            symbols: SymbolTable::new(),
            diagnostics: DiagnosticCollector::with_limit(config.max_diagnostics),
            current_function: None,
            expr_types: config.record_types.then(ExprTypes::default),
            scope_listings: config.dump_symbols.then(Vec::new),
        }
    }

    /// Check a whole program
    ///
    /// Pass 1 declares every global variable and function signature, so
    /// bodies may call functions defined later and recurse. Pass 2 checks
    /// each function body in source order.
    #[tracing::instrument(level = "debug", skip_all, fields(declarations = program.declarations.len()))]
    pub fn analyze(mut self, program: &Program) -> Analysis {
        for decl in &program.declarations {
            self.register_declaration(decl);
        }

        self.dump_current_scope();

        for func in program.functions() {
            self.check_function(func);
        }

        let suppressed = self.diagnostics.suppressed();
        let globals = self.symbols.global_symbols().to_vec();
        tracing::debug!(errors = self.diagnostics.error_count(), "analysis finished");

        Analysis::new(
            self.diagnostics.into_diagnostics(),
            suppressed,
            globals,
            self.expr_types,
            self.scope_listings.unwrap_or_default(),
        )
    }

    fn register_declaration(&mut self, decl: &Declaration) {
        match &decl.kind {
            DeclKind::Variable(var) => self.declare_variable(var),
            DeclKind::Function(func) => {
                let params = func
                    .params
                    .iter()
                    .map(|param| self.checked_object_type(&param.ty, &param.name, ObjectRole::Parameter, param.span))
                    .collect();
                let ty = Type::function(params, Type::from_spec(&func.return_type));
                self.declare(&func.name, ty, SymbolKind::Function, func.span);
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(function = %func.name))]
    fn check_function(&mut self, func: &FuncDecl) {
        self.symbols.enter_scope();

        // Parameter types were validated when the signature was registered
        for param in &func.params {
            let ty = object_type(&param.ty, ObjectRole::Parameter).unwrap_or(Type::Unknown);
            self.declare(&param.name, ty, SymbolKind::Parameter, param.span);
        }

        let return_type = Type::from_spec(&func.return_type);
        self.current_function = Some(FunctionContext {
            name: func.name.clone(),
            return_type: return_type.clone(),
        });

        self.check_block(&func.body);

        if !return_type.is_void() && !super::stmt::block_always_returns(&func.body) {
            self.diagnostics.report(
                DiagnosticKind::MissingReturn,
                func.span,
                format!(
                    "function '{}' returns {return_type} but not every path returns a value",
                    func.name
                ),
            );
        }

        self.leave_scope();
        self.current_function = None;
    }

    /// Declare a variable in the current scope, validating its type
    pub(super) fn declare_variable(&mut self, var: &VarDecl) {
        let ty = self.checked_object_type(&var.ty, &var.name, ObjectRole::Variable, var.span);
        self.declare(&var.name, ty, SymbolKind::Variable, var.span);
    }

    /// Declare `name`, reporting a duplicate in the same scope
    pub(super) fn declare(&mut self, name: &str, ty: Type, kind: SymbolKind, span: Span) {
        if let Err(dup) = self.symbols.declare(name, ty, kind, span) {
            self.diagnostics.report_with_related(
                DiagnosticKind::DuplicateDeclaration,
                span,
                dup.to_string(),
                dup.previous,
                format!("previous declaration of '{}'", dup.name),
            );
        }
    }

    /// Object type of a declaration; `Unknown` (after reporting) if invalid
    fn checked_object_type(&mut self, spec: &TypeSpec, name: &str, role: ObjectRole, span: Span) -> Type {
        let err = match object_type(spec, role) {
            Ok(ty) => return ty,
            Err(err) => err,
        };

        let noun = role.noun();
        let (kind, message) = match err {
            InvalidObjectType::Void => (
                DiagnosticKind::InvalidVariableType,
                format!("{noun} '{name}' declared void"),
            ),
            InvalidObjectType::VoidElement => (
                DiagnosticKind::InvalidVariableType,
                format!("{noun} '{name}' declared as an array of void"),
            ),
            InvalidObjectType::ZeroLength => (
                DiagnosticKind::InvalidArraySize,
                format!("array {noun} '{name}' must have a positive size"),
            ),
            InvalidObjectType::MissingLength => (
                DiagnosticKind::InvalidArraySize,
                format!("array {noun} '{name}' needs an explicit size"),
            ),
        };
        self.diagnostics.report(kind, span, message);
        Type::Unknown
    }

    /// Pop the innermost frame, dumping it first when asked to
    pub(super) fn leave_scope(&mut self) {
        self.dump_current_scope();
        self.symbols.exit_scope();
    }

    fn dump_current_scope(&mut self) {
        let Some(listings) = &mut self.scope_listings else {
            return;
        };
        let depth = self.symbols.depth();
        let function = if depth == 0 {
            None
        } else {
            self.current_function.as_ref().map(|f| f.name.clone())
        };

        for sym in self.symbols.current_scope_symbols() {
            tracing::debug!(
                depth,
                function = function.as_deref().unwrap_or("<global>"),
                name = %sym.name,
                ty = %sym.ty,
                kind = ?sym.kind,
                "symbol"
            );
        }
        listings.push(ScopeListing {
            depth,
            function,
            symbols: self.symbols.current_scope_symbols().to_vec(),
        });
    }

    pub(super) fn record_type(&mut self, span: Span, ty: &Type) {
        if let Some(types) = &mut self.expr_types {
            types.insert(span, ty.clone());
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
