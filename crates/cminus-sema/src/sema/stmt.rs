//! Statement checking

use crate::ast::*;
use crate::common::Span;
use crate::types::{are_compatible, Type};
use super::analyzer::SemanticAnalyzer;
use super::diagnostics::DiagnosticKind;
use super::scope::SymbolKind;

impl SemanticAnalyzer {
    /// Check a compound statement in its own scope
    pub(super) fn check_block(&mut self, block: &Block) {
        self.symbols.enter_scope();
        for stmt in &block.stmts {
            self.check_stmt(stmt);
        }
        self.leave_scope();
    }

    pub(super) fn check_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.check_expr(expr);
            }
            StmtKind::Assign { target, value } => self.check_assignment(target, value, stmt.span),
            StmtKind::Declaration(var) => self.declare_variable(var),
            StmtKind::Block(block) => self.check_block(block),
            StmtKind::If { condition, then_branch, else_branch } => {
                self.check_condition(condition, "if");
                self.check_branch(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_branch(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                self.check_condition(condition, "while");
                self.check_branch(body);
            }
            StmtKind::Return(value) => self.check_return(value.as_ref(), stmt.span),
            StmtKind::Empty => {}
        }
    }

    /// Body of an `if`/`else`/`while`, always in a fresh scope
    fn check_branch(&mut self, stmt: &Stmt) {
        if let StmtKind::Block(block) = &stmt.kind {
            self.check_block(block);
        } else {
            self.symbols.enter_scope();
            self.check_stmt(stmt);
            self.leave_scope();
        }
    }

    /// Conditions must be exactly `boolean`; `Unknown` is not excused here
    fn check_condition(&mut self, condition: &Expr, construct: &str) {
        let ty = self.check_expr(condition);
        if ty == Type::Boolean {
            return;
        }
        let message = if ty.is_unknown() {
            format!("{construct} condition has an invalid type")
        } else {
            format!("{construct} condition must be boolean, found {ty}")
        };
        self.diagnostics
            .report(DiagnosticKind::NonBooleanCondition, condition.span, message);
    }

    fn check_assignment(&mut self, target: &Expr, value: &Expr, span: Span) {
        let value_ty = self.check_expr(value);
        let Some(target_ty) = self.check_assignment_target(target) else {
            return;
        };

        if !are_compatible(&target_ty, &value_ty) {
            let what = match &target.kind {
                ExprKind::Identifier(name) => format!("'{name}'"),
                ExprKind::Index { array, .. } => match array.as_identifier() {
                    Some(name) => format!("an element of '{name}'"),
                    None => "an array element".to_string(),
                },
                _ => "the target".to_string(),
            };
            self.diagnostics.report(
                DiagnosticKind::TypeMismatchAssignment,
                span,
                format!("cannot assign a value of type {value_ty} to {what} of type {target_ty}"),
            );
        }
    }

    /// Type of the storage an assignment writes to, if it is assignable
    fn check_assignment_target(&mut self, target: &Expr) -> Option<Type> {
        match &target.kind {
            ExprKind::Identifier(name) => {
                let is_function = self
                    .symbols
                    .lookup(name)
                    .is_some_and(|sym| sym.kind == SymbolKind::Function);
                if is_function {
                    self.diagnostics.report(
                        DiagnosticKind::InvalidAssignmentTarget,
                        target.span,
                        format!("cannot assign to function '{name}'"),
                    );
                    return None;
                }
                Some(self.check_expr(target))
            }
            ExprKind::Index { .. } => Some(self.check_expr(target)),
            _ => {
                self.check_expr(target);
                self.diagnostics.report(
                    DiagnosticKind::InvalidAssignmentTarget,
                    target.span,
                    "left-hand side of an assignment must be a variable or an array element",
                );
                None
            }
        }
    }

    fn check_return(&mut self, value: Option<&Expr>, span: Span) {
        let Some(function) = self.current_function.clone() else {
            if let Some(value) = value {
                self.check_expr(value);
            }
            return;
        };
        let expected = &function.return_type;

        match value {
            Some(value) => {
                let actual = self.check_expr(value);
                if expected.is_void() {
                    self.diagnostics.report(
                        DiagnosticKind::UnexpectedReturnValue,
                        value.span,
                        format!("void function '{}' cannot return a value", function.name),
                    );
                } else if !are_compatible(expected, &actual) {
                    self.diagnostics.report(
                        DiagnosticKind::ReturnTypeMismatch,
                        value.span,
                        format!(
                            "function '{}' returns {expected}, but this value has type {actual}",
                            function.name
                        ),
                    );
                }
            }
            None => {
                if !expected.is_void() {
                    self.diagnostics.report(
                        DiagnosticKind::MissingReturnValue,
                        span,
                        format!(
                            "function '{}' must return a value of type {expected}",
                            function.name
                        ),
                    );
                }
            }
        }
    }
}

/// Does every path through `block` end in a `return`?
pub(super) fn block_always_returns(block: &Block) -> bool {
    block.stmts.iter().any(stmt_always_returns)
}

fn stmt_always_returns(stmt: &Stmt) -> bool {
    match &stmt.kind {
        StmtKind::Return(_) => true,
        StmtKind::Block(block) => block_always_returns(block),
        StmtKind::If { then_branch, else_branch: Some(else_branch), .. } => {
            stmt_always_returns(then_branch) && stmt_always_returns(else_branch)
        }
        _ => false,
    }
}
