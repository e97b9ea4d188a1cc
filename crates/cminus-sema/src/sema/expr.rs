//! Expression checking

use crate::ast::*;
use crate::common::Span;
use crate::types::{are_compatible, combine_binary_operand_types, FunctionSig, Type};
use super::analyzer::SemanticAnalyzer;
use super::diagnostics::DiagnosticKind;

impl SemanticAnalyzer {
    /// Compute the type of `expr`, reporting every defect found in it
    ///
    /// Never fails: a subexpression that cannot be typed yields
    /// `Type::Unknown`, which enclosing checks accept silently.
    pub(super) fn check_expr(&mut self, expr: &Expr) -> Type {
        let ty = match &expr.kind {
            ExprKind::IntLiteral(_) => Type::Int,
            ExprKind::FloatLiteral(_) => Type::Float,
            ExprKind::BoolLiteral(_) => Type::Boolean,
            ExprKind::CharLiteral(_) => Type::Char,
            ExprKind::Identifier(name) => self.check_identifier(name, expr.span),
            ExprKind::Binary { op, left, right } => self.check_binary(*op, left, right, expr.span),
            ExprKind::Index { array, index } => self.check_index(array, index),
            ExprKind::Call { callee, args } => self.check_call(callee, args, expr.span),
        };

        self.record_type(expr.span, &ty);
        ty
    }

    fn check_identifier(&mut self, name: &str, span: Span) -> Type {
        match self.symbols.lookup(name) {
            Some(sym) => sym.ty.clone(),
            None => {
                self.diagnostics.report(
                    DiagnosticKind::UndeclaredIdentifier,
                    span,
                    format!("use of undeclared identifier '{name}'"),
                );
                Type::Unknown
            }
        }
    }

    fn check_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr, span: Span) -> Type {
        let left_ty = self.check_expr(left);
        let right_ty = self.check_expr(right);

        match combine_binary_operand_types(op, &left_ty, &right_ty) {
            Ok(ty) => ty,
            Err(err) => {
                self.diagnostics
                    .report(DiagnosticKind::InvalidOperandType, span, err.to_string());
                Type::Unknown
            }
        }
    }

    fn check_index(&mut self, array: &Expr, index: &Expr) -> Type {
        let base_ty = self.check_expr(array);
        let index_ty = self.check_expr(index);
        let mut valid = true;

        if !matches!(base_ty, Type::Array { .. } | Type::Unknown) {
            let message = match array.as_identifier() {
                Some(name) => format!("'{name}' has type {base_ty} and cannot be indexed"),
                None => format!("a value of type {base_ty} cannot be indexed"),
            };
            self.diagnostics
                .report(DiagnosticKind::InvalidIndexTarget, array.span, message);
            valid = false;
        }

        if index_ty != Type::Int && !index_ty.is_unknown() {
            self.diagnostics.report(
                DiagnosticKind::InvalidIndexType,
                index.span,
                format!("array index must be int, found {index_ty}"),
            );
            valid = false;
        }

        match base_ty {
            Type::Array { element, size } if valid => {
                if let (ExprKind::IntLiteral(k), Some(len)) = (&index.kind, size) {
                    if !usize::try_from(*k).is_ok_and(|k| k < len) {
                        self.diagnostics.report(
                            DiagnosticKind::IndexOutOfBounds,
                            index.span,
                            format!("index {k} is out of bounds for an array of size {len}"),
                        );
                    }
                }
                *element
            }
            _ => Type::Unknown,
        }
    }

    fn check_call(&mut self, callee: &str, args: &[Expr], span: Span) -> Type {
        let callee_ty = self.symbols.lookup(callee).map(|sym| sym.ty.clone());

        let sig: FunctionSig = match callee_ty {
            Some(Type::Function(sig)) => sig,
            Some(Type::Unknown) => {
                self.check_args(args);
                return Type::Unknown;
            }
            Some(other) => {
                self.diagnostics.report(
                    DiagnosticKind::NotCallable,
                    span,
                    format!("'{callee}' has type {other} and is not a function"),
                );
                self.check_args(args);
                return Type::Unknown;
            }
            None => {
                self.diagnostics.report(
                    DiagnosticKind::UndeclaredIdentifier,
                    span,
                    format!("call to undeclared function '{callee}'"),
                );
                self.check_args(args);
                return Type::Unknown;
            }
        };

        if args.len() != sig.arity() {
            let which = if args.len() < sig.arity() { "too few" } else { "too many" };
            self.diagnostics.report(
                DiagnosticKind::ArityMismatch,
                span,
                format!(
                    "{which} arguments to function '{callee}': expected {}, got {}",
                    sig.arity(),
                    args.len()
                ),
            );
            self.check_args(args);
            return Type::Unknown;
        }

        for (position, (arg, expected)) in args.iter().zip(&sig.params).enumerate() {
            let actual = self.check_expr(arg);
            if !are_compatible(expected, &actual) {
                self.diagnostics.report(
                    DiagnosticKind::ArgumentTypeMismatch,
                    arg.span,
                    format!(
                        "argument {} of '{callee}' has type {actual}, expected {expected}",
                        position + 1
                    ),
                );
            }
        }

        *sig.return_type
    }

    /// Check arguments for their own defects only
    fn check_args(&mut self, args: &[Expr]) {
        for arg in args {
            self.check_expr(arg);
        }
    }
}
