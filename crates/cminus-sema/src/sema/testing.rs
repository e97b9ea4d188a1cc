//! AST builders shared by the analyzer tests
//!
//! Every node gets a fresh span so recorded expression types never collide.

use std::cell::Cell;

use crate::ast::*;
use crate::common::Span;
use crate::driver::{check_program, check_program_with, Analysis, AnalyzerConfig};
use crate::sema::DiagnosticKind;

thread_local! {
    static NEXT_OFFSET: Cell<usize> = const { Cell::new(0) };
}

pub fn next_span() -> Span {
    NEXT_OFFSET.with(|next| {
        let start = next.get();
        next.set(start + 2);
        Span::new(start, start + 1)
    })
}

// Expressions

pub fn lit(value: i64) -> Expr {
    Expr::int(value, next_span())
}

pub fn flt(value: f64) -> Expr {
    Expr::float(value, next_span())
}

pub fn tru() -> Expr {
    Expr::boolean(true, next_span())
}

pub fn chr(value: char) -> Expr {
    Expr::char(value, next_span())
}

pub fn var(name: &str) -> Expr {
    Expr::ident(name, next_span())
}

pub fn binop(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let kind = ExprKind::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    };
    Expr::new(kind, next_span())
}

pub fn index(array: Expr, idx: Expr) -> Expr {
    Expr::index(array, idx, next_span())
}

pub fn call(callee: &str, args: Vec<Expr>) -> Expr {
    Expr::call(callee, args, next_span())
}

// Statements

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::expr(expr)
}

pub fn assign(target: Expr, value: Expr) -> Stmt {
    Stmt::new(StmtKind::Assign { target, value }, next_span())
}

pub fn local(name: &str, ty: TypeSpec) -> Stmt {
    Stmt::declare(VarDecl::new(name, ty, next_span()))
}

pub fn ret(value: Option<Expr>) -> Stmt {
    Stmt::ret(value, next_span())
}

pub fn block(stmts: Vec<Stmt>) -> Stmt {
    Stmt::block(Block::new(stmts, next_span()))
}

pub fn if_then(condition: Expr, then_stmts: Vec<Stmt>) -> Stmt {
    Stmt::if_then(condition, block(then_stmts), next_span())
}

/// `if (cond) stmt;` without braces
pub fn if_then_stmt(condition: Expr, then_stmt: Stmt) -> Stmt {
    Stmt::if_then(condition, then_stmt, next_span())
}

pub fn if_else(condition: Expr, then_stmts: Vec<Stmt>, else_stmts: Vec<Stmt>) -> Stmt {
    Stmt::if_else(condition, block(then_stmts), block(else_stmts), next_span())
}

pub fn while_loop(condition: Expr, body: Vec<Stmt>) -> Stmt {
    Stmt::while_loop(condition, block(body), next_span())
}

// Declarations

pub fn global(name: &str, ty: TypeSpec) -> Declaration {
    Declaration::variable(VarDecl::new(name, ty, next_span()))
}

pub fn param(name: &str, ty: TypeSpec) -> Param {
    Param::new(name, ty, next_span())
}

pub fn func(name: &str, return_type: TypeSpec, params: Vec<Param>, body: Vec<Stmt>) -> Declaration {
    let body = Block::new(body, next_span());
    Declaration::function(FuncDecl::new(name, return_type, params, body, next_span()))
}

// Written types

pub fn int() -> TypeSpec {
    TypeSpec::int(next_span())
}

pub fn float() -> TypeSpec {
    TypeSpec::float(next_span())
}

pub fn boolean() -> TypeSpec {
    TypeSpec::boolean(next_span())
}

pub fn char_ty() -> TypeSpec {
    TypeSpec::char(next_span())
}

pub fn void() -> TypeSpec {
    TypeSpec::void(next_span())
}

pub fn array(element: TypeSpec, size: usize) -> TypeSpec {
    TypeSpec::array_of(element, size, next_span())
}

pub fn unsized_array(element: TypeSpec) -> TypeSpec {
    TypeSpec::unsized_array_of(element, next_span())
}

// Runners

pub fn analyze(program: &Program) -> Analysis {
    check_program(program)
}

pub fn analyze_recording(program: &Program) -> Analysis {
    let config = AnalyzerConfig {
        record_types: true,
        ..AnalyzerConfig::default()
    };
    check_program_with(program, &config)
}

pub fn kinds(program: &Program) -> Vec<DiagnosticKind> {
    analyze(program).diagnostics().iter().map(|d| d.kind).collect()
}
