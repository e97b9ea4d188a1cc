//! End-to-end check of a small program exercising every kind of mistake

use crate::ast::{BinaryOp, Program};
use crate::sema::testing::*;

/// ```c
/// int add(int a, int b) { return a + b; }
///
/// void main(void) {
///     int x; float y; boolean flag; int numbers[5]; char c;
///     x = 42.5;
///     z = 10;
///     y = x + flag;
///     numbers[flag];
///     numbers[1.5];
///     add(x, y);
///     add(x);
///     if (x + y) { x = 1; }
///     c = x + c;
///
///     x = 10;
///     y = 20.5;
///     flag = true;
///     numbers[0] = 1;
///     if (flag && x > 5) { x = add(x, 2); }
/// }
/// ```
fn sample_program() -> Program {
    let add = func(
        "add",
        int(),
        vec![param("a", int()), param("b", int())],
        vec![ret(Some(binop(BinaryOp::Add, var("a"), var("b"))))],
    );

    let main = func(
        "main",
        void(),
        vec![],
        vec![
            local("x", int()),
            local("y", float()),
            local("flag", boolean()),
            local("numbers", array(int(), 5)),
            local("c", char_ty()),
            assign(var("x"), flt(42.5)),
            assign(var("z"), lit(10)),
            assign(var("y"), binop(BinaryOp::Add, var("x"), var("flag"))),
            expr_stmt(index(var("numbers"), var("flag"))),
            expr_stmt(index(var("numbers"), flt(1.5))),
            expr_stmt(call("add", vec![var("x"), var("y")])),
            expr_stmt(call("add", vec![var("x")])),
            if_then(
                binop(BinaryOp::Add, var("x"), var("y")),
                vec![assign(var("x"), lit(1))],
            ),
            assign(var("c"), binop(BinaryOp::Add, var("x"), var("c"))),
            assign(var("x"), lit(10)),
            assign(var("y"), flt(20.5)),
            assign(var("flag"), tru()),
            assign(index(var("numbers"), lit(0)), lit(1)),
            if_then(
                binop(
                    BinaryOp::And,
                    var("flag"),
                    binop(BinaryOp::Gt, var("x"), lit(5)),
                ),
                vec![assign(var("x"), call("add", vec![var("x"), lit(2)]))],
            ),
        ],
    );

    Program::new(vec![add, main])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sema::DiagnosticKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_program_diagnostics() {
        assert_eq!(
            kinds(&sample_program()),
            vec![
                DiagnosticKind::TypeMismatchAssignment,
                DiagnosticKind::UndeclaredIdentifier,
                DiagnosticKind::InvalidOperandType,
                DiagnosticKind::InvalidIndexType,
                DiagnosticKind::InvalidIndexType,
                DiagnosticKind::ArgumentTypeMismatch,
                DiagnosticKind::ArityMismatch,
                DiagnosticKind::InvalidOperandType,
                DiagnosticKind::NonBooleanCondition,
                DiagnosticKind::InvalidOperandType,
            ]
        );
    }

    #[test]
    fn test_sample_program_messages() {
        let analysis = analyze(&sample_program());
        let messages: Vec<_> = analysis
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "cannot assign a value of type float to 'x' of type int",
                "use of undeclared identifier 'z'",
                "invalid operands to '+': int and boolean",
                "array index must be int, found boolean",
                "array index must be int, found float",
                "argument 2 of 'add' has type float, expected int",
                "too few arguments to function 'add': expected 2, got 1",
                "invalid operands to '+': int and float",
                "if condition has an invalid type",
                "invalid operands to '+': int and char",
            ]
        );
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let program = sample_program();
        let first = analyze(&program);
        let second = analyze(&program);
        assert_eq!(first.diagnostics(), second.diagnostics());
    }

    #[test]
    fn test_well_typed_part_is_clean() {
        let program = Program::new(vec![
            func(
                "add",
                int(),
                vec![param("a", int()), param("b", int())],
                vec![ret(Some(binop(BinaryOp::Add, var("a"), var("b"))))],
            ),
            func(
                "main",
                void(),
                vec![],
                vec![
                    local("x", int()),
                    local("flag", boolean()),
                    local("numbers", array(int(), 5)),
                    assign(var("x"), lit(10)),
                    assign(var("flag"), tru()),
                    assign(index(var("numbers"), lit(0)), lit(1)),
                    while_loop(
                        binop(BinaryOp::Lt, var("x"), lit(20)),
                        vec![assign(var("x"), binop(BinaryOp::Add, var("x"), lit(1)))],
                    ),
                    if_then(
                        binop(
                            BinaryOp::And,
                            var("flag"),
                            binop(BinaryOp::Gt, var("x"), lit(5)),
                        ),
                        vec![assign(var("x"), call("add", vec![var("x"), lit(2)]))],
                    ),
                ],
            ),
        ]);

        let analysis = analyze(&program);
        assert!(!analysis.has_errors(), "{:?}", analysis.diagnostics());
    }
}
