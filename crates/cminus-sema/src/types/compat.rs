//! Compatibility and operator typing rules
//!
//! There is no implicit numeric conversion: `int` and `float` never mix,
//! neither in assignment nor in arithmetic.

use thiserror::Error;

use super::Type;
use crate::ast::BinaryOp;

/// Operator families with shared typing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// `+ - * /`: identical numeric operands, result of that type
    Arithmetic,
    /// `< <= > >= == !=`: identical numeric operands, `boolean` result
    Comparison,
    /// `&& ||`: `boolean` operands and result
    Logical,
}

impl BinaryOp {
    pub fn class(self) -> OperatorClass {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                OperatorClass::Arithmetic
            }
            BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge
            | BinaryOp::Eq
            | BinaryOp::Ne => OperatorClass::Comparison,
            BinaryOp::And | BinaryOp::Or => OperatorClass::Logical,
        }
    }
}

/// Operand pair rejected by an operator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid operands to '{op}': {left} and {right}")]
pub struct InvalidOperandType {
    pub op: BinaryOp,
    pub left: Type,
    pub right: Type,
}

/// May a value of type `value` be stored where `target` is required?
pub fn are_compatible(target: &Type, value: &Type) -> bool {
    match (target, value) {
        (Type::Unknown, _) | (_, Type::Unknown) => true,
        (
            Type::Array { element: target_elem, size: None },
            Type::Array { element: value_elem, .. },
        ) => are_compatible(target_elem, value_elem),
        (
            Type::Array { element: target_elem, size: Some(n) },
            Type::Array { element: value_elem, size: Some(m) },
        ) => n == m && are_compatible(target_elem, value_elem),
        (Type::Function(target_sig), Type::Function(value_sig)) => {
            target_sig.arity() == value_sig.arity()
                && are_compatible(&target_sig.return_type, &value_sig.return_type)
                && target_sig
                    .params
                    .iter()
                    .zip(&value_sig.params)
                    .all(|(t, v)| are_compatible(t, v))
        }
        _ => target == value,
    }
}

/// Result type of `left op right`
pub fn combine_binary_operand_types(
    op: BinaryOp,
    left: &Type,
    right: &Type,
) -> Result<Type, InvalidOperandType> {
    if left.is_unknown() || right.is_unknown() {
        return Ok(Type::Unknown);
    }

    let accepted = match op.class() {
        OperatorClass::Arithmetic => (left == right && left.is_numeric()).then(|| left.clone()),
        OperatorClass::Comparison => (left == right && left.is_numeric()).then_some(Type::Boolean),
        OperatorClass::Logical => {
            (*left == Type::Boolean && *right == Type::Boolean).then_some(Type::Boolean)
        }
    };

    accepted.ok_or_else(|| InvalidOperandType {
        op,
        left: left.clone(),
        right: right.clone(),
    })
}
