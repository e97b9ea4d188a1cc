//! Type model
//!
//! The finite set of types the language knows about and the rules that
//! decide where a value of one type may be used.

mod compat;
mod ty;

pub use compat::{are_compatible, combine_binary_operand_types, InvalidOperandType, OperatorClass};
pub use ty::{FunctionSig, Type};
