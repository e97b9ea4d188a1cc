//! Semantic types

use std::fmt;

use crate::ast::{TypeSpec, TypeSpecKind};

/// A checked type
///
/// Compared structurally. `Unknown` is produced after an error and is
/// compatible with everything, so one defect does not cascade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Boolean,
    Char,
    /// Fixed-size array; `size` is `None` only for `T name[]` parameters
    Array {
        element: Box<Type>,
        size: Option<usize>,
    },
    Function(FunctionSig),
    Void,
    Unknown,
}

/// Parameter types and return type of a function
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSig {
    pub params: Vec<Type>,
    pub return_type: Box<Type>,
}

impl FunctionSig {
    pub fn new(params: Vec<Type>, return_type: Type) -> Self {
        Self {
            params,
            return_type: Box::new(return_type),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Type {
    pub fn array(element: Type, size: usize) -> Self {
        Type::Array {
            element: Box::new(element),
            size: Some(size),
        }
    }

    pub fn unsized_array(element: Type) -> Self {
        Type::Array {
            element: Box::new(element),
            size: None,
        }
    }

    pub fn function(params: Vec<Type>, return_type: Type) -> Self {
        Type::Function(FunctionSig::new(params, return_type))
    }

    /// Structural translation of written type syntax
    ///
    /// Validity (e.g. `void` variables) is judged by the analyzer, not here.
    pub fn from_spec(spec: &TypeSpec) -> Self {
        match &spec.kind {
            TypeSpecKind::Int => Type::Int,
            TypeSpecKind::Float => Type::Float,
            TypeSpecKind::Boolean => Type::Boolean,
            TypeSpecKind::Char => Type::Char,
            TypeSpecKind::Void => Type::Void,
            TypeSpecKind::Array { element, size } => Type::Array {
                element: Box::new(Type::from_spec(element)),
                size: *size,
            },
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Type::Unknown)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Boolean => write!(f, "boolean"),
            Type::Char => write!(f, "char"),
            Type::Void => write!(f, "void"),
            Type::Unknown => write!(f, "{{unknown}}"),
            Type::Array { element, size: Some(n) } => write!(f, "{element}[{n}]"),
            Type::Array { element, size: None } => write!(f, "{element}[]"),
            Type::Function(sig) => {
                write!(f, "{}(", sig.return_type)?;
                for (i, param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")")
            }
        }
    }
}
