//! Type syntax as written in declarations

use crate::common::Span;

/// A type as spelled in the source: `int`, `float x[4]`, `char a[]`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub kind: TypeSpecKind,
    pub span: Span,
}

impl TypeSpec {
    pub fn new(kind: TypeSpecKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn int(span: Span) -> Self {
        Self::new(TypeSpecKind::Int, span)
    }

    pub fn float(span: Span) -> Self {
        Self::new(TypeSpecKind::Float, span)
    }

    pub fn boolean(span: Span) -> Self {
        Self::new(TypeSpecKind::Boolean, span)
    }

    pub fn char(span: Span) -> Self {
        Self::new(TypeSpecKind::Char, span)
    }

    pub fn void(span: Span) -> Self {
        Self::new(TypeSpecKind::Void, span)
    }

    /// `element name[size]`
    pub fn array_of(element: TypeSpec, size: usize, span: Span) -> Self {
        Self::new(
            TypeSpecKind::Array {
                element: Box::new(element),
                size: Some(size),
            },
            span,
        )
    }

    /// `element name[]`, only meaningful for parameters
    pub fn unsized_array_of(element: TypeSpec, span: Span) -> Self {
        Self::new(
            TypeSpecKind::Array {
                element: Box::new(element),
                size: None,
            },
            span,
        )
    }

    pub fn is_void(&self) -> bool {
        matches!(self.kind, TypeSpecKind::Void)
    }
}

/// The kind of a written type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpecKind {
    Int,
    Float,
    Boolean,
    Char,
    Void,
    Array {
        element: Box<TypeSpec>,
        size: Option<usize>,
    },
}
