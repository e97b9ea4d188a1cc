//! Symbol table and scope management

use std::collections::HashMap;

use string_interner::{DefaultStringInterner, DefaultSymbol};
use thiserror::Error;

use crate::common::Span;
use crate::types::Type;

/// A symbol in the symbol table
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub ty: Type,
    /// Frame depth at declaration; 0 is the global frame
    pub depth: usize,
    pub span: Span,
}

/// Kind of symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Function,
    Parameter,
}

/// Symbols of one frame, captured when the frame is dumped
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeListing {
    pub depth: usize,
    /// Function whose body owns the frame; `None` for the global frame
    pub function: Option<String>,
    pub symbols: Vec<Symbol>,
}

/// A name declared twice in the same frame
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{name}' is already declared in this scope")]
pub struct DuplicateDeclaration {
    pub name: String,
    pub previous: Span,
}

/// One lexical frame; symbols kept in declaration order
#[derive(Debug, Default)]
struct Frame {
    symbols: Vec<Symbol>,
    index: HashMap<DefaultSymbol, usize>,
}

/// Scoped mapping from identifiers to declared symbols
///
/// Frames form a strict stack. The bottom frame is the global scope and is
/// never popped; every other frame is dropped whole on exit.
pub struct SymbolTable {
    names: DefaultStringInterner,
    frames: Vec<Frame>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            names: DefaultStringInterner::default(),
            frames: vec![Frame::default()],
        }
    }

    /// Push a new innermost frame
    pub fn enter_scope(&mut self) {
        self.frames.push(Frame::default());
        tracing::trace!(depth = self.depth(), "enter scope");
    }

    /// Pop the innermost frame; returns false at global scope
    pub fn exit_scope(&mut self) -> bool {
        if self.frames.len() <= 1 {
            return false;
        }
        self.frames.pop();
        tracing::trace!(depth = self.depth(), "exit scope");
        true
    }

    /// Current nesting depth; 0 at global scope
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn is_global_scope(&self) -> bool {
        self.depth() == 0
    }

    /// Declare `name` in the innermost frame
    ///
    /// Shadowing a symbol of an outer frame is allowed; redeclaring one in
    /// the same frame is not.
    pub fn declare(
        &mut self,
        name: &str,
        ty: Type,
        kind: SymbolKind,
        span: Span,
    ) -> Result<(), DuplicateDeclaration> {
        let key = self.names.get_or_intern(name);
        let depth = self.depth();
        let frame = self.current_frame_mut();

        if let Some(&existing) = frame.index.get(&key) {
            return Err(DuplicateDeclaration {
                name: name.to_string(),
                previous: frame.symbols[existing].span,
            });
        }

        frame.index.insert(key, frame.symbols.len());
        frame.symbols.push(Symbol {
            name: name.to_string(),
            kind,
            ty,
            depth,
            span,
        });
        Ok(())
    }

    /// Innermost visible declaration of `name`
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let key = self.names.get(name)?;
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.index.get(&key).map(|&i| &frame.symbols[i]))
    }

    /// Declaration of `name` in the innermost frame only
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        let key = self.names.get(name)?;
        let frame = self.frames.last()?;
        frame.index.get(&key).map(|&i| &frame.symbols[i])
    }

    /// Symbols of the innermost frame in declaration order
    pub fn current_scope_symbols(&self) -> &[Symbol] {
        self.frames
            .last()
            .map(|frame| frame.symbols.as_slice())
            .unwrap_or_default()
    }

    /// Symbols of the global frame in declaration order
    pub fn global_symbols(&self) -> &[Symbol] {
        self.frames
            .first()
            .map(|frame| frame.symbols.as_slice())
            .unwrap_or_default()
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        if self.frames.is_empty() {
            self.frames.push(Frame::default());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(n: usize) -> Span {
        Span::new(n, n + 1)
    }

    #[test]
    fn test_declare_and_lookup() {
        let mut table = SymbolTable::new();
        table.declare("x", Type::Int, SymbolKind::Variable, span(0)).unwrap();

        let sym = table.lookup("x").unwrap();
        assert_eq!(sym.ty, Type::Int);
        assert_eq!(sym.kind, SymbolKind::Variable);
        assert_eq!(sym.depth, 0);
        assert!(table.lookup("y").is_none());
    }

    #[test]
    fn test_duplicate_in_same_frame() {
        let mut table = SymbolTable::new();
        table.declare("x", Type::Int, SymbolKind::Variable, span(1)).unwrap();

        let err = table
            .declare("x", Type::Float, SymbolKind::Variable, span(5))
            .unwrap_err();
        assert_eq!(err.name, "x");
        assert_eq!(err.previous, span(1));
        assert_eq!(err.to_string(), "'x' is already declared in this scope");

        // The original declaration is untouched
        assert_eq!(table.lookup("x").unwrap().ty, Type::Int);
    }

    #[test]
    fn test_shadowing_and_frame_discard() {
        let mut table = SymbolTable::new();
        table.declare("x", Type::Int, SymbolKind::Variable, span(0)).unwrap();

        table.enter_scope();
        table.declare("x", Type::Char, SymbolKind::Variable, span(4)).unwrap();
        table.declare("y", Type::Boolean, SymbolKind::Variable, span(8)).unwrap();
        assert_eq!(table.lookup("x").unwrap().ty, Type::Char);
        assert_eq!(table.lookup("x").unwrap().depth, 1);

        assert!(table.exit_scope());
        assert_eq!(table.lookup("x").unwrap().ty, Type::Int);
        assert!(table.lookup("y").is_none());
    }

    #[test]
    fn test_global_frame_is_never_popped() {
        let mut table = SymbolTable::new();
        assert!(table.is_global_scope());
        assert!(!table.exit_scope());
        assert_eq!(table.depth(), 0);

        table.declare("g", Type::Float, SymbolKind::Variable, span(0)).unwrap();
        assert!(table.lookup("g").is_some());
    }

    #[test]
    fn test_lookup_local() {
        let mut table = SymbolTable::new();
        table.declare("a", Type::Int, SymbolKind::Variable, span(0)).unwrap();
        table.enter_scope();

        assert!(table.lookup_local("a").is_none());
        assert!(table.lookup("a").is_some());
    }

    #[test]
    fn test_symbols_in_declaration_order() {
        let mut table = SymbolTable::new();
        let add = Type::function(vec![Type::Int, Type::Int], Type::Int);
        table.declare("add", add, SymbolKind::Function, span(0)).unwrap();
        table.declare("total", Type::Int, SymbolKind::Variable, span(2)).unwrap();

        table.enter_scope();
        table.declare("a", Type::Int, SymbolKind::Parameter, span(4)).unwrap();

        let names: Vec<_> = table.global_symbols().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["add", "total"]);

        let locals: Vec<_> = table
            .current_scope_symbols()
            .iter()
            .map(|s| (s.name.as_str(), s.kind))
            .collect();
        assert_eq!(locals, vec![("a", SymbolKind::Parameter)]);
    }
}
