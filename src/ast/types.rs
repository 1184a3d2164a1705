//! Type annotations in the AST.
//!
//! The language has no type syntax beyond a bare name, so an annotation is
//! just a name waiting to be resolved against the scope chain by the
//! type checker.

use crate::Position;

/// Represents a symbolic type reference that needs resolution.
///
/// During parsing, type references are stored as symbols and later
/// resolved to built-in types during type checking.
#[derive(Debug, Clone)]
pub struct SymbolType {
    pub name: String,
    pub position: Position,
}

impl SymbolType {
    pub fn get_position(&self) -> Position {
        self.position.clone()
    }
}
