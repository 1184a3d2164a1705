//! Symbols and scopes shared by the type checker and the interpreter.
//!
//! - symbols: built-in types and the records a scope binds names to
//! - scope: the scope arena and chain lookups

pub mod scope;
pub mod symbols;
