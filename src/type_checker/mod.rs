//! Type checking and semantic analysis module.
//!
//! This module walks the AST once, before anything runs, while:
//!
//! - Building the scope chain (global scope, one per procedure and block)
//! - Registering variable and procedure declarations
//! - Resolving identifiers and type annotations through the chain
//! - Checking the static type of every expression, assignment and condition
//!
//! The first violation aborts the walk. The scopes it built are handed to
//! the interpreter.

pub mod type_checker;
