//! Tree-walking interpreter module.
//!
//! This module runs a program that has passed the type checker:
//!
//! - interpreter: the Interpreter state and the `evaluate` entry point
//! - stmt: statement execution, procedure calls and console input
//! - expr: expression evaluation and runtime arithmetic
//! - value: runtime values and how they print

pub mod expr;
pub mod interpreter;
pub mod stmt;
pub mod value;
