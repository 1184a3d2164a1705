//! Main interpreter module.
//!
//! This module contains the core Interpreter structure and the `evaluate`
//! entry point. The interpreter walks the same AST the type checker saw and
//! reuses its scopes, re-entering the scope recorded for each block and
//! procedure body. Variable uses go straight to the scope the type checker
//! resolved them to, so every name refers at runtime to the variable it
//! referred to during analysis, even when a later declaration shadows it.

use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use crate::{
    ast::{ast::Program, statements::ProcedureDeclStmt},
    errors::errors::{Error, ErrorImpl},
    symbols::scope::{ScopeId, ScopeTable},
    type_checker::type_checker::TypeChecker,
    Position,
};

use super::stmt::evaluate_body;

/// Deepest nesting of procedure calls before evaluation gives up.
pub const MAX_CALL_DEPTH: usize = 512;

/// The state of a running program.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the program being run
/// * `R` - Where `input` statements read lines from
/// * `W` - Where `print` statements write to
pub struct Interpreter<'a, R: BufRead, W: Write> {
    /// Scopes built by the type checker, holding the current variable values
    pub scopes: ScopeTable,
    /// Node id of every block and procedure to the scope it was analysed in
    pub scope_lookup: HashMap<i32, ScopeId>,
    /// Source offset of every variable use to the scope owning its variable
    pub resolutions: HashMap<u32, ScopeId>,
    /// Procedure bodies whose declaration has run, keyed by their scope
    pub procedures: HashMap<ScopeId, &'a ProcedureDeclStmt>,
    pub global: ScopeId,
    /// Procedure calls currently running
    pub depth: usize,

    pub input: R,
    pub output: W,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    pub fn new(type_checker: TypeChecker, input: R, output: W) -> Self {
        Interpreter {
            scopes: type_checker.scopes,
            scope_lookup: type_checker.scope_lookup,
            resolutions: type_checker.resolutions,
            procedures: HashMap::new(),
            global: type_checker.global,
            depth: 0,
            input,
            output,
        }
    }

    /// Scope the type checker opened for the block or procedure `name` with node id `id`.
    pub fn get_scope(&self, id: i32, name: &str, position: &Position) -> Result<ScopeId, Error> {
        self.scope_lookup.get(&id).copied().ok_or_else(|| {
            Error::new(ErrorImpl::IdentifierNotDeclared { identifier: String::from(name) }, position.clone())
        })
    }

    /// Scope owning the variable `name` used at `position`.
    pub fn resolve(&self, name: &str, position: &Position) -> Result<ScopeId, Error> {
        self.resolutions.get(&position.0).copied().ok_or_else(|| {
            Error::new(ErrorImpl::IdentifierNotDeclared { identifier: String::from(name) }, position.clone())
        })
    }

    /// Reads one line, without its line terminator.
    pub fn read_line(&mut self, position: &Position) -> Result<String, Error> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|error| Error::new(ErrorImpl::from(error), position.clone()))?;

        if read == 0 {
            return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, position.clone()));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    pub fn write_line(&mut self, text: &str, position: &Position) -> Result<(), Error> {
        writeln!(self.output, "{}", text).map_err(|error| Error::new(ErrorImpl::from(error), position.clone()))
    }
}

/// Runs `program` against the scopes `type_checker` built for it.
///
/// Returns the scopes afterwards, holding the last value of every variable.
#[tracing::instrument(level = "debug", skip_all, fields(program = %program.name))]
pub fn evaluate<R: BufRead, W: Write>(
    program: &Program,
    type_checker: TypeChecker,
    input: R,
    output: W,
) -> Result<ScopeTable, Error> {
    let mut interpreter = Interpreter::new(type_checker, input, output);
    let global = interpreter.global;

    evaluate_body(&mut interpreter, &program.body, global)?;

    interpreter
        .output
        .flush()
        .map_err(|error| Error::new(ErrorImpl::from(error), program.span.end.clone()))?;

    Ok(interpreter.scopes)
}
