use std::io::{BufRead, Write};

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{InputStmt, ProcedureCallStmt},
    },
    errors::errors::{Error, ErrorImpl},
    symbols::{scope::ScopeId, symbols::{Symbol, Type}},
    Position,
};

use super::{
    expr::evaluate_expr,
    interpreter::{Interpreter, MAX_CALL_DEPTH},
    value::Value,
};

pub fn evaluate_stmt<'a, R: BufRead, W: Write>(interpreter: &mut Interpreter<'a, R, W>, stmt: &'a Stmt, scope: ScopeId) -> Result<(), Error> {
    tracing::trace!(scope, position = stmt.get_span().start.0, "statement");

    match stmt {
        Stmt::VarDecl(_) => Ok(()),
        Stmt::ProcedureDecl(procedure) => {
            let body_scope = interpreter.get_scope(procedure.id, &procedure.identifier, &procedure.span.start)?;
            interpreter.procedures.insert(body_scope, procedure);
            Ok(())
        },
        Stmt::ProcedureCall(call) => evaluate_call(interpreter, call, scope),
        Stmt::Assign(assign) => {
            let value = evaluate_expr(interpreter, &assign.value)?;
            let owner = interpreter.resolve(&assign.identifier, &assign.span.start)?;
            interpreter.scopes.update(owner, &assign.identifier, value, assign.span.start.clone())
        },
        Stmt::Input(input) => evaluate_input(interpreter, input),
        Stmt::Print(print) => {
            let value = evaluate_expr(interpreter, &print.expression)?;
            interpreter.write_line(&value.to_string(), &print.span.start)
        },
        Stmt::If(if_stmt) => {
            if evaluate_condition(interpreter, &if_stmt.condition)? {
                evaluate_body(interpreter, &if_stmt.body, scope)?;
            }
            Ok(())
        },
        Stmt::While(while_stmt) => {
            while evaluate_condition(interpreter, &while_stmt.condition)? {
                evaluate_body(interpreter, &while_stmt.body, scope)?;
            }
            Ok(())
        },
        Stmt::Block(block) => {
            let block_scope = interpreter.get_scope(block.id, &block.name, &block.span.start)?;
            evaluate_body(interpreter, &block.body, block_scope)
        }
    }
}

pub fn evaluate_body<'a, R: BufRead, W: Write>(interpreter: &mut Interpreter<'a, R, W>, body: &'a [Stmt], scope: ScopeId) -> Result<(), Error> {
    for stmt in body.iter() {
        evaluate_stmt(interpreter, stmt, scope)?;
    }

    Ok(())
}

fn evaluate_condition<R: BufRead, W: Write>(interpreter: &Interpreter<'_, R, W>, condition: &Expr) -> Result<bool, Error> {
    match evaluate_expr(interpreter, condition)? {
        Value::Boolean(value) => Ok(value),
        other => Err(Error::new(ErrorImpl::ConditionTypeMatchError { received: other.get_type().to_string() }, condition.get_span().start.clone())),
    }
}

fn evaluate_call<'a, R: BufRead, W: Write>(interpreter: &mut Interpreter<'a, R, W>, call: &'a ProcedureCallStmt, scope: ScopeId) -> Result<(), Error> {
    let position = &call.span.start;
    let unknown = || Error::new(ErrorImpl::UnknownProcedure { procedure: call.identifier.clone() }, position.clone());

    // Callees declared after the call site are only found by walking the chain at runtime
    let procedure = interpreter
        .resolutions
        .get(&position.0)
        .copied()
        .or_else(|| interpreter.scopes.find_owner(scope, &call.identifier))
        .and_then(|owner| interpreter.scopes.lookup_local(owner, &call.identifier))
        .and_then(Symbol::as_procedure)
        .cloned()
        .ok_or_else(unknown)?;

    // Declared in the scope chain but its declaration has not run yet
    let declaration = *interpreter.procedures.get(&procedure.scope).ok_or_else(unknown)?;

    if call.arguments.len() != procedure.parameters.len() {
        return Err(Error::new(ErrorImpl::ArgumentCountMismatch {
            procedure: procedure.name.clone(),
            expected: procedure.parameters.len(),
            received: call.arguments.len()
        }, position.clone()));
    }

    let mut values = Vec::with_capacity(call.arguments.len());
    for (argument, (parameter, expected)) in call.arguments.iter().zip(procedure.parameters.iter()) {
        let value = evaluate_expr(interpreter, argument)?;
        if value.get_type() != *expected {
            return Err(Error::new(ErrorImpl::ArgumentTypeMismatch {
                parameter: parameter.clone(),
                expected: expected.to_string(),
                received: value.get_type().to_string()
            }, argument.get_span().start.clone()));
        }
        values.push(value);
    }

    if interpreter.depth >= MAX_CALL_DEPTH {
        return Err(Error::new(ErrorImpl::RecursionLimit {
            procedure: procedure.name.clone(),
            limit: MAX_CALL_DEPTH
        }, position.clone()));
    }

    tracing::debug!(procedure = %procedure.name, arguments = values.len(), depth = interpreter.depth, "calling procedure");

    for ((parameter, _), value) in procedure.parameters.iter().zip(values) {
        interpreter.scopes.update(procedure.scope, parameter, value, position.clone())?;
    }

    interpreter.depth += 1;
    let result = evaluate_body(interpreter, &declaration.body, procedure.scope);
    interpreter.depth -= 1;

    result
}

fn evaluate_input<R: BufRead, W: Write>(interpreter: &mut Interpreter<'_, R, W>, input: &InputStmt) -> Result<(), Error> {
    let position = &input.span.start;
    let owner = interpreter.resolve(&input.identifier, position)?;
    let var_type = match interpreter.scopes.lookup_local(owner, &input.identifier) {
        Some(Symbol::Variable(variable)) => variable.var_type,
        Some(_) => return Err(Error::new(ErrorImpl::NotAVariable { identifier: input.identifier.clone() }, position.clone())),
        None => return Err(Error::new(ErrorImpl::IdentifierNotDeclared { identifier: input.identifier.clone() }, position.clone())),
    };

    let line = interpreter.read_line(position)?;
    let value = parse_input(&line, var_type, position)?;

    interpreter.scopes.update(owner, &input.identifier, value, position.clone())
}

/// Converts one line of input into a value of `var_type`.
pub fn parse_input(line: &str, var_type: Type, position: &Position) -> Result<Value, Error> {
    match var_type {
        Type::Boolean => match line {
            "True" | "true" | "T" | "t" => Ok(Value::Boolean(true)),
            "False" | "false" | "F" | "f" => Ok(Value::Boolean(false)),
            _ => Err(Error::new(ErrorImpl::InvalidBooleanLiteral { input: String::from(line) }, position.clone())),
        },
        Type::Int => line
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| Error::new(ErrorImpl::InvalidIntegerLiteral { input: String::from(line) }, position.clone())),
        Type::String => Ok(Value::String(String::from(line))),
    }
}
