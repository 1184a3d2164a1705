use std::{
    cmp::Ordering,
    io::{BufRead, Write},
};

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOperator, PrefixOperator},
    },
    errors::errors::{Error, ErrorImpl},
    symbols::symbols::Symbol,
    Position,
};

use super::{interpreter::Interpreter, value::Value};

pub fn evaluate_expr<R: BufRead, W: Write>(interpreter: &Interpreter<'_, R, W>, expr: &Expr) -> Result<Value, Error> {
    match expr {
        Expr::Boolean(boolean) => Ok(Value::Boolean(boolean.value)),
        Expr::Number(number) => Ok(Value::Int(number.value)),
        Expr::String(string) => Ok(Value::String(string.value.clone())),
        Expr::Symbol(symbol) => {
            let position = &symbol.span.start;
            let owner = interpreter.resolve(&symbol.value, position)?;

            match interpreter.scopes.lookup_local(owner, &symbol.value) {
                Some(Symbol::Variable(variable)) => variable.value.clone().ok_or_else(|| {
                    Error::new(ErrorImpl::UninitialisedVariable { variable: symbol.value.clone() }, position.clone())
                }),
                Some(_) => Err(Error::new(ErrorImpl::NotAVariable { identifier: symbol.value.clone() }, position.clone())),
                None => Err(Error::new(ErrorImpl::IdentifierNotDeclared { identifier: symbol.value.clone() }, position.clone())),
            }
        },
        Expr::Binary(binary) => {
            let left = evaluate_expr(interpreter, &binary.left)?;
            let right = evaluate_expr(interpreter, &binary.right)?;

            evaluate_binary(binary.operator, left, right, &binary.span.start)
        },
        Expr::Prefix(prefix) => {
            let operand = evaluate_expr(interpreter, &prefix.right_expr)?;

            evaluate_prefix(prefix.operator, operand, &prefix.span.start)
        }
    }
}

fn invalid_operand(operator: impl ToString, value: &Value, position: &Position) -> Error {
    Error::new(ErrorImpl::InvalidOperand {
        operator: operator.to_string(),
        value: value.to_string()
    }, position.clone())
}

pub fn evaluate_binary(operator: BinaryOperator, left: Value, right: Value, position: &Position) -> Result<Value, Error> {
    match operator {
        BinaryOperator::Sum | BinaryOperator::Sub | BinaryOperator::Mul => evaluate_arithmetic(operator, left, right, position),
        BinaryOperator::Div => {
            let dividend = left.as_f64().ok_or_else(|| invalid_operand(operator, &left, position))?;
            let divisor = right.as_f64().ok_or_else(|| invalid_operand(operator, &right, position))?;

            if divisor == 0.0 {
                return Err(Error::new(ErrorImpl::DivisionByZero, position.clone()));
            }
            Ok(Value::Real(dividend / divisor))
        },
        _ => match left.compare(&right) {
            Some(ordering) => Ok(Value::Boolean(match operator {
                BinaryOperator::Equals => ordering == Ordering::Equal,
                BinaryOperator::NotEquals => ordering != Ordering::Equal,
                BinaryOperator::GreaterThan => ordering == Ordering::Greater,
                BinaryOperator::GreaterThanEquals => ordering != Ordering::Less,
                BinaryOperator::LessThan => ordering == Ordering::Less,
                _ => ordering != Ordering::Greater,
            })),
            // Numbers are unordered only when one of them is NaN
            None if left.as_f64().is_some() && right.as_f64().is_some() => {
                Ok(Value::Boolean(operator == BinaryOperator::NotEquals))
            },
            None => Err(invalid_operand(operator, &right, position)),
        }
    }
}

/// `+ - *` on two numbers. Integers use checked arithmetic, anything
/// involving a real is promoted to a real.
fn evaluate_arithmetic(operator: BinaryOperator, left: Value, right: Value, position: &Position) -> Result<Value, Error> {
    if let (Value::Int(l), Value::Int(r)) = (&left, &right) {
        let result = match operator {
            BinaryOperator::Sum => l.checked_add(*r),
            BinaryOperator::Sub => l.checked_sub(*r),
            _ => l.checked_mul(*r),
        };

        return result
            .map(Value::Int)
            .ok_or_else(|| Error::new(ErrorImpl::ArithmeticOverflow { operator: operator.to_string() }, position.clone()));
    }

    let l = left.as_f64().ok_or_else(|| invalid_operand(operator, &left, position))?;
    let r = right.as_f64().ok_or_else(|| invalid_operand(operator, &right, position))?;

    Ok(Value::Real(match operator {
        BinaryOperator::Sum => l + r,
        BinaryOperator::Sub => l - r,
        _ => l * r,
    }))
}

pub fn evaluate_prefix(operator: PrefixOperator, operand: Value, position: &Position) -> Result<Value, Error> {
    match (operator, &operand) {
        (PrefixOperator::Plus, Value::Int(_) | Value::Real(_)) => Ok(operand.clone()),
        (PrefixOperator::Minus, Value::Int(value)) => value
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| Error::new(ErrorImpl::ArithmeticOverflow { operator: operator.to_string() }, position.clone())),
        (PrefixOperator::Minus, Value::Real(value)) => Ok(Value::Real(-value)),
        (PrefixOperator::Not, Value::Boolean(value)) => Ok(Value::Boolean(!value)),
        _ => Err(invalid_operand(operator, &operand, position)),
    }
}
