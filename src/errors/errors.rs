use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorCategory::Syntax,
            ErrorImpl::IdentifierAlreadyDeclared { .. }
            | ErrorImpl::IdentifierNotDeclared { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::NotAVariable { .. }
            | ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::ConditionTypeMatchError { .. }
            | ErrorImpl::IncompatibleTypes { .. }
            | ErrorImpl::IncompatibleUnaryType { .. }
            | ErrorImpl::DuplicateScopeId { .. } => ErrorCategory::Semantic,
            _ => ErrorCategory::Runtime,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::IdentifierAlreadyDeclared { .. } => "IdentifierAlreadyDeclared",
            ErrorImpl::IdentifierNotDeclared { .. } => "IdentifierNotDeclared",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::NotAVariable { .. } => "NotAVariable",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::ConditionTypeMatchError { .. } => "ConditionTypeMatchError",
            ErrorImpl::IncompatibleTypes { .. } => "IncompatibleTypes",
            ErrorImpl::IncompatibleUnaryType { .. } => "IncompatibleUnaryType",
            ErrorImpl::DuplicateScopeId { .. } => "DuplicateScopeId",
            ErrorImpl::InvalidBooleanLiteral { .. } => "InvalidBooleanLiteral",
            ErrorImpl::InvalidIntegerLiteral { .. } => "InvalidIntegerLiteral",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UninitialisedVariable { .. } => "UninitialisedVariable",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
            ErrorImpl::InvalidOperand { .. } => "InvalidOperand",
            ErrorImpl::UnknownProcedure { .. } => "UnknownProcedure",
            ErrorImpl::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
            ErrorImpl::RecursionLimit { .. } => "RecursionLimit",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::IdentifierAlreadyDeclared { identifier } => ErrorTip::Suggestion(
                format!("Identifier `{}` already declared in this scope", identifier),
            ),
            ErrorImpl::IdentifierNotDeclared { identifier } => {
                ErrorTip::Suggestion(format!("Identifier `{}` not declared", identifier))
            }
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of BOOLEAN, INT or STRING",
                type_
            )),
            ErrorImpl::NotAVariable { identifier } => {
                ErrorTip::Suggestion(format!("`{}` is not a variable", identifier))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Variable expects a value of type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ConditionTypeMatchError { received } => ErrorTip::Suggestion(format!(
                "Condition must be BOOLEAN, received an expression of type `{}`",
                received
            )),
            ErrorImpl::IncompatibleTypes { left, right } => {
                ErrorTip::Suggestion(format!("Incompatible types: `{}` and `{}`", left, right))
            }
            ErrorImpl::IncompatibleUnaryType { operator, received } => ErrorTip::Suggestion(
                format!("Operator `{}` cannot be applied to `{}`", operator, received),
            ),
            ErrorImpl::DuplicateScopeId { id } => ErrorTip::Suggestion(format!(
                "Node id {} opens more than one scope, ids must be unique",
                id
            )),
            ErrorImpl::InvalidBooleanLiteral { input } => ErrorTip::Suggestion(format!(
                "Expected a boolean value (True, true, T, t, False, false, F, f), received `{}`",
                input
            )),
            ErrorImpl::InvalidIntegerLiteral { input } => {
                ErrorTip::Suggestion(format!("Expected an integer value, received `{}`", input))
            }
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("Input ended before a value could be read"))
            }
            ErrorImpl::UninitialisedVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is used before any value was assigned",
                variable
            )),
            ErrorImpl::DivisionByZero => ErrorTip::Suggestion(String::from("Division by zero")),
            ErrorImpl::ArithmeticOverflow { operator } => ErrorTip::Suggestion(format!(
                "Integer overflow while evaluating `{}`",
                operator
            )),
            ErrorImpl::InvalidOperand { operator, value } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to `{}`",
                operator, value
            )),
            ErrorImpl::UnknownProcedure { procedure } => {
                ErrorTip::Suggestion(format!("Procedure `{}` is not declared", procedure))
            }
            ErrorImpl::ArgumentCountMismatch {
                procedure,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Procedure `{}` expects {} arguments, received {}",
                procedure, expected, received
            )),
            ErrorImpl::ArgumentTypeMismatch {
                parameter,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Parameter `{}` expects type `{}`, received `{}`",
                parameter, expected, received
            )),
            ErrorImpl::RecursionLimit { procedure, limit } => ErrorTip::Suggestion(format!(
                "Calling `{}` nests more than {} procedure calls; check that the recursion ends",
                procedure, limit
            )),
            ErrorImpl::Io { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

/// Which pass raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Semantic,
    Runtime,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Front-end
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Analysis
    #[error("identifier {identifier:?} already declared")]
    IdentifierAlreadyDeclared { identifier: String },
    #[error("identifier {identifier:?} not declared")]
    IdentifierNotDeclared { identifier: String },
    #[error("unknown type {type_}")]
    UnknownType { type_: String },
    #[error("{identifier:?} is not a variable")]
    NotAVariable { identifier: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: String, received: String },
    #[error("condition must be BOOLEAN, received {received}")]
    ConditionTypeMatchError { received: String },
    #[error("incompatible types: {left} and {right}")]
    IncompatibleTypes { left: String, right: String },
    #[error("operator {operator} cannot be applied to {received}")]
    IncompatibleUnaryType { operator: String, received: String },
    #[error("node id {id} opens more than one scope")]
    DuplicateScopeId { id: i32 },

    // Evaluation
    #[error("invalid boolean literal: {input:?}")]
    InvalidBooleanLiteral { input: String },
    #[error("invalid integer literal: {input:?}")]
    InvalidIntegerLiteral { input: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("variable {variable:?} used before assignment")]
    UninitialisedVariable { variable: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow in {operator}")]
    ArithmeticOverflow { operator: String },
    #[error("operator {operator} cannot be applied to {value}")]
    InvalidOperand { operator: String, value: String },
    #[error("procedure {procedure:?} not declared")]
    UnknownProcedure { procedure: String },
    #[error("procedure {procedure:?} expects {expected} arguments, received {received}")]
    ArgumentCountMismatch {
        procedure: String,
        expected: usize,
        received: usize,
    },
    #[error("parameter {parameter:?} expects {expected}, received {received}")]
    ArgumentTypeMismatch {
        parameter: String,
        expected: String,
        received: String,
    },
    #[error("calling {procedure:?} exceeds the limit of {limit} nested calls")]
    RecursionLimit { procedure: String, limit: usize },
    #[error("i/o error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for ErrorImpl {
    fn from(error: std::io::Error) -> Self {
        ErrorImpl::Io {
            message: error.to_string(),
        }
    }
}
