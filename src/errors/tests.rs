//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at_zero(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Position(0, Rc::new("test.basic".to_string())))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.basic".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_category(), ErrorCategory::Syntax);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.basic".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_identifier_already_declared_error() {
    let error = at_zero(ErrorImpl::IdentifierAlreadyDeclared {
        identifier: "x".to_string(),
    });

    assert_eq!(error.get_error_name(), "IdentifierAlreadyDeclared");
    assert_eq!(error.get_category(), ErrorCategory::Semantic);
}

#[test]
fn test_identifier_not_declared_error() {
    let error = at_zero(ErrorImpl::IdentifierNotDeclared {
        identifier: "foo".to_string(),
    });

    assert_eq!(error.get_error_name(), "IdentifierNotDeclared");
    assert_eq!(error.get_category(), ErrorCategory::Semantic);
}

#[test]
fn test_type_mismatch_error() {
    let error = at_zero(ErrorImpl::TypeMatchError {
        expected: "INT".to_string(),
        received: "STRING".to_string(),
    });

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(
        error.get_tip().to_string(),
        "Variable expects a value of type `INT`, received `STRING`"
    );
}

#[test]
fn test_incompatible_types_error() {
    let error = at_zero(ErrorImpl::IncompatibleTypes {
        left: "STRING".to_string(),
        right: "INT".to_string(),
    });

    assert_eq!(error.get_error_name(), "IncompatibleTypes");
    assert_eq!(error.get_tip().to_string(), "Incompatible types: `STRING` and `INT`");
}

#[test]
fn test_invalid_boolean_literal_is_runtime() {
    let error = at_zero(ErrorImpl::InvalidBooleanLiteral {
        input: "maybe".to_string(),
    });

    assert_eq!(error.get_error_name(), "InvalidBooleanLiteral");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
}

#[test]
fn test_division_by_zero_is_runtime() {
    let error = at_zero(ErrorImpl::DivisionByZero);

    assert_eq!(error.get_error_name(), "DivisionByZero");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
}

#[test]
fn test_recursion_limit_is_runtime() {
    let error = at_zero(ErrorImpl::RecursionLimit { procedure: String::from("p"), limit: 512 });

    assert_eq!(error.get_error_name(), "RecursionLimit");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
    assert_eq!(error.get_impl().to_string(), "calling \"p\" exceeds the limit of 512 nested calls");
}

#[test]
fn test_error_tip_none() {
    let error = at_zero(ErrorImpl::UnrecognisedToken {
        token: "@".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = at_zero(ErrorImpl::UnexpectedToken {
        token: "}".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::DivisionByZero,
        Position(7, Rc::new("test.basic".to_string())),
    );

    assert_eq!(error.to_string(), "division by zero at test.basic:7");
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error_impl = ErrorImpl::from(io_error);

    assert_eq!(
        error_impl,
        ErrorImpl::Io {
            message: "pipe closed".to_string()
        }
    );
}
