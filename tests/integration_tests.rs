//! Integration tests for end-to-end interpretation.
//!
//! These tests verify that the complete pipeline works correctly from source
//! code through tokenization, parsing, type checking and evaluation, with
//! console input and output kept in memory.

use std::{fs::read_to_string, io::Cursor, thread};

use basic_lang::{
    errors::errors::{Error, ErrorCategory, ErrorImpl},
    interpret,
};

fn run(source: &str, input: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    interpret(source.to_string(), "test.basic", Cursor::new(input.as_bytes()), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

fn run_err(source: &str, input: &str) -> Error {
    run(source, input).unwrap_err()
}

#[test]
fn test_fixture_program() {
    let source = read_to_string("tests/test_file.basic").unwrap();

    assert_eq!(run(&source, "").unwrap(), "5\n");
}

#[test]
fn test_assign_and_print() {
    let source = "
        program sum;
        var x: INT;
        x := 2 + 3;
        print x;
    ";

    assert_eq!(run(source, "").unwrap(), "5\n");
}

#[test]
fn test_string_plus_int_is_rejected_before_running() {
    let error = run_err("var x: INT; print \"never\"; x := \"a\" + 1;", "");

    assert_eq!(error.get_category(), ErrorCategory::Semantic);
    assert!(matches!(error.get_impl(), ErrorImpl::IncompatibleTypes { .. }));
}

#[test]
fn test_duplicate_declaration() {
    let error = run_err("var x: INT; var x: INT;", "");
    assert!(matches!(error.get_impl(), ErrorImpl::IdentifierAlreadyDeclared { .. }));

    assert!(run("var x: INT; block inner { var x: INT; }", "").is_ok());
}

#[test]
fn test_undeclared_identifier() {
    for source in ["print y;", "y := 1;", "input y;", "while y { }"] {
        let error = run_err(source, "");
        assert!(
            matches!(error.get_impl(), ErrorImpl::IdentifierNotDeclared { .. }),
            "{} gave {:?}",
            source,
            error
        );
    }
}

#[test]
fn test_conditions() {
    let error = run_err("if 1 { print 1; }", "");
    assert!(matches!(error.get_impl(), ErrorImpl::ConditionTypeMatchError { .. }));

    let error = run_err("while \"x\" { }", "");
    assert!(matches!(error.get_impl(), ErrorImpl::ConditionTypeMatchError { .. }));

    assert_eq!(run("if 1 < 2 { print \"yes\"; } if 2 < 1 { print \"no\"; }", "").unwrap(), "yes\n");
}

#[test]
fn test_while_loop() {
    let source = "
        var i: INT;
        i := 0;
        while i < 3 {
            print i;
            i := i + 1;
        }
    ";

    assert_eq!(run(source, "").unwrap(), "0\n1\n2\n");
}

#[test]
fn test_while_body_may_not_run() {
    assert_eq!(run("while false { print 1; } print 2;", "").unwrap(), "2\n");
}

#[test]
fn test_boolean_input() {
    let source = "var b: BOOLEAN; input b; print b; print !b;";

    assert_eq!(run(source, "t\n").unwrap(), "true\nfalse\n");
    assert_eq!(run(source, "False\n").unwrap(), "false\ntrue\n");

    let error = run_err(source, "maybe\n");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
    assert_eq!(
        *error.get_impl(),
        ErrorImpl::InvalidBooleanLiteral { input: String::from("maybe") }
    );
}

#[test]
fn test_integer_and_string_input() {
    let source = "
        var n: INT;
        var name: STRING;
        input name;
        input n;
        while n > 0 {
            print name;
            n := n - 1;
        }
    ";

    assert_eq!(run(source, "bob\n2\n").unwrap(), "bob\nbob\n");

    let error = run_err(source, "bob\ntwo\n");
    assert!(matches!(error.get_impl(), ErrorImpl::InvalidIntegerLiteral { .. }));

    let error = run_err(source, "bob\n");
    assert_eq!(*error.get_impl(), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_procedure_scope_is_isolated() {
    let source = "
        procedure p(a: INT) {
            var local: INT;
            local := a;
        }
        print local;
    ";

    let error = run_err(source, "");
    assert_eq!(
        *error.get_impl(),
        ErrorImpl::IdentifierNotDeclared { identifier: String::from("local") }
    );
}

#[test]
fn test_procedure_call() {
    let source = "
        var result: INT;
        procedure square(n: INT) {
            result := n * n;
        }
        square(7);
        print result;
    ";

    assert_eq!(run(source, "").unwrap(), "49\n");
}

#[test]
fn test_procedure_call_checked_at_runtime() {
    let error = run_err("procedure p(a: INT, b: INT) { } print 1; p(1);", "");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
    assert!(matches!(error.get_impl(), ErrorImpl::ArgumentCountMismatch { expected: 2, received: 1, .. }));

    let error = run_err("nothing();", "");
    assert!(matches!(error.get_impl(), ErrorImpl::UnknownProcedure { .. }));
}

#[test]
fn test_shadowed_names_keep_separate_storage() {
    let source = "
        var x: INT;
        x := 1;
        {
            var x: STRING;
            x := \"inner\";
            print x;
        }
        print x;
    ";

    assert_eq!(run(source, "").unwrap(), "inner\n1\n");
}

#[test]
fn test_outer_variable_used_before_local_declaration() {
    let source = "
        var x: INT;
        x := 1;
        {
            x := 7;
            print x;
            var x: STRING;
            x := \"inner\";
            print x;
        }
        print x;
    ";

    assert_eq!(run(source, "").unwrap(), "7\ninner\n7\n");
}

#[test]
fn test_outer_variable_read_before_unset_local_declaration() {
    assert_eq!(run("var x: INT; x := 1; { print x; var x: INT; }", "").unwrap(), "1\n");
}

#[test]
fn test_procedure_uses_global_before_declaring_local() {
    let source = "
        var n: INT;
        n := 5;
        procedure p() {
            n := n + 1;
            var n: STRING;
            n := \"local\";
            print n;
        }
        p();
        print n;
    ";

    assert_eq!(run(source, "").unwrap(), "local\n6\n");
}

#[test]
fn test_input_into_outer_variable_before_local_declaration() {
    let source = "var x: INT; { input x; var x: STRING; x := \"s\"; } print x + 1;";

    assert_eq!(run(source, "41\n").unwrap(), "42\n");
}

#[test]
fn test_nested_block_writes_outer_variable() {
    let source = "
        var x: INT;
        x := 1;
        block outer {
            block inner {
                x := x + 41;
            }
        }
        print x;
    ";

    assert_eq!(run(source, "").unwrap(), "42\n");
}

#[test]
fn test_division() {
    assert_eq!(run("print 7 / 2;", "").unwrap(), "3.5\n");
    assert_eq!(run("print 8 / 2;", "").unwrap(), "4.0\n");
    assert_eq!(run("print 7 / 2 * 2;", "").unwrap(), "7.0\n");

    let error = run_err("var zero: INT; zero := 0; print 1 / zero;", "");
    assert_eq!(error.get_category(), ErrorCategory::Runtime);
    assert_eq!(*error.get_impl(), ErrorImpl::DivisionByZero);
}

#[test]
fn test_use_before_assignment() {
    let error = run_err("var x: INT; print x + 1;", "");

    assert_eq!(error.get_category(), ErrorCategory::Runtime);
    assert_eq!(
        *error.get_impl(),
        ErrorImpl::UninitialisedVariable { variable: String::from("x") }
    );
}

#[test]
fn test_recursion_depth_is_limited() {
    // 512 nested calls need more than the default test thread stack in debug builds
    let (deep, runaway) = thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let deep = run(
                "var calls: INT; calls := 0; procedure down(n: INT) { calls := calls + 1; if n > 0 { down(n - 1); } } down(500); print calls;",
                "",
            )
            .unwrap();

            let error = run_err("procedure p() { p(); } p();", "");
            (deep, (error.get_category(), error.get_impl().clone()))
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(deep, "501\n");
    assert_eq!(runaway.0, ErrorCategory::Runtime);
    assert_eq!(runaway.1, ErrorImpl::RecursionLimit { procedure: String::from("p"), limit: 512 });
}

#[test]
fn test_operator_precedence() {
    assert_eq!(run("print 2 + 3 * 4;", "").unwrap(), "14\n");
    assert_eq!(run("print (2 + 3) * 4;", "").unwrap(), "20\n");
    assert_eq!(run("print 10 - 4 - 3;", "").unwrap(), "3\n");
    assert_eq!(run("print -2 * 3;", "").unwrap(), "-6\n");
}

#[test]
fn test_comparisons_at_runtime() {
    let source = "
        print 1 == 1;
        print \"a\" < \"b\";
        print true != false;
        print 3 >= 4;
    ";

    assert_eq!(run(source, "").unwrap(), "true\ntrue\ntrue\nfalse\n");
}

#[test]
fn test_syntax_errors() {
    let error = run_err("print 1 @ 2;", "");
    assert_eq!(error.get_category(), ErrorCategory::Syntax);
    assert!(matches!(error.get_impl(), ErrorImpl::UnrecognisedToken { .. }));

    let error = run_err("var x INT;", "");
    assert_eq!(error.get_category(), ErrorCategory::Syntax);
}

#[test]
fn test_error_display() {
    let error = run_err("var x: INT;\nprint x;", "");

    assert_eq!(error.to_string(), "variable \"x\" used before assignment at test.basic:18");
}
