#![allow(clippy::module_inception)]

use std::{
    fmt::Display,
    fs,
    io::{BufRead, Write},
    path::PathBuf,
    rc::Rc,
};

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::interpreter::evaluate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;
pub mod type_checker;

extern crate regex;

/// Byte offset into a source file, with the file's name.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs a whole program: lex, parse, type check, then evaluate.
///
/// `input` feeds `input` statements one line at a time and everything
/// `print`ed is written to `output`.
#[tracing::instrument(level = "info", skip(source, input, output))]
pub fn interpret<R: BufRead, W: Write>(
    source: String,
    file_name: &str,
    input: R,
    output: W,
) -> Result<(), Error> {
    let tokens = tokenize(source, Some(String::from(file_name)))?;
    let program = parse(tokens, Rc::new(String::from(file_name)))?;
    let type_checker = type_check(&program)?;

    evaluate(&program, type_checker, input, output)?;
    Ok(())
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line itself and the offset of
/// `position` within it.
pub fn get_line_in_source(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::{fs, rc::Rc};

    use crate::{errors::errors::{Error, ErrorImpl}, Position};

    #[test]
    fn test_get_line_in_source() {
        let source = fs::read_to_string("tests/test_file.basic").unwrap();

        let (line_number, line, line_pos) = super::get_line_in_source(&source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "program demo;\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_in_source(&source, 33).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "x := 2 + 3;\n");
        assert_eq!(line_pos, 7);
    }

    #[test]
    fn test_get_line_past_the_end() {
        assert!(super::get_line_in_source("print 1;", 8).is_none());
        assert!(super::get_line_in_source("", 0).is_none());
    }

    #[test]
    fn test_format_error() {
        let source = "var x: INT;\n    x := \"five\";\n";
        let error = Error::new(
            ErrorImpl::TypeMatchError { expected: String::from("INT"), received: String::from("STRING") },
            Position(21, Rc::new(String::from("test.basic"))),
        );

        let rendered = super::format_error(&error, Some(source), "test.basic");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: TypeMatchError (Variable expects a value of type `INT`, received `STRING`)");
        assert_eq!(lines[1], "-> test.basic");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x := \"five\";");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_format_error_without_source() {
        let error = Error::new(ErrorImpl::DivisionByZero, Position(400, Rc::new(String::from("test.basic"))));

        let rendered = super::format_error(&error, None, "test.basic");

        assert_eq!(rendered, "Error: DivisionByZero (Division by zero)\n-> test.basic\n");
    }
}

/// Renders `error` as a diagnostic pointing into `source`.
///
/// When the source is unavailable or the position lies outside it, only the
/// header lines are rendered.
pub fn format_error(error: &Error, source: Option<&str>, file: &str) -> String {
    /*
        Error: name (tip)
        -> final.basic
           |
        20 | x := #;
           | -----^
    */

    let mut rendered = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    rendered.push_str(&format!("-> {}\n", file));

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = source.and_then(|source| get_line_in_source(source, position.0)) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

/// Prints the diagnostic for `error` to stderr, reading the source back from `file`.
pub fn display_error(error: &Error, file: PathBuf) {
    let source = fs::read_to_string(&file).ok();
    eprint!(
        "{}",
        format_error(error, source.as_deref(), &file.as_os_str().to_string_lossy())
    );
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
