use crate::{ast::{ast::{Expr, Stmt}, statements::{AssignStmt, BlockStmt, IfStmt, InputStmt, PrintStmt, ProcedureCallStmt, ProcedureDeclStmt, VarDeclStmt, WhileStmt}, types::SymbolType}, errors::errors::Error, lexer::tokens::TokenKind, parser::{expr::parse_expr, lookups::BindingPower}, Span};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.detailed_error("expected a statement")),
    }
}

/// Parses `{ stmt* }` and returns the statements.
fn parse_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while !parser.current_token().is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF]) {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(statements)
}

fn parse_type(parser: &mut Parser) -> Result<SymbolType, Error> {
    let error = parser.detailed_error("expected a type name");
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    Ok(SymbolType {
        name: token.value,
        position: token.span.start,
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = parser.detailed_error("expected identifier during variable declaration");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let error = parser.detailed_error("expected `:` and a type after the variable name");
    parser.expect_error(TokenKind::Colon, Some(error))?;
    let explicit_type = parse_type(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type,
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

pub fn parse_procedure_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = parser.detailed_error("expected procedure name");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let error = parser.detailed_error("expected parameter name");
        let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
        parser.expect(TokenKind::Colon)?;
        parameters.push((name, parse_type(parser)?));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_body(parser)?;

    Ok(Stmt::ProcedureDecl(ProcedureDeclStmt {
        identifier,
        parameters,
        body,
        id: parser.advance_id(),
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

/// `name := expr;` or `name(args);`
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek_kind() {
        TokenKind::Assignment => parse_assign_stmt(parser),
        TokenKind::OpenParen => parse_procedure_call_stmt(parser),
        _ => {
            parser.advance();
            Err(parser.detailed_error("expected `:=` or `(` after identifier"))
        }
    }
}

fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assign(AssignStmt {
        identifier: target.value,
        value,
        span: Span {
            start: target.span.start,
            end: parser.get_previous_end()
        }
    }))
}

fn parse_procedure_call_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let callee = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments: Vec<Expr> = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::ProcedureCall(ProcedureCallStmt {
        identifier: callee.value,
        arguments,
        span: Span {
            start: callee.span.start,
            end: parser.get_previous_end()
        }
    }))
}

pub fn parse_input_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = parser.detailed_error("expected a variable to read into");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Input(InputStmt {
        identifier,
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        expression,
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_body(parser)?;

    Ok(Stmt::If(IfStmt {
        condition,
        body,
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_body(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

/// `block name { ... }`
pub fn parse_named_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = parser.detailed_error("expected block name");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
    let body = parse_body(parser)?;

    Ok(Stmt::Block(BlockStmt {
        name,
        body,
        id: parser.advance_id(),
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}

/// Anonymous `{ ... }` block, named after its id.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();
    let body = parse_body(parser)?;
    let id = parser.advance_id();

    Ok(Stmt::Block(BlockStmt {
        name: format!("block{}", id),
        body,
        id,
        span: Span {
            start,
            end: parser.get_previous_end()
        }
    }))
}
