use crate::{ast::{ast::Expr, expressions::{BinaryExpr, BinaryOperator, BooleanExpr, NumberExpr, PrefixExpr, PrefixOperator, StringExpr, SymbolExpr}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, Span};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position())),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current BP, keep extending lhs
    while let Some(next_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if next_bp <= bp {
            break;
        }

        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position())),
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            match token.value.parse::<i64>() {
                Ok(value) => Ok(Expr::Number(NumberExpr { value, span: token.span })),
                Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, token.span.start)),
            }
        },
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr { value: token.value, span: token.span }))
        },
        TokenKind::String => {
            let token = parser.advance();
            Ok(Expr::String(StringExpr { value: token.value, span: token.span }))
        },
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            Ok(Expr::Boolean(BooleanExpr { value: token.kind == TokenKind::True, span: token.span }))
        },
        _ => {
            Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()))
        }
    }
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Sum),
        TokenKind::Dash => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Equals => Some(BinaryOperator::Equals),
        TokenKind::NotEquals => Some(BinaryOperator::NotEquals),
        TokenKind::Greater => Some(BinaryOperator::GreaterThan),
        TokenKind::GreaterEquals => Some(BinaryOperator::GreaterThanEquals),
        TokenKind::Less => Some(BinaryOperator::LessThan),
        TokenKind::LessEquals => Some(BinaryOperator::LessThanEquals),
        _ => None,
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = binary_operator(operator_token.kind).ok_or_else(|| {
        Error::new(ErrorImpl::UnexpectedToken { token: operator_token.value.clone() }, operator_token.span.start.clone())
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone()
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => PrefixOperator::Plus,
        TokenKind::Dash => PrefixOperator::Minus,
        TokenKind::Not => PrefixOperator::Not,
        _ => return Err(Error::new(ErrorImpl::UnexpectedToken { token: operator_token.value }, operator_token.span.start)),
    };
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone()
        },
        operator,
        right_expr: Box::new(rhs)
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
