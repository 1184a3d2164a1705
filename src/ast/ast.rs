use crate::Span;

use super::{
    expressions::{BinaryExpr, BooleanExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    statements::{
        AssignStmt, BlockStmt, IfStmt, InputStmt, PrintStmt, ProcedureCallStmt,
        ProcedureDeclStmt, VarDeclStmt, WhileStmt,
    },
};

/// Root of a parsed program.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: String,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Statement Types
///
/// Every statement kind the language has. Both passes dispatch on this with
/// an exhaustive `match`.
#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    ProcedureDecl(ProcedureDeclStmt),
    ProcedureCall(ProcedureCallStmt),
    Assign(AssignStmt),
    Input(InputStmt),
    Print(PrintStmt),
    If(IfStmt),
    While(WhileStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::ProcedureDecl(stmt) => &stmt.span,
            Stmt::ProcedureCall(stmt) => &stmt.span,
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::Input(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
#[derive(Debug, Clone)]
pub enum Expr {
    Boolean(BooleanExpr),
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Boolean(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
        }
    }
}
