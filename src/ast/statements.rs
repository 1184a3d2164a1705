use std::slice::Iter;

use crate::Span;

use super::{ast::{Expr, Stmt}, types::SymbolType};

/// `var x: INT;`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: SymbolType,
    pub span: Span
}

/// `procedure name(a: INT, b: STRING) { ... }`
///
/// `id` identifies the scope the analyzer opens for the body.
#[derive(Debug, Clone)]
pub struct ProcedureDeclStmt {
    pub identifier: String,
    pub parameters: Vec<(String, SymbolType)>,
    pub body: Vec<Stmt>,
    pub id: i32,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct ProcedureCallStmt {
    pub identifier: String,
    pub arguments: Vec<Expr>,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub identifier: String,
    pub value: Expr,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct InputStmt {
    pub identifier: String,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub expression: Expr,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub span: Span
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub name: String,
    pub body: Vec<Stmt>,
    pub id: i32,
    pub span: Span
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}
