use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::PrefixOperator,
        types::SymbolType,
    },
    errors::errors::{Error, ErrorImpl},
    symbols::{
        scope::{ScopeId, ScopeTable},
        symbols::{ProcedureSymbol, Symbol, Type, VariableSymbol},
    },
    Position,
};

/// Result of analysing a program: every scope it opens, the scope each
/// block and procedure body was given, and the scope each variable use
/// resolved to.
#[derive(Debug)]
pub struct TypeChecker {
    pub scopes: ScopeTable,
    pub scope_lookup: HashMap<i32, ScopeId>,
    /// Source offset of a variable use or procedure call to the scope owning
    /// the name.
    /// Later declarations in the same block do not change the entry.
    pub resolutions: HashMap<u32, ScopeId>,
    pub global: ScopeId,
}

impl TypeChecker {
    /// Creates the global scope and seeds it with the built-in types.
    pub fn new(program_name: &str) -> Self {
        let mut scopes = ScopeTable::new();
        let global = scopes.push_scope(String::from(program_name), None);

        for ty in Type::BUILTINS {
            scopes.insert(global, ty.name(), Symbol::BuiltinType(ty));
        }

        TypeChecker {
            scopes,
            scope_lookup: HashMap::new(),
            resolutions: HashMap::new(),
            global,
        }
    }

    /// Opens the scope for the node `id`, one level below `parent`.
    pub fn add_scope(&mut self, id: i32, name: &str, parent: ScopeId, position: Position) -> Result<ScopeId, Error> {
        if self.scope_lookup.contains_key(&id) {
            return Err(Error::new(ErrorImpl::DuplicateScopeId { id }, position));
        }

        let scope = self.scopes.push_scope(String::from(name), Some(parent));
        self.scope_lookup.insert(id, scope);
        Ok(scope)
    }

    pub fn declare(&mut self, scope: ScopeId, name: &str, symbol: Symbol, position: Position) -> Result<(), Error> {
        if self.scopes.lookup_local(scope, name).is_some() {
            return Err(Error::new(ErrorImpl::IdentifierAlreadyDeclared { identifier: String::from(name) }, position));
        }

        self.scopes.insert(scope, name, symbol);
        Ok(())
    }

    /// Resolves a type annotation; the name must reach a built-in type.
    pub fn resolve_type(&self, scope: ScopeId, ty: &SymbolType) -> Result<Type, Error> {
        match self.scopes.lookup(scope, &ty.name) {
            Some(Symbol::BuiltinType(resolved)) => Ok(*resolved),
            _ => Err(Error::new(ErrorImpl::UnknownType { type_: ty.name.clone() }, ty.get_position())),
        }
    }

    /// Resolves a variable use against the declarations seen so far and
    /// records the owning scope under the use's offset.
    pub fn resolve_variable(&mut self, scope: ScopeId, name: &str, position: &Position) -> Result<&VariableSymbol, Error> {
        if let Some(owner) = self.scopes.find_owner(scope, name) {
            self.resolutions.insert(position.0, owner);
        }

        match self.scopes.lookup(scope, name) {
            Some(Symbol::Variable(variable)) => Ok(variable),
            Some(_) => Err(Error::new(ErrorImpl::NotAVariable { identifier: String::from(name) }, position.clone())),
            None => Err(Error::new(ErrorImpl::IdentifierNotDeclared { identifier: String::from(name) }, position.clone())),
        }
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &Expr, scope: ScopeId) -> Result<Type, Error> {
    match expr {
        Expr::Boolean(_) => Ok(Type::Boolean),
        Expr::Number(_) => Ok(Type::Int),
        Expr::String(_) => Ok(Type::String),
        Expr::Symbol(symbol) => {
            let variable = type_checker.resolve_variable(scope, &symbol.value, &symbol.span.start)?;
            Ok(variable.var_type)
        },
        Expr::Binary(binary) => {
            let left = type_check_expr(type_checker, &binary.left, scope)?;
            let right = type_check_expr(type_checker, &binary.right, scope)?;

            let incompatible = || Error::new(ErrorImpl::IncompatibleTypes {
                left: left.to_string(),
                right: right.to_string()
            }, binary.span.start.clone());

            if binary.operator.is_arithmetic() {
                if left == Type::Int && right == Type::Int {
                    Ok(Type::Int)
                } else {
                    Err(incompatible())
                }
            } else if left == right {
                Ok(Type::Boolean)
            } else {
                Err(incompatible())
            }
        },
        Expr::Prefix(prefix) => {
            let operand = type_check_expr(type_checker, &prefix.right_expr, scope)?;

            match prefix.operator {
                PrefixOperator::Not if operand != Type::Boolean => Err(Error::new(ErrorImpl::IncompatibleUnaryType {
                    operator: prefix.operator.to_string(),
                    received: operand.to_string()
                }, prefix.span.start.clone())),
                // Unary plus and minus keep the operand's type
                _ => Ok(operand),
            }
        }
    }
}

fn type_check_condition(type_checker: &mut TypeChecker, condition: &Expr, scope: ScopeId) -> Result<(), Error> {
    let ty = type_check_expr(type_checker, condition, scope)?;
    if ty != Type::Boolean {
        return Err(Error::new(ErrorImpl::ConditionTypeMatchError { received: ty.to_string() }, condition.get_span().start.clone()));
    }

    Ok(())
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt, scope: ScopeId) -> Result<(), Error> {
    match stmt {
        Stmt::VarDecl(var_decl) => {
            if type_checker.scopes.lookup_local(scope, &var_decl.identifier).is_some() {
                return Err(Error::new(ErrorImpl::IdentifierAlreadyDeclared {
                    identifier: var_decl.identifier.clone()
                }, var_decl.span.start.clone()));
            }

            let var_type = type_checker.resolve_type(scope, &var_decl.explicit_type)?;
            type_checker.declare(scope, &var_decl.identifier, Symbol::variable(&var_decl.identifier, var_type), var_decl.span.start.clone())
        },
        Stmt::ProcedureDecl(procedure) => {
            if type_checker.scopes.lookup_local(scope, &procedure.identifier).is_some() {
                return Err(Error::new(ErrorImpl::IdentifierAlreadyDeclared {
                    identifier: procedure.identifier.clone()
                }, procedure.span.start.clone()));
            }

            let mut parameters = vec![];
            for (name, ty) in procedure.parameters.iter() {
                parameters.push((name.clone(), type_checker.resolve_type(scope, ty)?));
            }

            let body_scope = type_checker.add_scope(procedure.id, &procedure.identifier, scope, procedure.span.start.clone())?;

            // Declared before the body is visited so the body can call itself
            type_checker.declare(scope, &procedure.identifier, Symbol::Procedure(ProcedureSymbol {
                name: procedure.identifier.clone(),
                parameters: parameters.clone(),
                scope: body_scope
            }), procedure.span.start.clone())?;

            for ((name, ty), (_, annotation)) in parameters.iter().zip(procedure.parameters.iter()) {
                type_checker.declare(body_scope, name, Symbol::variable(name, *ty), annotation.get_position())?;
            }

            type_check_body(type_checker, &procedure.body, body_scope)
        },
        Stmt::ProcedureCall(call) => {
            // Callee, arity and argument types are checked when the call runs
            if let Some(owner) = type_checker.scopes.find_owner(scope, &call.identifier) {
                type_checker.resolutions.insert(call.span.start.0, owner);
            }

            for argument in call.arguments.iter() {
                type_check_expr(type_checker, argument, scope)?;
            }
            Ok(())
        },
        Stmt::Assign(assign) => {
            let expected = type_checker.resolve_variable(scope, &assign.identifier, &assign.span.start)?.var_type;
            let received = type_check_expr(type_checker, &assign.value, scope)?;

            if expected != received {
                return Err(Error::new(ErrorImpl::TypeMatchError {
                    expected: expected.to_string(),
                    received: received.to_string()
                }, assign.value.get_span().start.clone()));
            }
            Ok(())
        },
        Stmt::Input(input) => {
            type_checker.resolve_variable(scope, &input.identifier, &input.span.start)?;
            Ok(())
        },
        Stmt::Print(print) => {
            type_check_expr(type_checker, &print.expression, scope)?;
            Ok(())
        },
        Stmt::If(if_stmt) => {
            type_check_condition(type_checker, &if_stmt.condition, scope)?;
            type_check_body(type_checker, &if_stmt.body, scope)
        },
        Stmt::While(while_stmt) => {
            type_check_condition(type_checker, &while_stmt.condition, scope)?;
            type_check_body(type_checker, &while_stmt.body, scope)
        },
        Stmt::Block(block) => {
            let block_scope = type_checker.add_scope(block.id, &block.name, scope, block.span.start.clone())?;
            type_check_body(type_checker, &block.body, block_scope)
        }
    }
}

pub fn type_check_body(type_checker: &mut TypeChecker, body: &[Stmt], scope: ScopeId) -> Result<(), Error> {
    for stmt in body.iter() {
        type_check_stmt(type_checker, stmt, scope)?;
    }

    Ok(())
}

/// Builds every scope of `program` and checks it, stopping at the first error.
#[tracing::instrument(level = "debug", skip(program), fields(program = %program.name))]
pub fn type_check(program: &Program) -> Result<TypeChecker, Error> {
    let mut type_checker = TypeChecker::new(&program.name);
    let global = type_checker.global;

    type_check_body(&mut type_checker, &program.body, global)?;

    tracing::debug!(scopes = type_checker.scopes.len(), "analysis finished");
    Ok(type_checker)
}

