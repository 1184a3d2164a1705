use std::fmt::Display;

use crate::interpreter::value::Value;

use super::scope::ScopeId;

/// The built-in types. Types are compared by name, there are no user
/// defined ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Int,
    String,
}

impl Type {
    /// Every built-in type, in the order they are seeded into the global scope.
    pub const BUILTINS: [Type; 3] = [Type::Boolean, Type::Int, Type::String];

    pub fn name(&self) -> &'static str {
        match self {
            Type::Boolean => "BOOLEAN",
            Type::Int => "INT",
            Type::String => "STRING",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol {
    pub name: String,
    pub var_type: Type,
    /// Unset until the first assignment or input.
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureSymbol {
    pub name: String,
    pub parameters: Vec<(String, Type)>,
    /// Scope the body was analysed in, also where the parameters live.
    pub scope: ScopeId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    BuiltinType(Type),
    Variable(VariableSymbol),
    Procedure(ProcedureSymbol),
}

impl Symbol {
    pub fn variable(name: &str, var_type: Type) -> Self {
        Symbol::Variable(VariableSymbol {
            name: String::from(name),
            var_type,
            value: None,
        })
    }

    pub fn get_name(&self) -> &str {
        match self {
            Symbol::BuiltinType(ty) => ty.name(),
            Symbol::Variable(variable) => &variable.name,
            Symbol::Procedure(procedure) => &procedure.name,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableSymbol> {
        match self {
            Symbol::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_procedure(&self) -> Option<&ProcedureSymbol> {
        match self {
            Symbol::Procedure(procedure) => Some(procedure),
            _ => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::BuiltinType(ty) => write!(f, "<BuiltinType {}>", ty),
            Symbol::Variable(variable) => match &variable.value {
                Some(value) => write!(f, "<Variable {}: {} = {}>", variable.name, variable.var_type, value),
                None => write!(f, "<Variable {}: {}>", variable.name, variable.var_type),
            },
            Symbol::Procedure(procedure) => {
                let parameters = procedure
                    .parameters
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", name, ty))
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "<Procedure {}({})>", procedure.name, parameters)
            }
        }
    }
}
