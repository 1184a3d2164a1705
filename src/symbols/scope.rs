//! Lexical scopes.
//!
//! Every scope lives in a [`ScopeTable`] arena and points at its enclosing
//! scope by index. Both passes thread a [`ScopeId`] through their traversal
//! instead of keeping a "current scope" cursor, so the same chain can be
//! walked again by the interpreter after the type checker has built it.

use std::fmt::Display;

use indexmap::IndexMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    interpreter::value::Value,
    Position,
};

use super::symbols::Symbol;

/// Index of a scope inside a [`ScopeTable`].
pub type ScopeId = usize;

#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,
    /// Nesting depth, 0 for the global scope.
    pub level: usize,
    /// Enclosing scope (None for global scope)
    pub parent: Option<ScopeId>,
    symbols: IndexMap<String, Symbol>,
}

impl Scope {
    pub fn new(name: String, level: usize, parent: Option<ScopeId>) -> Self {
        Scope {
            name,
            level,
            parent,
            symbols: IndexMap::new(),
        }
    }

    pub fn get_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.symbols.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl ScopeTable {
    pub fn new() -> Self {
        ScopeTable { scopes: vec![] }
    }

    /// Creates a scope one level below `parent` (or a root scope) and returns its id.
    pub fn push_scope(&mut self, name: String, parent: Option<ScopeId>) -> ScopeId {
        let level = match parent.and_then(|parent| self.scopes.get(parent)) {
            Some(parent) => parent.level + 1,
            None => 0,
        };

        self.scopes.push(Scope::new(name, level, parent));
        let id = self.scopes.len() - 1;
        tracing::debug!(scope = id, name = %self.scopes[id].name, level, "opened scope");
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id)
    }

    /// Binds `name` in exactly the given scope, replacing any previous binding.
    pub fn insert(&mut self, scope: ScopeId, name: &str, symbol: Symbol) {
        if let Some(scope) = self.scopes.get_mut(scope) {
            tracing::debug!(scope = %scope.name, symbol = %symbol, "inserted symbol");
            scope.symbols.insert(String::from(name), symbol);
        }
    }

    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.scopes.get(scope)?.get_symbol(name)
    }

    /// Finds the nearest binding of `name`, starting at `scope` and walking
    /// outwards to the root.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let owner = self.find_owner(scope, name)?;
        self.lookup_local(owner, name)
    }

    /// Id of the scope holding the nearest binding of `name`.
    pub fn find_owner(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scopes.get(id)?;
            if scope.symbols.contains_key(name) {
                return Some(id);
            }
            current = scope.parent;
        }

        None
    }

    /// Stores `value` in the nearest variable called `name`. Never creates a binding.
    pub fn update(&mut self, scope: ScopeId, name: &str, value: Value, position: Position) -> Result<(), Error> {
        let owner = self.find_owner(scope, name).ok_or_else(|| {
            Error::new(ErrorImpl::IdentifierNotDeclared { identifier: String::from(name) }, position.clone())
        })?;

        match self.scopes[owner].symbols.get_mut(name) {
            Some(Symbol::Variable(variable)) => {
                variable.value = Some(value);
                Ok(())
            }
            _ => Err(Error::new(ErrorImpl::NotAVariable { identifier: String::from(name) }, position)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Display for ScopeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, scope) in self.iter() {
            match scope.parent.and_then(|parent| self.get(parent)) {
                Some(parent) => writeln!(f, "scope {} `{}` (level {}, enclosing `{}`)", id, scope.name, scope.level, parent.name)?,
                None => writeln!(f, "scope {} `{}` (level {})", id, scope.name, scope.level)?,
            }

            for (name, symbol) in scope.symbols() {
                writeln!(f, "  {}: {}", name, symbol)?;
            }
        }

        Ok(())
    }
}
