//! Minimal spellings for type references.
//!
//! A reference is written with its simple name when the generated file's
//! namespace or usings bring its namespace into scope and that name binds
//! to exactly the intended type. Otherwise the namespace-qualified name is
//! used, and `global::` is prepended when even that binds elsewhere.

use mb_diagnostic::{Error, Result};
use mb_ir::{split_full_name, strip_arity};
use mb_symbols::{source_spelling, Lookup, Resolved, Scope, SymbolTable, UsingDirective};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// A lookup point of a generated file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
struct ScopeKey {
    namespace: String,
    usings: Vec<String>,
    /// Nested types of the enclosing generated types.
    members: Vec<String>,
}

/// How a spelling binds at a lookup point.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Binding {
    /// Nothing in scope carries the first segment.
    Unbound,
    Exact,
    /// Another type, a namespace or an ambiguous import.
    Elsewhere,
}

/// Spells CLR full names for one generation run.
///
/// Owns the symbol table of the target compilation and caches every
/// spelling per lookup point. Not shared between runs.
#[derive(Debug)]
pub struct AmbiguityResolver {
    table: SymbolTable,
    validated: FxHashSet<(String, Vec<String>)>,
    spellings: FxHashMap<(ScopeKey, String), String>,
}

impl AmbiguityResolver {
    pub fn new(table: SymbolTable) -> Self {
        AmbiguityResolver {
            table,
            validated: FxHashSet::default(),
            spellings: FxHashMap::default(),
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Spelling of `full_name` inside `namespace` of a file declaring
    /// `usings`.
    ///
    /// Fails when a using directive names nothing the table knows: the
    /// scope model is then incomplete and no spelling can be trusted.
    pub fn resolve(
        &mut self,
        full_name: &str,
        namespace: &str,
        usings: &[String],
    ) -> Result<String> {
        self.resolve_in(full_name, namespace, usings, &[])
    }

    /// Like [`AmbiguityResolver::resolve`], from inside generated types
    /// whose nested types (`members`, CLR full names) shadow outer names.
    pub fn resolve_in(
        &mut self,
        full_name: &str,
        namespace: &str,
        usings: &[String],
        members: &[String],
    ) -> Result<String> {
        let key = ScopeKey {
            namespace: namespace.to_string(),
            usings: usings.to_vec(),
            members: members.to_vec(),
        };
        if let Some(spelling) = self.spellings.get(&(key.clone(), full_name.to_string())) {
            return Ok(spelling.clone());
        }

        let directives = usings.iter().map(|using| UsingDirective::parse(using)).collect();
        let scope =
            Scope::new(&self.table, namespace, directives).with_enclosing_members(members.to_vec());
        let validation_key = (key.namespace.clone(), key.usings.clone());
        if !self.validated.contains(&validation_key) {
            scope.validate().map_err(Error::AmbiguityResolution)?;
            self.validated.insert(validation_key);
        }

        let spelling = spell(&scope, full_name);
        trace!(full_name, namespace, spelling = %spelling, "type reference spelled");
        self.spellings
            .insert((key, full_name.to_string()), spelling.clone());
        Ok(spelling)
    }
}

fn spell(scope: &Scope<'_>, full_name: &str) -> String {
    let (namespace, chain) = split_full_name(full_name);
    let arity = chain.last().map_or(0, |last| strip_arity(last).1);
    let qualified = source_spelling(full_name);

    if namespace.map_or(true, |namespace| namespace_in_scope(scope, namespace)) {
        let short = chain
            .iter()
            .map(|segment| strip_arity(segment).0)
            .collect::<Vec<_>>()
            .join(".");
        if binding(scope, &short, arity, full_name) != Binding::Elsewhere {
            return short;
        }
        trace!(full_name, "simple name is ambiguous");
    }

    match binding(scope, &qualified, arity, full_name) {
        Binding::Elsewhere => format!("global::{qualified}"),
        Binding::Unbound | Binding::Exact => qualified,
    }
}

/// Whether `namespace` is the scope's namespace, one of its parents or
/// imported by a using directive.
fn namespace_in_scope(scope: &Scope<'_>, namespace: &str) -> bool {
    let current = scope.namespace();
    current == namespace
        || current
            .strip_prefix(namespace)
            .is_some_and(|rest| rest.starts_with('.'))
        || scope.usings().iter().any(|using| {
            matches!(using, UsingDirective::Namespace(imported) if imported == namespace)
        })
}

fn binding(scope: &Scope<'_>, spelling: &str, arity: usize, full_name: &str) -> Binding {
    let (first, rest) = match spelling.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (spelling, None),
    };
    let first_arity = if rest.is_none() { arity } else { 0 };
    match scope.lookup(first, first_arity) {
        Lookup::NotFound => Binding::Unbound,
        Lookup::Ambiguous(_) => Binding::Elsewhere,
        Lookup::Found(_) => match scope.resolve(spelling, arity) {
            Some(Resolved::Type(found)) if found == full_name => Binding::Exact,
            _ => Binding::Elsewhere,
        },
    }
}

#[cfg(test)]
mod tests;
