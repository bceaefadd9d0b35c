//! Scoped name lookup.
//!
//! Lookup order follows C#: members of the enclosing type, then for each
//! namespace from the innermost outwards its types and child namespaces,
//! and finally (at the compilation-unit level) using aliases, then types
//! imported by using directives. Only the imports can make a lookup
//! ambiguous; every earlier level binds the first match.

use std::fmt;

use mb_ir::strip_arity;

use crate::SymbolTable;

/// A `using` directive of a compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum UsingDirective {
    /// `using A.B;`
    Namespace(String),
    /// `using X = A.B.C;`
    Alias { alias: String, target: String },
    /// `using static A.B.C;`
    Static(String),
}

impl UsingDirective {
    /// Parse the text between `using` and `;`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some((alias, target)) = text.split_once('=') {
            return UsingDirective::Alias {
                alias: alias.trim().to_string(),
                target: target.trim().to_string(),
            };
        }
        match text.strip_prefix("static ") {
            Some(target) => UsingDirective::Static(target.trim().to_string()),
            None => UsingDirective::Namespace(text.to_string()),
        }
    }
}

impl fmt::Display for UsingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsingDirective::Namespace(namespace) => write!(f, "using {namespace};"),
            UsingDirective::Alias { alias, target } => write!(f, "using {alias} = {target};"),
            UsingDirective::Static(target) => write!(f, "using static {target};"),
        }
    }
}

/// What a name binds to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Resolved {
    /// A namespace, by full name.
    Namespace(String),
    /// A type, by CLR full name.
    Type(String),
}

/// Outcome of a simple-name lookup.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Lookup {
    NotFound,
    Found(Resolved),
    /// Several using directives import a type of that name.
    Ambiguous(Vec<Resolved>),
}

/// A lookup point: inside a namespace declaration of a compilation unit
/// with the given using directives, optionally inside a type.
#[derive(Clone, Debug)]
pub struct Scope<'a> {
    table: &'a SymbolTable,
    /// Full name of the enclosing namespace; empty for the global namespace.
    namespace: String,
    usings: Vec<UsingDirective>,
    /// Full names of types nested in the enclosing type.
    enclosing_members: Vec<String>,
}

impl<'a> Scope<'a> {
    pub fn new(table: &'a SymbolTable, namespace: &str, usings: Vec<UsingDirective>) -> Self {
        Scope {
            table,
            namespace: namespace.to_string(),
            usings,
            enclosing_members: Vec::new(),
        }
    }

    /// Look up from inside a type whose nested types are `members`.
    #[must_use]
    pub fn with_enclosing_members(mut self, members: Vec<String>) -> Self {
        self.enclosing_members = members;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn usings(&self) -> &[UsingDirective] {
        &self.usings
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Check every using directive names something the table knows.
    pub fn validate(&self) -> Result<(), String> {
        for using in &self.usings {
            let known = match using {
                UsingDirective::Namespace(namespace) => self.table.contains_namespace(namespace),
                UsingDirective::Alias { target, .. } => self.resolve_from_global(target).is_some(),
                UsingDirective::Static(target) => {
                    matches!(self.resolve_from_global(target), Some(Resolved::Type(_)))
                }
            };
            if !known {
                return Err(format!(
                    "`{using}` does not name anything in the referenced assemblies"
                ));
            }
        }
        Ok(())
    }

    /// Bind a simple name with the given generic arity.
    pub fn lookup(&self, name: &str, arity: usize) -> Lookup {
        if let Some(member) = self.enclosing_members.iter().find(|member| {
            let last = member.rsplit(['.', '+']).next().unwrap_or(member.as_str());
            strip_arity(last) == (name, arity)
        }) {
            return Lookup::Found(Resolved::Type(member.clone()));
        }

        for level in namespace_levels(&self.namespace) {
            if let Some(full) = self.table.type_in_namespace(level, name, arity) {
                return Lookup::Found(Resolved::Type(full.to_string()));
            }
            if arity == 0 {
                if let Some(namespace) = self.table.child_namespace(level, name) {
                    return Lookup::Found(Resolved::Namespace(namespace));
                }
            }
        }

        if arity == 0 {
            for using in &self.usings {
                if let UsingDirective::Alias { alias, target } = using {
                    if alias == name {
                        return match self.resolve_from_global(target) {
                            Some(resolved) => Lookup::Found(resolved),
                            None => Lookup::NotFound,
                        };
                    }
                }
            }
        }

        let mut imported: Vec<Resolved> = Vec::new();
        for using in &self.usings {
            let found = match using {
                UsingDirective::Namespace(namespace) => {
                    self.table.type_in_namespace(namespace, name, arity)
                }
                UsingDirective::Static(target) => match self.resolve_from_global(target) {
                    Some(Resolved::Type(container)) => {
                        self.table.nested_type(&container, name, arity)
                    }
                    _ => None,
                },
                UsingDirective::Alias { .. } => None,
            };
            if let Some(full) = found {
                let resolved = Resolved::Type(full.to_string());
                if !imported.contains(&resolved) {
                    imported.push(resolved);
                }
            }
        }

        match imported.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Found(imported.remove(0)),
            _ => Lookup::Ambiguous(imported),
        }
    }

    /// Bind a possibly dotted name (`A.B.C`, optionally `global::`-rooted)
    /// as written in source; `arity` applies to the last segment.
    pub fn resolve(&self, dotted: &str, arity: usize) -> Option<Resolved> {
        if let Some(rooted) = dotted.strip_prefix("global::") {
            return self.resolve_members(Resolved::Namespace(String::new()), rooted, arity);
        }
        let (first, rest) = match dotted.split_once('.') {
            Some((first, rest)) => (first, Some(rest)),
            None => (dotted, None),
        };
        let first_arity = if rest.is_none() { arity } else { 0 };
        let Lookup::Found(start) = self.lookup(first, first_arity) else {
            return None;
        };
        match rest {
            Some(rest) => self.resolve_members(start, rest, arity),
            None => Some(start),
        }
    }

    /// Bind a fully qualified C# spelling from the global namespace.
    pub fn resolve_from_global(&self, dotted: &str) -> Option<Resolved> {
        let dotted = dotted.strip_prefix("global::").unwrap_or(dotted);
        self.resolve_members(Resolved::Namespace(String::new()), dotted, 0)
    }

    fn resolve_members(&self, start: Resolved, dotted: &str, arity: usize) -> Option<Resolved> {
        let segments: Vec<&str> = dotted.split('.').collect();
        let mut current = start;
        for (index, segment) in segments.iter().enumerate() {
            let segment_arity = if index + 1 == segments.len() { arity } else { 0 };
            current = match &current {
                Resolved::Namespace(namespace) => {
                    let found = self.table.type_in_namespace(namespace, segment, segment_arity);
                    if let Some(full) = found {
                        Resolved::Type(full.to_string())
                    } else if segment_arity == 0 {
                        Resolved::Namespace(self.table.child_namespace(namespace, segment)?)
                    } else {
                        return None;
                    }
                }
                Resolved::Type(container) => Resolved::Type(
                    self.table
                        .nested_type(container, segment, segment_arity)?
                        .to_string(),
                ),
            };
        }
        Some(current)
    }
}

/// `A.B.C` yields `A.B.C`, `A.B`, `A`, then the global namespace `""`.
fn namespace_levels(namespace: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(namespace);
    std::iter::from_fn(move || {
        let current = next?;
        next = if current.is_empty() {
            None
        } else {
            Some(current.rfind('.').map_or("", |dot| &current[..dot]))
        };
        Some(current)
    })
}

#[cfg(test)]
mod tests;
