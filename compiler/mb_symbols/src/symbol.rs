//! Type symbols.

use mb_ir::{split_full_name, strip_arity};

/// What a type symbol declares.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Class,
    Interface,
    Struct,
    Enum,
}

impl SymbolKind {
    pub fn is_interface(self) -> bool {
        self == SymbolKind::Interface
    }
}

/// A type visible to the compilation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
    /// CLR full name (`Ns.Outer+Inner`, generic arity as `` `N ``).
    pub full_name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(full_name: impl Into<String>, kind: SymbolKind) -> Self {
        Symbol {
            full_name: full_name.into(),
            kind,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        split_full_name(&self.full_name).0
    }

    /// Whether the type is nested in another type.
    pub fn is_nested(&self) -> bool {
        self.full_name.contains('+')
    }

    /// Innermost name without arity.
    pub fn simple_name(&self) -> &str {
        let (_, chain) = split_full_name(&self.full_name);
        chain.last().map_or("", |last| strip_arity(last).0)
    }
}

/// C# spelling of a CLR full name, arity suffixes dropped:
/// `A.Outer+Inner`1` becomes `A.Outer.Inner`.
pub fn source_spelling(full_name: &str) -> String {
    full_name
        .split(['.', '+'])
        .map(|segment| strip_arity(segment).0)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_of_nested_generic_symbol() {
        let symbol = Symbol::new("A.B.Outer+Inner`1", SymbolKind::Class);
        assert_eq!(symbol.namespace(), Some("A.B"));
        assert_eq!(symbol.simple_name(), "Inner");
        assert!(symbol.is_nested());
        assert_eq!(source_spelling(&symbol.full_name), "A.B.Outer.Inner");
    }

    #[test]
    fn global_namespace_symbol() {
        let symbol = Symbol::new("Thing", SymbolKind::Struct);
        assert_eq!(symbol.namespace(), None);
        assert!(!symbol.is_nested());
    }
}
