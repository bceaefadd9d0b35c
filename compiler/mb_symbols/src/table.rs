//! The set of types a compilation can see.

use mb_ir::{split_full_name, strip_arity};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Symbol, SymbolKind};

/// Where a type is declared.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum Container {
    /// A namespace; the empty string is the global namespace.
    Namespace(String),
    /// A containing type, by full name.
    Type(String),
}

/// Every type visible to one compilation, indexed for scoped lookup.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    kinds: FxHashMap<String, SymbolKind>,
    namespaces: FxHashSet<String>,
    /// (container, simple name, arity) to full name.
    members: FxHashMap<(Container, String, usize), String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from symbols.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut table = Self::new();
        table.extend(symbols);
        table
    }

    pub fn extend(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        for symbol in symbols {
            self.add(symbol);
        }
    }

    /// Register a type and the namespaces that contain it.
    pub fn add(&mut self, symbol: Symbol) {
        let (namespace, chain) = split_full_name(&symbol.full_name);
        if let Some(namespace) = namespace {
            self.add_namespace(namespace);
        }

        let mut container = Container::Namespace(namespace.unwrap_or_default().to_string());
        let mut prefix = match namespace {
            Some(namespace) => format!("{namespace}."),
            None => String::new(),
        };
        for (depth, segment) in chain.iter().enumerate() {
            if depth > 0 {
                prefix.push('+');
            }
            prefix.push_str(segment);
            let (name, arity) = strip_arity(segment);
            self.members
                .entry((container, name.to_string(), arity))
                .or_insert_with(|| prefix.clone());
            container = Container::Type(prefix.clone());
        }
        self.kinds.insert(symbol.full_name, symbol.kind);
    }

    /// Register a namespace and its parents.
    pub fn add_namespace(&mut self, namespace: &str) {
        let mut end = namespace.len();
        loop {
            if !self.namespaces.insert(namespace[..end].to_string()) {
                return;
            }
            match namespace[..end].rfind('.') {
                Some(dot) => end = dot,
                None => return,
            }
        }
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    pub fn contains_type(&self, full_name: &str) -> bool {
        self.kinds.contains_key(full_name)
    }

    pub fn kind_of(&self, full_name: &str) -> Option<SymbolKind> {
        self.kinds.get(full_name).copied()
    }

    /// Type `name` with `arity` declared directly in `namespace`
    /// (`""` for the global namespace).
    pub fn type_in_namespace(&self, namespace: &str, name: &str, arity: usize) -> Option<&str> {
        self.members
            .get(&(Container::Namespace(namespace.to_string()), name.to_string(), arity))
            .map(String::as_str)
    }

    /// Type `name` with `arity` nested directly in the type `container`.
    pub fn nested_type(&self, container: &str, name: &str, arity: usize) -> Option<&str> {
        self.members
            .get(&(Container::Type(container.to_string()), name.to_string(), arity))
            .map(String::as_str)
    }

    /// Namespace `name` declared directly in `namespace`, as a full name.
    pub fn child_namespace(&self, namespace: &str, name: &str) -> Option<String> {
        let full = if namespace.is_empty() {
            name.to_string()
        } else {
            format!("{namespace}.{name}")
        };
        self.namespaces.contains(&full).then_some(full)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
