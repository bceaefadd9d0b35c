//! Symbol table and C#-style scoped name lookup.
//!
//! Stands in for a compiler's semantic model: given every type the
//! compilation can see (framework references, host references, developer
//! code, generated models) and a lookup point (namespace, using
//! directives, enclosing type members), [`Scope::lookup`] answers what a
//! simple name binds to, the way the C# compiler would.
//!
//! Used by the existing-code parser to classify base-list entries and by
//! the code writer to pick unambiguous spellings.

mod references;
mod scope;
mod symbol;
mod table;

pub use references::{builtin_references, MARKER_NAMESPACE};
pub use scope::{Lookup, Resolved, Scope, UsingDirective};
pub use symbol::{source_spelling, Symbol, SymbolKind};
pub use table::SymbolTable;
