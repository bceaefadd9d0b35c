use super::*;
use crate::{Symbol, SymbolKind};
use pretty_assertions::assert_eq;

fn table() -> SymbolTable {
    SymbolTable::from_symbols([
        Symbol::new("System.String", SymbolKind::Class),
        Symbol::new("System.Text.StringBuilder", SymbolKind::Class),
        Symbol::new("System.Collections.Generic.List`1", SymbolKind::Class),
        Symbol::new("Acme.Text.StringBuilder", SymbolKind::Class),
        Symbol::new("Acme.Web.Models.Page", SymbolKind::Class),
        Symbol::new("Acme.Web.Models.Page+Settings", SymbolKind::Class),
        Symbol::new("Acme.Web.Helper", SymbolKind::Class),
        Symbol::new("Acme.Web.System.Clock", SymbolKind::Class),
    ])
}

fn usings(names: &[&str]) -> Vec<UsingDirective> {
    names.iter().map(|name| UsingDirective::parse(name)).collect()
}

fn found_type(full: &str) -> Lookup {
    Lookup::Found(Resolved::Type(full.to_string()))
}

#[test]
fn namespace_levels_walk_outwards() {
    assert_eq!(
        namespace_levels("A.B.C").collect::<Vec<_>>(),
        vec!["A.B.C", "A.B", "A", ""]
    );
    assert_eq!(namespace_levels("").collect::<Vec<_>>(), vec![""]);
}

#[test]
fn using_imports_a_type() {
    let table = table();
    let scope = Scope::new(&table, "Acme.Web.Models", usings(&["System.Text"]));
    assert_eq!(scope.lookup("StringBuilder", 0), found_type("System.Text.StringBuilder"));
}

#[test]
fn two_imports_of_one_name_are_ambiguous() {
    let table = table();
    let scope = Scope::new(&table, "Acme.Web.Models", usings(&["System.Text", "Acme.Text"]));
    assert_eq!(
        scope.lookup("StringBuilder", 0),
        Lookup::Ambiguous(vec![
            Resolved::Type("System.Text.StringBuilder".to_string()),
            Resolved::Type("Acme.Text.StringBuilder".to_string()),
        ])
    );
}

#[test]
fn enclosing_namespaces_bind_before_imports() {
    let table = table();
    let scope = Scope::new(&table, "Acme.Web.Models", usings(&["System.Text"]));
    assert_eq!(scope.lookup("Helper", 0), found_type("Acme.Web.Helper"));
    // `System` binds to the namespace Acme.Web.System, not the root one.
    assert_eq!(
        scope.lookup("System", 0),
        Lookup::Found(Resolved::Namespace("Acme.Web.System".to_string()))
    );
}

#[test]
fn arity_distinguishes_types() {
    let table = table();
    let scope = Scope::new(&table, "Acme", usings(&["System.Collections.Generic"]));
    assert_eq!(scope.lookup("List", 1), found_type("System.Collections.Generic.List`1"));
    assert_eq!(scope.lookup("List", 0), Lookup::NotFound);
}

#[test]
fn enclosing_members_shadow_everything() {
    let table = table();
    let scope = Scope::new(&table, "Acme.Web.Models", Vec::new())
        .with_enclosing_members(vec!["Acme.Web.Models.ModelInfos+Page".to_string()]);
    assert_eq!(scope.lookup("Page", 0), found_type("Acme.Web.Models.ModelInfos+Page"));
}

#[test]
fn aliases_and_static_usings() {
    let table = table();
    let scope = Scope::new(
        &table,
        "Other",
        usings(&["SB = System.Text.StringBuilder", "static Acme.Web.Models.Page"]),
    );
    assert_eq!(scope.lookup("SB", 0), found_type("System.Text.StringBuilder"));
    assert_eq!(scope.lookup("Settings", 0), found_type("Acme.Web.Models.Page+Settings"));
    assert_eq!(scope.validate(), Ok(()));
}

#[test]
fn qualified_names_resolve_through_members() {
    let table = table();
    let scope = Scope::new(&table, "Acme.Web.Models", Vec::new());
    assert_eq!(
        scope.resolve("Page.Settings", 0),
        Some(Resolved::Type("Acme.Web.Models.Page+Settings".to_string()))
    );
    // `System` is captured by Acme.Web.System here.
    assert_eq!(scope.resolve("System.Text.StringBuilder", 0), None);
    assert_eq!(
        scope.resolve("global::System.Text.StringBuilder", 0),
        Some(Resolved::Type("System.Text.StringBuilder".to_string()))
    );
}

#[test]
fn unknown_using_fails_validation() {
    let table = table();
    let scope = Scope::new(&table, "Acme", usings(&["Missing.Assembly"]));
    assert_eq!(
        scope.validate(),
        Err("`using Missing.Assembly;` does not name anything in the referenced assemblies".to_string())
    );
}

#[test]
fn using_directive_parsing() {
    assert_eq!(UsingDirective::parse("System"), UsingDirective::Namespace("System".to_string()));
    assert_eq!(
        UsingDirective::parse("X = A.B"),
        UsingDirective::Alias {
            alias: "X".to_string(),
            target: "A.B".to_string()
        }
    );
    assert_eq!(UsingDirective::parse("static A.B"), UsingDirective::Static("A.B".to_string()));
    assert_eq!(UsingDirective::parse("static A.B").to_string(), "using static A.B;");
}
