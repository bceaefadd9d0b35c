use mb_diagnostic::{Error, ErrorCode};
use mb_symbols::{builtin_references, Symbol, SymbolKind, SymbolTable};
use pretty_assertions::assert_eq;

use super::*;

const STRING_BUILDER: &str = "System.Text.StringBuilder";

fn resolver(extra: &[&str]) -> AmbiguityResolver {
    let mut table = SymbolTable::from_symbols(builtin_references());
    table.extend(extra.iter().map(|name| Symbol::new(*name, SymbolKind::Class)));
    AmbiguityResolver::new(table)
}

fn usings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn spelled(
    resolver: &mut AmbiguityResolver,
    full_name: &str,
    namespace: &str,
    using: &[&str],
) -> String {
    resolver
        .resolve(full_name, namespace, &usings(using))
        .unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn imported_type_uses_simple_name() {
    let mut resolver = resolver(&[]);
    assert_eq!(
        spelled(&mut resolver, STRING_BUILDER, "Acme.Web", &["System.Text"]),
        "StringBuilder"
    );
}

#[test]
fn shadowing_type_in_target_namespace_forces_qualification() {
    let mut resolver = resolver(&["Acme.Web.StringBuilder"]);
    assert_eq!(
        spelled(&mut resolver, STRING_BUILDER, "Acme.Web", &["System.Text"]),
        "System.Text.StringBuilder"
    );
    assert_eq!(
        spelled(&mut resolver, "Acme.Web.StringBuilder", "Acme.Web", &["System.Text"]),
        "StringBuilder"
    );
}

#[test]
fn captured_root_namespace_forces_global() {
    let mut resolver = resolver(&["Acme.Web.StringBuilder", "Acme.Web.System.Helper"]);
    assert_eq!(
        spelled(&mut resolver, STRING_BUILDER, "Acme.Web", &["System.Text"]),
        "global::System.Text.StringBuilder"
    );
}

#[test]
fn type_outside_usings_is_qualified() {
    let mut resolver = resolver(&[]);
    assert_eq!(
        spelled(&mut resolver, STRING_BUILDER, "Acme.Web", &["System"]),
        "System.Text.StringBuilder"
    );
}

#[test]
fn ambiguous_imports_are_qualified() {
    let mut resolver = resolver(&["Acme.Html.HtmlString"]);
    assert_eq!(
        spelled(
            &mut resolver,
            "System.Web.HtmlString",
            "Acme.Web",
            &["System.Web", "Acme.Html"]
        ),
        "System.Web.HtmlString"
    );
}

#[test]
fn parent_namespaces_are_in_scope() {
    let mut resolver = resolver(&["Acme.Shared"]);
    assert_eq!(spelled(&mut resolver, "Acme.Shared", "Acme.Web.Models", &[]), "Shared");
}

#[test]
fn unknown_types_keep_the_callers_spelling() {
    let mut resolver = resolver(&[]);
    assert_eq!(
        spelled(&mut resolver, "Vendor.Lib.Widget", "Acme.Web", &["System"]),
        "Vendor.Lib.Widget"
    );
}

#[test]
fn nested_types_spell_their_containing_chain() {
    let mut resolver = resolver(&["Acme.Lib.Outer+Inner", "Acme.Web.Outer"]);
    assert_eq!(
        spelled(&mut resolver, "Acme.Lib.Outer+Inner", "Acme.Other", &["Acme.Lib"]),
        "Outer.Inner"
    );
    assert_eq!(
        spelled(&mut resolver, "Acme.Lib.Outer+Inner", "Acme.Web", &["Acme.Lib"]),
        "Acme.Lib.Outer.Inner"
    );
}

#[test]
fn generic_definitions_drop_arity() {
    let mut resolver = resolver(&[]);
    assert_eq!(
        spelled(
            &mut resolver,
            "System.Collections.Generic.IEnumerable`1",
            "Acme.Web",
            &["System.Collections.Generic"]
        ),
        "IEnumerable"
    );
}

#[test]
fn enclosing_members_shadow_models() {
    let mut resolver = resolver(&["Acme.Web.Page", "Acme.Web.ModelInfos+Page"]);
    let members = vec!["Acme.Web.ModelInfos+Page".to_string()];
    let spelling = resolver
        .resolve_in("Acme.Web.Page", "Acme.Web", &[], &members)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(spelling, "Acme.Web.Page");
    assert_eq!(spelled(&mut resolver, "Acme.Web.Page", "Acme.Web", &[]), "Page");
}

#[test]
fn unknown_using_fails() {
    let mut resolver = resolver(&[]);
    let err = resolver
        .resolve(STRING_BUILDER, "Acme.Web", &usings(&["Missing.Namespace"]))
        .err();
    assert_eq!(
        err,
        Some(Error::AmbiguityResolution(
            "`using Missing.Namespace;` does not name anything in the referenced assemblies"
                .to_string()
        ))
    );
    assert_eq!(err.map(|e| e.code()), Some(ErrorCode::E3001));
}

#[test]
fn spellings_depend_on_the_namespace() {
    let mut resolver = resolver(&["Acme.Blog.StringBuilder"]);
    assert_eq!(
        spelled(&mut resolver, STRING_BUILDER, "Acme.Shop", &["System.Text"]),
        "StringBuilder"
    );
    assert_eq!(
        spelled(&mut resolver, STRING_BUILDER, "Acme.Blog", &["System.Text"]),
        "System.Text.StringBuilder"
    );
}
