use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parses_plain_and_keyword_names() {
    assert_eq!(ClrType::parse("System.String"), Ok(ClrType::string()));
    assert_eq!(ClrType::parse("int"), Ok(ClrType::int()));
    assert_eq!(ClrType::int().keyword(), Some("int"));
    assert_eq!(ClrType::named("System.Text.StringBuilder").keyword(), None);
}

#[test]
fn parses_generics_with_arity() {
    let ty = ClrType::parse(
        "System.Collections.Generic.IEnumerable<Umbraco.Core.Models.PublishedContent.IPublishedContent>",
    );
    assert_eq!(
        ty,
        Ok(ClrType::Named {
            full_name: "System.Collections.Generic.IEnumerable`1".to_string(),
            args: vec![ClrType::named(
                "Umbraco.Core.Models.PublishedContent.IPublishedContent"
            )],
        })
    );

    let dict = ClrType::parse("System.Collections.Generic.Dictionary<string, int?>");
    assert_eq!(
        dict,
        Ok(ClrType::generic(
            "System.Collections.Generic.Dictionary",
            vec![ClrType::string(), ClrType::Nullable(Box::new(ClrType::int()))],
        ))
    );
}

#[test]
fn parses_suffixes_and_model_references() {
    assert_eq!(
        ClrType::parse("model:newsItem[]"),
        Ok(ClrType::Array(Box::new(ClrType::ModelAlias("newsItem".to_string()))))
    );
    assert_eq!(
        ClrType::parse("System.DateTime?"),
        Ok(ClrType::Nullable(Box::new(ClrType::named("System.DateTime"))))
    );
}

#[test]
fn rejects_malformed_text() {
    assert!(ClrType::parse("").is_err());
    assert!(ClrType::parse("List<int").is_err());
    assert!(ClrType::parse("model:").is_err());
    assert!(ClrType::parse("System.String )").is_err());
}

#[test]
fn maps_model_aliases_recursively() {
    let mut ty = ClrType::parse("System.Collections.Generic.IEnumerable<model:page>")
        .unwrap_or_else(|e| panic!("{e}"));
    let result: Result<(), String> = ty.try_map_model_aliases(&mut |alias| {
        assert_eq!(alias, "page");
        Ok(ContentTypeId::new(3))
    });
    assert_eq!(result, Ok(()));
    assert_eq!(
        ty,
        ClrType::generic(
            "System.Collections.Generic.IEnumerable",
            vec![ClrType::Model(ContentTypeId::new(3))],
        )
    );
}

#[test]
fn splits_namespaces_and_nesting() {
    assert_eq!(
        split_full_name("A.B.Outer+Inner"),
        (Some("A.B"), vec!["Outer", "Inner"])
    );
    assert_eq!(split_full_name("Global"), (None, vec!["Global"]));
    assert_eq!(strip_arity("IEnumerable`1"), ("IEnumerable", 1));
    assert_eq!(strip_arity("String"), ("String", 0));
}
