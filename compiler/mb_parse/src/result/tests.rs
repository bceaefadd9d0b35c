use super::*;
use pretty_assertions::assert_eq;

fn result(directives: Vec<Directive>) -> ParseResult {
    ParseResult::from_directives(&directives)
}

#[test]
fn content_ignore_uses_patterns() {
    let result = result(vec![Directive::IgnoreContent(AliasPattern::parse("type*"))]);
    assert!(result.is_ignored_content("type1"));
    assert!(result.is_ignored_content("TYPE2"));
    assert!(!result.is_ignored_content("ttype3"));
}

#[test]
fn implement_renames_and_marks() {
    let result = result(vec![
        Directive::RenameContent {
            alias: "home".to_string(),
            clr_name: "HomePage".to_string(),
        },
        Directive::ImplementContent {
            alias: "News".to_string(),
            clr_name: "NewsItem".to_string(),
        },
    ]);
    assert_eq!(result.content_clr_name("Home"), Some("HomePage"));
    assert_eq!(result.content_clr_name("news"), Some("NewsItem"));
    assert!(result.has_implement("news"));
    assert!(!result.has_implement("home"));
}

#[test]
fn property_rules_follow_developer_base_classes() {
    let result = result(vec![
        Directive::BaseClass {
            class: "Page".to_string(),
            base: "PageBase".to_string(),
        },
        Directive::IgnoreProperty {
            class: "PageBase".to_string(),
            pattern: AliasPattern::parse("seo*"),
        },
        Directive::RenameProperty {
            class: "PageBase".to_string(),
            alias: "title".to_string(),
            clr_name: "BaseTitle".to_string(),
        },
        Directive::RenameProperty {
            class: "Page".to_string(),
            alias: "Title".to_string(),
            clr_name: "PageTitle".to_string(),
        },
    ]);
    assert!(result.is_ignored_property("Page", "seoTitle"));
    assert!(!result.is_ignored_property("Page", "title"));
    assert_eq!(result.property_clr_name("Page", "title"), Some("PageTitle"));
    assert_eq!(result.property_clr_name("PageBase", "title"), Some("BaseTitle"));
    assert_eq!(result.property_clr_name("Other", "title"), None);
}

#[test]
fn base_chain_cycles_terminate() {
    let result = result(vec![
        Directive::BaseClass {
            class: "A".to_string(),
            base: "B".to_string(),
        },
        Directive::BaseClass {
            class: "B".to_string(),
            base: "A".to_string(),
        },
    ]);
    assert!(!result.is_ignored_property("A", "x"));
}

#[test]
fn settings_and_members() {
    let result = result(vec![
        Directive::Namespace("My.Models".to_string()),
        Directive::Using("My.Helpers".to_string()),
        Directive::Using("My.Helpers".to_string()),
        Directive::ModelInfosClass("Infos".to_string()),
        Directive::Constructor {
            class: "Page".to_string(),
        },
        Directive::ExtensionImplemented {
            class: "Page".to_string(),
            property: "Title".to_string(),
        },
        Directive::Interfaces {
            class: "Page".to_string(),
            interfaces: vec!["IFoo".to_string()],
        },
        Directive::Interfaces {
            class: "Page".to_string(),
            interfaces: vec!["IFoo".to_string(), "IBar".to_string()],
        },
    ]);
    assert_eq!(result.namespace(), Some("My.Models"));
    assert_eq!(result.usings(), ["My.Helpers".to_string()]);
    assert_eq!(result.model_infos_class(), Some("Infos"));
    assert!(result.has_ctor("Page"));
    assert!(result.is_extension_implemented("Page", "Title"));
    assert!(!result.is_extension_implemented("Page", "Body"));
    assert_eq!(result.interfaces("Page"), ["IFoo".to_string(), "IBar".to_string()]);
    assert!(result.interfaces("Other").is_empty());
}
