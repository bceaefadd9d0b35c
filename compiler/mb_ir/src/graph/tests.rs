use super::*;
use crate::testing::{content_type, graph};
use crate::{ContentKind, PropertyRef};
use pretty_assertions::assert_eq;

#[test]
fn links_parents_and_marks_mixins() {
    let graph = graph(vec![
        content_type(10, "seo").property("metaTitle", "string").build(),
        content_type(20, "page").mixin(10).build(),
        content_type(30, "newsPage").parent(20).build(),
    ]);

    let seo = graph.find_by_alias("SEO").unwrap_or_else(|| panic!("seo missing"));
    let page = graph.find_by_alias("page").unwrap_or_else(|| panic!("page missing"));
    let news = graph.find_by_alias("newsPage").unwrap_or_else(|| panic!("news missing"));

    assert!(graph.get(seo).is_mixin);
    assert!(!graph.get(page).is_mixin);
    assert_eq!(graph.get(page).mixins, vec![seo]);
    assert_eq!(graph.get(news).base, Some(page));
    assert_eq!(
        graph.ancestors(news).map(|ty| ty.alias.as_str()).collect::<Vec<_>>(),
        vec!["page"]
    );
}

#[test]
fn ancestors_of_mixins_are_mixins() {
    let graph = graph(vec![
        content_type(1, "root").build(),
        content_type(2, "base").parent(1).build(),
        content_type(3, "seo").parent(2).build(),
        content_type(4, "page").mixin(3).build(),
        content_type(5, "other").parent(1).build(),
    ]);
    let mixins: Vec<&str> = graph
        .iter()
        .filter(|ty| ty.is_mixin)
        .map(|ty| ty.alias.as_str())
        .collect();
    assert_eq!(mixins, vec!["root", "base", "seo"]);
}

#[test]
fn parent_id_zero_means_no_parent() {
    let graph = graph(vec![content_type(1, "root").parent(0).build()]);
    assert_eq!(graph.get(ContentTypeId::new(0)).base, None);
}

#[test]
fn duplicate_aliases_are_reported_case_insensitively() {
    let result = TypeModelGraph::from_descriptors(vec![
        content_type(1, "page").build(),
        content_type(2, "Page").build(),
    ]);
    assert_eq!(
        result.map(|g| g.len()),
        Err(Error::DuplicateName {
            kind: NameKind::ContentType,
            collisions: vec![(
                "page".to_string(),
                vec!["page".to_string(), "Page".to_string()]
            )],
        })
    );
}

#[test]
fn dangling_parent_is_rejected() {
    let result = TypeModelGraph::from_descriptors(vec![content_type(1, "page").parent(99).build()]);
    assert!(matches!(
        result,
        Err(Error::Panic(message)) if message.contains("unknown parent id 99")
    ));
}

#[test]
fn inheritance_cycle_is_rejected() {
    let result = TypeModelGraph::from_descriptors(vec![
        content_type(1, "a").parent(2).build(),
        content_type(2, "b").parent(1).build(),
    ]);
    assert!(matches!(result, Err(Error::Panic(message)) if message.contains("cycle")));
}

#[test]
fn expanded_properties_skip_ignored_and_provided() {
    let mut graph = graph(vec![
        content_type(1, "mixin")
            .property("a", "string")
            .property("b", "string")
            .build(),
        content_type(2, "page")
            .kind(ContentKind::Content)
            .mixin(1)
            .property("c", "int")
            .property("d", "int")
            .build(),
    ]);
    let mixin = ContentTypeId::new(0);
    let page = ContentTypeId::new(1);
    graph.get_mut(page).properties[1].is_ignored = true;
    graph.get_mut(page).implementing_interfaces = vec![mixin];
    graph.get_mut(page).ignored_mixin_properties = vec![PropertyRef::new(mixin, 1)];

    assert_eq!(
        graph.expanded_properties(page),
        vec![PropertyRef::new(page, 0), PropertyRef::new(mixin, 0)]
    );
}
