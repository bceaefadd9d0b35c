//! Developer files flowing into the code model.

use mb_build::build;
use mb_ir::testing::{content_type, graph};
use mb_ir::{Config, ContentTypeId};
use mb_parse::{parse, SourceFile};
use pretty_assertions::assert_eq;

const PAGE_BASE: &str = r#"
using Umbraco.Core.Models.PublishedContent;
using Umbraco.ModelsBuilder;

[assembly: IgnoreContentType("legacy*")]
[assembly: ModelsNamespace("Site.Models")]

namespace Site.Models
{
    [IgnorePropertyType("umbracoNaviHide")]
    public partial class Page : PublishedContentModel
    {
        public Page(IPublishedContent content) : base(content) { }
    }

    [RenameContentType("newsItem")]
    public partial class NewsArticle
    {
        [ImplementPropertyType("metaTitle")]
        public string MetaTitle => Name;
    }
}
"#;

#[test]
fn developer_overrides_shape_the_model() {
    let parsed = parse(&[SourceFile::new("Models/Page.cs", PAGE_BASE)], &[])
        .unwrap_or_else(|e| panic!("{e}"));
    let graph = graph(vec![
        content_type(1, "seo").property("metaTitle", "string").build(),
        content_type(2, "page")
            .property("umbracoNaviHide", "bool")
            .property("title", "string")
            .build(),
        content_type(3, "newsItem").parent(2).mixin(1).build(),
        content_type(4, "legacyPage").build(),
        content_type(5, "legacyChild").parent(4).build(),
    ]);

    let output = build(graph, &parsed.result, &Config::default()).unwrap_or_else(|e| panic!("{e}"));
    let graph = &output.graph;
    let page = graph.get(ContentTypeId::new(1));
    assert!(page.has_base);
    assert!(page.has_ctor);
    assert!(page.properties[0].is_ignored);
    assert!(!page.properties[1].is_ignored);

    let news = graph.get(ContentTypeId::new(2));
    assert_eq!(news.clr_name, "NewsArticle");
    assert!(news.is_renamed);
    assert!(!news.has_base);
    assert_eq!(news.base_class_name, "Page");
    assert_eq!(news.declaring_interfaces, vec![ContentTypeId::new(0)]);
    assert!(graph.expanded_properties(news.id).is_empty());

    let live: Vec<&str> = graph.live_types().map(|ty| ty.alias.as_str()).collect();
    assert_eq!(live, vec!["seo", "page", "newsItem"]);
    assert_eq!(output.namespace, "Site.Models");
}
