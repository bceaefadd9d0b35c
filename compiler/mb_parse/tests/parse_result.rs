//! Developer files to builder queries, end to end.

use mb_parse::{parse, SourceFile};
use pretty_assertions::assert_eq;

const SITE_FILES: [(&str, &str); 2] = [
    (
        "Models/PageBase.cs",
        r#"
using Umbraco.Core.Models.PublishedContent;
using Umbraco.ModelsBuilder;

namespace Site.Models
{
    [IgnorePropertyType("umbraco*")]
    [RenamePropertyType("pageTitle", "Heading")]
    public abstract class PageBase : PublishedContentModel
    {
        protected PageBase(IPublishedContent content) : base(content) { }
    }
}
"#,
    ),
    (
        "Models/Article.cs",
        r#"
using Umbraco.ModelsBuilder;

[assembly: ModelsNamespace("Site.Models")]
[assembly: IgnoreContentType("legacy*")]

namespace Site.Models
{
    [ImplementContentType("article")]
    public partial class Article : PageBase
    {
        public Article(IPublishedContent content) : base(content) { }

        [ImplementPropertyType("summary")]
        public string Summary => "";
    }

    public static class ArticleExtensions
    {
        public static string GetBody(this Article that, string culture = null, string segment = null)
            => null;
    }
}
"#,
    ),
];

#[test]
fn site_overrides() {
    let files: Vec<SourceFile> = SITE_FILES
        .iter()
        .map(|(name, text)| SourceFile::new(*name, *text))
        .collect();
    let parsed = parse(&files, &[]).unwrap_or_else(|e| panic!("{e}"));
    let result = &parsed.result;

    assert_eq!(result.namespace(), Some("Site.Models"));
    assert!(result.is_ignored_content("legacyPage"));
    assert!(!result.is_ignored_content("article"));
    assert_eq!(result.content_clr_name("Article"), Some("Article"));
    assert!(result.has_implement("article"));

    assert!(result.has_base("Article"));
    assert_eq!(result.base_class("Article"), Some("PageBase"));
    assert!(result.has_ctor("Article"));
    assert!(result.has_ctor("PageBase"));

    // Rules on PageBase reach Article through the declared base class.
    assert!(result.is_ignored_property("Article", "umbracoNaviHide"));
    assert!(result.is_ignored_property("Article", "summary"));
    assert!(!result.is_ignored_property("PageBase", "summary"));
    assert_eq!(result.property_clr_name("Article", "pageTitle"), Some("Heading"));
    assert!(result.is_extension_implemented("Article", "Body"));

    let declared: Vec<&str> = parsed
        .declared
        .iter()
        .map(|symbol| symbol.full_name.as_str())
        .collect();
    assert_eq!(
        declared,
        vec!["Site.Models.PageBase", "Site.Models.Article", "Site.Models.ArticleExtensions"]
    );
}

#[test]
fn syntax_errors_name_the_file() {
    let files = [
        SourceFile::new("Good.cs", "class A { }"),
        SourceFile::new("Bad.cs", "class B {\n  void M( { }\n"),
    ];
    let err = parse(&files, &[]).unwrap_err();
    assert!(err.to_string().starts_with("Bad.cs:2: "), "{err}");
}
