//! Developer code, host types and the writer together.

use mb_build::build;
use mb_codegen::{write_models, GeneratedFile};
use mb_ir::testing::{content_type, graph};
use mb_ir::{Config, ContentTypeDescriptor};
use mb_parse::{parse, SourceFile};
use mb_symbols::{builtin_references, SymbolTable};
use pretty_assertions::assert_eq;

fn generate(
    descriptors: Vec<ContentTypeDescriptor>,
    sources: &[(&str, &str)],
) -> Vec<GeneratedFile> {
    let files: Vec<SourceFile> = sources
        .iter()
        .map(|(name, text)| SourceFile::new(*name, *text))
        .collect();
    let parsed = parse(&files, &[]).unwrap_or_else(|e| panic!("{e}"));
    let config = Config::default().with_generator_version("1.0.0");
    let model =
        build(graph(descriptors), &parsed.result, &config).unwrap_or_else(|e| panic!("{e}"));

    let mut references = SymbolTable::from_symbols(builtin_references());
    references.extend(parsed.declared.iter().cloned());
    write_models(&model, &config, references).unwrap_or_else(|e| panic!("{e}"))
}

fn text<'a>(files: &'a [GeneratedFile], name: &str) -> &'a str {
    files
        .iter()
        .find(|file| file.name == name)
        .map_or_else(|| panic!("no file {name}"), |file| file.text.as_str())
}

const USES_SYSTEM_TEXT: &str = r#"
[assembly: Umbraco.ModelsBuilder.ModelsUsing("System.Text")]
"#;

const SHADOWING_BUILDER: &str = r"
namespace Umbraco.Web.PublishedModels
{
    public class StringBuilder
    {
    }
}
";

fn builder_page() -> Vec<ContentTypeDescriptor> {
    vec![content_type(1, "page")
        .property("buffer", "System.Text.StringBuilder")
        .build()]
}

#[test]
fn imported_type_is_spelled_by_its_simple_name() {
    let files = generate(builder_page(), &[("Usings.cs", USES_SYSTEM_TEXT)]);
    let page = text(&files, "Page.generated.cs");
    assert!(page.contains("using System.Text;\n"));
    assert!(page.contains("public StringBuilder Buffer => this.GetBuffer();"));
}

#[test]
fn shadowed_type_is_never_spelled_by_its_simple_name() {
    let files = generate(
        builder_page(),
        &[("Usings.cs", USES_SYSTEM_TEXT), ("StringBuilder.cs", SHADOWING_BUILDER)],
    );
    let page = text(&files, "Page.generated.cs");
    assert!(page.contains("public System.Text.StringBuilder Buffer => this.GetBuffer();"));
    assert!(!page.contains(" StringBuilder "));
}

const PARTIAL_NEWS: &str = r#"
using Umbraco.Core.Models.PublishedContent;
using Umbraco.ModelsBuilder;

[assembly: ModelsNamespace("Site.Models")]
[assembly: IgnoreContentType("legacy*")]

namespace Site.Models
{
    [RenameContentType("newsItem")]
    public partial class NewsArticle
    {
        public NewsArticle(IPublishedContent content) : base(content) { }

        [ImplementPropertyType("summary")]
        public string Summary => "";
    }

    public static class NewsArticleExtensions2
    {
        public static string GetHeadline(this NewsArticle that, string culture, string segment) => "";
    }
}
"#;

#[test]
fn developer_code_reshapes_the_generated_files() {
    let files = generate(
        vec![
            content_type(1, "legacyPage").build(),
            content_type(2, "newsItem")
                .property("headline", "string")
                .property("summary", "string")
                .build(),
        ],
        &[("NewsArticle.cs", PARTIAL_NEWS)],
    );
    let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, vec!["NewsArticle.generated.cs", "ModelInfos.generated.cs"]);

    let news = text(&files, "NewsArticle.generated.cs");
    assert!(news.contains("namespace Site.Models\n"));
    assert!(news.contains("[PublishedModel(\"newsItem\")]"));
    assert!(news.contains("    public partial class NewsArticle : PublishedContentModel\n"));
    assert!(!news.contains("// ctor"));
    assert!(!news.contains("Summary"));
    assert!(!news.contains("NewsArticleExtensions"));
    assert!(news.contains("public string Headline => this.GetHeadline();"));

    let infos = text(&files, "ModelInfos.generated.cs");
    assert!(infos.contains("[\"newsItem\"] = typeof(Site.Models.NewsArticle),"));
    assert!(!infos.contains("legacy"));
}
