use crate::{parse, Directive, SourceFile};
use mb_diagnostic::ErrorCode;
use mb_ir::{AliasPattern, BaseClassRule, ContentKind};
use mb_symbols::{Symbol, SymbolKind};
use pretty_assertions::assert_eq;

fn directives(files: &[(&str, &str)], references: &[Symbol]) -> Vec<Directive> {
    let files: Vec<SourceFile> = files
        .iter()
        .map(|(name, text)| SourceFile::new(*name, *text))
        .collect();
    parse(&files, references)
        .unwrap_or_else(|e| panic!("{e}"))
        .directives
}

fn error(files: &[(&str, &str)]) -> mb_diagnostic::Error {
    let files: Vec<SourceFile> = files
        .iter()
        .map(|(name, text)| SourceFile::new(*name, *text))
        .collect();
    match parse(&files, &[]) {
        Ok(parsed) => panic!("expected an error, got {:?}", parsed.directives),
        Err(err) => err,
    }
}

fn s(text: &str) -> String {
    text.to_string()
}

#[test]
fn assembly_markers() {
    let directives = directives(
        &[(
            "Settings.cs",
            r#"
using Umbraco.ModelsBuilder;
[assembly: IgnoreContentType("type*")]
[assembly: RenameContentType("home", "HomePage")]
[assembly: ModelsNamespace("My.Models")]
[assembly: ModelsUsing("My.Helpers")]
[assembly: Umbraco.ModelsBuilder.ModelInfosClassAttribute("Infos")]
[assembly: System.Reflection.AssemblyTitle("not ours")]
"#,
        )],
        &[],
    );
    assert_eq!(
        directives,
        vec![
            Directive::IgnoreContent(AliasPattern::parse("type*")),
            Directive::RenameContent {
                alias: s("home"),
                clr_name: s("HomePage"),
            },
            Directive::Namespace(s("My.Models")),
            Directive::Using(s("My.Helpers")),
            Directive::ModelInfosClass(s("Infos")),
        ]
    );
}

#[test]
fn class_and_property_markers() {
    let directives = directives(
        &[(
            "Page.cs",
            r#"
namespace My.Models
{
    [ImplementContentType("page")]
    [IgnorePropertyType("seo*")]
    [RenamePropertyType("bodyText", "Body")]
    [Serializable]
    public partial class Page
    {
        [ImplementPropertyType("title")]
        public string Title => "x";
    }

    [RenameContentType("newsItem")]
    public partial class News { }
}
"#,
        )],
        &[],
    );
    assert_eq!(
        directives,
        vec![
            Directive::ImplementContent {
                alias: s("page"),
                clr_name: s("Page"),
            },
            Directive::IgnoreProperty {
                class: s("Page"),
                pattern: AliasPattern::parse("seo*"),
            },
            Directive::RenameProperty {
                class: s("Page"),
                alias: s("bodyText"),
                clr_name: s("Body"),
            },
            Directive::IgnoreProperty {
                class: s("Page"),
                pattern: AliasPattern::parse("title"),
            },
            Directive::RenameContent {
                alias: s("newsItem"),
                clr_name: s("News"),
            },
        ]
    );
}

const XML_NODE_FILE: &str = "
using System.Xml;
namespace My.Models
{
    public partial class Page : IHasXmlNode { }
}
";

#[test]
fn unresolved_first_base_is_a_base_class() {
    let directives = directives(&[("Page.cs", XML_NODE_FILE)], &[]);
    assert_eq!(
        directives,
        vec![Directive::BaseClass {
            class: s("Page"),
            base: s("IHasXmlNode"),
        }]
    );
}

#[test]
fn referenced_interface_is_not_a_base_class() {
    let references = [Symbol::new("System.Xml.IHasXmlNode", SymbolKind::Interface)];
    let directives = directives(&[("Page.cs", XML_NODE_FILE)], &references);
    assert_eq!(
        directives,
        vec![Directive::Interfaces {
            class: s("Page"),
            interfaces: vec![s("System.Xml.IHasXmlNode")],
        }]
    );
}

#[test]
fn global_usings_reach_every_file() {
    let references = [Symbol::new("System.Xml.IHasXmlNode", SymbolKind::Interface)];
    let page = "namespace My.Models { public partial class Page : IHasXmlNode { } }";
    let directives = directives(
        &[("Usings.cs", "global using System.Xml;"), ("Page.cs", page)],
        &references,
    );
    assert_eq!(
        directives,
        vec![Directive::Interfaces {
            class: s("Page"),
            interfaces: vec![s("System.Xml.IHasXmlNode")],
        }]
    );
}

#[test]
fn developer_types_take_part_in_resolution() {
    let directives = directives(
        &[(
            "Page.cs",
            "namespace My.Models
{
    public interface IRoutable { }
    public class PageBase : PublishedContentModel { public PageBase(IPublishedContent c) : base(c) { } }
    public partial class Page : PageBase, IRoutable { }
    public partial class Plain : object { }
    public partial class Tagged : IRoutable, IMissing { }
}",
        )],
        &[],
    );
    assert_eq!(
        directives,
        vec![
            Directive::BaseClass {
                class: s("PageBase"),
                base: s("PublishedContentModel"),
            },
            Directive::Constructor { class: s("PageBase") },
            Directive::BaseClass {
                class: s("Page"),
                base: s("PageBase"),
            },
            Directive::Interfaces {
                class: s("Page"),
                interfaces: vec![s("My.Models.IRoutable")],
            },
            Directive::Interfaces {
                class: s("Tagged"),
                interfaces: vec![s("My.Models.IRoutable"), s("IMissing")],
            },
        ]
    );
}

#[test]
fn nested_types_shadow_outer_names() {
    let parsed = parse(
        &[SourceFile::new(
            "Outer.cs",
            "namespace N { class Inner { } class Outer { class Inner { } class Sub : Inner { } } }",
        )],
        &[],
    )
    .unwrap_or_else(|e| panic!("{e}"));
    assert!(parsed
        .declared
        .contains(&Symbol::new("N.Outer+Inner", SymbolKind::Class)));
    assert_eq!(
        parsed.directives,
        vec![Directive::BaseClass {
            class: s("Sub"),
            base: s("Inner"),
        }]
    );
}

#[test]
fn conflicting_partial_bases() {
    let err = error(&[
        ("A.cs", "namespace N { partial class Page : BaseA { } }"),
        ("B.cs", "namespace N {\n partial class Page : BaseB { } }"),
    ]);
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(
        err.to_string(),
        "B.cs:2: partial class `Page` declares base class `BaseB`, but `BaseA` at A.cs:1"
    );
}

#[test]
fn agreeing_partial_bases() {
    let directives = directives(
        &[
            ("A.cs", "namespace N { partial class Page : BaseA { } }"),
            ("B.cs", "namespace N { partial class Page : BaseA { } }"),
        ],
        &[],
    );
    assert_eq!(directives.len(), 2);
}

#[test]
fn constructors_and_extension_accessors() {
    let directives = directives(
        &[(
            "Page.cs",
            "namespace N
{
    public partial class Page
    {
        public Page(Umbraco.Core.Models.PublishedContent.IPublishedContent content) : base(content) { }
        public Page(string other) { }
    }
    public partial class Block { public Block(IPublishedElement e, int x) : base(e) { } }
    public static class PageExtensions
    {
        public static string GetTitle(this Page that, string culture = null, string segment = null) => null;
        public static string GetBody(this Page that, string culture) => null;
        public string GetNope(Page that, string a, string b) => null;
        public static int Summary(this IMixin that, System.String c, String s) => 0;
    }
}",
        )],
        &[],
    );
    assert_eq!(
        directives,
        vec![
            Directive::Constructor { class: s("Page") },
            Directive::ExtensionImplemented {
                class: s("Page"),
                property: s("Title"),
            },
            Directive::ExtensionImplemented {
                class: s("IMixin"),
                property: s("Summary"),
            },
        ]
    );
}

#[test]
fn models_base_class_rules() {
    let directives = directives(
        &[(
            "Bases.cs",
            r#"
using My.Bases;
[assembly: ModelsBaseClass(typeof(CustomBase))]
[assembly: ModelsBaseClass(typeof(MediaBase), PublishedItemType.Media, "image*", Force = true)]
namespace My.Bases
{
    public class CustomBase { }
    public class MediaBase { }
}
"#,
        )],
        &[],
    );
    assert_eq!(
        directives[..2],
        [
            Directive::ModelsBaseClass(BaseClassRule::new("My.Bases.CustomBase")),
            Directive::ModelsBaseClass(
                BaseClassRule::new("My.Bases.MediaBase")
                    .for_kind(ContentKind::Media)
                    .for_aliases("image*")
                    .forced()
            ),
        ]
    );
}

#[test]
fn bad_marker_arguments() {
    let err = error(&[("A.cs", "[assembly: RenameContentType(\"home\")]")]);
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(
        err.to_string(),
        "A.cs:1: `RenameContentType` expects 2 string argument(s), found 1"
    );

    let err = error(&[("A.cs", "[assembly: IgnoreContentType(42)]")]);
    assert_eq!(
        err.to_string(),
        "A.cs:1: `IgnoreContentType` arguments must be non-empty string constants"
    );

    let err = error(&[("A.cs", "\n[assembly: ModelsBaseClass(\"Nope\")]")]);
    assert_eq!(
        err.to_string(),
        "A.cs:2: `ModelsBaseClass` expects `typeof(BaseClass)` as its first argument"
    );
}

#[test]
fn misplaced_markers() {
    let err = error(&[("A.cs", "[IgnoreContentType(\"x\")] class A { }")]);
    assert_eq!(err.to_string(), "A.cs:1: `IgnoreContentType` cannot be applied to a class");

    let err = error(&[("A.cs", "class A { [IgnorePropertyType(\"x\")] public int X { get; } }")]);
    assert_eq!(
        err.to_string(),
        "A.cs:1: `IgnorePropertyType` cannot be applied to a property"
    );
}

#[test]
fn empty_input_has_no_directives() {
    assert!(directives(&[], &[]).is_empty());
    assert!(directives(&[("Empty.cs", "// nothing here\n")], &[]).is_empty());
}
