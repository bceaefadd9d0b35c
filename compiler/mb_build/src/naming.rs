//! CLR names from aliases and display names.

use mb_ir::NamingStrategy;

/// Reserved C# keywords; an identifier spelling one needs an `@` prefix.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// CLR name for a content type or property.
pub fn clr_name(strategy: NamingStrategy, alias: &str, name: &str) -> String {
    let raw = match strategy {
        NamingStrategy::RawAlias => sanitize(alias),
        NamingStrategy::AliasPascalCased => pascal_case(alias),
        NamingStrategy::NameDerived => pascal_case(name),
    };
    escape(raw)
}

/// Replace every character that cannot appear in an identifier with `_`.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Split on non-alphanumeric characters and capitalize each segment.
///
/// `my-page_type` becomes `MyPageType`; `blogPost` becomes `BlogPost`.
fn pascal_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in text.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn escape(name: String) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    if !name.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        return format!("_{name}");
    }
    if CSHARP_KEYWORDS.contains(&name.as_str()) {
        return format!("@{name}");
    }
    name
}
