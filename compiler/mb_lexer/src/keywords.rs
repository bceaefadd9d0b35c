//! Reserved keyword lookup.

use crate::Keyword;

/// Predefined type keywords, in their C# spelling.
pub const PREDEFINED_TYPES: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "float", "int", "long", "object", "sbyte",
    "short", "string", "uint", "ulong", "ushort",
];

const OTHER_RESERVED: &[&str] = &[
    "as", "base", "break", "case", "catch", "checked", "continue", "default", "do", "else",
    "false", "finally", "fixed", "for", "foreach", "goto", "if", "in", "is", "lock", "null",
    "return", "sizeof", "stackalloc", "switch", "throw", "true", "try", "typeof", "unchecked",
    "while",
];

/// Keyword for `text`, or `None` for an identifier.
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    let keyword = match text {
        "abstract" => Keyword::Abstract,
        "class" => Keyword::Class,
        "const" => Keyword::Const,
        "delegate" => Keyword::Delegate,
        "enum" => Keyword::Enum,
        "event" => Keyword::Event,
        "explicit" => Keyword::Explicit,
        "extern" => Keyword::Extern,
        "implicit" => Keyword::Implicit,
        "interface" => Keyword::Interface,
        "internal" => Keyword::Internal,
        "namespace" => Keyword::Namespace,
        "new" => Keyword::New,
        "operator" => Keyword::Operator,
        "out" => Keyword::Out,
        "override" => Keyword::Override,
        "params" => Keyword::Params,
        "private" => Keyword::Private,
        "protected" => Keyword::Protected,
        "public" => Keyword::Public,
        "readonly" => Keyword::Readonly,
        "ref" => Keyword::Ref,
        "sealed" => Keyword::Sealed,
        "static" => Keyword::Static,
        "struct" => Keyword::Struct,
        "this" => Keyword::This,
        "unsafe" => Keyword::Unsafe,
        "using" => Keyword::Using,
        "virtual" => Keyword::Virtual,
        "void" => Keyword::Void,
        "volatile" => Keyword::Volatile,
        _ => {
            if let Some(predefined) = PREDEFINED_TYPES.iter().find(|name| **name == text) {
                Keyword::Predefined(predefined)
            } else if OTHER_RESERVED.contains(&text) {
                Keyword::Other
            } else {
                return None;
            }
        }
    };
    Some(keyword)
}
