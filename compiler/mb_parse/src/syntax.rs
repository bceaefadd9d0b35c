//! Syntax tree of a developer file, reduced to what directive discovery needs.
//!
//! Member bodies, initializers and expressions other than attribute
//! arguments are never represented.

use mb_symbols::UsingDirective;

/// A type as written in source.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeSyntax {
    /// `string`, `int`, ...
    Predefined(&'static str),
    /// A possibly qualified name: `global::A.B<C>.D`.
    Name {
        global: bool,
        segments: Vec<NameSegment>,
    },
    Array(Box<TypeSyntax>),
    Nullable(Box<TypeSyntax>),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NameSegment {
    pub name: String,
    pub args: Vec<TypeSyntax>,
}

impl TypeSyntax {
    /// Last name segment and its arity, if this is a name.
    pub fn last_segment(&self) -> Option<(&str, usize)> {
        match self {
            TypeSyntax::Name { segments, .. } => segments
                .last()
                .map(|segment| (segment.name.as_str(), segment.args.len())),
            _ => None,
        }
    }

    /// Dotted spelling without type arguments, `global::` kept.
    pub fn dotted(&self) -> String {
        match self {
            TypeSyntax::Predefined(keyword) => (*keyword).to_string(),
            TypeSyntax::Name { global, segments } => {
                let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
                let prefix = if *global { "global::" } else { "" };
                format!("{prefix}{}", names.join("."))
            }
            TypeSyntax::Array(element) => format!("{}[]", element.dotted()),
            TypeSyntax::Nullable(inner) => format!("{}?", inner.dotted()),
        }
    }

    /// Whether this is `string` or `System.String`.
    pub fn is_string(&self) -> bool {
        match self {
            TypeSyntax::Predefined(keyword) => *keyword == "string",
            TypeSyntax::Name { .. } => {
                let dotted = self.dotted();
                let dotted = dotted.strip_prefix("global::").unwrap_or(&dotted);
                dotted == "String" || dotted == "System.String"
            }
            _ => false,
        }
    }

    /// Whether this is `object` or `System.Object`.
    pub fn is_object(&self) -> bool {
        match self {
            TypeSyntax::Predefined(keyword) => *keyword == "object",
            TypeSyntax::Name { .. } => {
                let dotted = self.dotted();
                let dotted = dotted.strip_prefix("global::").unwrap_or(&dotted);
                dotted == "Object" || dotted == "System.Object"
            }
            _ => false,
        }
    }
}

/// Value of an attribute argument.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AttrValue {
    /// Constant string, already unescaped.
    Str(String),
    Bool(bool),
    /// `typeof(T)`.
    TypeOf(TypeSyntax),
    /// A dotted member access such as `PublishedItemType.Content`.
    Member(String),
    /// Anything else; kept only so arity checks see it.
    Other,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AttrArg {
    /// `Name = value` or `name: value`.
    pub name: Option<String>,
    pub value: AttrValue,
}

/// One attribute inside an attribute section.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Attribute {
    /// Dotted name as written, `global::` removed.
    pub name: String,
    pub args: Vec<AttrArg>,
    pub line: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Record,
    Enum,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub ty: TypeSyntax,
    /// First parameter of an extension method.
    pub is_this: bool,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Member {
    Constructor {
        params: Vec<Param>,
        line: u32,
    },
    Method {
        name: String,
        is_static: bool,
        params: Vec<Param>,
        line: u32,
    },
    Property {
        name: String,
        attributes: Vec<Attribute>,
        line: u32,
    },
    Type(TypeDecl),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub name: String,
    /// Number of generic parameters.
    pub arity: usize,
    pub is_static: bool,
    pub attributes: Vec<Attribute>,
    pub bases: Vec<TypeSyntax>,
    pub members: Vec<Member>,
    pub line: u32,
}

impl TypeDecl {
    pub fn nested_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Type(decl) => Some(decl),
            _ => None,
        })
    }
}

/// A type declaration with the namespace it sits in.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NamespacedType {
    /// Empty for the global namespace.
    pub namespace: String,
    /// Using directives of enclosing namespace blocks, innermost last.
    pub usings: Vec<UsingDirective>,
    pub decl: TypeDecl,
}

/// One parsed file.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CompilationUnit {
    pub file: String,
    pub usings: Vec<UsingDirective>,
    /// `global using` directives, visible in every file.
    pub global_usings: Vec<UsingDirective>,
    pub assembly_attributes: Vec<Attribute>,
    pub types: Vec<NamespacedType>,
}
