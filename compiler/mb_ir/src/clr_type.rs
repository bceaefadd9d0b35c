//! Value types of generated property accessors.

use std::fmt;

use crate::ContentTypeId;

/// C# keyword aliases for the framework's primitive types.
const KEYWORD_ALIASES: &[(&str, &str)] = &[
    ("System.Boolean", "bool"),
    ("System.Byte", "byte"),
    ("System.SByte", "sbyte"),
    ("System.Char", "char"),
    ("System.Decimal", "decimal"),
    ("System.Double", "double"),
    ("System.Single", "float"),
    ("System.Int16", "short"),
    ("System.UInt16", "ushort"),
    ("System.Int32", "int"),
    ("System.UInt32", "uint"),
    ("System.Int64", "long"),
    ("System.UInt64", "ulong"),
    ("System.Object", "object"),
    ("System.String", "string"),
];

/// Type of a property value.
///
/// Named types use CLR full names: namespaces separated by `.`, nested
/// types by `+`, generic arity as a `` `N `` suffix on the generic type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClrType {
    Named { full_name: String, args: Vec<ClrType> },
    Array(Box<ClrType>),
    Nullable(Box<ClrType>),
    /// The model type of another content type, known only by alias until
    /// the builder has computed every CLR name.
    ModelAlias(String),
    /// The model type of another content type in the same graph.
    Model(ContentTypeId),
}

/// Error returned by [`ClrType::parse`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClrTypeParseError {
    pub input: String,
    pub message: String,
}

impl fmt::Display for ClrTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type `{}`: {}", self.input, self.message)
    }
}

impl std::error::Error for ClrTypeParseError {}

impl ClrType {
    /// A non-generic named type.
    pub fn named(full_name: impl Into<String>) -> Self {
        ClrType::Named {
            full_name: full_name.into(),
            args: Vec::new(),
        }
    }

    /// A constructed generic type; `full_name` is given without arity.
    pub fn generic(full_name: &str, args: Vec<ClrType>) -> Self {
        ClrType::Named {
            full_name: format!("{full_name}`{}", args.len()),
            args,
        }
    }

    pub fn string() -> Self {
        ClrType::named("System.String")
    }

    pub fn int() -> Self {
        ClrType::named("System.Int32")
    }

    /// The C# keyword for a primitive type, if this is one.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            ClrType::Named { full_name, args } if args.is_empty() => KEYWORD_ALIASES
                .iter()
                .find(|(name, _)| name == full_name)
                .map(|(_, keyword)| *keyword),
            _ => None,
        }
    }

    /// Visit this type and every type argument nested in it.
    pub fn walk(&self, visit: &mut impl FnMut(&ClrType)) {
        visit(self);
        match self {
            ClrType::Named { args, .. } => {
                for arg in args {
                    arg.walk(visit);
                }
            }
            ClrType::Array(inner) | ClrType::Nullable(inner) => inner.walk(visit),
            ClrType::ModelAlias(_) | ClrType::Model(_) => {}
        }
    }

    /// Rewrite every [`ClrType::ModelAlias`] through `resolve`.
    pub fn try_map_model_aliases<E>(
        &mut self,
        resolve: &mut impl FnMut(&str) -> Result<ContentTypeId, E>,
    ) -> Result<(), E> {
        match self {
            ClrType::ModelAlias(alias) => {
                *self = ClrType::Model(resolve(alias)?);
            }
            ClrType::Named { args, .. } => {
                for arg in args {
                    arg.try_map_model_aliases(resolve)?;
                }
            }
            ClrType::Array(inner) | ClrType::Nullable(inner) => {
                inner.try_map_model_aliases(resolve)?;
            }
            ClrType::Model(_) => {}
        }
        Ok(())
    }

    /// Parse the textual form used by host descriptors.
    ///
    /// Accepts `System.String`, C# keywords (`int`), generics written
    /// with angle brackets, `T[]`, `T?` and `model:alias`.
    pub fn parse(text: &str) -> Result<Self, ClrTypeParseError> {
        let mut parser = TypeTextParser {
            input: text,
            pos: 0,
        };
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos != text.len() {
            return Err(parser.error("trailing characters"));
        }
        Ok(ty)
    }
}

impl std::str::FromStr for ClrType {
    type Err = ClrTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClrType::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ClrType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ClrType::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Split a CLR full name into its namespace and its containing-type chain.
///
/// `A.B.Outer+Inner` gives `(Some("A.B"), ["Outer", "Inner"])`.
pub fn split_full_name(full_name: &str) -> (Option<&str>, Vec<&str>) {
    let outermost_end = full_name.find('+').unwrap_or(full_name.len());
    let (namespace, types) = match full_name[..outermost_end].rfind('.') {
        Some(dot) => (Some(&full_name[..dot]), &full_name[dot + 1..]),
        None => (None, full_name),
    };
    (namespace, types.split('+').collect())
}

/// Strip a `` `N `` arity suffix, returning the bare name and the arity.
pub fn strip_arity(name: &str) -> (&str, usize) {
    match name.rfind('`') {
        Some(tick) => match name[tick + 1..].parse() {
            Ok(arity) => (&name[..tick], arity),
            Err(_) => (name, 0),
        },
        None => (name, 0),
    }
}

struct TypeTextParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TypeTextParser<'a> {
    fn error(&self, message: &str) -> ClrTypeParseError {
        ClrTypeParseError {
            input: self.input.to_string(),
            message: format!("{message} at offset {}", self.pos),
        }
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn parse_type(&mut self) -> Result<ClrType, ClrTypeParseError> {
        let mut ty = self.parse_simple()?;
        loop {
            if self.eat("[]") {
                ty = ClrType::Array(Box::new(ty));
            } else if self.eat("?") {
                ty = ClrType::Nullable(Box::new(ty));
            } else {
                return Ok(ty);
            }
        }
    }

    fn parse_simple(&mut self) -> Result<ClrType, ClrTypeParseError> {
        if self.eat("model:") {
            let alias = self.take_while(|c| c.is_alphanumeric() || c == '_' || c == '-');
            if alias.is_empty() {
                return Err(self.error("expected a content type alias"));
            }
            return Ok(ClrType::ModelAlias(alias.to_string()));
        }

        self.skip_whitespace();
        let name = self.take_while(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '+' | '`'));
        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }
        let name = expand_keyword(name);

        if !self.eat("<") {
            return Ok(ClrType::named(name));
        }
        let mut args = vec![self.parse_type()?];
        while self.eat(",") {
            args.push(self.parse_type()?);
        }
        if !self.eat(">") {
            return Err(self.error("expected `>`"));
        }
        let (bare, _) = strip_arity(&name);
        Ok(ClrType::generic(bare, args))
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let len: usize = self
            .rest()
            .chars()
            .take_while(|c| keep(*c))
            .map(char::len_utf8)
            .sum();
        self.pos += len;
        let input = self.input;
        &input[start..self.pos]
    }
}

fn expand_keyword(name: &str) -> String {
    KEYWORD_ALIASES
        .iter()
        .find(|(_, keyword)| *keyword == name)
        .map_or_else(|| name.to_string(), |(full, _)| (*full).to_string())
}

#[cfg(test)]
mod tests;
