//! Token types.

use std::fmt;

/// Byte range in a source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range, saturating at `u32::MAX`.
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span {
            start: clamp(range.start),
            end: clamp(range.end),
        }
    }

    /// Source text covered by this span.
    pub fn slice(self, source: &str) -> &str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Reserved C# keywords the structural parser cares about.
///
/// Contextual keywords (`partial`, `global`, `where`, `record`, `var`,
/// `dynamic`) stay identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Abstract,
    Class,
    Const,
    Delegate,
    Enum,
    Event,
    Explicit,
    Extern,
    Implicit,
    Interface,
    Internal,
    Namespace,
    New,
    Operator,
    Out,
    Override,
    Params,
    Private,
    Protected,
    Public,
    Readonly,
    Ref,
    Sealed,
    Static,
    Struct,
    This,
    Unsafe,
    Using,
    Virtual,
    Void,
    Volatile,
    /// A predefined type keyword such as `string` or `int`.
    Predefined(&'static str),
    /// Any other reserved word (`if`, `return`, `true`, ...).
    Other,
}

impl Keyword {
    /// Whether this keyword is a declaration modifier.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Keyword::Abstract
                | Keyword::Extern
                | Keyword::Internal
                | Keyword::New
                | Keyword::Override
                | Keyword::Private
                | Keyword::Protected
                | Keyword::Public
                | Keyword::Readonly
                | Keyword::Sealed
                | Keyword::Static
                | Keyword::Unsafe
                | Keyword::Virtual
                | Keyword::Volatile
        )
    }
}

/// Token kinds. Identifier and literal text is read back through the span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident,
    /// `@name`: an identifier that may spell a keyword.
    VerbatimIdent,
    Keyword(Keyword),
    StringLit,
    /// `$"..."` and `$@"..."`: no constant value.
    InterpolatedString,
    CharLit,
    Number,

    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Dot,
    Semicolon,
    Colon,
    DoubleColon,
    Eq,
    FatArrow,
    Question,
    /// Any other operator character.
    Punct,

    /// Unrecognized or unterminated input.
    Error,
    Eof,
}

impl TokenKind {
    pub fn is_ident(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::VerbatimIdent)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Tokens of one file, always terminated by `Eof`.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, or the trailing `Eof` when out of range.
    pub fn get(&self, index: usize) -> Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::default()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}
