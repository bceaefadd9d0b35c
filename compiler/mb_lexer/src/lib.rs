//! C# tokenizer using logos.
//!
//! Produces a flat `TokenList` for the structural parser. Trivia
//! (whitespace, comments, preprocessor lines) is dropped; line numbers are
//! recovered through [`LineIndex`].

mod cook;
mod keywords;
mod line_index;
mod token;

use logos::Logos;

pub use cook::{char_value, string_value};
pub use keywords::PREDEFINED_TYPES;
pub use line_index::LineIndex;
pub use token::{Keyword, Span, Token, TokenKind, TokenList};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f\u{FEFF}]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"#[^\n]*")]
    Preprocessor,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    #[regex(r"@[\p{L}_][\p{L}\p{N}_]*")]
    VerbatimIdent,

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,

    #[regex(r#"@"([^"]|"")*""#)]
    VerbatimString,

    #[regex(r#"\$"([^"\\\n]|\\[^\n])*""#)]
    #[regex(r#"(\$@|@\$)"([^"]|"")*""#)]
    InterpolatedString,

    #[regex(r"'([^'\\\n]|\\[^\n])+'")]
    Char,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[uUlLfFdDmM]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+[uUlL]*")]
    Number,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token("::")]
    DoubleColon,
    #[token(":")]
    Colon,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("?")]
    Question,
    #[regex(r"[+\-*/%&|\^!~]")]
    Punct,
}

/// Lex a C# source file.
///
/// Input logos cannot match (including unterminated literals) becomes
/// `TokenKind::Error` tokens; lexing always continues to the end.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment | RawToken::Preprocessor) => {
                continue;
            }
            Ok(raw) => convert_token(raw, logos.slice()),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    result
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Ident => match keywords::lookup(slice) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Ident,
        },
        RawToken::VerbatimIdent => TokenKind::VerbatimIdent,
        RawToken::String | RawToken::VerbatimString => TokenKind::StringLit,
        RawToken::InterpolatedString => TokenKind::InterpolatedString,
        RawToken::Char => TokenKind::CharLit,
        RawToken::Number => TokenKind::Number,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Question => TokenKind::Question,
        RawToken::Punct => TokenKind::Punct,
        RawToken::LineComment | RawToken::BlockComment | RawToken::Preprocessor => {
            TokenKind::Error
        }
    }
}

/// Identifier text without a leading `@`.
pub fn ident_text(token: Token, source: &str) -> &str {
    let text = token.span.slice(source);
    text.strip_prefix('@').unwrap_or(text)
}

#[cfg(test)]
mod tests;
