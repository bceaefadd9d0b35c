//! Recursive-descent parser for the declaration structure of C# files.

mod attr;
mod item;
mod ty;

use mb_diagnostic::{Error, Result};
use mb_lexer::{lex, LineIndex, TokenKind};

use crate::cursor::Cursor;
use crate::syntax::CompilationUnit;

pub(crate) struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(file: &'a str, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(file, source, lex(source)),
        }
    }
}

/// Parse one developer file.
///
/// Any input the lexer could not recognize fails the whole file before
/// structure is considered.
pub fn parse_file(file: &str, source: &str) -> Result<CompilationUnit> {
    let tokens = lex(source);
    if let Some(bad) = tokens.iter().find(|token| token.kind == TokenKind::Error) {
        let line = LineIndex::new(source).line_of(bad.span.start);
        let text = bad.span.slice(source);
        let message = if text.starts_with(['"', '\'', '@', '$']) {
            "unterminated literal".to_string()
        } else {
            format!("unrecognized input `{}`", text.escape_debug())
        };
        return Err(Error::syntax(file, line, message));
    }

    let mut parser = Parser {
        cursor: Cursor::new(file, source, tokens),
    };
    parser.parse_compilation_unit()
}
