//! Token cursor for navigating the token stream.

use mb_diagnostic::{Error, Result};
use mb_lexer::{ident_text, Keyword, LineIndex, Token, TokenKind, TokenList};

/// Cursor over the tokens of one file.
///
/// The token list always ends with `Eof`, and the cursor never moves past it.
pub struct Cursor<'a> {
    file: &'a str,
    source: &'a str,
    tokens: TokenList,
    lines: LineIndex,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(file: &'a str, source: &'a str, tokens: TokenList) -> Self {
        Cursor {
            file,
            source,
            tokens,
            lines: LineIndex::new(source),
            pos: 0,
        }
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn current(&self) -> Token {
        self.tokens.get(self.pos)
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token `offset` positions ahead.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens.get(self.pos + offset).kind
    }

    /// Source text of the token `offset` positions ahead.
    pub fn peek_text(&self, offset: usize) -> &'a str {
        self.tokens.get(self.pos + offset).span.slice(self.source)
    }

    pub fn current_text(&self) -> &'a str {
        self.current().span.slice(self.source)
    }

    /// 1-based line of the current token.
    pub fn line(&self) -> u32 {
        self.lines.line_of(self.current().span.start)
    }

    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current_kind() == TokenKind::Keyword(keyword)
    }

    /// Whether the current token is the identifier or reserved word `text`.
    ///
    /// Verbatim identifiers never match: `@partial` is a name.
    pub fn check_word(&self, text: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Ident | TokenKind::Keyword(_))
            && self.current_text() == text
    }

    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_word(&mut self, text: &str) -> bool {
        if self.check_word(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Consume an identifier and return its text without `@`.
    pub fn expect_ident(&mut self, what: &str) -> Result<String> {
        if self.current_kind().is_ident() {
            let token = self.advance();
            Ok(ident_text(token, self.source).to_string())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Syntax error at the current token.
    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::syntax(self.file, self.line(), message)
    }

    pub fn unexpected(&self, what: &str) -> Error {
        if self.is_at_end() {
            self.error(format!("unexpected end of file, expected {what}"))
        } else {
            self.error(format!("expected {what}, found `{}`", self.current_text()))
        }
    }

    /// Skip a balanced `{ ... }`, `( ... )` or `[ ... ]` group starting at
    /// the current opening token.
    pub fn skip_group(&mut self) -> Result<()> {
        let mut closers = Vec::new();
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::LBrace => closers.push(TokenKind::RBrace),
                TokenKind::LParen => closers.push(TokenKind::RParen),
                TokenKind::LBracket => closers.push(TokenKind::RBracket),
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    if closers.pop() != Some(token.kind) {
                        return Err(self.error(format!(
                            "unbalanced delimiter `{}`",
                            self.current_text()
                        )));
                    }
                }
                TokenKind::Eof => {
                    return Err(self.error("unexpected end of file inside a delimited group"));
                }
                _ => {}
            }
            self.advance();
            if closers.is_empty() {
                return Ok(());
            }
        }
    }

    /// Skip tokens until one of `stops` at nesting depth zero, without
    /// consuming it. Groups on the way are skipped whole.
    pub fn skip_until(&mut self, stops: &[TokenKind]) -> Result<()> {
        loop {
            let kind = self.current_kind();
            if stops.contains(&kind) {
                return Ok(());
            }
            match kind {
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => self.skip_group()?,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    return Err(self.error(format!(
                        "unbalanced delimiter `{}`",
                        self.current_text()
                    )));
                }
                TokenKind::Eof => return Err(self.unexpected("`;`")),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Skip a `{ ... }` body, an `=> ...;` body, or a lone `;`.
    pub fn skip_body(&mut self) -> Result<()> {
        match self.current_kind() {
            TokenKind::LBrace => self.skip_group(),
            TokenKind::FatArrow => {
                self.skip_until(&[TokenKind::Semicolon])?;
                self.advance();
                Ok(())
            }
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected("a member body")),
        }
    }
}
