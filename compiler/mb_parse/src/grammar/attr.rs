//! Attribute sections.

use mb_diagnostic::Result;
use mb_lexer::{string_value, Keyword, TokenKind};

use crate::grammar::Parser;
use crate::syntax::{AttrArg, AttrValue, Attribute};

/// Target named before the colon of an attribute section.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum AttrTarget {
    /// `assembly:` or `module:`.
    Assembly,
    /// No target, or a member target (`return:`, `field:`, ...).
    Declaration,
}

impl Parser<'_> {
    /// Whether the current `[` opens an `assembly:`/`module:` section.
    pub(crate) fn at_assembly_attributes(&self) -> bool {
        self.cursor.check(TokenKind::LBracket)
            && matches!(self.cursor.peek_text(1), "assembly" | "module")
            && self.cursor.peek_kind(2) == TokenKind::Colon
    }

    /// Parse consecutive attribute sections.
    pub(crate) fn parse_attribute_sections(&mut self) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::new();
        while self.cursor.check(TokenKind::LBracket) {
            let (_, section) = self.parse_attribute_section()?;
            attributes.extend(section);
        }
        Ok(attributes)
    }

    /// Parse one `[target: A(...), B]` section.
    pub(crate) fn parse_attribute_section(&mut self) -> Result<(AttrTarget, Vec<Attribute>)> {
        self.cursor.expect(TokenKind::LBracket, "`[`")?;
        let mut target = AttrTarget::Declaration;
        if self.cursor.peek_kind(1) == TokenKind::Colon
            && matches!(
                self.cursor.current_kind(),
                TokenKind::Ident | TokenKind::Keyword(_)
            )
        {
            if matches!(self.cursor.current_text(), "assembly" | "module") {
                target = AttrTarget::Assembly;
            }
            self.cursor.advance();
            self.cursor.advance();
        }

        let mut attributes = Vec::new();
        while !self.cursor.check(TokenKind::RBracket) {
            attributes.push(self.parse_attribute()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBracket, "`]`")?;
        Ok((target, attributes))
    }

    fn parse_attribute(&mut self) -> Result<Attribute> {
        let line = self.cursor.line();
        let name = self.parse_type_name()?.dotted();
        let name = name
            .strip_prefix("global::")
            .map_or(name.clone(), str::to_string);

        let mut args = Vec::new();
        if self.cursor.eat(TokenKind::LParen) {
            while !self.cursor.check(TokenKind::RParen) {
                args.push(self.parse_attribute_arg()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(TokenKind::RParen, "`)`")?;
        }
        Ok(Attribute { name, args, line })
    }

    fn parse_attribute_arg(&mut self) -> Result<AttrArg> {
        let mut name = None;
        if self.cursor.current_kind().is_ident()
            && matches!(self.cursor.peek_kind(1), TokenKind::Eq | TokenKind::Colon)
        {
            name = Some(self.cursor.expect_ident("an argument name")?);
            self.cursor.advance();
        }

        let value = self.parse_attribute_value()?;
        if matches!(
            self.cursor.current_kind(),
            TokenKind::Comma | TokenKind::RParen
        ) {
            return Ok(AttrArg { name, value });
        }
        // Not a lone constant: `"a" + "b"`, `x ? y : z`, ...
        self.cursor.skip_until(&[TokenKind::Comma, TokenKind::RParen])?;
        Ok(AttrArg {
            name,
            value: AttrValue::Other,
        })
    }

    fn parse_attribute_value(&mut self) -> Result<AttrValue> {
        let value = match self.cursor.current_kind() {
            TokenKind::StringLit => {
                let text = self.cursor.current_text();
                self.cursor.advance();
                string_value(text).map_or(AttrValue::Other, AttrValue::Str)
            }
            TokenKind::Keyword(Keyword::Other) if self.cursor.check_word("typeof") => {
                self.cursor.advance();
                self.cursor.expect(TokenKind::LParen, "`(` after `typeof`")?;
                let ty = self.parse_type()?;
                self.cursor.expect(TokenKind::RParen, "`)`")?;
                AttrValue::TypeOf(ty)
            }
            TokenKind::Keyword(Keyword::Other)
                if matches!(self.cursor.current_text(), "true" | "false") =>
            {
                let value = self.cursor.current_text() == "true";
                self.cursor.advance();
                AttrValue::Bool(value)
            }
            TokenKind::Ident | TokenKind::VerbatimIdent
                if self.cursor.peek_kind(1) != TokenKind::LParen =>
            {
                let mut path = self.cursor.expect_ident("a name")?;
                while self.cursor.check(TokenKind::Dot) && self.cursor.peek_kind(1).is_ident() {
                    self.cursor.advance();
                    path.push('.');
                    path.push_str(&self.cursor.expect_ident("a member name")?);
                }
                AttrValue::Member(path)
            }
            _ => {
                self.cursor
                    .skip_until(&[TokenKind::Comma, TokenKind::RParen])?;
                AttrValue::Other
            }
        };
        Ok(value)
    }
}
