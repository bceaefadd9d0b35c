//! Type syntax.

use mb_diagnostic::Result;
use mb_lexer::{Keyword, TokenKind};

use crate::grammar::Parser;
use crate::syntax::{NameSegment, TypeSyntax};

impl Parser<'_> {
    /// Parse a type: predefined, (qualified) name, tuple, with `?`/`[]`
    /// suffixes.
    pub(crate) fn parse_type(&mut self) -> Result<TypeSyntax> {
        let mut ty = match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::Predefined(keyword)) => {
                self.cursor.advance();
                TypeSyntax::Predefined(keyword)
            }
            TokenKind::Keyword(Keyword::Void) => {
                self.cursor.advance();
                TypeSyntax::Predefined("void")
            }
            TokenKind::LParen => self.parse_tuple_type()?,
            _ => self.parse_type_name()?,
        };

        loop {
            match self.cursor.current_kind() {
                TokenKind::Question => {
                    self.cursor.advance();
                    ty = TypeSyntax::Nullable(Box::new(ty));
                }
                TokenKind::LBracket
                    if matches!(
                        self.cursor.peek_kind(1),
                        TokenKind::RBracket | TokenKind::Comma
                    ) =>
                {
                    self.cursor.skip_group()?;
                    ty = TypeSyntax::Array(Box::new(ty));
                }
                TokenKind::Punct if self.cursor.current_text() == "*" => {
                    self.cursor.advance();
                }
                _ => return Ok(ty),
            }
        }
    }

    /// Parse `[global::]A.B<C>.D`.
    pub(crate) fn parse_type_name(&mut self) -> Result<TypeSyntax> {
        let mut global = false;
        if self.cursor.current_kind().is_ident()
            && self.cursor.peek_kind(1) == TokenKind::DoubleColon
        {
            // Only `global::` roots a name; other extern aliases are kept as a segment.
            global = self.cursor.check_word("global");
            if !global {
                let alias = self.cursor.expect_ident("a name")?;
                self.cursor.advance();
                let mut segments = vec![NameSegment {
                    name: alias,
                    args: Vec::new(),
                }];
                self.parse_name_segments(&mut segments)?;
                return Ok(TypeSyntax::Name { global, segments });
            }
            self.cursor.advance();
            self.cursor.advance();
        }

        let mut segments = Vec::new();
        self.parse_name_segments(&mut segments)?;
        Ok(TypeSyntax::Name { global, segments })
    }

    fn parse_name_segments(&mut self, segments: &mut Vec<NameSegment>) -> Result<()> {
        loop {
            let name = self.cursor.expect_ident("a type name")?;
            let args = if self.cursor.check(TokenKind::Lt) {
                self.parse_type_args()?
            } else {
                Vec::new()
            };
            segments.push(NameSegment { name, args });
            if self.cursor.check(TokenKind::Dot) && self.cursor.peek_kind(1).is_ident() {
                self.cursor.advance();
            } else {
                return Ok(());
            }
        }
    }

    fn parse_type_args(&mut self) -> Result<Vec<TypeSyntax>> {
        self.cursor.expect(TokenKind::Lt, "`<`")?;
        let mut args = Vec::new();
        loop {
            // Unbound generic names (`typeof(List<>)`) have empty argument slots.
            if matches!(self.cursor.current_kind(), TokenKind::Comma | TokenKind::Gt) {
                args.push(TypeSyntax::Predefined("object"));
            } else {
                args.push(self.parse_type()?);
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::Gt, "`>`")?;
        Ok(args)
    }

    fn parse_tuple_type(&mut self) -> Result<TypeSyntax> {
        self.cursor.expect(TokenKind::LParen, "`(`")?;
        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_type()?);
            // Element names are optional.
            if self.cursor.current_kind().is_ident() {
                self.cursor.advance();
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen, "`)`")?;
        Ok(TypeSyntax::Name {
            global: false,
            segments: vec![NameSegment {
                name: "ValueTuple".to_string(),
                args: elements,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Parser;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> TypeSyntax {
        let mut parser = Parser::new("t.cs", source);
        parser
            .parse_type()
            .unwrap_or_else(|e| panic!("{source}: {e}"))
    }

    fn name(segments: &[(&str, Vec<TypeSyntax>)]) -> TypeSyntax {
        TypeSyntax::Name {
            global: false,
            segments: segments
                .iter()
                .map(|(name, args)| NameSegment {
                    name: (*name).to_string(),
                    args: args.clone(),
                })
                .collect(),
        }
    }

    #[test]
    fn predefined_and_suffixes() {
        assert_eq!(parse("string"), TypeSyntax::Predefined("string"));
        assert_eq!(
            parse("int?[]"),
            TypeSyntax::Array(Box::new(TypeSyntax::Nullable(Box::new(
                TypeSyntax::Predefined("int")
            ))))
        );
    }

    #[test]
    fn qualified_generic_name() {
        assert_eq!(
            parse("System.Collections.Generic.IEnumerable<IPublishedContent>"),
            name(&[
                ("System", vec![]),
                ("Collections", vec![]),
                ("Generic", vec![]),
                ("IEnumerable", vec![name(&[("IPublishedContent", vec![])])]),
            ])
        );
    }

    #[test]
    fn global_qualified_name() {
        let ty = parse("global::System.Text.StringBuilder");
        assert_eq!(ty.dotted(), "global::System.Text.StringBuilder");
        assert_eq!(ty.last_segment(), Some(("StringBuilder", 0)));
    }

    #[test]
    fn nested_generic_arguments() {
        let ty = parse("Dictionary<string, List<int>>");
        assert_eq!(ty.last_segment(), Some(("Dictionary", 2)));
    }

    #[test]
    fn tuples_become_value_tuples() {
        assert_eq!(parse("(int a, string b)").last_segment(), Some(("ValueTuple", 2)));
    }

    #[test]
    fn string_and_object_spellings() {
        assert!(parse("System.String").is_string());
        assert!(parse("string").is_string());
        assert!(parse("global::System.Object").is_object());
        assert!(!parse("Strings").is_string());
    }
}
