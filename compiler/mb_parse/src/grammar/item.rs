//! Compilation units, namespaces, type declarations and members.

use mb_diagnostic::Result;
use mb_lexer::{Keyword, TokenKind};
use mb_symbols::UsingDirective;

use crate::grammar::attr::AttrTarget;
use crate::grammar::Parser;
use crate::syntax::{Attribute, CompilationUnit, Member, NamespacedType, Param, TypeDecl, TypeKind};

/// Lexical context of a namespace body.
struct NamespaceContext {
    namespace: String,
    usings: Vec<UsingDirective>,
}

impl Parser<'_> {
    pub(crate) fn parse_compilation_unit(&mut self) -> Result<CompilationUnit> {
        let mut unit = CompilationUnit {
            file: self.cursor.file().to_string(),
            ..CompilationUnit::default()
        };
        let context = NamespaceContext {
            namespace: String::new(),
            usings: Vec::new(),
        };
        self.parse_namespace_body(&mut unit, &context, true)?;
        if !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected("a declaration"));
        }
        Ok(unit)
    }

    /// Parse usings, namespaces and types until `}` or end of file.
    fn parse_namespace_body(
        &mut self,
        unit: &mut CompilationUnit,
        outer: &NamespaceContext,
        top_level: bool,
    ) -> Result<()> {
        let mut context = NamespaceContext {
            namespace: outer.namespace.clone(),
            usings: outer.usings.clone(),
        };

        loop {
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RBrace) {
                return Ok(());
            }

            if self.cursor.check_word("global")
                && self.cursor.peek_kind(1) == TokenKind::Keyword(Keyword::Using)
            {
                self.cursor.advance();
                let using = self.parse_using()?;
                unit.global_usings.push(using);
                continue;
            }
            if self.cursor.check_keyword(Keyword::Using) {
                let using = self.parse_using()?;
                if top_level && context.namespace.is_empty() {
                    unit.usings.push(using);
                } else {
                    context.usings.push(using);
                }
                continue;
            }
            if self.cursor.check_word("extern") && self.cursor.peek_text(1) == "alias" {
                self.cursor.skip_until(&[TokenKind::Semicolon])?;
                self.cursor.advance();
                continue;
            }
            if self.at_assembly_attributes() {
                let (_, attributes) = self.parse_attribute_section()?;
                unit.assembly_attributes.extend(attributes);
                continue;
            }
            if self.cursor.check_keyword(Keyword::Namespace) {
                self.cursor.advance();
                let name = self.parse_type_name()?.dotted();
                let full = if context.namespace.is_empty() {
                    name
                } else {
                    format!("{}.{name}", context.namespace)
                };
                if self.cursor.eat(TokenKind::Semicolon) {
                    // File-scoped: the rest of the file is in this namespace.
                    context.namespace = full;
                    continue;
                }
                self.cursor.expect(TokenKind::LBrace, "`{` after namespace name")?;
                let inner = NamespaceContext {
                    namespace: full,
                    usings: context.usings.clone(),
                };
                self.parse_namespace_body(unit, &inner, false)?;
                self.cursor.expect(TokenKind::RBrace, "`}` closing the namespace")?;
                self.cursor.eat(TokenKind::Semicolon);
                continue;
            }

            let attributes = self.parse_declaration_attributes(unit)?;
            if let Some(decl) = self.parse_type_declaration(attributes)? {
                unit.types.push(NamespacedType {
                    namespace: context.namespace.clone(),
                    usings: context.usings.clone(),
                    decl,
                });
            }
        }
    }

    /// Parse `using ...;` after an optional `global`.
    fn parse_using(&mut self) -> Result<UsingDirective> {
        self.cursor.expect(TokenKind::Keyword(Keyword::Using), "`using`")?;
        if self.cursor.eat(TokenKind::Keyword(Keyword::Static)) {
            let target = self.parse_type()?.dotted();
            self.cursor.expect(TokenKind::Semicolon, "`;`")?;
            return Ok(UsingDirective::Static(strip_global(target)));
        }
        if self.cursor.current_kind().is_ident() && self.cursor.peek_kind(1) == TokenKind::Eq {
            let alias = self.cursor.expect_ident("an alias name")?;
            self.cursor.advance();
            let target = self.parse_type()?.dotted();
            self.cursor.expect(TokenKind::Semicolon, "`;`")?;
            return Ok(UsingDirective::Alias {
                alias,
                target: strip_global(target),
            });
        }
        let namespace = self.parse_type_name()?.dotted();
        self.cursor.expect(TokenKind::Semicolon, "`;`")?;
        Ok(UsingDirective::Namespace(strip_global(namespace)))
    }

    /// Attribute sections in front of a declaration. Assembly sections
    /// interleaved with them are routed to the unit.
    fn parse_declaration_attributes(
        &mut self,
        unit: &mut CompilationUnit,
    ) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::new();
        while self.cursor.check(TokenKind::LBracket) {
            let (target, section) = self.parse_attribute_section()?;
            match target {
                AttrTarget::Assembly => unit.assembly_attributes.extend(section),
                AttrTarget::Declaration => attributes.extend(section),
            }
        }
        Ok(attributes)
    }

    /// Skip modifiers; returns whether `static` was among them.
    fn parse_modifiers(&mut self) -> bool {
        let mut is_static = false;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Keyword(keyword) if keyword.is_modifier() => {
                    is_static |= keyword == Keyword::Static;
                    self.cursor.advance();
                }
                TokenKind::Ident
                    if matches!(
                        self.cursor.current_text(),
                        "partial" | "async" | "required" | "file" | "scoped"
                    ) && !matches!(
                        self.cursor.peek_kind(1),
                        TokenKind::LParen
                            | TokenKind::Semicolon
                            | TokenKind::Eq
                            | TokenKind::LBrace
                            | TokenKind::FatArrow
                    ) =>
                {
                    self.cursor.advance();
                }
                _ => return is_static,
            }
        }
    }

    /// Parse a type declaration after its attributes. Delegates are
    /// skipped and yield `None`.
    fn parse_type_declaration(&mut self, attributes: Vec<Attribute>) -> Result<Option<TypeDecl>> {
        let line = self.cursor.line();
        let is_static = self.parse_modifiers();
        let kind = match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::Class) => TypeKind::Class,
            TokenKind::Keyword(Keyword::Interface) => TypeKind::Interface,
            TokenKind::Keyword(Keyword::Struct) => TypeKind::Struct,
            TokenKind::Keyword(Keyword::Enum) => TypeKind::Enum,
            TokenKind::Ident if self.cursor.current_text() == "record" => TypeKind::Record,
            TokenKind::Keyword(Keyword::Delegate) => {
                self.cursor.skip_until(&[TokenKind::Semicolon])?;
                self.cursor.advance();
                return Ok(None);
            }
            _ => return Err(self.cursor.unexpected("a type declaration")),
        };
        self.cursor.advance();
        if kind == TypeKind::Record {
            // `record class` / `record struct`
            if !self.cursor.eat(TokenKind::Keyword(Keyword::Class)) {
                self.cursor.eat(TokenKind::Keyword(Keyword::Struct));
            }
        }

        let name = self.cursor.expect_ident("a type name")?;
        let arity = self.parse_type_parameters()?;
        if self.cursor.check(TokenKind::LParen) {
            // Primary constructor parameters.
            self.cursor.skip_group()?;
        }

        let mut bases = Vec::new();
        if self.cursor.eat(TokenKind::Colon) {
            loop {
                bases.push(self.parse_type()?);
                if self.cursor.check(TokenKind::LParen) {
                    // Record base arguments.
                    self.cursor.skip_group()?;
                }
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        if kind == TypeKind::Enum {
            // The base of an enum is its underlying type.
            bases.clear();
        }
        if self.cursor.check_word("where") {
            self.cursor
                .skip_until(&[TokenKind::LBrace, TokenKind::Semicolon])?;
        }

        let mut decl = TypeDecl {
            kind,
            name,
            arity,
            is_static,
            attributes,
            bases,
            members: Vec::new(),
            line,
        };

        if self.cursor.eat(TokenKind::Semicolon) {
            return Ok(Some(decl));
        }
        if kind == TypeKind::Enum {
            if !self.cursor.check(TokenKind::LBrace) {
                return Err(self.cursor.unexpected("`{` opening the enum body"));
            }
            self.cursor.skip_group()?;
        } else {
            self.cursor.expect(TokenKind::LBrace, "`{` opening the type body")?;
            while !self.cursor.check(TokenKind::RBrace) {
                if self.cursor.is_at_end() {
                    return Err(self.cursor.unexpected("`}` closing the type body"));
                }
                if let Some(member) = self.parse_member(&decl.name)? {
                    decl.members.push(member);
                }
            }
            self.cursor.advance();
        }
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Some(decl))
    }

    /// `<T, in U, out V>`; returns the parameter count.
    fn parse_type_parameters(&mut self) -> Result<usize> {
        if !self.cursor.eat(TokenKind::Lt) {
            return Ok(0);
        }
        let mut arity = 0;
        loop {
            self.parse_attribute_sections()?;
            // Variance annotations.
            if matches!(self.cursor.current_text(), "in" | "out")
                && self.cursor.peek_kind(1).is_ident()
            {
                self.cursor.advance();
            }
            self.cursor.expect_ident("a type parameter")?;
            arity += 1;
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::Gt, "`>`")?;
        Ok(arity)
    }

    fn parse_member(&mut self, type_name: &str) -> Result<Option<Member>> {
        let attributes = self.parse_attribute_sections()?;
        let line = self.cursor.line();

        if self.nested_type_ahead() {
            return Ok(self.parse_type_declaration(attributes)?.map(Member::Type));
        }

        let is_static = self.parse_modifiers();
        match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                return Ok(None);
            }
            TokenKind::Keyword(Keyword::Const | Keyword::Event) => {
                self.skip_member_rest()?;
                return Ok(None);
            }
            TokenKind::Keyword(Keyword::Implicit | Keyword::Explicit) => {
                self.skip_member_rest()?;
                return Ok(None);
            }
            TokenKind::Punct if self.cursor.current_text() == "~" => {
                self.skip_member_rest()?;
                return Ok(None);
            }
            _ => {}
        }

        if self.cursor.current_kind().is_ident()
            && self.cursor.peek_kind(1) == TokenKind::LParen
            && self.cursor.current_text().trim_start_matches('@') == type_name
        {
            self.cursor.advance();
            let params = self.parse_parameters()?;
            if self.cursor.eat(TokenKind::Colon) {
                // `: base(...)` / `: this(...)`
                self.cursor
                    .skip_until(&[TokenKind::LBrace, TokenKind::FatArrow, TokenKind::Semicolon])?;
            }
            self.cursor.skip_body()?;
            return Ok(Some(Member::Constructor { params, line }));
        }

        self.parse_type()?;
        if self.cursor.check_keyword(Keyword::Operator) {
            self.skip_member_rest()?;
            return Ok(None);
        }
        if self.cursor.check_keyword(Keyword::This) {
            // Indexer.
            self.cursor.advance();
            self.cursor.skip_group()?;
            self.skip_accessors_or_body()?;
            return Ok(None);
        }

        // Explicit interface implementations are named `IFoo.Bar`.
        let mut name = self.cursor.expect_ident("a member name")?;
        while self.cursor.check(TokenKind::Dot) {
            self.cursor.advance();
            if self.cursor.check_keyword(Keyword::This) {
                self.cursor.advance();
                self.cursor.skip_group()?;
                self.skip_accessors_or_body()?;
                return Ok(None);
            }
            name = self.cursor.expect_ident("a member name")?;
        }

        if self.cursor.check(TokenKind::Lt) || self.cursor.check(TokenKind::LParen) {
            self.parse_type_parameters()?;
            let params = self.parse_parameters()?;
            if self.cursor.check_word("where") {
                self.cursor
                    .skip_until(&[TokenKind::LBrace, TokenKind::FatArrow, TokenKind::Semicolon])?;
            }
            self.cursor.skip_body()?;
            return Ok(Some(Member::Method {
                name,
                is_static,
                params,
                line,
            }));
        }

        match self.cursor.current_kind() {
            TokenKind::LBrace | TokenKind::FatArrow => {
                self.skip_accessors_or_body()?;
                Ok(Some(Member::Property {
                    name,
                    attributes,
                    line,
                }))
            }
            // Fields.
            _ => {
                self.skip_member_rest()?;
                Ok(None)
            }
        }
    }

    /// Whether modifiers followed by a type keyword come next.
    fn nested_type_ahead(&self) -> bool {
        let mut offset = 0;
        loop {
            match self.cursor.peek_kind(offset) {
                TokenKind::Keyword(keyword) if keyword.is_modifier() => offset += 1,
                TokenKind::Keyword(
                    Keyword::Class
                    | Keyword::Interface
                    | Keyword::Struct
                    | Keyword::Enum
                    | Keyword::Delegate,
                ) => return true,
                TokenKind::Ident => match self.cursor.peek_text(offset) {
                    "partial" | "file" => offset += 1,
                    "record" => {
                        return matches!(
                            self.cursor.peek_kind(offset + 1),
                            TokenKind::Ident
                                | TokenKind::VerbatimIdent
                                | TokenKind::Keyword(Keyword::Class | Keyword::Struct)
                        )
                    }
                    _ => return false,
                },
                _ => return false,
            }
        }
    }

    /// Property accessors `{ get; set; } = x;` or an expression body.
    fn skip_accessors_or_body(&mut self) -> Result<()> {
        match self.cursor.current_kind() {
            TokenKind::LBrace => {
                self.cursor.skip_group()?;
                if self.cursor.eat(TokenKind::Eq) {
                    self.cursor.skip_until(&[TokenKind::Semicolon])?;
                    self.cursor.advance();
                }
                Ok(())
            }
            _ => self.cursor.skip_body(),
        }
    }

    /// Skip to the end of a member we do not model: through `;` or a body.
    fn skip_member_rest(&mut self) -> Result<()> {
        loop {
            match self.cursor.current_kind() {
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    return Ok(());
                }
                TokenKind::LBrace => {
                    self.cursor.skip_group()?;
                    if self.cursor.eat(TokenKind::Eq) {
                        self.cursor.skip_until(&[TokenKind::Semicolon])?;
                        self.cursor.advance();
                    }
                    return Ok(());
                }
                TokenKind::LParen | TokenKind::LBracket => self.cursor.skip_group()?,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket | TokenKind::Eof => {
                    return Err(self.cursor.unexpected("`;`"));
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// `(this T a, string b = null, params X[] c)`
    fn parse_parameters(&mut self) -> Result<Vec<Param>> {
        self.cursor.expect(TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            self.parse_attribute_sections()?;
            let mut is_this = false;
            loop {
                match self.cursor.current_kind() {
                    TokenKind::Keyword(Keyword::This) => is_this = true,
                    TokenKind::Keyword(
                        Keyword::Ref | Keyword::Out | Keyword::Params | Keyword::Readonly,
                    ) => {}
                    TokenKind::Keyword(Keyword::Other) if self.cursor.current_text() == "in" => {}
                    _ => break,
                }
                self.cursor.advance();
            }
            let ty = self.parse_type()?;
            self.cursor.expect_ident("a parameter name")?;
            if self.cursor.eat(TokenKind::Eq) {
                self.cursor
                    .skip_until(&[TokenKind::Comma, TokenKind::RParen])?;
            }
            params.push(Param { ty, is_this });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen, "`)`")?;
        Ok(params)
    }
}

fn strip_global(name: String) -> String {
    match name.strip_prefix("global::") {
        Some(rest) => rest.to_string(),
        None => name,
    }
}
