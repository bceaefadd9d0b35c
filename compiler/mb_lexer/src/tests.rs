use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

#[test]
fn class_declaration() {
    assert_eq!(
        kinds("public partial class Foo : Bar<int> { }"),
        vec![
            TokenKind::Keyword(Keyword::Public),
            TokenKind::Ident,
            TokenKind::Keyword(Keyword::Class),
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Keyword(Keyword::Predefined("int")),
            TokenKind::Gt,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn trivia_is_dropped() {
    let source = "// line\n/* block\n * more */\n#region X\nusing A; #endregion";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Keyword(Keyword::Using),
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn nested_generic_close_is_two_tokens() {
    assert_eq!(
        kinds("A<B<C>>"),
        vec![
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn literals() {
    assert_eq!(
        kinds(r#""a" @"b""c" $"{x}" 'c' 12.5m 0xFF"#),
        vec![
            TokenKind::StringLit,
            TokenKind::StringLit,
            TokenKind::InterpolatedString,
            TokenKind::CharLit,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn qualified_and_global_names() {
    assert_eq!(
        kinds("global::System.Text"),
        vec![
            TokenKind::Ident,
            TokenKind::DoubleColon,
            TokenKind::Ident,
            TokenKind::Dot,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn verbatim_identifier_text() {
    let source = "@class";
    let tokens = lex(source);
    assert_eq!(tokens.get(0).kind, TokenKind::VerbatimIdent);
    assert_eq!(ident_text(tokens.get(0), source), "class");
}

#[test]
fn unterminated_string_is_an_error_token() {
    let tokens = lex("\"abc\nx");
    assert_eq!(tokens.get(0).kind, TokenKind::Error);
    assert_eq!(tokens.get(tokens.len() - 1).kind, TokenKind::Eof);
}

#[test]
fn expression_bodied_member() {
    assert_eq!(
        kinds("=> x == y;"),
        vec![
            TokenKind::FatArrow,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Eq,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}
