//! Constant values of string and char literals.

/// Value of a regular (`"..."`) or verbatim (`@"..."`) string literal.
///
/// Returns `None` for anything else, including interpolated strings and
/// unknown escapes.
pub fn string_value(literal: &str) -> Option<String> {
    if let Some(body) = literal
        .strip_prefix("@\"")
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return Some(body.replace("\"\"", "\""));
    }
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    unescape(body)
}

/// Value of a char literal.
pub fn char_value(literal: &str) -> Option<char> {
    let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let unescaped = unescape(body)?;
    let mut chars = unescaped.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            '\'' => '\'',
            '"' => '"',
            '\\' => '\\',
            '0' => '\0',
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return None;
                }
                char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
            }
            _ => return None,
        };
        out.push(escaped);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_strings_unescape() {
        assert_eq!(string_value(r#""a\"b\\c\n""#), Some("a\"b\\c\n".to_string()));
        assert_eq!(string_value(r#""\u0041""#), Some("A".to_string()));
        assert_eq!(string_value(r#""\q""#), None);
    }

    #[test]
    fn verbatim_strings_double_quotes() {
        assert_eq!(string_value(r#"@"C:\x ""y""""#), Some(r#"C:\x "y""#.to_string()));
    }

    #[test]
    fn interpolated_strings_have_no_value() {
        assert_eq!(string_value(r#"$"{a}""#), None);
    }

    #[test]
    fn chars() {
        assert_eq!(char_value("'x'"), Some('x'));
        assert_eq!(char_value(r"'\n'"), Some('\n'));
        assert_eq!(char_value("'xy'"), None);
    }
}
