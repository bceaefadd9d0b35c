//! Alias patterns used by ignore and base-class rules.

use std::fmt;

/// An alias, or an alias prefix written with a trailing `*`.
///
/// Matching is always case-insensitive, like aliases themselves.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AliasPattern {
    /// Matches exactly one alias (stored lowercase).
    Exact(String),
    /// Matches every alias starting with the prefix (stored lowercase).
    Prefix(String),
}

impl AliasPattern {
    pub fn parse(text: &str) -> Self {
        match text.strip_suffix('*') {
            Some(prefix) => AliasPattern::Prefix(prefix.to_lowercase()),
            None => AliasPattern::Exact(text.to_lowercase()),
        }
    }

    pub fn matches(&self, alias: &str) -> bool {
        let alias = alias.to_lowercase();
        match self {
            AliasPattern::Exact(exact) => alias == *exact,
            AliasPattern::Prefix(prefix) => alias.starts_with(prefix.as_str()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, AliasPattern::Prefix(_))
    }

    /// Ordering key for "most specific rule wins": exact patterns beat
    /// any wildcard, longer prefixes beat shorter ones.
    pub fn specificity(&self) -> usize {
        match self {
            AliasPattern::Exact(_) => usize::MAX,
            AliasPattern::Prefix(prefix) => prefix.len(),
        }
    }
}

impl fmt::Display for AliasPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasPattern::Exact(alias) => f.write_str(alias),
            AliasPattern::Prefix(prefix) => write!(f, "{prefix}*"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AliasPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(AliasPattern::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wildcard_matches_prefix_only() {
        let pattern = AliasPattern::parse("foo*");
        assert!(pattern.matches("foo1"));
        assert!(pattern.matches("foobar"));
        assert!(pattern.matches("FOObar"));
        assert!(pattern.matches("foo"));
        assert!(!pattern.matches("xfoo"));
        assert!(!pattern.matches("fo"));
    }

    #[test]
    fn exact_is_case_insensitive() {
        let pattern = AliasPattern::parse("HomePage");
        assert!(pattern.matches("homepage"));
        assert!(pattern.matches("HOMEPAGE"));
        assert!(!pattern.matches("homepage2"));
        assert!(!pattern.is_wildcard());
    }

    #[test]
    fn specificity_orders_rules() {
        let exact = AliasPattern::parse("blogPost");
        let long = AliasPattern::parse("blog*");
        let short = AliasPattern::parse("b*");
        assert!(exact.specificity() > long.specificity());
        assert!(long.specificity() > short.specificity());
    }

    #[test]
    fn display_keeps_star() {
        assert_eq!(AliasPattern::parse("Type*").to_string(), "type*");
    }

    proptest! {
        #[test]
        fn prefix_pattern_matches_iff_alias_starts_with_prefix(
            prefix in "[a-zA-Z]{1,6}",
            alias in "[a-zA-Z0-9]{0,10}",
        ) {
            let pattern = AliasPattern::parse(&format!("{prefix}*"));
            let expected = alias.to_lowercase().starts_with(&prefix.to_lowercase());
            prop_assert_eq!(pattern.matches(&alias), expected);
        }
    }
}
