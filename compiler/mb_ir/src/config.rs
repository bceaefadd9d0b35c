//! Generation configuration.
//!
//! Passed explicitly into the builder and the writer; nothing reads
//! configuration from ambient state.

use crate::{AliasPattern, ContentKind};

/// Namespace models are generated into unless developer code says otherwise.
pub const DEFAULT_NAMESPACE: &str = "Umbraco.Web.PublishedModels";

/// Class holding the per-batch model metadata.
pub const DEFAULT_MODEL_INFOS_CLASS: &str = "ModelInfos";

/// How CLR names are derived from content types and properties.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamingStrategy {
    /// The alias itself, made into a legal identifier.
    RawAlias,
    /// The alias, Pascal-cased.
    #[default]
    AliasPascalCased,
    /// The display name, Pascal-cased.
    NameDerived,
}

/// What happens when a property's CLR name equals its type's CLR name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropertyNameMode {
    /// Abort the build.
    #[default]
    Strict,
    /// Skip the property and leave a warning in the generated file.
    Tolerant,
}

/// Selects a custom base class for some content types.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct BaseClassRule {
    /// Restrict to one kind; `None` applies to every kind.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: Option<ContentKind>,
    /// Restrict to matching aliases; `None` applies to every alias.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alias_pattern: Option<AliasPattern>,
    pub class_name: String,
    /// Emit the base class even when developer code declares one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub force: bool,
}

impl BaseClassRule {
    pub fn new(class_name: impl Into<String>) -> Self {
        BaseClassRule {
            kind: None,
            alias_pattern: None,
            class_name: class_name.into(),
            force: false,
        }
    }

    #[must_use]
    pub fn for_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn for_aliases(mut self, pattern: &str) -> Self {
        self.alias_pattern = Some(AliasPattern::parse(pattern));
        self
    }

    #[must_use]
    pub fn forced(mut self) -> Self {
        self.force = true;
        self
    }

    pub fn matches(&self, kind: ContentKind, alias: &str) -> bool {
        self.kind.map_or(true, |k| k == kind)
            && self
                .alias_pattern
                .as_ref()
                .map_or(true, |pattern| pattern.matches(alias))
    }

    /// Ordering key: alias patterns outrank kind filters, which outrank
    /// catch-all rules.
    pub fn specificity(&self) -> (usize, bool) {
        (
            self.alias_pattern
                .as_ref()
                .map_or(0, |pattern| pattern.specificity().saturating_add(1)),
            self.kind.is_some(),
        )
    }
}

/// Generation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub naming: NamingStrategy,
    pub property_name_mode: PropertyNameMode,
    pub namespace: String,
    /// Extra using directives for every generated file.
    pub usings: Vec<String>,
    pub base_class_rules: Vec<BaseClassRule>,
    pub model_infos_class: String,
    /// Written into file headers; the only token allowed to differ
    /// between two runs over the same model.
    pub generator_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            naming: NamingStrategy::default(),
            property_name_mode: PropertyNameMode::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            usings: Vec::new(),
            base_class_rules: Vec::new(),
            model_infos_class: DEFAULT_MODEL_INFOS_CLASS.to_string(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn tolerant(mut self) -> Self {
        self.property_name_mode = PropertyNameMode::Tolerant;
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_using(mut self, using: impl Into<String>) -> Self {
        self.usings.push(using.into());
        self
    }

    #[must_use]
    pub fn with_base_class_rule(mut self, rule: BaseClassRule) -> Self {
        self.base_class_rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_generator_version(mut self, version: impl Into<String>) -> Self {
        self.generator_version = version.into();
        self
    }

    pub fn is_tolerant(&self) -> bool {
        self.property_name_mode == PropertyNameMode::Tolerant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_matching_combines_filters() {
        let rule = BaseClassRule::new("BlogBase")
            .for_kind(ContentKind::Content)
            .for_aliases("blog*");
        assert!(rule.matches(ContentKind::Content, "blogPost"));
        assert!(!rule.matches(ContentKind::Media, "blogPost"));
        assert!(!rule.matches(ContentKind::Content, "newsPost"));
        assert!(BaseClassRule::new("Any").matches(ContentKind::Member, "x"));
    }

    #[test]
    fn rule_specificity_prefers_aliases_then_kind() {
        let any = BaseClassRule::new("A");
        let kind = BaseClassRule::new("B").for_kind(ContentKind::Media);
        let prefix = BaseClassRule::new("C").for_aliases("img*");
        let exact = BaseClassRule::new("D").for_aliases("image");
        assert!(kind.specificity() > any.specificity());
        assert!(prefix.specificity() > kind.specificity());
        assert!(exact.specificity() > prefix.specificity());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.naming, NamingStrategy::AliasPascalCased);
        assert!(!config.is_tolerant());
        assert!(Config::default().tolerant().is_tolerant());
    }
}
