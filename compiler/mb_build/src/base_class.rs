//! Base class names.

use mb_ir::{BaseClassRule, ContentKind};
use tracing::debug;

use crate::Builder;

/// Namespace of the host's default model base classes.
const DEFAULT_BASE_NAMESPACE: &str = "Umbraco.Core.Models.PublishedContent";

/// The most specific rule matching `kind` and `alias`; the first one wins
/// among equally specific rules.
fn best_rule<'r>(
    rules: impl Iterator<Item = &'r BaseClassRule>,
    kind: ContentKind,
    alias: &str,
) -> Option<&'r BaseClassRule> {
    let mut best: Option<&BaseClassRule> = None;
    for rule in rules.filter(|rule| rule.matches(kind, alias)) {
        if best.map_or(true, |current| rule.specificity() > current.specificity()) {
            best = Some(rule);
        }
    }
    best
}

impl Builder<'_> {
    /// A live parent is the base class. Otherwise the best developer or
    /// configured rule applies, developer rules first, then the kind's
    /// default model class.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn resolve_base_classes(&mut self) {
        let rules: Vec<&BaseClassRule> = self
            .parse
            .base_class_rules()
            .iter()
            .chain(&self.config.base_class_rules)
            .collect();
        let ids: Vec<_> = self.graph.live_types().map(|ty| ty.id).collect();
        for id in ids {
            let ty = self.graph.get(id);
            let (name, force) = if let Some(parent) = ty.base {
                (self.graph.get(parent).clr_name.clone(), false)
            } else if let Some(rule) = best_rule(rules.iter().copied(), ty.kind, &ty.alias) {
                debug!(alias = %ty.alias, base = %rule.class_name, "base class rule applied");
                (rule.class_name.clone(), rule.force)
            } else {
                (
                    format!("{DEFAULT_BASE_NAMESPACE}.{}", ty.kind.default_base_class()),
                    false,
                )
            };

            let ty = self.graph.get_mut(id);
            ty.base_class_name = name;
            if force {
                ty.has_base = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_specific_rule_wins() {
        let rules = [
            BaseClassRule::new("Any"),
            BaseClassRule::new("Content").for_kind(ContentKind::Content),
            BaseClassRule::new("Blog").for_aliases("blog*"),
            BaseClassRule::new("Post").for_aliases("blogPost"),
        ];
        let pick =
            |kind, alias| best_rule(rules.iter(), kind, alias).map(|r| r.class_name.as_str());
        assert_eq!(pick(ContentKind::Content, "blogPost"), Some("Post"));
        assert_eq!(pick(ContentKind::Content, "blogList"), Some("Blog"));
        assert_eq!(pick(ContentKind::Content, "home"), Some("Content"));
        assert_eq!(pick(ContentKind::Media, "image"), Some("Any"));
    }

    #[test]
    fn ties_go_to_the_first_rule() {
        let rules = [BaseClassRule::new("First"), BaseClassRule::new("Second")];
        let best = best_rule(rules.iter(), ContentKind::Content, "home");
        assert_eq!(best.map(|r| r.class_name.as_str()), Some("First"));
    }
}
