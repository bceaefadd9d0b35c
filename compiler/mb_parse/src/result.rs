//! The immutable lookup tables the builder queries.

use mb_ir::{AliasPattern, BaseClassRule};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Directive;

/// Developer overrides, keyed by lowercase alias or by class name.
#[derive(Clone, Debug, Default)]
pub struct ParseResult {
    ignored_content: Vec<AliasPattern>,
    renamed_content: FxHashMap<String, String>,
    implemented_content: FxHashSet<String>,
    ignored_properties: FxHashMap<String, Vec<AliasPattern>>,
    renamed_properties: FxHashMap<String, FxHashMap<String, String>>,
    base_classes: FxHashMap<String, String>,
    interfaces: FxHashMap<String, Vec<String>>,
    constructors: FxHashSet<String>,
    extensions: FxHashSet<(String, String)>,
    namespace: Option<String>,
    usings: Vec<String>,
    model_infos_class: Option<String>,
    base_class_rules: Vec<BaseClassRule>,
}

impl ParseResult {
    /// Build the tables. Later directives overwrite earlier ones for the
    /// same key.
    pub fn from_directives(directives: &[Directive]) -> Self {
        let mut result = ParseResult::default();
        for directive in directives {
            match directive {
                Directive::IgnoreContent(pattern) => {
                    if !result.ignored_content.contains(pattern) {
                        result.ignored_content.push(pattern.clone());
                    }
                }
                Directive::RenameContent { alias, clr_name } => {
                    result
                        .renamed_content
                        .insert(alias.to_lowercase(), clr_name.clone());
                }
                Directive::ImplementContent { alias, clr_name } => {
                    let alias = alias.to_lowercase();
                    result.renamed_content.insert(alias.clone(), clr_name.clone());
                    result.implemented_content.insert(alias);
                }
                Directive::IgnoreProperty { class, pattern } => {
                    result
                        .ignored_properties
                        .entry(class.clone())
                        .or_default()
                        .push(pattern.clone());
                }
                Directive::RenameProperty {
                    class,
                    alias,
                    clr_name,
                } => {
                    result
                        .renamed_properties
                        .entry(class.clone())
                        .or_default()
                        .insert(alias.to_lowercase(), clr_name.clone());
                }
                Directive::BaseClass { class, base } => {
                    result.base_classes.insert(class.clone(), base.clone());
                }
                Directive::Interfaces { class, interfaces } => {
                    let declared = result.interfaces.entry(class.clone()).or_default();
                    for interface in interfaces {
                        if !declared.contains(interface) {
                            declared.push(interface.clone());
                        }
                    }
                }
                Directive::Constructor { class } => {
                    result.constructors.insert(class.clone());
                }
                Directive::ExtensionImplemented { class, property } => {
                    result.extensions.insert((class.clone(), property.clone()));
                }
                Directive::Namespace(namespace) => result.namespace = Some(namespace.clone()),
                Directive::Using(using) => {
                    if !result.usings.contains(using) {
                        result.usings.push(using.clone());
                    }
                }
                Directive::ModelInfosClass(name) => result.model_infos_class = Some(name.clone()),
                Directive::ModelsBaseClass(rule) => result.base_class_rules.push(rule.clone()),
            }
        }
        result
    }

    pub fn is_ignored_content(&self, alias: &str) -> bool {
        self.ignored_content.iter().any(|pattern| pattern.matches(alias))
    }

    /// Developer-chosen class name for a content type.
    pub fn content_clr_name(&self, alias: &str) -> Option<&str> {
        self.renamed_content
            .get(&alias.to_lowercase())
            .map(String::as_str)
    }

    pub fn has_implement(&self, alias: &str) -> bool {
        self.implemented_content.contains(&alias.to_lowercase())
    }

    pub fn has_base(&self, class: &str) -> bool {
        self.base_classes.contains_key(class)
    }

    pub fn base_class(&self, class: &str) -> Option<&str> {
        self.base_classes.get(class).map(String::as_str)
    }

    pub fn interfaces(&self, class: &str) -> &[String] {
        self.interfaces.get(class).map_or(&[][..], Vec::as_slice)
    }

    pub fn has_ctor(&self, class: &str) -> bool {
        self.constructors.contains(class)
    }

    /// Whether an extension accessor for `property` taking `class` exists.
    pub fn is_extension_implemented(&self, class: &str, property: &str) -> bool {
        self.extensions
            .contains(&(class.to_string(), property.to_string()))
    }

    /// Whether `class` or one of its developer-declared base classes
    /// ignores the property.
    pub fn is_ignored_property(&self, class: &str, alias: &str) -> bool {
        self.class_chain(class).any(|class| {
            self.ignored_properties
                .get(class)
                .is_some_and(|patterns| patterns.iter().any(|pattern| pattern.matches(alias)))
        })
    }

    /// Rename of the property from the nearest class in the developer base
    /// chain that declares one.
    pub fn property_clr_name(&self, class: &str, alias: &str) -> Option<&str> {
        let alias = alias.to_lowercase();
        self.class_chain(class).find_map(|class| {
            self.renamed_properties
                .get(class)
                .and_then(|renames| renames.get(&alias))
                .map(String::as_str)
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn usings(&self) -> &[String] {
        &self.usings
    }

    pub fn model_infos_class(&self) -> Option<&str> {
        self.model_infos_class.as_deref()
    }

    pub fn base_class_rules(&self) -> &[BaseClassRule] {
        &self.base_class_rules
    }

    /// `class`, then its developer-declared base classes. Stops on a
    /// repeated name.
    fn class_chain<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut next = Some(class);
        std::iter::from_fn(move || {
            let current = next?;
            if !seen.insert(current) {
                return None;
            }
            next = self.base_classes.get(current).map(String::as_str);
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests;
