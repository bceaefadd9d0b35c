//! Directives discovered in developer code.
//!
//! The parser reduces marker attributes and declaration shapes to this
//! list; the builder never sees attribute syntax.

use std::fmt;

use mb_ir::{AliasPattern, BaseClassRule};

/// One instruction for the builder. Class names are simple CLR names.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Directive {
    /// Do not generate content types matching the pattern.
    IgnoreContent(AliasPattern),
    /// Generate the content type under another class name.
    RenameContent { alias: String, clr_name: String },
    /// A developer class stands for the content type.
    ImplementContent { alias: String, clr_name: String },
    /// Skip matching properties on the class and its subclasses.
    IgnoreProperty { class: String, pattern: AliasPattern },
    RenameProperty {
        class: String,
        alias: String,
        clr_name: String,
    },
    /// The developer class already declares a base class.
    BaseClass { class: String, base: String },
    /// Interfaces the developer class declares.
    Interfaces {
        class: String,
        interfaces: Vec<String>,
    },
    /// The developer class declares the model constructor.
    Constructor { class: String },
    /// A hand-written extension accessor exists for the property.
    ExtensionImplemented { class: String, property: String },
    Namespace(String),
    Using(String),
    ModelInfosClass(String),
    ModelsBaseClass(BaseClassRule),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::IgnoreContent(pattern) => write!(f, "ignore content {pattern}"),
            Directive::RenameContent { alias, clr_name } => {
                write!(f, "rename content {alias} -> {clr_name}")
            }
            Directive::ImplementContent { alias, clr_name } => {
                write!(f, "implement content {alias} in {clr_name}")
            }
            Directive::IgnoreProperty { class, pattern } => {
                write!(f, "ignore property {class}.{pattern}")
            }
            Directive::RenameProperty {
                class,
                alias,
                clr_name,
            } => write!(f, "rename property {class}.{alias} -> {clr_name}"),
            Directive::BaseClass { class, base } => write!(f, "{class} : {base}"),
            Directive::Interfaces { class, interfaces } => {
                write!(f, "{class} implements {}", interfaces.join(", "))
            }
            Directive::Constructor { class } => write!(f, "{class} declares a constructor"),
            Directive::ExtensionImplemented { class, property } => {
                write!(f, "{class}.{property} has an extension accessor")
            }
            Directive::Namespace(namespace) => write!(f, "namespace {namespace}"),
            Directive::Using(using) => write!(f, "using {using}"),
            Directive::ModelInfosClass(name) => write!(f, "model infos class {name}"),
            Directive::ModelsBaseClass(rule) => write!(f, "base class {}", rule.class_name),
        }
    }
}
