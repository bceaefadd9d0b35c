//! Semantic pass: resolve declarations against the symbol table and turn
//! marker attributes and declaration shapes into directives.

mod markers;

use mb_diagnostic::{Error, Result};
use mb_ir::{AliasPattern, BaseClassRule, ContentKind};
use mb_symbols::{source_spelling, Resolved, Scope, Symbol, SymbolKind, SymbolTable, UsingDirective};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::syntax::{
    AttrValue, Attribute, CompilationUnit, Member, Param, TypeDecl, TypeKind, TypeSyntax,
};
use crate::Directive;

use markers::{Marker, Site};

/// Parameter types of the model constructor.
const CONSTRUCTOR_PARAMETERS: [&str; 2] = ["IPublishedContent", "IPublishedElement"];

/// Every type the units declare, nested types included.
pub(crate) fn declared_symbols(units: &[CompilationUnit]) -> Vec<Symbol> {
    fn collect(decl: &TypeDecl, full_name: String, out: &mut Vec<Symbol>) {
        for nested in decl.nested_types() {
            collect(nested, format!("{full_name}+{}", metadata_name(nested)), out);
        }
        out.push(Symbol::new(full_name, symbol_kind(decl.kind)));
    }

    let mut symbols = Vec::new();
    for unit in units {
        for namespaced in &unit.types {
            let name = metadata_name(&namespaced.decl);
            let full_name = if namespaced.namespace.is_empty() {
                name
            } else {
                format!("{}.{name}", namespaced.namespace)
            };
            collect(&namespaced.decl, full_name, &mut symbols);
        }
    }
    symbols
}

fn metadata_name(decl: &TypeDecl) -> String {
    if decl.arity == 0 {
        decl.name.clone()
    } else {
        format!("{}`{}", decl.name, decl.arity)
    }
}

fn symbol_kind(kind: TypeKind) -> SymbolKind {
    match kind {
        TypeKind::Class | TypeKind::Record => SymbolKind::Class,
        TypeKind::Interface => SymbolKind::Interface,
        TypeKind::Struct => SymbolKind::Struct,
        TypeKind::Enum => SymbolKind::Enum,
    }
}

/// Where a base class was first declared, for partial-class conflicts.
struct DeclaredBase {
    base: String,
    file: String,
    line: u32,
}

pub(crate) struct Analyzer<'a> {
    table: &'a SymbolTable,
    global_usings: Vec<UsingDirective>,
    directives: Vec<Directive>,
    bases: FxHashMap<String, DeclaredBase>,
}

impl<'a> Analyzer<'a> {
    pub(crate) fn new(table: &'a SymbolTable, units: &[CompilationUnit]) -> Self {
        let mut global_usings: Vec<UsingDirective> = Vec::new();
        for using in units.iter().flat_map(|unit| &unit.global_usings) {
            if !global_usings.contains(using) {
                global_usings.push(using.clone());
            }
        }
        Analyzer {
            table,
            global_usings,
            directives: Vec::new(),
            bases: FxHashMap::default(),
        }
    }

    pub(crate) fn finish(self) -> Vec<Directive> {
        self.directives
    }

    pub(crate) fn analyze_unit(&mut self, unit: &CompilationUnit) -> Result<()> {
        let mut usings = self.global_usings.clone();
        usings.extend(unit.usings.iter().cloned());

        let scope = Scope::new(self.table, "", usings.clone());
        for attribute in &unit.assembly_attributes {
            self.assembly_attribute(&scope, &unit.file, attribute)?;
        }

        for namespaced in &unit.types {
            let mut type_usings = usings.clone();
            type_usings.extend(namespaced.usings.iter().cloned());
            let full_name = if namespaced.namespace.is_empty() {
                metadata_name(&namespaced.decl)
            } else {
                format!("{}.{}", namespaced.namespace, metadata_name(&namespaced.decl))
            };
            let context = TypeContext {
                file: &unit.file,
                namespace: &namespaced.namespace,
                usings: &type_usings,
                enclosing_members: Vec::new(),
            };
            self.analyze_type(&context, &namespaced.decl, &full_name)?;
        }
        Ok(())
    }

    fn analyze_type(
        &mut self,
        context: &TypeContext<'_>,
        decl: &TypeDecl,
        full_name: &str,
    ) -> Result<()> {
        let scope = Scope::new(self.table, context.namespace, context.usings.to_vec())
            .with_enclosing_members(context.enclosing_members.clone());
        let class = decl.name.as_str();

        for attribute in &decl.attributes {
            self.declaration_attribute(context.file, class, attribute, Site::Class)?;
        }

        if matches!(decl.kind, TypeKind::Class | TypeKind::Record | TypeKind::Struct) {
            self.analyze_bases(&scope, context.file, decl, full_name)?;
        }

        let mut nested_members: Vec<String> = decl
            .nested_types()
            .map(|nested| format!("{full_name}+{}", metadata_name(nested)))
            .collect();
        nested_members.extend(context.enclosing_members.iter().cloned());

        for member in &decl.members {
            match member {
                Member::Constructor { params, line } => {
                    if is_model_constructor(params) {
                        trace!(class, line, "model constructor");
                        self.directives.push(Directive::Constructor {
                            class: class.to_string(),
                        });
                    }
                }
                Member::Method {
                    name,
                    is_static,
                    params,
                    ..
                } => {
                    if let Some(owner) = extension_owner(*is_static, params) {
                        let property = name.strip_prefix("Get").unwrap_or(name);
                        self.directives.push(Directive::ExtensionImplemented {
                            class: owner.to_string(),
                            property: property.to_string(),
                        });
                    }
                }
                Member::Property { attributes, .. } => {
                    for attribute in attributes {
                        self.declaration_attribute(context.file, class, attribute, Site::Property)?;
                    }
                }
                Member::Type(nested) => {
                    let nested_context = TypeContext {
                        file: context.file,
                        namespace: context.namespace,
                        usings: context.usings,
                        enclosing_members: nested_members.clone(),
                    };
                    let nested_name = format!("{full_name}+{}", metadata_name(nested));
                    self.analyze_type(&nested_context, nested, &nested_name)?;
                }
            }
        }
        Ok(())
    }

    /// Split a base list into the base class and interfaces.
    ///
    /// The first entry is the base class unless it resolves to an interface;
    /// names that do not resolve at all are taken to be classes.
    fn analyze_bases(
        &mut self,
        scope: &Scope<'_>,
        file: &str,
        decl: &TypeDecl,
        full_name: &str,
    ) -> Result<()> {
        let mut interfaces = Vec::new();
        for (index, base) in decl.bases.iter().enumerate() {
            let resolved = resolve_type(scope, base);
            let is_interface = resolved
                .as_ref()
                .is_some_and(|(_, kind)| kind.is_interface());
            let spelling = match &resolved {
                Some((full, _)) => source_spelling(full),
                None => base.dotted(),
            };

            if index > 0 || is_interface || decl.kind == TypeKind::Struct {
                interfaces.push(spelling);
                continue;
            }
            let is_object = base.is_object()
                || resolved.as_ref().is_some_and(|(full, _)| full == "System.Object");
            if is_object {
                continue;
            }

            let simple = match &resolved {
                Some((full, _)) => simple_name(full).to_string(),
                None => base
                    .last_segment()
                    .map_or_else(|| base.dotted(), |(name, _)| name.to_string()),
            };
            self.record_base(file, decl, full_name, &spelling)?;
            trace!(class = %decl.name, base = %simple, "declared base class");
            self.directives.push(Directive::BaseClass {
                class: decl.name.clone(),
                base: simple,
            });
        }

        if !interfaces.is_empty() {
            self.directives.push(Directive::Interfaces {
                class: decl.name.clone(),
                interfaces,
            });
        }
        Ok(())
    }

    fn record_base(
        &mut self,
        file: &str,
        decl: &TypeDecl,
        full_name: &str,
        base: &str,
    ) -> Result<()> {
        if let Some(previous) = self.bases.get(full_name) {
            if previous.base != base {
                return Err(Error::base_conflict(
                    file,
                    decl.line,
                    format!(
                        "partial class `{}` declares base class `{base}`, but `{}` at {}:{}",
                        decl.name, previous.base, previous.file, previous.line
                    ),
                ));
            }
            return Ok(());
        }
        self.bases.insert(
            full_name.to_string(),
            DeclaredBase {
                base: base.to_string(),
                file: file.to_string(),
                line: decl.line,
            },
        );
        Ok(())
    }

    fn assembly_attribute(
        &mut self,
        scope: &Scope<'_>,
        file: &str,
        attribute: &Attribute,
    ) -> Result<()> {
        let Some(marker) = Marker::recognize(&attribute.name) else {
            return Ok(());
        };
        check_site(file, attribute, marker, Site::Assembly)?;
        let directive = match marker {
            Marker::IgnoreContentType => {
                let [pattern] = string_args::<1>(file, attribute, marker)?;
                Directive::IgnoreContent(AliasPattern::parse(&pattern))
            }
            Marker::RenameContentType => {
                let [alias, clr_name] = string_args::<2>(file, attribute, marker)?;
                Directive::RenameContent { alias, clr_name }
            }
            Marker::ModelsNamespace => {
                let [namespace] = string_args::<1>(file, attribute, marker)?;
                Directive::Namespace(namespace)
            }
            Marker::ModelsUsing => {
                let [using] = string_args::<1>(file, attribute, marker)?;
                Directive::Using(using)
            }
            Marker::ModelInfosClass => {
                let [name] = string_args::<1>(file, attribute, marker)?;
                Directive::ModelInfosClass(name)
            }
            Marker::ModelsBaseClass => {
                Directive::ModelsBaseClass(base_class_rule(scope, file, attribute)?)
            }
            _ => return Ok(()),
        };
        self.directives.push(directive);
        Ok(())
    }

    fn declaration_attribute(
        &mut self,
        file: &str,
        class: &str,
        attribute: &Attribute,
        site: Site,
    ) -> Result<()> {
        let Some(marker) = Marker::recognize(&attribute.name) else {
            return Ok(());
        };
        check_site(file, attribute, marker, site)?;
        let class = class.to_string();
        let directive = match marker {
            Marker::ImplementContentType => {
                let [alias] = string_args::<1>(file, attribute, marker)?;
                Directive::ImplementContent { alias, clr_name: class }
            }
            Marker::RenameContentType => {
                let [alias] = string_args::<1>(file, attribute, marker)?;
                Directive::RenameContent { alias, clr_name: class }
            }
            Marker::IgnorePropertyType => {
                let [pattern] = string_args::<1>(file, attribute, marker)?;
                Directive::IgnoreProperty {
                    class,
                    pattern: AliasPattern::parse(&pattern),
                }
            }
            Marker::RenamePropertyType => {
                let [alias, clr_name] = string_args::<2>(file, attribute, marker)?;
                Directive::RenameProperty {
                    class,
                    alias,
                    clr_name,
                }
            }
            Marker::ImplementPropertyType => {
                let [alias] = string_args::<1>(file, attribute, marker)?;
                Directive::IgnoreProperty {
                    class,
                    pattern: AliasPattern::Exact(alias.to_lowercase()),
                }
            }
            _ => return Ok(()),
        };
        trace!(%directive, "marker attribute");
        self.directives.push(directive);
        Ok(())
    }
}

struct TypeContext<'c> {
    file: &'c str,
    namespace: &'c str,
    usings: &'c [UsingDirective],
    /// Full names of types nested in the enclosing types, innermost first.
    enclosing_members: Vec<String>,
}

fn check_site(file: &str, attribute: &Attribute, marker: Marker, site: Site) -> Result<()> {
    if marker.allowed_at(site) {
        Ok(())
    } else {
        Err(Error::attribute(
            file,
            attribute.line,
            format!("`{}` cannot be applied to {}", marker.name(), site.describe()),
        ))
    }
}

/// Exactly `N` positional, non-empty string arguments.
fn string_args<const N: usize>(
    file: &str,
    attribute: &Attribute,
    marker: Marker,
) -> Result<[String; N]> {
    let values: Vec<String> = attribute
        .args
        .iter()
        .filter(|arg| arg.name.is_none())
        .filter_map(|arg| match &arg.value {
            AttrValue::Str(value) if !value.trim().is_empty() => Some(value.clone()),
            _ => None,
        })
        .collect();
    let positional = attribute.args.iter().filter(|arg| arg.name.is_none()).count();
    if positional != N {
        return Err(Error::attribute(
            file,
            attribute.line,
            format!("`{}` expects {N} string argument(s), found {positional}", marker.name()),
        ));
    }
    values.try_into().map_err(|_| {
        Error::attribute(
            file,
            attribute.line,
            format!("`{}` arguments must be non-empty string constants", marker.name()),
        )
    })
}

/// `ModelsBaseClass(typeof(T) [, PublishedItemType.Kind [, "aliasPattern"]] [, Force = true])`
fn base_class_rule(scope: &Scope<'_>, file: &str, attribute: &Attribute) -> Result<BaseClassRule> {
    let fail = |message: &str| {
        Error::attribute(file, attribute.line, format!("`ModelsBaseClass` {message}"))
    };

    let positional: Vec<&AttrValue> = attribute
        .args
        .iter()
        .filter(|arg| arg.name.is_none())
        .map(|arg| &arg.value)
        .collect();
    let Some(AttrValue::TypeOf(ty)) = positional.first() else {
        return Err(fail("expects `typeof(BaseClass)` as its first argument"));
    };
    if positional.len() > 3 {
        return Err(fail("takes at most 3 arguments"));
    }

    let class_name = match resolve_type(scope, ty) {
        Some((full, _)) => full,
        None => ty.dotted(),
    };
    let mut rule = BaseClassRule::new(class_name);

    if let Some(kind) = positional.get(1) {
        let AttrValue::Member(member) = kind else {
            return Err(fail("expects a `PublishedItemType` member as its second argument"));
        };
        let item = member.rsplit('.').next().unwrap_or(member);
        let Some(kind) = ContentKind::from_item_type(item) else {
            return Err(fail(&format!("does not know the item type `{member}`")));
        };
        rule = rule.for_kind(kind);
    }
    if let Some(pattern) = positional.get(2) {
        let AttrValue::Str(pattern) = pattern else {
            return Err(fail("expects an alias pattern string as its third argument"));
        };
        rule = rule.for_aliases(pattern);
    }
    for arg in attribute.args.iter().filter(|arg| arg.name.is_some()) {
        match (arg.name.as_deref(), &arg.value) {
            (Some("Force" | "force"), AttrValue::Bool(true)) => rule = rule.forced(),
            (Some("Force" | "force"), AttrValue::Bool(false)) => {}
            (Some(name), _) => return Err(fail(&format!("has no argument `{name}`"))),
            (None, _) => {}
        }
    }
    Ok(rule)
}

/// Resolve a written type to a CLR full name and kind.
fn resolve_type(scope: &Scope<'_>, ty: &TypeSyntax) -> Option<(String, SymbolKind)> {
    match ty {
        TypeSyntax::Predefined("object") => Some(("System.Object".to_string(), SymbolKind::Class)),
        TypeSyntax::Name { .. } => {
            let (_, arity) = ty.last_segment()?;
            match scope.resolve(&ty.dotted(), arity)? {
                Resolved::Type(full) => {
                    let kind = scope.table().kind_of(&full)?;
                    Some((full, kind))
                }
                Resolved::Namespace(_) => None,
            }
        }
        _ => None,
    }
}

fn simple_name(full_name: &str) -> &str {
    let last = full_name.rsplit(['.', '+']).next().unwrap_or(full_name);
    last.split('`').next().unwrap_or(last)
}

fn is_model_constructor(params: &[Param]) -> bool {
    match params {
        [param] => param
            .ty
            .last_segment()
            .is_some_and(|(name, arity)| arity == 0 && CONSTRUCTOR_PARAMETERS.contains(&name)),
        _ => false,
    }
}

/// Owner type name of an extension accessor: `static T M(this Owner x, string, string)`.
fn extension_owner(is_static: bool, params: &[Param]) -> Option<&str> {
    match params {
        [owner, culture, segment]
            if is_static && owner.is_this && culture.ty.is_string() && segment.ty.is_string() =>
        {
            owner.ty.last_segment().map(|(name, _)| name)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests;
