//! Code model builder.
//!
//! Annotates a [`TypeModelGraph`] in place from the developer overrides of
//! a [`ParseResult`] and the run [`Config`]. The steps run in a fixed
//! order; each one reads what the previous ones computed:
//!
//! 1. CLR names for types and properties
//! 2. model references by alias become graph handles
//! 3. ignored content types, propagated down the parent chain
//! 4. content renames
//! 5. implement markers
//! 6. hand-written base classes and constructors
//! 7. property ignores, renames and extension accessors
//! 8. name invariants
//! 9. mixin interfaces
//! 10. the element composition rule
//! 11. base class names

mod base_class;
mod checks;
mod interfaces;
mod naming;
mod properties;

use std::collections::BTreeMap;

use mb_diagnostic::{Diagnostic, Error, Result};
use mb_ir::{Config, ContentTypeId, TypeModelGraph};
use mb_parse::ParseResult;
use rustc_hash::FxHashMap;
use tracing::debug;

pub use naming::clr_name;

/// A finished code model, ready for the writer.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub graph: TypeModelGraph,
    /// Namespace of the generated models.
    pub namespace: String,
    /// Config usings, then developer usings; no duplicates.
    pub usings: Vec<String>,
    pub model_infos_class: String,
    /// Alias to developer-chosen class name, for every renamed type.
    pub renamed: BTreeMap<String, String>,
    /// Non-fatal findings, such as properties skipped in tolerant mode.
    pub warnings: Vec<Diagnostic>,
}

/// Build the code model for one generation run.
#[tracing::instrument(level = "debug", skip_all, fields(types = graph.len()))]
pub fn build(
    mut graph: TypeModelGraph,
    parse: &ParseResult,
    config: &Config,
) -> Result<BuildOutput> {
    let report = Builder::new(&mut graph, parse, config).run()?;

    let namespace = parse
        .namespace()
        .map_or_else(|| config.namespace.clone(), str::to_string);
    let mut usings: Vec<String> = Vec::new();
    for using in config.usings.iter().chain(parse.usings()) {
        if !usings.contains(using) {
            usings.push(using.clone());
        }
    }
    let model_infos_class = parse
        .model_infos_class()
        .map_or_else(|| config.model_infos_class.clone(), str::to_string);

    Ok(BuildOutput {
        graph,
        namespace,
        usings,
        model_infos_class,
        renamed: report.renamed,
        warnings: report.warnings,
    })
}

/// What a builder run reports besides the annotations it makes.
#[derive(Clone, Debug, Default)]
pub struct BuildReport {
    pub renamed: BTreeMap<String, String>,
    pub warnings: Vec<Diagnostic>,
}

/// Runs the builder steps over a borrowed graph.
pub struct Builder<'a> {
    graph: &'a mut TypeModelGraph,
    parse: &'a ParseResult,
    config: &'a Config,
    report: BuildReport,
}

impl<'a> Builder<'a> {
    pub fn new(graph: &'a mut TypeModelGraph, parse: &'a ParseResult, config: &'a Config) -> Self {
        Builder {
            graph,
            parse,
            config,
            report: BuildReport::default(),
        }
    }

    /// Run every step. Stops at the first error; the graph is then only
    /// partially annotated and must not be written.
    pub fn run(mut self) -> Result<BuildReport> {
        self.assign_names()?;
        self.resolve_model_references()?;
        self.apply_ignores();
        self.apply_renames();
        self.apply_implements();
        self.apply_developer_declarations();
        self.resolve_properties();
        self.check_names()?;
        self.resolve_interfaces();
        self.check_composition()?;
        self.resolve_base_classes();
        Ok(self.report)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn assign_names(&mut self) -> Result<()> {
        // Colliding names are reported once renames and ignores are known.
        let strategy = self.config.naming;
        for ty in self.graph.iter_mut() {
            ty.clr_name = clr_name(strategy, &ty.alias, &ty.name);
            if ty.clr_name.is_empty() {
                return Err(Error::panic(format!(
                    "content type \"{}\" derived an empty CLR name",
                    ty.alias
                )));
            }
            for property in &mut ty.properties {
                property.clr_name = clr_name(strategy, &property.alias, &property.name);
            }
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn resolve_model_references(&mut self) -> Result<()> {
        let by_alias: FxHashMap<String, ContentTypeId> = self
            .graph
            .iter()
            .map(|ty| (ty.alias.to_lowercase(), ty.id))
            .collect();
        for ty in self.graph.iter_mut() {
            for property in &mut ty.properties {
                let owner = &ty.alias;
                let property_alias = &property.alias;
                property.clr_type.try_map_model_aliases(&mut |alias| {
                    by_alias.get(&alias.to_lowercase()).copied().ok_or_else(|| {
                        Error::panic(format!(
                            "property \"{property_alias}\" of \"{owner}\" references \
                             unknown content type \"{alias}\""
                        ))
                    })
                })?;
            }
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn apply_ignores(&mut self) {
        let parse = self.parse;
        for ty in self.graph.iter_mut() {
            ty.is_content_ignored = parse.is_ignored_content(&ty.alias);
        }
        let graph = &*self.graph;
        let inherited: Vec<ContentTypeId> = graph
            .iter()
            .filter(|ty| !ty.is_content_ignored)
            .filter(|ty| graph.ancestors(ty.id).any(|ancestor| ancestor.is_content_ignored))
            .map(|ty| ty.id)
            .collect();
        for id in inherited {
            let ty = self.graph.get_mut(id);
            debug!(alias = %ty.alias, "ignored through an ignored ancestor");
            ty.is_content_ignored = true;
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn apply_renames(&mut self) {
        let parse = self.parse;
        for ty in self.graph.iter_mut() {
            if let Some(name) = parse.content_clr_name(&ty.alias) {
                debug!(alias = %ty.alias, clr_name = name, "content type renamed");
                ty.clr_name = name.to_string();
                ty.is_renamed = true;
                self.report
                    .renamed
                    .insert(ty.alias.clone(), name.to_string());
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn apply_implements(&mut self) {
        let parse = self.parse;
        for ty in self.graph.iter_mut() {
            ty.has_implement = parse.has_implement(&ty.alias);
        }
    }

    /// Base classes and constructors are looked up by the possibly renamed
    /// class name.
    #[tracing::instrument(level = "debug", skip_all)]
    fn apply_developer_declarations(&mut self) {
        let parse = self.parse;
        for ty in self.graph.iter_mut() {
            ty.has_base = parse.has_base(&ty.clr_name);
            ty.has_ctor = parse.has_ctor(&ty.clr_name);
        }
    }
}
