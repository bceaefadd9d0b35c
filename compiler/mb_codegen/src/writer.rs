//! The code writer.
//!
//! Renders a finished code model as C# text. Every file starts with the
//! same header and using list; type references go through the run's
//! [`AmbiguityResolver`].

mod infos;
mod model;

use mb_build::BuildOutput;
use mb_diagnostic::{Error, Result};
use mb_ir::{ClrType, Config, ContentTypeId, ContentTypeModel};
use mb_symbols::{Symbol, SymbolKind, SymbolTable, MARKER_NAMESPACE};

use crate::emitter::{Emitter, StringEmitter};
use crate::text::wrap;
use crate::{AmbiguityResolver, GeneratedFile};

/// Usings every generated file declares before configured ones.
pub const DEFAULT_USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Linq.Expressions",
    "System.Web",
    "Umbraco.Core.Models",
    "Umbraco.Core.Models.PublishedContent",
    "Umbraco.Web",
    MARKER_NAMESPACE,
];

/// Namespace of the host's published content surface.
pub(crate) const PUBLISHED_CONTENT: &str = "Umbraco.Core.Models.PublishedContent";

const WARNING_WIDTH: usize = 76;

/// Writes the files of one finished code model.
pub struct CodeWriter<'a> {
    model: &'a BuildOutput,
    generator_version: String,
    usings: Vec<String>,
    resolver: AmbiguityResolver,
    out: StringEmitter,
}

impl<'a> CodeWriter<'a> {
    /// `references` is every type the target compilation sees besides the
    /// generated ones: referenced assemblies and developer code.
    pub fn new(model: &'a BuildOutput, config: &Config, mut references: SymbolTable) -> Self {
        references.extend(generated_symbols(model));
        let mut usings: Vec<String> = Vec::new();
        for using in DEFAULT_USINGS
            .iter()
            .map(|using| (*using).to_string())
            .chain(model.usings.iter().cloned())
        {
            if !usings.contains(&using) {
                usings.push(using);
            }
        }
        CodeWriter {
            model,
            generator_version: config.generator_version.clone(),
            usings,
            resolver: AmbiguityResolver::new(references),
            out: StringEmitter::with_capacity(4096),
        }
    }

    /// Text written since the last reset.
    pub fn text(&self) -> &str {
        self.out.as_str()
    }

    /// Clear the buffer for the next file. Cached spellings are kept.
    pub fn reset(&mut self) {
        self.out.clear();
    }

    /// The file of one live content type.
    pub fn model_file(&mut self, id: ContentTypeId) -> Result<GeneratedFile> {
        let model = self.model;
        self.reset();
        self.write_model_file(id)?;
        let name = model.graph.get(id).clr_name.trim_start_matches('@');
        Ok(GeneratedFile {
            name: format!("{name}.generated.cs"),
            text: self.out.take(),
        })
    }

    /// The batch metadata file.
    pub fn model_infos_file(&mut self) -> Result<GeneratedFile> {
        self.reset();
        self.write_model_infos_file()?;
        Ok(GeneratedFile {
            name: format!("{}.generated.cs", self.model.model_infos_class),
            text: self.out.take(),
        })
    }

    /// Every live model file in host order, then the metadata file.
    pub fn write_all(&mut self) -> Result<Vec<GeneratedFile>> {
        let model = self.model;
        let mut files = Vec::new();
        for ty in model.graph.live_types() {
            files.push(self.model_file(ty.id)?);
        }
        files.push(self.model_infos_file()?);
        Ok(files)
    }

    fn line(&mut self, level: usize, text: &str) {
        self.out.emit_line(level, text);
    }

    fn write_header(&mut self) {
        let version = format!("//    Umbraco.ModelsBuilder v{}", self.generator_version);
        for text in [
            "//------------------------------------------------------------------------------",
            "// <auto-generated>",
            "//   This code was generated by a tool.",
            "//",
            &version,
            "//",
            "//   Changes to this file will be lost if the code is regenerated.",
            "// </auto-generated>",
            "//------------------------------------------------------------------------------",
        ] {
            self.line(0, text);
        }
        self.line(0, "");
    }

    fn write_usings(&mut self) {
        for using in &self.usings {
            self.out.emit_line(0, &format!("using {using};"));
        }
        self.line(0, "");
    }

    /// One comment block and `#warning` per property that cannot be
    /// generated.
    fn write_property_warnings(&mut self, ty: &ContentTypeModel) {
        for property in &ty.properties {
            let Some(errors) = &property.errors else {
                continue;
            };
            for error in errors {
                for text in wrap(error, WARNING_WIDTH) {
                    self.line(0, &format!("// {text}"));
                }
            }
            self.line(
                0,
                &format!(
                    "#warning Property \"{}\" of content type \"{}\" was not generated.",
                    property.alias, ty.alias
                ),
            );
            self.line(0, "");
        }
    }

    fn spell(&mut self, full_name: &str) -> Result<String> {
        self.resolver
            .resolve(full_name, &self.model.namespace, &self.usings)
    }

    fn spell_in(&mut self, full_name: &str, members: &[String]) -> Result<String> {
        self.resolver
            .resolve_in(full_name, &self.model.namespace, &self.usings, members)
    }

    /// Attribute spelling without the `Attribute` suffix.
    fn spell_attribute(&mut self, name: &str) -> Result<String> {
        let spelled = self.spell(&format!("{MARKER_NAMESPACE}.{name}Attribute"))?;
        Ok(spelled
            .strip_suffix("Attribute")
            .map_or(spelled.clone(), str::to_string))
    }

    /// C# spelling of a property value type.
    fn render_type(&mut self, clr_type: &ClrType, members: &[String]) -> Result<String> {
        if let Some(keyword) = clr_type.keyword() {
            return Ok(keyword.to_string());
        }
        match clr_type {
            ClrType::Named { full_name, args } => {
                let name = self.spell_in(full_name, members)?;
                if args.is_empty() {
                    return Ok(name);
                }
                let args = args
                    .iter()
                    .map(|arg| self.render_type(arg, members))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{name}<{}>", args.join(", ")))
            }
            ClrType::Array(inner) => Ok(format!("{}[]", self.render_type(inner, members)?)),
            ClrType::Nullable(inner) => Ok(format!("{}?", self.render_type(inner, members)?)),
            ClrType::Model(id) => self.render_model(*id, members),
            ClrType::ModelAlias(alias) => Err(Error::panic(format!(
                "model reference \"{alias}\" reached the writer unresolved"
            ))),
        }
    }

    /// A model reference; ignored types fall back to their kind's root
    /// interface.
    fn render_model(&mut self, id: ContentTypeId, members: &[String]) -> Result<String> {
        let model = self.model;
        let target = model.graph.get(id);
        if target.is_content_ignored {
            let root = format!("{PUBLISHED_CONTENT}.{}", target.kind.root_interface());
            return self.spell_in(&root, members);
        }
        let bare = target.clr_name.trim_start_matches('@');
        let verbatim = target.clr_name.len() != bare.len();
        let spelled = self.spell_in(&generated_full_name(&model.namespace, bare), members)?;
        if !verbatim {
            return Ok(spelled);
        }
        Ok(match spelled.rsplit_once('.') {
            Some((qualifier, last)) => format!("{qualifier}.@{last}"),
            None => format!("@{spelled}"),
        })
    }
}

/// Full name of a generated type in the models namespace.
pub(crate) fn generated_full_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// The types the generated files declare, so references to them resolve
/// like references to any other type of the compilation.
fn generated_symbols(model: &BuildOutput) -> Vec<Symbol> {
    let namespace = &model.namespace;
    let infos = generated_full_name(namespace, &model.model_infos_class);
    let mut symbols = vec![Symbol::new(infos.clone(), SymbolKind::Class)];
    for ty in model.graph.live_types() {
        let bare = ty.clr_name.trim_start_matches('@');
        symbols.push(Symbol::new(generated_full_name(namespace, bare), SymbolKind::Class));
        symbols.push(Symbol::new(
            generated_full_name(namespace, &format!("{bare}Extensions")),
            SymbolKind::Class,
        ));
        if ty.is_mixin {
            symbols.push(Symbol::new(
                generated_full_name(namespace, &ty.interface_name()),
                SymbolKind::Interface,
            ));
        }
        symbols.push(Symbol::new(format!("{infos}+{bare}"), SymbolKind::Class));
    }
    symbols
}
