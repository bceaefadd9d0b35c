//! Models generator driver.
//!
//! Runs the generation pipeline over external inputs:
//!
//! 1. content types from a [`ContentTypeSource`]
//! 2. developer files, parsed for marker attributes
//! 3. the code model build
//! 4. the writer, spelling type references against every visible symbol
//!
//! The [`GeneratedModels`] can then be written to disk or handed to a
//! [`ModelCompiler`].

mod compile;
mod error;
mod source;
mod tracing_setup;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mb_build::{build, BuildOutput};
use mb_codegen::{write_models, GeneratedFile};
use mb_diagnostic::Diagnostic;
use mb_ir::{Config, TypeModelGraph};
use mb_parse::{parse, SourceFile};
use mb_symbols::{builtin_references, Symbol, SymbolTable};
use tracing::{debug, info};

pub use compile::{compile_models, Assembly, ModelCompiler};
pub use error::{DriverError, Result};
pub use source::{load_config, read_developer_files, ContentTypeSource, JsonSource};
pub use tracing_setup::init_tracing;

/// Output of one generation run.
#[derive(Clone, Debug)]
pub struct GeneratedModels {
    /// One file per live content type in host order, then the infos file.
    pub files: Vec<GeneratedFile>,
    /// Non-fatal findings of the build.
    pub warnings: Vec<Diagnostic>,
    /// Alias to developer-chosen class name.
    pub renamed: BTreeMap<String, String>,
}

impl GeneratedModels {
    /// Write every file into `dir`, creating it if needed.
    ///
    /// Generated files left in `dir` by an earlier run that this run no
    /// longer produces are removed. Returns the written paths.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|e| DriverError::io("create", dir, e))?;

        let entries = fs::read_dir(dir).map_err(|e| DriverError::io("list", dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| DriverError::io("list", dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let stale = name.ends_with(".generated.cs")
                && !self.files.iter().any(|file| file.name == name);
            if stale {
                let path = entry.path();
                fs::remove_file(&path).map_err(|e| DriverError::io("remove", &path, e))?;
                debug!(path = %path.display(), "stale model removed");
            }
        }

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = dir.join(&file.name);
            fs::write(&path, &file.text).map_err(|e| DriverError::io("write", &path, e))?;
            written.push(path);
        }
        info!(dir = %dir.display(), files = written.len(), "models written");
        Ok(written)
    }
}

/// Parse developer code and build the code model, without writing.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check(
    source: &dyn ContentTypeSource,
    developer_files: &[SourceFile],
    references: &[Symbol],
    config: &Config,
) -> Result<BuildOutput> {
    Ok(prepare(source, developer_files, references, config)?.0)
}

/// Run parse, build and write.
///
/// `references` extends the types the source reports; developer-declared
/// types and the built-in framework types are always visible.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate(
    source: &dyn ContentTypeSource,
    developer_files: &[SourceFile],
    references: &[Symbol],
    config: &Config,
) -> Result<GeneratedModels> {
    let (model, table) = prepare(source, developer_files, references, config)?;
    let files = write_models(&model, config, table)?;
    info!(files = files.len(), warnings = model.warnings.len(), "models generated");
    Ok(GeneratedModels {
        files,
        warnings: model.warnings,
        renamed: model.renamed,
    })
}

/// The built model and the symbol table its files are written against.
fn prepare(
    source: &dyn ContentTypeSource,
    developer_files: &[SourceFile],
    references: &[Symbol],
    config: &Config,
) -> Result<(BuildOutput, SymbolTable)> {
    let descriptors = source.content_types()?;
    let mut extra = source.references()?;
    extra.extend_from_slice(references);
    debug!(
        types = descriptors.len(),
        references = extra.len(),
        files = developer_files.len(),
        "inputs loaded"
    );

    let parsed = parse(developer_files, &extra)?;
    let graph = TypeModelGraph::from_descriptors(descriptors)?;
    let model = build(graph, &parsed.result, config)?;

    let mut table = SymbolTable::from_symbols(builtin_references());
    table.extend(extra);
    table.extend(parsed.declared);
    Ok((model, table))
}
