//! Compiling generated models.

use mb_codegen::GeneratedFile;
use mb_diagnostic::Diagnostic;
use mb_parse::SourceFile;
use tracing::info;

use crate::error::{DriverError, Result};
use crate::GeneratedModels;

/// A compiled models assembly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assembly {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Turns generated and developer sources into an assembly.
pub trait ModelCompiler {
    fn compile(
        &self,
        generated: &[GeneratedFile],
        developer: &[SourceFile],
    ) -> std::result::Result<Assembly, Vec<Diagnostic>>;
}

/// Compile `models` together with the developer files they were built
/// against.
pub fn compile_models(
    compiler: &dyn ModelCompiler,
    models: &GeneratedModels,
    developer: &[SourceFile],
) -> Result<Assembly> {
    let assembly = compiler
        .compile(&models.files, developer)
        .map_err(DriverError::Compile)?;
    info!(assembly = %assembly.name, bytes = assembly.bytes.len(), "models compiled");
    Ok(assembly)
}
