//! C# writer for built code models.
//!
//! Turns a [`BuildOutput`] into one source file per live content type plus
//! a metadata file for the whole batch. Output is a pure function of the
//! model and the symbol table: running the writer twice gives the same
//! text, apart from the generator version in the header.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction with indentation
//! - [`resolver`]: Minimal, unambiguous spellings for type references
//! - [`writer`]: The files themselves

pub mod emitter;
pub mod resolver;
mod text;
pub mod writer;

use mb_build::BuildOutput;
use mb_diagnostic::Result;
use mb_ir::Config;
use mb_symbols::SymbolTable;

pub use emitter::{Emitter, StringEmitter};
pub use resolver::AmbiguityResolver;
pub use writer::{CodeWriter, DEFAULT_USINGS};

/// One generated source file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    /// File name, without directory.
    pub name: String,
    pub text: String,
}

/// Write every file of `model`.
///
/// `references` holds the types the target compilation sees besides the
/// generated ones.
pub fn write_models(
    model: &BuildOutput,
    config: &Config,
    references: SymbolTable,
) -> Result<Vec<GeneratedFile>> {
    CodeWriter::new(model, config, references).write_all()
}
