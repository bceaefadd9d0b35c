//! Existing-code parser.
//!
//! Reads the developer's hand-written partial classes and reports what
//! they override: ignored and renamed content types and properties,
//! declared base classes, constructors and extension accessors, and
//! assembly-level generation settings.
//!
//! Only declaration structure is parsed. Member bodies are skipped by
//! delimiter matching, and only the generator's marker attributes carry
//! meaning; every other attribute is ignored.

mod analyze;
mod cursor;
mod directive;
mod grammar;
mod result;
pub mod syntax;

use mb_diagnostic::Result;
use mb_symbols::{builtin_references, Symbol, SymbolTable};
use tracing::debug;

pub use directive::Directive;
pub use grammar::parse_file;
pub use result::ParseResult;

/// A developer file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceFile {
    /// Path or logical name, used in error locations.
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Everything the parse phase learned.
#[derive(Clone, Debug)]
pub struct ParsedCode {
    /// Directives in file order.
    pub directives: Vec<Directive>,
    /// Types the developer files declare.
    pub declared: Vec<Symbol>,
    pub result: ParseResult,
}

impl ParsedCode {
    /// Result of parsing no files at all.
    pub fn empty() -> Self {
        ParsedCode {
            directives: Vec::new(),
            declared: Vec::new(),
            result: ParseResult::default(),
        }
    }
}

/// Parse developer files.
///
/// Base lists resolve against the declared types, the built-in marker
/// references and `extra_references`. The first syntax error fails the
/// whole parse.
#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn parse(files: &[SourceFile], extra_references: &[Symbol]) -> Result<ParsedCode> {
    let units = files
        .iter()
        .map(|file| parse_file(&file.name, &file.text))
        .collect::<Result<Vec<_>>>()?;

    let declared = analyze::declared_symbols(&units);
    let mut table = SymbolTable::from_symbols(builtin_references());
    table.extend(extra_references.iter().cloned());
    table.extend(declared.iter().cloned());

    let mut analyzer = analyze::Analyzer::new(&table, &units);
    for unit in &units {
        analyzer.analyze_unit(unit)?;
    }
    let directives = analyzer.finish();
    debug!(
        declared = declared.len(),
        directives = directives.len(),
        "parsed developer code"
    );

    let result = ParseResult::from_directives(&directives);
    Ok(ParsedCode {
        directives,
        declared,
        result,
    })
}
