//! Diagnostic system for the models generator.
//!
//! Every phase of a generation run reports failures through the typed
//! [`Error`] taxonomy:
//!
//! - parse: [`Error::Syntax`]
//! - build: [`Error::Panic`], [`Error::DuplicateName`],
//!   [`Error::UnrepresentableProperty`], [`Error::CompositionRule`]
//! - write: [`Error::AmbiguityResolution`]
//!
//! Errors convert into [`Diagnostic`]s for presentation. Non-fatal findings
//! (tolerant-mode degradations) are produced as warning diagnostics directly.

mod diagnostic;
pub mod emitter;
mod error;
mod error_code;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use error::{Error, NameKind, Relation, Result};
pub use error_code::ErrorCode;
