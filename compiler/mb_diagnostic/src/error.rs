//! The error taxonomy of a generation run.
//!
//! Parse and build prefer a single precise error over partial output. The
//! only degraded path (a property whose name clashes with its type in
//! tolerant mode) never reaches this type: the builder reports it as a
//! warning [`Diagnostic`] and skips the property.

use std::fmt;

use thiserror::Error;

use crate::{Diagnostic, ErrorCode, Location};

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// What kind of name collided in a [`Error::DuplicateName`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NameKind {
    /// Content type CLR names across the batch.
    ContentType,
    /// Property CLR names within one content type.
    Property { type_alias: String },
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::ContentType => write!(f, "content type"),
            NameKind::Property { type_alias } => {
                write!(f, "property of content type \"{type_alias}\"")
            }
        }
    }
}

/// How an element type reaches the non-element type it may not use.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Relation {
    Parent,
    Mixin,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Parent => write!(f, "parent"),
            Relation::Mixin => write!(f, "mixin"),
        }
    }
}

/// Errors raised by a generation run.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// A developer file could not be parsed far enough to resolve symbols.
    #[error("{file}:{line}: {message}")]
    Syntax {
        code: ErrorCode,
        file: String,
        line: u32,
        message: String,
    },

    /// An internal invariant was broken. Always a generator bug.
    #[error("internal error: {0}")]
    Panic(String),

    /// Two live types, or two live properties of one type, share a CLR name.
    #[error("duplicate {kind} CLR names: {}", describe_collisions(.collisions))]
    DuplicateName {
        kind: NameKind,
        /// Every colliding CLR name with every alias that produced it.
        collisions: Vec<(String, Vec<String>)>,
    },

    /// A property CLR name equals the CLR name of its enclosing type.
    #[error(
        "property \"{property_alias}\" of content type \"{type_alias}\" has CLR name \
         \"{clr_name}\" which is also the name of its enclosing type"
    )]
    UnrepresentableProperty {
        type_alias: String,
        property_alias: String,
        clr_name: String,
    },

    /// An element type inherits from or composes a non-element type.
    #[error(
        "element type \"{alias}\" cannot use non-element type \"{offending}\" as {relation}"
    )]
    CompositionRule {
        alias: String,
        offending: String,
        relation: Relation,
    },

    /// The scope model used to spell type references could not be built.
    #[error("cannot resolve type references: {0}")]
    AmbiguityResolution(String),
}

fn describe_collisions(collisions: &[(String, Vec<String>)]) -> String {
    collisions
        .iter()
        .map(|(name, aliases)| format!("\"{name}\" (aliases: {})", aliases.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// A developer file failed to parse.
    pub fn syntax(file: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Error::Syntax {
            code: ErrorCode::E1001,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// A recognized marker attribute carries arguments that do not fit it.
    pub fn attribute(file: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Error::Syntax {
            code: ErrorCode::E1002,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Two partial declarations of one class name different base classes.
    pub fn base_conflict(file: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Error::Syntax {
            code: ErrorCode::E1003,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn panic(message: impl Into<String>) -> Self {
        Error::Panic(message.into())
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Syntax { code, .. } => *code,
            Error::Panic(_) => ErrorCode::E9001,
            Error::DuplicateName { .. } => ErrorCode::E2001,
            Error::UnrepresentableProperty { .. } => ErrorCode::E2002,
            Error::CompositionRule { .. } => ErrorCode::E2003,
            Error::AmbiguityResolution(_) => ErrorCode::E3001,
        }
    }

    /// Convert into a diagnostic for presentation.
    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.code();
        match self {
            Error::Syntax {
                file,
                line,
                message,
                ..
            } => Diagnostic::error(code, message).with_location(Location::new(file, line)),
            Error::Panic(_) => Diagnostic::error(code, self.to_string())
                .with_note("this is a bug in the generator, not in the content types"),
            Error::DuplicateName { .. } => Diagnostic::error(code, self.to_string())
                .with_note("rename or ignore the content types or properties listed"),
            Error::UnrepresentableProperty { .. } => Diagnostic::error(code, self.to_string())
                .with_note("rename the property, or generate in tolerant mode to skip it"),
            Error::CompositionRule { .. } | Error::AmbiguityResolution(_) => {
                Diagnostic::error(code, self.to_string())
            }
        }
    }
}
