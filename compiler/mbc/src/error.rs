//! Driver errors.

use std::io;
use std::path::PathBuf;

use mb_diagnostic::{Diagnostic, ErrorCode, Location};
use thiserror::Error;

/// Result type of the driver.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Everything a driver run can fail with.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("cannot {action} `{}`: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("`{}` is not a valid {what}: {source}", path.display())]
    Json {
        what: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Parse, build or write failed.
    #[error(transparent)]
    Generation(#[from] mb_diagnostic::Error),

    /// The compiler rejected the generated models.
    #[error("generated models failed to compile ({} diagnostics)", .0.len())]
    Compile(Vec<Diagnostic>),
}

impl DriverError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        DriverError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Diagnostics to show for this error.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let message = self.to_string();
        match self {
            DriverError::Io { .. } => vec![Diagnostic::error(ErrorCode::E4001, message)],
            DriverError::Json { path, source, .. } => {
                let location = Location::new(
                    path.display().to_string(),
                    u32::try_from(source.line()).unwrap_or(u32::MAX),
                );
                vec![Diagnostic::error(ErrorCode::E4002, message).with_location(location)]
            }
            DriverError::Generation(error) => vec![error.into_diagnostic()],
            DriverError::Compile(diagnostics) => {
                let mut all = vec![Diagnostic::error(
                    ErrorCode::E4003,
                    "generated models failed to compile",
                )];
                all.extend(diagnostics);
                all
            }
        }
    }
}
