//! Error codes for all generator diagnostics.
//!
//! The first digit names the phase that produced the diagnostic, so a code
//! alone tells the user where to look.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Existing-code parse errors
/// - E2xxx: Code model build errors
/// - E3xxx: Code writer errors
/// - E4xxx: Driver errors (files, inputs, compilation)
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// Developer source failed to parse
    E1001,
    /// Marker attribute with unusable arguments
    E1002,
    /// Partial declarations disagree on the base class
    E1003,

    // Build Errors (E2xxx)
    /// Two live types or properties share a CLR name
    E2001,
    /// Property CLR name equals its type's CLR name
    E2002,
    /// Element type composes or inherits a non-element type
    E2003,

    // Writer Errors (E3xxx)
    /// Type reference spelling could not be resolved
    E3001,

    // Driver Errors (E4xxx)
    /// A file could not be read or written
    E4001,
    /// Content types or configuration are malformed
    E4002,
    /// The generated models did not compile
    E4003,

    // Internal Errors (E9xxx)
    /// Internal invariant violated
    E9001,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a parse error (E1xxx).
    pub fn is_parse_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a build error (E2xxx).
    pub fn is_build_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a driver error (E4xxx).
    pub fn is_driver_error(&self) -> bool {
        self.as_str().starts_with("E4")
    }

    /// Check if this is an internal error (E9xxx).
    pub fn is_internal_error(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
