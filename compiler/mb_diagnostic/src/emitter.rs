//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter {
            writer: io::stderr(),
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and hand back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let header = format!("{}[{}]", diagnostic.severity, diagnostic.code);
        self.write_colored(&header, Self::severity_color(diagnostic.severity));
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(location) = &diagnostic.location {
            self.write_colored("  --> ", colors::SECONDARY);
            let _ = writeln!(self.writer, "{location}");
        }
        for note in &diagnostic.notes {
            self.write_colored("  = note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            let text = format!(
                "error: generation failed with {error_count} error{}",
                plural_s(error_count)
            );
            self.write_colored(&text, colors::ERROR);
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            let text = format!(
                "warning: {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
            self.write_colored(&text, colors::WARNING);
            let _ = writeln!(self.writer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCode, Location};
    use pretty_assertions::assert_eq;

    fn render(diagnostics: &[Diagnostic], errors: usize, warnings: usize) -> String {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
        emitter.emit_all(diagnostics);
        emitter.emit_summary(errors, warnings);
        String::from_utf8(emitter.into_inner()).unwrap_or_default()
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let diag = Diagnostic::error(ErrorCode::E1001, "unexpected `}`")
            .with_location(Location::new("Page.cs", 3));
        let out = render(&[diag], 1, 0);
        assert_eq!(
            out,
            "error[E1001]: unexpected `}`\n  --> Page.cs:3\n\nerror: generation failed with 1 error\n"
        );
    }

    #[test]
    fn warning_summary_pluralises() {
        let out = render(&[], 0, 2);
        assert_eq!(out, "warning: 2 warnings emitted\n");
    }

    #[test]
    fn colors_follow_mode() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));

        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
        emitter.emit(&Diagnostic::warning(ErrorCode::E2002, "skipped"));
        let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
        assert!(out.starts_with(colors::WARNING));
    }
}
