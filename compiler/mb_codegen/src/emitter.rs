//! Output Emitter
//!
//! Abstraction for text production while writing generated files.

/// Trait for emitting generated source.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation (4 spaces per level).
    fn emit_indent(&mut self, level: usize);

    /// Emit one indented line; an empty `text` gives a blank line.
    fn emit_line(&mut self, level: usize, text: &str) {
        if !text.is_empty() {
            self.emit_indent(level);
            self.emit(text);
        }
        self.emit_newline();
    }
}

/// String-based emitter.
///
/// Builds a string incrementally; [`StringEmitter::take`] hands the text
/// out and leaves the emitter empty for the next file.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Move the text out, leaving the emitter empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        let spaces = level * 4;
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_emitter_indentation() {
        let mut emitter = StringEmitter::new();
        emitter.emit("namespace A");
        emitter.emit_newline();
        emitter.emit_indent(1);
        emitter.emit("body");
        emitter.emit_newline();
        emitter.emit_indent(2);
        emitter.emit("nested");
        assert_eq!(emitter.as_str(), "namespace A\n    body\n        nested");
    }

    #[test]
    fn blank_lines_carry_no_indent() {
        let mut emitter = StringEmitter::new();
        emitter.emit_line(2, "x");
        emitter.emit_line(2, "");
        assert_eq!(emitter.as_str(), "        x\n\n");
    }

    #[test]
    fn take_leaves_emitter_empty() {
        let mut emitter = StringEmitter::with_capacity(64);
        assert!(emitter.is_empty());
        emitter.emit("content");
        assert_eq!(emitter.len(), 7);
        assert_eq!(emitter.take(), "content");
        assert!(emitter.is_empty());
    }
}
