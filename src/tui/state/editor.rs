//! Append-only editing state for the code buffer.
//!
//! The editor deliberately has no cursor movement; characters are appended
//! at the end and backspace removes the final character. This keeps the
//! update loop trivial while still supporting pasting and hand-typing
//! multi-line snippets.

/// State of the code buffer being composed for review.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeEditorState {
    buffer: String,
}

impl CodeEditorState {
    /// Creates an editor pre-populated with `code`.
    #[must_use]
    pub const fn with_code(code: String) -> Self {
        Self { buffer: code }
    }

    /// Appends a character to the buffer.
    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Appends a line break to the buffer.
    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Removes the final character, if any.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Current buffer contents.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer contains no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of lines the buffer occupies on screen.
    ///
    /// An empty buffer still occupies the one line holding the cursor.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buffer.split('\n').count()
    }
}
