//! Code editor component rendering the snippet being composed.
//!
//! The editor is append-only; the cursor always sits at the end of the
//! buffer. When the snippet is taller than the pane, the view follows the
//! cursor by showing the tail of the buffer. Lines wider than the pane are
//! clipped by display width so double-width characters never overflow.

use unicode_width::UnicodeWidthChar;

/// Cursor glyph appended to the final line when the editor has focus.
const CURSOR_GLYPH: char = '\u{2588}';

/// Context for rendering the code editor pane.
#[derive(Debug, Clone)]
pub struct CodeEditorViewContext<'a> {
    /// Current contents of the code buffer.
    pub code: &'a str,
    /// Maximum display width in terminal columns.
    pub max_width: usize,
    /// Visible height in lines (0 = unlimited).
    pub max_height: usize,
    /// Whether to draw the cursor glyph.
    pub focused: bool,
}

/// Component for displaying the code snippet under composition.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeEditorComponent;

impl CodeEditorComponent {
    /// Creates a new code editor component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the visible window of the editor as a string.
    #[must_use]
    pub fn view(&self, ctx: &CodeEditorViewContext<'_>) -> String {
        let mut lines: Vec<String> = ctx.code.split('\n').map(str::to_owned).collect();

        if ctx.focused {
            if let Some(last) = lines.last_mut() {
                last.push(CURSOR_GLYPH);
            }
        }

        let skip = if ctx.max_height > 0 {
            lines.len().saturating_sub(ctx.max_height)
        } else {
            0
        };

        lines
            .iter()
            .skip(skip)
            .map(|line| clip_to_display_width(line, ctx.max_width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Clips a line to at most `max_width` terminal columns.
///
/// A double-width character that would straddle the boundary is dropped
/// rather than rendered half-visible.
fn clip_to_display_width(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return line.to_owned();
    }

    let mut output = String::new();
    let mut used = 0;

    for ch in line.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width {
            break;
        }
        output.push(ch);
        used += width;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(code: &str) -> CodeEditorViewContext<'_> {
        CodeEditorViewContext {
            code,
            max_width: 80,
            max_height: 0,
            focused: true,
        }
    }

    #[test]
    fn cursor_follows_end_of_buffer() {
        let component = CodeEditorComponent::new();
        let rendered = component.view(&context("print(1)"));

        assert_eq!(rendered, "print(1)\u{2588}");
    }

    #[test]
    fn unfocused_editor_hides_cursor() {
        let component = CodeEditorComponent::new();
        let mut ctx = context("print(1)");
        ctx.focused = false;

        assert_eq!(component.view(&ctx), "print(1)");
    }

    #[test]
    fn empty_buffer_renders_bare_cursor() {
        let component = CodeEditorComponent::new();
        let rendered = component.view(&context(""));

        assert_eq!(rendered, "\u{2588}");
    }

    #[test]
    fn tall_snippets_scroll_to_keep_the_cursor_visible() {
        let component = CodeEditorComponent::new();
        let code = (0..10).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
        let mut ctx = context(&code);
        ctx.max_height = 3;

        let rendered = component.view(&ctx);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first(), Some(&"line 7"));
        assert_eq!(lines.get(2), Some(&"line 9\u{2588}"));
    }

    #[test]
    fn wide_characters_are_clipped_by_column_not_char_count() {
        // Each CJK character occupies two columns.
        let line = "\u{4f60}".repeat(10);
        let clipped = clip_to_display_width(&line, 7);

        assert_eq!(clipped.chars().count(), 3, "7 columns fit three double-width chars");
    }
}
