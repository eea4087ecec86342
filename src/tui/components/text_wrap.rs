//! Text wrapping utilities for terminal display.
//!
//! Provides two wrapping strategies:
//! - **Character-based wrapping** (`wrap_to_width`): Hard-wraps at exactly N
//!   characters, used for code where preserving exact layout matters.
//! - **Word-based wrapping** (`wrap_text`): Wraps at word boundaries while
//!   preserving leading indentation, used for prose such as summaries and
//!   issue explanations.

/// Wraps a single line to a maximum width using character count.
///
/// Uses character count rather than byte count to correctly handle
/// Unicode characters including emoji and CJK text.
#[must_use]
pub fn wrap_to_width(line: &str, max_width: usize) -> String {
    if max_width == 0 || line.chars().count() <= max_width {
        return line.to_owned();
    }

    let mut result = String::with_capacity(line.len());
    let mut current_width = 0;

    for ch in line.chars() {
        if current_width >= max_width {
            result.push('\n');
            current_width = 0;
        }
        result.push(ch);
        current_width += 1;
    }

    result
}

/// Wraps prose to a maximum width at word boundaries.
///
/// Each input line is wrapped independently, so empty lines (paragraph
/// breaks) survive. Continuation lines repeat the original line's leading
/// indentation. A single word wider than the available width is hard-wrapped.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }

    text.lines()
        .map(|line| wrap_prose_line(line, max_width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_prose_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_owned();
    }

    let indent_len = line.len() - line.trim_start().len();
    let (indent, content) = line.split_at(indent_len);
    let indent_width = indent.chars().count();

    // An indent wider than the pane leaves no room for words at all.
    if indent_width >= max_width {
        return wrap_to_width(line, max_width);
    }

    let available = max_width.saturating_sub(indent_width);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in content.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > 0 && current_width + 1 + word_width > available {
            lines.push(format!("{indent}{current}"));
            current.clear();
            current_width = 0;
        }

        if word_width > available && current_width == 0 {
            let wrapped = wrap_to_width(word, available);
            let mut parts = wrapped.lines().peekable();
            while let Some(part) = parts.next() {
                if parts.peek().is_some() {
                    lines.push(format!("{indent}{part}"));
                } else {
                    current.push_str(part);
                    current_width = part.chars().count();
                }
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if current_width > 0 {
        lines.push(format!("{indent}{current}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_to_width_preserves_short_lines() {
        let short = "hello world";
        assert_eq!(wrap_to_width(short, 80), short);
    }

    #[test]
    fn wrap_to_width_wraps_long_lines() {
        let long = "a".repeat(120);
        let result = wrap_to_width(&long, 80);

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2, "should wrap into 2 lines");
        assert_eq!(lines.first().map(|l| l.chars().count()), Some(80));
        assert_eq!(lines.get(1).map(|l| l.chars().count()), Some(40));
    }

    #[test]
    fn wrap_to_width_handles_zero_width() {
        assert_eq!(wrap_to_width("hello", 0), "hello");
    }

    #[test]
    fn wrap_to_width_counts_characters_not_bytes() {
        let emojis = "\u{1f389}".repeat(100);
        for line in wrap_to_width(&emojis, 80).lines() {
            assert!(line.chars().count() <= 80);
        }
    }

    #[test]
    fn wrap_text_handles_short_text() {
        let text = "Short text";
        assert_eq!(wrap_text(text, 80), text);
    }

    #[test]
    fn wrap_text_wraps_long_paragraph() {
        let text = "This is a longer paragraph that should be wrapped across \
                    multiple lines when the width is limited.";
        for line in wrap_text(text, 40).lines() {
            assert!(line.chars().count() <= 40, "line '{line}' exceeds 40 chars");
        }
    }

    #[test]
    fn wrap_text_preserves_paragraph_breaks() {
        let text = "First paragraph.\n\nSecond paragraph.";
        let result = wrap_text(text, 80);
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(1), Some(&""));
    }

    #[test]
    fn wrap_text_repeats_indentation_on_continuations() {
        let text = "    This is an indented line that is quite long and should \
                    wrap to the next line.";
        for line in wrap_text(text, 40).lines() {
            assert!(
                line.starts_with("    "),
                "continuation should keep indent: '{line}'"
            );
            assert!(line.chars().count() <= 40);
        }
    }

    #[test]
    fn wrap_text_hard_wraps_oversized_words() {
        let text = format!("see {}", "x".repeat(60));
        for line in wrap_text(&text, 20).lines() {
            assert!(line.chars().count() <= 20, "line '{line}' exceeds 20 chars");
        }
    }
}
