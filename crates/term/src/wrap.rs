//! Word wrapping by display width.

use crate::fb::{char_width, text_width};

/// Greedily wrap `text` into lines no wider than `max_width` columns.
///
/// Words are split on whitespace and joined with single spaces. A word wider
/// than `max_width` is broken between characters, which also covers CJK text
/// that has no spaces at all.
pub fn wrap_text(text: &str, max_width: u16) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() {
            if text_width(&current) + 1 + text_width(word) <= max_width {
                current.push(' ');
                current.push_str(word);
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word) <= max_width {
            current.push_str(word);
        } else {
            let mut used = 0;
            for ch in word.chars() {
                let w = char_width(ch);
                if used + w > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    used = 0;
                }
                current.push(ch);
                used += w;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
