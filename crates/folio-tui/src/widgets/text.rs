use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to `max_width` columns with an ellipsis
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        // leave a column for the ellipsis
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns; overlong words get their own line
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad `s` with spaces to `width` columns
pub fn pad_to(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(s.width())));
    out
}
