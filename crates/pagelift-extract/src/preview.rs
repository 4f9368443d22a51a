/// Maximum number of characters shown in the console preview.
pub const PREVIEW_CHAR_LIMIT: usize = 500;

/// Build the console preview: the first [`PREVIEW_CHAR_LIMIT`] characters
/// of the extracted text with a literal `...` marker appended. The marker
/// is appended even when nothing was cut off.
pub fn preview(text: &str) -> String {
    let cut = text
        .char_indices()
        .nth(PREVIEW_CHAR_LIMIT)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    format!("{}...", &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text_at_limit() {
        let text = "a".repeat(600);
        let p = preview(&text);
        assert_eq!(p, format!("{}...", "a".repeat(500)));
    }

    #[test]
    fn short_text_keeps_the_marker() {
        assert_eq!(preview("Hello"), "Hello...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 600 two-byte chars; a byte-indexed slice would panic or cut mid-char
        let text = "é".repeat(600);
        let p = preview(&text);
        assert_eq!(p, format!("{}...", "é".repeat(500)));
    }
}
