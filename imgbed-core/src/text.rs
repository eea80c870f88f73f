fn is_tag_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits on commas and whitespace and drops empty tokens.
pub fn split_text_into_tags(text: &str) -> Vec<&str> {
    text.split(is_tag_separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Replaces every run of whitespace by a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
