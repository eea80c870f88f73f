/// Free text search input split into keywords and hash tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Remaining text without hash tags and with collapsed whitespace.
    pub keywords: String,
    /// Lower-cased tags in the order of their first occurrence.
    pub tags: Vec<String>,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.tags.is_empty()
    }
}
