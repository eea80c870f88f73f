use crate::{
    entities::{normalize_tag, FileItem, SearchQuery},
    metadata::{self, Field, RawMetadata},
    text,
};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

pub mod frequency;

lazy_static! {
    // Word characters plus CJK ideographs, kana and hangul syllables.
    static ref HASH_TAG_REGEX: Regex = Regex::new(
        r"#([0-9A-Za-z_\x{4e00}-\x{9fa5}\x{3040}-\x{309f}\x{30a0}-\x{30ff}\x{ac00}-\x{d7af}.+\-]+)"
    )
    .unwrap();
}

/// Splits free text search input into keywords and hash tags.
///
/// Every `#tag` is removed from the keywords. Tags are lower-cased and
/// de-duplicated in the order of their first occurrence.
pub fn parse_search_input(input: &str) -> SearchQuery {
    if input.trim().is_empty() {
        return SearchQuery::default();
    }
    let mut tags = vec![];
    let stripped = HASH_TAG_REGEX.replace_all(input, |caps: &Captures| {
        tags.push(normalize_tag(&caps[1]));
        " "
    });
    let keywords = text::collapse_whitespace(&stripped);
    let tags = tags.into_iter().unique().collect();
    SearchQuery { keywords, tags }
}

/// Comma separated representation as expected by the list endpoint.
pub fn tags_to_string(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(tags.join(","))
}

/// Reads the tags of a remote metadata record.
///
/// Accepts arrays, JSON encoded arrays and delimited strings.
/// Malformed values degrade to an empty or partial list.
pub fn extract_tags_from_metadata(metadata: &RawMetadata) -> Vec<String> {
    match metadata::lookup(metadata, Field::Tags) {
        Some(Value::Array(values)) => strings_only(values),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.starts_with('[') || trimmed.starts_with('{') {
                match serde_json::from_str::<Value>(raw) {
                    Ok(Value::Array(values)) => return strings_only(&values),
                    Ok(_) => {}
                    Err(err) => {
                        log::debug!("Tags are not valid JSON ({err}), splitting instead");
                    }
                }
            }
            parse_tags_input(raw)
        }
        _ => vec![],
    }
}

fn strings_only(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .map(ToString::to_string)
        .collect()
}

/// Splits user input on commas and whitespace.
pub fn parse_tags_input(value: &str) -> Vec<String> {
    text::split_text_into_tags(value)
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

/// A tag that occurs in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTag {
    /// Casing of the first occurrence.
    pub value: String,
    pub normalized: String,
}

/// Collects the distinct tags of all files, keeping the first seen casing.
pub fn available_tags(files: &[FileItem]) -> Vec<AvailableTag> {
    files
        .iter()
        .flat_map(FileItem::tags)
        .unique_by(|tag| normalize_tag(tag))
        .map(|tag| AvailableTag {
            value: tag.clone(),
            normalized: normalize_tag(tag),
        })
        .collect()
}

/// Selects every available tag that contains one of the queries.
pub fn match_tags(queries: &[String], available: &[AvailableTag]) -> Vec<String> {
    let queries: Vec<_> = queries.iter().map(|q| normalize_tag(q)).collect();
    queries
        .iter()
        .flat_map(move |query| {
            available
                .iter()
                .filter(move |tag| tag.normalized.contains(query.as_str()))
                .map(|tag| tag.value.clone())
        })
        .unique()
        .collect()
}

/// Merges the given tags with the suggestions, unique by their normalized form.
pub fn merge_unique<'a>(
    tags: impl IntoIterator<Item = &'a String>,
    suggestions: impl IntoIterator<Item = &'a String>,
    limit: usize,
) -> Vec<String> {
    tags.into_iter()
        .chain(suggestions)
        .unique_by(|tag| normalize_tag(tag))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgbed_entities::builders::Builder;
    use serde_json::json;

    fn metadata(value: Value) -> RawMetadata {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parse_empty_search_input() {
        assert_eq!(parse_search_input(""), SearchQuery::default());
        assert_eq!(parse_search_input("   "), SearchQuery::default());
    }

    #[test]
    fn parse_search_input_with_duplicate_tags() {
        let q = parse_search_input("sunset #Travel #travel over water");
        assert_eq!(q.keywords, "sunset over water");
        assert_eq!(q.tags, vec!["travel"]);
    }

    #[test]
    fn parse_search_input_without_tags() {
        let q = parse_search_input("  just   some\ttext ");
        assert_eq!(q.keywords, "just some text");
        assert!(q.tags.is_empty());
    }

    #[test]
    fn parse_adjacent_and_special_tags() {
        let q = parse_search_input("cat#A#b c++ #c++ #v1.2-rc #_x");
        assert_eq!(q.keywords, "cat c++");
        assert_eq!(q.tags, vec!["a", "b", "c++", "v1.2-rc", "_x"]);
    }

    #[test]
    fn parse_non_latin_tags() {
        let q = parse_search_input("#東京 #さくら #カメラ #서울 photo");
        assert_eq!(q.keywords, "photo");
        assert_eq!(q.tags, vec!["東京", "さくら", "カメラ", "서울"]);
    }

    #[test]
    fn keep_lonely_hash_sign() {
        let q = parse_search_input("a # b #");
        assert_eq!(q.keywords, "a # b #");
        assert!(q.tags.is_empty());
    }

    #[test]
    fn never_return_tags_in_keywords() {
        for input in ["#a", "x #Foo y", "#foo#bar baz", "one #two, three"] {
            let q = parse_search_input(input);
            for tag in &q.tags {
                assert!(!q.keywords.to_lowercase().contains(&format!("#{tag}")));
                assert_eq!(tag, &tag.to_lowercase());
            }
            assert_eq!(q.tags.len(), q.tags.iter().unique().count());
        }
    }

    #[test]
    fn tags_as_string() {
        assert_eq!(tags_to_string(&[]), None);
        assert_eq!(
            tags_to_string(&["a".to_string(), "B".to_string()]),
            Some("a,B".to_string())
        );
    }

    #[test]
    fn extract_tags_from_json_string() {
        let m = metadata(json!({ "Tags": r#"["A","b"]"# }));
        assert_eq!(extract_tags_from_metadata(&m), vec!["A", "b"]);
    }

    #[test]
    fn extract_tags_from_delimited_string() {
        let m = metadata(json!({ "tags": "a, b c" }));
        assert_eq!(extract_tags_from_metadata(&m), vec!["a", "b", "c"]);
    }

    #[test]
    fn extract_tags_from_missing_field() {
        assert!(extract_tags_from_metadata(&RawMetadata::new()).is_empty());
        let m = metadata(json!({ "Tags": 42 }));
        assert!(extract_tags_from_metadata(&m).is_empty());
    }

    #[test]
    fn extract_tags_from_array_ignoring_non_strings() {
        let m = metadata(json!({ "Tags": ["a", 1, null, "b", { "c": true }] }));
        assert_eq!(extract_tags_from_metadata(&m), vec!["a", "b"]);
    }

    #[test]
    fn extract_tags_prefers_capitalized_field() {
        let m = metadata(json!({ "tags": ["lower"], "Tags": ["upper"] }));
        assert_eq!(extract_tags_from_metadata(&m), vec!["upper"]);
    }

    #[test]
    fn extract_tags_from_malformed_json() {
        let m = metadata(json!({ "Tags": r#"["a", "b""# }));
        assert_eq!(extract_tags_from_metadata(&m), vec![r#"["a""#, r#""b""#]);
        let m = metadata(json!({ "Tags": r#"{"a": 1}"# }));
        assert_eq!(extract_tags_from_metadata(&m), vec![r#"{"a":"#, "1}"]);
    }

    #[test]
    fn parse_user_tags_input() {
        assert!(parse_tags_input("").is_empty());
        assert!(parse_tags_input(" , ").is_empty());
        assert_eq!(
            parse_tags_input("Landscape, Travel\nsea"),
            vec!["Landscape", "Travel", "sea"]
        );
    }

    #[test]
    fn collect_available_tags() {
        let files = vec![
            FileItem::build().name("a").tags(vec!["Travel", "sea"]).finish(),
            FileItem::build().name("b").tags(vec!["travel", "Mountain"]).finish(),
            FileItem::build().name("c").finish(),
        ];
        let tags = available_tags(&files);
        let values: Vec<_> = tags.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["Travel", "sea", "Mountain"]);
        assert_eq!(tags[2].normalized, "mountain");
    }

    #[test]
    fn match_tags_by_substring() {
        let files = vec![FileItem::build()
            .tags(vec!["Travel", "TimeTravel", "sea", "Seaside"])
            .finish()];
        let available = available_tags(&files);
        assert_eq!(
            match_tags(&["trav".into()], &available),
            vec!["Travel", "TimeTravel"]
        );
        assert_eq!(
            match_tags(&["sea".into(), "side".into()], &available),
            vec!["sea", "Seaside"]
        );
        assert!(match_tags(&[], &available).is_empty());
        assert!(match_tags(&["nope".into()], &available).is_empty());
    }

    #[test]
    fn merge_with_suggestions() {
        let current = vec!["Travel".to_string()];
        let suggested = vec!["travel".to_string(), "sea".to_string(), "sky".to_string()];
        assert_eq!(
            merge_unique(&current, &suggested, 10),
            vec!["Travel", "sea", "sky"]
        );
        assert_eq!(merge_unique(&current, &suggested, 2), vec!["Travel", "sea"]);
    }
}
