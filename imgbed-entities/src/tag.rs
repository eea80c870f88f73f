use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumString};

pub type TagCount = u64;

/// Number of occurrences per normalized tag.
pub type FrequencyMap = BTreeMap<String, TagCount>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TagFrequency(pub String, pub TagCount);

/// The canonical identity of a tag used for counting and de-duplication.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
}

/// How the tags of a remote file should be modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TagAction {
    Set,
    Add,
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(normalize_tag("Travel"), "travel");
        assert_eq!(normalize_tag("東京"), "東京");
    }

    #[test]
    fn parse_tag_action() {
        assert_eq!("set".parse::<TagAction>().unwrap(), TagAction::Set);
        assert_eq!("ADD".parse::<TagAction>().unwrap(), TagAction::Add);
        assert_eq!(TagAction::Remove.as_ref(), "remove");
        assert!("replace".parse::<TagAction>().is_err());
    }
}
