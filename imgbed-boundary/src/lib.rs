use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Untyped metadata of a remote file.
///
/// Field names and value types differ between server versions.
pub type Metadata = Map<String, Value>;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_indexed_response: Option<bool>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct File {
    pub name: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UploadedFile {
    #[serde(default)]
    pub src: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Tags {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TagUpdate {
    pub action: TagAction,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    Set,
    Add,
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_list_response() {
        let res: ListResponse = serde_json::from_value(json!({
            "files": [
                { "name": "a.png", "metadata": { "File-Size": "12", "Tags": ["x"] } },
                { "name": "b.png", "metadata": null },
                { "name": "c.png" }
            ],
            "directories": ["sub/"],
            "totalCount": 3,
            "returnedCount": 3
        }))
        .unwrap();
        assert_eq!(res.files.len(), 3);
        assert_eq!(res.files[0].metadata.as_ref().unwrap()["File-Size"], "12");
        assert!(res.files[1].metadata.is_none());
        assert!(res.files[2].metadata.is_none());
        assert_eq!(res.directories, vec!["sub/".to_string()]);
        assert_eq!(res.total_count, Some(3));
        assert_eq!(res.index_last_updated, None);
    }

    #[test]
    fn deserialize_list_response_without_files() {
        let res: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(res.files.is_empty());
    }

    #[test]
    fn serialize_tag_update() {
        let update = TagUpdate {
            action: TagAction::Add,
            tags: vec!["travel".into()],
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "action": "add", "tags": ["travel"] })
        );
    }

    #[test]
    fn deserialize_tags_without_field() {
        let tags: Tags = serde_json::from_str("{}").unwrap();
        assert!(tags.tags.is_none());
        let uploaded: Vec<UploadedFile> = serde_json::from_str(r#"[{}]"#).unwrap();
        assert!(uploaded[0].src.is_none());
    }
}
