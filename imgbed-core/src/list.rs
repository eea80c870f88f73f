use crate::{
    entities::{FileItem, FileMetadata, Timestamp, DEFAULT_MIME},
    metadata::{self, Field, RawMetadata},
    tag::extract_tags_from_metadata,
    util::url::build_file_url,
};

/// A file record as returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFile {
    pub name: String,
    pub metadata: RawMetadata,
}

pub fn map_list_response(base_url: &str, files: Vec<RawFile>) -> Vec<FileItem> {
    files
        .into_iter()
        .map(|file| map_file(base_url, file))
        .collect()
}

fn map_file(base_url: &str, file: RawFile) -> FileItem {
    let RawFile { name, metadata } = file;
    let size = metadata::lookup_number(&metadata, Field::Size)
        .filter(|size| *size >= 0.0)
        .map(|size| size as u64)
        .unwrap_or_default();
    let timestamp = metadata::lookup_number(&metadata, Field::Timestamp)
        .and_then(|millis| Timestamp::try_from_millis(millis as i64))
        .unwrap_or_else(Timestamp::now);
    let channel = metadata::lookup_str(&metadata, Field::Channel)
        .unwrap_or_default()
        .to_string();
    let mime = metadata::lookup_str(&metadata, Field::Mime)
        .unwrap_or(DEFAULT_MIME)
        .to_string();
    let tags = Some(extract_tags_from_metadata(&metadata));
    let url = build_file_url(base_url, &name);
    FileItem {
        name,
        url,
        metadata: FileMetadata {
            channel,
            timestamp,
            size,
            mime,
            tags,
        },
    }
}
