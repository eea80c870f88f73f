use crate::time::Timestamp;

/// Used whenever the remote record does not declare a MIME type.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// A remotely stored file as seen in a listing.
///
/// Items are never mutated: every listing produces a fresh set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    /// Unique path of the file on the remote side.
    pub name: String,
    pub url: String,
    pub metadata: FileMetadata,
}

impl FileItem {
    /// The last path segment.
    pub fn file_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn tags(&self) -> &[String] {
        self.metadata.tags.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// The storage backend the file was uploaded through.
    pub channel: String,
    pub timestamp: Timestamp,
    /// Size in bytes.
    pub size: u64,
    pub mime: String,
    pub tags: Option<Vec<String>>,
}

impl Default for FileMetadata {
    fn default() -> Self {
        Self {
            channel: String::new(),
            timestamp: Timestamp::now(),
            size: 0,
            mime: DEFAULT_MIME.to_string(),
            tags: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_of_nested_path() {
        let item = FileItem {
            name: "2024/05/sunset.png".into(),
            url: "https://img.example.com/file/2024/05/sunset.png".into(),
            metadata: FileMetadata::default(),
        };
        assert_eq!(item.file_name(), "sunset.png");
        assert!(item.tags().is_empty());
    }

    #[test]
    fn default_metadata() {
        let m = FileMetadata::default();
        assert_eq!(m.size, 0);
        assert_eq!(m.mime, "application/octet-stream");
        assert_eq!(m.channel, "");
    }
}
