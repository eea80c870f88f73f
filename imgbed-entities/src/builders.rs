pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::file_item_builder::*;

pub mod file_item_builder {

    use super::*;
    use crate::{file::*, time::Timestamp};

    #[derive(Debug)]
    pub struct FileItemBuild {
        item: FileItem,
    }

    impl FileItemBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.item.name = name.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.item.url = url.into();
            self
        }
        pub fn channel(mut self, channel: &str) -> Self {
            self.item.metadata.channel = channel.into();
            self
        }
        pub fn size(mut self, size: u64) -> Self {
            self.item.metadata.size = size;
            self
        }
        pub fn mime(mut self, mime: &str) -> Self {
            self.item.metadata.mime = mime.into();
            self
        }
        pub fn timestamp(mut self, ts: Timestamp) -> Self {
            self.item.metadata.timestamp = ts;
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.item.metadata.tags = Some(tags.into_iter().map(|x| x.into()).collect());
            self
        }
        pub fn finish(self) -> FileItem {
            self.item
        }
    }

    impl Builder for FileItem {
        type Build = FileItemBuild;
        fn build() -> Self::Build {
            FileItemBuild {
                item: FileItem {
                    name: "".into(),
                    url: "".into(),
                    metadata: FileMetadata::default(),
                },
            }
        }
    }
}
