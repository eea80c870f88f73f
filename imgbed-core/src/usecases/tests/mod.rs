use crate::{
    entities::*,
    gateways::{self, ImageHostGateway, ListQuery, UploadOptions},
    repositories::{self, TagFrequencyRepo},
    util::url::build_file_url,
};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

const BASE_URL: &str = "https://img.example.com";

type LoadError = Box<dyn Fn() -> repositories::Error>;

/// In-memory stand-in for the remote service and the local storage.
#[derive(Default)]
pub struct MockDb {
    pub files: RefCell<Vec<FileItem>>,
    pub file_tags: RefCell<HashMap<String, Vec<String>>>,
    pub list_queries: RefCell<Vec<ListQuery>>,
    pub uploads: RefCell<Vec<UploadOptions>>,
    pub deleted: RefCell<Vec<(String, bool)>>,
    pub fail_requests: Cell<bool>,
    frequencies: RefCell<HashMap<String, FrequencyMap>>,
    saves: Cell<usize>,
    load_error: RefCell<Option<LoadError>>,
}

impl MockDb {
    pub fn frequency(&self, key: &str) -> FrequencyMap {
        self.frequencies
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn fail_loading_with(&self, err: impl Fn() -> repositories::Error + 'static) {
        *self.load_error.borrow_mut() = Some(Box::new(err));
    }

    pub fn stop_failing(&self) {
        self.load_error.borrow_mut().take();
    }

    fn check_request(&self) -> gateways::Result<()> {
        if self.fail_requests.get() {
            return Err(gateways::Error::Status {
                status: 502,
                reason: "Bad Gateway".into(),
            });
        }
        Ok(())
    }
}

fn contains_tag(tags: &[String], tag: &str) -> bool {
    let tag = normalize_tag(tag);
    tags.iter().any(|t| normalize_tag(t) == tag)
}

impl TagFrequencyRepo for MockDb {
    fn load_frequency(&self, key: &str) -> repositories::Result<Option<FrequencyMap>> {
        if let Some(err) = &*self.load_error.borrow() {
            return Err(err());
        }
        Ok(self.frequencies.borrow().get(key).cloned())
    }

    fn save_frequency(&self, key: &str, frequency: &FrequencyMap) -> repositories::Result<()> {
        self.saves.set(self.saves.get() + 1);
        self.frequencies
            .borrow_mut()
            .insert(key.to_string(), frequency.clone());
        Ok(())
    }
}

impl ImageHostGateway for MockDb {
    fn upload_image(&self, options: &UploadOptions) -> gateways::Result<String> {
        self.check_request()?;
        self.uploads.borrow_mut().push(options.clone());
        let name = options
            .file_name
            .clone()
            .or_else(|| {
                options
                    .file_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_default();
        Ok(build_file_url(BASE_URL, &name))
    }

    fn list_files(&self, query: &ListQuery) -> gateways::Result<Vec<FileItem>> {
        self.check_request()?;
        self.list_queries.borrow_mut().push(query.clone());
        Ok(self.files.borrow().clone())
    }

    fn delete_file(&self, path: &str, folder: bool) -> gateways::Result<()> {
        self.check_request()?;
        self.deleted.borrow_mut().push((path.to_string(), folder));
        Ok(())
    }

    fn get_tags(&self, path: &str) -> gateways::Result<Vec<String>> {
        self.check_request()?;
        Ok(self
            .file_tags
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_default())
    }

    fn update_tags(
        &self,
        path: &str,
        action: TagAction,
        tags: &[String],
    ) -> gateways::Result<Vec<String>> {
        self.check_request()?;
        let mut file_tags = self.file_tags.borrow_mut();
        let current = file_tags.entry(path.to_string()).or_default();
        match action {
            TagAction::Set => *current = tags.to_vec(),
            TagAction::Add => {
                for tag in tags {
                    if !contains_tag(current, tag) {
                        current.push(tag.clone());
                    }
                }
            }
            TagAction::Remove => current.retain(|t| !contains_tag(tags, t)),
        }
        Ok(current.clone())
    }
}
