//! Access to the remote image hosting service.

use crate::entities::{FileItem, NameType, ReturnFormat, TagAction};
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {status} {reason}")]
    Status { status: u16, reason: String },
    /// The service could not be reached at all.
    #[error("Unable to connect: {0}")]
    Connection(#[source] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Connection failures are not worth retrying.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub file_path: PathBuf,
    /// Overrides the name of the local file.
    pub file_name: Option<String>,
    pub channel: Option<String>,
    pub folder: Option<String>,
    pub name_type: Option<NameType>,
    pub return_format: Option<ReturnFormat>,
    pub server_compress: Option<bool>,
    pub auto_retry: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub dir: Option<String>,
    pub search: Option<String>,
    /// Comma separated
    pub include_tags: Option<String>,
    /// Comma separated
    pub exclude_tags: Option<String>,
    pub channel: Option<String>,
    pub list_type: Option<String>,
    pub start: Option<u64>,
    pub count: Option<u64>,
    pub recursive: bool,
}

pub trait ImageHostGateway {
    /// Returns the public URL of the uploaded file.
    fn upload_image(&self, options: &UploadOptions) -> Result<String>;
    fn list_files(&self, query: &ListQuery) -> Result<Vec<FileItem>>;
    fn delete_file(&self, path: &str, folder: bool) -> Result<()>;
    fn get_tags(&self, path: &str) -> Result<Vec<String>>;
    /// Returns the tags of the file after the update.
    fn update_tags(&self, path: &str, action: TagAction, tags: &[String]) -> Result<Vec<String>>;
}
