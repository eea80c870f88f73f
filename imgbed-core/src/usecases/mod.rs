use crate::{gateways::ImageHostGateway, repositories::TagFrequencyRepo};

mod delete_file;
mod edit_tags;
mod error;
mod list_files;
mod search_files;
mod upload_file;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    delete_file::*, edit_tags::*, error::Error, list_files::*, search_files::*, upload_file::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{ImageHostGateway, ListQuery, UploadOptions},
        repositories::TagFrequencyRepo,
    };
}

pub fn get_tags<G>(gw: &G, path: &str) -> Result<Vec<String>>
where
    G: ImageHostGateway + ?Sized,
{
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    Ok(gw.get_tags(path)?)
}

pub fn top_tags<R>(repo: &R, limit: usize) -> Vec<String>
where
    R: TagFrequencyRepo + ?Sized,
{
    crate::tag::frequency::get_top_tags(repo, limit)
}
