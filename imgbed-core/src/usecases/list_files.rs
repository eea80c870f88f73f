use super::prelude::*;
use crate::tag::frequency;

/// Fetches a page of files and replaces the gallery tag counts with their tags.
pub fn list_files<G, R>(gw: &G, repo: &R, query: &ListQuery) -> Result<Vec<FileItem>>
where
    G: ImageHostGateway + ?Sized,
    R: TagFrequencyRepo + ?Sized,
{
    let files = gw.list_files(query)?;
    log::debug!("Listed {} files", files.len());
    if let Err(err) = frequency::sync_gallery_tag_frequency(repo, &files) {
        log::warn!("Unable to update the gallery tag frequency: {err}");
    }
    Ok(files)
}
