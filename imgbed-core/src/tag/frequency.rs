//! Tag frequencies for auto completion.
//!
//! Two independent counters are persisted:
//! the tags visible in the latest listing (gallery) and
//! the tags a user applied to files (user).

use crate::{
    entities::{normalize_tag, FileItem, FrequencyMap, TagFrequency},
    repositories::{Result, TagFrequencyRepo},
};
use std::cmp::Reverse;

pub const GALLERY_FREQUENCY_KEY: &str = "tag-gallery-frequency";
pub const USER_FREQUENCY_KEY: &str = "tag-user-frequency";

pub const DEFAULT_TOP_TAGS_LIMIT: usize = 10;

fn read_frequency<R>(repo: &R, key: &str) -> FrequencyMap
where
    R: TagFrequencyRepo + ?Sized,
{
    match repo.load_frequency(key) {
        Ok(frequency) => frequency.unwrap_or_default(),
        Err(err) => {
            log::warn!("Unable to read tag frequency '{key}': {err}");
            FrequencyMap::default()
        }
    }
}

/// Counts the normalized tags of all files.
pub fn count_tags(files: &[FileItem]) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for tag in files.iter().flat_map(FileItem::tags) {
        *counts.entry(normalize_tag(tag)).or_default() += 1;
    }
    counts
}

/// Replaces the gallery counts with the tags of the given files.
pub fn sync_gallery_tag_frequency<R>(repo: &R, files: &[FileItem]) -> Result<()>
where
    R: TagFrequencyRepo + ?Sized,
{
    let counts = count_tags(files);
    log::debug!("Sync {} gallery tags", counts.len());
    repo.save_frequency(GALLERY_FREQUENCY_KEY, &counts)
}

/// Increments the user counts once per given tag.
pub fn record_user_tag_usage<R, T>(repo: &R, added_tags: &[T]) -> Result<()>
where
    R: TagFrequencyRepo + ?Sized,
    T: AsRef<str>,
{
    if added_tags.is_empty() {
        return Ok(());
    }
    let mut frequency = read_frequency(repo, USER_FREQUENCY_KEY);
    for tag in added_tags {
        *frequency.entry(normalize_tag(tag.as_ref())).or_default() += 1;
    }
    repo.save_frequency(USER_FREQUENCY_KEY, &frequency)
}

/// Sums both counters and ranks by count (descending) and tag (ascending).
pub fn rank_tags(gallery: &FrequencyMap, user: &FrequencyMap, limit: usize) -> Vec<TagFrequency> {
    let mut combined = gallery.clone();
    for (tag, count) in user {
        *combined.entry(tag.clone()).or_default() += count;
    }
    let mut ranked: Vec<_> = combined
        .into_iter()
        .map(|(tag, count)| TagFrequency(tag, count))
        .collect();
    ranked.sort_by(|TagFrequency(t1, c1), TagFrequency(t2, c2)| {
        Reverse(c1).cmp(&Reverse(c2)).then_with(|| t1.cmp(t2))
    });
    ranked.truncate(limit);
    ranked
}

pub fn get_top_tags<R>(repo: &R, limit: usize) -> Vec<String>
where
    R: TagFrequencyRepo + ?Sized,
{
    let gallery = read_frequency(repo, GALLERY_FREQUENCY_KEY);
    let user = read_frequency(repo, USER_FREQUENCY_KEY);
    rank_tags(&gallery, &user, limit)
        .into_iter()
        .map(|TagFrequency(tag, _)| tag)
        .collect()
}
