use super::prelude::*;
use crate::tag::{self, frequency};
use itertools::Itertools;
use std::collections::HashSet;

/// The result of the tag editor of a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEdit {
    pub path: String,
    /// The tags of the file before editing.
    pub initial_tags: Vec<String>,
    /// Checked tags out of the suggestions.
    pub selected_tags: Vec<String>,
    /// Free text input, separated by commas or whitespace.
    pub custom_tags: String,
}

/// Tags offered in the editor: the current ones followed by the most used ones.
pub fn suggest_tags<R>(repo: &R, current_tags: &[String], limit: usize) -> Vec<String>
where
    R: TagFrequencyRepo + ?Sized,
{
    let top = frequency::get_top_tags(repo, limit);
    tag::merge_unique(current_tags, &top, limit)
}

/// Replaces the tags of a file with the edited ones.
pub fn save_tags<G, R>(gw: &G, repo: &R, edit: TagEdit) -> Result<Vec<String>>
where
    G: ImageHostGateway + ?Sized,
    R: TagFrequencyRepo + ?Sized,
{
    let TagEdit {
        path,
        initial_tags,
        selected_tags,
        custom_tags,
    } = edit;
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let tags: Vec<_> = selected_tags
        .into_iter()
        .chain(tag::parse_tags_input(&custom_tags))
        .unique()
        .collect();
    let updated = gw.update_tags(&path, TagAction::Set, &tags)?;
    record_added_tags(repo, &initial_tags, &tags);
    Ok(updated)
}

/// Applies a single tag action to a file.
pub fn modify_tags<G, R>(
    gw: &G,
    repo: &R,
    path: &str,
    action: TagAction,
    input: &str,
) -> Result<Vec<String>>
where
    G: ImageHostGateway + ?Sized,
    R: TagFrequencyRepo + ?Sized,
{
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let tags: Vec<_> = tag::parse_tags_input(input).into_iter().unique().collect();
    if tags.is_empty() && action != TagAction::Set {
        return Err(Error::EmptyTags);
    }
    let initial_tags = match action {
        TagAction::Set | TagAction::Add => gw.get_tags(path)?,
        TagAction::Remove => vec![],
    };
    let updated = gw.update_tags(path, action, &tags)?;
    if action != TagAction::Remove {
        record_added_tags(repo, &initial_tags, &tags);
    }
    Ok(updated)
}

fn record_added_tags<R>(repo: &R, initial_tags: &[String], tags: &[String])
where
    R: TagFrequencyRepo + ?Sized,
{
    let initial: HashSet<_> = initial_tags.iter().map(|t| normalize_tag(t)).collect();
    let added: Vec<_> = tags
        .iter()
        .filter(|t| !initial.contains(&normalize_tag(t)))
        .collect();
    if let Err(err) = frequency::record_user_tag_usage(repo, added.as_slice()) {
        log::warn!("Unable to record tag usage: {err}");
    }
}
