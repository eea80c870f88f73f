use super::{list_files, prelude::*};
use crate::tag::{
    available_tags, match_tags, merge_unique, parse_search_input, parse_tags_input, tags_to_string,
};

/// Derives a list query from free text search input.
///
/// Hash tags are matched against the tags of the currently visible files;
/// tags that match nothing are dropped. Tags already included by `base`
/// are kept in front of the matched ones.
pub fn refine_list_query(base: &ListQuery, search_text: &str, visible: &[FileItem]) -> ListQuery {
    let SearchQuery { keywords, tags } = parse_search_input(search_text);
    let matched = match_tags(&tags, &available_tags(visible));
    let included = base
        .include_tags
        .as_deref()
        .map(parse_tags_input)
        .unwrap_or_default();
    let include_tags = merge_unique(&included, &matched, usize::MAX);
    ListQuery {
        search: (!keywords.is_empty()).then_some(keywords),
        include_tags: tags_to_string(&include_tags),
        ..base.clone()
    }
}

pub fn search_files<G, R>(
    gw: &G,
    repo: &R,
    base: &ListQuery,
    search_text: &str,
    visible: &[FileItem],
) -> Result<Vec<FileItem>>
where
    G: ImageHostGateway + ?Sized,
    R: TagFrequencyRepo + ?Sized,
{
    let query = refine_list_query(base, search_text, visible);
    list_files(gw, repo, &query)
}
