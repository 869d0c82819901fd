use std::collections::HashSet;

use thiserror::Error;

use crate::models::{CatalogItem, ItemId, ScoredCandidate};
use crate::services::catalog::Catalog;

/// Maximum number of candidates returned by [`score`]
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Points for each tag a candidate shares with the viewed items
const TAG_MATCH_POINTS: u32 = 2;

/// Flat bonus when a candidate's category was viewed, applied at most once
const CATEGORY_MATCH_POINTS: u32 = 1;

/// Error types for the scorer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("User history is empty")]
    EmptyHistory,
    #[error("Unknown catalog item {0}")]
    UnknownItem(ItemId),
}

/// Resolves history ids to catalog items, preserving click order
///
/// Any id missing from the catalog is a data-consistency error.
pub fn resolve_history<'a, C: Catalog + ?Sized>(
    catalog: &'a C,
    history: &[ItemId],
) -> Result<Vec<&'a CatalogItem>, ScoringError> {
    history
        .iter()
        .map(|&id| catalog.get(id).ok_or(ScoringError::UnknownItem(id)))
        .collect()
}

/// Ranks unviewed catalog items by tag and category overlap with the history
///
/// Each candidate earns 2 points per distinct tag it shares with any viewed
/// item, plus 1 if its category matches a viewed category. Zero-score items
/// are dropped, ties are broken by ascending id, and at most
/// [`MAX_RECOMMENDATIONS`] are returned.
pub fn score<C: Catalog + ?Sized>(
    catalog: &C,
    history: &[ItemId],
) -> Result<Vec<ScoredCandidate>, ScoringError> {
    if history.is_empty() {
        return Err(ScoringError::EmptyHistory);
    }

    let viewed = resolve_history(catalog, history)?;
    let viewed_ids: HashSet<ItemId> = history.iter().copied().collect();
    let viewed_tags: HashSet<&str> = viewed
        .iter()
        .flat_map(|item| item.tags.iter().map(String::as_str))
        .collect();
    let viewed_categories: HashSet<&str> =
        viewed.iter().map(|item| item.category.as_str()).collect();

    let mut candidates: Vec<ScoredCandidate> = catalog
        .items()
        .iter()
        .filter(|item| !viewed_ids.contains(&item.id))
        .filter_map(|item| {
            let shared_tags = item
                .tags
                .iter()
                .filter(|tag| viewed_tags.contains(tag.as_str()))
                .count() as u32;
            let mut score = shared_tags * TAG_MATCH_POINTS;
            if viewed_categories.contains(item.category.as_str()) {
                score += CATEGORY_MATCH_POINTS;
            }

            (score > 0).then(|| ScoredCandidate {
                item: item.clone(),
                score,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.item.id.cmp(&b.item.id)));
    candidates.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        history_len = history.len(),
        viewed_tags = viewed_tags.len(),
        candidates = candidates.len(),
        "Scored recommendation candidates"
    );

    Ok(candidates)
}
