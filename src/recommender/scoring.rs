use crate::catalog::Catalog;
use crate::models::{MenuItem, ScoredItem, SweetnessRange};
use crate::recommender::constants::{SWEETNESS_MATCH_POINTS, TAG_MATCH_POINTS};

/// Tag score: `TAG_MATCH_POINTS` per selected tag present on the item.
///
/// Selected tags are not de-duplicated; picking the same tag twice counts twice.
pub fn tag_score(item_tags: &[String], selected_tags: &[String]) -> u32 {
    if item_tags.is_empty() {
        return 0;
    }
    let matches = selected_tags
        .iter()
        .filter(|tag| item_tags.contains(*tag))
        .count() as u32;
    matches * TAG_MATCH_POINTS
}

/// Sweetness score: `SWEETNESS_MATCH_POINTS` inside the range (inclusive), else 0.
pub fn sweetness_match(sweetness: u8, range: SweetnessRange) -> u32 {
    if range.contains(sweetness) {
        SWEETNESS_MATCH_POINTS
    } else {
        0
    }
}

/// Score one item. `position` is its index in the owning catalog.
pub fn score_item<'a>(
    item: &'a MenuItem,
    position: usize,
    selected_tags: &[String],
    range: SweetnessRange,
) -> ScoredItem<'a> {
    let tag_score = tag_score(&item.tags, selected_tags);
    let sweetness_match = sweetness_match(item.sweetness, range);
    ScoredItem {
        item,
        position,
        tag_score,
        sweetness_match,
        total_score: tag_score + sweetness_match,
    }
}

/// Score a catalog and keep the eligible items, best first.
///
/// Ties keep catalog order (stable sort).
pub fn eligible_pool<'a>(
    catalog: &'a Catalog,
    selected_tags: &[String],
    range: SweetnessRange,
) -> Vec<ScoredItem<'a>> {
    let mut pool: Vec<ScoredItem<'a>> = catalog
        .items()
        .iter()
        .enumerate()
        .map(|(position, item)| score_item(item, position, selected_tags, range))
        .filter(ScoredItem::is_eligible)
        .collect();

    pool.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    pool
}
