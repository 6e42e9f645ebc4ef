use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{ScoredItem, SweetnessRange};
use crate::recommender::scoring::eligible_pool;

/// Rank a single catalog for one request.
///
/// The list size is `limit * party_size` when `limit` is given, unbounded
/// otherwise. Selection runs in three stages:
/// 1. Items outside the sweetness range are dropped; the rest are sorted by
///    total score (ties keep catalog order).
/// 2. Tag-matched items are preferred; if none match, the whole eligible pool
///    is used.
/// 3. A short list is backfilled from the eligible pool and de-duplicated by
///    name (first occurrence wins).
///
/// Returns an empty list when nothing is eligible.
pub fn rank_items<'a>(
    catalog: &'a Catalog,
    selected_tags: &[String],
    range: SweetnessRange,
    limit: Option<usize>,
    party_size: usize,
) -> Vec<ScoredItem<'a>> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let pool = eligible_pool(catalog, selected_tags, range);
    if pool.is_empty() {
        debug!(catalog = catalog.label(), "no items within sweetness range");
        return Vec::new();
    }

    let target = limit.map(|l| l * party_size);

    let tag_matched: Vec<ScoredItem<'a>> = pool
        .iter()
        .copied()
        .filter(ScoredItem::is_tag_matched)
        .collect();

    let primary = if tag_matched.is_empty() { &pool } else { &tag_matched };
    let mut selected: Vec<ScoredItem<'a>> = primary
        .iter()
        .take(target.unwrap_or(primary.len()))
        .copied()
        .collect();

    if let Some(target) = target {
        if selected.len() < target {
            let needed = target - selected.len();
            let taken: HashSet<usize> = selected.iter().map(|s| s.position).collect();
            selected.extend(
                pool.iter()
                    .filter(|s| !taken.contains(&s.position))
                    .take(needed)
                    .copied(),
            );
            dedup_by_name(&mut selected);
        }
        selected.truncate(target);
    }

    debug!(
        catalog = catalog.label(),
        eligible = pool.len(),
        tag_matched = tag_matched.len(),
        selected = selected.len(),
        "ranked items"
    );
    selected
}

/// Drop later entries whose name already appeared.
fn dedup_by_name<'a>(items: &mut Vec<ScoredItem<'a>>) {
    let mut seen: HashSet<&'a str> = HashSet::new();
    items.retain(|s| seen.insert(s.name()));
}

/// Count how many times each name appears, in first-appearance order.
///
/// Used to summarise a drink list as "name × quantity".
pub fn name_counts<'a>(items: &[ScoredItem<'a>]) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for scored in items {
        match counts.iter_mut().find(|(name, _)| *name == scored.name()) {
            Some((_, count)) => *count += 1,
            None => counts.push((scored.name(), 1)),
        }
    }
    counts
}
