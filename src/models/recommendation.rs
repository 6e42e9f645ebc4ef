use serde::Serialize;

use crate::models::MenuItem;

/// A menu item together with the scores computed for one request.
///
/// Borrows the item from its catalog; `position` is the item's index in that
/// catalog and serves as its identity during ranking.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredItem<'a> {
    #[serde(flatten)]
    pub item: &'a MenuItem,

    #[serde(skip)]
    pub position: usize,

    pub tag_score: u32,

    pub sweetness_match: u32,

    pub total_score: u32,
}

impl<'a> ScoredItem<'a> {
    /// Whether the item falls inside the requested sweetness window.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.sweetness_match > 0
    }

    /// Whether at least one selected tag matched.
    #[inline]
    pub fn is_tag_matched(&self) -> bool {
        self.tag_score > 0
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        &self.item.name
    }

    #[inline]
    pub fn price(&self) -> u32 {
        self.item.price
    }
}

/// A drink-per-person order paired with one to four bakery items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    /// Sum of member total scores.
    pub score: u32,

    /// Sum of member prices.
    pub price: u64,

    /// One entry per person; the same drink may repeat.
    pub drinks: Vec<String>,

    /// Distinct bakery items.
    pub bakeries: Vec<String>,
}
