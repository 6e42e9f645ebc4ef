/// Points added for each selected tag found on an item.
pub const TAG_MATCH_POINTS: u32 = 10;

/// Points for an item whose sweetness falls inside the requested range.
///
/// An item scoring 0 here is ineligible, not merely ranked lower.
pub const SWEETNESS_MATCH_POINTS: u32 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Bundle search
// ─────────────────────────────────────────────────────────────────────────────

/// Top-scoring items per catalog considered by the bundle search.
///
/// Items ranked below this are never combined, even if cheaper.
pub const BUNDLE_CANDIDATE_POOL: usize = 20;

/// Bakery items per bundle: at least one, at most this many, all distinct.
pub const MAX_BAKERY_PER_BUNDLE: usize = 4;

/// Number of bundles returned.
pub const TOP_BUNDLES: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Single-category lists
// ─────────────────────────────────────────────────────────────────────────────

/// Bakery items shown on the bakery list.
pub const BAKERY_LIST_LIMIT: usize = 4;

/// Drinks shown per person on the drink list.
pub const DRINKS_PER_PERSON: usize = 1;
