pub mod bundles;
pub mod combinatorics;
pub mod constants;
pub mod ranking;
pub mod scoring;

pub use bundles::{find_bundles, search_bundles, BundleSearchReport, SearchOptions};
pub use combinatorics::{binomial, multiset_count, Combinations, Multisets};
pub use constants::*;
pub use ranking::{name_counts, rank_items};
pub use scoring::{eligible_pool, score_item, sweetness_match, tag_score};
