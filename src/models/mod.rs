mod menu_item;
mod preference;
mod recommendation;

pub use menu_item::{normalize_tags, MenuItem, MAX_SWEETNESS};
pub use preference::{Preference, SweetnessRange, MAX_PARTY_SIZE, MAX_SELECTED_TAGS};
pub use recommendation::{Bundle, ScoredItem};
