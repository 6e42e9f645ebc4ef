pub mod prompts;
pub mod render;
pub mod tags;

pub use prompts::{
    collect_preference, parse_sweetness_range, prompt_budget, prompt_party_size,
    prompt_sweetness_range, prompt_tags, prompt_yes_no,
};
pub use render::{
    describe_preference, display_bundles, display_drink_counts, display_ranked_items,
    display_tags, format_price,
};
pub use tags::{resolve_tags, suggest_tag};
