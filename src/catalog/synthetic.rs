use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::models::{MenuItem, MAX_SWEETNESS};

/// Tag pool that synthetic items draw from.
pub const SYNTHETIC_TAGS: &[&str] = &[
    "sweet", "savory", "cream", "fruit", "chocolate", "nutty", "iced", "hot", "milk", "bitter",
    "light", "butter",
];

/// Shape of a generated catalog.
#[derive(Debug, Clone)]
pub struct SyntheticSpec {
    pub items: usize,
    /// Price range in whole units, inclusive; rounded to the nearest 100.
    pub price_range: (u32, u32),
    pub max_tags: usize,
}

impl SyntheticSpec {
    pub fn drinks(items: usize) -> Self {
        Self {
            items,
            price_range: (2_500, 7_000),
            max_tags: 3,
        }
    }

    pub fn bakery(items: usize) -> Self {
        Self {
            items,
            price_range: (2_000, 8_000),
            max_tags: 3,
        }
    }
}

/// Generate a reproducible catalog from a seed.
pub fn synthetic_catalog(label: &str, spec: &SyntheticSpec, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = spec.price_range;

    let items = (0..spec.items)
        .map(|i| {
            let price = rng.gen_range(lo..=hi) / 100 * 100;
            let sweetness = rng.gen_range(0..=MAX_SWEETNESS);
            let tag_count = rng.gen_range(0..=spec.max_tags.min(SYNTHETIC_TAGS.len()));
            let tags: Vec<&str> = SYNTHETIC_TAGS
                .choose_multiple(&mut rng, tag_count)
                .copied()
                .collect();
            MenuItem::new(label, &format!("{} #{:02}", label, i + 1), price, sweetness, &tags)
        })
        .collect();

    Catalog::new(label, items)
}
