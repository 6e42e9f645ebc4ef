use serde::{Deserialize, Deserializer, Serialize};

/// Highest sweetness level on the menu scale (0 = unsweetened).
pub const MAX_SWEETNESS: u8 = 4;

/// A single menu item, as listed in a bakery or drink catalog.
///
/// Tags are stored normalized (see [`normalize_tags`]). Case is preserved, so
/// selected tags must use the same casing as the catalog to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub category: String,

    pub name: String,

    pub price: u32,

    pub sweetness: u8,

    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn new(category: &str, name: &str, price: u32, sweetness: u8, tags: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            price,
            sweetness,
            tags: normalize_tags(&tags.join(",")),
        }
    }

    /// Basic validation: sweetness on the 0..=4 scale and a non-blank name.
    pub fn is_valid(&self) -> bool {
        self.sweetness <= MAX_SWEETNESS && !self.name.trim().is_empty()
    }

    /// Tags rendered the way the menu board prints them (`#sweet, #cream`).
    pub fn hashtags(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Normalize a raw tag list such as `"#sweet, #cream"`.
///
/// Removes every space, splits on commas, strips leading `#` and drops empty
/// entries. Repeated tags keep their first occurrence only.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tags: Vec<String> = Vec::new();
    for part in compact.split(',') {
        let tag = part.trim_start_matches('#');
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| normalize_tags(&s)).unwrap_or_default())
}
