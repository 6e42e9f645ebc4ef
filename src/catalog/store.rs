use std::collections::BTreeSet;

use crate::models::MenuItem;

/// Read-only table of menu items for one category (bakery or drink).
///
/// Items keep their source order; ranking breaks score ties by it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    label: String,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Create a catalog from items in source order.
    pub fn new(label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    /// Human-readable label, e.g. "bakery".
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Sorted, de-duplicated tags used anywhere in this catalog.
    pub fn tags(&self) -> BTreeSet<&str> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Tag vocabulary across several catalogs, sorted and de-duplicated.
pub fn all_tags(catalogs: &[&Catalog]) -> Vec<String> {
    catalogs
        .iter()
        .flat_map(|catalog| catalog.tags())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
