use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{RecommenderError, Result};
use crate::models::MenuItem;

/// Load a catalog from a CSV file with `category,name,price,sweetness,tags`.
///
/// The catalog is labelled with the file stem. Tags are normalized on load.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let reader = csv::Reader::from_path(path)?;
    let catalog = read_items(reader, label)?;

    debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Load a catalog from any CSV reader (used for tests and stdin).
pub fn load_catalog_from_reader<R: Read>(label: &str, rdr: R) -> Result<Catalog> {
    read_items(csv::Reader::from_reader(rdr), label.to_string())
}

/// Load a catalog, rejecting a file with no rows.
pub fn load_required_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let catalog = load_catalog(path)?;
    if catalog.is_empty() {
        return Err(RecommenderError::EmptyCatalog(path.display().to_string()));
    }
    Ok(catalog)
}

/// Load a menu a command reads, or one it only borrows tags from.
///
/// When `required` is false a missing or unreadable file is logged and treated
/// as an empty catalog.
pub fn load_menu<P: AsRef<Path>>(path: P, required: bool) -> Result<Catalog> {
    let path = path.as_ref();
    if required {
        return load_required_catalog(path);
    }
    match load_catalog(path) {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "menu unavailable, skipping its tags");
            Ok(Catalog::default())
        }
    }
}

fn read_items<R: Read>(mut reader: csv::Reader<R>, label: String) -> Result<Catalog> {
    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: MenuItem = record?;
        if !item.is_valid() {
            warn!(name = %item.name, sweetness = item.sweetness, "skipping invalid menu item");
            continue;
        }
        items.push(item);
    }
    Ok(Catalog::new(label, items))
}
