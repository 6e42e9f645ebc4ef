mod loader;
mod store;
mod synthetic;

pub use loader::{load_catalog, load_catalog_from_reader, load_menu, load_required_catalog};
pub use store::{all_tags, Catalog};
pub use synthetic::{synthetic_catalog, SyntheticSpec, SYNTHETIC_TAGS};
