pub mod bench;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod recommender;

pub use catalog::Catalog;
pub use error::{RecommenderError, Result};
pub use models::{Bundle, MenuItem, Preference, ScoredItem, SweetnessRange};
