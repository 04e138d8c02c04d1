//! Utility modules

pub mod fuzzy;

pub use fuzzy::{find_best_match, is_fuzzy_match, normalize_name, similarity, FuzzyMatch};
