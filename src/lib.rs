pub mod bk_tree;
pub mod braille;
pub mod config;
pub mod dictionary;
pub mod edit_distance;
pub mod error;
pub mod suggest;

pub use crate::bk_tree::{BkTree, Match, best_match, build, lookup};
pub use crate::edit_distance::{EditDistance, levenshtein};
pub use crate::error::{Error, Result};
pub use crate::suggest::{Autocorrector, Suggestion};
