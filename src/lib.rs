pub mod cs;

pub use cs::randomized;
pub use cs::{Error, IndexSource, RandomizedSet, Result};
