pub mod index_source;
pub mod randomized_set;

pub use index_source::IndexSource;
pub use randomized_set::RandomizedSet;
