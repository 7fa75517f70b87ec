pub mod error;
pub mod randomized;

// Re-export all modules
pub use error::{Error, Result};
pub use randomized::*;
