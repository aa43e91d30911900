pub mod indexing;
pub mod logging;

pub use indexing::{column, index_by};
