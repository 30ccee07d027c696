pub mod base;
pub mod file_store;
pub mod memory_store;

pub use base::*;
pub use file_store::*;
pub use memory_store::*;
