pub mod document;
pub mod favorite;

pub use document::*;
pub use favorite::*;
