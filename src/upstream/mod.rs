pub mod client;
pub mod dispatch;

pub use client::*;
pub use dispatch::*;
