//! Gazette items and the boundary they arrive through.

pub mod item;
pub mod source;

pub use item::GazetteItem;
pub use source::{ItemSource, JsonInput, JsonItemSource};
