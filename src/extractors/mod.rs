//! Request extractors whose rejections are `AppError`, so every failure has the same JSON shape.

mod body;
mod path;

pub use body::{JsonBody, QueryParams};
pub use path::{EntityId, NestedIds};
