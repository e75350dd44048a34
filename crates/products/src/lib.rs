//! Catalog module.
//!
//! Describes what the shop sells: beverages that consume ingredients and
//! desserts that don't. Products are immutable values, read-only while
//! orders are being taken.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductKind};
