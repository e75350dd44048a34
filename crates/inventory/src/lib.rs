//! Inventory ledger.
//!
//! Tracks how many units of each ingredient the shop has on hand and
//! implements the two-phase check-then-commit protocol orders use to consume
//! them. Pure in-memory state, no IO.

pub mod ledger;
pub mod requirements;

pub use ledger::{Inventory, Shortage, StockUpdate};
pub use requirements::IngredientRequirements;
