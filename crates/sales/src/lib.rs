//! Orders module.
//!
//! A cart is the caller's scratch list of products; an order is the snapshot
//! that gets validated against, and committed to, the inventory ledger.

pub mod cart;
pub mod order;

pub use cart::Cart;
pub use order::{Order, OrderStatus};
