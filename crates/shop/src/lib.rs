//! `cafeteria-shop`: a coffee shop session.
//!
//! Owns the ledger, menu, customers, staff and promotions for one running
//! shop, and exposes the operations a front end calls: taking orders,
//! restocking, managing promotions. Raw user input is validated here before
//! it reaches the domain crates.

pub mod config;
pub mod shop;

pub use config::{EmployeeEntry, PromotionEntry, ShopConfig, StockEntry, CONFIG_PATH_ENV};
pub use shop::{CoffeeShop, PromotionQuote};
