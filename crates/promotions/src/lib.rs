//! Promotions module.
//!
//! A promotion is a named percentage discount reserved for an allow-list of
//! customers. Applying one is a pure calculation over a total computed
//! elsewhere.

pub mod promotion;

pub use promotion::PromotionRule;
