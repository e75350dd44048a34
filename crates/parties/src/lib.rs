//! Parties module: the people the shop deals with.
//!
//! Customers submit orders and keep their history; employees are a plain
//! staff directory.

pub mod customer;
pub mod employee;

pub use customer::{Customer, OrderReceipt, Rejection, SubmitOutcome};
pub use employee::{Employee, EmployeeRole};
