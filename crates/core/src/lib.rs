//! `cafeteria-core`: shared domain building blocks.
//!
//! Identifiers, the domain error model and the small set of traits the
//! shop's domain crates implement. No IO lives here.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, EmployeeId, OrderId};
pub use value_object::ValueObject;
