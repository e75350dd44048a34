use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use cafeteria_core::{CustomerId, DomainError, DomainResult};
use cafeteria_parties::Customer;

/// Discount code for a fixed set of eligible customers.
///
/// `discount_percent` is taken as given: `new` does not range-check it, so a
/// negative or >100 value produces a surcharge or a negative total. Use
/// `validated` when the percentage comes from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRule {
    code: String,
    discount_percent: i32,
    eligible_customers: BTreeSet<CustomerId>,
}

impl PromotionRule {
    pub fn new<I>(code: impl Into<String>, discount_percent: i32, eligible_customers: I) -> Self
    where
        I: IntoIterator<Item = CustomerId>,
    {
        Self {
            code: code.into(),
            discount_percent,
            eligible_customers: eligible_customers.into_iter().collect(),
        }
    }

    /// Like `new` with an empty allow-list, but rejects a blank code or a
    /// percentage outside 1–100.
    pub fn validated(code: impl Into<String>, discount_percent: i32) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("promotion code cannot be empty"));
        }
        if !(1..=100).contains(&discount_percent) {
            return Err(DomainError::validation(format!(
                "discount must be between 1 and 100, got {discount_percent}"
            )));
        }
        Ok(Self::new(code, discount_percent, []))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount_percent(&self) -> i32 {
        self.discount_percent
    }

    pub fn eligible_customers(&self) -> impl Iterator<Item = &CustomerId> {
        self.eligible_customers.iter()
    }

    /// Add a customer to the allow-list. Returns `false` if already present.
    pub fn enroll(&mut self, customer_id: CustomerId) -> bool {
        self.eligible_customers.insert(customer_id)
    }

    pub fn is_eligible(&self, customer_id: &CustomerId) -> bool {
        self.eligible_customers.contains(customer_id)
    }

    /// Discounted total for eligible customers; `total` unchanged otherwise.
    pub fn apply(&self, customer: &Customer, total: f64) -> f64 {
        if !self.is_eligible(&customer.id_typed()) {
            tracing::debug!(code = %self.code, customer = customer.name(), "customer not eligible");
            return total;
        }

        let discounted = total * (1.0 - f64::from(self.discount_percent) / 100.0);
        tracing::info!(
            code = %self.code,
            customer = customer.name(),
            total,
            discounted,
            "promotion applied"
        );
        discounted
    }
}

impl core::fmt::Display for PromotionRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}% - {} eligible customer(s)",
            self.code,
            self.discount_percent,
            self.eligible_customers.len()
        )
    }
}
