use serde::{Deserialize, Serialize};

use cafeteria_core::{CustomerId, Entity, OrderId};
use cafeteria_inventory::{Inventory, Shortage};
use cafeteria_sales::{Order, OrderStatus};

/// Summary of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub customer_name: String,
    pub order_id: OrderId,
    pub item_count: usize,
    pub total: f64,
    pub status: OrderStatus,
}

impl core::fmt::Display for OrderReceipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order placed by {}: {} item(s). Total: ${}. Status: {}",
            self.customer_name, self.item_count, self.total, self.status
        )
    }
}

/// A submission the ledger could not cover.
///
/// Carries the order back to the caller untouched, still `Pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub customer_name: String,
    pub order: Order,
    pub shortages: Vec<Shortage>,
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order by {} with {} item(s) rejected: insufficient stock",
            self.customer_name,
            self.order.item_count()
        )?;
        if !self.shortages.is_empty() {
            let details: Vec<String> = self.shortages.iter().map(ToString::to_string).collect();
            write!(f, " ({})", details.join("; "))?;
        }
        Ok(())
    }
}

/// Result of `Customer::submit_order`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Placed(OrderReceipt),
    Rejected(Rejection),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Placed(_))
    }

    /// Human-readable outcome line.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Placed(receipt) => receipt.to_string(),
            SubmitOutcome::Rejected(rejection) => rejection.to_string(),
        }
    }

    /// Take back a rejected order, e.g. to retry after restocking.
    pub fn into_rejected_order(self) -> Option<Order> {
        match self {
            SubmitOutcome::Placed(_) => None,
            SubmitOutcome::Rejected(rejection) => Some(rejection.order),
        }
    }
}

/// A customer and the orders they have successfully placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    history: Vec<Order>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(CustomerId::new(), name)
    }

    pub fn with_id(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Committed orders, oldest first.
    pub fn history(&self) -> &[Order] {
        &self.history
    }

    /// Sum of totals across the order history.
    pub fn lifetime_spend(&self) -> f64 {
        self.history.iter().map(Order::total).sum()
    }

    /// Validate `order` against the ledger and, if it fits, commit it.
    ///
    /// On success the ledger is deducted, the order moves to
    /// `InPreparation` and joins this customer's history. On failure nothing
    /// changes and the order comes back inside the rejection.
    pub fn submit_order(&mut self, mut order: Order, inventory: &mut Inventory) -> SubmitOutcome {
        if !order.validate(inventory) {
            let shortages = inventory.shortages(&order.required_ingredients());
            tracing::warn!(
                customer = %self.name,
                order_id = %order.id_typed(),
                shortages = shortages.len(),
                "order rejected: insufficient stock"
            );
            return SubmitOutcome::Rejected(Rejection {
                customer_name: self.name.clone(),
                order,
                shortages,
            });
        }

        order.process(inventory);

        let receipt = OrderReceipt {
            customer_name: self.name.clone(),
            order_id: order.id_typed(),
            item_count: order.item_count(),
            total: order.total(),
            status: order.status(),
        };
        self.history.push(order);

        tracing::info!(
            customer = %self.name,
            order_id = %receipt.order_id,
            items = receipt.item_count,
            total = receipt.total,
            "order placed"
        );

        SubmitOutcome::Placed(receipt)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
