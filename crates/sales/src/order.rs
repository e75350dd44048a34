use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafeteria_core::{AggregateRoot, OrderId};
use cafeteria_inventory::{IngredientRequirements, Inventory};
use cafeteria_products::Product;

/// Order status lifecycle.
///
/// `InPreparation` is terminal here: nothing completes or cancels an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InPreparation,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("Pending"),
            OrderStatus::InPreparation => f.write_str("In preparation"),
        }
    }
}

/// Aggregate root: Order.
///
/// Holds a snapshot of the products selected when it was created. Items are
/// fixed for the order's lifetime; only the status moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<Product>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    version: u64,
}

impl Order {
    pub fn new(items: Vec<Product>) -> Self {
        Self::with_id(OrderId::new(), items, Utc::now())
    }

    /// Build an order with an explicit id and timestamp (deterministic tests, replays).
    pub fn with_id(id: OrderId, items: Vec<Product>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            items,
            status: OrderStatus::Pending,
            created_at,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Sum of item prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::price).sum()
    }

    /// One unit per ingredient occurrence across all beverages.
    ///
    /// `validate` and `process` both go through here, so an order that
    /// validated is exactly the order that gets deducted.
    pub fn required_ingredients(&self) -> IngredientRequirements {
        self.items
            .iter()
            .flat_map(|p| p.required_ingredients().iter().map(String::as_str))
            .collect()
    }

    /// Whether the ledger can cover this order right now. Never mutates.
    pub fn validate(&self, inventory: &Inventory) -> bool {
        inventory.has_sufficient_stock(&self.required_ingredients())
    }

    /// Deduct ingredients and move to `InPreparation`.
    ///
    /// Must follow a successful `validate` against the same ledger state;
    /// nothing here re-checks stock.
    pub fn process(&mut self, inventory: &mut Inventory) {
        inventory.commit_deduction(&self.required_ingredients());
        self.status = OrderStatus::InPreparation;
        self.version += 1;

        tracing::debug!(order_id = %self.id, status = %self.status, "order processed");
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn americano() -> Product {
        Product::beverage("Americano", 30.0, "Medium", "Hot", ["coffee"])
    }

    fn latte() -> Product {
        Product::beverage("Latte", 50.0, "Large", "Hot", ["coffee", "milk"])
    }

    fn brownie() -> Product {
        Product::dessert("Brownie", 40.0, false, false)
    }

    fn stocked(entries: &[(&str, i64)]) -> Inventory {
        entries.iter().map(|(n, q)| (*n, *q)).collect()
    }

    #[test]
    fn new_order_is_pending_at_version_zero() {
        let order = Order::new(vec![americano()]);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.is_pending());
        assert_eq!(order.version(), 0);
    }

    #[test]
    fn total_sums_prices() {
        let order = Order::new(vec![americano(), latte(), brownie()]);
        assert_eq!(order.total(), 120.0);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(Order::new(Vec::new()).total(), 0.0);
    }

    #[test]
    fn required_ingredients_count_beverages_only() {
        let order = Order::new(vec![americano(), latte(), brownie(), latte()]);
        let reqs = order.required_ingredients();
        assert_eq!(reqs.get("coffee"), 3);
        assert_eq!(reqs.get("milk"), 2);
        assert_eq!(reqs.len(), 2);
    }

    #[test]
    fn duplicate_ingredient_within_one_beverage_counts_twice() {
        let doppio = Product::beverage("Doppio", 35.0, "Small", "Hot", ["coffee", "coffee"]);
        let order = Order::new(vec![doppio]);
        assert_eq!(order.required_ingredients().get("coffee"), 2);
        assert!(!order.validate(&stocked(&[("coffee", 1)])));
        assert!(order.validate(&stocked(&[("coffee", 2)])));
    }

    #[test]
    fn dessert_only_order_always_validates() {
        let order = Order::new(vec![brownie(), Product::dessert("Muffin", 35.0, true, true)]);
        assert!(order.required_ingredients().is_empty());
        assert!(order.validate(&Inventory::new()));
    }

    #[test]
    fn validate_does_not_mutate() {
        let inventory = stocked(&[("coffee", 1)]);
        let order = Order::new(vec![latte()]);
        let inventory_before = inventory.clone();
        let order_before = order.clone();

        assert!(!order.validate(&inventory));
        assert!(!order.validate(&inventory));

        assert_eq!(inventory, inventory_before);
        assert_eq!(order, order_before);
    }

    #[test]
    fn process_deducts_and_moves_to_in_preparation() {
        let mut inventory = stocked(&[("coffee", 50)]);
        let mut order = Order::new(vec![americano()]);

        assert!(order.validate(&inventory));
        order.process(&mut inventory);

        assert_eq!(inventory.quantity("coffee"), 49);
        assert_eq!(order.status(), OrderStatus::InPreparation);
        assert_eq!(order.version(), 1);
    }

    #[test]
    fn status_displays_human_readable() {
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
        assert_eq!(OrderStatus::InPreparation.to_string(), "In preparation");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn product() -> impl Strategy<Value = Product> {
            prop_oneof![
                Just(americano()),
                Just(latte()),
                Just(brownie()),
                Just(Product::beverage("Mocha", 55.0, "Large", "Hot", ["coffee", "chocolate", "milk"])),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a validated order can always be processed without driving stock negative.
            #[test]
            fn validated_orders_deduct_safely(
                items in prop::collection::vec(product(), 0..8),
                coffee in 0i64..10,
                milk in 0i64..10,
                chocolate in 0i64..10,
            ) {
                let mut inventory = stocked(&[("coffee", coffee), ("milk", milk), ("chocolate", chocolate)]);
                let mut order = Order::new(items);
                if order.validate(&inventory) {
                    order.process(&mut inventory);
                    for (_, qty) in inventory.iter() {
                        prop_assert!(qty >= 0);
                    }
                    prop_assert_eq!(order.status(), OrderStatus::InPreparation);
                } else {
                    prop_assert_eq!(order.status(), OrderStatus::Pending);
                }
            }

            /// Property: deduction removes exactly the required units.
            #[test]
            fn process_removes_required_units(items in prop::collection::vec(product(), 0..8)) {
                let mut inventory = stocked(&[("coffee", 100), ("milk", 100), ("chocolate", 100)]);
                let mut order = Order::new(items);
                let reqs = order.required_ingredients();
                order.process(&mut inventory);
                for name in ["coffee", "milk", "chocolate"] {
                    prop_assert_eq!(inventory.quantity(name), 100 - i64::from(reqs.get(name)));
                }
            }
        }
    }
}
