use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cafeteria_core::ValueObject;

use crate::requirements::IngredientRequirements;

/// Result of a restock: the ingredient and its quantity afterwards.
///
/// Renders as the status line shown to staff after updating stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub ingredient: String,
    pub quantity: i64,
}

impl ValueObject for StockUpdate {}

impl core::fmt::Display for StockUpdate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Inventory updated: {} - {} units available",
            self.ingredient, self.quantity
        )
    }
}

/// An ingredient an order needs more of than the ledger holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortage {
    pub ingredient: String,
    pub required: u32,
    pub available: i64,
}

impl core::fmt::Display for Shortage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: required {}, available {}",
            self.ingredient, self.required, self.available
        )
    }
}

/// The ingredient ledger.
///
/// Quantities are signed. Restocks accept any delta, and `commit_deduction`
/// trusts its caller, so stock only stays non-negative when deductions are
/// preceded by a successful `has_sufficient_stock` against the same state.
/// `try_commit` performs both steps in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    ingredients: BTreeMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` units of `ingredient`, creating the entry at 0 if needed.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn restock(&mut self, ingredient: &str, amount: i64) -> StockUpdate {
        let entry = self.ingredients.entry(ingredient.to_string()).or_insert(0);
        *entry = entry.saturating_add(amount);

        tracing::info!(ingredient, amount, quantity = *entry, "inventory restocked");

        StockUpdate {
            ingredient: ingredient.to_string(),
            quantity: *entry,
        }
    }

    /// Units on hand for `ingredient`; unknown ingredients hold 0.
    pub fn quantity(&self, ingredient: &str) -> i64 {
        self.ingredients.get(ingredient).copied().unwrap_or(0)
    }

    /// Whether every required count is covered by current stock.
    pub fn has_sufficient_stock(&self, requirements: &IngredientRequirements) -> bool {
        requirements
            .iter()
            .all(|(ingredient, required)| self.quantity(ingredient) >= i64::from(required))
    }

    /// Every ingredient whose stock falls short of its requirement.
    ///
    /// Empty exactly when `has_sufficient_stock` is true.
    pub fn shortages(&self, requirements: &IngredientRequirements) -> Vec<Shortage> {
        requirements
            .iter()
            .filter_map(|(ingredient, required)| {
                let available = self.quantity(ingredient);
                (available < i64::from(required)).then(|| Shortage {
                    ingredient: ingredient.to_string(),
                    required,
                    available,
                })
            })
            .collect()
    }

    /// Subtract every required count from stock.
    ///
    /// No bounds check: the caller must have confirmed `has_sufficient_stock`
    /// first, otherwise stock can go negative.
    pub fn commit_deduction(&mut self, requirements: &IngredientRequirements) {
        for (ingredient, required) in requirements.iter() {
            let entry = self.ingredients.entry(ingredient.to_string()).or_insert(0);
            *entry = entry.saturating_sub(i64::from(required));
        }

        tracing::info!(
            ingredients = requirements.len(),
            units = requirements.total_units(),
            "ingredients deducted"
        );
    }

    /// Check and deduct in one step. Returns `false` and leaves stock untouched
    /// when anything is short.
    pub fn try_commit(&mut self, requirements: &IngredientRequirements) -> bool {
        if !self.has_sufficient_stock(requirements) {
            tracing::debug!(units = requirements.total_units(), "commit refused: insufficient stock");
            return false;
        }
        self.commit_deduction(requirements);
        true
    }

    /// Entries in ingredient-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.ingredients.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for (ingredient, amount) in iter {
            let entry = inventory.ingredients.entry(ingredient.into()).or_insert(0);
            *entry = entry.saturating_add(amount);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reqs(names: &[&str]) -> IngredientRequirements {
        names.iter().copied().collect()
    }

    #[test]
    fn restock_creates_entry_and_reports_new_quantity() {
        let mut inventory = Inventory::new();
        let update = inventory.restock("coffee", 50);
        assert_eq!(update.quantity, 50);
        assert_eq!(
            update.to_string(),
            "Inventory updated: coffee - 50 units available"
        );

        let update = inventory.restock("coffee", 5);
        assert_eq!(update.quantity, 55);
        assert_eq!(inventory.quantity("coffee"), 55);
    }

    #[test]
    fn restock_accepts_negative_amounts() {
        let mut inventory = Inventory::new();
        inventory.restock("sugar", 3);
        let update = inventory.restock("sugar", -5);
        assert_eq!(update.quantity, -2);
    }

    #[test]
    fn restock_saturates_instead_of_overflowing() {
        let mut inventory = Inventory::new();
        inventory.restock("coffee", i64::MAX);
        let update = inventory.restock("coffee", 1);
        assert_eq!(update.quantity, i64::MAX);

        inventory.restock("sugar", i64::MIN);
        let update = inventory.restock("sugar", -1);
        assert_eq!(update.quantity, i64::MIN);
    }

    #[test]
    fn commit_deduction_saturates_at_lower_bound() {
        let mut inventory: Inventory = [("milk", i64::MIN)].into_iter().collect();
        inventory.commit_deduction(&reqs(&["milk"]));
        assert_eq!(inventory.quantity("milk"), i64::MIN);
    }

    #[test]
    fn unknown_ingredient_counts_as_zero() {
        let inventory = Inventory::new();
        assert_eq!(inventory.quantity("chocolate"), 0);
        assert!(!inventory.has_sufficient_stock(&reqs(&["chocolate"])));
    }

    #[test]
    fn empty_requirements_are_always_satisfied() {
        let inventory = Inventory::new();
        assert!(inventory.has_sufficient_stock(&IngredientRequirements::new()));
    }

    #[test]
    fn sufficient_stock_requires_every_ingredient() {
        let inventory: Inventory = [("coffee", 2), ("milk", 0)].into_iter().collect();
        assert!(inventory.has_sufficient_stock(&reqs(&["coffee", "coffee"])));
        assert!(!inventory.has_sufficient_stock(&reqs(&["coffee", "coffee", "coffee"])));
        assert!(!inventory.has_sufficient_stock(&reqs(&["coffee", "milk"])));
    }

    #[test]
    fn commit_deduction_subtracts_counts() {
        let mut inventory: Inventory = [("coffee", 10), ("milk", 4)].into_iter().collect();
        inventory.commit_deduction(&reqs(&["coffee", "milk", "coffee"]));
        assert_eq!(inventory.quantity("coffee"), 8);
        assert_eq!(inventory.quantity("milk"), 3);
    }

    #[test]
    fn commit_deduction_without_check_can_go_negative() {
        let mut inventory = Inventory::new();
        inventory.commit_deduction(&reqs(&["milk"]));
        assert_eq!(inventory.quantity("milk"), -1);
    }

    #[test]
    fn try_commit_refuses_without_touching_stock() {
        let mut inventory: Inventory = [("coffee", 1)].into_iter().collect();
        let before = inventory.clone();
        assert!(!inventory.try_commit(&reqs(&["coffee", "coffee"])));
        assert_eq!(inventory, before);

        assert!(inventory.try_commit(&reqs(&["coffee"])));
        assert_eq!(inventory.quantity("coffee"), 0);
    }

    #[test]
    fn shortages_list_each_missing_ingredient() {
        let inventory: Inventory = [("coffee", 1), ("milk", 5)].into_iter().collect();
        let short = inventory.shortages(&reqs(&["coffee", "coffee", "milk", "almond milk"]));
        assert_eq!(
            short,
            vec![
                Shortage {
                    ingredient: "almond milk".to_string(),
                    required: 1,
                    available: 0,
                },
                Shortage {
                    ingredient: "coffee".to_string(),
                    required: 2,
                    available: 1,
                },
            ]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn ingredient() -> impl Strategy<Value = String> {
            prop::sample::select(vec!["coffee", "milk", "sugar", "chocolate"])
                .prop_map(str::to_string)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: final stock is the sum of every applied delta.
            #[test]
            fn restock_accumulates_deltas(deltas in prop::collection::vec(-1_000i64..1_000, 0..50)) {
                let mut inventory = Inventory::new();
                for delta in &deltas {
                    inventory.restock("coffee", *delta);
                }
                prop_assert_eq!(inventory.quantity("coffee"), deltas.iter().sum::<i64>());
            }

            /// Property: adding stock never turns a sufficient check into an insufficient one.
            #[test]
            fn sufficiency_is_monotonic(
                stock in prop::collection::vec((ingredient(), 0i64..20), 0..8),
                wanted in prop::collection::vec(ingredient(), 0..12),
                bump_on in ingredient(),
                bump in 0i64..20,
            ) {
                let mut inventory: Inventory = stock.into_iter().collect();
                let requirements: IngredientRequirements = wanted.into_iter().collect();
                let before = inventory.has_sufficient_stock(&requirements);
                inventory.restock(&bump_on, bump);
                if before {
                    prop_assert!(inventory.has_sufficient_stock(&requirements));
                }
            }

            /// Property: shortages are empty iff stock is sufficient.
            #[test]
            fn shortages_agree_with_check(
                stock in prop::collection::vec((ingredient(), -5i64..20), 0..8),
                wanted in prop::collection::vec(ingredient(), 0..12),
            ) {
                let inventory: Inventory = stock.into_iter().collect();
                let requirements: IngredientRequirements = wanted.into_iter().collect();
                prop_assert_eq!(
                    inventory.shortages(&requirements).is_empty(),
                    inventory.has_sufficient_stock(&requirements)
                );
            }

            /// Property: try_commit never leaves a non-negative entry negative.
            #[test]
            fn try_commit_keeps_stock_non_negative(
                stock in prop::collection::vec((ingredient(), 0i64..10), 0..8),
                orders in prop::collection::vec(prop::collection::vec(ingredient(), 0..6), 0..20),
            ) {
                let mut inventory: Inventory = stock.into_iter().collect();
                for wanted in orders {
                    let requirements: IngredientRequirements = wanted.into_iter().collect();
                    inventory.try_commit(&requirements);
                    for (_, qty) in inventory.iter() {
                        prop_assert!(qty >= 0);
                    }
                }
            }
        }
    }
}
