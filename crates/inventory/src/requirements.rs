use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cafeteria_core::ValueObject;

/// Ingredient name → number of units required.
///
/// Built by counting occurrences: asking for `["coffee", "milk", "coffee"]`
/// yields `{coffee: 2, milk: 1}`. Iteration is ordered by ingredient name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientRequirements(BTreeMap<String, u32>);

impl IngredientRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `count` more units of `ingredient`.
    pub fn add(&mut self, ingredient: impl Into<String>, count: u32) {
        *self.0.entry(ingredient.into()).or_insert(0) += count;
    }

    /// Require one more unit of `ingredient`.
    pub fn add_one(&mut self, ingredient: impl Into<String>) {
        self.add(ingredient, 1);
    }

    /// Required count for `ingredient` (0 if not required at all).
    pub fn get(&self, ingredient: &str) -> u32 {
        self.0.get(ingredient).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total units across all ingredients.
    pub fn total_units(&self) -> u64 {
        self.0.values().map(|c| u64::from(*c)).sum()
    }
}

impl ValueObject for IngredientRequirements {}

impl<S: Into<String>> FromIterator<S> for IngredientRequirements {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut reqs = Self::new();
        for ingredient in iter {
            reqs.add_one(ingredient);
        }
        reqs
    }
}

impl<S: Into<String>> Extend<S> for IngredientRequirements {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for ingredient in iter {
            self.add_one(ingredient);
        }
    }
}
