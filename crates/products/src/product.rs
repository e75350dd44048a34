use serde::{Deserialize, Serialize};

use cafeteria_core::ValueObject;

/// What kind of product this is, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Beverage {
        size: String,
        style: String,
        /// One unit of each listed ingredient is consumed per occurrence.
        required_ingredients: Vec<String>,
    },
    Dessert {
        vegan: bool,
        gluten_free: bool,
    },
}

/// A purchasable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    pub fn beverage<I, S>(
        name: impl Into<String>,
        price: f64,
        size: impl Into<String>,
        style: impl Into<String>,
        required_ingredients: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Beverage {
                size: size.into(),
                style: style.into(),
                required_ingredients: required_ingredients.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn dessert(name: impl Into<String>, price: f64, vegan: bool, gluten_free: bool) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Dessert { vegan, gluten_free },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn is_beverage(&self) -> bool {
        matches!(self.kind, ProductKind::Beverage { .. })
    }

    /// Ingredients consumed by one unit of this product. Desserts consume none.
    pub fn required_ingredients(&self) -> &[String] {
        match &self.kind {
            ProductKind::Beverage {
                required_ingredients,
                ..
            } => required_ingredients,
            ProductKind::Dessert { .. } => &[],
        }
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ProductKind::Beverage { size, style, .. } => {
                write!(f, "{} - ${} ({}, {})", self.name, self.price, size, style)
            }
            ProductKind::Dessert { .. } => write!(f, "{} - ${}", self.name, self.price),
        }
    }
}
