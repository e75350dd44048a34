//! Seed data for a shop session.
//!
//! Loaded from JSON; `ShopConfig::default()` is the built-in sample shop.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use cafeteria_parties::EmployeeRole;
use cafeteria_products::Product;

/// Environment variable pointing at a JSON config file.
pub const CONFIG_PATH_ENV: &str = "CAFETERIA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub ingredient: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEntry {
    pub name: String,
    pub role: EmployeeRole,
}

/// A promotion and the names of the customers eligible for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionEntry {
    pub code: String,
    pub discount_percent: i32,
    #[serde(default)]
    pub eligible_customers: Vec<String>,
}

/// Everything a shop starts with. Missing sections default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub inventory: Vec<StockEntry>,
    #[serde(default)]
    pub catalog: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<String>,
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
    #[serde(default)]
    pub promotions: Vec<PromotionEntry>,
}

impl ShopConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid shop config JSON")
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shop config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Load from the file named by `CAFETERIA_CONFIG`, or fall back to the
    /// sample shop when the variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(path = %path, "loading shop config");
                Self::from_path(path)
            }
            Err(_) => {
                tracing::warn!("{CONFIG_PATH_ENV} not set; using sample shop config");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize shop config")
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        let stock = |ingredient: &str, quantity| StockEntry {
            ingredient: ingredient.to_string(),
            quantity,
        };

        Self {
            inventory: vec![
                stock("almond milk", 10),
                stock("sugar", 20),
                stock("chocolate", 15),
                stock("milk", 30),
                stock("coffee", 50),
            ],
            catalog: vec![
                Product::beverage("Americano", 30.0, "Medium", "Hot", ["coffee"]),
                Product::beverage("Latte", 50.0, "Large", "Hot", ["coffee", "milk"]),
                Product::beverage(
                    "Almond Milk Coffee",
                    60.0,
                    "Large",
                    "Hot",
                    ["coffee", "almond milk"],
                ),
                Product::dessert("Brownie", 40.0, false, false),
                Product::dessert("Blueberry Muffin", 35.0, true, true),
            ],
            customers: vec!["Juan Pérez".to_string()],
            employees: vec![EmployeeEntry {
                name: "María Rodríguez".to_string(),
                role: EmployeeRole::Barista,
            }],
            promotions: vec![PromotionEntry {
                code: "LOYALTY20".to_string(),
                discount_percent: 20,
                eligible_customers: vec!["Juan Pérez".to_string()],
            }],
        }
    }
}
