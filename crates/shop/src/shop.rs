//! The shop session: explicitly constructed state plus the operations a
//! front end drives.

use cafeteria_core::{CustomerId, DomainError, DomainResult, EmployeeId};
use cafeteria_inventory::{Inventory, StockUpdate};
use cafeteria_parties::{Customer, Employee, EmployeeRole, SubmitOutcome};
use cafeteria_products::{Catalog, Product};
use cafeteria_promotions::PromotionRule;
use cafeteria_sales::{Cart, Order};

use crate::config::ShopConfig;

/// Result of pricing a cart under a promotion code.
#[derive(Debug, Clone, PartialEq)]
pub enum PromotionQuote {
    Discounted {
        code: String,
        percent: i32,
        original: f64,
        discounted: f64,
    },
    /// The code exists but the customer is not on its allow-list.
    NotEligible { code: String, total: f64 },
}

impl PromotionQuote {
    /// The amount the customer would pay.
    pub fn payable(&self) -> f64 {
        match self {
            PromotionQuote::Discounted { discounted, .. } => *discounted,
            PromotionQuote::NotEligible { total, .. } => *total,
        }
    }
}

/// One running coffee shop.
///
/// Nothing here is global: whoever drives customer sessions builds a
/// `CoffeeShop` and passes it around by reference.
#[derive(Debug, Clone, Default)]
pub struct CoffeeShop {
    inventory: Inventory,
    catalog: Catalog,
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    promotions: Vec<PromotionRule>,
}

fn ensure_sellable(product: &Product) -> DomainResult<()> {
    if product.name().trim().is_empty() {
        return Err(DomainError::validation("product name cannot be empty"));
    }
    let price = product.price();
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation(format!(
            "product {} has invalid price {price}",
            product.name()
        )));
    }
    Ok(())
}

impl CoffeeShop {
    pub fn new(inventory: Inventory, catalog: Catalog) -> Self {
        Self {
            inventory,
            catalog,
            ..Self::default()
        }
    }

    /// Build a shop from seed data.
    ///
    /// Promotion eligibility refers to customers by name; the first customer
    /// with that name is enrolled.
    pub fn from_config(config: &ShopConfig) -> DomainResult<Self> {
        let mut shop = Self::default();

        for entry in &config.inventory {
            if entry.ingredient.trim().is_empty() {
                return Err(DomainError::validation("ingredient cannot be empty"));
            }
            shop.restock(&entry.ingredient, entry.quantity);
        }
        for product in &config.catalog {
            ensure_sellable(product)?;
        }
        shop.catalog = config.catalog.iter().cloned().collect();

        for name in &config.customers {
            shop.register_customer(name)?;
        }
        for entry in &config.employees {
            shop.hire_employee(&entry.name, entry.role)?;
        }
        for entry in &config.promotions {
            shop.add_promotion_rule(PromotionRule::validated(
                &entry.code,
                entry.discount_percent,
            )?)?;
            for name in &entry.eligible_customers {
                let customer_id = shop
                    .customer_by_name(name)
                    .map(Customer::id_typed)
                    .ok_or_else(|| {
                        DomainError::validation(format!(
                            "promotion {} names unknown customer {name}",
                            entry.code
                        ))
                    })?;
                shop.enroll(&entry.code, customer_id)?;
            }
        }

        tracing::info!(
            ingredients = shop.inventory.len(),
            products = shop.catalog.len(),
            customers = shop.customers.len(),
            employees = shop.employees.len(),
            promotions = shop.promotions.len(),
            "shop initialized"
        );

        Ok(shop)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn promotions(&self) -> &[PromotionRule] {
        &self.promotions
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id_typed() == id)
    }

    pub fn customer_by_name(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name() == name)
    }

    pub fn promotion(&self, code: &str) -> Option<&PromotionRule> {
        self.promotions.iter().find(|p| p.code() == code)
    }

    pub fn register_customer(&mut self, name: &str) -> DomainResult<CustomerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        let customer = Customer::new(name);
        let id = customer.id_typed();
        self.customers.push(customer);

        tracing::info!(customer_id = %id, name, "customer registered");
        Ok(id)
    }

    pub fn hire_employee(&mut self, name: &str, role: EmployeeRole) -> DomainResult<EmployeeId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("employee name cannot be empty"));
        }
        let employee = Employee::new(name, role);
        let id = employee.id_typed();
        self.employees.push(employee);

        tracing::info!(employee_id = %id, name, role = %role, "employee hired");
        Ok(id)
    }

    pub fn restock(&mut self, ingredient: &str, amount: i64) -> StockUpdate {
        self.inventory.restock(ingredient, amount)
    }

    /// Restock from raw form input: a non-blank ingredient and an integer amount.
    pub fn restock_from_input(&mut self, ingredient: &str, raw_amount: &str) -> DomainResult<StockUpdate> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(DomainError::validation("ingredient cannot be empty"));
        }
        let amount: i64 = raw_amount.trim().parse().map_err(|_| {
            DomainError::validation(format!("quantity must be an integer, got {raw_amount:?}"))
        })?;
        Ok(self.restock(ingredient, amount))
    }

    /// Register a new promotion from raw form input. Starts with no eligible customers.
    pub fn add_promotion(&mut self, code: &str, raw_percent: &str) -> DomainResult<()> {
        let percent: i32 = raw_percent.trim().parse().map_err(|_| {
            DomainError::validation(format!(
                "discount must be an integer between 1 and 100, got {raw_percent:?}"
            ))
        })?;
        self.add_promotion_rule(PromotionRule::validated(code.trim(), percent)?)
    }

    /// Register an already-built promotion. Codes must be unique.
    pub fn add_promotion_rule(&mut self, rule: PromotionRule) -> DomainResult<()> {
        if self.promotion(rule.code()).is_some() {
            return Err(DomainError::conflict(format!(
                "promotion code {} already exists",
                rule.code()
            )));
        }
        tracing::info!(code = rule.code(), percent = rule.discount_percent(), "promotion added");
        self.promotions.push(rule);
        Ok(())
    }

    pub fn enroll(&mut self, code: &str, customer_id: CustomerId) -> DomainResult<()> {
        if self.customer(customer_id).is_none() {
            return Err(DomainError::not_found(format!("customer {customer_id}")));
        }
        let rule = self
            .promotions
            .iter_mut()
            .find(|p| p.code() == code)
            .ok_or_else(|| DomainError::not_found(format!("promotion {code}")))?;
        rule.enroll(customer_id);
        Ok(())
    }

    /// Turn the cart into an order and submit it on the customer's behalf.
    ///
    /// The cart is emptied only when the order is placed; a rejected order
    /// leaves it as it was so the caller can adjust and retry.
    pub fn place_order(&mut self, customer_id: CustomerId, cart: &mut Cart) -> DomainResult<SubmitOutcome> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id_typed() == customer_id)
            .ok_or_else(|| DomainError::not_found(format!("customer {customer_id}")))?;
        if cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }

        let outcome = customer.submit_order(cart.to_order(), &mut self.inventory);
        if outcome.is_success() {
            cart.clear();
        }
        Ok(outcome)
    }

    /// Price `cart` for `customer_id` under promotion `code`.
    ///
    /// Nothing is stored; the quote is for display only.
    pub fn quote_promotion(
        &self,
        customer_id: CustomerId,
        code: &str,
        cart: &Cart,
    ) -> DomainResult<PromotionQuote> {
        let customer = self
            .customer(customer_id)
            .ok_or_else(|| DomainError::not_found(format!("customer {customer_id}")))?;
        if cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }
        let rule = self
            .promotion(code)
            .ok_or_else(|| DomainError::validation(format!("invalid promotion code: {code}")))?;

        let total = cart.total();
        if !rule.is_eligible(&customer_id) {
            return Ok(PromotionQuote::NotEligible {
                code: rule.code().to_string(),
                total,
            });
        }

        Ok(PromotionQuote::Discounted {
            code: rule.code().to_string(),
            percent: rule.discount_percent(),
            original: total,
            discounted: rule.apply(customer, total),
        })
    }

    /// One line per promotion naming its eligible customers, in registration order.
    pub fn promotion_listing(&self) -> Vec<String> {
        self.promotions
            .iter()
            .map(|rule| {
                let names: Vec<&str> = self
                    .customers
                    .iter()
                    .filter(|c| rule.is_eligible(&c.id_typed()))
                    .map(Customer::name)
                    .collect();
                format!(
                    "{}: {}% - Customers: {}",
                    rule.code(),
                    rule.discount_percent(),
                    names.join(", ")
                )
            })
            .collect()
    }

    pub fn order_history(&self, customer_id: CustomerId) -> DomainResult<&[Order]> {
        self.customer(customer_id)
            .map(Customer::history)
            .ok_or_else(|| DomainError::not_found(format!("customer {customer_id}")))
    }
}
