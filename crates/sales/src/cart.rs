use cafeteria_products::Product;

use crate::order::Order;

/// Caller-held list of products picked before an order exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Remove the item at `position`, returning it if there was one.
    pub fn remove(&mut self, position: usize) -> Option<Product> {
        (position < self.items.len()).then(|| self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total of the cart contents.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::price).sum()
    }

    /// Snapshot the current contents into a new pending order.
    ///
    /// Later edits to the cart do not affect the order.
    pub fn to_order(&self) -> Order {
        Order::new(self.items.clone())
    }
}

impl FromIterator<Product> for Cart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
