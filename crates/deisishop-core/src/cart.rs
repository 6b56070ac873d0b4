//! The in-memory cart store.
//!
//! The cart only exists for the lifetime of the session: it is created
//! empty, mutated by `add`/`remove`, and cleared after a successful
//! checkout. Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// A single cart line: a product snapshot plus a quantity.
///
/// Title, price and image are copied from the [`Product`] at add time and
/// never re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

/// Ordered collection of [`CartItem`]s, unique by product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product` to the cart.
    ///
    /// If an item with the same id already exists its quantity is
    /// incremented; otherwise a new line is appended with quantity 1. There
    /// is no upper bound on quantity.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                id: product.id,
                title: product.title.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: 1,
            });
        }
    }

    /// Removes the line matching `id`. Ids are unique, so at most one line
    /// goes away; removing an unknown id is a no-op.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|item| item.id != id);
    }

    /// Sum of `price × quantity` over all lines. Always recomputed from the
    /// items rather than maintained incrementally, so it cannot drift.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    /// Empties the cart. Called after a successful checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Flattens the cart into the checkout payload shape: each product id
    /// repeated `quantity` times, in cart order.
    #[must_use]
    pub fn order_product_ids(&self) -> Vec<i64> {
        self.items
            .iter()
            .flat_map(|item| std::iter::repeat_n(item.id, item.quantity as usize))
            .collect()
    }
}
