//! Cart and line item types.
//!
//! Cart mutations are pure transforms: each one takes the current state
//! by reference and returns the next state, leaving the previous state
//! intact. The consuming UI swaps the old cart for the new one.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::error::ShopError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Product fields are denormalized for display so the cart never
/// borrows from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Display glyph.
    pub icon: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always >= 1 while the item is in a cart.
    pub quantity: i64,
}

impl CartItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            icon: product.icon.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Line subtotal (unit price times quantity).
    pub fn line_total(&self) -> Money {
        Money::new(
            self.unit_price.amount_cents.saturating_mul(self.quantity),
            self.unit_price.currency,
        )
    }
}

/// The per-session shopping cart.
///
/// Insertion order is preserved so the rendering layer gets a stable
/// display order. At most one line item exists per product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (the badge count).
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Get a line item by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == id)
    }

    /// Add one unit of a product.
    ///
    /// An existing line item has its quantity incremented; otherwise a
    /// new item with quantity 1 is appended. Always succeeds.
    #[must_use]
    pub fn add(&self, product: &Product) -> Cart {
        let mut items = self.items.clone();
        if let Some(existing) = items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            items.push(CartItem::from_product(product));
        }
        Cart { items }
    }

    /// Remove a line item. Unknown ids are a no-op.
    #[must_use]
    pub fn remove(&self, id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|i| i.product_id != id)
                .cloned()
                .collect(),
        }
    }

    /// Adjust a line item's quantity by `delta`, which may be either
    /// sign.
    ///
    /// Unknown ids are a no-op. A resulting quantity of zero or less
    /// removes the item outright rather than clamping it.
    #[must_use]
    pub fn update_quantity(&self, id: ProductId, delta: i64) -> Cart {
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.product_id != id {
                    return Some(item.clone());
                }
                let quantity = item.quantity.saturating_add(delta);
                (quantity > 0).then(|| CartItem {
                    quantity,
                    ..item.clone()
                })
            })
            .collect();
        Cart { items }
    }

    /// Total price over all line items, in minor units. Zero for an
    /// empty cart.
    pub fn total_price(&self) -> Money {
        let cents = self.items.iter().fold(0i64, |sum, item| {
            sum.saturating_add(item.line_total().amount_cents)
        });
        Money::new(cents, self.currency())
    }

    /// Receipt breakdown: one row per line item plus the grand total.
    pub fn subtotals(&self) -> Result<CartTotals, ShopError> {
        let currency = self.currency();
        let mut lines = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let line_total = item
                .unit_price
                .try_mul(item.quantity)
                .ok_or(ShopError::Overflow)?;
            if line_total.currency != currency {
                return Err(ShopError::CurrencyMismatch {
                    expected: currency,
                    got: line_total.currency,
                });
            }
            lines.push(LineTotal {
                product_id: item.product_id,
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total,
            });
        }
        let subtotal = Money::try_sum(lines.iter().map(|l| &l.line_total), currency)
            .ok_or(ShopError::Overflow)?;
        Ok(CartTotals { subtotal, lines })
    }

    /// Currency of the cart, taken from the first line item. The
    /// catalog is single-currency, so all items agree.
    fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or_default()
    }
}
