//! Cart receipt calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Receipt breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Grand total over all line items.
    pub subtotal: Money,
    /// Per-line-item rows, in cart order.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Check if the receipt has any rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Receipt row for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// Product the row covers.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Row total (unit_price * quantity).
    pub line_total: Money,
}
