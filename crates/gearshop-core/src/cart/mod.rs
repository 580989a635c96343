//! Shopping cart module.
//!
//! Contains the cart, its line items, and the receipt breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::{CartTotals, LineTotal};
