//! Storefront domain types and state management for GearShop.
//!
//! This crate is the state-management core behind a single-page
//! storefront UI:
//!
//! - **Catalog**: immutable products and reviews, category filtering,
//!   similar-product and popular-product queries
//! - **Cart**: pure add/remove/update-quantity transforms with exact
//!   integer totals
//! - **View**: active section and category-tab selection state
//! - **Session**: the single state object a rendering layer drives
//!
//! # Example
//!
//! ```
//! use gearshop_core::prelude::*;
//!
//! let mut session = Session::new(demo_catalog());
//!
//! session.set_category(CategoryFilter::Only(Category::Weapons));
//! assert!(session
//!     .visible_products()
//!     .iter()
//!     .all(|p| p.category == Category::Weapons));
//!
//! session.add_to_cart(ProductId::new(1));
//! session.add_to_cart(ProductId::new(1));
//! assert_eq!(session.badge_count(), 1);
//! assert_eq!(session.total_price().amount_cents, 5998);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod data;
pub mod session;
pub mod view;

pub use error::ShopError;
pub use ids::{ProductId, ReviewId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShopError;
    pub use crate::ids::{ProductId, ReviewId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, CategoryFilter, Product, Review, ReviewSummary, DEFAULT_SIMILAR_LIMIT,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals, LineTotal};

    // View and session
    pub use crate::data::demo_catalog;
    pub use crate::session::Session;
    pub use crate::view::{Section, ViewState};
}
