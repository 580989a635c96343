//! The per-session storefront state.
//!
//! `Session` is the single state object the rendering layer holds: the
//! immutable catalog, the cart, and the active view selections. UI
//! events call the mutation methods; the read methods hand out the
//! derived views the page displays. Everything is synchronous and
//! applied strictly in call order; there is one session per instance.

use crate::cart::Cart;
use crate::catalog::{
    Catalog, CategoryFilter, Product, Review, ReviewSummary, DEFAULT_SIMILAR_LIMIT,
};
use crate::ids::ProductId;
use crate::money::Money;
use crate::view::{Section, ViewState};
use tracing::debug;

/// A storefront session: catalog, cart, and view selections.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    view: ViewState,
}

impl Session {
    /// Start a session over a catalog with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            view: ViewState::new(),
        }
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Ids not in the catalog leave the cart unchanged.
    pub fn add_to_cart(&mut self, id: ProductId) {
        let Some(product) = self.catalog.product(id) else {
            debug!(product_id = %id, "add_to_cart ignored: unknown product");
            return;
        };
        self.cart = self.cart.add(product);
        debug!(
            product_id = %id,
            items = self.cart.unique_item_count(),
            "added to cart"
        );
    }

    /// Remove a line item from the cart. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart = self.cart.remove(id);
        debug!(product_id = %id, items = self.cart.unique_item_count(), "removed from cart");
    }

    /// Adjust a line item's quantity by `delta`; non-positive results
    /// remove the item. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) {
        self.cart = self.cart.update_quantity(id, delta);
        debug!(product_id = %id, delta, "cart quantity updated");
    }

    /// Switch the active page section.
    pub fn set_section(&mut self, section: Section) {
        self.view = self.view.with_section(section);
        debug!(section = section.as_str(), "section changed");
    }

    /// Switch the active category tab.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.view = self.view.with_category(category);
        debug!(category = category.as_str(), "category filter changed");
    }

    /// The catalog this session renders from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current cart contents, in insertion order.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current view selections.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Cart total in minor units.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Distinct line items in the cart, shown on the cart badge.
    pub fn badge_count(&self) -> usize {
        self.cart.unique_item_count()
    }

    /// Products under the active category filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(self.view.category)
    }

    /// Resolve a product's similar list to at most the default limit.
    pub fn similar_products(&self, id: ProductId) -> Vec<&Product> {
        self.catalog.similar_products(id, DEFAULT_SIMILAR_LIMIT)
    }

    /// Products flagged as popular, for the landing view.
    pub fn popular_products(&self) -> Vec<&Product> {
        self.catalog.popular_products()
    }

    /// The static review list.
    pub fn reviews(&self) -> &[Review] {
        self.catalog.reviews()
    }

    /// Aggregate rating over the review list.
    pub fn review_summary(&self) -> ReviewSummary {
        self.catalog.review_summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_catalog;

    #[test]
    fn test_add_and_badge_count() {
        let mut session = Session::new(demo_catalog());
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(2));

        assert_eq!(session.badge_count(), 2);
        assert_eq!(session.cart().get(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut session = Session::new(demo_catalog());
        session.add_to_cart(ProductId::new(999));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_update_quantity_delegates_removal() {
        let mut session = Session::new(demo_catalog());
        session.add_to_cart(ProductId::new(1));
        session.update_quantity(ProductId::new(1), -1);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_visible_products_follow_category() {
        let mut session = Session::new(demo_catalog());
        assert_eq!(session.visible_products().len(), 6);

        session.set_category(CategoryFilter::Only(crate::catalog::Category::Armor));
        let armor = session.visible_products();
        assert_eq!(armor.len(), 3);
        assert!(armor
            .iter()
            .all(|p| p.category == crate::catalog::Category::Armor));
    }

    #[test]
    fn test_set_section() {
        let mut session = Session::new(demo_catalog());
        assert_eq!(session.view().section, Section::Home);
        session.set_section(Section::Reviews);
        assert_eq!(session.view().section, Section::Reviews);
    }

    #[test]
    fn test_total_price_tracks_cart() {
        let mut session = Session::new(demo_catalog());
        session.add_to_cart(ProductId::new(1)); // 2999
        session.add_to_cart(ProductId::new(2)); // 4499
        session.add_to_cart(ProductId::new(2));
        assert_eq!(session.total_price().amount_cents, 2999 + 4499 * 2);
    }
}
