//! The product catalog and review list.

use crate::catalog::{Category, Product, Review, ReviewSummary};
use crate::error::ShopError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Default number of entries returned by similar-product lookups.
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

/// Category selection for catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No filtering, the whole catalog.
    #[default]
    All,
    /// Only products with the given category tag.
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| ShopError::UnknownCategory(s.to_string()))
    }
}

/// The fixed set of purchasable products plus the review list.
///
/// Records are immutable once the catalog is built; queries hand out
/// references in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build a catalog, validating the static data.
    ///
    /// Product and review ids must be unique and ratings must be in
    /// 0..=5. `similar` lists may reference ids that are not present;
    /// lookups drop those silently.
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Result<Self, ShopError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(ShopError::DuplicateProductId(product.id));
            }
            if product.rating > 5 {
                return Err(ShopError::InvalidRating {
                    id: product.id,
                    rating: product.rating,
                });
            }
        }

        let mut seen = HashSet::new();
        for review in &reviews {
            if !seen.insert(review.id) {
                return Err(ShopError::DuplicateReviewId(review.id));
            }
            if review.rating > 5 {
                return Err(ShopError::InvalidReviewRating {
                    id: review.id,
                    rating: review.rating,
                });
            }
        }

        Ok(Self { products, reviews })
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching a category filter, in catalog order.
    ///
    /// `CategoryFilter::All` returns the full catalog unfiltered.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        match filter {
            CategoryFilter::All => self.products.iter().collect(),
            CategoryFilter::Only(category) => self
                .products
                .iter()
                .filter(|p| p.category == category)
                .collect(),
        }
    }

    /// Resolve a product's curated similar list.
    ///
    /// Each id in the list is resolved in listed order; ids missing from
    /// the catalog are dropped and the result is truncated to `limit`
    /// entries. An unknown product id or an empty similar list yields an
    /// empty result. Stale references in static data are expected, so
    /// this never fails.
    pub fn similar_products(&self, id: ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product(id) else {
            return Vec::new();
        };
        product
            .similar
            .iter()
            .filter_map(|similar_id| self.product(*similar_id))
            .take(limit)
            .collect()
    }

    /// Products flagged as popular, in catalog order.
    pub fn popular_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.popular).collect()
    }

    /// All reviews, in listed order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Aggregate rating over the review list.
    pub fn review_summary(&self) -> ReviewSummary {
        let total = self.reviews.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            self.reviews.iter().map(|r| f32::from(r.rating)).sum::<f32>() / total as f32
        };
        ReviewSummary {
            total,
            average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ReviewId;
    use crate::money::{Currency, Money};

    fn product(id: u32, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            icon: "\u{1f3ae}".to_string(),
            price: Money::new(1000, Currency::USD),
            category,
            rating: 4,
            popular: false,
            similar: Vec::new(),
        }
    }

    fn review(id: u32, rating: u8) -> Review {
        Review {
            id: ReviewId::new(id),
            author: format!("Reviewer {id}"),
            rating,
            text: "Great gear".to_string(),
            posted: "1 week ago".to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut one = product(1, Category::Weapons);
        one.similar = vec![ProductId::new(2), ProductId::new(3)];
        one.popular = true;
        let two = product(2, Category::Armor);
        let mut three = product(3, Category::Weapons);
        three.popular = true;
        let mut four = product(4, Category::Armor);
        // References a product that was never added.
        four.similar = vec![ProductId::new(99), ProductId::new(1)];

        Catalog::new(
            vec![one, two, three, four],
            vec![review(1, 5), review(2, 4)],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let result = Catalog::new(
            vec![product(1, Category::Weapons), product(1, Category::Armor)],
            Vec::new(),
        );
        assert_eq!(
            result.unwrap_err(),
            ShopError::DuplicateProductId(ProductId::new(1))
        );
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let mut bad = product(1, Category::Weapons);
        bad.rating = 6;
        let result = Catalog::new(vec![bad], Vec::new());
        assert!(matches!(
            result.unwrap_err(),
            ShopError::InvalidRating { rating: 6, .. }
        ));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = sample_catalog();
        let weapons = catalog.filter(CategoryFilter::Only(Category::Weapons));
        let ids: Vec<u32> = weapons.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(weapons.iter().all(|p| p.category == Category::Weapons));
    }

    #[test]
    fn test_filter_all_returns_full_catalog() {
        let catalog = sample_catalog();
        let all = catalog.filter(CategoryFilter::All);
        let ids: Vec<u32> = all.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_similar_products_listed_order() {
        let catalog = sample_catalog();
        let similar = catalog.similar_products(ProductId::new(1), DEFAULT_SIMILAR_LIMIT);
        let ids: Vec<u32> = similar.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_similar_products_drops_dangling_ids() {
        let catalog = sample_catalog();
        let similar = catalog.similar_products(ProductId::new(4), DEFAULT_SIMILAR_LIMIT);
        let ids: Vec<u32> = similar.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_similar_products_unknown_id() {
        let catalog = sample_catalog();
        assert!(catalog
            .similar_products(ProductId::new(999), DEFAULT_SIMILAR_LIMIT)
            .is_empty());
    }

    #[test]
    fn test_similar_products_respects_limit() {
        let catalog = sample_catalog();
        let similar = catalog.similar_products(ProductId::new(1), 1);
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, ProductId::new(2));
    }

    #[test]
    fn test_popular_products() {
        let catalog = sample_catalog();
        let ids: Vec<u32> = catalog.popular_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_review_summary() {
        let catalog = sample_catalog();
        let summary = catalog.review_summary();
        assert_eq!(summary.total, 2);
        assert!((summary.average_rating - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_review_summary_empty() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).unwrap();
        let summary = catalog.review_summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_rating, 0.0);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "weapons".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Weapons)
        );
        assert_eq!(
            "Armor".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Armor)
        );
        assert!(matches!(
            "potions".parse::<CategoryFilter>(),
            Err(ShopError::UnknownCategory(_))
        ));
    }
}
