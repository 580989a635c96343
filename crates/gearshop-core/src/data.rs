//! Built-in demo dataset.
//!
//! The storefront renders from a compiled-in catalog; nothing is loaded
//! at runtime. Product 1's similar list cross-references 2 and 3, and
//! so on, mirroring the curated "you may also like" relationships.

use crate::catalog::{Catalog, Category, Product, Review};
use crate::ids::{ProductId, ReviewId};
use crate::money::{Currency, Money};

/// Build the demo catalog: six products and three reviews.
pub fn demo_catalog() -> Catalog {
    let products = vec![
        Product {
            id: ProductId::new(1),
            name: "Cosmic Blaster".to_string(),
            icon: "\u{1f52b}".to_string(),
            price: Money::new(2999, Currency::USD),
            category: Category::Weapons,
            rating: 5,
            popular: true,
            similar: vec![ProductId::new(2), ProductId::new(3)],
        },
        Product {
            id: ProductId::new(2),
            name: "Neon Armor Pro".to_string(),
            icon: "\u{1f6e1}\u{fe0f}".to_string(),
            price: Money::new(4499, Currency::USD),
            category: Category::Armor,
            rating: 5,
            popular: true,
            similar: vec![ProductId::new(1), ProductId::new(4)],
        },
        Product {
            id: ProductId::new(3),
            name: "Cyber Sword X".to_string(),
            icon: "\u{2694}\u{fe0f}".to_string(),
            price: Money::new(3499, Currency::USD),
            category: Category::Weapons,
            rating: 4,
            popular: false,
            similar: vec![ProductId::new(1), ProductId::new(5)],
        },
        Product {
            id: ProductId::new(4),
            name: "Power Helmet".to_string(),
            icon: "\u{1fa96}".to_string(),
            price: Money::new(1999, Currency::USD),
            category: Category::Armor,
            rating: 4,
            popular: true,
            similar: vec![ProductId::new(2), ProductId::new(6)],
        },
        Product {
            id: ProductId::new(5),
            name: "Plasma Rifle".to_string(),
            icon: "\u{1f52b}".to_string(),
            price: Money::new(3999, Currency::USD),
            category: Category::Weapons,
            rating: 5,
            popular: false,
            similar: vec![ProductId::new(1), ProductId::new(3)],
        },
        Product {
            id: ProductId::new(6),
            name: "Shield Gen".to_string(),
            icon: "\u{1f6e1}\u{fe0f}".to_string(),
            price: Money::new(2499, Currency::USD),
            category: Category::Armor,
            rating: 4,
            popular: false,
            similar: vec![ProductId::new(2), ProductId::new(4)],
        },
    ];

    let reviews = vec![
        Review {
            id: ReviewId::new(1),
            author: "ProGamer2077".to_string(),
            rating: 5,
            text: "Incredible quality! The Cosmic Blaster is an absolute beast!".to_string(),
            posted: "2 days ago".to_string(),
        },
        Review {
            id: ReviewId::new(2),
            author: "CyberNinja".to_string(),
            rating: 5,
            text: "The Neon Armor saved me in a raid, recommended to everyone!".to_string(),
            posted: "5 days ago".to_string(),
        },
        Review {
            id: ReviewId::new(3),
            author: "PixelWarrior".to_string(),
            rating: 4,
            text: "Great shop, fast delivery".to_string(),
            posted: "1 week ago".to_string(),
        },
    ];

    Catalog::new(products, reviews).expect("demo dataset is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryFilter, DEFAULT_SIMILAR_LIMIT};

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.reviews().len(), 3);
    }

    #[test]
    fn test_demo_catalog_popular_picks() {
        let catalog = demo_catalog();
        let ids: Vec<u32> = catalog
            .popular_products()
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_demo_catalog_categories() {
        let catalog = demo_catalog();
        assert_eq!(
            catalog
                .filter(CategoryFilter::Only(Category::Weapons))
                .len(),
            3
        );
        assert_eq!(catalog.filter(CategoryFilter::Only(Category::Armor)).len(), 3);
    }

    #[test]
    fn test_demo_catalog_similar_lists_resolve() {
        let catalog = demo_catalog();
        for product in catalog.products() {
            // Every curated reference in the demo data is resolvable.
            assert_eq!(
                catalog
                    .similar_products(product.id, DEFAULT_SIMILAR_LIMIT)
                    .len(),
                product.similar.len()
            );
        }
    }
}
