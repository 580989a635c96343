//! Product types for the static catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product category tags.
///
/// The catalog uses a closed set of tags, so the type is an enum rather
/// than a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weapons,
    Armor,
}

impl Category {
    /// All category tags, in tab order.
    pub const ALL: [Category; 2] = [Category::Weapons, Category::Armor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weapons => "weapons",
            Category::Armor => "armor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Weapons => "Weapons",
            Category::Armor => "Armor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weapons" => Some(Category::Weapons),
            "armor" => Some(Category::Armor),
            _ => None,
        }
    }
}

/// A product in the catalog.
///
/// Records are fixed at process start; the cart denormalizes what it
/// needs for display rather than borrowing from here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display glyph shown by the rendering layer.
    pub icon: String,
    /// Unit price.
    pub price: Money,
    /// Category tag.
    pub category: Category,
    /// Star rating, 0..=5.
    pub rating: u8,
    /// Featured on the landing view.
    pub popular: bool,
    /// Curated "you may also like" cross-references, in display order.
    /// May contain ids not present in the catalog; lookups drop those.
    pub similar: Vec<ProductId>,
}

impl Product {
    /// Render the star rating as a glyph string.
    pub fn render_stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
    }
}
