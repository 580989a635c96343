//! Review types for the static review list.

use crate::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Display name of the reviewer.
    pub author: String,
    /// Star rating, 0..=5.
    pub rating: u8,
    /// Review body.
    pub text: String,
    /// Relative date label, e.g. "2 days ago".
    pub posted: String,
}

impl Review {
    /// Render the star rating as a glyph string.
    pub fn render_stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
    }
}

/// Aggregate over the review list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    /// Number of reviews.
    pub total: usize,
    /// Mean rating across reviews; 0.0 when the list is empty.
    pub average_rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stars() {
        let review = Review {
            id: ReviewId::new(1),
            author: "ProGamer2077".to_string(),
            rating: 5,
            text: "Incredible quality!".to_string(),
            posted: "2 days ago".to_string(),
        };
        assert_eq!(
            review.render_stars(),
            "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}"
        );
    }
}
