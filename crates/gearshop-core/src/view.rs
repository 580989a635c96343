//! UI selection state.
//!
//! The rendering layer owns which page section and category tab are
//! active. Transitions are plain assignment over closed enums; there is
//! nothing to validate and no side effects.

use crate::catalog::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Top-level sections of the storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Reviews,
    Contacts,
}

impl Section {
    /// All sections, in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Catalog,
        Section::Reviews,
        Section::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::Reviews => "reviews",
            Section::Contacts => "contacts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Catalog => "Catalog",
            Section::Reviews => "Reviews",
            Section::Contacts => "Contacts",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(Section::Home),
            "catalog" => Some(Section::Catalog),
            "reviews" => Some(Section::Reviews),
            "contacts" => Some(Section::Contacts),
            _ => None,
        }
    }
}

/// Active selections for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewState {
    /// Active top-level section.
    pub section: Section,
    /// Active category tab in the catalog section.
    pub category: CategoryFilter,
}

impl ViewState {
    /// Initial state: home section, no category filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the active section.
    #[must_use]
    pub fn with_section(self, section: Section) -> Self {
        Self { section, ..self }
    }

    /// Switch the active category tab.
    #[must_use]
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }
}
