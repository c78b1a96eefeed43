//! Queries against the parks feature service.

pub mod soql;
pub mod source;

pub use soql::SoqlParams;
pub use source::{FeatureSource, HttpFeatureSource};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Region attributes a user can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoricalField {
    ElectoralWard,
    District,
    Neighbourhood,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 3] = [
        CategoricalField::ElectoralWard,
        CategoricalField::District,
        CategoricalField::Neighbourhood,
    ];

    /// Dataset column holding this attribute
    pub fn column(self) -> &'static str {
        match self {
            CategoricalField::ElectoralWard => "electoral_ward",
            CategoricalField::District => "district",
            CategoricalField::Neighbourhood => "neighbourhood",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.column() == column)
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoricalField::ElectoralWard => write!(f, "electoral ward"),
            CategoricalField::District => write!(f, "district"),
            CategoricalField::Neighbourhood => write!(f, "neighbourhood"),
        }
    }
}

/// A read query against the feature service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every park, up to the unfiltered cap
    All,
    /// Exact, case-sensitive match on one region attribute
    AttributeEquals {
        field: CategoricalField,
        value: String,
    },
    /// Case-insensitive substring match on the park name, ordered by name
    NameContains(String),
}

/// Result caps applied per query kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub unfiltered: u32,
    pub search: u32,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            unfiltered: crate::constants::UNFILTERED_LIMIT,
            search: crate::constants::SEARCH_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_round_trip() {
        for field in CategoricalField::ALL {
            assert_eq!(CategoricalField::from_column(field.column()), Some(field));
        }
        assert_eq!(CategoricalField::from_column("park_name"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CategoricalField::ElectoralWard.to_string(), "electoral ward");
    }
}
