//! Region filters: option lists derived from the loaded parks, and the
//! queries a filter selection turns into.

use crate::{
    data::park::ParkFeature,
    query::{CategoricalField, Query},
    traits::ParkView,
    ParkMapError, Result,
};
use serde::Serialize;
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Which filter the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    All,
    Field(CategoricalField),
}

impl FilterKind {
    pub fn field(self) -> Option<CategoricalField> {
        match self {
            FilterKind::All => None,
            FilterKind::Field(field) => Some(field),
        }
    }
}

impl FromStr for FilterKind {
    type Err = ParkMapError;

    /// Accepts the radio values `all`, `electoral_ward`, `district` and `neighbourhood`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "all" {
            return Ok(FilterKind::All);
        }
        CategoricalField::from_column(s)
            .map(FilterKind::Field)
            .ok_or_else(|| ParkMapError::UnknownFilterKind(s.to_string()))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::All => write!(f, "all"),
            FilterKind::Field(field) => write!(f, "{}", field.column()),
        }
    }
}

/// One entry of a filter select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Case-normalized text shown to the user
    pub label: String,
    /// Raw dataset value sent back in the query
    pub value: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: title_case(&value),
            value,
        }
    }
}

/// First character upper case, the rest lower case
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptionLists {
    pub electoral_wards: Vec<FilterOption>,
    pub districts: Vec<FilterOption>,
    pub neighbourhoods: Vec<FilterOption>,
}

impl FilterOptionLists {
    pub fn get(&self, field: CategoricalField) -> &[FilterOption] {
        match field {
            CategoricalField::ElectoralWard => &self.electoral_wards,
            CategoricalField::District => &self.districts,
            CategoricalField::Neighbourhood => &self.neighbourhoods,
        }
    }

    fn get_mut(&mut self, field: CategoricalField) -> &mut Vec<FilterOption> {
        match field {
            CategoricalField::ElectoralWard => &mut self.electoral_wards,
            CategoricalField::District => &mut self.districts,
            CategoricalField::Neighbourhood => &mut self.neighbourhoods,
        }
    }
}

/// Distinct values of each region attribute, sorted, absent values skipped.
///
/// Values are compared exactly, so `"RIVER HEIGHTS"` and `"river heights"`
/// become two options.
pub fn build_option_lists(parks: &[ParkFeature]) -> FilterOptionLists {
    let mut lists = FilterOptionLists::default();
    for field in CategoricalField::ALL {
        let distinct: BTreeSet<&str> = parks
            .iter()
            .filter_map(|park| park.categorical(field))
            .collect();
        *lists.get_mut(field) = distinct.into_iter().map(FilterOption::new).collect();
    }
    lists
}

/// Query for a filter selection.
///
/// `All` ignores `value`. Any other kind needs a non-blank value, otherwise
/// this fails with [`ParkMapError::MissingFilterValue`].
pub fn build_filter_query(kind: FilterKind, value: Option<&str>) -> Result<Query> {
    match kind {
        FilterKind::All => Ok(Query::All),
        FilterKind::Field(field) => match value {
            Some(value) if !value.trim().is_empty() => Ok(Query::AttributeEquals {
                field,
                value: value.to_string(),
            }),
            _ => Err(ParkMapError::MissingFilterValue(field)),
        },
    }
}

/// Holds the current option lists and publishes them to the page
#[derive(Debug, Default)]
pub struct FilterController {
    options: FilterOptionLists,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &FilterOptionLists {
        &self.options
    }

    /// Rebuilds the option lists from `parks` and pushes all three to `view`
    pub fn load_options<V: ParkView + ?Sized>(&mut self, parks: &[ParkFeature], view: &mut V) {
        self.options = build_option_lists(parks);
        for field in CategoricalField::ALL {
            view.set_filter_options(field, self.options.get(field));
        }
        log::info!(
            "filter options: {} wards, {} districts, {} neighbourhoods",
            self.options.electoral_wards.len(),
            self.options.districts.len(),
            self.options.neighbourhoods.len()
        );
    }

    /// Parses the raw radio value and builds its query
    pub fn query_for(&self, kind: &str, value: Option<&str>) -> Result<Query> {
        build_filter_query(kind.parse()?, value)
    }
}
