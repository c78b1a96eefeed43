//! SoQL parameter building.
//!
//! User text only ever reaches the service inside a quoted SoQL literal
//! produced by [`quote_literal`], and the finished parameters are
//! percent-encoded by [`Url::query_pairs_mut`].

use super::{Query, QueryLimits};
use reqwest::Url;

/// Column searched by name queries
pub const NAME_COLUMN: &str = "park_name";

/// Wraps `value` in single quotes, doubling any quote inside it.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// `$limit` / `$where` / `$order` parameters of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoqlParams {
    limit: Option<u32>,
    where_clause: Option<String>,
    order: Option<String>,
}

impl SoqlParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `column = 'value'`
    pub fn where_equals(mut self, column: &'static str, value: &str) -> Self {
        self.where_clause = Some(format!("{}={}", column, quote_literal(value)));
        self
    }

    /// `lower(column) LIKE lower('%value%')`
    pub fn where_contains_ignore_case(mut self, column: &'static str, value: &str) -> Self {
        let pattern = quote_literal(&format!("%{}%", value));
        self.where_clause = Some(format!("lower({}) LIKE lower({})", column, pattern));
        self
    }

    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order = Some(column.to_string());
        self
    }

    /// Parameters for one [`Query`]
    pub fn for_query(query: &Query, limits: &QueryLimits) -> Self {
        match query {
            Query::All => Self::new().limit(limits.unfiltered),
            Query::AttributeEquals { field, value } => Self::new()
                .where_equals(field.column(), value)
                .limit(limits.unfiltered),
            Query::NameContains(text) => Self::new()
                .where_contains_ignore_case(NAME_COLUMN, text)
                .order_by(NAME_COLUMN)
                .limit(limits.search),
        }
    }

    /// Unencoded name/value pairs in a stable order
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(clause) = &self.where_clause {
            pairs.push(("$where", clause.clone()));
        }
        if let Some(order) = &self.order {
            pairs.push(("$order", order.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("$limit", limit.to_string()));
        }
        pairs
    }

    /// Copy of `endpoint` carrying these parameters, percent-encoded
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in self.pairs() {
                query.append_pair(name, &value);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CategoricalField;

    fn endpoint() -> Url {
        Url::parse("https://data.winnipeg.ca/resource/tx3d-pfxq.geojson").unwrap()
    }

    fn decoded_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_quote_literal_doubles_quotes() {
        assert_eq!(quote_literal("Kildonan"), "'Kildonan'");
        assert_eq!(quote_literal("St. Mary's"), "'St. Mary''s'");
        assert_eq!(quote_literal("' OR 1=1 --"), "''' OR 1=1 --'");
    }

    #[test]
    fn test_unfiltered_query() {
        let params = SoqlParams::for_query(&Query::All, &QueryLimits::default());
        assert_eq!(params.pairs(), vec![("$limit", "2000".to_string())]);

        let url = params.to_url(&endpoint());
        assert_eq!(
            url.as_str(),
            "https://data.winnipeg.ca/resource/tx3d-pfxq.geojson?%24limit=2000"
        );
    }

    #[test]
    fn test_equality_query() {
        let query = Query::AttributeEquals {
            field: CategoricalField::District,
            value: "ST. BONIFACE".to_string(),
        };
        let params = SoqlParams::for_query(&query, &QueryLimits::default());

        assert_eq!(
            params.pairs(),
            vec![
                ("$where", "district='ST. BONIFACE'".to_string()),
                ("$limit", "2000".to_string()),
            ]
        );
    }

    #[test]
    fn test_name_query_is_ordered_and_capped() {
        let query = Query::NameContains("Assiniboine".to_string());
        let params = SoqlParams::for_query(&query, &QueryLimits::default());

        assert_eq!(
            params.pairs(),
            vec![
                (
                    "$where",
                    "lower(park_name) LIKE lower('%Assiniboine%')".to_string()
                ),
                ("$order", "park_name".to_string()),
                ("$limit", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_hostile_text_stays_inside_literal() {
        let query = Query::NameContains("x') OR (1=1&$limit=5000#".to_string());
        let url = SoqlParams::for_query(&query, &QueryLimits::default()).to_url(&endpoint());

        let pairs = decoded_pairs(&url);
        assert_eq!(pairs.len(), 3);
        assert_eq!(
            pairs[0].1,
            "lower(park_name) LIKE lower('%x'') OR (1=1&$limit=5000#%')"
        );
        assert_eq!(pairs[2], ("$limit".to_string(), "100".to_string()));
        assert!(url.fragment().is_none());
    }
}
