use crate::types::AccountType;
use std::collections::HashMap;

/// Filter fields recognized by account queries. Anything else recorded on a
/// query is dropped during extraction.
const RECOGNIZED_FILTERS: [&str; 1] = ["type"];

/// Declarative account query: a list of field = value equality filters.
///
/// The only recognized filter today is `type`, which selects the sub-resource
/// to query; it is mandatory and resolved by
/// [`AccountRequest::from_query`](crate::account::AccountRequest::from_query).
#[derive(Debug, Clone, Default)]
pub struct AccountQuery {
    filters: Vec<(String, String)>,
}

impl AccountQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an equality filter against a named field.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Shorthand for the mandatory `type` filter.
    #[must_use]
    pub fn of_type(self, query_type: AccountType) -> Self {
        self.filter("type", query_type.as_str())
    }

    /// Extracts recognized filters into a parameter map.
    ///
    /// Unrecognized fields are ignored; when the same field was filtered more
    /// than once, the last value wins.
    #[must_use]
    pub fn parameters(&self) -> HashMap<String, String> {
        let mut parameters = HashMap::new();
        for (field, value) in &self.filters {
            if RECOGNIZED_FILTERS.contains(&field.as_str()) {
                parameters.insert(field.clone(), value.clone());
            }
        }
        parameters
    }
}
