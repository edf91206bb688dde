//! Shared query infrastructure: the [`Query`] trait and URL helpers.

use url::Url;

use crate::Error;

/// Trait implemented by all filter builders. Filters are validated and
/// appended to a URL that already carries the `apikey` parameter.
pub trait Query {
    /// Validates this query's filters and appends them to the given URL,
    /// returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Result<Url, Error>;
}

/// A query with no filters, for endpoints that take none.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFilters;

impl Query for NoFilters {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        Ok(url.clone())
    }
}

pub(crate) fn append(url: &mut Url, key: &str, value: impl ToString) {
    url.query_pairs_mut().append_pair(key, &value.to_string());
}
