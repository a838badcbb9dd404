//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    /// A query with nothing to add returns the URL unchanged, without a bare `?`.
    fn add_to_url(&self, url: &Url) -> Url;
}
