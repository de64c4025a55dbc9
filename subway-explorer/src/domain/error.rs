//! Query error types.
//!
//! These are the failures a caller of the explorer sees. A journey query
//! that finds nothing is not one of them: the resolver reports that as
//! `Ok(None)`.

use crate::mbta::ProviderError;

/// Errors returned by network queries.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The provider could not supply data the query cannot do without
    #[error("transit data provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),

    /// A stop name that no fetched route serves
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Statistics requested over zero routes
    #[error("no routes to compute statistics over")]
    EmptyInput,
}
