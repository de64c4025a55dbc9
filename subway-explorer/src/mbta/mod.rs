//! MBTA v3 API client.
//!
//! This module provides the transit data provider used by the explorer:
//! an HTTP client for the public MBTA v3 JSON:API service and a mock
//! that serves the same documents from disk.
//!
//! Key characteristics of the API:
//! - Routes are filtered server-side to light rail (0) and heavy rail (1)
//! - Stops can only be listed per route, so discovering the network takes
//!   one request per route
//! - Throttling is signalled with HTTP 429

mod client;
mod error;
mod mock;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use error::ProviderError;
pub use mock::MockMbtaClient;
pub use types::{
    Document, Resource, RouteAttributes, RoutesDocument, StopAttributes, StopsDocument,
};
