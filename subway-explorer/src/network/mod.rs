//! Route-stop network built from provider data.
//!
//! This module holds the in-memory model the three questions are answered
//! from: the index of routes per stop name, per-route statistics, shared
//! stops and the bounded journey search.

mod config;
mod index;
mod resolve;
mod shared;
mod stats;

pub use config::BuildConfig;
pub use index::{IndexBuilder, NetworkSnapshot, RouteSet, RouteStopIndex, TransitProvider};
pub use resolve::resolve;
pub use shared::{SharedStop, find_shared};
pub use stats::RouteStatistics;
