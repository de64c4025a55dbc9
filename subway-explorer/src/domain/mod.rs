//! Domain types for the subway explorer.
//!
//! Routes, stops and journeys as the rest of the crate sees them, decoupled
//! from the provider's wire format. All of them are immutable once built.

mod error;
mod journey;
mod route;
mod stop;

pub use error::QueryError;
pub use journey::Journey;
pub use route::{Route, RouteClass};
pub use stop::{RouteStops, Stop};
