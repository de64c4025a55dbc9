//! Route-stop index and the builder that fetches it.
//!
//! The index maps a stop's display name to the names of the routes
//! serving a stop of that name. Both levels iterate in first-seen order:
//! keys in the order stops were first met while walking routes in provider
//! order, and each route set in route order. Everything downstream
//! (shared stops, the interchange picked for a journey) inherits that
//! order, so answers are deterministic for a given provider response.
//!
//! Stops are keyed by name, not id. Distinct stops that share a display
//! name are merged into one entry.

use futures::StreamExt;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use crate::domain::{Route, RouteStops, Stop};
use crate::mbta::ProviderError;

use super::config::BuildConfig;

/// Set of route names serving a stop, in first-seen order.
pub type RouteSet = IndexSet<String>;

/// Trait for providing route and stop data.
///
/// This abstraction allows the builder to be tested with in-memory data.
#[allow(async_fn_in_trait)]
pub trait TransitProvider {
    /// All subway routes, in provider order.
    async fn fetch_routes(&self) -> Result<Vec<Route>, ProviderError>;

    /// Stops served by `route`, in provider order.
    async fn fetch_stops(&self, route: &Route) -> Result<Vec<Stop>, ProviderError>;
}

/// Mapping from stop name to the routes serving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteStopIndex {
    entries: IndexMap<String, RouteSet>,
}

impl RouteStopIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from already fetched route stop lists.
    pub fn from_route_stops(routes: &[RouteStops]) -> Self {
        let mut index = Self::new();
        for route_stops in routes {
            index.add_route(route_stops);
        }
        index
    }

    /// Record every stop of one route.
    pub fn add_route(&mut self, route_stops: &RouteStops) {
        for stop in &route_stops.stops {
            self.insert(stop.name(), route_stops.route.name());
        }
    }

    /// Record that `route_name` serves a stop called `stop_name`.
    pub fn insert(&mut self, stop_name: &str, route_name: &str) {
        self.entries
            .entry(stop_name.to_string())
            .or_default()
            .insert(route_name.to_string());
    }

    /// Routes serving the named stop, if any route does.
    pub fn routes_at(&self, stop_name: &str) -> Option<&RouteSet> {
        self.entries.get(stop_name)
    }

    pub fn contains_stop(&self, stop_name: &str) -> bool {
        self.entries.contains_key(stop_name)
    }

    /// All entries, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteSet)> {
        self.entries
            .iter()
            .map(|(name, routes)| (name.as_str(), routes))
    }

    /// Entries served by two or more routes, in first-seen order.
    pub fn interchanges(&self) -> impl Iterator<Item = (&str, &RouteSet)> {
        self.iter().filter(|(_, routes)| routes.len() >= 2)
    }

    /// Number of distinct stop names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything fetched in one session.
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    /// Routes whose stops were fetched, in provider order.
    pub routes: Vec<RouteStops>,

    /// Routes dropped because their stop fetch failed.
    pub skipped: Vec<Route>,

    /// Index built from `routes`.
    pub index: RouteStopIndex,
}

/// Builds a `NetworkSnapshot` by fetching each route's stops.
pub struct IndexBuilder<'a, P: TransitProvider> {
    provider: &'a P,
    config: &'a BuildConfig,
}

impl<'a, P: TransitProvider> IndexBuilder<'a, P> {
    /// Create a new builder.
    pub fn new(provider: &'a P, config: &'a BuildConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch stops for every route and index them.
    ///
    /// A route whose stops cannot be fetched is logged and skipped; it
    /// contributes nothing to the index or the statistics. Up to
    /// `max_concurrent` requests run at once, but results are consumed in
    /// `routes` order so the outcome matches a sequential build.
    pub async fn build(&self, routes: &[Route]) -> NetworkSnapshot {
        let provider = self.provider;
        let fetches = futures::stream::iter(routes)
            .map(move |route| async move { (route, provider.fetch_stops(route).await) })
            .buffered(self.config.concurrency());
        let mut fetches = std::pin::pin!(fetches);

        let mut snapshot = NetworkSnapshot::default();

        while let Some((route, result)) = fetches.next().await {
            match result {
                Ok(stops) => {
                    debug!(route = %route.id(), stops = stops.len(), "indexed route");
                    let route_stops = RouteStops::new(route.clone(), stops);
                    snapshot.index.add_route(&route_stops);
                    snapshot.routes.push(route_stops);
                }
                Err(e) => {
                    warn!(route = %route.id(), error = %e, "skipping route: failed to fetch stops");
                    snapshot.skipped.push(route.clone());
                }
            }
        }

        info!(
            routes = snapshot.routes.len(),
            skipped = snapshot.skipped.len(),
            stops = snapshot.index.len(),
            "built route-stop index"
        );

        snapshot
    }
}
