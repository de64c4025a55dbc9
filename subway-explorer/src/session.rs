//! A query session: one fetch of the network, many answers.
//!
//! The route list and every route's stops are fetched once when the
//! session is loaded. Statistics, shared stops and all journey queries are
//! then answered from that snapshot without further network calls.

use tracing::info;

use crate::domain::{Journey, QueryError, Route};
use crate::network::{
    BuildConfig, IndexBuilder, NetworkSnapshot, RouteStatistics, SharedStop, TransitProvider,
    find_shared, resolve,
};

/// Network data for one session.
#[derive(Debug, Clone)]
pub struct Session {
    routes: Vec<Route>,
    snapshot: NetworkSnapshot,
}

impl Session {
    /// Fetch routes and stops from `provider`.
    ///
    /// Fails only if the route list itself cannot be fetched. Routes whose
    /// stops cannot be fetched are skipped and listed by `skipped_routes`.
    pub async fn load<P: TransitProvider>(
        provider: &P,
        config: &BuildConfig,
    ) -> Result<Self, QueryError> {
        let routes = provider.fetch_routes().await?;
        info!(routes = routes.len(), "fetched route list");

        let snapshot = IndexBuilder::new(provider, config).build(&routes).await;
        Ok(Self { routes, snapshot })
    }

    /// All subway routes, in provider order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes left out of the index because their stops could not be fetched.
    pub fn skipped_routes(&self) -> &[Route] {
        &self.snapshot.skipped
    }

    /// Routes with the most and fewest stops.
    pub fn statistics(&self) -> Result<RouteStatistics, QueryError> {
        RouteStatistics::from_route_stops(&self.snapshot.routes)
    }

    /// Stops served by two or more routes.
    pub fn shared_stops(&self) -> Vec<SharedStop<'_>> {
        find_shared(&self.snapshot.index)
    }

    /// A journey between two stop names, if one with at most one change exists.
    pub fn journey(&self, origin: &str, destination: &str) -> Result<Option<Journey>, QueryError> {
        resolve(&self.snapshot.index, origin, destination)
    }
}
