//! Mock MBTA client for running without network access.
//!
//! Loads route and stop documents from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{Route, Stop};
use crate::network::TransitProvider;

use super::error::ProviderError;
use super::types::{RoutesDocument, StopsDocument};

/// Mock MBTA client that serves data from JSON files.
///
/// Expects a directory laid out as:
///
/// ```text
/// routes.json          # response of GET /routes
/// stops/{route}.json   # response of GET /stops?filter[route]={route}
/// ```
#[derive(Debug, Clone)]
pub struct MockMbtaClient {
    routes: Vec<Route>,
    stops: HashMap<String, Vec<Stop>>,
}

impl MockMbtaClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let data_dir = data_dir.as_ref();

        let routes = read_document::<RoutesDocument>(&data_dir.join("routes.json"))?.into_routes();

        let stops_dir = data_dir.join("stops");
        let entries = std::fs::read_dir(&stops_dir).map_err(|e| {
            ProviderError::MockData(format!("failed to read {}: {}", stops_dir.display(), e))
        })?;

        let mut stops = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ProviderError::MockData(format!("failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "Green-B.json" -> "Green-B"
            let route_id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ProviderError::MockData(format!("invalid filename: {:?}", path)))?
                .to_string();

            let doc = read_document::<StopsDocument>(&path)?;
            stops.insert(route_id, doc.into_stops());
        }

        Ok(Self { routes, stops })
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ProviderError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        ProviderError::MockData(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&json).map_err(|e| ProviderError::Json {
        message: format!("{}: {}", path.display(), e),
        body: None,
    })
}

impl TransitProvider for MockMbtaClient {
    async fn fetch_routes(&self) -> Result<Vec<Route>, ProviderError> {
        Ok(self.routes.clone())
    }

    async fn fetch_stops(&self, route: &Route) -> Result<Vec<Stop>, ProviderError> {
        self.stops
            .get(route.id())
            .cloned()
            .ok_or_else(|| ProviderError::BadRequest {
                status: 404,
                message: format!("no mock stops for route {}", route.id()),
            })
    }
}
