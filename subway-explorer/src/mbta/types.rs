//! MBTA v3 API response DTOs.
//!
//! The API speaks JSON:API: every response is a document whose `data`
//! member holds resource objects with an `id`, a `type` and an
//! `attributes` map. Only the attributes requested through sparse
//! fieldsets are present, and unknown members are ignored.

use serde::Deserialize;
use tracing::warn;

use crate::domain::{Route, RouteClass, Stop};

/// Top-level JSON:API document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub data: Vec<Resource<T>>,
}

/// A single resource object.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<T> {
    pub id: String,

    /// Resource type, e.g. "route" or "stop".
    #[serde(rename = "type")]
    pub kind: String,

    pub attributes: T,
}

/// Attributes of a `route` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    pub long_name: String,

    /// GTFS route type: 0 = light rail, 1 = heavy rail, 2 = commuter rail, ...
    #[serde(rename = "type")]
    pub route_type: u8,
}

/// Attributes of a `stop` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}

pub type RoutesDocument = Document<RouteAttributes>;
pub type StopsDocument = Document<StopAttributes>;

impl RoutesDocument {
    /// Convert to domain routes, keeping response order.
    ///
    /// Routes of a class other than light or heavy rail are dropped.
    pub fn into_routes(self) -> Vec<Route> {
        self.data
            .into_iter()
            .filter_map(|resource| {
                match RouteClass::from_route_type(resource.attributes.route_type) {
                    Some(class) => Some(Route::new(
                        resource.id,
                        resource.attributes.long_name,
                        class,
                    )),
                    None => {
                        warn!(
                            route = %resource.id,
                            route_type = resource.attributes.route_type,
                            "ignoring non-subway route"
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

impl StopsDocument {
    /// Convert to domain stops, keeping response order.
    pub fn into_stops(self) -> Vec<Stop> {
        self.data
            .into_iter()
            .map(|resource| Stop::new(resource.id, resource.attributes.name))
            .collect()
    }
}
