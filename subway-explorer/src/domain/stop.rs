//! Stop types.

use std::fmt;

use super::Route;

/// A stop served by a route.
///
/// Names are not unique: two physically distinct stops can share a display
/// name, and everything keyed by name treats them as one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stop {
    id: String,
    name: String,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A route together with the stops fetched for it, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStops {
    pub route: Route,
    pub stops: Vec<Stop>,
}

impl RouteStops {
    pub fn new(route: Route, stops: Vec<Stop>) -> Self {
        Self { route, stops }
    }

    /// Number of stops on the route.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}
