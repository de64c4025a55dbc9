//! Route types.

use std::fmt;

/// Class of a subway route, as numbered by GTFS `route_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// GTFS type 0: tram, streetcar, light rail.
    LightRail,
    /// GTFS type 1: subway, metro.
    HeavyRail,
}

impl RouteClass {
    /// Map a GTFS route type to a subway class.
    ///
    /// Returns `None` for every non-subway type (commuter rail, bus, ferry, ...).
    pub fn from_route_type(route_type: u8) -> Option<Self> {
        match route_type {
            0 => Some(RouteClass::LightRail),
            1 => Some(RouteClass::HeavyRail),
            _ => None,
        }
    }

    /// The GTFS route type number.
    pub fn route_type(self) -> u8 {
        match self {
            RouteClass::LightRail => 0,
            RouteClass::HeavyRail => 1,
        }
    }
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteClass::LightRail => write!(f, "light rail"),
            RouteClass::HeavyRail => write!(f, "heavy rail"),
        }
    }
}

/// A subway route.
///
/// The id is assigned by the API and unique; the name is the route's long
/// name ("Red Line", "Green Line B") and is what every answer reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    id: String,
    name: String,
    class: RouteClass,
}

impl Route {
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: RouteClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> RouteClass {
        self.class
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_type_mapping() {
        assert_eq!(RouteClass::from_route_type(0), Some(RouteClass::LightRail));
        assert_eq!(RouteClass::from_route_type(1), Some(RouteClass::HeavyRail));
        assert_eq!(RouteClass::from_route_type(2), None);
        assert_eq!(RouteClass::from_route_type(3), None);

        for class in [RouteClass::LightRail, RouteClass::HeavyRail] {
            assert_eq!(RouteClass::from_route_type(class.route_type()), Some(class));
        }
    }

    #[test]
    fn display() {
        let route = Route::new("Orange", "Orange Line", RouteClass::HeavyRail);
        assert_eq!(route.to_string(), "Orange Line (id: Orange)");
        assert_eq!(route.class().to_string(), "heavy rail");
    }
}
