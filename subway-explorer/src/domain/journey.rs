//! Journey types.
//!
//! A `Journey` is the answer to "how do I get from one stop to another":
//! either a single route, or two routes and the stop where they meet.

use std::fmt;

/// A resolved journey between two named stops.
///
/// Holds exactly one route with no connecting stop, or exactly two routes
/// with the connecting stop between them. The constructors are the only
/// way to build one, so the two shapes cannot be mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    origin: String,
    destination: String,
    routes: Vec<String>,
    connecting_stop: Option<String>,
}

impl Journey {
    /// A journey on a single route.
    pub fn direct(
        origin: impl Into<String>,
        destination: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            routes: vec![route.into()],
            connecting_stop: None,
        }
    }

    /// A journey changing from `first` to `second` at `connecting_stop`.
    pub fn with_change(
        origin: impl Into<String>,
        destination: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        connecting_stop: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            routes: vec![first.into(), second.into()],
            connecting_stop: Some(connecting_stop.into()),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Route names in travel order (one or two).
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// Where to change routes; `None` for a direct journey.
    pub fn connecting_stop(&self) -> Option<&str> {
        self.connecting_stop.as_deref()
    }

    /// Returns true if no change is needed.
    pub fn is_direct(&self) -> bool {
        self.connecting_stop.is_none()
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} -> {}",
            self.origin,
            self.destination,
            self.routes.join(", ")
        )?;
        if let Some(stop) = &self.connecting_stop {
            write!(f, " (change at {stop})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_journey() {
        let journey = Journey::direct("Davis", "Kendall/MIT", "Red Line");

        assert!(journey.is_direct());
        assert_eq!(journey.routes(), ["Red Line"]);
        assert_eq!(journey.connecting_stop(), None);
        assert_eq!(journey.to_string(), "Davis to Kendall/MIT -> Red Line");
    }

    #[test]
    fn journey_with_change() {
        let journey = Journey::with_change(
            "Ashmont",
            "Arlington",
            "Red Line",
            "Green Line B",
            "Park Street",
        );

        assert!(!journey.is_direct());
        assert_eq!(journey.origin(), "Ashmont");
        assert_eq!(journey.destination(), "Arlington");
        assert_eq!(journey.routes(), ["Red Line", "Green Line B"]);
        assert_eq!(journey.connecting_stop(), Some("Park Street"));
        assert_eq!(
            journey.to_string(),
            "Ashmont to Arlington -> Red Line, Green Line B (change at Park Street)"
        );
    }
}
