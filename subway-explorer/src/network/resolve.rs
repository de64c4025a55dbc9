//! Journey resolution between two named stops.
//!
//! This is a bounded search, not a shortest-path algorithm. It answers
//! with a single route when one serves both stops, otherwise with two
//! routes meeting at one interchange stop, otherwise with nothing.
//! Journeys needing two or more changes are never found.

use tracing::debug;

use crate::domain::{Journey, QueryError};

use super::index::{RouteSet, RouteStopIndex};

/// Find a journey from `origin` to `destination` using `index`.
///
/// Returns `Ok(None)` when both stops are known but no route or single
/// interchange links them. Unknown stop names are an error, checked origin
/// first.
///
/// 1. Direct: the first route (in index order) serving both stops.
/// 2. One change: the first interchange (in index order) sharing a route
///    with the origin and a route with the destination.
///
/// Because every route set is in first-seen route order, and the
/// interchange condition is symmetric, swapping origin and destination
/// yields the same routes (reversed) and the same interchange.
pub fn resolve(
    index: &RouteStopIndex,
    origin: &str,
    destination: &str,
) -> Result<Option<Journey>, QueryError> {
    let from = index
        .routes_at(origin)
        .ok_or_else(|| QueryError::UnknownStop(origin.to_string()))?;
    let to = index
        .routes_at(destination)
        .ok_or_else(|| QueryError::UnknownStop(destination.to_string()))?;

    if let Some(route) = first_common(from, to) {
        debug!(origin, destination, route, "direct route");
        return Ok(Some(Journey::direct(origin, destination, route)));
    }

    for (stop, routes) in index.interchanges() {
        let (Some(first), Some(second)) = (first_common(routes, from), first_common(routes, to))
        else {
            continue;
        };

        debug!(origin, destination, via = stop, "one change");
        return Ok(Some(Journey::with_change(
            origin,
            destination,
            first,
            second,
            stop,
        )));
    }

    debug!(origin, destination, "no journey with at most one change");
    Ok(None)
}

/// First member of `a` (in `a`'s order) that is also in `b`.
fn first_common<'a>(a: &'a RouteSet, b: &RouteSet) -> Option<&'a str> {
    a.iter().find(|route| b.contains(*route)).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteClass, RouteStops, Stop};

    fn line(name: &str, stops: &[&str]) -> RouteStops {
        RouteStops::new(
            Route::new(name, name, RouteClass::HeavyRail),
            stops.iter().map(|s| Stop::new(*s, *s)).collect(),
        )
    }

    /// A small network shaped like central Boston.
    fn network() -> RouteStopIndex {
        RouteStopIndex::from_route_stops(&[
            line(
                "Red Line",
                &[
                    "Davis",
                    "Kendall/MIT",
                    "Park Street",
                    "Downtown Crossing",
                    "South Station",
                    "Ashmont",
                ],
            ),
            line("Mattapan Trolley", &["Ashmont", "Mattapan"]),
            line(
                "Orange Line",
                &[
                    "Malden Center",
                    "Wellington",
                    "North Station",
                    "State",
                    "Downtown Crossing",
                    "Back Bay",
                ],
            ),
            line("Green Line B", &["Park Street", "Arlington", "Boston College"]),
            line("Green Line E", &["North Station", "Park Street", "Arlington", "Symphony"]),
            line("Blue Line", &["Wonderland", "State", "Bowdoin"]),
            line("Isolated", &["Nowhere", "Far Away"]),
        ])
    }

    #[test]
    fn direct_route() {
        let journey = resolve(&network(), "Malden Center", "Wellington")
            .unwrap()
            .unwrap();

        assert_eq!(journey.routes(), ["Orange Line"]);
        assert_eq!(journey.connecting_stop(), None);
    }

    #[test]
    fn direct_route_prefers_first_seen() {
        // Park Street and Arlington share Green Line B and E; B was indexed first.
        let journey = resolve(&network(), "Arlington", "Park Street")
            .unwrap()
            .unwrap();
        assert_eq!(journey.routes(), ["Green Line B"]);
    }

    #[test]
    fn one_change() {
        let journey = resolve(&network(), "Malden Center", "South Station")
            .unwrap()
            .unwrap();

        assert_eq!(journey.routes(), ["Orange Line", "Red Line"]);
        assert_eq!(journey.connecting_stop(), Some("Downtown Crossing"));
    }

    #[test]
    fn one_change_picks_first_interchange_in_index_order() {
        // Ashmont to Arlington: Park Street comes before any other Red/Green interchange.
        let journey = resolve(&network(), "Ashmont", "Arlington").unwrap().unwrap();

        assert_eq!(journey.routes(), ["Red Line", "Green Line B"]);
        assert_eq!(journey.connecting_stop(), Some("Park Street"));
    }

    #[test]
    fn same_stop_is_direct() {
        let journey = resolve(&network(), "Wellington", "Wellington")
            .unwrap()
            .unwrap();
        assert!(journey.is_direct());
    }

    #[test]
    fn two_changes_not_found() {
        // Mattapan -> Wonderland needs Mattapan, Red, Orange, Blue.
        let result = resolve(&network(), "Mattapan", "Wonderland").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn disconnected_not_found() {
        let result = resolve(&network(), "Nowhere", "Davis").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn unknown_origin() {
        let result = resolve(&network(), "Narnia", "Davis");
        assert!(matches!(result, Err(QueryError::UnknownStop(name)) if name == "Narnia"));
    }

    #[test]
    fn unknown_destination() {
        let result = resolve(&network(), "Davis", "Narnia");
        assert!(matches!(result, Err(QueryError::UnknownStop(name)) if name == "Narnia"));
    }

    #[test]
    fn unknown_origin_reported_first() {
        let result = resolve(&network(), "Atlantis", "Narnia");
        assert!(matches!(result, Err(QueryError::UnknownStop(name)) if name == "Atlantis"));
    }

    #[test]
    fn empty_index() {
        let result = resolve(&RouteStopIndex::new(), "Davis", "Davis");
        assert!(matches!(result, Err(QueryError::UnknownStop(_))));
    }
}
