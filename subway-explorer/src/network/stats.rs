//! Route statistics: which route has the most stops, which the fewest.

use std::fmt;

use crate::domain::{QueryError, Route, RouteStops};

/// Extremes of stop count across a set of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStatistics {
    pub most_stops: Route,
    pub max_stops: usize,
    pub fewest_stops: Route,
    pub min_stops: usize,
}

impl RouteStatistics {
    /// Scan `(route, stop count)` pairs once, in order.
    ///
    /// Comparisons are strict, so when several routes share the extreme
    /// count the first one encountered is reported.
    pub fn extract<'a, I>(stop_counts: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (&'a Route, usize)>,
    {
        let mut counts = stop_counts.into_iter();
        let (first, first_count) = counts.next().ok_or(QueryError::EmptyInput)?;

        let (mut most, mut max) = (first, first_count);
        let (mut fewest, mut min) = (first, first_count);

        for (route, count) in counts {
            if count > max {
                most = route;
                max = count;
            }
            if count < min {
                fewest = route;
                min = count;
            }
        }

        Ok(Self {
            most_stops: most.clone(),
            max_stops: max,
            fewest_stops: fewest.clone(),
            min_stops: min,
        })
    }

    /// Statistics over fetched route stop lists.
    pub fn from_route_stops(routes: &[RouteStops]) -> Result<Self, QueryError> {
        Self::extract(routes.iter().map(|r| (&r.route, r.stop_count())))
    }
}

impl fmt::Display for RouteStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most stops: {}: {}", self.most_stops, self.max_stops)?;
        write!(f, "Fewest stops: {}: {}", self.fewest_stops, self.min_stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteClass;

    fn route(id: &str) -> Route {
        Route::new(id, format!("{id} Line"), RouteClass::LightRail)
    }

    #[test]
    fn finds_extremes() {
        let routes = [route("A"), route("B"), route("C")];
        let stats = RouteStatistics::extract([(&routes[0], 10), (&routes[1], 3), (&routes[2], 17)])
            .unwrap();

        assert_eq!(stats.most_stops, routes[2]);
        assert_eq!(stats.max_stops, 17);
        assert_eq!(stats.fewest_stops, routes[1]);
        assert_eq!(stats.min_stops, 3);
    }

    #[test]
    fn first_seen_wins_ties() {
        let routes = [route("A"), route("B"), route("C"), route("D")];
        let stats = RouteStatistics::extract([
            (&routes[0], 5),
            (&routes[1], 9),
            (&routes[2], 9),
            (&routes[3], 5),
        ])
        .unwrap();

        assert_eq!(stats.most_stops, routes[1]);
        assert_eq!(stats.fewest_stops, routes[0]);
    }

    #[test]
    fn single_route_is_both_extremes() {
        let only = route("A");
        let stats = RouteStatistics::extract([(&only, 4)]).unwrap();

        assert_eq!(stats.most_stops, only);
        assert_eq!(stats.fewest_stops, only);
        assert_eq!(stats.max_stops, stats.min_stops);
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = RouteStatistics::extract(std::iter::empty::<(&Route, usize)>());
        assert!(matches!(result, Err(QueryError::EmptyInput)));

        let result = RouteStatistics::from_route_stops(&[]);
        assert!(matches!(result, Err(QueryError::EmptyInput)));
    }

    #[test]
    fn display() {
        let (a, b) = (route("A"), route("B"));
        let stats = RouteStatistics::extract([(&a, 12), (&b, 2)]).unwrap();

        assert_eq!(
            stats.to_string(),
            "Most stops: A Line (id: A): 12\nFewest stops: B Line (id: B): 2"
        );
    }
}
