//! Human-readable answers.
//!
//! Each function writes one question's answer to any `io::Write`, so the
//! CLI prints to stdout and tests capture into a buffer.

use std::io::{self, Write};

use crate::domain::{Journey, QueryError, Route};
use crate::network::{RouteStatistics, SharedStop};

/// Question one: the long name of every subway route.
pub fn write_routes<W: Write>(out: &mut W, routes: &[Route]) -> io::Result<()> {
    writeln!(out, "Question One:")?;
    for route in routes {
        writeln!(out, "{route}")?;
    }
    Ok(())
}

/// Question two: most/fewest stops, and the stops connecting routes.
pub fn write_statistics<W: Write>(
    out: &mut W,
    statistics: &Result<RouteStatistics, QueryError>,
    shared: &[SharedStop<'_>],
    skipped: &[Route],
) -> io::Result<()> {
    writeln!(out, "Question Two:")?;
    match statistics {
        Ok(stats) => writeln!(out, "{stats}")?,
        Err(e) => writeln!(out, "Statistics unavailable: {e}")?,
    }
    if !skipped.is_empty() {
        let names: Vec<&str> = skipped.iter().map(Route::name).collect();
        writeln!(out, "Stops unavailable for: {}", names.join(", "))?;
    }
    writeln!(out, "Connecting stops:")?;
    for stop in shared {
        writeln!(out, "{stop}")?;
    }
    Ok(())
}

/// Question three: one line per requested journey.
pub fn write_journey<W: Write>(
    out: &mut W,
    origin: &str,
    destination: &str,
    result: &Result<Option<Journey>, QueryError>,
) -> io::Result<()> {
    match result {
        Ok(Some(journey)) => writeln!(out, "{journey}"),
        Ok(None) => writeln!(
            out,
            "{origin} to {destination} -> no journey with at most one change"
        ),
        Err(e) => writeln!(out, "{origin} to {destination} -> {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteClass;
    use crate::network::RouteStopIndex;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn routes_listing() {
        let routes = [
            Route::new("Red", "Red Line", RouteClass::HeavyRail),
            Route::new("Mattapan", "Mattapan Trolley", RouteClass::LightRail),
        ];

        let text = render(|out| write_routes(out, &routes));
        assert_eq!(
            text,
            "Question One:\nRed Line (id: Red)\nMattapan Trolley (id: Mattapan)\n"
        );
    }

    #[test]
    fn statistics_and_shared_stops() {
        let red = Route::new("Red", "Red Line", RouteClass::HeavyRail);
        let mattapan = Route::new("Mattapan", "Mattapan Trolley", RouteClass::LightRail);
        let stats = RouteStatistics::extract([(&red, 22), (&mattapan, 8)]);

        let mut index = RouteStopIndex::new();
        index.insert("Ashmont", "Red Line");
        index.insert("Ashmont", "Mattapan Trolley");
        let shared = crate::network::find_shared(&index);

        let text = render(|out| write_statistics(out, &stats, &shared, &[]));
        assert_eq!(
            text,
            "Question Two:\n\
             Most stops: Red Line (id: Red): 22\n\
             Fewest stops: Mattapan Trolley (id: Mattapan): 8\n\
             Connecting stops:\n\
             Ashmont: Red Line, Mattapan Trolley\n"
        );
    }

    #[test]
    fn statistics_error_and_skipped_routes() {
        let blue = Route::new("Blue", "Blue Line", RouteClass::HeavyRail);
        let text = render(|out| write_statistics(out, &Err(QueryError::EmptyInput), &[], &[blue]));

        assert!(text.contains("Statistics unavailable: no routes to compute statistics over"));
        assert!(text.contains("Stops unavailable for: Blue Line"));
    }

    #[test]
    fn journey_outcomes() {
        let found = Ok(Some(Journey::direct("Davis", "Kendall/MIT", "Red Line")));
        let text = render(|out| write_journey(out, "Davis", "Kendall/MIT", &found));
        assert_eq!(text, "Davis to Kendall/MIT -> Red Line\n");

        let text = render(|out| write_journey(out, "Mattapan", "Wonderland", &Ok(None)));
        assert_eq!(
            text,
            "Mattapan to Wonderland -> no journey with at most one change\n"
        );

        let unknown = Err(QueryError::UnknownStop("Narnia".into()));
        let text = render(|out| write_journey(out, "Narnia", "Davis", &unknown));
        assert_eq!(text, "Narnia to Davis -> unknown stop: Narnia\n");
    }
}
