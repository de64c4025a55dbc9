//! Stops shared by two or more routes.

use std::fmt;

use super::index::{RouteSet, RouteStopIndex};

/// A stop where routes meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedStop<'a> {
    pub name: &'a str,
    pub routes: &'a RouteSet,
}

impl fmt::Display for SharedStop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, route) in self.routes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(route)?;
        }
        Ok(())
    }
}

/// Every index entry served by two or more routes, in index order.
pub fn find_shared(index: &RouteStopIndex) -> Vec<SharedStop<'_>> {
    index
        .interchanges()
        .map(|(name, routes)| SharedStop { name, routes })
        .collect()
}
