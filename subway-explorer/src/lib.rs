//! Subway network explorer.
//!
//! Answers three questions about the MBTA subway: which routes exist,
//! which have the most and fewest stops (and where routes meet), and how
//! to get from one named stop to another with at most one change.

pub mod domain;
pub mod mbta;
pub mod network;
pub mod report;
pub mod session;
