//! Angle-constrained shortest-path routing over a campus walkway network.
//!
//! The network is loaded from two CSV tables (nodes with coordinates, edges
//! with distances and turn angles). Path finding is expressed as a 0/1 linear
//! program with flow-conservation constraints and handed to an external
//! solver; no graph algorithm is implemented here.

pub mod error;
pub mod loading;
pub mod model;
pub mod routing;

pub mod prelude;

pub use error::Error;

/// Node identifier as it appears in the node table
pub type NodeId = i64;
/// Distance in meters
pub type Meters = f64;
/// Turn angle in degrees
pub type Degrees = f64;
