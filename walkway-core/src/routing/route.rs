use serde::Serialize;

use crate::{Degrees, Meters, NodeId};

/// One selected edge of a solved route
#[derive(Debug, Clone, Serialize)]
pub struct RouteLeg {
    pub from: NodeId,
    pub to: NodeId,
    /// Leg length in meters
    pub distance: Meters,
    /// Turn angle of the underlying edge
    pub angle: Degrees,
}

/// Solved path: the selected edge subset and its total distance.
///
/// Legs keep the edge table's input order rather than path order.
#[derive(Debug, Clone, Serialize)]
pub struct WalkRoute {
    pub legs: Vec<RouteLeg>,
    pub total_distance: Meters,
}
