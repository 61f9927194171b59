//! Walkway network components - nodes and edges

use geo::Point;

use crate::{Degrees, Meters, NodeId};

/// Walkway network node
#[derive(Debug, Clone)]
pub struct WalkNode {
    /// Identifier from the node table
    pub id: NodeId,
    /// Node coordinates (lon/lat)
    pub geometry: Point<f64>,
    /// Optional human-readable description
    pub description: Option<String>,
}

/// Directed walkway segment between two nodes
#[derive(Debug, Clone)]
pub struct WalkEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Segment length in meters
    pub distance: Meters,
    /// Turn angle in degrees, compared against the query threshold
    pub angle: Degrees,
    /// Edges flagged as not allowed are excluded regardless of angle
    pub allowed: bool,
}

impl WalkEdge {
    /// Whether this edge may appear in a path under the given angle threshold
    pub fn passable(&self, max_angle: Degrees) -> bool {
        self.allowed && self.angle <= max_angle
    }
}
