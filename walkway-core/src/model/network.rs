use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;

use crate::routing::{PathQuery, WalkRoute, solve_path};
use crate::{Error, NodeId};

use super::{WalkEdge, WalkNode};

/// Immutable walkway network loaded from the node and edge tables.
///
/// The node table drives selection widgets and rendering; the edge table is
/// the sole input to path optimization. Edges may reference nodes missing
/// from the node table - such edges still participate in optimization and
/// are only skipped when rendering.
#[derive(Debug, Clone)]
pub struct WalkwayNetwork {
    nodes: Vec<WalkNode>,
    edges: Vec<WalkEdge>,
    node_index: HashMap<NodeId, usize>,
}

impl WalkwayNetwork {
    /// Builds a network from parsed tables.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the node table contains duplicate identifiers.
    pub fn new(nodes: Vec<WalkNode>, edges: Vec<WalkEdge>) -> Result<Self, Error> {
        if let Some(dup) = nodes.iter().map(|n| n.id).duplicates().next() {
            return Err(Error::InvalidData(format!(
                "duplicate node identifier in node table: {dup}"
            )));
        }

        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id, idx))
            .collect();

        Ok(Self {
            nodes,
            edges,
            node_index,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&WalkNode> {
        self.node_index.get(&id).map(|&idx| &self.nodes[idx])
    }

    pub fn nodes(&self) -> &[WalkNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WalkEdge] {
        &self.edges
    }

    /// Mean coordinate of the node table, used to center the map view.
    pub fn centroid(&self) -> Option<Point<f64>> {
        if self.nodes.is_empty() {
            return None;
        }
        let n = self.nodes.len() as f64;
        let (sum_x, sum_y) = self
            .nodes
            .iter()
            .fold((0.0, 0.0), |(sx, sy), node| {
                (sx + node.geometry.x(), sy + node.geometry.y())
            });
        Some(Point::new(sum_x / n, sum_y / n))
    }

    /// Resolves a user-supplied location to a node identifier.
    ///
    /// Accepts a raw integer identifier or a node description
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if the input matches neither.
    pub fn resolve(&self, location: &str) -> Result<NodeId, Error> {
        let location = location.trim();

        if let Ok(id) = location.parse::<NodeId>()
            && self.node_index.contains_key(&id)
        {
            return Ok(id);
        }

        self.nodes
            .iter()
            .find(|node| {
                node.description
                    .as_deref()
                    .is_some_and(|d| d.eq_ignore_ascii_case(location))
            })
            .map(|node| node.id)
            .ok_or_else(|| Error::UnknownLocation(location.to_string()))
    }

    /// Minimum-distance path between two nodes under an angle threshold.
    ///
    /// Returns `Ok(None)` when no feasible path exists.
    ///
    /// # Errors
    ///
    /// Returns `SolverError` if the solver fails for a reason other than
    /// infeasibility.
    pub fn shortest_path(&self, query: &PathQuery) -> Result<Option<WalkRoute>, Error> {
        solve_path(&self.edges, query)
    }
}
