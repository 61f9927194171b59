use geo::Point;
use log::{info, warn};

use super::config::WalkwayDataConfig;
use super::parser::deserialize_table;
use super::raw_types::{RawEdge, RawNode};
use crate::model::{WalkEdge, WalkNode, WalkwayNetwork};
use crate::{Error, NodeId};

/// Creates a walkway network from the configured CSV tables
///
/// # Errors
///
/// Returns an error if there are problems reading or processing data
pub fn load_walkway_network(config: &WalkwayDataConfig) -> Result<WalkwayNetwork, Error> {
    validate_config(config)?;

    info!("Loading node table: {}", config.nodes_path.display());
    let raw_nodes: Vec<RawNode> = deserialize_table(&config.nodes_path)?;
    let nodes = parse_nodes(raw_nodes);

    info!("Loading edge table: {}", config.edges_path.display());
    let raw_edges: Vec<RawEdge> = deserialize_table(&config.edges_path)?;
    let edges = parse_edges(raw_edges);

    info!("Loaded {} nodes and {} edges", nodes.len(), edges.len());

    let network = WalkwayNetwork::new(nodes, edges)?;
    validate_edge_endpoints(&network);

    Ok(network)
}

fn validate_config(config: &WalkwayDataConfig) -> Result<(), Error> {
    if !config.nodes_path.exists() {
        return Err(Error::InvalidData(format!(
            "Node table not found: {}",
            config.nodes_path.display()
        )));
    }

    if !config.edges_path.exists() {
        return Err(Error::InvalidData(format!(
            "Edge table not found: {}",
            config.edges_path.display()
        )));
    }

    Ok(())
}

fn parse_nodes(raw: Vec<RawNode>) -> Vec<WalkNode> {
    raw.into_iter()
        .filter_map(|record| {
            let id = record.node.trim().parse::<NodeId>();
            let lat = record.lat.trim().parse::<f64>();
            let lon = record.lon.trim().parse::<f64>();

            match (id, lat, lon) {
                (Ok(id), Ok(lat), Ok(lon)) => {
                    let description = record.description.trim();
                    Some(WalkNode {
                        id,
                        geometry: Point::new(lon, lat),
                        description: (!description.is_empty()).then(|| description.to_string()),
                    })
                }
                _ => {
                    warn!("Skipping node record with unparseable fields: {record:?}");
                    None
                }
            }
        })
        .collect()
}

fn parse_edges(raw: Vec<RawEdge>) -> Vec<WalkEdge> {
    raw.into_iter()
        .filter_map(|record| {
            let from = record.from.trim().parse::<NodeId>();
            let to = record.to.trim().parse::<NodeId>();
            let distance = record.distance_m.trim().parse::<f64>();
            let angle = record.angle.trim().parse::<f64>();
            let allowed = match record.allowed.trim() {
                "1" => Ok(true),
                "0" => Ok(false),
                other => Err(other),
            };

            match (from, to, distance, angle, allowed) {
                (Ok(from), Ok(to), Ok(distance), Ok(angle), Ok(allowed))
                    if distance >= 0.0 && angle >= 0.0 =>
                {
                    Some(WalkEdge {
                        from,
                        to,
                        distance,
                        angle,
                        allowed,
                    })
                }
                _ => {
                    warn!("Skipping edge record with unparseable fields: {record:?}");
                    None
                }
            }
        })
        .collect()
}

fn validate_edge_endpoints(network: &WalkwayNetwork) {
    let dangling = network
        .edges()
        .iter()
        .filter(|edge| network.node(edge.from).is_none() || network.node(edge.to).is_none())
        .count();

    if dangling > 0 {
        warn!(
            "{dangling} of {} edges reference nodes missing from the node table. \
            They can still be routed over but will not be drawn on the map.",
            network.edges().len()
        );
    }
}
