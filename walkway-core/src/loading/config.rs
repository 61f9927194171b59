use std::path::PathBuf;

use serde::Deserialize;

/// Locations of the walkway data tables
#[derive(Debug, Clone, Deserialize)]
pub struct WalkwayDataConfig {
    /// Node table: `node,lat,lon,description`
    pub nodes_path: PathBuf,
    /// Edge table: `from,to,distance_m,angle,allowed`
    pub edges_path: PathBuf,
}
