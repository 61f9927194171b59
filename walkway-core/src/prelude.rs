// Re-export key components
pub use crate::loading::{WalkwayDataConfig, load_walkway_network};
pub use crate::model::{WalkEdge, WalkNode, WalkwayNetwork};
pub use crate::routing::{PathQuery, RouteLeg, WalkRoute, solve_path};

// Core types for the walkway network
pub use crate::Degrees;
pub use crate::Meters;
pub use crate::NodeId;
