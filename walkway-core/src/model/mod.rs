//! Data model for the campus walkway network
//!
//! Contains types and structures for representing the node and edge tables.

pub mod components;
pub mod network;

pub use components::{WalkEdge, WalkNode};
pub use network::WalkwayNetwork;
