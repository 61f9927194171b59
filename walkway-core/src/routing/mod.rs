//! Path formulation and result rendering

mod route;
mod solver;
mod to_geojson;

pub use route::{RouteLeg, WalkRoute};
pub use solver::{PathQuery, solve_path};
