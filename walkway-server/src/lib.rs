//! HTTP service for the campus walkway router.
//!
//! Serves the path computation as a JSON/GeoJSON API plus a single-page
//! Leaflet map UI.

pub mod config;
pub mod error;
pub mod routes;
