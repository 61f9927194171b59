use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
    #[error("Solver error: {0}")]
    SolverError(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
