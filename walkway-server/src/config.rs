use std::path::Path;

use serde::Deserialize;
use walkway_core::Degrees;
use walkway_core::loading::WalkwayDataConfig;

/// Server configuration, loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:3000"
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Angle threshold applied when a query does not supply one
    #[serde(default = "default_max_angle")]
    pub default_max_angle: Degrees,
    /// Walkway data tables
    pub data: WalkwayDataConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_angle() -> Degrees {
    1000.0
}

impl ServerConfig {
    /// Reads and parses the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config '{}': {e}", path.display()))?;
        Ok(toml::from_str(&text)?)
    }
}
