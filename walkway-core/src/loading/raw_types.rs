use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawNode {
    pub node: String,
    pub lat: String,
    pub lon: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
    pub distance_m: String,
    pub angle: String,
    pub allowed: String,
}
