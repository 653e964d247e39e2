//! Rail map file schema.

use serde::{Deserialize, Serialize};

/// Newest map schema version this build reads and writes.
pub const MAP_VERSION: u32 = 1;

/// A rail map as stored on disk: station names plus undirected links.
///
/// Stations are referenced by name throughout the file; identities are
/// assigned only when the map is compiled into a network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RailMap {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkDef>,
}

/// One undirected link between two named stations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkDef {
    pub from: String,
    pub to: String,
    pub minutes: u32,
}

impl RailMap {
    /// An empty map at the current schema version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: MAP_VERSION,
            name: name.into(),
            stations: Vec::new(),
            links: Vec::new(),
        }
    }
}
