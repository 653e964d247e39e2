//! Map validation logic.

use crate::schema::{MAP_VERSION, RailMap};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate station: {name}")]
    DuplicateStation { name: String },

    #[error("Empty station name at position {index}")]
    EmptyStationName { index: usize },

    #[error("Unknown station: {name} in {context}")]
    UnknownStation { name: String, context: String },

    #[error("Link from {name} to itself")]
    SelfLink { name: String },
}

/// Checks a map for structural problems before it is compiled or saved.
///
/// Station names must be non-blank and unique; every link must reference two
/// distinct known stations. Duplicate links are allowed, the network layer
/// tolerates parallel links.
pub fn validate_map(map: &RailMap) -> Result<(), ValidationError> {
    if map.version > MAP_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: map.version,
        });
    }

    let mut names = HashSet::new();
    for (index, name) in map.stations.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyStationName { index });
        }
        if !names.insert(name.as_str()) {
            return Err(ValidationError::DuplicateStation { name: name.clone() });
        }
    }

    for (index, link) in map.links.iter().enumerate() {
        for endpoint in [&link.from, &link.to] {
            if !names.contains(endpoint.as_str()) {
                return Err(ValidationError::UnknownStation {
                    name: endpoint.clone(),
                    context: format!("link {}", index),
                });
            }
        }
        if link.from == link.to {
            return Err(ValidationError::SelfLink {
                name: link.from.clone(),
            });
        }
    }

    Ok(())
}
