//! Station registry: the fixed, named vertex set.

use std::collections::HashMap;

use sp_core::StationId;

/// A named stop in the rail network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

/// Immutable name→identity table for a network's stations.
///
/// Construction goes through [`crate::NetworkBuilder`], which guarantees
/// the name→identity mapping is a bijection; afterwards the registry never
/// changes. Looking up an unknown name returns `None`, never a fabricated
/// identity.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
}

impl StationRegistry {
    pub(crate) fn new(stations: Vec<Station>, by_name: HashMap<String, StationId>) -> Self {
        Self { stations, by_name }
    }

    /// Resolve a display name to its identity.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Get a station by identity (returns None if out of range).
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index() as usize)
    }

    /// Display name for an identity (returns None if out of range).
    pub fn name(&self, id: StationId) -> Option<&str> {
        self.station(id).map(|s| s.name.as_str())
    }

    /// Number of registered stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// True when no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations in identity order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}
