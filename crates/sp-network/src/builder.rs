//! Incremental network builder.

use std::collections::HashMap;

use sp_core::{SpResult, StationId};

use crate::graph::RailGraph;
use crate::network::Network;
use crate::station::{Station, StationRegistry};
use crate::validate;

/// Builder for constructing a rail network incrementally.
///
/// Use `add_station` and `link` to describe the network, then call
/// `build()` to validate and freeze it into a [`Network`]. Links are only
/// materialized at build time, after every endpoint has been checked
/// against the registered station range.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    names: Vec<String>,
    links: Vec<(StationId, StationId, u32)>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station and return its identity.
    ///
    /// Identities are handed out densely in registration order.
    pub fn add_station(&mut self, name: impl Into<String>) -> StationId {
        let id = StationId::from_index(self.names.len() as u32);
        self.names.push(name.into());
        id
    }

    /// Queue an undirected link with the given travel minutes.
    pub fn link(&mut self, a: StationId, b: StationId, minutes: u32) {
        self.links.push((a, b, minutes));
    }

    /// Number of stations registered so far.
    pub fn station_count(&self) -> usize {
        self.names.len()
    }

    /// Validate and freeze the network.
    ///
    /// Checks that station names form a bijection (unique, non-empty) and
    /// that every queued link endpoint is in range, then materializes the
    /// adjacency lists.
    pub fn build(self) -> SpResult<Network> {
        validate::validate_stations(&self.names)?;
        validate::validate_links(&self.links, self.names.len())?;

        let stations: Vec<Station> = self
            .names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Station {
                id: StationId::from_index(i as u32),
                name,
            })
            .collect();

        let by_name: HashMap<String, StationId> = stations
            .iter()
            .map(|s| (s.name.clone(), s.id))
            .collect();
        let registry = StationRegistry::new(stations, by_name);

        let mut graph = RailGraph::new(registry.len());
        for (a, b, minutes) in self.links {
            graph.add_link(a, b, minutes);
        }

        Ok(Network::new(registry, graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use sp_core::SpError;

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_station("Amsterdam");
        let b = builder.add_station("Den Haag");
        builder.link(a, b, 46);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(builder.station_count(), 2);

        let network = builder.build().unwrap();
        assert_eq!(network.station_count(), 2);
        assert_eq!(network.graph().link_count(), 1);
        assert_eq!(network.registry().lookup("Den Haag"), Some(b));
    }

    #[test]
    fn build_empty_network() {
        let network = NetworkBuilder::new().build().unwrap();
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.graph().link_count(), 0);
    }

    #[test]
    fn duplicate_station_name_is_rejected() {
        let mut builder = NetworkBuilder::new();
        builder.add_station("Utrecht");
        builder.add_station("Utrecht");

        let err = builder.build().unwrap_err();
        assert!(matches!(err, SpError::Invariant { .. }));
        let expected: SpError = NetworkError::DuplicateStation {
            name: "Utrecht".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), expected.to_string());
    }

    #[test]
    fn empty_station_name_is_rejected() {
        let mut builder = NetworkBuilder::new();
        builder.add_station("  ");
        assert!(builder.build().is_err());
    }

    #[test]
    fn out_of_range_link_endpoint_is_rejected() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_station("A");
        builder.link(a, StationId::from_index(7), 10);
        assert!(builder.build().is_err());
    }
}
