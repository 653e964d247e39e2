//! The network context object.

use sp_core::StationId;

use crate::graph::RailGraph;
use crate::station::StationRegistry;

/// A validated rail network: station registry plus link graph under one
/// owner.
///
/// Built once via [`crate::NetworkBuilder`] and held for the life of the
/// process. The only mutation afterwards is link removal (disruptions);
/// stations are never added or removed.
#[derive(Debug, Clone)]
pub struct Network {
    registry: StationRegistry,
    graph: RailGraph,
}

impl Network {
    pub(crate) fn new(registry: StationRegistry, graph: RailGraph) -> Self {
        Self { registry, graph }
    }

    /// The station name table.
    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// The link graph.
    pub fn graph(&self) -> &RailGraph {
        &self.graph
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    /// Remove an undirected link; absent links are a silent no-op.
    ///
    /// This is the only mutation a built network supports.
    pub fn remove_link(&mut self, a: StationId, b: StationId) {
        self.graph.remove_link(a, b);
    }
}
