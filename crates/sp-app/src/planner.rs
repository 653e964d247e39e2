//! Route planning over a compiled rail map.

use std::collections::HashMap;

use sp_core::StationId;
use sp_map::{MapError, RailMap, validate_map};
use sp_network::{Network, NetworkBuilder};
use sp_routing::{Route, shortest_route};

use crate::error::{AppError, AppResult};

/// A compiled map plus the operations a planning session needs: look up
/// stations, remove disrupted links, and answer route queries.
///
/// Queries never abort the planner. Unknown names come back as errors the
/// caller can report and move past; an unreachable goal is an ordinary
/// `None` result.
#[derive(Debug)]
pub struct Planner {
    network: Network,
}

impl Planner {
    /// Compiles a map into a planner.
    ///
    /// The map is validated first, so a planner always starts from a
    /// well-formed network.
    pub fn from_map(map: &RailMap) -> AppResult<Self> {
        validate_map(map).map_err(MapError::Validation)?;

        let mut builder = NetworkBuilder::new();
        let mut station_map = HashMap::new();
        for name in &map.stations {
            let id = builder.add_station(name.as_str());
            station_map.insert(name.as_str(), id);
        }

        for link in &map.links {
            let from = *station_map
                .get(link.from.as_str())
                .ok_or_else(|| AppError::Compile(format!("Station not found: {}", link.from)))?;
            let to = *station_map
                .get(link.to.as_str())
                .ok_or_else(|| AppError::Compile(format!("Station not found: {}", link.to)))?;
            builder.link(from, to, link.minutes);
        }

        let network = builder.build()?;
        tracing::debug!(
            "compiled map '{}': {} stations, {} links",
            map.name,
            network.station_count(),
            network.graph().link_count()
        );
        Ok(Self { network })
    }

    /// The compiled network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Resolves a station name, ignoring surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.network.registry().lookup(name.trim())
    }

    /// Removes the link between two named stations, in both directions.
    ///
    /// Unknown names fail with [`AppError::UnknownStation`] naming the first
    /// one that did not resolve; the network is left untouched. Removing a
    /// link that does not exist is a no-op.
    pub fn apply_disruption(&mut self, from: &str, to: &str) -> AppResult<()> {
        let a = self
            .lookup(from)
            .ok_or_else(|| AppError::UnknownStation(from.trim().to_string()))?;
        let b = self
            .lookup(to)
            .ok_or_else(|| AppError::UnknownStation(to.trim().to_string()))?;
        self.network.remove_link(a, b);
        tracing::debug!("disrupted link {} - {}", from.trim(), to.trim());
        Ok(())
    }

    /// Answers a route query between two named stations.
    ///
    /// `Ok(None)` means both stations exist but no sequence of links connects
    /// them. An unknown name on either side fails with
    /// [`AppError::InvalidQuery`].
    pub fn route(&self, from: &str, to: &str) -> AppResult<Option<Route>> {
        let (a, b) = match (self.lookup(from), self.lookup(to)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(AppError::InvalidQuery {
                    from: from.trim().to_string(),
                    to: to.trim().to_string(),
                });
            }
        };
        Ok(shortest_route(self.network.graph(), a, b))
    }

    /// Resolves the station names along a route, in order.
    pub fn route_names<'a>(&'a self, route: &Route) -> Vec<&'a str> {
        route
            .stations
            .iter()
            .filter_map(|&s| self.network.registry().name(s))
            .collect()
    }
}
