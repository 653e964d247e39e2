//! A computed journey between two stations.

use sp_core::StationId;

/// An ordered walk through the network together with its total travel time.
///
/// The origin is always present; a route from a station to itself holds that
/// single station and zero minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations visited in order, origin first, goal last.
    pub stations: Vec<StationId>,
    /// Total travel time over all links of the walk, in minutes.
    pub minutes: u32,
}

impl Route {
    /// Number of stations on the route, origin and goal included.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of links traversed.
    pub fn leg_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}
