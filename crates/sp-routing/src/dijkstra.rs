//! Shortest-path exploration over a rail graph.
//!
//! [`explore`] runs Dijkstra's algorithm from one origin and settles every
//! station, not just a requested goal. The resulting [`PathTree`] then answers
//! any number of distance and route queries without touching the graph again,
//! which is the shape the interactive session wants: one exploration per
//! query pair, several lookups against it.

use crate::heap::DistanceHeap;
use crate::route::Route;
use sp_core::StationId;
use sp_network::RailGraph;

/// Distance value meaning "no path found yet".
const UNREACHED: u32 = u32::MAX;

/// All shortest paths out of one origin station.
#[derive(Debug)]
pub struct PathTree {
    origin: StationId,
    minutes: Vec<u32>,
    previous: Vec<Option<StationId>>,
}

impl PathTree {
    /// The station this tree was explored from.
    pub fn origin(&self) -> StationId {
        self.origin
    }

    /// Travel time from the origin to `station`, or `None` when no sequence
    /// of links connects them.
    pub fn minutes_to(&self, station: StationId) -> Option<u32> {
        match self.minutes.get(station.index() as usize) {
            Some(&m) if m != UNREACHED => Some(m),
            _ => None,
        }
    }

    /// Reconstructs the route from the origin to `goal` by walking the
    /// predecessor chain, or `None` when `goal` is unreachable.
    ///
    /// The origin itself is always reachable: its route holds the single
    /// origin station and zero minutes.
    pub fn route_to(&self, goal: StationId) -> Option<Route> {
        let minutes = self.minutes_to(goal)?;
        let mut stations = vec![goal];
        let mut cursor = goal;
        while let Some(prev) = self.previous[cursor.index() as usize] {
            stations.push(prev);
            cursor = prev;
        }
        stations.reverse();
        Some(Route { stations, minutes })
    }
}

/// Explores every shortest path out of `origin`.
///
/// The heap starts with all stations keyed at the unreached sentinel and the
/// origin decreased to zero; the loop drains it completely. Entries that pop
/// at the sentinel never gained a finite path and are skipped, both because
/// they have nothing to relax and because adding a link time to the sentinel
/// would wrap.
pub fn explore(graph: &RailGraph, origin: StationId) -> PathTree {
    let station_count = graph.station_count();
    let mut minutes = vec![UNREACHED; station_count];
    let mut previous = vec![None; station_count];
    let mut heap = DistanceHeap::new(station_count);

    if let Some(slot) = minutes.get_mut(origin.index() as usize) {
        *slot = 0;
        heap.decrease(origin, 0);
    }

    while let Some(entry) = heap.pop_min() {
        if entry.minutes == UNREACHED {
            continue;
        }
        for link in graph.neighbors(entry.station) {
            if !heap.contains(link.station) {
                continue;
            }
            let candidate = entry.minutes.saturating_add(link.minutes);
            let slot = link.station.index() as usize;
            if candidate < minutes[slot] {
                minutes[slot] = candidate;
                previous[slot] = Some(entry.station);
                heap.decrease(link.station, candidate);
            }
        }
    }

    PathTree {
        origin,
        minutes,
        previous,
    }
}

/// Shortest route between two stations in one call.
///
/// Equivalent to [`explore`] followed by [`PathTree::route_to`]; prefer the
/// two-step form when several goals share an origin.
pub fn shortest_route(graph: &RailGraph, origin: StationId, goal: StationId) -> Option<Route> {
    explore(graph, origin).route_to(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_network::{Network, NetworkBuilder};

    /// Diamond with a slow top edge:
    ///
    /// ```text
    ///       10        1
    ///    A ---- B  B ---- D
    ///    A ---- C  C ---- D
    ///       2         3
    /// ```
    fn diamond() -> (Network, [StationId; 4]) {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_station("A");
        let b = builder.add_station("B");
        let c = builder.add_station("C");
        let d = builder.add_station("D");
        builder.link(a, b, 10);
        builder.link(a, c, 2);
        builder.link(b, d, 1);
        builder.link(c, d, 3);
        let network = builder.build().unwrap();
        (network, [a, b, c, d])
    }

    #[test]
    fn picks_cheaper_of_two_paths() {
        let (network, [a, b, c, d]) = diamond();
        let tree = explore(network.graph(), a);

        assert_eq!(tree.minutes_to(d), Some(5));
        let route = tree.route_to(d).unwrap();
        assert_eq!(route.stations, vec![a, c, d]);
        assert_eq!(route.minutes, 5);
        // B is cheapest the long way around the diamond, not via its
        // direct link to A.
        assert_eq!(tree.minutes_to(b), Some(6));
        assert_eq!(tree.route_to(b).unwrap().stations, vec![a, c, d, b]);
    }

    #[test]
    fn origin_routes_to_itself() {
        let (network, [a, ..]) = diamond();
        let tree = explore(network.graph(), a);

        assert_eq!(tree.origin(), a);
        assert_eq!(tree.minutes_to(a), Some(0));
        let route = tree.route_to(a).unwrap();
        assert_eq!(route.stations, vec![a]);
        assert_eq!(route.minutes, 0);
    }

    #[test]
    fn disconnected_station_is_unreached() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_station("A");
        let b = builder.add_station("B");
        let island = builder.add_station("Island");
        builder.link(a, b, 4);
        let network = builder.build().unwrap();

        let tree = explore(network.graph(), a);
        assert_eq!(tree.minutes_to(island), None);
        assert!(tree.route_to(island).is_none());

        // From the island, nothing but the island itself is reachable.
        let tree = explore(network.graph(), island);
        assert_eq!(tree.minutes_to(a), None);
        assert_eq!(tree.minutes_to(island), Some(0));
    }

    #[test]
    fn exploration_is_symmetric_on_undirected_links() {
        let (network, [a, _, _, d]) = diamond();
        let forward = explore(network.graph(), a);
        let backward = explore(network.graph(), d);

        assert_eq!(forward.minutes_to(d), backward.minutes_to(a));
        let there: Vec<_> = forward.route_to(d).unwrap().stations;
        let back: Vec<_> = backward.route_to(a).unwrap().stations.into_iter().rev().collect();
        assert_eq!(there, back);
    }

    #[test]
    fn removal_reroutes_queries() {
        let (mut network, [a, b, c, d]) = diamond();
        assert_eq!(shortest_route(network.graph(), a, d).unwrap().minutes, 5);

        network.remove_link(a, c);
        let route = shortest_route(network.graph(), a, d).unwrap();
        assert_eq!(route.stations, vec![a, b, d]);
        assert_eq!(route.minutes, 11);

        network.remove_link(a, b);
        assert!(shortest_route(network.graph(), a, d).is_none());
    }

    #[test]
    fn zero_minute_links_are_traversed() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_station("A");
        let b = builder.add_station("B");
        let c = builder.add_station("C");
        builder.link(a, b, 0);
        builder.link(b, c, 9);
        let network = builder.build().unwrap();

        let route = shortest_route(network.graph(), a, c).unwrap();
        assert_eq!(route.stations, vec![a, b, c]);
        assert_eq!(route.minutes, 9);
    }

    #[test]
    fn out_of_range_queries_are_unreached() {
        let (network, [a, ..]) = diamond();
        let tree = explore(network.graph(), a);
        assert_eq!(tree.minutes_to(StationId::from_index(99)), None);
        assert!(tree.route_to(StationId::from_index(99)).is_none());
    }

    #[test]
    fn empty_graph_explores_without_panic() {
        let network = NetworkBuilder::new().build().unwrap();
        let tree = explore(network.graph(), StationId::from_index(0));
        assert_eq!(tree.minutes_to(StationId::from_index(0)), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sp_network::NetworkBuilder;

    fn network_inputs() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (1usize..14).prop_flat_map(|station_count| {
            let link = (0..station_count, 0..station_count, 0u32..200);
            (Just(station_count), prop::collection::vec(link, 0..40))
        })
    }

    proptest! {
        /// Every route is a real walk: it starts at the origin, ends at the
        /// goal, each consecutive pair is joined by a link whose minutes
        /// account exactly for the distance step, and the total matches the
        /// reported distance. Unreached goals have no route.
        #[test]
        fn routes_are_walks_with_matching_cost((station_count, raw_links) in network_inputs()) {
            let mut builder = NetworkBuilder::new();
            let ids: Vec<_> = (0..station_count)
                .map(|i| builder.add_station(format!("S{}", i)))
                .collect();
            for &(a, b, minutes) in &raw_links {
                if a != b {
                    builder.link(ids[a], ids[b], minutes);
                }
            }
            let network = builder.build().unwrap();

            let origin = ids[0];
            let tree = explore(network.graph(), origin);

            for &goal in &ids {
                match tree.route_to(goal) {
                    Some(route) => {
                        prop_assert_eq!(route.stations[0], origin);
                        prop_assert_eq!(*route.stations.last().unwrap(), goal);
                        prop_assert_eq!(Some(route.minutes), tree.minutes_to(goal));

                        let mut total = 0u32;
                        for pair in route.stations.windows(2) {
                            let step = tree.minutes_to(pair[1]).unwrap()
                                - tree.minutes_to(pair[0]).unwrap();
                            prop_assert!(
                                network
                                    .graph()
                                    .neighbors(pair[0])
                                    .iter()
                                    .any(|l| l.station == pair[1] && l.minutes == step),
                                "no link covers the step {:?} -> {:?}",
                                pair[0],
                                pair[1]
                            );
                            total += step;
                        }
                        prop_assert_eq!(total, route.minutes);
                    }
                    None => prop_assert_eq!(tree.minutes_to(goal), None),
                }
            }
        }
    }
}
