//! Adjacency storage for the rail network.

use sp_core::StationId;

/// One directed adjacency record: a reachable neighbor and the travel
/// minutes of the connecting track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub station: StationId,
    pub minutes: u32,
}

/// Undirected weighted graph over a fixed station set.
///
/// Each undirected link is stored as two directed records, one in each
/// endpoint's adjacency list. Insertion and removal always touch both
/// sides in the same call, so the relation is symmetric whenever no
/// mutation is in flight.
///
/// Lists are owned growable vectors; removal is a scan-and-swap-remove,
/// which keeps O(degree) cost without any node lifetime bookkeeping.
#[derive(Debug, Clone)]
pub struct RailGraph {
    adjacency: Vec<Vec<Link>>,
}

impl RailGraph {
    /// Empty graph spanning `station_count` stations.
    pub(crate) fn new(station_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); station_count],
        }
    }

    /// Number of stations this graph spans.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Insert an undirected link between `a` and `b`.
    ///
    /// No deduplication is performed: inserting the same pair twice yields
    /// parallel records, which shortest-path search treats as redundant.
    pub fn add_link(&mut self, a: StationId, b: StationId, minutes: u32) {
        self.adjacency[a.index() as usize].push(Link {
            station: b,
            minutes,
        });
        self.adjacency[b.index() as usize].push(Link {
            station: a,
            minutes,
        });
    }

    /// Remove an undirected link between `a` and `b`.
    ///
    /// At most one record is removed per direction: the first whose station
    /// matches, regardless of minutes. A direction with no matching record
    /// is left untouched, so removing an absent or half-present link is a
    /// silent no-op. This never fails.
    pub fn remove_link(&mut self, a: StationId, b: StationId) {
        if let Some(records) = self.adjacency.get_mut(a.index() as usize) {
            Self::remove_directed(records, b);
        }
        if let Some(records) = self.adjacency.get_mut(b.index() as usize) {
            Self::remove_directed(records, a);
        }
    }

    fn remove_directed(records: &mut Vec<Link>, target: StationId) {
        if let Some(slot) = records.iter().position(|link| link.station == target) {
            records.swap_remove(slot);
        }
    }

    /// Neighbors of `a` with their travel minutes.
    ///
    /// Order is unspecified but stable while the graph is not mutated.
    /// An out-of-range identity has no neighbors.
    pub fn neighbors(&self, a: StationId) -> &[Link] {
        self.adjacency
            .get(a.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
