//! Indexed binary min-heap keyed by travel minutes.
//!
//! Every station of a network occupies one slot from construction on, and a
//! position table maps station index to its current slot. That table is what
//! makes [`DistanceHeap::decrease`] O(log n): re-keying a station starts at
//! its slot instead of searching the backing storage. The table and the slots
//! are updated together on every swap and must never drift apart.

use sp_core::StationId;

/// One heap slot: a station and its current key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub station: StationId,
    pub minutes: u32,
}

/// Binary min-heap over all stations of a network with O(log n) decrease-key.
///
/// Popped entries are parked just past the live region rather than removed,
/// so membership stays a single comparison against the live length.
#[derive(Debug)]
pub struct DistanceHeap {
    /// Slots `0..len` are live; slots `len..` hold popped entries.
    entries: Vec<HeapEntry>,
    /// `position[station.index()]` is the slot currently holding that station.
    position: Vec<usize>,
    len: usize,
}

impl DistanceHeap {
    /// Creates a heap holding every station of a `station_count`-station
    /// network, all keyed at `u32::MAX`.
    pub fn new(station_count: usize) -> Self {
        let entries = (0..station_count)
            .map(|i| HeapEntry {
                station: StationId::from_index(i as u32),
                minutes: u32::MAX,
            })
            .collect();
        Self {
            entries,
            position: (0..station_count).collect(),
            len: station_count,
        }
    }

    /// Number of stations not yet popped.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `station` is still in the heap.
    pub fn contains(&self, station: StationId) -> bool {
        self.position
            .get(station.index() as usize)
            .is_some_and(|&slot| slot < self.len)
    }

    /// Removes and returns the entry with the smallest key, or `None` once
    /// every station has been popped.
    pub fn pop_min(&mut self) -> Option<HeapEntry> {
        if self.len == 0 {
            return None;
        }
        let last = self.len - 1;
        self.swap_slots(0, last);
        self.len = last;
        self.sift_down(0);
        Some(self.entries[last])
    }

    /// Lowers the key of `station` to `minutes` and restores heap order.
    ///
    /// The station must still be in the heap and the new key must not exceed
    /// the old one; the relaxation loop driving this heap guarantees both.
    pub fn decrease(&mut self, station: StationId, minutes: u32) {
        let slot = self.position[station.index() as usize];
        debug_assert!(slot < self.len, "decrease on a popped station");
        debug_assert!(
            minutes <= self.entries[slot].minutes,
            "decrease would raise the key"
        );
        self.entries[slot].minutes = minutes;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].minutes <= self.entries[slot].minutes {
                break;
            }
            self.swap_slots(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.len && self.entries[left].minutes < self.entries[smallest].minutes {
                smallest = left;
            }
            if right < self.len && self.entries[right].minutes < self.entries[smallest].minutes {
                smallest = right;
            }
            if smallest == slot {
                return;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.position[self.entries[a].station.index() as usize] = a;
        self.position[self.entries[b].station.index() as usize] = b;
    }
}
