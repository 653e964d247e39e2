//! Shortest-path routing over rail networks.
//!
//! The solver is Dijkstra's algorithm driven by an indexed binary min-heap
//! with O(log n) decrease-key ([`DistanceHeap`]). One [`explore`] call settles
//! every station reachable from an origin; the resulting [`PathTree`] answers
//! distance and route queries without touching the graph again. Unreachable
//! goals are an ordinary outcome, reported as `None`, never an error.

pub mod dijkstra;
pub mod heap;
pub mod route;

pub use dijkstra::{PathTree, explore, shortest_route};
pub use heap::{DistanceHeap, HeapEntry};
pub use route::Route;
