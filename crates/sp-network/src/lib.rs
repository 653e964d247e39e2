//! sp-network: station registry and link graph for spoorplan.
//!
//! Provides:
//! - Station registry with name→identity lookup
//! - Undirected weighted adjacency store with pair-wise link removal
//! - Incremental network builder with validation
//!
//! # Example
//!
//! ```
//! use sp_network::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! let amsterdam = builder.add_station("Amsterdam");
//! let utrecht = builder.add_station("Utrecht");
//! builder.link(amsterdam, utrecht, 26);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.registry().lookup("Utrecht"), Some(utrecht));
//! assert_eq!(network.graph().neighbors(amsterdam).len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod network;
pub mod station;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::NetworkError;
pub use graph::{Link, RailGraph};
pub use network::Network;
pub use station::{Station, StationRegistry};
