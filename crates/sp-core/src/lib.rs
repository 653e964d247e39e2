//! sp-core: stable foundation for spoorplan.
//!
//! Contains:
//! - ids (compact station identities shared by the network and routing crates)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SpError, SpResult};
pub use ids::StationId;
