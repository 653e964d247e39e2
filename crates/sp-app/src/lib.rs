//! Shared application service layer for spoorplan.
//!
//! This crate provides a unified interface for frontends, centralizing map
//! compilation, disruption handling, route queries, and the line-oriented
//! planning session protocol.

pub mod error;
pub mod planner;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use planner::Planner;
pub use session::{run_session, SessionSummary};
