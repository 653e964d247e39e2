//! Network-specific error types.

use sp_core::{SpError, StationId};

/// Network construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Two stations registered under the same display name.
    DuplicateStation { name: String },

    /// A station registered with an empty (or whitespace-only) name.
    EmptyStationName { index: usize },

    /// A link endpoint outside the registered station range.
    UnknownEndpoint {
        station: StationId,
        station_count: usize,
    },
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::DuplicateStation { name } => {
                write!(f, "Duplicate station name '{}'", name)
            }
            NetworkError::EmptyStationName { index } => {
                write!(f, "Station at position {} has an empty name", index)
            }
            NetworkError::UnknownEndpoint {
                station,
                station_count,
            } => {
                write!(
                    f,
                    "Link endpoint {} outside the station range 0..{}",
                    station, station_count
                )
            }
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<NetworkError> for SpError {
    fn from(err: NetworkError) -> Self {
        SpError::Invariant {
            what: err.to_string(),
        }
    }
}
