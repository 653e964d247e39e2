//! Network validation logic.

use std::collections::HashSet;

use sp_core::{SpResult, StationId};

use crate::error::NetworkError;

/// Validate the station table: names must be non-empty and unique so the
/// name→identity mapping is a bijection.
pub(crate) fn validate_stations(names: &[String]) -> SpResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(NetworkError::EmptyStationName { index }.into());
        }
        if !seen.insert(name.as_str()) {
            return Err(NetworkError::DuplicateStation { name: name.clone() }.into());
        }
    }
    Ok(())
}

/// Validate that every queued link endpoint falls inside the registered
/// station range.
pub(crate) fn validate_links(
    links: &[(StationId, StationId, u32)],
    station_count: usize,
) -> SpResult<()> {
    for &(a, b, _) in links {
        for endpoint in [a, b] {
            if endpoint.index() as usize >= station_count {
                return Err(NetworkError::UnknownEndpoint {
                    station: endpoint,
                    station_count,
                }
                .into());
            }
        }
    }
    Ok(())
}
