use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable station identity used across the network and routing crates.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<StationId>` to be pointer-optimized
///
/// Identities are dense: a network with N stations uses indices `0..N`,
/// which lets the routing engine address per-station arrays directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(NonZeroU32);

impl StationId {
    /// Create a StationId from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.index())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_any_index(i in 0u32..u32::MAX) {
            prop_assert_eq!(StationId::from_index(i).index(), i);
        }
    }
}
