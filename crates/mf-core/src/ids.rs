use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used across the capacity graph.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// `index` must be below `u32::MAX`; the graph builder enforces this by
    /// rejecting graphs with that many nodes or edges. Use
    /// `checked_from_index` where the bound is not already guaranteed.
    pub fn from_index(index: u32) -> Self {
        debug_assert!(index < u32::MAX, "id index {index} out of range");
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Create an Id from a 0-based index, or `None` if `index + 1` overflows.
    pub fn checked_from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Create an Id from a `usize` position, if it fits.
    pub fn from_usize(index: usize) -> Option<Self> {
        u32::try_from(index).ok().and_then(Self::checked_from_index)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a `usize`, for slice access.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeId = Id;
pub type EdgeId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(id.as_usize(), i as usize);
        }
    }

    #[test]
    fn from_usize_rejects_overflow() {
        assert_eq!(Id::from_usize(7), Some(Id::from_index(7)));
        assert_eq!(Id::from_usize(u32::MAX as usize), None);
    }

    #[test]
    fn checked_construction_rejects_last_index() {
        assert_eq!(Id::checked_from_index(0), Some(Id::from_index(0)));
        assert_eq!(
            Id::checked_from_index(u32::MAX - 1).map(Id::index),
            Some(u32::MAX - 1)
        );
        assert_eq!(Id::checked_from_index(u32::MAX), None);
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}
