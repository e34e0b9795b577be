//! Integer types shared by the graph model and the solvers.

/// Capacity of a validated edge. Negative input is rejected before it
/// ever reaches this type.
pub type Capacity = u64;

/// Amount of flow pushed through an edge or across the whole network.
pub type FlowValue = u64;

/// Raw capacity as supplied by callers, before validation.
pub type RawCapacity = i64;

/// Convert a raw capacity into a validated one, or `None` if it is negative.
pub fn checked_capacity(raw: RawCapacity) -> Option<Capacity> {
    Capacity::try_from(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_capacity_rejects_negative() {
        assert_eq!(checked_capacity(-1), None);
        assert_eq!(checked_capacity(0), Some(0));
        assert_eq!(checked_capacity(15), Some(15));
    }
}
