//! Claimed-cell tracking shared by every agent of one maze.

use std::collections::HashSet;

use crate::types::GridPoint;

/// The set of grid cells already carved into by any path of one maze.
///
/// Claims are permanent for the maze's lifetime: backtracking un-visits a
/// cell for path purposes but never frees it for re-claiming. This is the
/// invariant that keeps paths from crossing or overlapping.
#[derive(Clone, Debug, Default)]
pub struct OccupancySet {
    claimed: HashSet<GridPoint>,
}

impl OccupancySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.claimed.contains(&point)
    }

    /// Claim `point`. Returns false (and leaves the set untouched) if it was
    /// already claimed; there is no way to release a claim.
    pub fn claim(&mut self, point: GridPoint) -> bool {
        self.claimed.insert(point)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_succeeds_once_then_rejects() {
        let mut occupancy = OccupancySet::new();
        let point = GridPoint::new(3, 4);

        assert!(!occupancy.contains(point));
        assert!(occupancy.claim(point));
        assert!(occupancy.contains(point));
        assert!(!occupancy.claim(point));
        assert_eq!(occupancy.len(), 1);
    }

    #[test]
    fn distinct_points_claim_independently() {
        let mut occupancy = OccupancySet::new();
        assert!(occupancy.claim(GridPoint::new(0, 1)));
        assert!(occupancy.claim(GridPoint::new(1, 0)));
        assert_eq!(occupancy.len(), 2);
    }
}
