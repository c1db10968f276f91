//! Ring detection.
//!
//! A ring is 8 stones of one player filling a 3×3 block whose center holds
//! none of that player's stones. A player without a ring has lost.

use std::collections::BTreeSet;

use crate::coord::Coord;

/// Offsets from a ring's bottom-left stone to its other 7 stones.
const RING_OFFSETS: [Coord; 7] = [
    Coord::new(0, 1),
    Coord::new(0, 2),
    Coord::new(1, 0),
    Coord::new(1, 2),
    Coord::new(2, 0),
    Coord::new(2, 1),
    Coord::new(2, 2),
];

/// Offset from a ring's bottom-left stone to its empty center.
const RING_CENTER: Coord = Coord::new(1, 1);

/// Find a ring among `stones`, returning its bottom-left corner.
///
/// Each stone is tried as a candidate corner, so a ring in any cluster is
/// found; the first match in coordinate order wins.
pub fn find_ring(stones: &BTreeSet<Coord>) -> Option<Coord> {
    stones.iter().copied().find(|&anchor| {
        !stones.contains(&(anchor + RING_CENTER))
            && RING_OFFSETS
                .iter()
                .all(|&offset| stones.contains(&(anchor + offset)))
    })
}

/// Whether `stones` contain at least one ring.
#[inline]
pub fn has_ring(stones: &BTreeSet<Coord>) -> bool {
    find_ring(stones).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The 8 cells around `center`.
    fn ring_around(center: Coord) -> BTreeSet<Coord> {
        let mut stones = BTreeSet::new();
        for dc in -1..=1 {
            for dr in -1..=1 {
                if (dc, dr) != (0, 0) {
                    stones.insert(center + Coord::new(dc, dr));
                }
            }
        }
        stones
    }

    #[test]
    fn test_ring_found_at_bottom_left() {
        let stones = ring_around(Coord::new(5, 5));
        assert_eq!(find_ring(&stones), Some(Coord::new(4, 4)));
        assert!(has_ring(&stones));
    }

    #[test]
    fn test_any_missing_stone_breaks_ring() {
        let full = ring_around(Coord::new(5, 5));
        for missing in &full {
            let mut stones = full.clone();
            stones.remove(missing);
            assert!(!has_ring(&stones), "ring survived without {missing}");
        }
    }

    #[test]
    fn test_filled_center_is_not_a_ring() {
        let mut stones = ring_around(Coord::new(5, 5));
        stones.insert(Coord::new(5, 5));
        assert!(!has_ring(&stones));
    }

    #[test]
    fn test_second_cluster_ring_found() {
        let mut stones = ring_around(Coord::new(12, 14));
        // Unrelated stones earlier in coordinate order.
        stones.insert(Coord::new(1, 1));
        stones.insert(Coord::new(2, 1));
        assert_eq!(find_ring(&stones), Some(Coord::new(11, 13)));
    }

    #[test]
    fn test_overlapping_blocks_share_stones() {
        // Two rings side by side sharing a column.
        let mut stones = ring_around(Coord::new(5, 5));
        stones.extend(ring_around(Coord::new(7, 5)));
        assert_eq!(find_ring(&stones), Some(Coord::new(4, 4)));

        // Filling one center still leaves the other ring.
        stones.insert(Coord::new(5, 5));
        assert_eq!(find_ring(&stones), Some(Coord::new(6, 4)));
    }

    #[test]
    fn test_empty_set_has_no_ring() {
        assert_eq!(find_ring(&BTreeSet::new()), None);
    }
}
