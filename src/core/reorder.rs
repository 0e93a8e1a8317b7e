//! # Reorder Computer
//!
//! Moves one element of a list next to another. This is the whole
//! in-list reorder algorithm; everything else in the crate decides *when*
//! to call it.
//!
//! ```text
//! [A, B, C, D]  move A → C   (C after A: insert after)   [B, C, A, D]
//! [A, B, C, D]  move D → B   (B before D: insert before)  [A, D, B, C]
//! ```
//!
//! Moving down lands after the hovered element, moving up lands before it.
//! Missing elements and self-moves leave the list untouched: a caller racing
//! a stale reference against a reorder that already happened just gets a
//! no-op.

/// A move that was actually applied, as indices into the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Index of the source before the move.
    pub from: usize,
    /// Index of the source after the move.
    pub to: usize,
}

/// Moves `source` next to `destination` in place.
///
/// Returns `None` (and leaves `list` alone) when either element is missing
/// or both resolve to the same index.
pub fn move_item<T: PartialEq>(list: &mut Vec<T>, source: &T, destination: &T) -> Option<Move> {
    let from = list.iter().position(|item| item == source)?;
    let target = list.iter().position(|item| item == destination)?;
    if from == target {
        return None;
    }

    // Insertion offset counted in the list *before* removal: one past the
    // destination when moving forward, the destination itself when moving back.
    let offset = if target > from { target + 1 } else { target };

    let item = list.remove(from);
    let to = if offset > from { offset - 1 } else { offset };
    list.insert(to, item);

    Some(Move { from, to })
}

/// Returns a reordered copy of `list`. See [`move_item`].
pub fn reorder<T: PartialEq + Clone>(list: &[T], source: &T, destination: &T) -> Vec<T> {
    let mut next = list.to_vec();
    move_item(&mut next, source, destination);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Vec<char> {
        vec!['A', 'B', 'C', 'D']
    }

    #[test]
    fn test_moving_down_lands_after_destination() {
        assert_eq!(reorder(&abcd(), &'A', &'C'), vec!['B', 'C', 'A', 'D']);
    }

    #[test]
    fn test_moving_up_lands_before_destination() {
        assert_eq!(reorder(&abcd(), &'D', &'B'), vec!['A', 'D', 'B', 'C']);
    }

    #[test]
    fn test_adjacent_swap_forward_and_back() {
        assert_eq!(reorder(&abcd(), &'A', &'B'), vec!['B', 'A', 'C', 'D']);
        assert_eq!(reorder(&abcd(), &'B', &'A'), vec!['B', 'A', 'C', 'D']);
    }

    #[test]
    fn test_move_to_last_position() {
        assert_eq!(reorder(&abcd(), &'B', &'D'), vec!['A', 'C', 'D', 'B']);
    }

    #[test]
    fn test_move_to_first_position() {
        assert_eq!(reorder(&abcd(), &'C', &'A'), vec!['C', 'A', 'B', 'D']);
    }

    #[test]
    fn test_self_move_is_noop() {
        let mut list = abcd();
        assert_eq!(move_item(&mut list, &'B', &'B'), None);
        assert_eq!(list, abcd());
    }

    #[test]
    fn test_missing_source_is_noop() {
        let mut list = abcd();
        assert_eq!(move_item(&mut list, &'Z', &'B'), None);
        assert_eq!(list, abcd());
    }

    #[test]
    fn test_missing_destination_is_noop() {
        let mut list = abcd();
        assert_eq!(move_item(&mut list, &'A', &'Z'), None);
        assert_eq!(list, abcd());
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut list: Vec<char> = Vec::new();
        assert_eq!(move_item(&mut list, &'A', &'B'), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_reports_indices() {
        let mut list = abcd();
        assert_eq!(move_item(&mut list, &'A', &'C'), Some(Move { from: 0, to: 2 }));
        let mut list = abcd();
        assert_eq!(move_item(&mut list, &'D', &'B'), Some(Move { from: 3, to: 1 }));
    }

    #[test]
    fn test_result_is_permutation_with_source_adjacent_to_destination() {
        let list: Vec<u32> = (0..7).collect();
        for a in 0..7u32 {
            for b in 0..7u32 {
                if a == b {
                    continue;
                }
                let next = reorder(&list, &a, &b);

                let mut sorted = next.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, list, "not a permutation for ({a}, {b})");

                let pa = next.iter().position(|x| *x == a).unwrap();
                let pb = next.iter().position(|x| *x == b).unwrap();
                assert_eq!(pa.abs_diff(pb), 1, "({a}, {b}) produced {next:?}");
            }
        }
    }

    #[test]
    fn test_reverse_move_is_not_an_involution() {
        // A after C, then C after A: the pair stays adjacent but A never returns home.
        let once = reorder(&abcd(), &'A', &'C');
        assert_eq!(once, vec!['B', 'C', 'A', 'D']);
        let back = reorder(&once, &'C', &'A');
        assert_eq!(back, vec!['B', 'A', 'C', 'D']);
        assert_ne!(back, abcd());
    }
}
