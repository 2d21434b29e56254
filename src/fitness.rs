//! Fitness evaluation under the minimum-distance rule.
//!
//! A layout earns [`OCCUPANCY_REWARD`] for every occupied seat, loses
//! [`VIOLATION_PENALTY`] for every pair of occupied seats closer than
//! [`MIN_SAFE_DISTANCE_FT`], and earns a flat [`SAFETY_BONUS`] when no
//! violating pair exists at all. Scoring is a pure function of the layout
//! and geometry; the engine recomputes it fresh every generation because
//! mutation and breeding invalidate prior values.

use crate::layout::{Geometry, Layout};

/// Minimum allowed distance between occupied seats, in feet.
pub const MIN_SAFE_DISTANCE_FT: f64 = 6.0;

/// Reward for each occupied seat.
pub const OCCUPANCY_REWARD: i32 = 1;

/// Penalty per pair of occupied seats violating the distance rule.
pub const VIOLATION_PENALTY: i32 = 2;

/// Flat bonus for a layout with no violating pair.
pub const SAFETY_BONUS: i32 = 10;

/// Scores a layout.
pub fn score(layout: &Layout, geometry: &Geometry) -> i32 {
    let mut total = 0;
    let mut safe = true;
    for row in 0..layout.rows() {
        for seat in 0..layout.seats_per_row() {
            if !layout.is_occupied(row, seat) {
                continue;
            }
            total += OCCUPANCY_REWARD;
            let violations = violations_ahead(layout, geometry, row, seat);
            if violations != 0 {
                total -= VIOLATION_PENALTY * violations as i32;
                safe = false;
            }
        }
    }
    if safe {
        total += SAFETY_BONUS;
    }
    total
}

/// Total number of violating pairs in the layout.
pub fn violation_count(layout: &Layout, geometry: &Geometry) -> usize {
    let mut count = 0;
    for row in 0..layout.rows() {
        for seat in 0..layout.seats_per_row() {
            if layout.is_occupied(row, seat) {
                count += violations_ahead(layout, geometry, row, seat);
            }
        }
    }
    count
}

/// Violating partners strictly after `(row, seat)` in scan order.
///
/// Scanning only the remainder of the grid counts each pair exactly once
/// and never compares a seat against itself.
fn violations_ahead(layout: &Layout, geometry: &Geometry, row: usize, seat: usize) -> usize {
    let mut count = 0;
    for r in row..layout.rows() {
        let start = if r == row { seat + 1 } else { 0 };
        for s in start..layout.seats_per_row() {
            if layout.is_occupied(r, s)
                && geometry.seat_distance_ft(row, seat, r, s) < MIN_SAFE_DISTANCE_FT
            {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn three_ft_both() -> Geometry {
        Geometry::new(36, 36)
    }

    #[test]
    fn empty_layout_scores_the_safety_bonus() {
        let layout = Layout::empty(5, 8);
        assert_eq!(score(&layout, &three_ft_both()), SAFETY_BONUS);
    }

    #[test]
    fn spacious_full_layout_scores_occupancy_plus_bonus() {
        // 6 ft pitches put nearest neighbors exactly at the limit, which
        // is not a violation (the rule is strictly-less-than).
        let geometry = Geometry::new(72, 72);
        let mut layout = Layout::empty(3, 4);
        for row in 0..3 {
            for seat in 0..4 {
                layout.set(row, seat, true);
            }
        }
        assert_eq!(score(&layout, &geometry), 12 + SAFETY_BONUS);
    }

    #[test]
    fn adjacent_pair_in_one_row_violates() {
        // Two neighbors 3 ft apart: 2 occupied - 2 penalty, no bonus.
        let layout = Layout::from_rows(&[vec![true, true], vec![false, false]]);
        assert_eq!(violation_count(&layout, &three_ft_both()), 1);
        assert_eq!(score(&layout, &three_ft_both()), 0);
    }

    #[test]
    fn diagonal_pair_violates() {
        // sqrt(3² + 3²) ≈ 4.24 ft.
        let layout = Layout::from_rows(&[vec![true, false], vec![false, true]]);
        assert_eq!(violation_count(&layout, &three_ft_both()), 1);
        assert_eq!(score(&layout, &three_ft_both()), 0);
    }

    #[test]
    fn each_violating_pair_counts_once() {
        // Three seats in one row at 2 ft pitch: all three pairs violate.
        let geometry = Geometry::new(24, 24);
        let layout = Layout::from_rows(&[vec![true, true, true]]);
        assert_eq!(violation_count(&layout, &geometry), 3);
        assert_eq!(score(&layout, &geometry), 3 - 3 * VIOLATION_PENALTY);
    }

    #[test]
    fn one_violation_withholds_the_bonus_for_all() {
        // Row 0 holds a violating pair; the isolated seat in row 9 is far
        // from everything but the bonus is still withheld.
        let mut layout = Layout::empty(10, 2);
        layout.set(0, 0, true);
        layout.set(0, 1, true);
        layout.set(9, 0, true);
        assert_eq!(violation_count(&layout, &three_ft_both()), 1);
        assert_eq!(score(&layout, &three_ft_both()), 3 - VIOLATION_PENALTY);
    }

    #[test]
    fn pitch_feet_are_truncated() {
        // 71 in truncates to 5 ft, so adjacent seats violate even though
        // the true pitch is 5 ft 11 in.
        let layout = Layout::from_rows(&[vec![true, true]]);
        assert_eq!(score(&layout, &Geometry::new(71, 71)), 0);
        // 72 in is exactly 6 ft: no violation.
        assert_eq!(
            score(&layout, &Geometry::new(72, 72)),
            2 + SAFETY_BONUS
        );
    }

    #[test]
    fn row_delta_scales_by_seat_pitch() {
        // Same column, one row apart. 84/12 = 7 ft seat pitch keeps the
        // pair clear; swapping the pitches brings it to 3 ft.
        let layout = Layout::from_rows(&[vec![true], vec![true]]);
        assert_eq!(score(&layout, &Geometry::new(84, 36)), 2 + SAFETY_BONUS);
        assert_eq!(score(&layout, &Geometry::new(36, 84)), 0);
    }

    #[test]
    fn seat_delta_scales_by_row_pitch() {
        // Same row, adjacent seats: the gap follows the row pitch.
        let layout = Layout::from_rows(&[vec![true, true]]);
        assert_eq!(score(&layout, &Geometry::new(36, 84)), 2 + SAFETY_BONUS);
        assert_eq!(score(&layout, &Geometry::new(84, 36)), 0);
    }

    proptest! {
        #[test]
        fn empty_layouts_always_score_the_bonus(rows in 1usize..12, seats in 1usize..12) {
            let layout = Layout::empty(rows, seats);
            prop_assert_eq!(score(&layout, &Geometry::new(30, 40)), SAFETY_BONUS);
        }

        #[test]
        fn score_decomposes_into_reward_penalty_and_bonus(seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let layout = Layout::random(6, 6, &mut rng);
            let geometry = Geometry::new(30, 40);
            let violations = violation_count(&layout, &geometry) as i32;
            let expected = layout.occupied_count() as i32 * OCCUPANCY_REWARD
                - violations * VIOLATION_PENALTY
                + if violations == 0 { SAFETY_BONUS } else { 0 };
            prop_assert_eq!(score(&layout, &geometry), expected);
        }
    }
}
