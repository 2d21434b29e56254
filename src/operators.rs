//! Genetic operators for seating layouts.
//!
//! Mutation flips individual seats at a small per-cell rate; breeding
//! splices two parents row by row with one split point per row.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

use crate::layout::Layout;
use crate::random::percent_chance;
use rand::Rng;

/// Lower bound of the per-cell flip intensity, in percent (inclusive).
pub const MIN_INTENSITY: u32 = 1;

/// Upper bound of the per-cell flip intensity, in percent (inclusive).
pub const MAX_INTENSITY: u32 = 10;

/// Mutates a layout in place.
///
/// Draws a flip intensity uniformly from
/// [[`MIN_INTENSITY`], [`MAX_INTENSITY`]] percent, then flips every cell
/// independently with that probability. The intensity is the small
/// per-cell rate; whether a surviving layout is mutated at all is decided
/// separately by the engine's per-genome mutation rate — the two rates
/// must not be conflated.
pub fn mutate<R: Rng>(layout: &mut Layout, rng: &mut R) {
    let intensity = rng.random_range(MIN_INTENSITY..=MAX_INTENSITY);
    mutate_with_intensity(layout, intensity, rng);
}

/// Flips every cell independently with probability `intensity` percent.
pub fn mutate_with_intensity<R: Rng>(layout: &mut Layout, intensity: u32, rng: &mut R) {
    for row in 0..layout.rows() {
        for seat in 0..layout.seats_per_row() {
            if percent_chance(rng, intensity) {
                layout.flip(row, seat);
            }
        }
    }
}

/// Breeds two parent layouts into a new one, row by row.
///
/// For each row independently, a fair coin picks the base parent and a
/// split point is drawn from the middle third of the row
/// (`[seats/3, 2*seats/3)`). Seats before the split come from the base
/// parent, seats at and after it from the other. Parents are read-only.
///
/// # Panics
/// Panics if the parents' dimensions differ.
pub fn breed<R: Rng>(parent_a: &Layout, parent_b: &Layout, rng: &mut R) -> Layout {
    assert!(
        parent_a.same_dimensions(parent_b),
        "parents must share dimensions"
    );
    let rows = parent_a.rows();
    let seats = parent_a.seats_per_row();
    let mut child = Layout::empty(rows, seats);
    for row in 0..rows {
        let (base, other) = if rng.random_bool(0.5) {
            (parent_a, parent_b)
        } else {
            (parent_b, parent_a)
        };
        let split = split_point(seats, rng);
        for seat in 0..seats {
            let source = if seat < split { base } else { other };
            child.set(row, seat, source.is_occupied(row, seat));
        }
    }
    child
}

/// Split point from the middle third of a row: `[seats/3, 2*seats/3)`.
///
/// Rows too short to have a middle third split at the lower bound.
fn split_point<R: Rng>(seats: usize, rng: &mut R) -> usize {
    let lo = seats / 3;
    let hi = seats * 2 / 3;
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
