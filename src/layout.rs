//! Seating layout data entities.
//!
//! [`Layout`] is one candidate seating arrangement: a `rows × seats_per_row`
//! grid of occupied/empty cells backed by a single contiguous buffer.
//! [`Geometry`] carries the physical pitches shared by every layout in a
//! run and computes the center-to-center distance between seats.

use rand::Rng;
use std::fmt;

/// Physical theater geometry shared by every layout in a run.
///
/// Pitches are center-to-center distances in inches and stay fixed for
/// the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Seat pitch within a row (inches).
    pub seat_pitch_in: u32,
    /// Pitch between adjacent rows (inches).
    pub row_pitch_in: u32,
}

impl Geometry {
    pub fn new(seat_pitch_in: u32, row_pitch_in: u32) -> Self {
        Self {
            seat_pitch_in,
            row_pitch_in,
        }
    }

    /// Distance in feet between the centers of two seats.
    ///
    /// Pitches are truncated to whole feet before the norm, and the row
    /// delta is scaled by the seat pitch while the seat delta is scaled by
    /// the row pitch. Both quirks are inherited behavior that scoring
    /// depends on near the six-foot boundary.
    pub fn seat_distance_ft(&self, row1: usize, seat1: usize, row2: usize, seat2: usize) -> f64 {
        let seat_ft = (self.seat_pitch_in / 12) as f64;
        let row_ft = (self.row_pitch_in / 12) as f64;
        let dx = row1.abs_diff(row2) as f64 * seat_ft;
        let dy = seat1.abs_diff(seat2) as f64 * row_ft;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One candidate seating arrangement.
///
/// Cells are stored row-major in a flat buffer; `true` means occupied.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    rows: usize,
    seats_per_row: usize,
    cells: Vec<bool>,
}

impl Layout {
    /// A fully unoccupied layout.
    pub fn empty(rows: usize, seats_per_row: usize) -> Self {
        Self {
            rows,
            seats_per_row,
            cells: vec![false; rows * seats_per_row],
        }
    }

    /// A layout with every cell drawn uniformly at random.
    pub fn random<R: Rng>(rows: usize, seats_per_row: usize, rng: &mut R) -> Self {
        let cells = (0..rows * seats_per_row)
            .map(|_| rng.random_bool(0.5))
            .collect();
        Self {
            rows,
            seats_per_row,
            cells,
        }
    }

    /// Builds a layout from explicit rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty or ragged.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        assert!(!rows.is_empty(), "layout needs at least one row");
        let seats_per_row = rows[0].len();
        assert!(seats_per_row > 0, "layout needs at least one seat per row");
        assert!(
            rows.iter().all(|r| r.len() == seats_per_row),
            "all rows must have the same length"
        );
        Self {
            rows: rows.len(),
            seats_per_row,
            cells: rows.concat(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn is_occupied(&self, row: usize, seat: usize) -> bool {
        self.cells[self.index(row, seat)]
    }

    pub fn set(&mut self, row: usize, seat: usize, occupied: bool) {
        let idx = self.index(row, seat);
        self.cells[idx] = occupied;
    }

    /// Toggles a single seat between occupied and empty.
    pub fn flip(&mut self, row: usize, seat: usize) {
        let idx = self.index(row, seat);
        self.cells[idx] = !self.cells[idx];
    }

    /// Number of occupied seats.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether `other` has the same grid dimensions.
    pub fn same_dimensions(&self, other: &Layout) -> bool {
        self.rows == other.rows && self.seats_per_row == other.seats_per_row
    }

    fn index(&self, row: usize, seat: usize) -> usize {
        debug_assert!(row < self.rows && seat < self.seats_per_row);
        row * self.seats_per_row + seat
    }
}

impl fmt::Display for Layout {
    /// Renders the grid as space-separated `0`/`1` tokens, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for seat in 0..self.seats_per_row {
                if seat > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(self.is_occupied(row, seat)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a population of `count` uniformly random layouts sharing the
/// same dimensions.
pub fn random_population<R: Rng>(
    count: usize,
    rows: usize,
    seats_per_row: usize,
    rng: &mut R,
) -> Vec<Layout> {
    (0..count)
        .map(|_| Layout::random(rows, seats_per_row, rng))
        .collect()
}
