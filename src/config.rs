//! Run configuration.
//!
//! [`SeatingConfig`] holds every parameter that shapes a search: the
//! theater dimensions and geometry, the population size, and the initial
//! per-genome mutation rate. Validation happens at this boundary; the
//! engine assumes a validated configuration.

use crate::layout::Geometry;
use std::error::Error;
use std::fmt;

/// Lowest accepted initial mutation rate, in percent.
pub const MIN_MUTATION_RATE: u32 = 5;

/// Highest accepted mutation rate, in percent. The adaptive ratchet never
/// raises the rate past this cap.
pub const MAX_MUTATION_RATE: u32 = 20;

/// Configuration for a seating search.
///
/// # Builder Pattern
///
/// ```
/// use u_seating::SeatingConfig;
///
/// let config = SeatingConfig::new(8, 12)
///     .with_population_size(40)
///     .with_seat_pitch_in(30)
///     .with_row_pitch_in(42)
///     .with_mutation_rate(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingConfig {
    /// Number of layouts evolved together each generation.
    pub population_size: usize,

    /// Number of seat rows in the theater.
    pub rows: usize,

    /// Number of seats in every row.
    pub seats_per_row: usize,

    /// Physical pitches shared by every layout in the run.
    pub geometry: Geometry,

    /// Initial per-genome mutation rate in percent, within
    /// [[`MIN_MUTATION_RATE`], [`MAX_MUTATION_RATE`]]. May ratchet upward
    /// during the run when the survivor set stagnates.
    pub mutation_rate: u32,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            rows: 10,
            seats_per_row: 10,
            geometry: Geometry::new(24, 36),
            mutation_rate: MIN_MUTATION_RATE,
            seed: None,
        }
    }
}

impl SeatingConfig {
    /// A configuration for a `rows × seats_per_row` theater with default
    /// geometry and rates.
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self {
            rows,
            seats_per_row,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the seat pitch within a row, in inches.
    pub fn with_seat_pitch_in(mut self, inches: u32) -> Self {
        self.geometry.seat_pitch_in = inches;
        self
    }

    /// Sets the pitch between adjacent rows, in inches.
    pub fn with_row_pitch_in(mut self, inches: u32) -> Self {
        self.geometry.row_pitch_in = inches;
        self
    }

    /// Sets the full geometry at once.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the initial mutation rate in percent.
    pub fn with_mutation_rate(mut self, percent: u32) -> Self {
        self.mutation_rate = percent;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "population_size",
            });
        }
        if self.rows == 0 {
            return Err(ConfigError::InvalidDimension { field: "rows" });
        }
        if self.seats_per_row == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "seats_per_row",
            });
        }
        if self.geometry.seat_pitch_in == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "seat_pitch_in",
            });
        }
        if self.geometry.row_pitch_in == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "row_pitch_in",
            });
        }
        if !(MIN_MUTATION_RATE..=MAX_MUTATION_RATE).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate {
                rate: self.mutation_rate,
            });
        }
        Ok(())
    }
}

/// A configuration rejected at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A structural parameter is zero.
    InvalidDimension { field: &'static str },
    /// The initial mutation rate lies outside
    /// [[`MIN_MUTATION_RATE`], [`MAX_MUTATION_RATE`]].
    InvalidMutationRate { rate: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension { field } => {
                write!(f, "invalid dimension: {field} must be positive")
            }
            ConfigError::InvalidMutationRate { rate } => {
                write!(
                    f,
                    "mutation rate {rate}% outside {MIN_MUTATION_RATE}..={MAX_MUTATION_RATE}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
