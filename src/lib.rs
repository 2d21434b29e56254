//! Distance-constrained theater seating optimization via genetic search.
//!
//! Searches for seating arrangements that seat as many people as possible
//! in a theater while keeping occupied seats at least six feet apart. The
//! search is a generational genetic algorithm with rank-based truncation
//! selection: every generation the population is scored and ranked, the
//! lower half is culled, survivors may mutate, and the culled slots are
//! refilled by row-splice breeding of surviving layouts. When the
//! survivor set goes flat, the mutation rate ratchets upward to escape
//! local optima.
//!
//! # Key Types
//!
//! - [`SeatingConfig`]: run parameters — dimensions, geometry, rates
//! - [`Layout`]: one candidate seating grid
//! - [`SeatingEngine`]: owns the population and advances it by generations
//! - [`GenerationStats`]: per-generation best/worst/average snapshot
//!
//! # Example
//!
//! ```
//! use u_seating::{SeatingConfig, SeatingEngine};
//!
//! let config = SeatingConfig::new(8, 12)
//!     .with_population_size(40)
//!     .with_seat_pitch_in(30)
//!     .with_row_pitch_in(42)
//!     .with_mutation_rate(10)
//!     .with_seed(42);
//! let mut engine = SeatingEngine::new(config);
//! let history = engine.run(25);
//! println!("best score: {}", history.last().unwrap().best);
//! println!("{}", engine.population().last().unwrap());
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Mühlenbein & Schlierkamp-Voosen (1993), *Predictive Models for the
//!   Breeder Genetic Algorithm* (truncation selection)

pub mod config;
pub mod engine;
pub mod fitness;
pub mod layout;
pub mod operators;
pub mod random;
pub mod ranking;

pub use config::{ConfigError, SeatingConfig, MAX_MUTATION_RATE, MIN_MUTATION_RATE};
pub use engine::{GenerationStats, SeatingEngine};
pub use fitness::{score, violation_count, MIN_SAFE_DISTANCE_FT};
pub use layout::{random_population, Geometry, Layout};
pub use ranking::{average, rank};
