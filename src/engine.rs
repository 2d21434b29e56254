//! The generation engine.
//!
//! [`SeatingEngine`] owns the population, the score array, and the
//! adaptive mutation rate, and advances them one generation at a time:
//!
//! 1. score every layout fresh
//! 2. rank ascending (stable), keeping scores and layouts index-aligned
//! 3. mark the lower half culled
//! 4. ratchet the mutation rate when the survivor set is flat
//! 5. mutate each survivor with mutation-rate probability, rescoring
//!    mutated survivors immediately
//! 6. refill every culled slot by breeding two randomly chosen survivors
//!
//! The engine is resumable: [`run`](SeatingEngine::run) may be called
//! repeatedly and the population, mutation rate, and generation counter
//! carry over between calls. All randomness flows through one generator
//! seeded from the configuration, so a fixed seed reproduces the whole
//! trajectory.

use crate::config::{SeatingConfig, MAX_MUTATION_RATE};
use crate::layout::{random_population, Layout};
use crate::random::{create_rng, percent_chance};
use crate::{fitness, operators, ranking};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Snapshot of one generation, taken right after ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index within this engine.
    pub generation: usize,
    /// Highest score in the ranked population.
    pub best: i32,
    /// Lowest score in the ranked population.
    pub worst: i32,
    /// Arithmetic mean of all scores.
    pub average: f64,
    /// Mutation rate in effect after the stagnation check, in percent.
    pub mutation_rate: u32,
}

/// Evolves a population of seating layouts.
///
/// # Usage
///
/// ```
/// use u_seating::{SeatingConfig, SeatingEngine};
///
/// let config = SeatingConfig::new(4, 6)
///     .with_population_size(20)
///     .with_seat_pitch_in(36)
///     .with_row_pitch_in(36)
///     .with_mutation_rate(10)
///     .with_seed(42);
/// let mut engine = SeatingEngine::new(config);
/// let history = engine.run(10);
/// assert_eq!(history.len(), 10);
/// ```
pub struct SeatingEngine {
    config: SeatingConfig,
    population: Vec<Layout>,
    scores: Vec<i32>,
    mutation_rate: u32,
    generation: usize,
    rng: StdRng,
}

impl SeatingEngine {
    /// Creates an engine with a uniformly random initial population.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SeatingConfig::validate`] first to get a descriptive error).
    pub fn new(config: SeatingConfig) -> Self {
        config.validate().expect("invalid SeatingConfig");
        let mut rng = seeded_rng(&config);
        let population = random_population(
            config.population_size,
            config.rows,
            config.seats_per_row,
            &mut rng,
        );
        Self::from_parts(config, population, rng)
    }

    /// Creates an engine over a caller-built initial population.
    ///
    /// # Panics
    /// Panics if the configuration is invalid or the population does not
    /// match the configured size and dimensions.
    pub fn with_population(config: SeatingConfig, population: Vec<Layout>) -> Self {
        config.validate().expect("invalid SeatingConfig");
        assert_eq!(
            population.len(),
            config.population_size,
            "population size must match the configuration"
        );
        assert!(
            population
                .iter()
                .all(|l| l.rows() == config.rows && l.seats_per_row() == config.seats_per_row),
            "every layout must match the configured dimensions"
        );
        let rng = seeded_rng(&config);
        Self::from_parts(config, population, rng)
    }

    fn from_parts(config: SeatingConfig, population: Vec<Layout>, rng: StdRng) -> Self {
        let scores = population
            .iter()
            .map(|layout| fitness::score(layout, &config.geometry))
            .collect();
        let mutation_rate = config.mutation_rate;
        Self {
            config,
            population,
            scores,
            mutation_rate,
            generation: 0,
            rng,
        }
    }

    /// Advances the search by one generation and returns its statistics.
    pub fn step(&mut self) -> GenerationStats {
        let n = self.config.population_size;
        let half = n / 2;

        // Score fresh: mutation and breeding invalidated whatever the
        // previous generation computed.
        for (score, layout) in self.scores.iter_mut().zip(&self.population) {
            *score = fitness::score(layout, &self.config.geometry);
        }
        ranking::rank(&mut self.scores, &mut self.population);
        self.generation += 1;

        // A flat survivor set means the search sits at a local optimum;
        // raise mutation pressure to escape it.
        if self.scores[n - 1] == self.scores[half] && self.mutation_rate < MAX_MUTATION_RATE {
            self.mutation_rate += 1;
        }

        let stats = GenerationStats {
            generation: self.generation,
            best: self.scores[n - 1],
            worst: self.scores[0],
            average: ranking::average(&self.scores),
            mutation_rate: self.mutation_rate,
        };
        debug!(
            "generation {}: best={} worst={} avg={:.2} mutation_rate={}%",
            stats.generation, stats.best, stats.worst, stats.average, stats.mutation_rate
        );

        // Survivors may mutate; a mutated survivor is rescored at once so
        // breeding works against current values.
        for i in half..n {
            if percent_chance(&mut self.rng, self.mutation_rate) {
                operators::mutate(&mut self.population[i], &mut self.rng);
                self.scores[i] = fitness::score(&self.population[i], &self.config.geometry);
            }
        }

        // Refill culled slots from randomly paired survivors. The
        // assignment drops the culled layout as its replacement moves in.
        for slot in 0..half {
            let (a, b) = self.pick_parents();
            let child = operators::breed(&self.population[a], &self.population[b], &mut self.rng);
            self.population[slot] = child;
        }

        stats
    }

    /// Runs `generations` consecutive steps and returns their statistics.
    ///
    /// The engine keeps its state afterwards, so a caller may keep
    /// extending the run.
    pub fn run(&mut self, generations: usize) -> Vec<GenerationStats> {
        let mut history = Vec::with_capacity(generations);
        for _ in 0..generations {
            history.push(self.step());
        }
        history
    }

    /// Two survivor indices, distinct whenever the population is large
    /// enough to offer a choice.
    fn pick_parents(&mut self) -> (usize, usize) {
        let n = self.config.population_size;
        let half = n / 2;
        let first = self.rng.random_range(half..n);
        let mut second = self.rng.random_range(half..n);
        while first == second && n > 2 {
            second = self.rng.random_range(half..n);
        }
        (first, second)
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// The current population. Right after a step, the first
    /// `population_size / 2` slots hold freshly bred layouts.
    pub fn population(&self) -> &[Layout] {
        &self.population
    }

    /// Scores from the most recent evaluation, index-aligned with
    /// [`population`](Self::population). Slots refilled by breeding are
    /// rescored at the start of the next step.
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// The mutation rate currently in effect, in percent.
    pub fn mutation_rate(&self) -> u32 {
        self.mutation_rate
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

fn seeded_rng(config: &SeatingConfig) -> StdRng {
    match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
