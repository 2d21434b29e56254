//! Rank ordering and population statistics.
//!
//! Selection here is rank-based truncation: the population is sorted by
//! score and the engine culls the lower half. This module provides the
//! stable sort that keeps the score array and the population index-aligned,
//! plus the score average reported to drivers.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm" (truncation selection)

use crate::layout::Layout;

/// Sorts `scores` ascending and applies the same permutation to
/// `population`.
///
/// The sort is stable: layouts with equal scores keep their relative
/// order, which the engine's stagnation check relies on.
///
/// # Panics
/// Panics if the two vectors differ in length.
pub fn rank(scores: &mut Vec<i32>, population: &mut Vec<Layout>) {
    assert_eq!(
        scores.len(),
        population.len(),
        "scores and population must be index-aligned"
    );
    let mut paired: Vec<(i32, Layout)> = scores.drain(..).zip(population.drain(..)).collect();
    paired.sort_by_key(|pair| pair.0);
    for (score, layout) in paired {
        scores.push(score);
        population.push(layout);
    }
}

/// Arithmetic mean of a score array.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn average(scores: &[i32]) -> f64 {
    assert!(!scores.is_empty(), "cannot average an empty score array");
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}
