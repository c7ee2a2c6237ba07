//! Rank selection.
//!
//! Every chromosome is weighted by its 1-based position in the current order.
//! The evolver keeps the population sorted ascending by fitness, so the best
//! chromosome carries the largest weight and the worst still carries a weight of one.

use crate::{chromosome::Chromosome, population::Population, rng::RandomNumberGenerator};

/// Draws an integer in `[0, n(n+1)/2)` and returns the first chromosome whose
/// cumulative rank weight exceeds it.
///
/// `population` must not be empty.
pub(crate) fn select<'a>(
    population: &'a mut Population,
    rng: &mut RandomNumberGenerator,
) -> &'a Chromosome {
    for (rank, chromosome) in population.iter_mut().enumerate() {
        chromosome.weight = rank as f64 + 1.0;
    }

    let population: &'a Population = population;
    let total = population.sum_weights();
    let draw = rng.index(total as usize) as f64;

    let mut cumulative = 0.0;
    for chromosome in population.iter() {
        cumulative += chromosome.weight;
        if draw < cumulative {
            return chromosome;
        }
    }

    // Unreachable for integral rank weights; the highest rank is the safest fallback.
    &population[population.len() - 1]
}
