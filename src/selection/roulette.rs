//! Roulette wheel selection.
//!
//! Selects chromosomes with probability proportional to their weight. Weights
//! start out equal to fitness and are renormalized on every draw. With
//! non-negative fitness repeated draws within one generation see the same
//! distribution; once a shift has happened the next draw renormalizes the
//! shifted weights.

use tracing::warn;

use crate::{chromosome::Chromosome, population::Population, rng::RandomNumberGenerator};

/// Sorts `population` descending by fitness, normalizes the weights and spins the
/// wheel once. Falls back to the first chromosome if rounding leaves the draw
/// above the final cumulative weight.
///
/// `population` must not be empty.
pub(crate) fn select<'a>(
    population: &'a mut Population,
    rng: &mut RandomNumberGenerator,
) -> &'a Chromosome {
    population.sort_by_fitness_descending();
    normalize_weights(population);

    let population: &'a Population = population;
    let draw = rng.uniform();

    let mut cumulative = 0.0;
    for chromosome in population.iter() {
        cumulative += chromosome.weight;
        if draw < cumulative {
            return chromosome;
        }
    }

    &population[0]
}

/// Scales the weights by their total, then shifts them up so the smallest is
/// zero if any is still negative. A zero or non-finite total leaves every
/// chromosome equally likely.
pub(crate) fn normalize_weights(population: &mut Population) {
    let total = population.sum_weights();
    if total == 0.0 || !total.is_finite() {
        let uniform = 1.0 / population.len() as f64;
        population
            .iter_mut()
            .for_each(|chromosome| chromosome.weight = uniform);
        return;
    }

    population
        .iter_mut()
        .for_each(|chromosome| chromosome.weight /= total);

    let negatives = population.count_negative_weights();
    if negatives > 0 {
        let min = population.min_weight();
        warn!(
            negatives,
            min_weight = min,
            "Population contains chromosomes with negative weight, shifting roulette weights"
        );
        population.shift_weights(-min);
    }
}
