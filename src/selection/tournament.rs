//! Tournament selection.
//!
//! The population is shuffled and a group of random size is taken from its front.
//! The group member with the largest weight wins. Weights equal fitness unless a
//! custom policy has changed them, so the tournament is decided on fitness.

use crate::{
    chromosome::Chromosome,
    population::{max_weight, Population},
    rng::RandomNumberGenerator,
};

/// Returns the tournament group size for a population of `population_size`,
/// uniform over `[1, population_size - 1]` and never below one.
fn group_size(population_size: usize, rng: &mut RandomNumberGenerator) -> usize {
    if population_size > 1 {
        rng.index(population_size - 1) + 1
    } else {
        1
    }
}

/// Runs one tournament over a freshly shuffled `population`.
///
/// `population` must not be empty.
pub(crate) fn select<'a>(
    population: &'a mut Population,
    rng: &mut RandomNumberGenerator,
) -> &'a Chromosome {
    population.shuffle(rng);
    let size = group_size(population.len(), rng);

    let population: &'a Population = population;
    max_weight(&population[..size]).unwrap_or(&population[0])
}
