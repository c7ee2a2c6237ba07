//! # Population
//!
//! A `Population` is the ordered set of chromosomes evolved together. It owns its
//! chromosomes exclusively and offers the aggregate operations the selection
//! strategies are built on.
//!
//! After every evaluation pass the evolver leaves the population sorted ascending by
//! fitness, so the last chromosome is the current best.
//!
//! ## Example
//!
//! ```rust
//! use genetics_engine::population::Population;
//!
//! let population = Population::generate(3, 2, |i, j| (i * 10 + j) as f64).unwrap();
//!
//! assert_eq!(population.len(), 3);
//! assert_eq!(population[1].genes, vec![10.0, 11.0]);
//! ```

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// An ordered collection of chromosomes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Wraps an existing set of chromosomes.
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Generates `population_size` chromosomes of `chromosome_length` genes each,
    /// where gene `j` of individual `i` is `generator(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `population_size` is zero.
    pub fn generate<G>(
        population_size: usize,
        chromosome_length: usize,
        mut generator: G,
    ) -> Result<Self>
    where
        G: FnMut(usize, usize) -> f64,
    {
        if population_size == 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        let chromosomes = (0..population_size)
            .map(|i| {
                let genes = (0..chromosome_length).map(|j| generator(i, j)).collect();
                Chromosome::new(genes)
            })
            .collect();

        Ok(Self { chromosomes })
    }

    /// Returns the chromosome with the highest fitness, assuming the population
    /// is sorted ascending by fitness.
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes.last()
    }

    /// Returns the shared gene length, or `None` if the chromosomes disagree or the
    /// population is empty.
    pub fn gene_length(&self) -> Option<usize> {
        let first = self.chromosomes.first()?.len();
        self.chromosomes
            .iter()
            .all(|c| c.len() == first)
            .then_some(first)
    }

    /// Returns the sum of all weights.
    pub fn sum_weights(&self) -> f64 {
        self.chromosomes.iter().map(|c| c.weight).sum()
    }

    /// Returns the sum of all fitness scores.
    pub fn sum_fitnesses(&self) -> f64 {
        self.chromosomes.iter().map(|c| c.fitness).sum()
    }

    /// Returns the number of chromosomes whose weight is below zero.
    pub fn count_negative_weights(&self) -> usize {
        self.chromosomes.iter().filter(|c| c.weight < 0.0).count()
    }

    /// Returns the minimum weight, or `f64::INFINITY` for an empty population.
    pub fn min_weight(&self) -> f64 {
        self.chromosomes
            .iter()
            .fold(f64::INFINITY, |min, c| if c.weight < min { c.weight } else { min })
    }

    /// Adds `delta` to the weight of every chromosome.
    pub fn shift_weights(&mut self, delta: f64) {
        self.chromosomes.iter_mut().for_each(|c| c.weight += delta);
    }

    /// Uniformly permutes the chromosome order in place.
    pub fn shuffle(&mut self, rng: &mut RandomNumberGenerator) {
        rng.shuffle(&mut self.chromosomes);
    }

    /// Returns the chromosome with the largest weight. Ties go to the first one
    /// in the current order.
    pub fn chromosome_with_max_weight(&self) -> Option<&Chromosome> {
        max_weight(&self.chromosomes)
    }

    /// Sorts ascending by fitness, leaving the best chromosome last.
    pub fn sort_by_fitness(&mut self) {
        self.chromosomes.sort_by(|a, b| compare_fitness(a, b));
    }

    /// Sorts descending by fitness, leaving the best chromosome first.
    pub fn sort_by_fitness_descending(&mut self) {
        self.chromosomes.sort_by(|a, b| compare_fitness(b, a));
    }

    /// Returns `true` if every chromosome's fitness is no greater than its successor's.
    pub fn is_sorted_by_fitness(&self) -> bool {
        self.chromosomes
            .windows(2)
            .all(|pair| pair[0].fitness <= pair[1].fitness)
    }
}

fn compare_fitness(a: &Chromosome, b: &Chromosome) -> Ordering {
    a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal)
}

/// Linear scan for the largest weight in `chromosomes`, first occurrence wins.
pub(crate) fn max_weight(chromosomes: &[Chromosome]) -> Option<&Chromosome> {
    let mut best: Option<&Chromosome> = None;
    for chromosome in chromosomes {
        match best {
            Some(current) if chromosome.weight <= current.weight => {}
            _ => best = Some(chromosome),
        }
    }
    best
}

impl Deref for Population {
    type Target = [Chromosome];

    fn deref(&self) -> &Self::Target {
        &self.chromosomes
    }
}

impl DerefMut for Population {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.chromosomes
    }
}

impl From<Vec<Chromosome>> for Population {
    fn from(chromosomes: Vec<Chromosome>) -> Self {
        Self::new(chromosomes)
    }
}

impl FromIterator<Chromosome> for Population {
    fn from_iter<I: IntoIterator<Item = Chromosome>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Population {
    type Item = Chromosome;
    type IntoIter = std::vec::IntoIter<Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}
