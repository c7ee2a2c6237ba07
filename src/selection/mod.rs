//! # Selection Strategies
//!
//! A `SelectionMethod` picks one parent chromosome out of a population, biased
//! toward higher fitness. Three algorithms are built in and any other policy can be
//! supplied through [`SelectionMethod::custom`].
//!
//! Rank and roulette selection rewrite every chromosome's weight on each draw,
//! roulette and tournament selection reorder the population. Callers must not
//! rely on either being stable across selections within one generation.
//!
//! ## Example
//!
//! ```rust
//! use genetics_engine::{Population, RandomNumberGenerator, SelectionMethod};
//!
//! let mut population = Population::generate(4, 1, |i, _| i as f64).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let parent = SelectionMethod::Rank.select(&mut population, &mut rng).unwrap();
//! assert_eq!(parent.len(), 1);
//!
//! // A custom policy that always picks the last chromosome.
//! let last = SelectionMethod::custom(|population| &population[population.len() - 1]);
//! let parent = last.select(&mut population, &mut rng).unwrap();
//! assert_eq!(parent.genes, vec![3.0]);
//! ```

pub mod rank;
pub mod roulette;
pub mod tournament;

use std::fmt;
use std::sync::Arc;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    population::Population,
    rng::RandomNumberGenerator,
};

/// Signature of a caller-supplied selection policy.
pub type SelectionFunction =
    dyn for<'a> Fn(&'a mut Population) -> &'a Chromosome + Send + Sync;

/// The algorithm family of a [`SelectionMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Rank,
    Roulette,
    Tournament,
    Custom,
}

/// Strategy used to pick a parent chromosome from a population.
#[derive(Clone, Default)]
pub enum SelectionMethod {
    /// Rank-proportional selection over the current order.
    #[default]
    Rank,
    /// Fitness-proportional (roulette wheel) selection.
    Roulette,
    /// Best weight within a randomly sized group of a shuffled population.
    Tournament,
    /// Caller-supplied selection policy.
    Custom(Arc<SelectionFunction>),
}

impl SelectionMethod {
    /// Wraps a caller-supplied selection policy.
    pub fn custom<F>(function: F) -> Self
    where
        F: for<'a> Fn(&'a mut Population) -> &'a Chromosome + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(function))
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Rank => SelectionKind::Rank,
            Self::Roulette => SelectionKind::Roulette,
            Self::Tournament => SelectionKind::Tournament,
            Self::Custom(_) => SelectionKind::Custom,
        }
    }

    /// Selects one chromosome from `population`.
    ///
    /// The returned reference points into `population`; clone it to keep it across
    /// further selections.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `population` is empty.
    pub fn select<'a>(
        &self,
        population: &'a mut Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Chromosome> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let selected = match self {
            Self::Rank => rank::select(population, rng),
            Self::Roulette => roulette::select(population, rng),
            Self::Tournament => tournament::select(population, rng),
            Self::Custom(function) => function(population),
        };

        Ok(selected)
    }
}

impl fmt::Debug for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank => f.write_str("Rank"),
            Self::Roulette => f.write_str("Roulette"),
            Self::Tournament => f.write_str("Tournament"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
