//! # Chromosome
//!
//! A `Chromosome` is one candidate solution: an ordered vector of real-valued
//! genes together with the fitness the evolver last assigned to it.
//!
//! ## Example
//!
//! ```rust
//! use genetics_engine::chromosome::Chromosome;
//!
//! let mut chromosome = Chromosome::new(vec![0.5, 1.5]);
//! chromosome.fitness = 2.0;
//!
//! assert_eq!(chromosome.len(), 2);
//! assert_eq!(chromosome.weight(), 0.0);
//! ```

use std::fmt;

/// One candidate solution under evolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chromosome {
    /// The chromosome's genes.
    pub genes: Vec<f64>,

    /// The fitness of the chromosome.
    ///
    /// Inside a population under evolution this is refreshed once per generation,
    /// right after breeding. Changing it between generations affects selection.
    pub fitness: f64,

    /// Selection scratch value owned by the engine.
    ///
    /// Set to the fitness on evaluation, then rewritten by rank and roulette
    /// selection on every draw.
    pub(crate) weight: f64,
}

impl Chromosome {
    /// Creates a chromosome with the given genes and zeroed fitness and weight.
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: 0.0,
            weight: 0.0,
        }
    }

    /// Returns the current selection weight.
    ///
    /// Only meaningful right after a selection call; not stable across calls.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl From<Vec<f64>> for Chromosome {
    fn from(genes: Vec<f64>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Genes: {:?}, Fitness: {:.10}, weight: {:.10}]",
            self.genes, self.fitness, self.weight
        )
    }
}
