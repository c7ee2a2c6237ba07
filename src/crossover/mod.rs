//! # Crossover Strategies
//!
//! A `CrossoverMethod` combines two parent chromosomes into one newly allocated
//! child. The child's fitness and weight start at zero; the evolver assigns fitness
//! on its next evaluation pass.
//!
//! ## Example
//!
//! ```rust
//! use genetics_engine::{Chromosome, CrossoverMethod, RandomNumberGenerator};
//!
//! let a = Chromosome::new(vec![0.0, 0.0, 0.0, 0.0]);
//! let b = Chromosome::new(vec![1.0, 1.0, 1.0, 1.0]);
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! let child = CrossoverMethod::point(1).crossover(&a, &b, &mut rng);
//! assert_eq!(child.len(), 4);
//! assert_eq!(child.genes[0], 0.0);
//!
//! // A custom method averaging the parents gene by gene.
//! let average = CrossoverMethod::custom(
//!     |a: &Chromosome, b: &Chromosome, _count: usize| {
//!         Chromosome::new(a.genes.iter().zip(&b.genes).map(|(x, y)| (x + y) / 2.0).collect())
//!     },
//!     0,
//! );
//! assert_eq!(average.crossover(&a, &b, &mut rng).genes, vec![0.5; 4]);
//! ```

pub mod point;
pub mod uniform;

use std::fmt;
use std::sync::Arc;

use crate::{chromosome::Chromosome, rng::RandomNumberGenerator};

/// Signature of a caller-supplied crossover: two parents and the configured
/// crossover point count in, a new child out.
pub type CrossoverFunction = dyn Fn(&Chromosome, &Chromosome, usize) -> Chromosome + Send + Sync;

/// The algorithm family of a [`CrossoverMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossoverKind {
    Point,
    Uniform,
    Custom,
}

#[derive(Clone)]
enum Operator {
    Point,
    Uniform,
    Custom(Arc<CrossoverFunction>),
}

/// Strategy used to combine two parents, together with its crossover point count.
#[derive(Clone)]
pub struct CrossoverMethod {
    operator: Operator,
    count: usize,
}

impl CrossoverMethod {
    /// Multi-point crossover with `count` cut positions.
    pub fn point(count: usize) -> Self {
        Self {
            operator: Operator::Point,
            count,
        }
    }

    /// Gene-by-gene coin flip crossover. Carries no crossover points.
    pub fn uniform() -> Self {
        Self {
            operator: Operator::Uniform,
            count: 0,
        }
    }

    /// Wraps a caller-supplied crossover; `count` is passed through to it.
    pub fn custom<F>(function: F, count: usize) -> Self
    where
        F: Fn(&Chromosome, &Chromosome, usize) -> Chromosome + Send + Sync + 'static,
    {
        Self {
            operator: Operator::Custom(Arc::new(function)),
            count,
        }
    }

    pub fn kind(&self) -> CrossoverKind {
        match self.operator {
            Operator::Point => CrossoverKind::Point,
            Operator::Uniform => CrossoverKind::Uniform,
            Operator::Custom(_) => CrossoverKind::Custom,
        }
    }

    /// The configured number of crossover points.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Combines `a` and `b` into a new child.
    pub fn crossover(
        &self,
        a: &Chromosome,
        b: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Chromosome {
        match &self.operator {
            Operator::Point => point::crossover(a, b, self.count, rng),
            Operator::Uniform => uniform::crossover(a, b, rng),
            Operator::Custom(function) => function(a, b, self.count),
        }
    }
}

impl Default for CrossoverMethod {
    fn default() -> Self {
        Self::point(1)
    }
}

impl fmt::Debug for CrossoverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossoverMethod")
            .field("kind", &self.kind())
            .field("count", &self.count)
            .finish()
    }
}
