use crate::chromosome::Chromosome;

/// Scores a chromosome. Higher is better.
///
/// Implemented for every `Fn(&Chromosome) -> f64`, so plain closures work:
///
/// ```rust
/// use genetics_engine::{Chromosome, FitnessFunction};
///
/// let sum = |chromosome: &Chromosome| chromosome.genes.iter().sum::<f64>();
/// assert_eq!(sum.fitness(&Chromosome::new(vec![1.0, 2.0])), 3.0);
/// ```
pub trait FitnessFunction {
    fn fitness(&self, chromosome: &Chromosome) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Chromosome) -> f64,
{
    fn fitness(&self, chromosome: &Chromosome) -> f64 {
        self(chromosome)
    }
}

/// Produces a replacement value for gene `gene` of `chromosome`.
///
/// Implemented for every `Fn(&Chromosome, usize) -> f64`.
pub trait MutationFunction {
    fn mutate(&self, chromosome: &Chromosome, gene: usize) -> f64;
}

impl<F> MutationFunction for F
where
    F: Fn(&Chromosome, usize) -> f64,
{
    fn mutate(&self, chromosome: &Chromosome, gene: usize) -> f64 {
        self(chromosome, gene)
    }
}
