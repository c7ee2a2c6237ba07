pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use crossover::{CrossoverKind, CrossoverMethod};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    EvolutionResult, Evolver, EvolverConfiguration, FitnessFunction, MutationFunction,
};
pub use population::Population;
pub use rng::RandomNumberGenerator;
pub use selection::{SelectionKind, SelectionMethod};
