pub mod evolver;
pub mod functions;
pub mod options;

pub use evolver::{EvolutionResult, Evolver};
pub use functions::{FitnessFunction, MutationFunction};
pub use options::{EvolverConfiguration, EvolverConfigurationBuilder};
