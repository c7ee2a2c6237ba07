//! # EvolverConfiguration
//!
//! The `EvolverConfiguration` struct holds everything an [`Evolver`](super::Evolver)
//! needs besides the fitness and mutation functions: the selection and crossover
//! strategies, the elitism count and the crossover and mutation rates.
//!
//! ## Example
//!
//! ```rust
//! use genetics_engine::{CrossoverMethod, EvolverConfiguration, SelectionMethod};
//!
//! // Every parameter given explicitly
//! let configuration = EvolverConfiguration::new(
//!     SelectionMethod::Tournament,
//!     CrossoverMethod::point(2),
//!     1,
//!     0.8,
//!     0.05,
//! )
//! .unwrap();
//!
//! // Fluent builder, unset parameters take their defaults
//! let configuration = EvolverConfiguration::builder()
//!     .selection(SelectionMethod::Roulette)
//!     .mutation_rate(0.1)
//!     .build()
//!     .unwrap();
//! assert_eq!(configuration.elitism(), 1);
//! ```
//!
//! ## Defaults
//!
//! - `selection`: rank selection
//! - `crossover`: point crossover with one cut
//! - `elitism`: 1
//! - `crossover_rate`: 0.7
//! - `mutation_rate`: 0.01

use crate::{
    crossover::CrossoverMethod,
    error::{GeneticError, Result},
    selection::SelectionMethod,
};

const DEFAULT_ELITISM: usize = 1;
const DEFAULT_CROSSOVER_RATE: f64 = 0.7;
const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Immutable configuration of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolverConfiguration {
    selection: SelectionMethod,
    crossover: CrossoverMethod,
    elitism: usize,
    crossover_rate: f64,
    mutation_rate: f64,
}

impl EvolverConfiguration {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `selection` - How parents are picked from the population.
    /// * `crossover` - How two parents are combined, with its crossover point count.
    /// * `elitism` - How many of the best chromosomes survive each generation unchanged.
    /// * `crossover_rate` - Probability in `[0, 1]` that a child is bred by crossover.
    /// * `mutation_rate` - Probability in `[0, 1]` that any single gene of a child mutates.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if either rate is not a finite number
    /// within `[0, 1]`. Limits that depend on the population size are checked when
    /// evolution starts.
    pub fn new(
        selection: SelectionMethod,
        crossover: CrossoverMethod,
        elitism: usize,
        crossover_rate: f64,
        mutation_rate: f64,
    ) -> Result<Self> {
        validate_rate("Crossover rate", crossover_rate)?;
        validate_rate("Mutation rate", mutation_rate)?;

        Ok(Self {
            selection,
            crossover,
            elitism,
            crossover_rate,
            mutation_rate,
        })
    }

    /// Returns a builder for creating an `EvolverConfiguration` instance.
    pub fn builder() -> EvolverConfigurationBuilder {
        EvolverConfigurationBuilder::default()
    }

    pub fn selection(&self) -> &SelectionMethod {
        &self.selection
    }

    pub fn crossover(&self) -> &CrossoverMethod {
        &self.crossover
    }

    pub fn elitism(&self) -> usize {
        self.elitism
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Checks the limits that depend on the population size.
    pub(crate) fn validate_for(&self, population_size: usize) -> Result<()> {
        if population_size == 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.crossover.count() >= population_size {
            return Err(GeneticError::Configuration(format!(
                "The crossover count ({}) must be less than the number of chromosomes in the population ({})",
                self.crossover.count(),
                population_size
            )));
        }

        if self.elitism > population_size {
            return Err(GeneticError::Configuration(format!(
                "The elitism count ({}) must be less than or equal to the number of chromosomes in the population ({})",
                self.elitism, population_size
            )));
        }

        Ok(())
    }
}

impl Default for EvolverConfiguration {
    fn default() -> Self {
        Self {
            selection: SelectionMethod::default(),
            crossover: CrossoverMethod::default(),
            elitism: DEFAULT_ELITISM,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            mutation_rate: DEFAULT_MUTATION_RATE,
        }
    }
}

fn validate_rate(name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )));
    }
    Ok(())
}

/// Builder for `EvolverConfiguration`.
///
/// Provides a fluent interface for constructing `EvolverConfiguration` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolverConfigurationBuilder {
    selection: Option<SelectionMethod>,
    crossover: Option<CrossoverMethod>,
    elitism: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
}

impl EvolverConfigurationBuilder {
    /// Sets the selection method.
    pub fn selection(mut self, value: SelectionMethod) -> Self {
        self.selection = Some(value);
        self
    }

    /// Sets the crossover method.
    pub fn crossover(mut self, value: CrossoverMethod) -> Self {
        self.crossover = Some(value);
        self
    }

    /// Sets the elitism count.
    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Sets the crossover rate.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Builds the `EvolverConfiguration` instance.
    ///
    /// # Errors
    ///
    /// Fails like [`EvolverConfiguration::new`] on out-of-range rates.
    pub fn build(self) -> Result<EvolverConfiguration> {
        EvolverConfiguration::new(
            self.selection.unwrap_or_default(),
            self.crossover.unwrap_or_default(),
            self.elitism.unwrap_or(DEFAULT_ELITISM),
            self.crossover_rate.unwrap_or(DEFAULT_CROSSOVER_RATE),
            self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
        )
    }
}
