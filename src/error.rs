//! # Error Types
//!
//! This module defines the error type returned by the evolution engine. Every
//! configuration problem is reported before the first generation runs, so a
//! failed call never leaves a half-evolved population behind.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genetics_engine::error::{GeneticError, Result};
//!
//! fn check_elitism(elitism: usize, population_size: usize) -> Result<()> {
//!     if elitism > population_size {
//!         return Err(GeneticError::Configuration(format!(
//!             "Elitism ({}) exceeds population size ({})",
//!             elitism, population_size
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_elitism(2, 10).is_ok());
//! assert!(check_elitism(11, 10).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genetics_engine::error::{GeneticError, OptionExt};
//!
//! fn best_fitness(fitnesses: &[f64]) -> genetics_engine::error::Result<f64> {
//!     fitnesses
//!         .iter()
//!         .cloned()
//!         .fold(None, |best: Option<f64>, f| Some(best.map_or(f, |b| b.max(f))))
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_fitness(&[1.0, 3.0, 2.0]).unwrap(), 3.0);
//! assert!(best_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when breeding produces a malformed child.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when the fitness function produces a value the
    /// population cannot be ordered by.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
