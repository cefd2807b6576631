//! # Error Types
//!
//! This module defines the error types for the genetic algorithm engine.
//! Every failure in this crate is either a configuration error (caught
//! before the evolutionary loop starts) or a contract violation by a
//! problem plug-in (fatal, surfaced immediately). There is no transient
//! error class: the engine performs no I/O and holds no external resources.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evogen::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evogen::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> evogen::error::Result<f64> {
//!     scores
//!         .iter()
//!         .cloned()
//!         .reduce(f64::max)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
///
/// The variants follow the engine's two-class taxonomy: configuration
/// errors fail fast before the loop starts, representation violations
/// abort a running evolution because they indicate a plug-in bug.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    ///
    /// Raised before the evolutionary loop starts (invalid population
    /// size, probability outside `[0, 1]`, roulette selection combined
    /// with minimization) or when roulette selection encounters a
    /// non-positive fitness value.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a plug-in produces a candidate violating
    /// its own representation invariants (e.g. a non-permutation from a
    /// permutation crossover).
    ///
    /// The message carries the phase and generation number in which the
    /// violation surfaced. This error is never retried.
    #[error("Representation violation: {0}")]
    RepresentationViolation(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when NaN or infinity values are encountered
    /// where a finite fitness score is required.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use evogen::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use evogen::error::{GeneticError, OptionExt};
///
/// fn first_candidate(candidates: &[i32]) -> evogen::error::Result<i32> {
///     candidates.first().cloned().ok_or_else_genetic(||
///         GeneticError::EmptyPopulation
///     )
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a
    /// closure to generate the error.
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
