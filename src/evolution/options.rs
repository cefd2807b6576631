//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of an
//! evolutionary run: population size, generation limit, operator
//! probabilities, optimization direction, selection method and an
//! optional target fitness. `validate` performs every fail-fast check
//! before the loop starts, so a misconfiguration never surfaces halfway
//! through a run.
//!
//! ## Example
//!
//! ```rust
//! use evogen::direction::Direction;
//! use evogen::evolution::{EvolutionOptions, SelectionMethod};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .generation_limit(200)
//!     .crossover_probability(0.5)
//!     .mutation_probability(0.05)
//!     .direction(Direction::Maximize)
//!     .selection_method(SelectionMethod::Roulette)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::direction::Direction;
use crate::error::{GeneticError, Result};

/// The selection strategy to use, as a closed configuration choice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    /// Fitness-proportionate sampling; maximization only.
    Roulette,
    /// k-way tournaments; works in both directions.
    Tournament,
}

/// Configuration options for an evolutionary run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    generation_limit: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    direction: Direction,
    selection_method: SelectionMethod,
    tournament_size: usize,
    target_fitness: Option<f64>,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_generation_limit(&self) -> usize {
        self.generation_limit
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn get_selection_method(&self) -> SelectionMethod {
        self.selection_method
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_target_fitness(&self) -> Option<f64> {
        self.target_fitness
    }

    /// Checks every configuration invariant.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if:
    /// - the population size or generation limit is zero
    /// - a probability is not a finite value in `[0, 1]`
    /// - roulette selection is combined with minimization
    /// - the tournament size is zero or exceeds the population size
    /// - the target fitness is non-finite
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.generation_limit == 0 {
            return Err(GeneticError::Configuration(
                "Generation limit cannot be zero".to_string(),
            ));
        }
        for (name, p) in [
            ("Crossover", self.crossover_probability),
            ("Mutation", self.mutation_probability),
        ] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(GeneticError::Configuration(format!(
                    "{} probability must lie in [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.selection_method == SelectionMethod::Roulette
            && self.direction == Direction::Minimize
        {
            return Err(GeneticError::Configuration(
                "Roulette selection only supports maximization problems".to_string(),
            ));
        }
        if self.selection_method == SelectionMethod::Tournament {
            if self.tournament_size == 0 {
                return Err(GeneticError::Configuration(
                    "Tournament size must be at least 1".to_string(),
                ));
            }
            if self.tournament_size > self.population_size {
                return Err(GeneticError::Configuration(format!(
                    "Tournament size ({}) exceeds population size ({})",
                    self.tournament_size, self.population_size
                )));
            }
        }
        if let Some(target) = self.target_fitness {
            if !target.is_finite() {
                return Err(GeneticError::Configuration(format!(
                    "Target fitness must be finite, got {}",
                    target
                )));
            }
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions`
/// instances. Unset fields fall back to the defaults: population 100,
/// generation limit 100, crossover probability 0.5, mutation probability
/// 0.05, maximization, tournaments of 3, no target fitness.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    generation_limit: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    direction: Option<Direction>,
    selection_method: Option<SelectionMethod>,
    tournament_size: Option<usize>,
    target_fitness: Option<f64>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size, constant across generations.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the maximum number of generations.
    pub fn generation_limit(mut self, value: usize) -> Self {
        self.generation_limit = Some(value);
        self
    }

    /// Sets the per-pair crossover probability.
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    /// Sets the per-candidate mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the optimization direction.
    pub fn direction(mut self, value: Direction) -> Self {
        self.direction = Some(value);
        self
    }

    /// Sets the selection method.
    pub fn selection_method(mut self, value: SelectionMethod) -> Self {
        self.selection_method = Some(value);
        self
    }

    /// Sets the tournament size (only meaningful for tournament
    /// selection).
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets a target fitness; the run terminates once the best-ever
    /// score satisfies it (`<=` when minimizing, `>=` when maximizing).
    pub fn target_fitness(mut self, value: f64) -> Self {
        self.target_fitness = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    ///
    /// The result is not yet validated; the engine calls
    /// `EvolutionOptions::validate` before running.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(100),
            generation_limit: self.generation_limit.unwrap_or(100),
            crossover_probability: self.crossover_probability.unwrap_or(0.5),
            mutation_probability: self.mutation_probability.unwrap_or(0.05),
            direction: self.direction.unwrap_or(Direction::Maximize),
            selection_method: self.selection_method.unwrap_or(SelectionMethod::Tournament),
            tournament_size: self.tournament_size.unwrap_or(3),
            target_fitness: self.target_fitness,
        }
    }
}
