use std::fmt::Debug;

use crate::direction::Direction;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// A selection strategy turns a scored population into a mating pool: a
/// new sequence of the same length, drawn with repetition, in arbitrary
/// order. Fitness is positional (`fitness[i]` scores `population[i]`)
/// and is recomputed every generation, so strategies never cache it.
///
/// # Examples
///
/// ```
/// use evogen::direction::Direction;
/// use evogen::error::Result;
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{SelectionStrategy, TournamentSelection};
///
/// fn main() -> Result<()> {
///     let population = vec!["a", "b", "c", "d"];
///     let fitness = vec![4.0, 2.0, 7.0, 1.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::new(3)?;
///     let pool = selection.select(&population, &fitness, Direction::Maximize, &mut rng)?;
///
///     assert_eq!(pool.len(), population.len());
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<C>: Debug + Send + Sync
where
    C: Clone,
{
    /// Selects a mating pool from the population based on fitness.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of candidates.
    /// * `fitness` - The fitness score of each candidate, by position.
    /// * `direction` - Whether lower or higher fitness is better.
    /// * `rng` - The run's random number generator.
    ///
    /// # Returns
    ///
    /// A vector of `population.len()` selected candidates, with
    /// repetition.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy's preconditions on fitness or direction are violated
    fn select(
        &self,
        population: &[C],
        fitness: &[f64],
        direction: Direction,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>>;
}

/// Shared precondition checks for all selection strategies.
pub(crate) fn check_population<C>(population: &[C], fitness: &[f64]) -> Result<()> {
    use crate::error::GeneticError;

    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }
    Ok(())
}
