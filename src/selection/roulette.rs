use crate::direction::Direction;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects candidates through roulette wheel
/// selection.
///
/// Roulette wheel selection (fitness proportionate selection) draws
/// `population_size` candidates independently, with replacement, each with
/// probability proportional to its fitness. It only works for
/// maximization problems and requires every fitness value to be strictly
/// positive, otherwise the sampling weights are ill-defined. Fitness
/// transforms (e.g. a `+1` offset on a non-negative objective) exist
/// precisely to satisfy this precondition; violating it is a
/// `Configuration` error, never silently ignored.
///
/// # Examples
///
/// ```
/// use evogen::direction::Direction;
/// use evogen::error::Result;
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{RouletteSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let population = vec![vec![0u8, 1], vec![1, 1], vec![0, 0]];
///     let fitness = vec![2.0, 3.0, 1.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = RouletteSelection::new();
///     let pool = selection.select(&population, &fitness, Direction::Maximize, &mut rng)?;
///
///     assert_eq!(pool.len(), 3);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Creates a new RouletteSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Calculates cumulative selection weights for each candidate.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any fitness value is
    /// non-positive or non-finite.
    fn cumulative_weights(&self, fitness: &[f64]) -> Result<Vec<f64>> {
        if let Some(&bad) = fitness.iter().find(|f| !f.is_finite() || **f <= 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Roulette selection requires strictly positive fitness values, found {}",
                bad
            )));
        }

        let mut cumulative = Vec::with_capacity(fitness.len());
        let mut running = 0.0;
        for &f in fitness {
            running += f;
            cumulative.push(running);
        }
        Ok(cumulative)
    }

    /// Spins the wheel once and returns the index of the winner.
    fn spin(&self, cumulative: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let total = *cumulative.last().expect("population checked non-empty");
        let draw = rng.gen_range(0.0..total);
        cumulative
            .iter()
            .position(|&c| draw < c)
            // Floating-point slack at the top of the wheel lands on the
            // last candidate
            .unwrap_or(cumulative.len() - 1)
    }
}

impl<C> SelectionStrategy<C> for RouletteSelection
where
    C: Clone + Send + Sync,
{
    fn select(
        &self,
        population: &[C],
        fitness: &[f64],
        direction: Direction,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        check_population(population, fitness)?;

        if direction == Direction::Minimize {
            return Err(GeneticError::Configuration(
                "Roulette selection only supports maximization problems".to_string(),
            ));
        }

        let cumulative = self.cumulative_weights(fitness)?;
        let pool = (0..population.len())
            .map(|_| population[self.spin(&cumulative, rng)].clone())
            .collect();
        Ok(pool)
    }
}
