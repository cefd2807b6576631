use crate::direction::Direction;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects candidates through tournament
/// selection.
///
/// For every slot in the mating pool, `tournament_size` candidates are
/// sampled uniformly *without replacement* from the scored population and
/// the one with the extremal fitness for the configured direction wins
/// (minimum for minimization, maximum for maximization). Ties are broken
/// first-encountered-wins, so a run is deterministic given a fixed random
/// sequence.
///
/// Tournament size trades exploration against exploitation: small
/// tournaments select almost uniformly, a tournament spanning the whole
/// population always returns the population's best.
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
///     let population = vec!["short", "route", "tours"];
///     let fitness = vec![12.0, 9.5, 17.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::new(2)?;
///     let pool = selection.select(&population, &fitness, Direction::Minimize, &mut rng)?;
///
///     assert_eq!(pool.len(), 3);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of candidates that compete for
    ///   each mating pool slot. Must be at least 1; a tournament of 1 is
    ///   uniform random selection.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// Participants are drawn without replacement; the strict comparison
    /// keeps the first-encountered candidate on ties.
    fn run_tournament(
        &self,
        fitness: &[f64],
        direction: Direction,
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let participants = rng.sample_indices(fitness.len(), self.tournament_size);

        let mut winner = participants[0];
        for &contender in &participants[1..] {
            if direction.is_improvement(fitness[contender], fitness[winner]) {
                winner = contender;
            }
        }
        winner
    }
}

impl Default for TournamentSelection {
    /// A tournament of 3, the customary default.
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl<C> SelectionStrategy<C> for TournamentSelection
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

        if self.tournament_size > population.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                population.len()
            )));
        }

        let pool = (0..population.len())
            .map(|_| population[self.run_tournament(fitness, direction, rng)].clone())
            .collect();
        Ok(pool)
    }
}
