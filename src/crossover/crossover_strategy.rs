use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for crossover strategies over gene sequences.
///
/// A crossover strategy recombines two parents into exactly two children.
/// Which strategy is valid depends on the representation: position-
/// independent genes allow cut-and-splice variants, while globally
/// constrained representations (permutations) need variants that preserve
/// the constraint.
///
/// # Examples
///
/// ```
/// use evogen::crossover::{CrossoverStrategy, SinglePointCrossover};
/// use evogen::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let (child1, child2) = SinglePointCrossover
///     .crossover(&[0u8, 0, 0, 0], &[1, 1, 1, 1], &mut rng)
///     .unwrap();
///
/// assert_eq!(child1.len(), 4);
/// assert_eq!(child2.len(), 4);
/// ```
pub trait CrossoverStrategy<G>: Debug + Send + Sync
where
    G: Clone,
{
    /// Recombines two parents into two children.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the parents have mismatched
    /// lengths or are too short to cut.
    fn crossover(
        &self,
        parent_a: &[G],
        parent_b: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Vec<G>, Vec<G>)>;
}

/// Shared precondition checks for crossover strategies.
pub(crate) fn check_parents<G>(parent_a: &[G], parent_b: &[G]) -> Result<()> {
    if parent_a.len() != parent_b.len() {
        return Err(GeneticError::Configuration(format!(
            "Crossover parents have mismatched lengths ({} and {})",
            parent_a.len(),
            parent_b.len()
        )));
    }
    if parent_a.len() < 2 {
        return Err(GeneticError::Configuration(format!(
            "Crossover requires at least 2 genes, got {}",
            parent_a.len()
        )));
    }
    Ok(())
}
