use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for mutation strategies over gene sequences.
///
/// A mutation strategy perturbs a single candidate in place. The engine
/// gates the call on the configured mutation probability; once invoked,
/// the operator is unconditional.
///
/// # Examples
///
/// ```
/// use evogen::mutation::{MutationStrategy, SwapMutation};
/// use evogen::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut route = vec![0, 1, 2, 3, 4];
///
/// SwapMutation.mutate(&mut route, &mut rng);
///
/// let mut sorted = route.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub trait MutationStrategy<G>: Debug + Send + Sync {
    /// Perturbs the gene sequence in place.
    ///
    /// Sequences shorter than the strategy's arity (one gene for
    /// resampling, two for swaps) are left unchanged.
    fn mutate(&self, genes: &mut [G], rng: &mut RandomNumberGenerator);
}
