use crate::mutation::mutation_strategy::MutationStrategy;
use crate::rng::RandomNumberGenerator;

/// Swap mutation for permutation representations.
///
/// Picks two distinct gene indices uniformly and exchanges their values.
/// Exactly two positions change and the multiset of genes is untouched,
/// so a permutation candidate stays a permutation.
///
/// # Examples
///
/// ```
/// use evogen::mutation::{MutationStrategy, SwapMutation};
/// use evogen::representation::is_permutation;
/// use evogen::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut route = vec![0, 1, 2, 3, 4];
///
/// SwapMutation.mutate(&mut route, &mut rng);
///
/// assert!(is_permutation(&route));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapMutation;

impl<G> MutationStrategy<G> for SwapMutation
where
    G: Send + Sync,
{
    fn mutate(&self, genes: &mut [G], rng: &mut RandomNumberGenerator) {
        if genes.len() < 2 {
            return;
        }

        let indices = rng.sample_indices(genes.len(), 2);
        genes.swap(indices[0], indices[1]);
    }
}
