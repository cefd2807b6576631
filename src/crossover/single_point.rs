use crate::crossover::crossover_strategy::{check_parents, CrossoverStrategy};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Single-point crossover.
///
/// A cut index is chosen uniformly in `[1, length - 1]`; the first child
/// takes parent A's prefix and parent B's suffix, the second child takes
/// the opposite halves. Applying the operator again at the same cut
/// recovers the parents.
///
/// Only valid when gene positions are independently meaningful: a
/// representation with a global ordering or uniqueness constraint (a
/// permutation, a fixed gene sum) needs a constraint-preserving variant
/// or a repair step instead.
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
/// // Each position holds one parent's gene
/// for i in 0..4 {
///     assert_eq!(child1[i] + child2[i], 1);
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Performs the cut at an explicit index. `cut` must be in
    /// `1..length`.
    fn crossover_at<G: Clone>(&self, parent_a: &[G], parent_b: &[G], cut: usize) -> (Vec<G>, Vec<G>) {
        let child1 = [&parent_a[..cut], &parent_b[cut..]].concat();
        let child2 = [&parent_b[..cut], &parent_a[cut..]].concat();
        (child1, child2)
    }
}

impl<G> CrossoverStrategy<G> for SinglePointCrossover
where
    G: Clone + Send + Sync,
{
    fn crossover(
        &self,
        parent_a: &[G],
        parent_b: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Vec<G>, Vec<G>)> {
        check_parents(parent_a, parent_b)?;

        let cut = rng.gen_range(1..parent_a.len());
        Ok(self.crossover_at(parent_a, parent_b, cut))
    }
}
