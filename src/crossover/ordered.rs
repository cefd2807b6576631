use crate::crossover::crossover_strategy::{check_parents, CrossoverStrategy};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Ordered crossover (OX) for permutation representations.
///
/// Two cut indices `0 <= c1 < c2 <= length - 1` are chosen uniformly.
/// The first child inherits the sub-sequence `parent_a[c1..=c2]`
/// verbatim, then appends the remaining genes in the order they appear in
/// `parent_b`, skipping genes already present; the second child mirrors
/// the construction with the parents swapped. Both children are
/// guaranteed to remain permutations of the parents' element set: no
/// duplicates, no omissions.
///
/// # Examples
///
/// ```
/// use evogen::crossover::{CrossoverStrategy, OrderedCrossover};
/// use evogen::representation::is_permutation;
/// use evogen::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let (child1, child2) = OrderedCrossover
///     .crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng)
///     .unwrap();
///
/// assert!(is_permutation(&child1));
/// assert!(is_permutation(&child2));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedCrossover;

impl OrderedCrossover {
    /// Builds one child from an inherited window and the other parent's
    /// gene order.
    fn build_child<G: Clone + PartialEq>(
        window_parent: &[G],
        order_parent: &[G],
        c1: usize,
        c2: usize,
    ) -> Vec<G> {
        let window = &window_parent[c1..=c2];
        let mut child = window.to_vec();
        child.extend(
            order_parent
                .iter()
                .filter(|gene| !window.contains(gene))
                .cloned(),
        );
        child
    }

    /// Performs the recombination at explicit cuts, `c1 < c2 < length`.
    fn crossover_at<G: Clone + PartialEq>(
        &self,
        parent_a: &[G],
        parent_b: &[G],
        c1: usize,
        c2: usize,
    ) -> (Vec<G>, Vec<G>) {
        (
            Self::build_child(parent_a, parent_b, c1, c2),
            Self::build_child(parent_b, parent_a, c1, c2),
        )
    }
}

impl<G> CrossoverStrategy<G> for OrderedCrossover
where
    G: Clone + PartialEq + Send + Sync,
{
    fn crossover(
        &self,
        parent_a: &[G],
        parent_b: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Vec<G>, Vec<G>)> {
        check_parents(parent_a, parent_b)?;

        let mut cuts = rng.sample_indices(parent_a.len(), 2);
        cuts.sort_unstable();
        Ok(self.crossover_at(parent_a, parent_b, cuts[0], cuts[1]))
    }
}
