use crate::mutation::mutation_strategy::MutationStrategy;
use crate::representation::GeneDomain;
use crate::rng::RandomNumberGenerator;

/// Attempts at drawing a replacement gene that differs from the current
/// one before giving up. Keeps degenerate single-value domains from
/// looping forever; for any domain with two or more values the chance of
/// exhausting the budget is negligible.
const RESAMPLE_ATTEMPTS: usize = 64;

/// Resample mutation for position-independent representations (binary,
/// bounded integer, symbol).
///
/// Picks a uniformly random gene index and replaces the gene with a
/// freshly sampled value from the domain, redrawing until the value
/// differs from the original, so exactly `gene_count` positions change.
///
/// # Examples
///
/// ```
/// use evogen::mutation::{MutationStrategy, ResampleMutation};
/// use evogen::representation::BinaryDomain;
/// use evogen::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mutation = ResampleMutation::new(BinaryDomain);
///
/// let mut genes = vec![0u8, 0, 0, 0];
/// mutation.mutate(&mut genes, &mut rng);
///
/// assert_eq!(genes.iter().filter(|&&g| g == 1).count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResampleMutation<D: GeneDomain> {
    domain: D,
    gene_count: usize,
}

impl<D: GeneDomain> ResampleMutation<D> {
    /// Creates a resample mutation perturbing exactly one gene.
    pub fn new(domain: D) -> Self {
        Self {
            domain,
            gene_count: 1,
        }
    }

    /// Sets how many distinct gene positions a single invocation
    /// perturbs.
    pub fn with_gene_count(mut self, gene_count: usize) -> Self {
        self.gene_count = gene_count;
        self
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    fn resample_gene(&self, current: &D::Gene, rng: &mut RandomNumberGenerator) -> D::Gene {
        for _ in 0..RESAMPLE_ATTEMPTS {
            let fresh = self.domain.sample(rng);
            if fresh != *current {
                return fresh;
            }
        }
        // The domain admits no (reachable) second value
        current.clone()
    }
}

impl<D: GeneDomain> MutationStrategy<D::Gene> for ResampleMutation<D> {
    fn mutate(&self, genes: &mut [D::Gene], rng: &mut RandomNumberGenerator) {
        if genes.is_empty() {
            return;
        }

        let count = self.gene_count.min(genes.len());
        for index in rng.sample_indices(genes.len(), count) {
            genes[index] = self.resample_gene(&genes[index], rng);
        }
    }
}
