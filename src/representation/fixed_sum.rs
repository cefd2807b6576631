//! # Fixed-Sum Domain
//!
//! Representation for mixture problems (e.g. picking a three-metal alloy):
//! a candidate is a real-valued gene sequence where exactly `active_genes`
//! positions are non-zero, every non-zero gene is at least `min_active`,
//! and the genes sum to a fixed `total`. Generic cut-and-splice crossover
//! and resample mutation break the sum constraint, so this domain also
//! provides `repair`, which redistributes the sum delta proportionally
//! across the active genes and re-clamps them to the minimum.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Tolerance for comparing gene sums against the configured total.
const SUM_EPSILON: f64 = 1e-6;

/// A real-valued gene domain with a global fixed-sum constraint.
///
/// # Examples
///
/// ```
/// use evogen::representation::FixedSumDomain;
/// use evogen::rng::RandomNumberGenerator;
///
/// // 92 element slots, 3 active metals, 100 grams total, 5 grams minimum each
/// let domain = FixedSumDomain::new(92, 3, 100.0, 5.0).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let candidate = domain.sample(&mut rng);
/// assert!(domain.validate(&candidate).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FixedSumDomain {
    length: usize,
    active_genes: usize,
    total: f64,
    min_active: f64,
}

impl FixedSumDomain {
    /// Creates a fixed-sum domain.
    ///
    /// # Arguments
    ///
    /// * `length` - Number of gene positions in a candidate.
    /// * `active_genes` - Exact number of non-zero positions.
    /// * `total` - Required sum over all genes.
    /// * `min_active` - Minimum value of each non-zero gene.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the constraint set is
    /// infeasible: zero length or active count, more active genes than
    /// positions, non-finite bounds, or `active_genes * min_active`
    /// exceeding `total`.
    pub fn new(length: usize, active_genes: usize, total: f64, min_active: f64) -> Result<Self> {
        if length == 0 || active_genes == 0 {
            return Err(GeneticError::Configuration(
                "Fixed-sum domain requires a positive length and active gene count".to_string(),
            ));
        }
        if active_genes > length {
            return Err(GeneticError::Configuration(format!(
                "Cannot place {} active genes in {} positions",
                active_genes, length
            )));
        }
        if !total.is_finite() || !min_active.is_finite() || total <= 0.0 || min_active < 0.0 {
            return Err(GeneticError::Configuration(
                "Fixed-sum domain requires a finite positive total and non-negative minimum"
                    .to_string(),
            ));
        }
        if active_genes as f64 * min_active > total {
            return Err(GeneticError::Configuration(format!(
                "{} active genes of at least {} cannot sum to {}",
                active_genes, min_active, total
            )));
        }
        Ok(Self {
            length,
            active_genes,
            total,
            min_active,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn min_active(&self) -> f64 {
        self.min_active
    }

    /// Samples a valid candidate: `active_genes` distinct positions each
    /// receive the minimum, and the remaining mass is split between them
    /// by normalized random weights.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        let mut genes = vec![0.0; self.length];
        let positions = rng.sample_indices(self.length, self.active_genes);

        let weights: Vec<f64> = (0..self.active_genes)
            .map(|_| rng.gen_range(0.0..1.0f64) + f64::EPSILON)
            .collect();
        let weight_sum: f64 = weights.iter().sum();
        let spare = self.total - self.active_genes as f64 * self.min_active;

        for (&position, &weight) in positions.iter().zip(&weights) {
            genes[position] = self.min_active + spare * weight / weight_sum;
        }

        // Close the sum exactly on the last active position
        let sum: f64 = genes.iter().sum();
        genes[*positions.last().expect("active_genes >= 1")] += self.total - sum;
        genes
    }

    /// Restores the fixed-sum invariant after a generic crossover or
    /// mutation has disturbed it.
    ///
    /// Active (positive) genes are rescaled proportionally so they sum to
    /// the configured total; any gene pushed under `min_active` is
    /// clamped up and the excess re-taken proportionally from the rest.
    /// Relative proportions between unclamped genes are preserved.
    ///
    /// # Errors
    ///
    /// Returns a `RepresentationViolation` if the candidate has the wrong
    /// length, a wrong active-gene count, or no positive mass to
    /// redistribute. Repair cannot invent a valid candidate from one
    /// whose structure is already broken.
    pub fn repair(&self, genes: &mut [f64]) -> Result<()> {
        if genes.len() != self.length {
            return Err(GeneticError::RepresentationViolation(format!(
                "Fixed-sum candidate has length {}, expected {}",
                genes.len(),
                self.length
            )));
        }

        let active: Vec<usize> = (0..genes.len()).filter(|&i| genes[i] > 0.0).collect();
        if active.len() != self.active_genes {
            return Err(GeneticError::RepresentationViolation(format!(
                "Fixed-sum candidate has {} active genes, expected {}",
                active.len(),
                self.active_genes
            )));
        }

        // Iterate: clamped genes keep min_active, the rest share the
        // remaining mass proportionally. Each pass clamps at least one
        // additional gene or terminates, so this is finite.
        let mut clamped = vec![false; active.len()];
        loop {
            let free: Vec<usize> = (0..active.len()).filter(|&i| !clamped[i]).collect();
            if free.is_empty() {
                break;
            }
            let free_mass: f64 = free.iter().map(|&i| genes[active[i]]).sum();
            let remaining = self.total
                - (active.len() - free.len()) as f64 * self.min_active;
            if free_mass <= 0.0 {
                return Err(GeneticError::RepresentationViolation(
                    "Fixed-sum repair requires positive mass on unclamped genes".to_string(),
                ));
            }

            let scale = remaining / free_mass;
            let mut newly_clamped = false;
            for &i in &free {
                let scaled = genes[active[i]] * scale;
                if scaled < self.min_active {
                    genes[active[i]] = self.min_active;
                    clamped[i] = true;
                    newly_clamped = true;
                } else {
                    genes[active[i]] = scaled;
                }
            }
            if !newly_clamped {
                break;
            }
        }

        // Close the sum exactly on the largest active gene
        let sum: f64 = genes.iter().sum();
        let largest = active
            .iter()
            .copied()
            .max_by(|&a, &b| genes[a].total_cmp(&genes[b]))
            .expect("active_genes >= 1");
        genes[largest] += self.total - sum;
        Ok(())
    }

    /// Checks the full domain invariant: length, active-gene count,
    /// per-gene minimum and the fixed total (within a small epsilon).
    pub fn validate(&self, genes: &[f64]) -> Result<()> {
        if genes.len() != self.length {
            return Err(GeneticError::RepresentationViolation(format!(
                "Fixed-sum candidate has length {}, expected {}",
                genes.len(),
                self.length
            )));
        }

        let active: Vec<f64> = genes.iter().copied().filter(|&g| g > 0.0).collect();
        if active.len() != self.active_genes {
            return Err(GeneticError::RepresentationViolation(format!(
                "Fixed-sum candidate has {} active genes, expected {}",
                active.len(),
                self.active_genes
            )));
        }
        if let Some(&low) = active
            .iter()
            .find(|&&g| g < self.min_active - SUM_EPSILON)
        {
            return Err(GeneticError::RepresentationViolation(format!(
                "Active gene {} is below the minimum {}",
                low, self.min_active
            )));
        }

        let sum: f64 = genes.iter().sum();
        if (sum - self.total).abs() > SUM_EPSILON {
            return Err(GeneticError::RepresentationViolation(format!(
                "Gene sum {} deviates from the required total {}",
                sum, self.total
            )));
        }
        Ok(())
    }
}
