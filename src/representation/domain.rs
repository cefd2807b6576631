//! # Gene Domains
//!
//! A `GeneDomain` knows how to sample one valid gene. Candidates over
//! position-independent representations are built by sampling a sequence
//! of genes from one domain, and resample mutation draws its replacement
//! gene from the same domain.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for per-gene value domains.
///
/// # Examples
///
/// ```
/// use evogen::representation::{BinaryDomain, GeneDomain};
/// use evogen::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let candidate = BinaryDomain.sample_sequence(4, &mut rng);
///
/// assert_eq!(candidate.len(), 4);
/// assert!(candidate.iter().all(|&g| g <= 1));
/// ```
pub trait GeneDomain: Debug + Send + Sync {
    /// The atomic gene value this domain produces.
    type Gene: Clone + Debug + PartialEq + Send + Sync;

    /// Samples one uniformly random valid gene.
    fn sample(&self, rng: &mut RandomNumberGenerator) -> Self::Gene;

    /// Samples an ordered sequence of `count` independent genes.
    fn sample_sequence(&self, count: usize, rng: &mut RandomNumberGenerator) -> Vec<Self::Gene> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Domain of binary genes: each gene is `0` or `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryDomain;

impl GeneDomain for BinaryDomain {
    type Gene = u8;

    fn sample(&self, rng: &mut RandomNumberGenerator) -> u8 {
        rng.gen_range(0..=1u8)
    }
}

/// Domain of bounded integer genes: each gene lies in `0..=max` inclusive.
#[derive(Debug, Clone, Copy)]
pub struct BoundedIntDomain {
    max: u64,
}

impl BoundedIntDomain {
    /// Creates a domain over `0..=max`.
    pub fn new(max: u64) -> Self {
        Self { max }
    }

    pub fn max(&self) -> u64 {
        self.max
    }
}

impl GeneDomain for BoundedIntDomain {
    type Gene = u64;

    fn sample(&self, rng: &mut RandomNumberGenerator) -> u64 {
        rng.gen_range(0..=self.max)
    }
}

/// Domain of symbol genes drawn uniformly from a fixed alphabet.
///
/// Used for string-search problems where each gene is one character of a
/// guessed word.
#[derive(Debug, Clone)]
pub struct SymbolDomain {
    alphabet: Vec<char>,
}

impl SymbolDomain {
    /// Creates a domain over the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the alphabet is empty, since
    /// sampling from an empty alphabet is ill-defined.
    pub fn new(alphabet: impl IntoIterator<Item = char>) -> Result<Self> {
        let alphabet: Vec<char> = alphabet.into_iter().collect();
        if alphabet.is_empty() {
            return Err(GeneticError::Configuration(
                "Symbol domain requires a non-empty alphabet".to_string(),
            ));
        }
        Ok(Self { alphabet })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl GeneDomain for SymbolDomain {
    type Gene = char;

    fn sample(&self, rng: &mut RandomNumberGenerator) -> char {
        self.alphabet[rng.gen_index(self.alphabet.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_domain_samples_bits() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let genes = BinaryDomain.sample_sequence(100, &mut rng);

        assert_eq!(genes.len(), 100);
        assert!(genes.iter().all(|&g| g == 0 || g == 1));
        // A hundred fair coin flips should land on both sides
        assert!(genes.contains(&0));
        assert!(genes.contains(&1));
    }

    #[test]
    fn test_bounded_int_domain_respects_max() {
        let domain = BoundedIntDomain::new(5);
        let mut rng = RandomNumberGenerator::from_seed(42);
        let genes = domain.sample_sequence(200, &mut rng);

        assert!(genes.iter().all(|&g| g <= 5));
        // The bound is inclusive
        assert!(genes.contains(&5));
    }

    #[test]
    fn test_bounded_int_domain_degenerate() {
        let domain = BoundedIntDomain::new(0);
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert_eq!(domain.sample(&mut rng), 0);
    }

    #[test]
    fn test_symbol_domain_samples_from_alphabet() {
        let domain = SymbolDomain::new("abc".chars()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let genes = domain.sample_sequence(50, &mut rng);

        assert!(genes.iter().all(|g| "abc".contains(*g)));
    }

    #[test]
    fn test_symbol_domain_rejects_empty_alphabet() {
        let result = SymbolDomain::new(std::iter::empty());

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
