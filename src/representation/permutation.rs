//! # Permutation Helpers
//!
//! Route-finding representations encode a candidate as a permutation of
//! `0..len`: every element appears exactly once, so gene positions carry a
//! global uniqueness constraint. These helpers sample valid permutations
//! and check the invariant the engine enforces after ordered crossover and
//! swap mutation.

use crate::rng::RandomNumberGenerator;

/// Samples a uniformly random permutation of `0..len`.
pub fn random_permutation(len: usize, rng: &mut RandomNumberGenerator) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..len).collect();
    rng.shuffle(&mut permutation);
    permutation
}

/// Returns `true` if `genes` is a permutation of `0..genes.len()`.
pub fn is_permutation(genes: &[usize]) -> bool {
    let mut seen = vec![false; genes.len()];
    for &gene in genes {
        if gene >= genes.len() || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}
