//! # Problem Trait
//!
//! The `Problem` trait is the plug-in contract between the engine and a
//! concrete optimization problem. A plug-in owns the representation of a
//! candidate solution, how to sample one, how to score it, and how to
//! recombine and perturb it. The engine owns everything else: population
//! state, selection, probabilities, best-ever tracking and termination.
//!
//! ## Example
//!
//! ```rust
//! use evogen::problem::Problem;
//! use evogen::rng::RandomNumberGenerator;
//!
//! /// Maximize the number of switched-on boxes.
//! struct BinaryBox {
//!     gene_count: usize,
//! }
//!
//! impl Problem for BinaryBox {
//!     type Candidate = Vec<u8>;
//!
//!     fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Vec<u8> {
//!         (0..self.gene_count).map(|_| rng.gen_range(0..=1u8)).collect()
//!     }
//!
//!     fn evaluate(&self, candidate: &Vec<u8>) -> f64 {
//!         candidate.iter().map(|&g| g as f64).sum::<f64>() + 1.0
//!     }
//!
//!     fn crossover(
//!         &self,
//!         a: &Vec<u8>,
//!         b: &Vec<u8>,
//!         rng: &mut RandomNumberGenerator,
//!     ) -> (Vec<u8>, Vec<u8>) {
//!         let cut = rng.gen_range(1..a.len());
//!         let child1 = [&a[..cut], &b[cut..]].concat();
//!         let child2 = [&b[..cut], &a[cut..]].concat();
//!         (child1, child2)
//!     }
//!
//!     fn mutate(&self, candidate: &mut Vec<u8>, rng: &mut RandomNumberGenerator) {
//!         let index = rng.gen_index(candidate.len());
//!         candidate[index] ^= 1;
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Contract between the engine and a problem plug-in.
///
/// The implementing type is the immutable problem context: city
/// coordinates, item weights and prices, the target password. All four
/// operations take `&self`, so evaluation is a pure function of the
/// candidate and that context, with no hidden state.
pub trait Problem {
    /// One solution instance in the search space.
    type Candidate: Clone + Debug + Send + Sync;

    /// Samples one independently-valid random candidate.
    ///
    /// Used by the engine to build the initial population. Every sampled
    /// candidate must satisfy the representation's own invariants
    /// (`validate` must accept it).
    fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Self::Candidate;

    /// Maps a candidate to a scalar fitness score.
    ///
    /// Evaluation never fails and always returns a finite number.
    /// Constrained problems score an infeasible candidate with a fixed
    /// low penalty constant instead of raising an error, pushing
    /// constraint violation into fitness space. The penalty must be
    /// strictly positive if the run uses roulette selection, which
    /// requires strictly positive weights.
    fn evaluate(&self, candidate: &Self::Candidate) -> f64;

    /// Recombines two parents into exactly two children.
    ///
    /// Crossover never fails. Representations with a global constraint
    /// (fixed gene sum, permutation uniqueness) must repair or reject the
    /// cut so both children remain valid.
    fn crossover(
        &self,
        a: &Self::Candidate,
        b: &Self::Candidate,
        rng: &mut RandomNumberGenerator,
    ) -> (Self::Candidate, Self::Candidate);

    /// Perturbs a candidate in place.
    ///
    /// The engine applies the configured mutation probability per
    /// candidate before calling this; the operator itself is
    /// unconditional once invoked.
    fn mutate(&self, candidate: &mut Self::Candidate, rng: &mut RandomNumberGenerator);

    /// Checks a candidate against the representation's domain invariants.
    ///
    /// The engine calls this on every freshly produced candidate and
    /// surfaces any error as a fatal `RepresentationViolation` with phase
    /// and generation context, since a failure here indicates a plug-in
    /// bug, not transient noise. The default accepts everything.
    fn validate(&self, _candidate: &Self::Candidate) -> Result<()> {
        Ok(())
    }
}
