//! # Trials
//!
//! Statistical experiments rerun the same evolutionary setup many times
//! with different seeds. `run_trials` executes those runs in parallel.
//! Parallelism is across independent runs only, never within one, so
//! each run stays byte-for-byte reproducible from its seed.
//!
//! ## Example
//!
//! ```no_run
//! use evogen::evolution::{EvolutionEngine, EvolutionOptions};
//! use evogen::trials::run_trials;
//! # use evogen::problem::Problem;
//! # use evogen::rng::RandomNumberGenerator;
//! # #[derive(Debug)] struct P;
//! # impl Problem for P {
//! #     type Candidate = u8;
//! #     fn sample_candidate(&self, _rng: &mut RandomNumberGenerator) -> u8 { 0 }
//! #     fn evaluate(&self, _c: &u8) -> f64 { 1.0 }
//! #     fn crossover(&self, a: &u8, b: &u8, _rng: &mut RandomNumberGenerator) -> (u8, u8) { (*a, *b) }
//! #     fn mutate(&self, _c: &mut u8, _rng: &mut RandomNumberGenerator) {}
//! # }
//!
//! # fn main() -> evogen::error::Result<()> {
//! let engine = EvolutionEngine::new(P, EvolutionOptions::default())?;
//! let results = run_trials(&engine, &[1, 2, 3, 4, 5])?;
//! assert_eq!(results.len(), 5);
//! # Ok(())
//! # }
//! ```

use rayon::prelude::*;

use crate::error::Result;
use crate::evolution::{EvolutionEngine, EvolutionResult};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;

/// Runs one independent evolutionary trial per seed, in parallel across
/// trials.
///
/// Each trial gets its own generator seeded from its entry in `seeds`,
/// so results are in seed order and every individual trial matches a
/// sequential `engine.run` with the same seed.
///
/// # Errors
///
/// Returns the first error produced by any trial; errors here are plug-in
/// or configuration bugs, so one failing trial invalidates the batch.
pub fn run_trials<P>(
    engine: &EvolutionEngine<P>,
    seeds: &[u64],
) -> Result<Vec<EvolutionResult<P::Candidate>>>
where
    P: Problem + Sync,
{
    seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            engine.run(&mut rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::evolution::EvolutionOptions;

    /// Maximize a single bounded integer gene.
    #[derive(Debug)]
    struct OneGene;

    impl Problem for OneGene {
        type Candidate = Vec<u8>;

        fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Vec<u8> {
            vec![rng.gen_range(0..=1u8), rng.gen_range(0..=1u8)]
        }

        fn evaluate(&self, candidate: &Vec<u8>) -> f64 {
            candidate.iter().map(|&g| g as f64).sum::<f64>() + 1.0
        }

        fn crossover(
            &self,
            a: &Vec<u8>,
            b: &Vec<u8>,
            _rng: &mut RandomNumberGenerator,
        ) -> (Vec<u8>, Vec<u8>) {
            (vec![a[0], b[1]], vec![b[0], a[1]])
        }

        fn mutate(&self, candidate: &mut Vec<u8>, rng: &mut RandomNumberGenerator) {
            let index = rng.gen_index(candidate.len());
            candidate[index] ^= 1;
        }
    }

    fn engine() -> EvolutionEngine<OneGene> {
        let options = EvolutionOptions::builder()
            .population_size(6)
            .generation_limit(5)
            .direction(Direction::Maximize)
            .build();
        EvolutionEngine::new(OneGene, options).unwrap()
    }

    #[test]
    fn test_one_result_per_seed() {
        let results = run_trials(&engine(), &[1, 2, 3, 4]).unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_trials_match_sequential_runs() {
        let engine = engine();
        let seeds = [10, 20, 30];

        let parallel = run_trials(&engine, &seeds).unwrap();
        for (&seed, result) in seeds.iter().zip(&parallel) {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let sequential = engine.run(&mut rng).unwrap();
            assert_eq!(*result, sequential);
        }
    }

    #[test]
    fn test_empty_seed_list_yields_no_trials() {
        let results = run_trials(&engine(), &[]).unwrap();
        assert!(results.is_empty());
    }
}
