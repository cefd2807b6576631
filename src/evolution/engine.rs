use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, trace};

use super::{
    options::{EvolutionOptions, SelectionMethod},
    phase::Phase,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    problem::Problem,
    rng::RandomNumberGenerator,
    selection::{RouletteSelection, SelectionStrategy, TournamentSelection},
};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The generation counter reached the configured limit.
    GenerationLimit,
    /// The best-ever score satisfied the configured target fitness.
    TargetReached,
    /// The cancellation flag was observed at a generation boundary.
    Cancelled,
}

/// The result of an evolutionary run: the best-ever candidate, its score
/// and the generation count at termination.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<C> {
    /// The best candidate observed in any generation.
    pub best: C,
    /// The fitness score of the best candidate.
    pub score: f64,
    /// The generation counter at termination.
    pub generations: usize,
    /// The stopping condition that ended the run.
    pub reason: TerminationReason,
}

/// Drives the evolutionary loop for a problem plug-in.
///
/// The engine owns the population state and runs one generation at a
/// time: evaluate, select, recombine, mutate, replace. The random source
/// is consumed in a fixed order (initialization, then per generation
/// selection, recombination, mutation), so a run is reproducible given a
/// seeded generator.
///
/// # Examples
///
/// ```
/// use evogen::direction::Direction;
/// use evogen::error::Result;
/// use evogen::evolution::{EvolutionEngine, EvolutionOptions, SelectionMethod};
/// use evogen::problem::Problem;
/// use evogen::rng::RandomNumberGenerator;
///
/// /// Maximize the number of switched-on boxes, with a +1 offset so
/// /// every score is strictly positive for roulette weighting.
/// struct BinaryBox;
///
/// impl Problem for BinaryBox {
///     type Candidate = Vec<u8>;
///
///     fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Vec<u8> {
///         (0..4).map(|_| rng.gen_range(0..=1u8)).collect()
///     }
///
///     fn evaluate(&self, candidate: &Vec<u8>) -> f64 {
///         candidate.iter().map(|&g| g as f64).sum::<f64>() + 1.0
///     }
///
///     fn crossover(
///         &self,
///         a: &Vec<u8>,
///         b: &Vec<u8>,
///         rng: &mut RandomNumberGenerator,
///     ) -> (Vec<u8>, Vec<u8>) {
///         let cut = rng.gen_range(1..a.len());
///         ([&a[..cut], &b[cut..]].concat(), [&b[..cut], &a[cut..]].concat())
///     }
///
///     fn mutate(&self, candidate: &mut Vec<u8>, rng: &mut RandomNumberGenerator) {
///         let index = rng.gen_index(candidate.len());
///         candidate[index] ^= 1;
///     }
/// }
///
/// fn main() -> Result<()> {
///     let options = EvolutionOptions::builder()
///         .population_size(10)
///         .generation_limit(50)
///         .crossover_probability(0.6)
///         .mutation_probability(0.2)
///         .selection_method(SelectionMethod::Roulette)
///         .direction(Direction::Maximize)
///         .target_fitness(5.0)
///         .build();
///
///     let engine = EvolutionEngine::new(BinaryBox, options)?;
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let result = engine.run(&mut rng)?;
///
///     assert_eq!(result.score, 5.0);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionEngine<P: Problem> {
    problem: P,
    options: EvolutionOptions,
}

impl<P: Problem> EvolutionEngine<P> {
    /// Creates a new engine for the given problem and options.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the options fail validation;
    /// no misconfiguration survives to the loop.
    pub fn new(problem: P, options: EvolutionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { problem, options })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Evolves until a stopping condition is reached and returns the
    /// best-ever candidate, its score and the generation count.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult<P::Candidate>> {
        let never_cancelled = AtomicBool::new(false);
        self.run_with_cancel(rng, &never_cancelled)
    }

    /// Like [`run`](Self::run), but additionally observes a cancellation
    /// flag.
    ///
    /// The flag is checked only at generation boundaries: a generation
    /// that has started always completes, and population replacement
    /// stays atomic between generations.
    pub fn run_with_cancel(
        &self,
        rng: &mut RandomNumberGenerator,
        cancel: &AtomicBool,
    ) -> Result<EvolutionResult<P::Candidate>> {
        let direction = self.options.get_direction();

        // Initializing
        let mut population: Vec<P::Candidate> = (0..self.options.get_population_size())
            .map(|_| self.problem.sample_candidate(rng))
            .collect();
        for candidate in &population {
            self.check_candidate(candidate, Phase::Initializing, 0)?;
        }

        let mut best: Option<(P::Candidate, f64)> = None;
        let mut generation = 0usize;

        let reason = loop {
            // Evaluating
            let fitness = self.evaluate_population(&population, generation)?;
            for (candidate, &score) in population.iter().zip(&fitness) {
                let improved = match &best {
                    None => true,
                    Some((_, incumbent)) => direction.is_improvement(score, *incumbent),
                };
                if improved {
                    best = Some((candidate.clone(), score));
                }
            }
            let best_score = best.as_ref().map(|(_, s)| *s).unwrap_or(f64::NAN);
            debug!(generation, best_score, "generation evaluated");

            if let Some(target) = self.options.get_target_fitness() {
                if direction.meets_target(best_score, target) {
                    break TerminationReason::TargetReached;
                }
            }
            if generation >= self.options.get_generation_limit() {
                break TerminationReason::GenerationLimit;
            }
            if cancel.load(Ordering::Relaxed) {
                break TerminationReason::Cancelled;
            }

            let mating_pool = self.select_mating_pool(&population, &fitness, rng)?;
            trace!(generation, phase = %Phase::Selecting, "mating pool built");

            // Recombining + Mutating
            let next_generation = self.breed_next_generation(&mating_pool, generation, rng)?;

            // The old population is discarded only after the next one is
            // fully built
            population = next_generation;
            generation += 1;
            trace!(generation, phase = %Phase::Replaced, "population replaced");
        };

        let (best, score) = best.ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        info!(
            generations = generation,
            score,
            reason = ?reason,
            phase = %Phase::Terminated,
            "evolution terminated"
        );
        Ok(EvolutionResult {
            best,
            score,
            generations: generation,
            reason,
        })
    }

    /// Scores every candidate, rejecting non-finite values.
    fn evaluate_population(
        &self,
        population: &[P::Candidate],
        generation: usize,
    ) -> Result<Vec<f64>> {
        population
            .iter()
            .map(|candidate| {
                let score = self.problem.evaluate(candidate);
                if !score.is_finite() {
                    return Err(GeneticError::InvalidNumericValue(format!(
                        "Non-finite fitness score {} in phase {} (generation {})",
                        score,
                        Phase::Evaluating,
                        generation
                    )));
                }
                Ok(score)
            })
            .collect()
    }

    /// Builds the mating pool with the configured selection strategy.
    fn select_mating_pool(
        &self,
        population: &[P::Candidate],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P::Candidate>> {
        let direction = self.options.get_direction();
        match self.options.get_selection_method() {
            SelectionMethod::Roulette => {
                RouletteSelection::new().select(population, fitness, direction, rng)
            }
            SelectionMethod::Tournament => {
                TournamentSelection::new(self.options.get_tournament_size())?
                    .select(population, fitness, direction, rng)
            }
        }
    }

    /// Recombines the mating pool in adjacent pairs, then mutates the
    /// offspring, each gated on its configured probability. An unpaired
    /// last candidate passes through unchanged, so the population size
    /// stays constant.
    fn breed_next_generation(
        &self,
        mating_pool: &[P::Candidate],
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P::Candidate>> {
        let crossover_probability = self.options.get_crossover_probability();
        let mutation_probability = self.options.get_mutation_probability();

        let mut next_generation = Vec::with_capacity(mating_pool.len());
        let mut pairs = mating_pool.chunks_exact(2);
        for pair in &mut pairs {
            if rng.gen_bool(crossover_probability) {
                let (child1, child2) = self.problem.crossover(&pair[0], &pair[1], rng);
                self.check_candidate(&child1, Phase::Recombining, generation)?;
                self.check_candidate(&child2, Phase::Recombining, generation)?;
                next_generation.push(child1);
                next_generation.push(child2);
            } else {
                next_generation.push(pair[0].clone());
                next_generation.push(pair[1].clone());
            }
        }
        next_generation.extend(pairs.remainder().iter().cloned());

        for candidate in &mut next_generation {
            if rng.gen_bool(mutation_probability) {
                self.problem.mutate(candidate, rng);
                self.check_candidate(candidate, Phase::Mutating, generation)?;
            }
        }
        Ok(next_generation)
    }

    /// Surfaces a plug-in invariant violation with phase and generation
    /// context.
    fn check_candidate(
        &self,
        candidate: &P::Candidate,
        phase: Phase,
        generation: usize,
    ) -> Result<()> {
        self.problem.validate(candidate).map_err(|e| {
            GeneticError::RepresentationViolation(format!(
                "in phase {} (generation {}): {}",
                phase, generation, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    /// Maximize the gene sum, offset by +1 for roulette positivity.
    #[derive(Debug, Clone)]
    struct BoxSum {
        gene_count: usize,
    }

    impl Problem for BoxSum {
        type Candidate = Vec<u8>;

        fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Vec<u8> {
            (0..self.gene_count).map(|_| rng.gen_range(0..=1u8)).collect()
        }

        fn evaluate(&self, candidate: &Vec<u8>) -> f64 {
            candidate.iter().map(|&g| g as f64).sum::<f64>() + 1.0
        }

        fn crossover(
            &self,
            a: &Vec<u8>,
            b: &Vec<u8>,
            rng: &mut RandomNumberGenerator,
        ) -> (Vec<u8>, Vec<u8>) {
            let cut = rng.gen_range(1..a.len());
            ([&a[..cut], &b[cut..]].concat(), [&b[..cut], &a[cut..]].concat())
        }

        fn mutate(&self, candidate: &mut Vec<u8>, rng: &mut RandomNumberGenerator) {
            let index = rng.gen_index(candidate.len());
            candidate[index] ^= 1;
        }

        fn validate(&self, candidate: &Vec<u8>) -> Result<()> {
            if candidate.len() != self.gene_count {
                return Err(GeneticError::Other(format!(
                    "expected {} genes, got {}",
                    self.gene_count,
                    candidate.len()
                )));
            }
            Ok(())
        }
    }

    fn tournament_options(population_size: usize) -> EvolutionOptions {
        EvolutionOptions::builder()
            .population_size(population_size)
            .generation_limit(10)
            .direction(Direction::Maximize)
            .build()
    }

    #[test]
    fn test_breed_preserves_population_size() {
        let engine = EvolutionEngine::new(BoxSum { gene_count: 4 }, tournament_options(6)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for pool_size in [2, 5, 6, 9] {
            let pool: Vec<Vec<u8>> = (0..pool_size)
                .map(|_| engine.problem.sample_candidate(&mut rng))
                .collect();
            let next = engine.breed_next_generation(&pool, 0, &mut rng).unwrap();
            assert_eq!(next.len(), pool_size);
        }
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = EvolutionOptions::builder().population_size(0).build();
        let result = EvolutionEngine::new(BoxSum { gene_count: 4 }, options);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_run_terminates_at_generation_limit() {
        let engine = EvolutionEngine::new(BoxSum { gene_count: 4 }, tournament_options(8)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = engine.run(&mut rng).unwrap();
        assert_eq!(result.generations, 10);
        assert_eq!(result.reason, TerminationReason::GenerationLimit);
    }

    #[test]
    fn test_run_terminates_on_target() {
        let options = EvolutionOptions::builder()
            .population_size(8)
            .generation_limit(100)
            .direction(Direction::Maximize)
            .target_fitness(1.0) // any candidate scores at least 1.0
            .build();
        let engine = EvolutionEngine::new(BoxSum { gene_count: 4 }, options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = engine.run(&mut rng).unwrap();
        assert_eq!(result.generations, 0);
        assert_eq!(result.reason, TerminationReason::TargetReached);
    }

    #[test]
    fn test_run_observes_cancellation() {
        let engine =
            EvolutionEngine::new(BoxSum { gene_count: 4 }, tournament_options(8)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let cancel = AtomicBool::new(true);

        let result = engine.run_with_cancel(&mut rng, &cancel).unwrap();
        assert_eq!(result.generations, 0);
        assert_eq!(result.reason, TerminationReason::Cancelled);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let engine = EvolutionEngine::new(BoxSum { gene_count: 4 }, tournament_options(8)).unwrap();

        let mut rng1 = RandomNumberGenerator::from_seed(7);
        let mut rng2 = RandomNumberGenerator::from_seed(7);

        let result1 = engine.run(&mut rng1).unwrap();
        let result2 = engine.run(&mut rng2).unwrap();

        assert_eq!(result1, result2);
    }

    #[test]
    fn test_non_finite_fitness_is_fatal() {
        #[derive(Debug)]
        struct NanProblem;

        impl Problem for NanProblem {
            type Candidate = u8;

            fn sample_candidate(&self, _rng: &mut RandomNumberGenerator) -> u8 {
                0
            }

            fn evaluate(&self, _candidate: &u8) -> f64 {
                f64::NAN
            }

            fn crossover(
                &self,
                a: &u8,
                b: &u8,
                _rng: &mut RandomNumberGenerator,
            ) -> (u8, u8) {
                (*a, *b)
            }

            fn mutate(&self, _candidate: &mut u8, _rng: &mut RandomNumberGenerator) {}
        }

        let engine = EvolutionEngine::new(NanProblem, tournament_options(4)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = engine.run(&mut rng);
        assert!(matches!(result, Err(GeneticError::InvalidNumericValue(_))));
    }

    #[test]
    fn test_representation_violation_carries_context() {
        #[derive(Debug)]
        struct BrokenCrossover;

        impl Problem for BrokenCrossover {
            type Candidate = Vec<u8>;

            fn sample_candidate(&self, _rng: &mut RandomNumberGenerator) -> Vec<u8> {
                vec![0, 1]
            }

            fn evaluate(&self, _candidate: &Vec<u8>) -> f64 {
                1.0
            }

            fn crossover(
                &self,
                _a: &Vec<u8>,
                _b: &Vec<u8>,
                _rng: &mut RandomNumberGenerator,
            ) -> (Vec<u8>, Vec<u8>) {
                // Loses a gene: validate must catch this
                (vec![0], vec![1])
            }

            fn mutate(&self, _candidate: &mut Vec<u8>, _rng: &mut RandomNumberGenerator) {}

            fn validate(&self, candidate: &Vec<u8>) -> Result<()> {
                if candidate.len() != 2 {
                    return Err(GeneticError::Other("gene lost".to_string()));
                }
                Ok(())
            }
        }

        let options = EvolutionOptions::builder()
            .population_size(4)
            .generation_limit(10)
            .crossover_probability(1.0)
            .build();
        let engine = EvolutionEngine::new(BrokenCrossover, options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        match engine.run(&mut rng) {
            Err(GeneticError::RepresentationViolation(msg)) => {
                assert!(msg.contains("recombining"));
                assert!(msg.contains("generation 0"));
            }
            other => panic!("expected RepresentationViolation, got {:?}", other.map(|r| r.score)),
        }
    }
}
