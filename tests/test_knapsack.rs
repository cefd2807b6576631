//! End-to-end run on a 0/1 knapsack: maximize the value of the selected
//! items under a weight limit. Constraint violation is pushed into
//! fitness space: an overweight candidate scores a fixed low penalty
//! constant (strictly positive, so it stays selectable under roulette
//! weighting) and never an error.

use evogen::crossover::{CrossoverStrategy, SinglePointCrossover};
use evogen::direction::Direction;
use evogen::evolution::{EvolutionEngine, EvolutionOptions, SelectionMethod};
use evogen::mutation::{MutationStrategy, ResampleMutation};
use evogen::problem::Problem;
use evogen::representation::{BinaryDomain, GeneDomain};
use evogen::rng::RandomNumberGenerator;

/// Fitness of any candidate exceeding the weight limit.
const PENALTY: f64 = 0.01;

#[derive(Debug)]
struct Knapsack {
    weights: Vec<f64>,
    values: Vec<f64>,
    limit: f64,
}

impl Knapsack {
    fn fixture() -> Self {
        Self {
            weights: vec![12.0, 2.0, 4.0, 1.0, 7.0],
            values: vec![4.0, 2.0, 10.0, 1.0, 5.0],
            limit: 15.0,
        }
    }

    fn total_weight(&self, candidate: &[u8]) -> f64 {
        candidate
            .iter()
            .zip(&self.weights)
            .map(|(&picked, weight)| picked as f64 * weight)
            .sum()
    }

    fn total_value(&self, candidate: &[u8]) -> f64 {
        candidate
            .iter()
            .zip(&self.values)
            .map(|(&picked, value)| picked as f64 * value)
            .sum()
    }
}

impl Problem for Knapsack {
    type Candidate = Vec<u8>;

    fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Vec<u8> {
        BinaryDomain.sample_sequence(self.weights.len(), rng)
    }

    fn evaluate(&self, candidate: &Vec<u8>) -> f64 {
        if self.total_weight(candidate) > self.limit {
            return PENALTY;
        }
        // +1 keeps the empty knapsack strictly positive for roulette
        self.total_value(candidate) + 1.0
    }

    fn crossover(
        &self,
        a: &Vec<u8>,
        b: &Vec<u8>,
        rng: &mut RandomNumberGenerator,
    ) -> (Vec<u8>, Vec<u8>) {
        SinglePointCrossover
            .crossover(a, b, rng)
            .expect("candidates share the item count")
    }

    fn mutate(&self, candidate: &mut Vec<u8>, rng: &mut RandomNumberGenerator) {
        ResampleMutation::new(BinaryDomain).mutate(candidate, rng);
    }
}

#[test]
fn test_overweight_candidates_score_exactly_the_penalty() {
    let knapsack = Knapsack::fixture();

    // All items: weight 26 > 15
    assert_eq!(knapsack.evaluate(&vec![1, 1, 1, 1, 1]), PENALTY);
    // Items 0 and 4: weight 19 > 15
    assert_eq!(knapsack.evaluate(&vec![1, 0, 0, 0, 1]), PENALTY);
    // Feasible selections score value, never the penalty
    assert_eq!(knapsack.evaluate(&vec![0, 1, 1, 1, 0]), 14.0);
    assert_eq!(knapsack.evaluate(&vec![0, 0, 0, 0, 0]), 1.0);
}

#[test]
fn test_run_returns_a_feasible_best() {
    let knapsack = Knapsack::fixture();
    let options = EvolutionOptions::builder()
        .population_size(20)
        .generation_limit(60)
        .crossover_probability(0.6)
        .mutation_probability(0.2)
        .direction(Direction::Maximize)
        .selection_method(SelectionMethod::Roulette)
        .build();
    let engine = EvolutionEngine::new(knapsack, options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = engine.run(&mut rng).unwrap();

    // A feasible candidate (the empty knapsack scores 1.0) always beats
    // the penalty, so the best-ever candidate is within the limit
    assert!(result.score > PENALTY);
    assert!(engine.problem().total_weight(&result.best) <= engine.problem().limit);

    // Items 1, 2, 3 and 4 fit (weight 14) for a value of 18 + 1; the
    // optimum is reachable well within 60 generations
    assert!(result.score >= 14.0, "weak best score {}", result.score);
}
