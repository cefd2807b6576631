//! End-to-end run on the password-guessing problem: minimize the
//! letter-by-letter distance between a guessed word and a secret one.
//! A minimization problem, so selection must be tournament-based.

use evogen::crossover::{CrossoverStrategy, SinglePointCrossover};
use evogen::direction::Direction;
use evogen::evolution::{EvolutionEngine, EvolutionOptions, SelectionMethod, TerminationReason};
use evogen::mutation::{MutationStrategy, ResampleMutation};
use evogen::problem::Problem;
use evogen::representation::{GeneDomain, SymbolDomain};
use evogen::rng::RandomNumberGenerator;

#[derive(Debug)]
struct PasswordGuess {
    secret: Vec<char>,
    domain: SymbolDomain,
}

impl PasswordGuess {
    fn new(secret: &str) -> Self {
        Self {
            secret: secret.chars().collect(),
            domain: SymbolDomain::new('a'..='z').unwrap(),
        }
    }
}

impl Problem for PasswordGuess {
    type Candidate = Vec<char>;

    fn sample_candidate(&self, rng: &mut RandomNumberGenerator) -> Vec<char> {
        self.domain.sample_sequence(self.secret.len(), rng)
    }

    /// Sum over positions of the absolute distance between the guessed
    /// letter and the secret one.
    fn evaluate(&self, candidate: &Vec<char>) -> f64 {
        candidate
            .iter()
            .zip(&self.secret)
            .map(|(&guess, &secret)| (guess as i64 - secret as i64).abs() as f64)
            .sum()
    }

    fn crossover(
        &self,
        a: &Vec<char>,
        b: &Vec<char>,
        rng: &mut RandomNumberGenerator,
    ) -> (Vec<char>, Vec<char>) {
        SinglePointCrossover
            .crossover(a, b, rng)
            .expect("guesses share the secret's length")
    }

    fn mutate(&self, candidate: &mut Vec<char>, rng: &mut RandomNumberGenerator) {
        ResampleMutation::new(self.domain.clone()).mutate(candidate, rng);
    }
}

#[test]
fn test_guesses_converge_toward_the_secret() {
    let options = EvolutionOptions::builder()
        .population_size(50)
        .generation_limit(300)
        .crossover_probability(0.5)
        .mutation_probability(0.3)
        .direction(Direction::Minimize)
        .selection_method(SelectionMethod::Tournament)
        .tournament_size(3)
        .target_fitness(0.0)
        .build();
    let engine = EvolutionEngine::new(PasswordGuess::new("rust"), options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = engine.run(&mut rng).unwrap();

    // A uniform random four-letter guess sits around distance 35; the
    // evolved guess must land far below that
    assert!(result.score < 20.0, "weak best score {}", result.score);
    if result.reason == TerminationReason::TargetReached {
        assert_eq!(result.best, vec!['r', 'u', 's', 't']);
        assert_eq!(result.score, 0.0);
    }
}

#[test]
fn test_exact_guess_scores_zero() {
    let problem = PasswordGuess::new("gato");
    assert_eq!(problem.evaluate(&"gato".chars().collect()), 0.0);
    // One letter off by one
    assert_eq!(problem.evaluate(&"gbto".chars().collect()), 1.0);
}
