pub mod crossover;
pub mod direction;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod problem;
pub mod representation;
pub mod rng;
pub mod selection;
pub mod trials;

// Re-export commonly used types for convenience
pub use direction::Direction;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionEngine, EvolutionOptions, EvolutionResult, SelectionMethod};
pub use problem::Problem;
pub use rng::RandomNumberGenerator;
