pub mod engine;
pub mod options;
pub mod phase;

pub use engine::{EvolutionEngine, EvolutionResult, TerminationReason};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, SelectionMethod};
pub use phase::Phase;
