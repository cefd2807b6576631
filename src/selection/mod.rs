pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use roulette::RouletteSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
