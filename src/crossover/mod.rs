pub mod crossover_strategy;
pub mod ordered;
pub mod single_point;

pub use crossover_strategy::CrossoverStrategy;
pub use ordered::OrderedCrossover;
pub use single_point::SinglePointCrossover;
