pub mod mutation_strategy;
pub mod resample;
pub mod swap;

pub use mutation_strategy::MutationStrategy;
pub use resample::ResampleMutation;
pub use swap::SwapMutation;
