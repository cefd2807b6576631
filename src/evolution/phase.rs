use std::fmt;

/// The phases of the evolutionary loop.
///
/// One generation runs the phases in order: evaluate, select, recombine,
/// mutate, replace. The engine reports the current phase in tracing
/// events and in the context of representation violations, so a plug-in
/// bug can be traced to the operation that produced the bad candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sampling the initial population.
    Initializing,
    /// Scoring every candidate and updating the best-ever record.
    Evaluating,
    /// Building the mating pool from the scored population.
    Selecting,
    /// Recombining adjacent mating pool pairs into children.
    Recombining,
    /// Perturbing next-generation candidates.
    Mutating,
    /// Swapping in the next generation and advancing the counter.
    Replaced,
    /// A stopping condition was reached.
    Terminated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initializing => "initializing",
            Phase::Evaluating => "evaluating",
            Phase::Selecting => "selecting",
            Phase::Recombining => "recombining",
            Phase::Mutating => "mutating",
            Phase::Replaced => "replaced",
            Phase::Terminated => "terminated",
        };
        f.write_str(name)
    }
}
