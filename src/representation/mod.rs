//! # Representation
//!
//! Gene domains and sampling helpers. A candidate is an ordered sequence
//! of genes; this module provides the per-gene domains (binary, bounded
//! integer, symbol alphabet), permutation helpers and the fixed-sum real
//! domain with its constraint repair, so that plug-ins assemble their
//! `sample_candidate`/`mutate`/`crossover` from shared parts instead of
//! maintaining near-identical copies per problem.

pub mod domain;
pub mod fixed_sum;
pub mod permutation;

pub use domain::{BinaryDomain, BoundedIntDomain, GeneDomain, SymbolDomain};
pub use fixed_sum::FixedSumDomain;
pub use permutation::{is_permutation, random_permutation};
