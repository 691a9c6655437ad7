//! An implementation of NeuroEvolution of Augmenting Topologies
//! with single-parent reproduction: offspring are mutated clones
//! of one parent, never the recombination of two.
//!
//! Genomes are maps from historical-marking id to connection
//! gene. Mutation grows topology incrementally, a
//! compatibility-distance metric clusters the population into
//! species each generation, and explicit fitness sharing plus
//! proportional offspring allotment protect novel structures
//! from premature competitive exclusion. Networks are evaluated
//! by fixed-iteration relaxation, so the recurrent topologies
//! mutation can produce need no special handling.
//!
//! The crate is a library core: the driving loop, the task and
//! its scoring all live with the caller, which only has to
//! assign a fitness to every genome between generations.
//!
//! # Example usage: evolving an OR-function approximator
//! ```
//! use mononeat::genomics::{ActivationType, GeneticConfig, WeightRange};
//! use mononeat::populations::{Population, PopulationConfig};
//! use std::num::NonZeroUsize;
//!
//! let genetic_config = GeneticConfig {
//!     input_count: NonZeroUsize::new(2).unwrap(),
//!     output_count: NonZeroUsize::new(1).unwrap(),
//!     activation_type: ActivationType::Sigmoid,
//!     activation_iterations: 4,
//!     weight_range: WeightRange::new(-2.0, 2.0),
//!     nudge_range: WeightRange::new(-0.5, 0.5),
//!     weight_replacement_chance: 0.1,
//! };
//! let config = PopulationConfig {
//!     size: NonZeroUsize::new(30).unwrap(),
//!     starting_gene_count: 2,
//!     excess_gene_factor: 1.0,
//!     disjoint_gene_factor: 1.0,
//!     common_weight_factor: 0.4,
//!     distance_threshold: 3.0,
//!     gene_addition_mutation_chance: 0.05,
//!     node_addition_mutation_chance: 0.03,
//!     weight_nudge_mutation_chance: 0.8,
//! };
//!
//! let cases = [
//!     ([0.0, 0.0], 0.0),
//!     ([0.0, 1.0], 1.0),
//!     ([1.0, 0.0], 1.0),
//!     ([1.0, 1.0], 1.0),
//! ];
//!
//! let genetic = genetic_config.clone();
//! let mut population = Population::from_seed(config, genetic_config, 42).unwrap();
//! for _ in 0..10 {
//!     population.evaluate_fitness(|genome| {
//!         let mut error = 0.0;
//!         for (inputs, expected) in &cases {
//!             let outputs = genome.activate(inputs, &genetic).unwrap();
//!             error += (outputs[0] - expected).abs();
//!         }
//!         (4.0 - error).powf(2.0)
//!     });
//!     population.reproduce();
//! }
//!
//! assert_eq!(population.generation(), 10);
//! assert_eq!(population.genomes().len(), 30);
//! ```

pub mod genomics;
pub mod populations;

/// Identifier assigned to each gene at the moment of its
/// creation: globally unique within a run and monotonically
/// increasing, so that genes with the same id in different
/// genomes denote the same mutation event and can be aligned
/// directly across genomes.
pub type Innovation = usize;
