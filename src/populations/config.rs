use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for population generation
/// and evolution.
///
/// # Note
/// All quantities expressing probabilities
/// should be in the range [0.0, 1.0]. Using
/// values that are not in this bound may result
/// in odd behaviours and/or incorrect programs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Size of the population.
    pub size: NonZeroUsize,
    /// Number of genes grown into the seed genome before the
    /// population is filled with weight-randomized clones of it.
    /// Must not exceed `inputs × outputs`.
    pub starting_gene_count: usize,
    /// Weight of excess genes in compatibility distance (c1).
    pub excess_gene_factor: f32,
    /// Weight of disjoint genes in compatibility distance (c2).
    pub disjoint_gene_factor: f32,
    /// Weight of the mean common-gene weight difference in
    /// compatibility distance (c3).
    pub common_weight_factor: f32,
    /// Compatibility distance beyond which genomes are
    /// considered as belonging to different species.
    pub distance_threshold: f32,
    /// Chance of a gene addition mutation per offspring.
    pub gene_addition_mutation_chance: f32,
    /// Chance of a node addition mutation per offspring.
    pub node_addition_mutation_chance: f32,
    /// Chance of a weight nudge pass per offspring.
    pub weight_nudge_mutation_chance: f32,
}

impl PopulationConfig {
    /// Returns a "zero-valued" default configuration.
    /// All values are 0, or in the case of
    /// `NonZeroUsize`s, 1.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation, or to fill in unused values.
    ///
    /// # Examples
    /// ```
    /// use mononeat::populations::PopulationConfig;
    ///
    /// let config = PopulationConfig {
    ///     distance_threshold: 3.0,
    ///     ..PopulationConfig::zero()
    /// };
    /// ```
    pub const fn zero() -> PopulationConfig {
        PopulationConfig {
            // SAFETY: 1 is a valid NonZeroUsize. Replace this with
            // NonZeroUsize::new(1).unwrap() once const Option::unwrap
            // becomes stable.
            size: unsafe { NonZeroUsize::new_unchecked(1) },
            starting_gene_count: 0,
            excess_gene_factor: 0.0,
            disjoint_gene_factor: 0.0,
            common_weight_factor: 0.0,
            distance_threshold: 0.0,
            gene_addition_mutation_chance: 0.0,
            node_addition_mutation_chance: 0.0,
            weight_nudge_mutation_chance: 0.0,
        }
    }
}
