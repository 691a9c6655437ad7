//! Genomes are the focus of evolution in NEAT.
//! They are a collection of connection genes keyed by
//! historical-marking id, and double as their own phenotype:
//! a genome is evaluated directly by fixed-iteration
//! relaxation over its enabled genes, so cyclic topologies
//! produced by mutation are handled without special casing.

mod config;
mod errors;
mod genes;
mod nodes;

pub use config::{GeneticConfig, WeightRange};
pub use errors::{ActivationError, GeneInsertionError, GeneMutationError, NodeMutationError};
pub use genes::Gene;
pub use nodes::{ActivationType, NodeType};

use crate::Innovation;

use ahash::RandomState;
use rand::prelude::{IteratorRandom, Rng, SliceRandom};
use serde::{Deserialize, Serialize};

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Number of candidate endpoint pairs sampled by
/// [`Genome::mutate_add_gene`] before the mutation
/// gives up and reports failure.
pub const MAX_GENE_MUTATION_ATTEMPTS: usize = 5;

/// A mutable collection of connection genes, together
/// with the fitness values assigned to it during evolution.
///
/// Node ids are implicit: the configured input/output
/// ranges always exist, and every other node is known
/// only through the genes that reference it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Genome {
    genes: HashMap<Innovation, Gene, RandomState>,
    fitness: f32,
    adjusted_fitness: f32,
}

impl Genome {
    /// Creates a new genome with no genes and zeroed fitness.
    pub fn new() -> Genome {
        Genome {
            genes: HashMap::default(),
            fitness: 0.0,
            adjusted_fitness: 0.0,
        }
    }

    /// Adds an enabled gene under the given historical-marking id.
    ///
    /// Endpoint pairs are _not_ checked for duplication here;
    /// callers wanting that invariant must pre-check with
    /// [`gene_between`].
    ///
    /// [`gene_between`]: Genome::gene_between
    ///
    /// # Errors
    /// Fails with [`GeneInsertionError::DuplicateGeneId`] if the
    /// id is already present, leaving the existing gene untouched.
    ///
    /// # Examples
    /// ```
    /// use mononeat::genomics::Genome;
    ///
    /// let mut genome = Genome::new();
    ///
    /// genome.add_gene(0, 0, 1, 0.5).unwrap();
    /// assert!(genome.has_gene(0));
    ///
    /// // Reusing an id is rejected.
    /// assert!(genome.add_gene(0, 1, 2, 1.0).is_err());
    /// ```
    pub fn add_gene(
        &mut self,
        id: Innovation,
        source: Innovation,
        target: Innovation,
        weight: f32,
    ) -> Result<&Gene, GeneInsertionError> {
        if self.genes.contains_key(&id) {
            return Err(GeneInsertionError::DuplicateGeneId(id));
        }
        Ok(self.insert_gene(id, Gene::new(source, target, weight)))
    }

    /// Inserts a gene known not to collide with an existing id.
    fn insert_gene(&mut self, id: Innovation, gene: Gene) -> &Gene {
        self.genes.entry(id).or_insert(gene)
    }

    /// Returns the gene stored under `id`, if any.
    pub fn gene(&self, id: Innovation) -> Option<&Gene> {
        self.genes.get(&id)
    }

    /// Returns whether a gene is stored under `id`.
    pub fn has_gene(&self, id: Innovation) -> bool {
        self.genes.contains_key(&id)
    }

    /// Returns the gene connecting `source` to `target`, if any.
    /// The lookup is direction-sensitive: a gene from `target`
    /// to `source` does not match.
    pub fn gene_between(&self, source: Innovation, target: Innovation) -> Option<&Gene> {
        self.genes
            .values()
            .find(|g| g.source() == source && g.target() == target)
    }

    /// Returns the number of genes in the genome,
    /// enabled or disabled.
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    /// Returns an iterator over the genome's genes and their ids.
    /// No ordering is guaranteed.
    pub fn genes(&self) -> impl Iterator<Item = (Innovation, &Gene)> {
        self.genes.iter().map(|(id, gene)| (*id, gene))
    }

    /// Returns the lowest historical-marking id present,
    /// or `0` for a genome with no genes.
    pub fn min_innovation(&self) -> Innovation {
        self.genes.keys().copied().min().unwrap_or(0)
    }

    /// Returns the highest historical-marking id present,
    /// or `0` for a genome with no genes.
    pub fn max_innovation(&self) -> Innovation {
        self.genes.keys().copied().max().unwrap_or(0)
    }

    /// Returns the genome's node ids in ascending order:
    /// the configured input and output ranges, plus every
    /// node referenced by a gene endpoint.
    pub fn nodes(&self, config: &GeneticConfig) -> Vec<Innovation> {
        let mut ids: HashSet<Innovation, RandomState> =
            (0..config.input_count.get() + config.output_count.get()).collect();
        for gene in self.genes.values() {
            ids.insert(gene.source());
            ids.insert(gene.target());
        }
        let mut ids: Vec<Innovation> = ids.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the highest node id in the genome's node set.
    pub fn max_node(&self, config: &GeneticConfig) -> Innovation {
        let io_max = config.input_count.get() + config.output_count.get() - 1;
        self.genes
            .values()
            .map(|g| g.source().max(g.target()))
            .max()
            .map_or(io_max, |endpoint_max| endpoint_max.max(io_max))
    }

    /// Classifies a node id by range comparison against the
    /// configured input and output counts.
    pub fn node_type(&self, node: Innovation, config: &GeneticConfig) -> NodeType {
        let inputs = config.input_count.get();
        if node < inputs {
            NodeType::Input
        } else if node < inputs + config.output_count.get() {
            NodeType::Output
        } else {
            NodeType::Hidden
        }
    }

    /// Returns the genome's driver-assigned fitness.
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    /// Sets the genome's fitness.
    ///
    /// # Panics
    /// Panics on a negative value; the fitness-sharing and
    /// offspring-allotment arithmetic assumes non-negative
    /// fitness.
    pub fn set_fitness(&mut self, fitness: f32) {
        assert!(fitness >= 0.0, "genome fitness must be non-negative");
        self.fitness = fitness;
    }

    /// Returns the genome's fitness-shared adjusted fitness,
    /// as assigned by the most recent speciation pass.
    pub fn adjusted_fitness(&self) -> f32 {
        self.adjusted_fitness
    }

    pub(crate) fn set_adjusted_fitness(&mut self, adjusted_fitness: f32) {
        self.adjusted_fitness = adjusted_fitness;
    }

    /// Induces a _gene mutation_: a new enabled gene between a
    /// random valid source (input or hidden node) and target
    /// (hidden or output node), with a fresh historical-marking
    /// id drawn from `innovation` and a weight drawn from the
    /// configured weight range.
    ///
    /// Up to [`MAX_GENE_MUTATION_ATTEMPTS`] candidate pairs are
    /// sampled; the first with distinct endpoints and no existing
    /// gene in either direction between them is accepted. The
    /// counter is only advanced on success.
    ///
    /// # Errors
    /// Fails with [`GeneMutationError::NoViablePairFound`] when
    /// every attempt lands on an invalid pair, leaving the genome
    /// and counter unchanged.
    pub fn mutate_add_gene<R: Rng>(
        &mut self,
        innovation: &mut Innovation,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<&Gene, GeneMutationError> {
        let mut sources = Vec::new();
        let mut targets = Vec::new();
        for node in self.nodes(config) {
            match self.node_type(node, config) {
                NodeType::Input => sources.push(node),
                NodeType::Hidden => {
                    sources.push(node);
                    targets.push(node);
                }
                NodeType::Output => targets.push(node),
            }
        }

        for _ in 0..MAX_GENE_MUTATION_ATTEMPTS {
            let (source, target) = match (sources.choose(rng), targets.choose(rng)) {
                (Some(&source), Some(&target)) => (source, target),
                _ => break,
            };
            if source != target
                && self.gene_between(source, target).is_none()
                && self.gene_between(target, source).is_none()
            {
                let id = *innovation;
                *innovation += 1;
                let weight = config.weight_range.sample(rng);
                return Ok(self.insert_gene(id, Gene::new(source, target, weight)));
            }
        }

        Err(GeneMutationError::NoViablePairFound)
    }

    /// Induces a _node mutation_: a random enabled gene is
    /// disabled and replaced by a two-hop path through a newly
    /// allocated node (highest current node id plus one).
    ///
    /// The inbound gene carries weight exactly `1.0` and the
    /// outbound gene the split gene's weight, so the path
    /// preserves the pre-mutation signal magnitude up to the
    /// squash applied at the new node. Both genes consume fresh
    /// historical-marking ids.
    ///
    /// Returns `(inbound gene id, new node id, outbound gene id)`.
    ///
    /// # Errors
    /// Fails with [`NodeMutationError::NoEnabledGenes`] if the
    /// genome holds no enabled gene to split.
    ///
    /// # Examples
    /// ```
    /// use mononeat::genomics::{GeneticConfig, Genome};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let config = GeneticConfig::zero();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut innovation = 0;
    ///
    /// let mut genome = Genome::new();
    /// genome.add_gene(innovation, 0, 1, 0.75).unwrap();
    /// innovation += 1;
    ///
    /// let (inbound, node, outbound) = genome
    ///     .mutate_add_node(&mut innovation, &config, &mut rng)
    ///     .unwrap();
    ///
    /// // The split gene is disabled but preserved unchanged.
    /// assert!(!genome.gene(0).unwrap().enabled());
    /// assert_eq!(genome.gene(0).unwrap().weight(), 0.75);
    ///
    /// assert_eq!(node, 2);
    /// assert_eq!(genome.gene(inbound).unwrap().weight(), 1.0);
    /// assert_eq!(genome.gene(outbound).unwrap().weight(), 0.75);
    /// assert_eq!(innovation, 3);
    /// ```
    pub fn mutate_add_node<R: Rng>(
        &mut self,
        innovation: &mut Innovation,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<(Innovation, Innovation, Innovation), NodeMutationError> {
        let split_id = self
            .genes
            .iter()
            .filter(|(_, gene)| gene.enabled())
            .map(|(id, _)| *id)
            .choose(rng)
            .ok_or(NodeMutationError::NoEnabledGenes)?;

        let new_node = self.max_node(config) + 1;
        let (source, target) = self.genes[&split_id].endpoints();
        let weight = self.genes[&split_id].weight();
        self.genes.get_mut(&split_id).unwrap().set_enabled(false);

        let inbound = *innovation;
        *innovation += 1;
        let outbound = *innovation;
        *innovation += 1;
        self.insert_gene(inbound, Gene::new(source, new_node, 1.0));
        self.insert_gene(outbound, Gene::new(new_node, target, weight));

        Ok((inbound, new_node, outbound))
    }

    /// Induces a _weight mutation_ in every gene: with the
    /// configured replacement chance the weight is redrawn from
    /// the weight range outright, otherwise it is perturbed by a
    /// delta drawn from the nudge range.
    pub fn nudge_weights<R: Rng>(&mut self, config: &GeneticConfig, rng: &mut R) {
        for gene in self.genes.values_mut() {
            if rng.gen::<f32>() < config.weight_replacement_chance {
                gene.randomize_weight(config.weight_range, rng);
            } else {
                gene.nudge_weight(config.nudge_range, rng);
            }
        }
    }

    /// Replaces every gene's weight with a fresh draw from the
    /// weight range. Used when seeding a population with
    /// structurally identical, weight-diverse genomes.
    pub fn randomize_weights<R: Rng>(&mut self, config: &GeneticConfig, rng: &mut R) {
        for gene in self.genes.values_mut() {
            gene.randomize_weight(config.weight_range, rng);
        }
    }

    /// Evaluates the genome's network on the supplied input values.
    ///
    /// The network is not guaranteed acyclic, so evaluation is a
    /// fixed-iteration relaxation rather than a topological-sort
    /// propagation: node values start at zero, inputs are clamped
    /// to the supplied values throughout, and for the configured
    /// number of iterations every non-input node is recomputed in
    /// descending id order as the squash of its enabled incoming
    /// weighted sum, reading whatever values are currently held.
    /// There is no convergence detection; the iteration count is
    /// a latency/settling knob, and is always run in full.
    ///
    /// Returns the output-node values in ascending id order.
    ///
    /// # Errors
    /// Fails with [`ActivationError::ArityMismatch`] if
    /// `inputs.len()` differs from the configured input count.
    ///
    /// # Examples
    /// ```
    /// use mononeat::genomics::{ActivationType, GeneticConfig, Genome};
    ///
    /// let config = GeneticConfig {
    ///     activation_type: ActivationType::Identity,
    ///     activation_iterations: 1,
    ///     ..GeneticConfig::zero()
    /// };
    ///
    /// let mut genome = Genome::new();
    /// genome.add_gene(0, 0, 1, 2.0).unwrap();
    ///
    /// assert_eq!(genome.activate(&[1.5], &config).unwrap(), vec![3.0]);
    /// assert!(genome.activate(&[1.5, 0.0], &config).is_err());
    /// ```
    pub fn activate(
        &self,
        inputs: &[f32],
        config: &GeneticConfig,
    ) -> Result<Vec<f32>, ActivationError> {
        let input_count = config.input_count.get();
        if inputs.len() != input_count {
            return Err(ActivationError::ArityMismatch {
                expected: input_count,
                actual: inputs.len(),
            });
        }

        let nodes = self.nodes(config);
        let mut values: HashMap<Innovation, f32, RandomState> =
            nodes.iter().map(|&id| (id, 0.0)).collect();
        for (id, value) in inputs.iter().enumerate() {
            values.insert(id, *value);
        }

        let mut incoming: HashMap<Innovation, Vec<(Innovation, f32)>, RandomState> =
            HashMap::default();
        for gene in self.genes.values().filter(|g| g.enabled()) {
            incoming
                .entry(gene.target())
                .or_default()
                .push((gene.source(), gene.weight()));
        }

        for _ in 0..config.activation_iterations {
            for &node in nodes.iter().rev() {
                // Nodes are sorted ascending, so everything past
                // this point is an input and stays clamped.
                if node < input_count {
                    break;
                }
                let input_sum = incoming.get(&node).map_or(0.0, |edges| {
                    edges
                        .iter()
                        .map(|(source, weight)| weight * values[source])
                        .sum()
                });
                values.insert(node, config.activation_type.apply(input_sum));
            }
        }

        Ok((input_count..input_count + config.output_count.get())
            .map(|id| values[&id])
            .collect())
    }
}

impl Default for Genome {
    fn default() -> Genome {
        Genome::new()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut genes: Vec<(Innovation, &Gene)> = self.genes().collect();
        genes.sort_unstable_by_key(|(id, _)| *id);
        writeln!(f, "Genome (fitness {:.3})", self.fitness)?;
        for (id, gene) in genes {
            writeln!(f, "  [{}] {}", id, gene)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::num::NonZeroUsize;

    fn config(inputs: usize, outputs: usize) -> GeneticConfig {
        GeneticConfig {
            input_count: NonZeroUsize::new(inputs).unwrap(),
            output_count: NonZeroUsize::new(outputs).unwrap(),
            activation_type: ActivationType::Identity,
            activation_iterations: 1,
            weight_range: WeightRange::new(-1.0, 1.0),
            nudge_range: WeightRange::new(-0.1, 0.1),
            weight_replacement_chance: 0.0,
        }
    }

    #[test]
    fn add_gene_rejects_duplicate_id() {
        let mut genome = Genome::new();
        genome.add_gene(3, 0, 1, 2.0).unwrap();

        let result = genome.add_gene(3, 0, 2, -1.0);

        assert_eq!(result, Err(GeneInsertionError::DuplicateGeneId(3)));
        let kept = genome.gene(3).unwrap();
        assert_eq!(kept.endpoints(), (0, 1));
        assert_eq!(kept.weight(), 2.0);
        assert_eq!(genome.gene_count(), 1);
    }

    #[test]
    fn gene_between_is_direction_sensitive() {
        let mut genome = Genome::new();
        genome.add_gene(0, 2, 5, 1.0).unwrap();

        assert!(genome.gene_between(2, 5).is_some());
        assert!(genome.gene_between(5, 2).is_none());
    }

    #[test]
    fn nodes_always_contains_configured_io() {
        let genome = Genome::new();
        assert_eq!(genome.nodes(&config(3, 2)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn nodes_includes_gene_endpoints() {
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 7, 1.0).unwrap();

        assert_eq!(genome.nodes(&config(1, 1)), vec![0, 1, 7]);
        assert_eq!(genome.max_node(&config(1, 1)), 7);
    }

    #[test]
    fn node_type_by_range() {
        let genome = Genome::new();
        let config = config(3, 2);

        assert_eq!(genome.node_type(0, &config), NodeType::Input);
        assert_eq!(genome.node_type(2, &config), NodeType::Input);
        assert_eq!(genome.node_type(3, &config), NodeType::Output);
        assert_eq!(genome.node_type(4, &config), NodeType::Output);
        assert_eq!(genome.node_type(5, &config), NodeType::Hidden);
    }

    #[test]
    fn innovation_bounds_are_zero_when_empty() {
        let genome = Genome::new();
        assert_eq!(genome.min_innovation(), 0);
        assert_eq!(genome.max_innovation(), 0);
    }

    #[test]
    fn innovation_bounds() {
        let mut genome = Genome::new();
        genome.add_gene(4, 0, 1, 1.0).unwrap();
        genome.add_gene(9, 0, 2, 1.0).unwrap();

        assert_eq!(genome.min_innovation(), 4);
        assert_eq!(genome.max_innovation(), 9);
    }

    #[test]
    fn clone_is_independent_of_source() {
        let config = GeneticConfig {
            weight_range: WeightRange::new(5.0, 5.0),
            ..config(1, 1)
        };
        let mut rng = StdRng::seed_from_u64(1);

        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, 1.0).unwrap();

        let mut copy = genome.clone();
        copy.randomize_weights(&config, &mut rng);
        copy.add_gene(1, 1, 2, 1.0).unwrap();

        assert_eq!(genome.gene(0).unwrap().weight(), 1.0);
        assert_eq!(genome.gene_count(), 1);
        assert_eq!(copy.gene(0).unwrap().weight(), 5.0);
        assert_eq!(copy.gene_count(), 2);
    }

    #[test]
    fn mutate_add_gene_never_duplicates_edges_or_self_loops() {
        let config = config(3, 3);
        let mut rng = StdRng::seed_from_u64(13);
        let mut genome = Genome::new();
        let mut innovation = 0;

        for _ in 0..100 {
            let _ = genome.mutate_add_gene(&mut innovation, &config, &mut rng);
        }

        let mut seen = HashSet::<(Innovation, Innovation), RandomState>::default();
        for (_, gene) in genome.genes() {
            let (source, target) = gene.endpoints();
            assert_ne!(source, target);
            let unordered = (source.min(target), source.max(target));
            assert!(seen.insert(unordered), "edge {:?} duplicated", unordered);
        }
        // The counter advanced once per successful insertion only.
        assert_eq!(innovation, genome.gene_count());
    }

    #[test]
    fn mutate_add_gene_reports_exhaustion_on_saturated_genome() {
        let config = config(1, 1);
        let mut rng = StdRng::seed_from_u64(2);
        let mut genome = Genome::new();
        let mut innovation = 0;

        genome
            .mutate_add_gene(&mut innovation, &config, &mut rng)
            .unwrap();
        assert_eq!(innovation, 1);

        // 0 -> 1 is the only connectable pair and it is taken.
        let result = genome.mutate_add_gene(&mut innovation, &config, &mut rng);

        assert_eq!(result.err(), Some(GeneMutationError::NoViablePairFound));
        assert_eq!(innovation, 1);
        assert_eq!(genome.gene_count(), 1);
    }

    #[test]
    fn mutate_add_node_splits_an_enabled_gene() {
        let config = config(1, 1);
        let mut rng = StdRng::seed_from_u64(3);
        let mut genome = Genome::new();
        let mut innovation = 1;

        genome.add_gene(0, 0, 1, 0.75).unwrap();

        let (inbound, node, outbound) = genome
            .mutate_add_node(&mut innovation, &config, &mut rng)
            .unwrap();

        assert_eq!((inbound, node, outbound), (1, 2, 2));
        assert_eq!(innovation, 3);

        let split = genome.gene(0).unwrap();
        assert!(!split.enabled());
        assert_eq!(split.endpoints(), (0, 1));
        assert_eq!(split.weight(), 0.75);

        let inbound = genome.gene(inbound).unwrap();
        assert_eq!(inbound.endpoints(), (0, 2));
        assert_eq!(inbound.weight(), 1.0);
        assert!(inbound.enabled());

        let outbound = genome.gene(outbound).unwrap();
        assert_eq!(outbound.endpoints(), (2, 1));
        assert_eq!(outbound.weight(), 0.75);
        assert!(outbound.enabled());
    }

    #[test]
    fn mutate_add_node_requires_an_enabled_gene() {
        let config = config(1, 1);
        let mut rng = StdRng::seed_from_u64(4);
        let mut innovation = 0;

        let mut genome = Genome::new();
        assert_eq!(
            genome.mutate_add_node(&mut innovation, &config, &mut rng),
            Err(NodeMutationError::NoEnabledGenes)
        );

        genome.add_gene(0, 0, 1, 1.0).unwrap();
        genome.genes.get_mut(&0).unwrap().set_enabled(false);
        assert_eq!(
            genome.mutate_add_node(&mut innovation, &config, &mut rng),
            Err(NodeMutationError::NoEnabledGenes)
        );
        assert_eq!(innovation, 0);
    }

    #[test]
    fn nudge_weights_full_replacement() {
        let config = GeneticConfig {
            weight_range: WeightRange::new(5.0, 5.0),
            weight_replacement_chance: 1.0,
            ..config(1, 1)
        };
        let mut rng = StdRng::seed_from_u64(5);

        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, -2.0).unwrap();
        genome.nudge_weights(&config, &mut rng);

        assert_eq!(genome.gene(0).unwrap().weight(), 5.0);
    }

    #[test]
    fn nudge_weights_perturbation() {
        let config = GeneticConfig {
            nudge_range: WeightRange::new(0.25, 0.25),
            weight_replacement_chance: 0.0,
            ..config(1, 1)
        };
        let mut rng = StdRng::seed_from_u64(6);

        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, 1.0).unwrap();
        genome.nudge_weights(&config, &mut rng);

        assert_eq!(genome.gene(0).unwrap().weight(), 1.25);
    }

    #[test]
    fn randomize_weights_redraws_every_gene() {
        let config = GeneticConfig {
            weight_range: WeightRange::new(2.0, 2.0),
            ..config(1, 2)
        };
        let mut rng = StdRng::seed_from_u64(7);

        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, -1.0).unwrap();
        genome.add_gene(1, 0, 2, 0.5).unwrap();
        genome.randomize_weights(&config, &mut rng);

        assert!(genome.genes().all(|(_, g)| g.weight() == 2.0));
    }

    #[test]
    fn activate_rejects_wrong_arity() {
        let genome = Genome::new();
        assert_eq!(
            genome.activate(&[1.0, 2.0], &config(1, 1)),
            Err(ActivationError::ArityMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn activate_zero_iterations_leaves_outputs_at_zero() {
        let config = GeneticConfig {
            activation_iterations: 0,
            ..config(1, 1)
        };
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, 3.0).unwrap();

        assert_eq!(genome.activate(&[1.0], &config).unwrap(), vec![0.0]);
    }

    #[test]
    fn activate_single_connection() {
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, 2.0).unwrap();

        assert_eq!(genome.activate(&[1.5], &config(1, 1)).unwrap(), vec![3.0]);
    }

    #[test]
    fn activate_sigmoid_squash() {
        let config = GeneticConfig {
            activation_type: ActivationType::Sigmoid,
            ..config(1, 1)
        };
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, 1.0).unwrap();

        assert_eq!(genome.activate(&[0.0], &config).unwrap(), vec![0.5]);
    }

    #[test]
    fn activate_skips_disabled_genes() {
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 1, 2.0).unwrap();
        genome.genes.get_mut(&0).unwrap().set_enabled(false);

        assert_eq!(genome.activate(&[1.5], &config(1, 1)).unwrap(), vec![0.0]);
    }

    /// A hidden node above the output id is recomputed first
    /// in the descending sweep, so a two-hop path settles in
    /// a single iteration.
    #[test]
    fn activate_two_hop_descending_path_in_one_iteration() {
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 2, 3.0).unwrap();
        genome.add_gene(1, 2, 1, 2.0).unwrap();

        assert_eq!(genome.activate(&[0.5], &config(1, 1)).unwrap(), vec![3.0]);
    }

    /// A chain ascending through hidden ids needs one iteration
    /// per ascending hop for the signal to arrive.
    #[test]
    fn activate_ascending_chain_settles_with_more_iterations() {
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 2, 1.0).unwrap();
        genome.add_gene(1, 2, 3, 1.0).unwrap();
        genome.add_gene(2, 3, 1, 1.0).unwrap();

        let one_pass = GeneticConfig {
            activation_iterations: 1,
            ..config(1, 1)
        };
        let two_passes = GeneticConfig {
            activation_iterations: 2,
            ..config(1, 1)
        };

        assert_eq!(genome.activate(&[0.5], &one_pass).unwrap(), vec![0.0]);
        assert_eq!(genome.activate(&[0.5], &two_passes).unwrap(), vec![0.5]);
    }

    /// Values written earlier in the same sweep are visible to
    /// lower-numbered nodes: with the cycle 2 -> 3 -> 2 and the
    /// tap 2 -> 1, two passes accumulate the input twice.
    #[test]
    fn activate_recurrent_cycle_gauss_seidel_order() {
        let mut genome = Genome::new();
        genome.add_gene(0, 0, 2, 1.0).unwrap();
        genome.add_gene(1, 2, 3, 1.0).unwrap();
        genome.add_gene(2, 3, 2, 1.0).unwrap();
        genome.add_gene(3, 2, 1, 1.0).unwrap();

        let two_passes = GeneticConfig {
            activation_iterations: 2,
            ..config(1, 1)
        };

        // Pass 1: v3 = 0, v2 = 1, v1 = 1.
        // Pass 2: v3 = 1, v2 = 2, v1 = 2.
        assert_eq!(genome.activate(&[1.0], &two_passes).unwrap(), vec![2.0]);
    }

    #[test]
    #[should_panic]
    fn set_fitness_rejects_negative_values() {
        let mut genome = Genome::new();
        genome.set_fitness(-1.0);
    }
}
