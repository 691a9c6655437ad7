//! A Population is a collection of genomes. Each generation
//! they are clustered into species by compatibility distance,
//! their fitness is shared within each species, and the next
//! generation is bred from single mutated parents in proportion
//! to each species' share of the adjusted fitness.

mod config;
mod errors;
pub mod logging;
mod species;

pub use config::PopulationConfig;
pub use errors::ConfigurationError;
pub use species::Species;

use crate::genomics::{GeneticConfig, Genome};
use crate::Innovation;

use rand::prelude::{Rng, SliceRandom};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Species with more members than this copy their best genome
/// into the next generation unmutated.
const ELITISM_THRESHOLD: usize = 5;

/// A population of genomes, together with the shared
/// historical-marking counter and generation count.
pub struct Population {
    genomes: Vec<Genome>,
    next_innovation: Innovation,
    generation: usize,
    config: PopulationConfig,
    genetic_config: GeneticConfig,
    rng: StdRng,
}

impl Population {
    /// Creates a new population using the passed configurations,
    /// with an entropy-seeded random source. Runs constructed this
    /// way are not reproducible; see [`from_seed`].
    ///
    /// A single seed genome is grown gene by gene until it holds
    /// `starting_gene_count` genes (consuming historical-marking
    /// ids `0..starting_gene_count`), and the population is filled
    /// with weight-randomized clones of it.
    ///
    /// # Errors
    /// Fails with [`ConfigurationError::TooManyStartingGenes`]
    /// if the starting gene count exceeds the number of distinct
    /// input-to-output connections.
    ///
    /// [`from_seed`]: Population::from_seed
    pub fn new(
        config: PopulationConfig,
        genetic_config: GeneticConfig,
    ) -> Result<Population, ConfigurationError> {
        Self::with_rng(config, genetic_config, StdRng::from_entropy())
    }

    /// Creates a new population as [`new`], but with a seeded
    /// random source, making the whole run reproducible.
    ///
    /// [`new`]: Population::new
    ///
    /// # Examples
    /// ```
    /// use mononeat::genomics::GeneticConfig;
    /// use mononeat::populations::{Population, PopulationConfig};
    /// use std::num::NonZeroUsize;
    ///
    /// let genetic_config = GeneticConfig {
    ///     input_count: NonZeroUsize::new(4).unwrap(),
    ///     output_count: NonZeroUsize::new(6).unwrap(),
    ///     ..GeneticConfig::zero()
    /// };
    /// let config = PopulationConfig {
    ///     size: NonZeroUsize::new(20).unwrap(),
    ///     starting_gene_count: 5,
    ///     distance_threshold: 3.0,
    ///     ..PopulationConfig::zero()
    /// };
    ///
    /// let population = Population::from_seed(config, genetic_config, 42).unwrap();
    ///
    /// assert_eq!(population.genomes().len(), 20);
    /// assert!(population.genomes().iter().all(|g| g.gene_count() == 5));
    /// ```
    pub fn from_seed(
        config: PopulationConfig,
        genetic_config: GeneticConfig,
        seed: u64,
    ) -> Result<Population, ConfigurationError> {
        Self::with_rng(config, genetic_config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: PopulationConfig,
        genetic_config: GeneticConfig,
        mut rng: StdRng,
    ) -> Result<Population, ConfigurationError> {
        let maximum = genetic_config.input_count.get() * genetic_config.output_count.get();
        if config.starting_gene_count > maximum {
            return Err(ConfigurationError::TooManyStartingGenes {
                requested: config.starting_gene_count,
                maximum,
            });
        }

        let mut next_innovation = 0;
        let mut seed_genome = Genome::new();
        while seed_genome.gene_count() < config.starting_gene_count {
            // Failed attempts leave the counter untouched, so the
            // seed genome ends up with ids 0..starting_gene_count.
            let _ = seed_genome.mutate_add_gene(&mut next_innovation, &genetic_config, &mut rng);
        }

        let genomes = (0..config.size.get())
            .map(|_| {
                let mut genome = seed_genome.clone();
                genome.randomize_weights(&genetic_config, &mut rng);
                genome
            })
            .collect();

        Ok(Population {
            genomes,
            next_innovation,
            generation: 0,
            config,
            genetic_config,
            rng,
        })
    }

    /// Clusters the population into species and applies
    /// fitness sharing.
    ///
    /// Clustering is a single greedy pass in population order:
    /// each genome joins the first species (in creation order)
    /// whose representative lies within the distance threshold,
    /// or founds a new species. The resulting partition is
    /// order-dependent and is rebuilt from scratch on every
    /// call; species carry no identity across passes.
    ///
    /// Afterwards every member's adjusted fitness is its raw
    /// fitness divided by its species' size, each species'
    /// members are sorted by descending raw fitness, and the
    /// species list is sorted by descending adjusted-fitness sum.
    pub fn speciate(&mut self) -> Vec<Species> {
        let mut species: Vec<Species> = Vec::new();
        for index in 0..self.genomes.len() {
            let home = species.iter().position(|s| {
                compatibility_distance(
                    &self.genomes[index],
                    &self.genomes[s.representative()],
                    &self.config,
                ) <= self.config.distance_threshold
            });
            match home {
                Some(home) => species[home].members.push(index),
                None => species.push(Species::new(index)),
            }
        }

        for s in &mut species {
            let size = s.members.len() as f32;
            let mut sum = 0.0;
            for &member in &s.members {
                let adjusted = self.genomes[member].fitness() / size;
                self.genomes[member].set_adjusted_fitness(adjusted);
                sum += adjusted;
            }
            s.adjusted_fitness_sum = sum;

            let genomes = &self.genomes;
            s.members.sort_unstable_by(|&a, &b| {
                genomes[b]
                    .fitness()
                    .partial_cmp(&genomes[a].fitness())
                    .unwrap_or_else(|| panic!("invalid genome fitness detected (NaN)"))
            });
        }

        species.sort_by(|a, b| {
            b.adjusted_fitness_sum
                .partial_cmp(&a.adjusted_fitness_sum)
                .unwrap_or_else(|| panic!("invalid adjusted fitness detected (NaN)"))
        });
        species
    }

    /// Assigns each species its offspring count for the next
    /// generation, proportional to its share of the total
    /// adjusted fitness.
    ///
    /// Each species receives `floor(adjusted_sum / (total /
    /// size))` offspring; when the total is exactly zero the
    /// divisor falls back to `1` so the degenerate population
    /// still reproduces. The rounding shortfall is distributed
    /// one offspring at a time, round-robin by species index,
    /// until the counts sum to exactly the configured size.
    pub fn allot_offspring(&self, species: &mut [Species]) {
        if species.is_empty() {
            return;
        }
        let target = self.config.size.get();
        let total: f32 = species.iter().map(|s| s.adjusted_fitness_sum).sum();
        let mut fitness_per_offspring = total / target as f32;
        if fitness_per_offspring == 0.0 {
            fitness_per_offspring = 1.0;
        }

        let mut allotted = 0;
        for s in species.iter_mut() {
            s.offspring_count = (s.adjusted_fitness_sum / fitness_per_offspring) as usize;
            allotted += s.offspring_count;
        }

        // The floors can only undershoot the target.
        let mut index = 0;
        while allotted < target {
            species[index % species.len()].offspring_count += 1;
            allotted += 1;
            index += 1;
        }
    }

    /// Replaces the population with the next generation.
    ///
    /// Re-runs speciation, allots offspring, and fills each
    /// species' quota: a species with more than 5 members and at
    /// least one slot first clones its best-by-raw-fitness member
    /// verbatim (elitism); every remaining slot is filled by
    /// cloning a uniformly random member and applying the three
    /// mutation operators, each gated by its configured chance.
    /// The previous generation is discarded in full and the
    /// generation counter increments.
    pub fn reproduce(&mut self) {
        let mut species = self.speciate();
        self.allot_offspring(&mut species);

        let mut next_generation = Vec::with_capacity(self.config.size.get());
        for s in &species {
            let mut slots = s.offspring_count;
            if s.members.len() > ELITISM_THRESHOLD && slots > 0 {
                next_generation.push(self.genomes[s.members[0]].clone());
                slots -= 1;
            }
            for _ in 0..slots {
                let &parent = s
                    .members
                    .choose(&mut self.rng)
                    .unwrap_or_else(|| panic!("species with allotted offspring has no members"));
                let mut child = self.genomes[parent].clone();
                self.mutate_genome(&mut child);
                next_generation.push(child);
            }
        }

        self.genomes = next_generation;
        self.generation += 1;
    }

    /// Applies each mutation operator to the genome, gated by
    /// its configured chance. Exhausted mutations are no-ops.
    fn mutate_genome(&mut self, genome: &mut Genome) {
        if self.rng.gen::<f32>() < self.config.gene_addition_mutation_chance {
            let _ = genome.mutate_add_gene(
                &mut self.next_innovation,
                &self.genetic_config,
                &mut self.rng,
            );
        }
        if self.rng.gen::<f32>() < self.config.node_addition_mutation_chance {
            let _ = genome.mutate_add_node(
                &mut self.next_innovation,
                &self.genetic_config,
                &mut self.rng,
            );
        }
        if self.rng.gen::<f32>() < self.config.weight_nudge_mutation_chance {
            genome.nudge_weights(&self.genetic_config, &mut self.rng);
        }
    }

    /// Evaluates the fitness of each genome in the population
    /// using the passed evaluator. The returned values should
    /// be non-negative.
    pub fn evaluate_fitness<E>(&mut self, mut evaluator: E)
    where
        E: FnMut(&Genome) -> f32,
    {
        for genome in &mut self.genomes {
            let fitness = evaluator(genome);
            genome.set_fitness(fitness);
        }
    }

    /// Returns the currently best-performing genome by raw fitness.
    pub fn champion(&self) -> &Genome {
        self.genomes
            .iter()
            .max_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or_else(|| panic!("invalid genome fitness detected (NaN)"))
            })
            .expect("empty population has no champion")
    }

    /// Returns the population's genomes.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Returns the population's genomes mutably, so a driver can
    /// assign fitness values between generations.
    pub fn genomes_mut(&mut self) -> &mut [Genome] {
        &mut self.genomes
    }

    /// Returns the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the number of historical-marking ids consumed
    /// so far, i.e. the id the next created gene will receive.
    pub fn innovation_count(&self) -> Innovation {
        self.next_innovation
    }

    /// Returns the network-level configuration.
    pub fn genetic_config(&self) -> &GeneticConfig {
        &self.genetic_config
    }

    /// Returns the population-level configuration.
    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }
}

/// Calculates the compatibility distance between two genomes.
///
/// Over the combined historical-marking id domain, genes present
/// in exactly one genome count as _excess_ when their id falls
/// outside the overlap of the two genomes' id spans and as
/// _disjoint_ when inside it; genes present in both contribute
/// their absolute weight difference. With `N` the larger genome's
/// gene count (floored to 1 below 20 genes):
///
/// `distance = c1·excess/N + c2·disjoint/N + c3·meanWeightDiff`
///
/// Symmetric by construction, and zero for identical genomes.
///
/// # Examples
/// ```
/// use mononeat::genomics::Genome;
/// use mononeat::populations::{compatibility_distance, PopulationConfig};
///
/// let config = PopulationConfig {
///     excess_gene_factor: 1.0,
///     disjoint_gene_factor: 1.0,
///     common_weight_factor: 1.0,
///     ..PopulationConfig::zero()
/// };
///
/// let mut first = Genome::new();
/// let mut second = Genome::new();
///
/// // A shared gene with a weight difference of 0.1.
/// first.add_gene(0, 0, 1, 1.0).unwrap();
/// second.add_gene(0, 0, 1, 1.1).unwrap();
///
/// // A gene only the first genome carries, beyond the shared span.
/// first.add_gene(5, 0, 2, 1.0).unwrap();
///
/// // Both genomes hold fewer than 20 genes, so N is floored to 1.
/// let distance = compatibility_distance(&first, &second, &config);
/// assert!((distance - 1.1).abs() < 1e-6);
/// assert_eq!(distance, compatibility_distance(&second, &first, &config));
/// ```
pub fn compatibility_distance(
    first: &Genome,
    second: &Genome,
    config: &PopulationConfig,
) -> f32 {
    let (min_a, max_a) = (first.min_innovation(), first.max_innovation());
    let (min_b, max_b) = (second.min_innovation(), second.max_innovation());
    let core = min_a.max(min_b)..=max_a.min(max_b);

    let mut excess = 0usize;
    let mut disjoint = 0usize;
    let mut weight_diff_sum = 0.0f32;
    let mut shared = 0usize;

    for id in min_a.min(min_b)..=max_a.max(max_b) {
        match (first.gene(id), second.gene(id)) {
            (Some(a), Some(b)) => {
                shared += 1;
                weight_diff_sum += (a.weight() - b.weight()).abs();
            }
            (Some(_), None) | (None, Some(_)) => {
                if core.contains(&id) {
                    disjoint += 1;
                } else {
                    excess += 1;
                }
            }
            (None, None) => {}
        }
    }

    let mean_weight_diff = if shared > 0 {
        weight_diff_sum / shared as f32
    } else {
        0.0
    };

    let mut normalizer = first.gene_count().max(second.gene_count());
    if normalizer < 20 {
        normalizer = 1;
    }

    config.excess_gene_factor * excess as f32 / normalizer as f32
        + config.disjoint_gene_factor * disjoint as f32 / normalizer as f32
        + config.common_weight_factor * mean_weight_diff
}

/// Sorts a group of genomes by descending raw fitness.
pub fn sort_by_fitness(genomes: &mut [Genome]) {
    genomes.sort_unstable_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or_else(|| panic!("invalid genome fitness detected (NaN)"))
    });
}

/// Sorts a group of genomes by descending adjusted fitness.
pub fn sort_by_adjusted_fitness(genomes: &mut [Genome]) {
    genomes.sort_unstable_by(|a, b| {
        b.adjusted_fitness()
            .partial_cmp(&a.adjusted_fitness())
            .unwrap_or_else(|| panic!("invalid adjusted fitness detected (NaN)"))
    });
}

/// Sums the adjusted fitness over a group of genomes.
pub fn sum_adjusted_fitness(genomes: &[Genome]) -> f32 {
    genomes.iter().map(|g| g.adjusted_fitness()).sum()
}
