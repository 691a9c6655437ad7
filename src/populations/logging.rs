//! Per-generation diagnostics: species sizes, offspring
//! allotments, and fitness statistics, captured as displayable
//! snapshots.

use super::{Population, Species};
use crate::genomics::Genome;

use std::fmt;

/// Basic statistics over a sequence of values.
#[derive(Clone, Debug)]
pub struct Stats {
    pub maximum: f32,
    pub minimum: f32,
    pub mean: f32,
    pub median: f32,
}

impl Stats {
    /// Returns statistics about the numbers in a sequence.
    /// An empty sequence yields all-zero statistics.
    ///
    /// # Examples
    /// ```
    /// use mononeat::populations::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f32>) -> Stats {
        let mut data: Vec<f32> = data.collect();
        if data.is_empty() {
            return Stats {
                maximum: 0.0,
                minimum: 0.0,
                mean: 0.0,
                median: 0.0,
            };
        }
        data.sort_unstable_by(|a, b| {
            a.partial_cmp(b)
                .unwrap_or_else(|| panic!("uncomparable value in statistics"))
        });
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f32>() / data.len() as f32,
            median,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {:.3} min {:.3} mean {:.3} median {:.3}",
            self.maximum, self.minimum, self.mean, self.median
        )
    }
}

/// A snapshot of a population and its speciation,
/// taken just after a [`speciate`] (and optionally
/// [`allot_offspring`]) pass.
///
/// [`speciate`]: super::Population::speciate
/// [`allot_offspring`]: super::Population::allot_offspring
#[derive(Clone, Debug)]
pub struct Log {
    pub generation: usize,
    pub species_sizes: Vec<usize>,
    pub offspring_counts: Vec<usize>,
    pub fitness: Stats,
    pub adjusted_fitness: Stats,
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "generation {}", self.generation)?;
        write!(f, "species:")?;
        for size in &self.species_sizes {
            write!(f, " {}", size)?;
        }
        writeln!(f)?;
        write!(f, "offspring:")?;
        for count in &self.offspring_counts {
            write!(f, " {}", count)?;
        }
        writeln!(f)?;
        writeln!(f, "fitness: {}", self.fitness)?;
        write!(f, "adjusted: {}", self.adjusted_fitness)
    }
}

/// A record of the evolution of a population over time.
#[derive(Clone, Debug, Default)]
pub struct EvolutionLogger {
    logs: Vec<Log>,
}

impl EvolutionLogger {
    pub fn new() -> EvolutionLogger {
        EvolutionLogger { logs: vec![] }
    }

    /// Stores a snapshot of the population and the species
    /// list produced by its most recent speciation pass.
    pub fn log(&mut self, population: &Population, species: &[Species]) {
        self.logs.push(Log {
            generation: population.generation(),
            species_sizes: species.iter().map(Species::len).collect(),
            offspring_counts: species.iter().map(Species::offspring_count).collect(),
            fitness: Stats::from(population.genomes().iter().map(Genome::fitness)),
            adjusted_fitness: Stats::from(
                population.genomes().iter().map(Genome::adjusted_fitness),
            ),
        })
    }

    /// Iterates over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }
}
