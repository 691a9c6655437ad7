use crate::genomics::WeightRange;
use crate::Innovation;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Genes are the principal components of genomes.
/// Each one expresses a weighted connection between
/// a source and a target node, and is identified by
/// the historical-marking id under which its genome
/// stores it.
///
/// A disabled gene is retained for historical alignment
/// but contributes nothing during network activation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Gene {
    source: Innovation,
    target: Innovation,
    weight: f32,
    enabled: bool,
}

impl Gene {
    /// Returns a new _enabled_ gene with the specified endpoints and weight.
    pub fn new(source: Innovation, target: Innovation, weight: f32) -> Gene {
        Gene {
            source,
            target,
            weight,
            enabled: true,
        }
    }

    /// Returns the id of the gene's source node.
    pub fn source(&self) -> Innovation {
        self.source
    }

    /// Returns the id of the gene's target node.
    pub fn target(&self) -> Innovation {
        self.target
    }

    /// Returns the gene's (source, target) node ids.
    pub fn endpoints(&self) -> (Innovation, Innovation) {
        (self.source, self.target)
    }

    /// Returns the gene's connection weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Sets the gene's connection weight.
    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    /// Returns whether the gene is expressed during activation.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the gene.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replaces the gene's weight with a fresh draw from `range`.
    pub(super) fn randomize_weight(&mut self, range: WeightRange, rng: &mut impl Rng) {
        self.weight = range.sample(rng);
    }

    /// Perturbs the gene's weight by a delta drawn from `range`.
    pub(super) fn nudge_weight(&mut self, range: WeightRange, rng: &mut impl Rng) {
        self.weight += range.sample(rng);
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}->{} ({:.3}){}",
            if self.enabled { "" } else { "(" },
            self.source,
            self.target,
            self.weight,
            if self.enabled { "" } else { ")" },
        )
    }
}
