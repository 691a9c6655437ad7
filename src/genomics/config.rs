use crate::genomics::ActivationType;

use rand::Rng;
use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// An inclusive interval of connection weights.
///
/// `min` must not exceed `max`. Both bounds may be
/// negative, and the interval may be degenerate
/// (`min == max`), in which case sampling always
/// returns that single value.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f32,
    pub max: f32,
}

impl WeightRange {
    /// Returns the inclusive interval `[min, max]`.
    pub const fn new(min: f32, max: f32) -> WeightRange {
        WeightRange { min, max }
    }

    /// Returns the degenerate interval `[0, 0]`.
    pub const fn zero() -> WeightRange {
        WeightRange::new(0.0, 0.0)
    }

    /// Draws a uniformly-distributed value from the interval.
    ///
    /// # Examples
    /// ```
    /// use mononeat::genomics::WeightRange;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let range = WeightRange::new(-1.0, 1.0);
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let weight = range.sample(&mut rng);
    /// assert!((-1.0..=1.0).contains(&weight));
    /// ```
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Configuration data for genome generation
/// and network evaluation.
///
/// # Note
/// All quantities expressing probabilities
/// should be in the range [0.0, 1.0]. Using
/// values that are not in this bound may result
/// in odd behaviours and/or incorrect programs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneticConfig {
    /// Number of input nodes in a genome.
    pub input_count: NonZeroUsize,
    /// Number of output nodes in a genome.
    pub output_count: NonZeroUsize,
    /// Squash function applied by hidden and output nodes.
    pub activation_type: ActivationType,
    /// Number of relaxation passes performed per network
    /// evaluation. More passes let signal travel further
    /// along multi-hop and recurrent paths; the count is
    /// always run in full.
    pub activation_iterations: usize,
    /// Interval from which fresh connection weights are drawn.
    pub weight_range: WeightRange,
    /// Interval from which weight-perturbation deltas are drawn.
    pub nudge_range: WeightRange,
    /// Chance that a weight nudge redraws the weight from
    /// [`weight_range`] outright instead of perturbing it.
    ///
    /// [`weight_range`]: GeneticConfig::weight_range
    pub weight_replacement_chance: f32,
}

impl GeneticConfig {
    /// Returns a "zero-valued" default configuration.
    /// All values are 0, or in the case of
    /// `NonZeroUsize`s, 1.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to fill in unused values during
    /// configuration instantiation.
    ///
    /// # Examples
    /// ```
    /// use mononeat::genomics::GeneticConfig;
    /// use std::num::NonZeroUsize;
    ///
    /// let config = GeneticConfig {
    ///     input_count: NonZeroUsize::new(3).unwrap(),
    ///     output_count: NonZeroUsize::new(2).unwrap(),
    ///     ..GeneticConfig::zero()
    /// };
    /// ```
    pub const fn zero() -> GeneticConfig {
        GeneticConfig {
            // SAFETY: 1 is a valid NonZeroUsize. Replace this with
            // NonZeroUsize::new(1).unwrap() once const Option::unwrap
            // becomes stable.
            input_count: unsafe { NonZeroUsize::new_unchecked(1) },
            output_count: unsafe { NonZeroUsize::new_unchecked(1) },
            activation_type: ActivationType::Identity,
            activation_iterations: 0,
            weight_range: WeightRange::zero(),
            nudge_range: WeightRange::zero(),
            weight_replacement_chance: 0.0,
        }
    }
}
