use serde::{Deserialize, Serialize};

use std::fmt;

/// The role of a node, derived from its id range:
/// inputs occupy `[0, inputs)`, outputs
/// `[inputs, inputs + outputs)`, and any higher id
/// is a hidden node created by a node mutation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NodeType {
    Input,
    Output,
    Hidden,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Input => write!(f, "INPUT"),
            NodeType::Output => write!(f, "OUTPUT"),
            NodeType::Hidden => write!(f, "HIDDEN"),
        }
    }
}

/// The squash function applied to every non-input
/// node's weighted input sum during activation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ActivationType {
    Sigmoid,
    Identity,
    ReLU,
    Gaussian,
    Sinusoidal,
}

impl ActivationType {
    /// Applies the squash function to a node's input sum.
    pub fn apply(self, input_sum: f32) -> f32 {
        match self {
            ActivationType::Sigmoid => 1.0 / (1.0 + (-input_sum).exp()),
            ActivationType::Identity => input_sum,
            ActivationType::ReLU => input_sum.max(0.0),
            ActivationType::Gaussian => (-input_sum.powf(2.0)).exp(),
            ActivationType::Sinusoidal => (input_sum * std::f32::consts::PI).sin(),
        }
    }
}
