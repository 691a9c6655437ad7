use crate::Innovation;

use std::error::Error;
use std::fmt;

/// Error returned when inserting a gene under an
/// id the genome already holds. The existing gene
/// is left untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GeneInsertionError {
    DuplicateGeneId(Innovation),
}

/// Error returned when a network is evaluated with
/// the wrong number of input values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivationError {
    ArityMismatch { expected: usize, actual: usize },
}

/// Error returned when a gene mutation exhausts its
/// candidate-pair attempts. The genome is unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GeneMutationError {
    NoViablePairFound,
}

/// Error returned when a node mutation finds no
/// enabled gene to split. The genome is unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeMutationError {
    NoEnabledGenes,
}

impl fmt::Display for GeneInsertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGeneId(id) => write!(f, "duplicate gene insertion with id {}", id),
        }
    }
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch { expected, actual } => write!(
                f,
                "activation with {} inputs on a network configured for {}",
                actual, expected
            ),
        }
    }
}

impl fmt::Display for GeneMutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoViablePairFound => {
                write!(f, "no viable source-target pair found for gene mutation")
            }
        }
    }
}

impl fmt::Display for NodeMutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEnabledGenes => write!(f, "node mutation on a genome with no enabled genes"),
        }
    }
}

impl Error for GeneInsertionError {}
impl Error for ActivationError {}
impl Error for GeneMutationError {}
impl Error for NodeMutationError {}
