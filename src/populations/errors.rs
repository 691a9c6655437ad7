use std::error::Error;
use std::fmt;

/// Error returned when a population cannot be constructed
/// from its configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigurationError {
    /// The requested starting gene count exceeds the number of
    /// distinct input-to-output connections the seed genome
    /// could possibly hold.
    TooManyStartingGenes { requested: usize, maximum: usize },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyStartingGenes { requested, maximum } => write!(
                f,
                "{} starting genes requested, but only {} input-output pairs exist",
                requested, maximum
            ),
        }
    }
}

impl Error for ConfigurationError {}
