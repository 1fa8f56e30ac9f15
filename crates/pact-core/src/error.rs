use thiserror::Error;

/// Canonical result for contract construction and queries.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised while assembling a program.
///
/// None of these are transient: they describe a malformed program graph and
/// must abort assembly rather than be retried or swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input index {index} for contract '{contract}' with {inputs} input(s)")]
    InvalidInputIndex {
        contract: String,
        index: usize,
        inputs: usize,
    },

    #[error("invalid key configuration for contract '{contract}': {reason}")]
    InvalidKeyConfiguration { contract: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Planning error: {0}")]
    Plan(String),

    #[error("Hashing error: {0}")]
    Hash(String),
}

impl Error {
    pub fn key_config(contract: &str, reason: impl Into<String>) -> Self {
        Error::InvalidKeyConfiguration {
            contract: contract.to_string(),
            reason: reason.into(),
        }
    }

    pub fn input_index(contract: &str, index: usize, inputs: usize) -> Self {
        Error::InvalidInputIndex {
            contract: contract.to_string(),
            index,
            inputs,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
