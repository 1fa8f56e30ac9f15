//! Validation limits applied while building contracts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Upper bound on inputs for n-ary contracts.
    pub max_inputs: usize,

    /// Upper bound on key positions in one key sequence (primary or secondary).
    pub max_key_fields: usize,

    /// Reject a column index used by two key positions of the same sequence
    /// for the same input.
    pub reject_duplicate_key_columns: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            max_inputs: 64,
            max_key_fields: 32,
            reject_duplicate_key_columns: true,
        }
    }
}

impl ContractConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PACT_MAX_INPUTS`: max inputs of an n-ary contract
    /// - `PACT_MAX_KEY_FIELDS`: max key positions per sequence
    /// - `PACT_REJECT_DUPLICATE_KEY_COLUMNS`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("PACT_MAX_INPUTS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_inputs = v;
            }
        }

        if let Ok(s) = std::env::var("PACT_MAX_KEY_FIELDS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_key_fields = v;
            }
        }

        if let Ok(s) = std::env::var("PACT_REJECT_DUPLICATE_KEY_COLUMNS") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.reject_duplicate_key_columns = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_inputs == 0 {
            return Err(Error::Config("max_inputs must be at least 1".into()));
        }
        if self.max_key_fields == 0 {
            return Err(Error::Config("max_key_fields must be at least 1".into()));
        }
        Ok(())
    }
}
