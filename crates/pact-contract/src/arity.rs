//! Closed set of operator shapes.

use pact_core::config::ContractConfig;
use pact_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of logical inputs an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// Data sources: no upstream operator, records come from outside the program.
    Source,
    /// Map- and reduce-like operators.
    Unary,
    /// Match-, cogroup- and cross-like operators.
    Binary,
    /// Operators over a fixed number of inputs (union-style cogroups).
    /// `NAry(1)` and `NAry(2)` are normalized to `Unary` and `Binary`.
    NAry(usize),
}

impl Arity {
    /// Returns the number of inputs for this shape.
    pub fn inputs(self) -> usize {
        match self {
            Arity::Source => 0,
            Arity::Unary => 1,
            Arity::Binary => 2,
            Arity::NAry(n) => n,
        }
    }

    pub fn contains(self, input: usize) -> bool {
        input < self.inputs()
    }

    /// Returns true if this is a unary operator.
    pub fn is_unary(self) -> bool {
        self.inputs() == 1
    }

    /// Returns true if this is a binary operator.
    pub fn is_binary(self) -> bool {
        self.inputs() == 2
    }

    pub fn is_source(self) -> bool {
        self.inputs() == 0
    }

    /// Canonical spelling of this shape, so equal shapes describe and
    /// fingerprint the same way.
    pub fn normalized(self) -> Self {
        match self {
            Arity::NAry(1) => Arity::Unary,
            Arity::NAry(2) => Arity::Binary,
            other => other,
        }
    }

    pub(crate) fn validate(self, cfg: &ContractConfig) -> Result<()> {
        match self {
            Arity::NAry(0) => Err(Error::Config("n-ary contract needs at least one input".into())),
            Arity::NAry(n) if n > cfg.max_inputs => Err(Error::Config(format!(
                "n-ary contract declares {} inputs, limit is {}",
                n, cfg.max_inputs
            ))),
            _ => Ok(()),
        }
    }
}

/// Whether the operator groups records by key before calling the user function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grouping {
    /// Records are handed over one at a time (or pairwise); keys are optional.
    PerRecord,
    /// Records are grouped by the primary keys; at least one key is required.
    Keyed,
}

impl Grouping {
    pub fn is_keyed(self) -> bool {
        matches!(self, Grouping::Keyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_per_shape() {
        assert_eq!(Arity::Unary.inputs(), 1);
        assert_eq!(Arity::Binary.inputs(), 2);
        assert_eq!(Arity::NAry(5).inputs(), 5);
        assert_eq!(Arity::Source.inputs(), 0);
        assert!(Arity::Source.is_source());
        assert!(!Arity::Source.contains(0));
        assert!(Arity::Unary.is_unary());
        assert!(Arity::NAry(2).is_binary());
        assert!(Arity::Binary.contains(1));
        assert!(!Arity::Binary.contains(2));
    }

    #[test]
    fn small_nary_normalizes() {
        assert_eq!(Arity::NAry(1).normalized(), Arity::Unary);
        assert_eq!(Arity::NAry(2).normalized(), Arity::Binary);
        assert_eq!(Arity::NAry(3).normalized(), Arity::NAry(3));
        assert_eq!(Arity::Source.normalized(), Arity::Source);
    }

    #[test]
    fn nary_bounds() {
        let cfg = ContractConfig {
            max_inputs: 4,
            ..Default::default()
        };
        assert!(Arity::NAry(4).validate(&cfg).is_ok());
        assert!(matches!(Arity::NAry(0).validate(&cfg), Err(Error::Config(_))));
        assert!(matches!(Arity::NAry(5).validate(&cfg), Err(Error::Config(_))));
    }
}
