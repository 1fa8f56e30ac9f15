//! Key specifications: which column holds each key position on each input.

use std::collections::HashSet;

use pact_core::config::ContractConfig;
use pact_core::error::{Error, Result};
use pact_core::key::{Key, KeyType};

use crate::arity::Arity;

/// One key position: its key type and, per input, the record column holding it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySpec {
    key_type: KeyType,
    columns: Vec<usize>,
}

impl KeySpec {
    /// `columns[i]` is the column index of this key in input `i`.
    pub fn new<K: Key>(columns: impl Into<Vec<usize>>) -> Self {
        Self::with_type(KeyType::of::<K>(), columns)
    }

    pub fn with_type(key_type: KeyType, columns: impl Into<Vec<usize>>) -> Self {
        Self {
            key_type,
            columns: columns.into(),
        }
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn column(&self, input: usize) -> Option<usize> {
        self.columns.get(input).copied()
    }
}

/// Ordered, validated sequence of key positions.
///
/// Every spec in a `KeySpecs` carries exactly one column per input of the
/// arity it was validated against, so per-input lookups cannot come up short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySpecs {
    specs: Vec<KeySpec>,
}

impl KeySpecs {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate `specs` against `arity`. `contract` and `role` only feed error text.
    pub fn new(
        contract: &str,
        role: &str,
        arity: Arity,
        specs: Vec<KeySpec>,
        cfg: &ContractConfig,
    ) -> Result<Self> {
        if specs.len() > cfg.max_key_fields {
            return Err(Error::key_config(
                contract,
                format!(
                    "{} {} keys declared, limit is {}",
                    specs.len(),
                    role,
                    cfg.max_key_fields
                ),
            ));
        }

        let inputs = arity.inputs();
        for (pos, spec) in specs.iter().enumerate() {
            if spec.columns.len() != inputs {
                return Err(Error::key_config(
                    contract,
                    format!(
                        "{} key #{} ({}) maps {} input(s), contract has {}",
                        role,
                        pos,
                        spec.key_type,
                        spec.columns.len(),
                        inputs
                    ),
                ));
            }
        }

        if cfg.reject_duplicate_key_columns {
            for input in 0..inputs {
                let mut seen = HashSet::with_capacity(specs.len());
                for spec in &specs {
                    let col = spec.columns[input];
                    if !seen.insert(col) {
                        return Err(Error::key_config(
                            contract,
                            format!(
                                "{} keys use column {} twice on input {}",
                                role, col, input
                            ),
                        ));
                    }
                }
            }
        }

        Ok(Self { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeySpec> {
        self.specs.iter()
    }

    /// Key types in position order.
    pub fn key_types(&self) -> Vec<KeyType> {
        self.specs.iter().map(KeySpec::key_type).collect()
    }

    /// Column indices of every key position for `input`, in position order.
    ///
    /// Callers check `input` against the arity first; the lookup skips
    /// nothing because lengths were validated at construction.
    pub(crate) fn columns_for(&self, input: usize) -> Vec<usize> {
        self.specs.iter().filter_map(|s| s.column(input)).collect()
    }
}

impl<'a> IntoIterator for &'a KeySpecs {
    type Item = &'a KeySpec;
    type IntoIter = std::slice::Iter<'a, KeySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
