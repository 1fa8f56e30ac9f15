#![forbid(unsafe_code)]
//! pact: operator contracts for parallel dataflow programs.
//!
//! Re-exports `pact-core` (keys, function handles, errors, config) and
//! `pact-contract` (contracts, key specs, program graph).

pub use pact_contract::{
    Arity, Contract, ContractBuilder, ContractDescriptor, Grouping, KeySpec, KeySpecDescriptor,
    KeySpecs, Program,
};
pub use pact_core::prelude::*;
pub use pact_core::{config, hash};
