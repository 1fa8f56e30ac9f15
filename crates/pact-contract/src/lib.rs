#![forbid(unsafe_code)]
//! pact-contract: the operator contract model.
//!
//! A [`Contract`] binds a user function's type to the metadata planners rely
//! on without looking inside the function: how many inputs it consumes, which
//! record columns act as grouping keys on each input, and which columns order
//! records within a group.
//!
//! Design:
//! - Every invariant is checked once, in [`ContractBuilder::build`]; queries
//!   afterwards only fail for out-of-range input indices.
//! - Secondary sort keys can be replaced through `&mut Contract` only. Once a
//!   contract is published into a [`Program`] it sits behind an `Arc` and can
//!   no longer be mutated; build a new value instead.

pub mod arity;
pub mod contract;
pub mod descriptor;
pub mod keys;
pub mod program;

pub use arity::{Arity, Grouping};
pub use contract::{Contract, ContractBuilder};
pub use descriptor::{ContractDescriptor, KeySpecDescriptor};
pub use keys::{KeySpec, KeySpecs};
pub use program::Program;
