#![forbid(unsafe_code)]
//! pact-core: shared vocabulary for operator contracts.
//!
//! - strongly-typed IDs (`id`)
//! - the error taxonomy every contract check reports through (`error`)
//! - the key capability and type-erased key descriptors (`key`)
//! - user-function type handles (`function`)
//! - validation limits (`config`) and stable hashing (`hash`)
//!
//! No planning or execution lives here; `pact-contract` builds on these types.

pub mod config;
pub mod error;
pub mod function;
pub mod hash;
pub mod id;
pub mod key;
pub mod prelude;

pub use error::{Error, Result};
