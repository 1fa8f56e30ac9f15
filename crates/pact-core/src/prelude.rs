//! Convenient re-exports for downstream crates.

pub use crate::config::ContractConfig;
pub use crate::error::{Error, Result};
pub use crate::function::{FunctionType, UserFunction};
pub use crate::hash::Hash256;
pub use crate::id::{OpId, ProgramId};
pub use crate::key::{IntegerKey, Key, KeyType, LongKey, StringKey};
