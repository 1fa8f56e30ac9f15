//! User-function ("stub") type handles.
//!
//! Contracts carry only the identity of the user function's type. The runtime
//! that instantiates and invokes it is a separate component.

use std::any::{type_name, TypeId};
use std::fmt;

/// Marker for types that hold user processing logic.
pub trait UserFunction: 'static {}

/// Type identity of a [`UserFunction`].
#[derive(Clone, Copy)]
pub struct FunctionType {
    id: TypeId,
    name: &'static str,
}

impl FunctionType {
    pub fn of<F: UserFunction + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<F>(),
            name: type_name::<F>(),
        }
    }

    /// Fully-qualified Rust type name (diagnostics only; not a stable identity).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn is<F: UserFunction + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<F>()
    }
}

impl PartialEq for FunctionType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FunctionType {}

impl std::hash::Hash for FunctionType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionType({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WordCount;
    impl UserFunction for WordCount {}

    struct Dedup;
    impl UserFunction for Dedup {}

    #[test]
    fn handle_tracks_type_identity() {
        let f = FunctionType::of::<WordCount>();
        assert!(f.is::<WordCount>());
        assert!(!f.is::<Dedup>());
        assert_eq!(f, FunctionType::of::<WordCount>());
        assert!(f.name().ends_with("WordCount"));
    }
}
