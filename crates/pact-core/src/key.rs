//! Key capability and type-erased key descriptors.
//!
//! A contract never holds key *values*; it records which key type sits at each
//! key position. Planners that later partition or sort records go through
//! [`KeyType`] to compare and hash values without knowing the concrete type.

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Capability every key type must provide: deterministic equality, hashing,
/// and a total order.
pub trait Key: Clone + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Stable name used in diagnostics and plan fingerprints.
    const NAME: &'static str;
}

/// Type identity of a [`Key`] implementation.
///
/// Equality and hashing look at the type identity only.
#[derive(Clone, Copy)]
pub struct KeyType {
    id: TypeId,
    name: &'static str,
    cmp: fn(&dyn Any, &dyn Any) -> Option<Ordering>,
    hash: fn(&dyn Any) -> Option<u64>,
}

impl KeyType {
    pub fn of<K: Key>() -> Self {
        Self {
            id: TypeId::of::<K>(),
            name: K::NAME,
            cmp: erased_cmp::<K>,
            hash: erased_hash::<K>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<K: Key>(&self) -> bool {
        self.id == TypeId::of::<K>()
    }

    /// Compare two values through this key's total order.
    ///
    /// Returns `None` if either value is not of this key type.
    pub fn compare(&self, a: &dyn Any, b: &dyn Any) -> Option<Ordering> {
        (self.cmp)(a, b)
    }

    pub fn equals(&self, a: &dyn Any, b: &dyn Any) -> Option<bool> {
        self.compare(a, b).map(|o| o == Ordering::Equal)
    }

    /// Hash a value with blake3, so equal keys land in the same partition on
    /// every worker and across toolchain upgrades.
    pub fn hash_value(&self, v: &dyn Any) -> Option<u64> {
        (self.hash)(v)
    }
}

fn erased_cmp<K: Key>(a: &dyn Any, b: &dyn Any) -> Option<Ordering> {
    Some(a.downcast_ref::<K>()?.cmp(b.downcast_ref::<K>()?))
}

fn erased_hash<K: Key>(v: &dyn Any) -> Option<u64> {
    let mut h = KeyHasher::default();
    v.downcast_ref::<K>()?.hash(&mut h);
    Some(h.finish())
}

/// `Hasher` over blake3; `finish` takes the first 8 digest bytes (LE).
#[derive(Default)]
struct KeyHasher(blake3::Hasher);

impl Hasher for KeyHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finish(&self) -> u64 {
        let out = self.0.finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&out.as_bytes()[..8]);
        u64::from_le_bytes(word)
    }
}

impl PartialEq for KeyType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for KeyType {}

impl Hash for KeyType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyType({})", self.name)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 32-bit signed integer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntegerKey(pub i32);

impl Key for IntegerKey {
    const NAME: &'static str = "integer";
}

/// 64-bit signed integer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LongKey(pub i64);

impl Key for LongKey {
    const NAME: &'static str = "long";
}

/// UTF-8 string key, ordered bytewise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringKey(pub String);

impl Key for StringKey {
    const NAME: &'static str = "string";
}

impl From<&str> for StringKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
