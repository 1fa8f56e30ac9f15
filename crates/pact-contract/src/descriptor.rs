//! Read-only, serializable snapshot of a contract for diagnostics and hashing.

use serde::{Deserialize, Serialize};

use crate::arity::{Arity, Grouping};
use crate::contract::Contract;
use crate::keys::KeySpecs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpecDescriptor {
    pub key_type: String,
    /// Column per input, in input order.
    pub columns: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDescriptor {
    pub name: String,
    /// Rust type name of the user function; stable within one build only.
    pub function: String,
    pub arity: Arity,
    pub grouping: Grouping,
    pub keys: Vec<KeySpecDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_sort_keys: Vec<KeySpecDescriptor>,
}

fn describe_specs(specs: &KeySpecs) -> Vec<KeySpecDescriptor> {
    specs
        .iter()
        .map(|s| KeySpecDescriptor {
            key_type: s.key_type().name().to_string(),
            columns: s.columns().to_vec(),
        })
        .collect()
}

impl From<&Contract> for ContractDescriptor {
    fn from(c: &Contract) -> Self {
        Self {
            name: c.name().to_string(),
            function: c.user_function_type().name().to_string(),
            arity: c.arity(),
            grouping: c.grouping(),
            keys: describe_specs(c.key_specs()),
            secondary_sort_keys: describe_specs(c.secondary_sort_key_specs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeySpec;
    use pact_core::function::UserFunction;
    use pact_core::key::{IntegerKey, StringKey};

    struct CoGroupVisits;
    impl UserFunction for CoGroupVisits {}

    #[test]
    fn json_shape() {
        let c = Contract::builder::<CoGroupVisits>("visits", Arity::NAry(3))
            .keyed()
            .key(KeySpec::new::<StringKey>([0, 0, 1]))
            .secondary_sort_key(KeySpec::new::<IntegerKey>([2, 3, 4]))
            .build()
            .unwrap();

        let v = serde_json::to_value(c.describe()).unwrap();
        assert_eq!(v["name"], "visits");
        assert_eq!(v["arity"]["NAry"], 3);
        assert_eq!(v["grouping"], "Keyed");
        assert_eq!(v["keys"][0]["key_type"], "string");
        assert_eq!(v["keys"][0]["columns"], serde_json::json!([0, 0, 1]));
        assert_eq!(v["secondary_sort_keys"][0]["columns"], serde_json::json!([2, 3, 4]));
    }

    #[test]
    fn empty_secondary_is_omitted() {
        let c = Contract::builder::<CoGroupVisits>("visits", Arity::Unary)
            .build()
            .unwrap();
        let v = serde_json::to_value(c.describe()).unwrap();
        assert!(v.get("secondary_sort_keys").is_none());
        let back: ContractDescriptor = serde_json::from_value(v).unwrap();
        assert_eq!(back, c.describe());
    }
}
