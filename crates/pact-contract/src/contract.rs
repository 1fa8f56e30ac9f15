//! The operator contract and its builder.

use pact_core::config::ContractConfig;
use pact_core::error::{Error, Result};
use pact_core::function::{FunctionType, UserFunction};
use pact_core::hash::{hash_serde, Hash256};
use pact_core::key::KeyType;

use crate::arity::{Arity, Grouping};
use crate::descriptor::ContractDescriptor;
use crate::keys::{KeySpec, KeySpecs};

/// Declarative description of one parallel operator node.
///
/// Invariants (checked by [`ContractBuilder::build`] and
/// [`Contract::set_secondary_sort_keys`]):
/// - every key spec maps exactly `number_of_inputs()` columns
/// - a `Keyed` contract has at least one primary key
/// - secondary sort keys exist only alongside primary keys
#[derive(Debug, Clone)]
pub struct Contract {
    name: String,
    function: FunctionType,
    arity: Arity,
    grouping: Grouping,
    keys: KeySpecs,
    secondary: KeySpecs,
    config: ContractConfig,
}

/// Collects a contract's parts; nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    name: String,
    function: FunctionType,
    arity: Arity,
    grouping: Grouping,
    keys: Vec<KeySpec>,
    secondary: Vec<KeySpec>,
    config: ContractConfig,
}

impl ContractBuilder {
    /// Group records by the primary keys before calling the user function.
    pub fn keyed(mut self) -> Self {
        self.grouping = Grouping::Keyed;
        self
    }

    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Append a primary key position.
    pub fn key(mut self, spec: KeySpec) -> Self {
        self.keys.push(spec);
        self
    }

    pub fn keys(mut self, specs: impl IntoIterator<Item = KeySpec>) -> Self {
        self.keys.extend(specs);
        self
    }

    /// Append a secondary sort key position.
    pub fn secondary_sort_key(mut self, spec: KeySpec) -> Self {
        self.secondary.push(spec);
        self
    }

    pub fn config(mut self, config: ContractConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Contract> {
        self.config.validate()?;
        let arity = self.arity.normalized();
        arity.validate(&self.config)?;

        if arity.is_source() && !self.keys.is_empty() {
            return Err(Error::key_config(
                &self.name,
                "source contract has no input to take keys from",
            ));
        }

        let keys = KeySpecs::new(&self.name, "primary", arity, self.keys, &self.config)?;
        if self.grouping.is_keyed() && keys.is_empty() {
            return Err(Error::key_config(
                &self.name,
                "keyed contract declares no grouping keys",
            ));
        }

        let secondary = validate_secondary(
            &self.name,
            arity,
            &keys,
            self.secondary,
            &self.config,
        )?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            contract = %self.name,
            function = self.function.name(),
            inputs = arity.inputs(),
            keys = keys.len(),
            secondary = secondary.len(),
            "built contract"
        );

        Ok(Contract {
            name: self.name,
            function: self.function,
            arity,
            grouping: self.grouping,
            keys,
            secondary,
            config: self.config,
        })
    }
}

fn validate_secondary(
    contract: &str,
    arity: Arity,
    keys: &KeySpecs,
    specs: Vec<KeySpec>,
    cfg: &ContractConfig,
) -> Result<KeySpecs> {
    if !specs.is_empty() && keys.is_empty() {
        return Err(Error::key_config(
            contract,
            "secondary sort keys declared without grouping keys",
        ));
    }
    KeySpecs::new(contract, "secondary", arity, specs, cfg)
}

impl Contract {
    /// Start a per-record contract with no keys; see [`ContractBuilder`].
    pub fn builder<F: UserFunction + ?Sized>(
        name: impl Into<String>,
        arity: Arity,
    ) -> ContractBuilder {
        ContractBuilder {
            name: name.into(),
            function: FunctionType::of::<F>(),
            arity,
            grouping: Grouping::PerRecord,
            keys: Vec::new(),
            secondary: Vec::new(),
            config: ContractConfig::default(),
        }
    }

    /// Diagnostic label; not unique and not an identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_function_type(&self) -> FunctionType {
        self.function
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    pub fn number_of_inputs(&self) -> usize {
        self.arity.inputs()
    }

    pub fn key_specs(&self) -> &KeySpecs {
        &self.keys
    }

    /// Grouping key types in position order; empty for keyless contracts.
    pub fn key_types(&self) -> Vec<KeyType> {
        self.keys.key_types()
    }

    pub fn secondary_sort_key_specs(&self) -> &KeySpecs {
        &self.secondary
    }

    pub fn secondary_sort_key_types(&self) -> Vec<KeyType> {
        self.secondary.key_types()
    }

    /// Column index of each primary key position in records of `input`.
    pub fn key_column_numbers(&self, input: usize) -> Result<Vec<usize>> {
        self.check_input(input)?;
        Ok(self.keys.columns_for(input))
    }

    /// Column index of each secondary sort key position in records of `input`.
    /// Empty when no secondary keys are declared.
    pub fn secondary_sort_key_column_numbers(&self, input: usize) -> Result<Vec<usize>> {
        self.check_input(input)?;
        Ok(self.secondary.columns_for(input))
    }

    /// Replace the secondary sort keys. An empty `specs` clears them.
    ///
    /// On error the contract is left unchanged. Published contracts are shared
    /// behind `Arc` and cannot reach this method.
    pub fn set_secondary_sort_keys(&mut self, specs: Vec<KeySpec>) -> Result<()> {
        let secondary =
            validate_secondary(&self.name, self.arity, &self.keys, specs, &self.config)?;
        self.replace_secondary(secondary);
        Ok(())
    }

    /// Owned variant of [`set_secondary_sort_keys`](Self::set_secondary_sort_keys)
    /// for rebuild-and-replace flows.
    pub fn with_secondary_sort_keys(mut self, specs: Vec<KeySpec>) -> Result<Self> {
        self.set_secondary_sort_keys(specs)?;
        Ok(self)
    }

    pub fn clear_secondary_sort_keys(&mut self) {
        self.replace_secondary(KeySpecs::empty());
    }

    fn replace_secondary(&mut self, secondary: KeySpecs) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            contract = %self.name,
            before = self.secondary.len(),
            after = secondary.len(),
            "replaced secondary sort keys"
        );

        self.secondary = secondary;
    }

    pub fn describe(&self) -> ContractDescriptor {
        ContractDescriptor::from(self)
    }

    /// Stable hash of [`describe`](Self::describe); changes whenever keys change.
    pub fn fingerprint(&self) -> Result<Hash256> {
        hash_serde(&self.describe())
    }

    fn check_input(&self, input: usize) -> Result<()> {
        if self.arity.contains(input) {
            Ok(())
        } else {
            Err(Error::input_index(&self.name, input, self.number_of_inputs()))
        }
    }
}
