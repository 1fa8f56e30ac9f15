//! Program graph: where contracts get published.
//!
//! Publishing moves a [`Contract`] behind an `Arc`. From then on every pass
//! (partitioning inference, cost estimation, diagnostics) shares it read-only,
//! so no locking is needed. To change a published contract, build a new one
//! and publish that instead.

use std::collections::BTreeMap;
use std::sync::Arc;

use pact_core::error::{Error, Result};
use pact_core::hash::{hash_serde, Hash256};
use pact_core::id::{OpId, ProgramId};
use serde::Serialize;

use crate::contract::Contract;
use crate::descriptor::ContractDescriptor;

#[derive(Debug)]
pub struct Program {
    id: ProgramId,
    next_op: u64,
    contracts: BTreeMap<OpId, Arc<Contract>>,
    /// (consumer, input slot) -> producer.
    edges: BTreeMap<(OpId, usize), OpId>,
}

/// Deterministic view hashed by [`Program::fingerprint`].
#[derive(Serialize)]
struct ProgramShape<'a> {
    contracts: Vec<(OpId, ContractDescriptor)>,
    edges: Vec<(&'a (OpId, usize), &'a OpId)>,
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    pub fn new() -> Self {
        Self {
            id: ProgramId::random(),
            next_op: 0,
            contracts: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> ProgramId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Publish a contract; it is read-only from here on.
    pub fn publish(&mut self, contract: Contract) -> OpId {
        let op = OpId::new(self.next_op);
        self.next_op += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(program = %self.id, %op, contract = contract.name(), "published contract");

        self.contracts.insert(op, Arc::new(contract));
        op
    }

    pub fn contract(&self, op: OpId) -> Option<&Arc<Contract>> {
        self.contracts.get(&op)
    }

    /// Published contracts in `OpId` order.
    pub fn contracts(&self) -> impl Iterator<Item = (OpId, &Arc<Contract>)> {
        self.contracts.iter().map(|(id, c)| (*id, c))
    }

    /// Feed the output of `from` into input slot `input` of `to`.
    pub fn connect(&mut self, from: OpId, to: OpId, input: usize) -> Result<()> {
        self.lookup(from)?;
        let target = self.lookup(to)?;

        if !target.arity().contains(input) {
            return Err(Error::input_index(
                target.name(),
                input,
                target.number_of_inputs(),
            ));
        }
        if from == to {
            return Err(Error::Plan(format!("{} cannot consume its own output", to)));
        }
        if let Some(existing) = self.edges.get(&(to, input)) {
            return Err(Error::Plan(format!(
                "input {} of {} is already fed by {}",
                input, to, existing
            )));
        }
        if self.is_upstream(to, from) {
            return Err(Error::Plan(format!(
                "connecting {} -> {} would create a cycle",
                from, to
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(program = %self.id, %from, %to, input, "connected");

        self.edges.insert((to, input), from);
        Ok(())
    }

    /// Producer feeding each input slot of `op`, `None` for unwired slots.
    pub fn inputs_of(&self, op: OpId) -> Result<Vec<Option<OpId>>> {
        let c = self.lookup(op)?;
        Ok((0..c.number_of_inputs())
            .map(|i| self.edges.get(&(op, i)).copied())
            .collect())
    }

    /// Every input slot of every contract must be wired. Records enter the
    /// program only through [`Arity::Source`](crate::arity::Arity::Source) contracts.
    pub fn validate(&self) -> Result<()> {
        for (op, c) in &self.contracts {
            for input in 0..c.number_of_inputs() {
                if !self.edges.contains_key(&(*op, input)) {
                    return Err(Error::Plan(format!(
                        "input {} of {} ('{}') is not connected",
                        input,
                        op,
                        c.name()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Stable hash over every published contract and edge.
    pub fn fingerprint(&self) -> Result<Hash256> {
        let shape = ProgramShape {
            contracts: self
                .contracts
                .iter()
                .map(|(op, c)| (*op, c.describe()))
                .collect(),
            edges: self.edges.iter().collect(),
        };
        hash_serde(&shape)
    }

    fn lookup(&self, op: OpId) -> Result<&Arc<Contract>> {
        self.contracts
            .get(&op)
            .ok_or_else(|| Error::Plan(format!("unknown operator {} in {}", op, self.id)))
    }

    /// True if `needle` is reachable by walking producers upstream of `start`.
    fn is_upstream(&self, needle: OpId, start: OpId) -> bool {
        let mut stack = vec![start];
        let mut seen = std::collections::HashSet::new();
        while let Some(op) = stack.pop() {
            if op == needle {
                return true;
            }
            if !seen.insert(op) {
                continue;
            }
            stack.extend(
                self.edges
                    .range((op, 0)..=(op, usize::MAX))
                    .map(|(_, producer)| *producer),
            );
        }
        false
    }
}
