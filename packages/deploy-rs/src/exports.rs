use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;

use crate::core::{ContractHandle, DeployError, DeployResult};

/// The mapping a module body hands back to the engine: export key to
/// deployed contract handle. Keys are fixed at declaration time and
/// unique, so a duplicate insert is a declaration bug, not a runtime
/// condition to paper over.
#[cw_serde]
pub struct Exports(BTreeMap<String, ContractHandle>);

impl Exports {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn single(key: impl Into<String>, handle: ContractHandle) -> DeployResult<Self> {
        let mut exports = Self::new();
        exports.insert(key, handle)?;
        Ok(exports)
    }

    pub fn insert(&mut self, key: impl Into<String>, handle: ContractHandle) -> DeployResult<()> {
        let key = key.into();

        if self.0.contains_key(&key) {
            return Err(DeployError::DuplicateExport { key });
        }

        self.0.insert(key, handle);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&ContractHandle> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContractHandle)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Exports {
    fn default() -> Self {
        Self::new()
    }
}
