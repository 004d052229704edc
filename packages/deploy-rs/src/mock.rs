use std::collections::BTreeMap;

use cosmwasm_std::Addr;

use crate::{
    builder::{ConstructorArgs, DeploymentRequest, ModuleBuilder},
    core::{ContractHandle, DeployError, DeployResult},
};

/// In-memory builder for exercising module bodies without an engine.
/// Records every deployment request and resolves each one to either a
/// scripted handle for that contract name or a synthesized one.
pub struct MockBuilder {
    handles: BTreeMap<String, ContractHandle>,
    requests: Vec<DeploymentRequest>,
    failure: Option<DeployError>,
    next_code_id: u64,
}

impl MockBuilder {
    pub fn new() -> Self {
        Self {
            handles: BTreeMap::new(),
            requests: Vec::new(),
            failure: None,
            next_code_id: 1,
        }
    }

    pub fn with_handle(mut self, name: impl Into<String>, handle: ContractHandle) -> Self {
        self.handles.insert(name.into(), handle);
        self
    }

    pub fn failing_with(mut self, error: DeployError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn requests(&self) -> &[DeploymentRequest] {
        &self.requests
    }
}

impl ModuleBuilder for MockBuilder {
    fn contract_with_args(
        &mut self,
        name: &str,
        args: ConstructorArgs,
    ) -> DeployResult<ContractHandle> {
        self.requests.push(DeploymentRequest {
            contract_name: name.to_string(),
            constructor_args: args,
        });

        // Scripted failures fire once, on the next request.
        if let Some(error) = self.failure.take() {
            return Err(error);
        }

        if let Some(handle) = self.handles.get(name) {
            return Ok(handle.clone());
        }

        let code_id = self.next_code_id;
        self.next_code_id += 1;

        Ok(ContractHandle::new(
            Addr::unchecked(format!("contract_{}", name.to_lowercase())),
            code_id,
        ))
    }
}

impl Default for MockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
