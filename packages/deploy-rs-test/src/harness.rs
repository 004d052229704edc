use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Empty, WasmMsg};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use deploy_rs::{
    builder::{ConstructorArgs, ModuleBuilder},
    core::{ContractHandle, DeployError, DeployResult},
    exports::Exports,
    module::DeploymentModule,
};

use crate::fixtures;

/// In-process deployment engine backed by a multi-test chain. Contract
/// code is registered under a name up front; module bodies then resolve
/// their requests against the registry, one instantiate per request.
pub struct DeployTestApp {
    pub app: App,
    pub admin: Addr,
    code_ids: BTreeMap<String, u64>,
}

impl DeployTestApp {
    pub fn setup() -> Self {
        let app = App::default();
        let admin = app.api().addr_make("admin");

        Self {
            app,
            admin,
            code_ids: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, code: Box<dyn Contract<Empty>>) -> u64 {
        let code_id = self.app.store_code(code);
        self.code_ids.insert(name.to_string(), code_id);
        code_id
    }

    pub fn register_fixture(&mut self, name: &str) -> u64 {
        self.register(
            name,
            Box::new(ContractWrapper::new(
                fixtures::execute,
                fixtures::instantiate,
                fixtures::query,
            )),
        )
    }

    pub fn run(&mut self, module: &DeploymentModule) -> DeployResult<Exports> {
        module.build(self)
    }

    pub fn query_deployed(&self, contract_addr: &Addr) -> bool {
        self.app
            .wrap()
            .query_wasm_smart::<bool>(contract_addr, &fixtures::FixtureQueryMsg::Deployed {})
            .unwrap_or(false)
    }
}

impl ModuleBuilder for DeployTestApp {
    fn contract_with_args(
        &mut self,
        name: &str,
        args: ConstructorArgs,
    ) -> DeployResult<ContractHandle> {
        let code_id = *self
            .code_ids
            .get(name)
            .ok_or_else(|| DeployError::UnknownContract {
                name: name.to_string(),
            })?;

        let msg = args.to_instantiate_msg()?;

        let response = self
            .app
            .execute(
                self.admin.clone(),
                WasmMsg::Instantiate {
                    admin: Some(self.admin.to_string()),
                    code_id,
                    label: name.to_string(),
                    msg,
                    funds: vec![],
                }
                .into(),
            )
            .map_err(|e| DeployError::Engine {
                reason: e.to_string(),
            })?;

        let wasm_event = response
            .events
            .iter()
            .find(|ev| ev.ty == "instantiate")
            .ok_or(DeployError::Generic("Could not find instantiate event"))?;

        let contract_addr = wasm_event
            .attributes
            .iter()
            .find(|attr| attr.key == "_contract_address")
            .ok_or(DeployError::Generic(
                "Could not find _contract_address attribute",
            ))?
            .value
            .clone();

        Ok(ContractHandle::new(Addr::unchecked(contract_addr), code_id))
    }
}
