use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Coin, CosmosMsg, StdError, WasmMsg};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DeployError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid module name: {name}")]
    InvalidModuleName { name: String },

    #[error("Duplicate export key: {key}")]
    DuplicateExport { key: String },

    #[error("No contract registered under name: {name}")]
    UnknownContract { name: String },

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    #[error("Deployment engine error: {reason}")]
    Engine { reason: String },

    #[error("Generic error: {0}")]
    Generic(&'static str),
}

impl DeployError {
    pub fn generic_err(msg: impl Into<String>) -> Self {
        DeployError::Std(StdError::generic_err(msg.into()))
    }
}

pub type DeployResult<T> = Result<T, DeployError>;

/// Reference to a deployed contract instance: its address plus the code
/// id it was instantiated from. Owned by whichever engine resolved the
/// deployment request; declarations only pass it through.
#[cw_serde]
pub struct ContractHandle {
    pub address: Addr,
    pub code_id: u64,
}

impl ContractHandle {
    pub fn new(address: Addr, code_id: u64) -> Self {
        Self { address, code_id }
    }

    pub fn addr(&self) -> Addr {
        self.address.clone()
    }

    pub fn call(&self, msg: Binary, funds: Vec<Coin>) -> CosmosMsg {
        WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into()
    }
}

#[cfg(test)]
mod contract_handle_tests {
    use super::*;

    use cosmwasm_std::to_json_binary;

    #[test]
    fn call_targets_the_deployed_address() {
        let handle = ContractHandle::new(Addr::unchecked("market"), 7);
        let msg = handle.call(to_json_binary(&()).unwrap(), vec![]);

        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                assert_eq!(contract_addr, "market")
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
