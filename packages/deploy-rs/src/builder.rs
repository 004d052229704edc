use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, Empty};
use serde::Serialize;
use serde_json::Value;

use crate::core::{ContractHandle, DeployError, DeployResult};

/// Ordered constructor arguments for a contract deployment request.
///
/// Deployment engines take a single instantiate message, so the sequence
/// collapses to one payload: no arguments becomes the empty object, a
/// single argument is passed through as-is, and multiple arguments are
/// wrapped in a JSON array.
#[cw_serde]
pub struct ConstructorArgs(pub Vec<Value>);

impl ConstructorArgs {
    pub fn none() -> Self {
        Self(vec![])
    }

    pub fn push<T: Serialize>(mut self, value: &T) -> DeployResult<Self> {
        self.0
            .push(serde_json::to_value(value).map_err(|e| DeployError::Serialization {
                reason: e.to_string(),
            })?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_instantiate_msg(&self) -> DeployResult<Binary> {
        match self.0.as_slice() {
            [] => Ok(to_json_binary(&Empty {})?),
            [single] => json_binary(single),
            many => json_binary(&many),
        }
    }
}

impl Default for ConstructorArgs {
    fn default() -> Self {
        Self::none()
    }
}

fn json_binary<T: Serialize>(value: &T) -> DeployResult<Binary> {
    Ok(Binary::new(serde_json::to_vec(value).map_err(|e| {
        DeployError::Serialization {
            reason: e.to_string(),
        }
    })?))
}

/// Record of a single `contract(...)` call issued through a builder.
#[cw_serde]
pub struct DeploymentRequest {
    pub contract_name: String,
    pub constructor_args: ConstructorArgs,
}

/// The capability a deployment engine injects into module bodies. The
/// engine owns resolution (code lookup, transaction submission, failure
/// reporting); declarations only name the contract and its arguments.
pub trait ModuleBuilder {
    fn contract_with_args(
        &mut self,
        name: &str,
        args: ConstructorArgs,
    ) -> DeployResult<ContractHandle>;

    fn contract(&mut self, name: &str) -> DeployResult<ContractHandle> {
        self.contract_with_args(name, ConstructorArgs::none())
    }
}

#[cfg(test)]
mod constructor_args_tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ConstructorArgs::none(), r#"{}"#)]
    #[case(ConstructorArgs(vec![json!({"fee_bps": 25})]), r#"{"fee_bps":25}"#)]
    #[case(
        ConstructorArgs(vec![json!("owner"), json!(100)]),
        r#"["owner",100]"#
    )]
    fn collapses_args_to_a_single_instantiate_msg(
        #[case] args: ConstructorArgs,
        #[case] expected: &str,
    ) {
        let msg = args.to_instantiate_msg().unwrap();
        assert_eq!(String::from_utf8(msg.to_vec()).unwrap(), expected);
    }

    #[test]
    fn push_appends_in_order() {
        let args = ConstructorArgs::none()
            .push(&"owner")
            .unwrap()
            .push(&100u64)
            .unwrap();

        assert_eq!(args.len(), 2);
        assert_eq!(args.0, vec![json!("owner"), json!(100)]);
    }
}
