use std::fmt;

use crate::{
    builder::ModuleBuilder,
    core::{DeployError, DeployResult},
    exports::Exports,
};

pub type ModuleBody = Box<dyn Fn(&mut dyn ModuleBuilder) -> DeployResult<Exports>>;

/// A named unit of deployment work: the body receives a builder from the
/// engine, issues its deployment requests through it, and returns the
/// export mapping. Constructed once at load time and not mutated after;
/// each `build` call is independent of any previous one.
pub struct DeploymentModule {
    name: String,
    body: ModuleBody,
}

impl DeploymentModule {
    pub fn new<F>(name: impl Into<String>, body: F) -> DeployResult<Self>
    where
        F: Fn(&mut dyn ModuleBuilder) -> DeployResult<Exports> + 'static,
    {
        let name = name.into();

        if !is_valid_module_name(&name) {
            return Err(DeployError::InvalidModuleName { name });
        }

        Ok(Self {
            name,
            body: Box::new(body),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(&self, builder: &mut dyn ModuleBuilder) -> DeployResult<Exports> {
        (self.body)(builder)
    }
}

impl fmt::Debug for DeploymentModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentModule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn is_valid_module_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod module_tests {
    use super::*;

    use cosmwasm_std::Addr;
    use rstest::rstest;

    use crate::{core::ContractHandle, mock::MockBuilder};

    #[rstest]
    #[case("NFTMarketPlaceModule", true)]
    #[case("_private", true)]
    #[case("module_v2", true)]
    #[case("", false)]
    #[case("2fast", false)]
    #[case("bad name", false)]
    #[case("kebab-case", false)]
    fn validates_module_names(#[case] name: &str, #[case] valid: bool) {
        let result = DeploymentModule::new(name, |_| Ok(Exports::new()));

        match result {
            Ok(module) => {
                assert!(valid, "expected {name:?} to be rejected");
                assert_eq!(module.name(), name);
            }
            Err(err) => {
                assert!(!valid, "expected {name:?} to be accepted, got {err}");
                assert_eq!(
                    err,
                    DeployError::InvalidModuleName {
                        name: name.to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn build_returns_the_body_exports() {
        let module = DeploymentModule::new("TokenModule", |m| {
            let token = m.contract("Token")?;
            Exports::single("Token", token)
        })
        .unwrap();

        let mut builder = MockBuilder::new()
            .with_handle("Token", ContractHandle::new(Addr::unchecked("token"), 3));

        let exports = module.build(&mut builder).unwrap();

        assert_eq!(exports.len(), 1);
        assert_eq!(
            exports.get("Token"),
            Some(&ContractHandle::new(Addr::unchecked("token"), 3))
        );
    }

    #[test]
    fn builder_failures_propagate_unmodified() {
        let module = DeploymentModule::new("TokenModule", |m| {
            let token = m.contract("Token")?;
            Exports::single("Token", token)
        })
        .unwrap();

        let mut builder = MockBuilder::new().failing_with(DeployError::Engine {
            reason: "out of gas".to_string(),
        });

        assert_eq!(
            module.build(&mut builder),
            Err(DeployError::Engine {
                reason: "out of gas".to_string()
            })
        );
    }
}
