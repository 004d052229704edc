//! Deployment declaration for the NFT marketplace: one contract,
//! instantiated with no constructor arguments, exported under a single
//! fixed key. The contract code itself and the engine that resolves the
//! deployment both live elsewhere.

use deploy_rs::{
    builder::ModuleBuilder, core::DeployResult, exports::Exports, module::DeploymentModule,
};

pub const MODULE_NAME: &str = "NFTMarketPlaceModule";
pub const CONTRACT_NAME: &str = "NFTMarketPlace";
pub const EXPORT_KEY: &str = "NFTMarketPlace";

pub fn module() -> DeployResult<DeploymentModule> {
    DeploymentModule::new(MODULE_NAME, |m: &mut dyn ModuleBuilder| {
        let nft_market_place = m.contract(CONTRACT_NAME)?;

        Exports::single(EXPORT_KEY, nft_market_place)
    })
}
