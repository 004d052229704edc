//! Placeholder contract registered under whatever name a module under
//! test asks for. Deployment declarations never see contract internals,
//! so a no-op instantiate plus a liveness query is enough.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};

#[cw_serde]
#[derive(QueryResponses)]
pub enum FixtureQueryMsg {
    #[returns(bool)]
    Deployed {},
}

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::default())
}

pub fn execute(_deps: DepsMut, _env: Env, _info: MessageInfo, _msg: Empty) -> StdResult<Response> {
    Ok(Response::default())
}

pub fn query(_deps: Deps, _env: Env, msg: FixtureQueryMsg) -> StdResult<Binary> {
    match msg {
        FixtureQueryMsg::Deployed {} => to_json_binary(&true),
    }
}
