use cosmwasm_std::{Addr, Deps, MessageInfo};

use realm_hero_nft::msg::{OwnerOfResponse as HeroOwnerOfResponse, QueryMsg as HeroQueryMsg};

use crate::error::ContractError;
use crate::state::Config;

/// Ask the hero collection who currently owns `hero_id`. Any querier
/// failure (including a nonexistent hero) surfaces as ExternalLookupFailed;
/// claim state is never touched on that path.
pub fn query_hero_owner(
    deps: Deps,
    config: &Config,
    hero_id: u64,
) -> Result<Addr, ContractError> {
    let res: HeroOwnerOfResponse = deps
        .querier
        .query_wasm_smart(
            config.hero_collection.clone(),
            &HeroQueryMsg::OwnerOf { token_id: hero_id },
        )
        .map_err(|e| ContractError::ExternalLookupFailed {
            reason: e.to_string(),
        })?;

    deps.api
        .addr_validate(&res.owner)
        .map_err(|e| ContractError::ExternalLookupFailed {
            reason: e.to_string(),
        })
}

/// Land metadata URI for a claimed hero id.
pub fn land_token_uri(config: &Config, hero_id: u64) -> String {
    format!("{}{}.json", config.base_uri, hero_id)
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}
