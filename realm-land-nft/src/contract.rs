use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::consistency::{build_background_map, is_consistent, LandMapping, Trait};
use crate::error::ContractError;
use crate::helpers::{land_token_uri, query_hero_owner, reject_funds};
use crate::msg::{
    BackgroundLandsResponse, ConsistencyResponse, ExecuteMsg, HeroLandResponse, InstantiateMsg,
    LandInfoResponse, MigrateMsg, NumTokensResponse, OwnerOfResponse, QueryMsg, TokensResponse,
};
use crate::state::{Config, LandData, BACKGROUND_LANDS, CONFIG, OWNER_TOKENS, TOKENS, TOKEN_COUNT};

const CONTRACT_NAME: &str = "crates.io:realm-land-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let hero_collection = deps.api.addr_validate(&msg.hero_collection)?;
    let background_map = build_background_map(&msg.background_lands)?;

    let config = Config {
        hero_collection,
        name: msg.name,
        symbol: msg.symbol,
        base_uri: msg.base_uri,
    };
    CONFIG.save(deps.storage, &config)?;
    BACKGROUND_LANDS.save(deps.storage, &background_map)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("hero_collection", config.hero_collection.as_str()))
}

// ─── Execute ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Claim { hero_id } => execute_claim(deps, env, info, hero_id),
    }
}

/// One-time, ownership-verified claim. The land token id equals the hero id
/// by construction, so the hero→land binding is trivially invertible.
fn execute_claim(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    hero_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let config = CONFIG.load(deps.storage)?;

    // 1. The caller must currently own the hero in the base collection.
    let hero_owner = query_hero_owner(deps.as_ref(), &config, hero_id)?;
    if hero_owner != info.sender {
        return Err(ContractError::NotOwner {
            hero_id,
            caller: info.sender.to_string(),
        });
    }

    // 2. Each hero claims at most once; claims are irreversible.
    if TOKENS.has(deps.storage, hero_id) {
        return Err(ContractError::AlreadyClaimed { hero_id });
    }

    // All checks passed — record the claim and mint the land.
    let data = LandData {
        owner: info.sender.clone(),
        token_uri: land_token_uri(&config, hero_id),
    };
    TOKENS.save(deps.storage, hero_id, &data)?;
    OWNER_TOKENS.save(deps.storage, (&info.sender, hero_id), &true)?;
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "claim")
        .add_attribute("hero_id", hero_id.to_string())
        .add_attribute("land_id", hero_id.to_string())
        .add_attribute("owner", info.sender.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::HeroLand { hero_id } => query_hero_land(deps, hero_id),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query_tokens(deps, owner, start_after, limit),
        QueryMsg::NftInfo { token_id } => query_nft_info(deps, token_id),
        QueryMsg::NumTokens {} => query_num_tokens(deps),
        QueryMsg::BackgroundLands {} => query_background_lands(deps),
        QueryMsg::CheckConsistency {
            hero_attributes,
            land_attributes,
        } => query_check_consistency(deps, hero_attributes, land_attributes),
    }
}

fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

/// Pure lookup; never fails, never mutates.
fn query_hero_land(deps: Deps, hero_id: u64) -> StdResult<Binary> {
    let land_id = if TOKENS.has(deps.storage, hero_id) {
        Some(hero_id)
    } else {
        None
    };
    to_json_binary(&HeroLandResponse { land_id })
}

fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = TOKENS.load(deps.storage, token_id)?;
    to_json_binary(&OwnerOfResponse {
        owner: token.owner.to_string(),
    })
}

fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens: Vec<u64> = OWNER_TOKENS
        .prefix(&owner_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&TokensResponse { tokens })
}

fn query_nft_info(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = TOKENS.load(deps.storage, token_id)?;
    to_json_binary(&LandInfoResponse {
        token_id,
        owner: token.owner.to_string(),
        token_uri: token.token_uri,
    })
}

fn query_num_tokens(deps: Deps) -> StdResult<Binary> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    to_json_binary(&NumTokensResponse { count })
}

fn query_background_lands(deps: Deps) -> StdResult<Binary> {
    let map = BACKGROUND_LANDS.load(deps.storage)?;
    let mappings = map
        .into_iter()
        .map(|(background, land_type)| LandMapping {
            background,
            land_type,
        })
        .collect();
    to_json_binary(&BackgroundLandsResponse { mappings })
}

fn query_check_consistency(
    deps: Deps,
    hero_attributes: Vec<Trait>,
    land_attributes: Vec<Trait>,
) -> StdResult<Binary> {
    let map = BACKGROUND_LANDS.load(deps.storage)?;
    let consistent = is_consistent(&map, &hero_attributes, &land_attributes)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    to_json_binary(&ConsistencyResponse { consistent })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
