use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::error::ContractError;
use crate::helpers::{assert_minter, reject_funds};
use crate::msg::{
    ExecuteMsg, InstantiateMsg, MigrateMsg, MintRequest, NftInfoResponse, NumTokensResponse,
    OwnerOfResponse, QueryMsg, TokensResponse,
};
use crate::state::{Config, HeroData, Trait, CONFIG, OWNER_TOKENS, TOKENS, TOKEN_COUNT};

const CONTRACT_NAME: &str = "crates.io:realm-hero-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const MAX_BATCH_SIZE: u32 = 25;
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

    let minter = deps.api.addr_validate(&msg.minter)?;
    let config = Config {
        minter,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("minter", config.minter.as_str()))
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
        ExecuteMsg::Mint {
            to,
            attributes,
            token_uri,
        } => execute_mint(deps, env, info, to, attributes, token_uri),
        ExecuteMsg::BatchMint { mints } => execute_batch_mint(deps, env, info, mints),
    }
}

fn execute_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    to: String,
    attributes: Vec<Trait>,
    token_uri: Option<String>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_minter(deps.as_ref(), &info.sender)?;

    let recipient = deps.api.addr_validate(&to)?;
    let token_id = mint_single(deps, &recipient, attributes, token_uri)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("to", recipient.as_str()))
}

fn execute_batch_mint(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    mints: Vec<MintRequest>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_minter(deps.as_ref(), &info.sender)?;

    if mints.is_empty() {
        return Err(ContractError::EmptyBatch);
    }
    if mints.len() as u32 > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge {
            max: MAX_BATCH_SIZE,
        });
    }

    // Validate all recipients upfront
    let validated: Vec<(Addr, MintRequest)> = mints
        .into_iter()
        .map(|m| Ok((deps.api.addr_validate(&m.to)?, m)))
        .collect::<Result<Vec<_>, ContractError>>()?;

    let mut token_ids = Vec::with_capacity(validated.len());
    for (recipient, req) in validated {
        let token_id = mint_single(deps.branch(), &recipient, req.attributes, req.token_uri)?;
        token_ids.push(token_id);
    }

    Ok(Response::new()
        .add_attribute("action", "batch_mint")
        .add_attribute("count", token_ids.len().to_string())
        .add_attribute("first_token_id", token_ids[0].to_string())
        .add_attribute("last_token_id", token_ids[token_ids.len() - 1].to_string()))
}

fn mint_single(
    deps: DepsMut,
    recipient: &Addr,
    attributes: Vec<Trait>,
    token_uri: Option<String>,
) -> Result<u64, ContractError> {
    let mut count = TOKEN_COUNT.load(deps.storage)?;
    count += 1;
    let token_id = count;

    let data = HeroData {
        owner: recipient.clone(),
        attributes,
        token_uri,
    };

    TOKENS.save(deps.storage, token_id, &data)?;
    OWNER_TOKENS.save(deps.storage, (recipient, token_id), &true)?;
    TOKEN_COUNT.save(deps.storage, &count)?;

    Ok(token_id)
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query_tokens(deps, owner, start_after, limit),
        QueryMsg::NftInfo { token_id } => query_nft_info(deps, token_id),
        QueryMsg::NumTokens {} => query_num_tokens(deps),
    }
}

fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
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
    to_json_binary(&NftInfoResponse {
        token_id,
        owner: token.owner.to_string(),
        attributes: token.attributes,
        token_uri: token.token_uri,
    })
}

fn query_num_tokens(deps: Deps) -> StdResult<Binary> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    to_json_binary(&NumTokensResponse { count })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
