use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier};
use cosmwasm_std::{coin, from_json, Addr, MemoryStorage, OwnedDeps};

use realm_hero_nft::contract::{execute, instantiate, query};
use realm_hero_nft::error::ContractError;
use realm_hero_nft::msg::*;
use realm_hero_nft::state::{Config, Trait};

type Deps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

fn a(deps: &Deps, name: &str) -> Addr {
    deps.api.addr_make(name)
}

fn background(value: &str) -> Vec<Trait> {
    vec![Trait {
        trait_type: "Background".to_string(),
        value: value.to_string(),
    }]
}

fn setup() -> Deps {
    let mut deps = mock_dependencies();
    let minter = deps.api.addr_make("minter");

    let msg = InstantiateMsg {
        minter: minter.to_string(),
        name: "Realm Heroes".to_string(),
        symbol: "RHERO".to_string(),
    };
    let info = message_info(&minter, &[]);
    instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
    deps
}

fn mint_hero(deps: &mut Deps, to: &str, bg: &str) -> u64 {
    let minter = deps.api.addr_make("minter");
    let to_addr = deps.api.addr_make(to);
    let info = message_info(&minter, &[]);
    let res = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::Mint {
            to: to_addr.to_string(),
            attributes: background(bg),
            token_uri: None,
        },
    )
    .unwrap();
    res.attributes
        .iter()
        .find(|attr| attr.key == "token_id")
        .unwrap()
        .value
        .parse()
        .unwrap()
}

// ─── Instantiation ──────────────────────────────────────────────────────────

#[test]
fn test_instantiate() {
    let deps = setup();
    let config: Config =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
    assert_eq!(config.minter, a(&deps, "minter"));
    assert_eq!(config.name, "Realm Heroes");
    assert_eq!(config.symbol, "RHERO");
}

// ─── Minting ────────────────────────────────────────────────────────────────

#[test]
fn test_mint() {
    let mut deps = setup();
    let token_id = mint_hero(&mut deps, "player1", "Beach");
    assert_eq!(token_id, 1);

    let nft: NftInfoResponse = from_json(
        query(deps.as_ref(), mock_env(), QueryMsg::NftInfo { token_id }).unwrap(),
    )
    .unwrap();
    assert_eq!(nft.owner, a(&deps, "player1").to_string());
    assert_eq!(nft.attributes, background("Beach"));
    assert!(nft.token_uri.is_none());
}

#[test]
fn test_sequential_token_ids() {
    let mut deps = setup();
    for i in 0..5u64 {
        let token_id = mint_hero(&mut deps, "player1", "Plains");
        assert_eq!(token_id, i + 1);
    }

    let count: NumTokensResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::NumTokens {}).unwrap()).unwrap();
    assert_eq!(count.count, 5);
}

#[test]
fn test_mint_non_minter_fails() {
    let mut deps = setup();
    let player = a(&deps, "player1");
    let info = message_info(&player, &[]);

    let err = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::Mint {
            to: player.to_string(),
            attributes: background("Desert"),
            token_uri: None,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "minter".to_string()
        }
    );
}

#[test]
fn test_mint_rejects_funds() {
    let mut deps = setup();
    let minter = a(&deps, "minter");
    let player = a(&deps, "player1");
    let info = message_info(&minter, &[coin(10, "urealm")]);

    let err = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::Mint {
            to: player.to_string(),
            attributes: background("Grove"),
            token_uri: None,
        },
    )
    .unwrap_err();

    assert_eq!(err, ContractError::UnexpectedFunds);
}

// ─── Batch Mint ─────────────────────────────────────────────────────────────

#[test]
fn test_batch_mint() {
    let mut deps = setup();
    let minter = a(&deps, "minter");
    let player = a(&deps, "player1");

    let mints: Vec<MintRequest> = ["Beach", "Castle", "Desert", "Plains", "Grove"]
        .iter()
        .map(|bg| MintRequest {
            to: player.to_string(),
            attributes: background(bg),
            token_uri: None,
        })
        .collect();

    let info = message_info(&minter, &[]);
    let res = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::BatchMint { mints },
    )
    .unwrap();
    assert_eq!(res.attributes[1].value, "5");

    let tokens: TokensResponse = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Tokens {
                owner: player.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(tokens.tokens, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_batch_mint_empty_fails() {
    let mut deps = setup();
    let minter = a(&deps, "minter");
    let info = message_info(&minter, &[]);
    let err = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::BatchMint { mints: vec![] },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::EmptyBatch);
}

#[test]
fn test_batch_mint_too_large_fails() {
    let mut deps = setup();
    let minter = a(&deps, "minter");
    let player = a(&deps, "player1");
    let info = message_info(&minter, &[]);

    let mints: Vec<MintRequest> = (0..26)
        .map(|_| MintRequest {
            to: player.to_string(),
            attributes: background("Plains"),
            token_uri: None,
        })
        .collect();

    let err = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::BatchMint { mints },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::BatchTooLarge { max: 25 });
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[test]
fn test_owner_of() {
    let mut deps = setup();
    let token_id = mint_hero(&mut deps, "player1", "Castle");

    let res: OwnerOfResponse = from_json(
        query(deps.as_ref(), mock_env(), QueryMsg::OwnerOf { token_id }).unwrap(),
    )
    .unwrap();
    assert_eq!(res.owner, a(&deps, "player1").to_string());

    // Unknown token ids are a query error, not a silent default
    assert!(query(deps.as_ref(), mock_env(), QueryMsg::OwnerOf { token_id: 99 }).is_err());
}

#[test]
fn test_tokens_numeric_order_past_ten() {
    let mut deps = setup();
    let player = a(&deps, "player1");
    for _ in 0..12 {
        mint_hero(&mut deps, "player1", "Plains");
    }

    let tokens: TokensResponse = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Tokens {
                owner: player.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    // Ascending numeric order, not lexicographic: 10 comes after 9
    assert_eq!(tokens.tokens, (1..=12).collect::<Vec<u64>>());
}

#[test]
fn test_tokens_pagination() {
    let mut deps = setup();
    let player = a(&deps, "player1");
    for _ in 0..5 {
        mint_hero(&mut deps, "player1", "Plains");
    }

    let page: TokensResponse = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Tokens {
                owner: player.to_string(),
                start_after: Some(2),
                limit: Some(2),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(page.tokens, vec![3, 4]);
}
