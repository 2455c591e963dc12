use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::Trait;

#[cw_serde]
pub struct InstantiateMsg {
    pub minter: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a single hero (minter only); the token id is assigned sequentially
    Mint {
        to: String,
        attributes: Vec<Trait>,
        token_uri: Option<String>,
    },
    /// Batch mint up to 25 heroes (minter only)
    BatchMint { mints: Vec<MintRequest> },
}

#[cw_serde]
pub struct MintRequest {
    pub to: String,
    pub attributes: Vec<Trait>,
    pub token_uri: Option<String>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Get owner of a token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Get all token ids owned by an address, ascending
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Get full token info (owner + attributes + URI)
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u64 },
    /// Total minted count
    #[returns(NumTokensResponse)]
    NumTokens {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: u64,
    pub owner: String,
    pub attributes: Vec<Trait>,
    pub token_uri: Option<String>,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
