use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::consistency::{LandMapping, Trait};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the hero collection contract
    pub hero_collection: String,
    pub name: String,
    pub symbol: String,
    /// Prefix for land metadata URIs
    pub base_uri: String,
    /// Enumerated background→land-type configuration, one entry per
    /// recognized background value
    pub background_lands: Vec<LandMapping>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Claim the land bound to `hero_id`. The caller must currently own the
    /// hero in the base collection; each hero can claim exactly once.
    Claim { hero_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Land id bound to a hero, if it has claimed
    #[returns(HeroLandResponse)]
    HeroLand { hero_id: u64 },
    /// Get owner of a land token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Get all land ids owned by an address, ascending
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Get full token info (owner + URI)
    #[returns(LandInfoResponse)]
    NftInfo { token_id: u64 },
    /// Total claimed count
    #[returns(NumTokensResponse)]
    NumTokens {},
    /// The configured background→land-type map
    #[returns(BackgroundLandsResponse)]
    BackgroundLands {},
    /// Evaluate the metadata consistency rule for a hero/land attribute
    /// pair. Evaluation failures (missing Background trait, unmapped
    /// background) surface as query errors.
    #[returns(ConsistencyResponse)]
    CheckConsistency {
        hero_attributes: Vec<Trait>,
        land_attributes: Vec<Trait>,
    },
}

#[cw_serde]
pub struct HeroLandResponse {
    pub land_id: Option<u64>,
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
pub struct LandInfoResponse {
    pub token_id: u64,
    pub owner: String,
    pub token_uri: String,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct BackgroundLandsResponse {
    pub mappings: Vec<LandMapping>,
}

#[cw_serde]
pub struct ConsistencyResponse {
    pub consistent: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
