use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Authorized minter (backend wallet)
    pub minter: Addr,
    pub name: String,
    pub symbol: String,
}

/// One named attribute of a token's metadata (OpenSea attribute convention).
#[cw_serde]
pub struct Trait {
    pub trait_type: String,
    pub value: String,
}

/// Full on-chain token data for a hero
#[cw_serde]
pub struct HeroData {
    pub owner: Addr,
    /// Descriptive attributes ("Background", "Class", ...), fixed at mint
    pub attributes: Vec<Trait>,
    pub token_uri: Option<String>,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// token_id -> HeroData. u64 keys iterate in ascending numeric order.
pub const TOKENS: Map<u64, HeroData> = Map::new("hero_tokens");

/// (owner_addr, token_id) -> bool, secondary index for owner-based queries
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("owner_tokens");
