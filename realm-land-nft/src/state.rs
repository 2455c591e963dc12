use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Hero collection whose owners are entitled to claim
    pub hero_collection: Addr,
    pub name: String,
    pub symbol: String,
    /// Prefix for land metadata URIs; token URI is `{base_uri}{id}.json`
    pub base_uri: String,
}

/// Full on-chain token data for a claimed land
#[cw_serde]
pub struct LandData {
    /// The address that performed the claim
    pub owner: Addr,
    pub token_uri: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// hero_id -> LandData. Presence of a key is the claim record for that hero:
/// a land with id T exists iff hero T has claimed, and entries are never
/// removed. u64 keys iterate in ascending numeric order.
pub const TOKENS: Map<u64, LandData> = Map::new("land_tokens");

/// (owner_addr, token_id) -> bool, secondary index for owner-based queries
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("owner_tokens");

/// Background trait value -> land type value, fixed at instantiation.
/// BTreeMap for deterministic serialization.
pub const BACKGROUND_LANDS: Item<BTreeMap<String, String>> = Item::new("background_lands");
