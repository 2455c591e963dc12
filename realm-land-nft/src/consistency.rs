//! Hero/land metadata consistency rule.
//!
//! A land's descriptive attributes must carry the land type dictated by its
//! hero's "Background" trait through the configured background→land-type
//! map. The rule is evaluated by auditing consumers against externally
//! fetched attribute sets; it is never consulted at claim time.

use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;

pub use realm_hero_nft::state::Trait;

use crate::error::ContractError;

/// Hero trait consulted by the consistency rule.
pub const BACKGROUND_TRAIT: &str = "Background";

/// One entry of the background→land-type configuration.
#[cw_serde]
pub struct LandMapping {
    pub background: String,
    pub land_type: String,
}

/// Build the background→land-type map from its enumerated configuration.
/// Rejects an empty list, duplicate backgrounds, and duplicate land types
/// (the map must stay injective).
pub fn build_background_map(
    mappings: &[LandMapping],
) -> Result<BTreeMap<String, String>, ContractError> {
    if mappings.is_empty() {
        return Err(ContractError::EmptyBackgroundMap);
    }

    let mut map = BTreeMap::new();
    for mapping in mappings {
        if map.contains_key(&mapping.background) {
            return Err(ContractError::DuplicateBackground {
                background: mapping.background.clone(),
            });
        }
        if map.values().any(|v| *v == mapping.land_type) {
            return Err(ContractError::DuplicateLandType {
                land_type: mapping.land_type.clone(),
            });
        }
        map.insert(mapping.background.clone(), mapping.land_type.clone());
    }

    Ok(map)
}

/// Value of the hero's "Background" trait.
pub fn hero_background(hero_attributes: &[Trait]) -> Result<&str, ContractError> {
    hero_attributes
        .iter()
        .find(|a| a.trait_type == BACKGROUND_TRAIT)
        .map(|a| a.value.as_str())
        .ok_or_else(|| ContractError::MissingTrait {
            trait_type: BACKGROUND_TRAIT.to_string(),
        })
}

/// Land type a hero's background maps to. The map is not guaranteed total
/// over all background values; an unmapped background is a hard error, not
/// a vacuous pass.
pub fn expected_land_type<'a>(
    map: &'a BTreeMap<String, String>,
    hero_attributes: &[Trait],
) -> Result<&'a str, ContractError> {
    let background = hero_background(hero_attributes)?;
    map.get(background)
        .map(String::as_str)
        .ok_or_else(|| ContractError::UnmappedBackground {
            background: background.to_string(),
        })
}

/// True iff some land attribute's value equals the land type dictated by
/// the hero's background. The trait name on the land side is not pinned;
/// any attribute carrying the expected value satisfies the rule.
pub fn is_consistent(
    map: &BTreeMap<String, String>,
    hero_attributes: &[Trait],
    land_attributes: &[Trait],
) -> Result<bool, ContractError> {
    let expected = expected_land_type(map, hero_attributes)?;
    Ok(land_attributes.iter().any(|a| a.value == expected))
}
