use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("caller {caller} does not own hero {hero_id}")]
    NotOwner { hero_id: u64, caller: String },

    #[error("This hero has already claimed a land")]
    AlreadyClaimed { hero_id: u64 },

    #[error("external ownership lookup failed: {reason}")]
    ExternalLookupFailed { reason: String },

    #[error("metadata has no \"{trait_type}\" trait")]
    MissingTrait { trait_type: String },

    #[error("no land type mapped for background \"{background}\"")]
    UnmappedBackground { background: String },

    #[error("background land map must not be empty")]
    EmptyBackgroundMap,

    #[error("duplicate background \"{background}\" in land map")]
    DuplicateBackground { background: String },

    #[error("duplicate land type \"{land_type}\" in land map")]
    DuplicateLandType { land_type: String },

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
