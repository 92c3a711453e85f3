use thiserror::Error;

use crate::core::address::AccountAddress;
use crate::core::network_id::NetworkId;

/// Errors raised while constructing a validated value. A failed constructor
/// never yields a partially built value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Display name must not be empty")]
    EmptyName,

    #[error("Display name too long: {len} bytes, max is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("Invalid account address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Network mismatch: expected {expected}, found {found}")]
    NetworkMismatch { expected: NetworkId, found: NetworkId },

    #[error(
        "Invalid appearance id: {0}, must be at most {max}",
        max = crate::core::account::AppearanceId::MAX
    )]
    InvalidAppearanceId(u8),

    #[error("Duplicate account: {0}")]
    DuplicateAccount(AccountAddress),

    #[error("Duplicate network: {0}")]
    DuplicateNetwork(NetworkId),

    #[error("Profile must contain at least one network")]
    NoNetworks,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountAddress),

    #[error("Network not found: {0}")]
    NetworkNotFound(NetworkId),

    #[error("Account already present: {0}")]
    AccountAlreadyPresent(AccountAddress),
}

pub type Result<T> = std::result::Result<T, WalletError>;
