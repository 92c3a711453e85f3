use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::core::address::AccountAddress;
use crate::core::display_name::DisplayName;
use crate::core::identified::{Identifiable, IdentifiedVec};
use crate::core::network_id::NetworkId;
use crate::error::ValidationError;

/// Index of the gradient a wallet uses to draw an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AppearanceId(u8);

impl AppearanceId {
    pub const MAX: u8 = 11;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::InvalidAppearanceId(value));
        }
        Ok(Self(value))
    }

    /// Appearance for the next account created on a network already holding
    /// `count` accounts. Cycles through all gradients.
    pub fn from_number_of_accounts_on_network(count: usize) -> Self {
        Self((count % (Self::MAX as usize + 1)) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for AppearanceId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(d)?;
        AppearanceId::new(value).map_err(de::Error::custom)
    }
}

/// Off-ledger user state about an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityFlag {
    DeletedByUser,
}

pub type EntityFlags = BTreeSet<EntityFlag>;

/// A network unique account, identified by its address.
///
/// Accounts are values: the only way to "change" one is to build a new one
/// with one of the `with_*` methods, which never alter the address or network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AccountRecord")]
pub struct Account {
    #[serde(rename = "networkID")]
    network_id: NetworkId,
    address: AccountAddress,
    display_name: DisplayName,
    #[serde(rename = "appearanceID")]
    appearance_id: AppearanceId,
    flags: EntityFlags,
}

/// Unchecked wire shape of [`Account`]; converting it enforces the network invariant.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    #[serde(rename = "networkID")]
    network_id: NetworkId,
    address: AccountAddress,
    display_name: DisplayName,
    #[serde(rename = "appearanceID", default)]
    appearance_id: AppearanceId,
    #[serde(default)]
    flags: EntityFlags,
}

impl TryFrom<AccountRecord> for Account {
    type Error = ValidationError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let account = Account::on_network(
            record.network_id,
            record.address,
            record.display_name,
            record.appearance_id,
        )?;
        Ok(account.with_flags(record.flags))
    }
}

impl Account {
    /// Creates an account on the network its address belongs to.
    pub fn new(
        address: AccountAddress,
        display_name: DisplayName,
        appearance_id: AppearanceId,
    ) -> Self {
        Self {
            network_id: address.network_id(),
            address,
            display_name,
            appearance_id,
            flags: EntityFlags::new(),
        }
    }

    /// Creates an account, failing if `address` is not on `network_id`.
    pub fn on_network(
        network_id: NetworkId,
        address: AccountAddress,
        display_name: DisplayName,
        appearance_id: AppearanceId,
    ) -> Result<Self, ValidationError> {
        if address.network_id() != network_id {
            return Err(ValidationError::NetworkMismatch {
                expected: network_id,
                found: address.network_id(),
            });
        }
        Ok(Self::new(address, display_name, appearance_id))
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn address(&self) -> &AccountAddress {
        &self.address
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn appearance_id(&self) -> AppearanceId {
        self.appearance_id
    }

    pub fn flags(&self) -> &EntityFlags {
        &self.flags
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(&EntityFlag::DeletedByUser)
    }

    pub fn with_display_name(&self, display_name: DisplayName) -> Self {
        Self {
            display_name,
            ..self.clone()
        }
    }

    pub fn with_appearance_id(&self, appearance_id: AppearanceId) -> Self {
        Self {
            appearance_id,
            ..self.clone()
        }
    }

    pub fn with_flags(&self, flags: EntityFlags) -> Self {
        Self {
            flags,
            ..self.clone()
        }
    }
}

impl Identifiable for Account {
    type Id = AccountAddress;

    fn id(&self) -> AccountAddress {
        self.address.clone()
    }
}

/// Accounts of one network, in creation order.
pub type Accounts = IdentifiedVec<Account>;

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.display_name, self.address)
    }
}

// Placeholders
impl Account {
    fn placeholder_with(address: AccountAddress, name: &str, appearance: u8) -> Self {
        Self::new(
            address,
            DisplayName::new(name).expect("placeholder name is valid"),
            AppearanceId::new(appearance).expect("placeholder appearance is valid"),
        )
    }

    /// A mainnet account named "Alice".
    pub fn placeholder_alice() -> Self {
        Self::placeholder_with(AccountAddress::placeholder_alice(), "Alice", 0)
    }

    /// A mainnet account named "Bob".
    pub fn placeholder_bob() -> Self {
        Self::placeholder_with(AccountAddress::placeholder_bob(), "Bob", 1)
    }

    /// A stokenet account named "Carol".
    pub fn placeholder_carol() -> Self {
        Self::placeholder_with(AccountAddress::placeholder_carol(), "Carol", 0)
    }

    /// A stokenet account named "Diana".
    pub fn placeholder_diana() -> Self {
        Self::placeholder_with(AccountAddress::placeholder_diana(), "Diana", 1)
    }
}
