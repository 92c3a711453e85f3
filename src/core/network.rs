use serde::{Deserialize, Serialize};

use crate::core::account::{Account, Accounts};
use crate::core::address::AccountAddress;
use crate::core::identified::{Identifiable, IdentifiedVec};
use crate::core::network_id::NetworkId;
use crate::error::{Result, ValidationError, WalletError};

/// The accounts a profile holds on one network.
///
/// # Invariants
/// - Every account's network id equals `id`.
/// - Account addresses are unique; order is creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NetworkRecord")]
pub struct Network {
    #[serde(rename = "networkID")]
    id: NetworkId,
    accounts: Accounts,
}

#[derive(Deserialize)]
struct NetworkRecord {
    #[serde(rename = "networkID")]
    id: NetworkId,
    accounts: Vec<Account>,
}

impl TryFrom<NetworkRecord> for Network {
    type Error = ValidationError;

    fn try_from(record: NetworkRecord) -> std::result::Result<Self, Self::Error> {
        Network::new(record.id, record.accounts)
    }
}

impl Network {
    pub fn new<I>(id: NetworkId, accounts: I) -> std::result::Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Account>,
    {
        let accounts =
            Accounts::try_from_iter(accounts).map_err(ValidationError::DuplicateAccount)?;
        if let Some(foreign) = accounts.iter().find(|a| a.network_id() != id) {
            return Err(ValidationError::NetworkMismatch {
                expected: id,
                found: foreign.network_id(),
            });
        }
        Ok(Self { id, accounts })
    }

    pub fn id(&self) -> NetworkId {
        self.id
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    pub fn account(&self, address: &AccountAddress) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// Returns a copy of this network with the account at `address` replaced
    /// by `update(account)`, at the same position, along with the new account.
    pub(crate) fn updating_account<F>(
        &self,
        address: &AccountAddress,
        update: F,
    ) -> Result<(Self, Account)>
    where
        F: FnOnce(&Account) -> Account,
    {
        let current = self
            .accounts
            .get(address)
            .ok_or_else(|| WalletError::AccountNotFound(address.clone()))?;
        let updated = update(current);
        debug_assert_eq!(updated.address(), address, "account updates must keep the address");
        let accounts = self
            .accounts
            .replacing(updated.clone())
            .ok_or_else(|| WalletError::AccountNotFound(address.clone()))?;
        Ok((
            Self {
                id: self.id,
                accounts,
            },
            updated,
        ))
    }

    /// Returns a copy of this network with `account` added last.
    pub fn appending_account(&self, account: Account) -> Result<Self> {
        if account.network_id() != self.id {
            return Err(ValidationError::NetworkMismatch {
                expected: self.id,
                found: account.network_id(),
            }
            .into());
        }
        let address = account.address().clone();
        let accounts = self
            .accounts
            .appending(account)
            .ok_or(WalletError::AccountAlreadyPresent(address))?;
        Ok(Self {
            id: self.id,
            accounts,
        })
    }
}

impl Identifiable for Network {
    type Id = NetworkId;

    fn id(&self) -> NetworkId {
        self.id
    }
}

/// Networks of a profile, keyed by id.
pub type Networks = IdentifiedVec<Network>;

// Placeholders
impl Network {
    pub fn placeholder_mainnet() -> Self {
        Self::new(
            NetworkId::Mainnet,
            [Account::placeholder_alice(), Account::placeholder_bob()],
        )
        .expect("placeholder mainnet network is valid")
    }

    pub fn placeholder_stokenet() -> Self {
        Self::new(
            NetworkId::Stokenet,
            [Account::placeholder_carol(), Account::placeholder_diana()],
        )
        .expect("placeholder stokenet network is valid")
    }
}
