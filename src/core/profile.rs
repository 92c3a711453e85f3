//! The profile: every network the wallet knows and the accounts on each.
//!
//! A `Profile` is an immutable value. Operations that "change" it take `&self`
//! and return a new `Profile`; the receiver and every value previously read
//! from it stay as they were.

use serde::{Deserialize, Serialize};

use crate::core::account::Account;
use crate::core::address::AccountAddress;
use crate::core::network::{Network, Networks};
use crate::core::network_id::NetworkId;
use crate::error::{Result, ValidationError, WalletError};

/// # Invariants
/// - At least one network.
/// - No two networks share a `NetworkId`; order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord")]
pub struct Profile {
    networks: Networks,
}

#[derive(Deserialize)]
struct ProfileRecord {
    networks: Vec<Network>,
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ValidationError;

    fn try_from(record: ProfileRecord) -> std::result::Result<Self, Self::Error> {
        Profile::new(record.networks)
    }
}

impl Profile {
    pub fn new<I>(networks: I) -> std::result::Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Network>,
    {
        let networks =
            Networks::try_from_iter(networks).map_err(ValidationError::DuplicateNetwork)?;
        if networks.is_empty() {
            return Err(ValidationError::NoNetworks);
        }
        Ok(Self { networks })
    }

    pub fn networks(&self) -> &Networks {
        &self.networks
    }

    pub fn network(&self, id: NetworkId) -> Option<&Network> {
        self.networks.get(&id)
    }

    pub fn accounts_on_network(&self, id: NetworkId) -> Result<&[Account]> {
        self.network(id)
            .map(|n| n.accounts().as_slice())
            .ok_or(WalletError::NetworkNotFound(id))
    }

    pub fn account_by_address(&self, address: &AccountAddress) -> Option<&Account> {
        self.network(address.network_id())?.account(address)
    }

    /// Total number of accounts across all networks.
    pub fn account_count(&self) -> usize {
        self.networks.iter().map(|n| n.accounts().len()).sum()
    }

    /// Computes the profile in which the account at `address` is replaced by
    /// `update(account)`. Network and account positions are preserved.
    ///
    /// Fails with `NetworkNotFound` if the address's network is absent and with
    /// `AccountNotFound` if the network has no such account.
    pub(crate) fn updating_account<F>(
        &self,
        address: &AccountAddress,
        update: F,
    ) -> Result<(Self, Account)>
    where
        F: FnOnce(&Account) -> Account,
    {
        let network_id = address.network_id();
        let network = self
            .network(network_id)
            .ok_or(WalletError::NetworkNotFound(network_id))?;
        let (network, account) = network.updating_account(address, update)?;
        let networks = self
            .networks
            .replacing(network)
            .ok_or(WalletError::NetworkNotFound(network_id))?;
        Ok((Self { networks }, account))
    }

    /// Computes the profile with `account` added to its network, appending a new
    /// network at the end if the profile has none for it yet.
    pub fn appending_account(&self, account: Account) -> Result<Self> {
        let network_id = account.network_id();
        let networks = match self.network(network_id) {
            Some(network) => {
                let network = network.appending_account(account)?;
                self.networks.replacing(network)
            }
            None => self.networks.appending(Network::new(network_id, [account])?),
        }
        .ok_or(WalletError::NetworkNotFound(network_id))?;
        Ok(Self { networks })
    }
}

// Placeholders
impl Profile {
    /// Mainnet with Alice and Bob, followed by Stokenet with Carol and Diana.
    pub fn placeholder() -> Self {
        Self::new([Network::placeholder_mainnet(), Network::placeholder_stokenet()])
            .expect("placeholder profile is valid")
    }
}
