//! The wallet: single owner of the current profile.
//!
//! # Invariants
//! - The current profile lives in one `RwLock<Arc<Profile>>` cell; it is the
//!   only shared mutable state.
//! - The `Profile` behind the `Arc` is never written to. Mutations compute a
//!   new `Profile` and replace the `Arc` under the write lock, so snapshots
//!   sharing the old `Arc` keep seeing the old value.
//! - Mutations are all or nothing: on error the cell is left untouched.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::config::WalletConfig;
use crate::core::account::{Account, AppearanceId};
use crate::core::address::AccountAddress;
use crate::core::display_name::DisplayName;
use crate::core::network_id::NetworkId;
use crate::core::profile::Profile;
use crate::core::snapshot::{ProfileSnapshot, Snapshotable};
use crate::error::{Result, WalletError};

#[derive(Debug)]
pub struct Wallet {
    profile: RwLock<Arc<Profile>>,
    config: WalletConfig,
}

impl Wallet {
    pub fn new(profile: Profile) -> Self {
        Self::with_config(profile, WalletConfig::default())
    }

    pub fn with_config(profile: Profile, config: WalletConfig) -> Self {
        info!(
            networks = profile.networks().len(),
            accounts = profile.account_count(),
            "Wallet created"
        );
        Self {
            profile: RwLock::new(Arc::new(profile)),
            config,
        }
    }

    /// Clones the current `Arc`. A panic while a lock was held cannot have
    /// left the profile half-written, so poisoning is ignored.
    fn current(&self) -> Arc<Profile> {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Creates an immutable snapshot of the current profile.
    ///
    /// PERFORMANCE: O(1), only the `Arc` is cloned.
    ///
    /// The returned snapshot is never affected by later mutations of this
    /// wallet, and taking it changes nothing.
    pub fn profile_snapshot(&self) -> ProfileSnapshot {
        let snapshot = ProfileSnapshot::new(self.current());
        debug!(networks = snapshot.networks().len(), "Profile snapshot taken");
        snapshot
    }

    /// Runs `read` against the current profile.
    pub fn read<T, F>(&self, read: F) -> T
    where
        F: FnOnce(&Profile) -> T,
    {
        read(&self.current())
    }

    /// Serializes one mutation: computes the next profile from the current one
    /// under the write lock and installs it only if `mutate` succeeds.
    fn write<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&Profile) -> Result<(Profile, T)>,
    {
        let mut guard = self.profile.write().unwrap_or_else(PoisonError::into_inner);
        let (next, value) = mutate(&guard)?;
        *guard = Arc::new(next);
        Ok(value)
    }

    /// Updates the display name of the account at `address`.
    ///
    /// Returns the updated account, or `AccountNotFound` if the current profile
    /// has no such account. On error the profile is left unchanged.
    pub fn change_name_of_account(
        &self,
        address: &AccountAddress,
        name: DisplayName,
    ) -> Result<Account> {
        self.update_account(address, |a| a.with_display_name(name))
            .map(|account| {
                info!(
                    address = %account.address(),
                    network = %account.network_id(),
                    name = %account.display_name(),
                    "Account renamed"
                );
                account
            })
    }

    /// Parses raw inputs, validating the name with this wallet's configured
    /// rules, then renames.
    pub fn rename_account(&self, address: &str, name: &str) -> Result<Account> {
        let address = AccountAddress::try_from_bech32(address)?;
        let name = DisplayName::with_rules(name, &self.config.display_name)?;
        self.change_name_of_account(&address, name)
    }

    pub fn change_appearance_id_of_account(
        &self,
        address: &AccountAddress,
        appearance_id: AppearanceId,
    ) -> Result<Account> {
        self.update_account(address, |a| a.with_appearance_id(appearance_id))
            .map(|account| {
                info!(
                    address = %account.address(),
                    appearance = appearance_id.value(),
                    "Account appearance changed"
                );
                account
            })
    }

    /// Replaces the account at `address` with `update(account)`.
    ///
    /// Reports `AccountNotFound` both when the account is missing and when its
    /// whole network is.
    fn update_account<F>(&self, address: &AccountAddress, update: F) -> Result<Account>
    where
        F: FnOnce(&Account) -> Account,
    {
        self.write(|profile| profile.updating_account(address, update))
            .map_err(|e| match e {
                WalletError::NetworkNotFound(_) => WalletError::AccountNotFound(address.clone()),
                other => other,
            })
            .inspect_err(|e| warn!(address = %address, error = %e, "Account update rejected"))
    }

    /// Adds `account` to its network, creating the network if needed.
    pub fn add_account(&self, account: Account) -> Result<()> {
        let address = account.address().clone();
        let network_id = account.network_id();
        self.write(|profile| Ok((profile.appending_account(account)?, ())))
            .inspect(|_| info!(address = %address, network = %network_id, "Account added"))
            .inspect_err(|e| warn!(address = %address, error = %e, "Account not added"))
    }

    /// Returns a copy of the account at `address`.
    pub fn account_by_address(&self, address: &AccountAddress) -> Result<Account> {
        self.read(|p| p.account_by_address(address).cloned())
            .ok_or_else(|| WalletError::AccountNotFound(address.clone()))
    }

    /// Returns copies of the accounts on `network_id`, in creation order.
    pub fn accounts_on_network(&self, network_id: NetworkId) -> Result<Vec<Account>> {
        self.read(|p| p.accounts_on_network(network_id).map(<[Account]>::to_vec))
    }
}

impl Snapshotable for Wallet {
    fn snapshot(&self) -> ProfileSnapshot {
        self.profile_snapshot()
    }
}
