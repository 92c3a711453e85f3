//! Immutable views of a wallet's profile.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::ops::Deref;
use std::sync::Arc;

use crate::core::profile::Profile;

/// Types that can hand out frozen views of their current profile.
pub trait Snapshotable {
    /// Produces a snapshot of the current profile. Taking a snapshot never
    /// changes the source.
    fn snapshot(&self) -> ProfileSnapshot;
}

/// Immutable snapshot of a profile. Creation is O(1): it shares the `Arc` the
/// wallet held at the time of the call.
///
/// # Invariants
/// - **Immutability:** no mutation methods; the shared `Profile` is never
///   written to, the wallet replaces its `Arc` instead.
/// - **Isolation:** holds no reference to the wallet, only to the profile value.
/// - **Structural equality:** two snapshots are equal iff their profiles are.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    profile: Arc<Profile>,
}

impl ProfileSnapshot {
    pub(crate) fn new(profile: Arc<Profile>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns an owned profile, cloning only if the value is still shared.
    pub fn into_profile(self) -> Profile {
        Arc::unwrap_or_clone(self.profile)
    }

    /// Deterministic hex SHA-256 digest of the profile contents, in network and
    /// account order. Equal profiles have equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for network in self.profile.networks() {
            hasher.update([network.id().discriminant()]);
            hasher.update((network.accounts().len() as u64).to_le_bytes());
            for account in network.accounts() {
                let address = account.address().as_str();
                let name = account.display_name().value();
                hasher.update((address.len() as u64).to_le_bytes());
                hasher.update(address.as_bytes());
                hasher.update((name.len() as u64).to_le_bytes());
                hasher.update(name.as_bytes());
                hasher.update([account.appearance_id().value()]);
                hasher.update((account.flags().len() as u64).to_le_bytes());
                for flag in account.flags() {
                    hasher.update([*flag as u8]);
                }
            }
        }
        hex::encode(hasher.finalize())
    }
}

impl Deref for ProfileSnapshot {
    type Target = Profile;

    fn deref(&self) -> &Profile {
        &self.profile
    }
}

impl PartialEq for ProfileSnapshot {
    fn eq(&self, other: &Self) -> bool {
        *self.profile == *other.profile
    }
}

impl Eq for ProfileSnapshot {}

impl PartialEq<Profile> for ProfileSnapshot {
    fn eq(&self, other: &Profile) -> bool {
        *self.profile == *other
    }
}

impl From<Profile> for ProfileSnapshot {
    fn from(profile: Profile) -> Self {
        Self::new(Arc::new(profile))
    }
}

impl Serialize for ProfileSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.profile.serialize(serializer)
    }
}
