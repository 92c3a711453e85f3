pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub use crate::config::{DisplayNameRules, LoggingConfig, WalletConfig};
pub use crate::error::{Result, ValidationError, WalletError};
pub use crate::logging::init_logging;

// Core API exports
pub use crate::core::account::{Account, Accounts, AppearanceId, EntityFlag, EntityFlags};
pub use crate::core::address::AccountAddress;
pub use crate::core::display_name::DisplayName;
pub use crate::core::identified::{Identifiable, IdentifiedVec};
pub use crate::core::network::{Network, Networks};
pub use crate::core::network_id::NetworkId;
pub use crate::core::profile::Profile;
pub use crate::core::snapshot::{ProfileSnapshot, Snapshotable};
pub use crate::core::wallet::Wallet;
