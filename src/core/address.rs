//! Bech32m account addresses. The network an address belongs to is encoded in
//! its human readable part, so an address can never drift from its network.

use bech32::FromBase32;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::network_id::NetworkId;
use crate::error::ValidationError;

/// HRP prefix shared by all account addresses.
pub const ACCOUNT_HRP_PREFIX: &str = "account_";

/// Length in bytes of a decoded address payload (entity type byte + 29 byte hash).
pub const ADDRESS_PAYLOAD_LEN: usize = 30;

/// Entity type bytes an account address payload may start with.
pub const ACCOUNT_ENTITY_TYPES: [u8; 3] = [
    0xc1, // global account component
    0xd1, // virtual account, secp256k1 key
    0x51, // virtual account, ed25519 key
];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress {
    address: String,
    network_id: NetworkId,
}

impl AccountAddress {
    /// Decodes and validates a bech32m account address, e.g.
    /// `account_rdx12yy8n09a0w907vrjyj4hws2yptrm3rdjv84l9sr24e3w7pk7nuxst8`.
    ///
    /// Bech32 is case insensitive, so an all uppercase address is accepted and
    /// stored in its lowercase form.
    pub fn try_from_bech32(s: &str) -> Result<Self, ValidationError> {
        let invalid =
            |reason: &str| ValidationError::InvalidAddressFormat(format!("{s}: {reason}"));

        let (hrp, data, variant) =
            bech32::decode(s).map_err(|e| invalid(&e.to_string()))?;
        if variant != bech32::Variant::Bech32m {
            return Err(invalid("not bech32m"));
        }

        let suffix = hrp
            .strip_prefix(ACCOUNT_HRP_PREFIX)
            .ok_or_else(|| invalid("not an account address"))?;
        let network_id =
            NetworkId::from_hrp_suffix(suffix).map_err(|_| invalid("unknown network"))?;

        let payload = Vec::<u8>::from_base32(&data).map_err(|e| invalid(&e.to_string()))?;
        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(invalid("wrong payload length"));
        }
        if !ACCOUNT_ENTITY_TYPES.contains(&payload[0]) {
            return Err(invalid("not an account entity"));
        }

        Ok(Self {
            address: s.to_lowercase(),
            network_id,
        })
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Abbreviated form shown to users, e.g. `acco...7nuxst8`.
    pub fn short(&self) -> String {
        let len = self.address.len();
        format!("{}...{}", &self.address[..4], &self.address[len - 6..])
    }
}

impl TryFrom<&str> for AccountAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        AccountAddress::try_from_bech32(value)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        AccountAddress::try_from_bech32(&s).map_err(de::Error::custom)
    }
}

// Placeholders
impl AccountAddress {
    fn placeholder_from(s: &str) -> Self {
        Self::try_from_bech32(s).expect("placeholder address is valid")
    }

    pub fn placeholder_alice() -> Self {
        Self::placeholder_from("account_rdx12yy8n09a0w907vrjyj4hws2yptrm3rdjv84l9sr24e3w7pk7nuxst8")
    }

    pub fn placeholder_bob() -> Self {
        Self::placeholder_from("account_rdx129a9wuey40lducsf6yu232zmzk5kscpvnl6fv472r0ja39f3hced69")
    }

    pub fn placeholder_carol() -> Self {
        Self::placeholder_from(
            "account_tdx_2_129xzdkg8fsna38k7tynsczkpfdc7qud32gu4r8m4ga9j7waxrhhghu",
        )
    }

    pub fn placeholder_diana() -> Self {
        Self::placeholder_from(
            "account_tdx_2_12ydjljf5rgt2un3spq5kt4fh4eruyxs0yl75864hsvcwmqt4dlhy65",
        )
    }

    /// A mainnet address that no placeholder profile contains.
    pub fn placeholder_other() -> Self {
        Self::placeholder_from("account_rdx16xlfcpp0vf7e3gqnswv8j9k58n6rjccu58vvspmdva22kf3aplease")
    }

    /// A stokenet address that no placeholder profile contains.
    pub fn placeholder_stokenet_other() -> Self {
        Self::placeholder_from(
            "account_tdx_2_12ygsf87pma439ezvdyervjfq2nhqme6reau6kcxf6jtaysaxl7sqvd",
        )
    }
}
