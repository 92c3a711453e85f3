//! Network identifiers. Ordering follows the fixed discriminant, never insertion order.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NetworkId {
    Mainnet = 0x01,
    Stokenet = 0x02,
    Adapanet = 0x0a,
    Nebunet = 0x0b,
    Kisharnet = 0x0c,
    Ansharnet = 0x0d,
    Simulator = 0xf2,
}

impl NetworkId {
    pub const ALL: [NetworkId; 7] = [
        NetworkId::Mainnet,
        NetworkId::Stokenet,
        NetworkId::Adapanet,
        NetworkId::Nebunet,
        NetworkId::Kisharnet,
        NetworkId::Ansharnet,
        NetworkId::Simulator,
    ];

    pub fn discriminant(&self) -> u8 {
        *self as u8
    }

    pub fn logical_name(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "mainnet",
            NetworkId::Stokenet => "stokenet",
            NetworkId::Adapanet => "adapanet",
            NetworkId::Nebunet => "nebunet",
            NetworkId::Kisharnet => "kisharnet",
            NetworkId::Ansharnet => "ansharnet",
            NetworkId::Simulator => "simulator",
        }
    }

    /// Suffix appended to an entity prefix to form the bech32 HRP, e.g.
    /// `account_` + `rdx`.
    pub fn hrp_suffix(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "rdx",
            NetworkId::Stokenet => "tdx_2_",
            NetworkId::Adapanet => "tdx_a_",
            NetworkId::Nebunet => "tdx_b_",
            NetworkId::Kisharnet => "tdx_c_",
            NetworkId::Ansharnet => "tdx_d_",
            NetworkId::Simulator => "sim",
        }
    }

    pub fn from_hrp_suffix(suffix: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|id| id.hrp_suffix() == suffix)
            .ok_or_else(|| ValidationError::UnknownNetwork(suffix.to_string()))
    }
}

impl TryFrom<u8> for NetworkId {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|id| id.discriminant() == value)
            .ok_or_else(|| ValidationError::UnknownNetwork(format!("{:#04x}", value)))
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.logical_name())
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.discriminant())
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(d)?;
        NetworkId::try_from(value).map_err(de::Error::custom)
    }
}
