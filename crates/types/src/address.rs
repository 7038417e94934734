use serde::{Deserialize, Serialize};

use crate::serde_hex;

/// A WOTS address: 49 raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WotsAddress(#[serde(with = "serde_hex")] pub [u8; WotsAddress::LENGTH]);

impl WotsAddress {
    pub const KIND: u8 = 0;
    pub const LENGTH: usize = 49;
}

/// An Ed25519 address: 32 raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ed25519Address(#[serde(with = "serde_hex")] pub [u8; Ed25519Address::LENGTH]);

impl Ed25519Address {
    pub const KIND: u8 = 1;
    pub const LENGTH: usize = 32;
}

/// A deposit target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Address {
    Wots(WotsAddress),
    Ed25519(Ed25519Address),
}

impl Address {
    /// Discriminator of the wrapped variant.
    pub fn kind(&self) -> u8 {
        match self {
            Address::Wots(_) => WotsAddress::KIND,
            Address::Ed25519(_) => Ed25519Address::KIND,
        }
    }

    /// The raw address bytes without discriminator.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::Wots(addr) => &addr.0,
            Address::Ed25519(addr) => &addr.0,
        }
    }
}

impl From<WotsAddress> for Address {
    fn from(addr: WotsAddress) -> Self {
        Address::Wots(addr)
    }
}

impl From<Ed25519Address> for Address {
    fn from(addr: Ed25519Address) -> Self {
        Address::Ed25519(addr)
    }
}
