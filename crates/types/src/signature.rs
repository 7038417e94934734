use serde::{Deserialize, Serialize};

use crate::serde_hex;

/// Placeholder for the WOTS signature scheme. It carries no data: its
/// encoding beyond the discriminator is not defined in this protocol era.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WotsSignature;

impl WotsSignature {
    pub const KIND: u8 = 0;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ed25519Signature {
    #[serde(with = "serde_hex")]
    pub public_key: [u8; Ed25519Signature::PUBLIC_KEY_LENGTH],
    #[serde(with = "serde_hex")]
    pub signature: [u8; Ed25519Signature::SIGNATURE_LENGTH],
}

impl Ed25519Signature {
    pub const KIND: u8 = 1;
    pub const PUBLIC_KEY_LENGTH: usize = 32;
    pub const SIGNATURE_LENGTH: usize = 64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signature {
    Wots(WotsSignature),
    Ed25519(Ed25519Signature),
}

impl Signature {
    pub fn kind(&self) -> u8 {
        match self {
            Signature::Wots(_) => WotsSignature::KIND,
            Signature::Ed25519(_) => Ed25519Signature::KIND,
        }
    }
}

impl From<WotsSignature> for Signature {
    fn from(sig: WotsSignature) -> Self {
        Signature::Wots(sig)
    }
}

impl From<Ed25519Signature> for Signature {
    fn from(sig: Ed25519Signature) -> Self {
        Signature::Ed25519(sig)
    }
}
