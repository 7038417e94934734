use serde::{Deserialize, Serialize};

use crate::signature::Signature;

/// Holds a signature which unlocks the input at the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureUnlockBlock {
    pub signature: Signature,
}

impl SignatureUnlockBlock {
    pub const KIND: u8 = 0;

    pub fn new(signature: impl Into<Signature>) -> Self {
        Self {
            signature: signature.into(),
        }
    }
}

/// Reuses the signature of an earlier signature unlock block in the same list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceUnlockBlock {
    pub reference: u16,
}

impl ReferenceUnlockBlock {
    pub const KIND: u8 = 1;

    pub fn new(reference: u16) -> Self {
        Self { reference }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockBlock {
    Signature(SignatureUnlockBlock),
    Reference(ReferenceUnlockBlock),
}

impl UnlockBlock {
    pub fn kind(&self) -> u8 {
        match self {
            UnlockBlock::Signature(_) => SignatureUnlockBlock::KIND,
            UnlockBlock::Reference(_) => ReferenceUnlockBlock::KIND,
        }
    }
}

impl From<SignatureUnlockBlock> for UnlockBlock {
    fn from(block: SignatureUnlockBlock) -> Self {
        UnlockBlock::Signature(block)
    }
}

impl From<ReferenceUnlockBlock> for UnlockBlock {
    fn from(block: ReferenceUnlockBlock) -> Self {
        UnlockBlock::Reference(block)
    }
}
