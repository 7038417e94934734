use serde::{Deserialize, Serialize};

use crate::serde_hex;
use crate::transaction::Transaction;
use crate::unlock_block::UnlockBlock;

/// A transaction together with the unlock blocks authorizing its inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransactionPayload {
    pub transaction: Transaction,
    pub unlock_blocks: Vec<UnlockBlock>,
}

impl SignedTransactionPayload {
    pub const KIND: u8 = 0;
}

/// Inclusion merkle proof and signature of a milestone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestonePayload {
    pub index: u32,
    pub timestamp: u64,
    #[serde(with = "serde_hex")]
    pub inclusion_merkle_proof: [u8; MilestonePayload::INCLUSION_MERKLE_PROOF_LENGTH],
    #[serde(with = "serde_hex")]
    pub signature: [u8; MilestonePayload::SIGNATURE_LENGTH],
}

impl MilestonePayload {
    pub const KIND: u8 = 1;
    pub const INCLUSION_MERKLE_PROOF_LENGTH: usize = 64;
    pub const SIGNATURE_LENGTH: usize = 64;
}

/// A blob of unspecified data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPayload {
    #[serde(with = "serde_hex")]
    pub data: Vec<u8>,
}

impl DataPayload {
    pub const KIND: u8 = 2;

    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    SignedTransaction(SignedTransactionPayload),
    Milestone(MilestonePayload),
    Data(DataPayload),
}

impl Payload {
    pub fn kind(&self) -> u8 {
        match self {
            Payload::SignedTransaction(_) => SignedTransactionPayload::KIND,
            Payload::Milestone(_) => MilestonePayload::KIND,
            Payload::Data(_) => DataPayload::KIND,
        }
    }
}

impl From<SignedTransactionPayload> for Payload {
    fn from(payload: SignedTransactionPayload) -> Self {
        Payload::SignedTransaction(payload)
    }
}

impl From<MilestonePayload> for Payload {
    fn from(payload: MilestonePayload) -> Self {
        Payload::Milestone(payload)
    }
}

impl From<DataPayload> for Payload {
    fn from(payload: DataPayload) -> Self {
        Payload::Data(payload)
    }
}
