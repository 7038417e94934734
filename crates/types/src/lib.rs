//! Data model for the ledger's wire objects.
//!
//! Every polymorphic slot (address, input, output, signature, unlock block,
//! transaction, payload) is a closed enum; the encoding rules live in
//! `tangle-codec`.

mod address;
mod input;
mod message;
mod output;
mod payload;
pub mod serde_hex;
mod signature;
mod transaction;
mod unlock_block;

pub use address::{Address, Ed25519Address, WotsAddress};
pub use input::{Input, UtxoInput};
pub use message::{Message, MessageId};
pub use output::{Output, SigLockedSingleDeposit};
pub use payload::{DataPayload, MilestonePayload, Payload, SignedTransactionPayload};
pub use signature::{Ed25519Signature, Signature, WotsSignature};
pub use transaction::{Transaction, TransactionId, UnsignedTransaction};
pub use unlock_block::{ReferenceUnlockBlock, SignatureUnlockBlock, UnlockBlock};

/// Total token supply. No single output, nor the sum of a transaction's
/// outputs, may exceed it.
pub const TOKEN_SUPPLY: u64 = 2_779_530_283_277_761;

pub const TRANSACTION_ID_LENGTH: usize = 32;
pub const MESSAGE_ID_LENGTH: usize = 32;

pub const MIN_INPUTS_COUNT: u64 = 1;
pub const MAX_INPUTS_COUNT: u64 = 126;
pub const MIN_OUTPUTS_COUNT: u64 = 1;
pub const MAX_OUTPUTS_COUNT: u64 = 126;

/// Inclusive bounds of the output index a UTXO input may reference.
pub const REF_UTXO_INDEX_MIN: u16 = 0;
pub const REF_UTXO_INDEX_MAX: u16 = 126;

pub const MESSAGE_VERSION: u8 = 1;
