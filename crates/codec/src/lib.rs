//! Binary codec for the ledger's wire objects.
//!
//! Every polymorphic object starts with a one-byte discriminator that its
//! own codec writes and re-reads. Arrays carry a varint count, composite
//! objects layer cross-element validation on top of the array codec. All
//! routines are pure functions over byte slices and keep no state between
//! calls.

mod address;
mod error;
mod input;
mod message;
mod mode;
mod output;
mod payload;
mod primitives;
mod serializable;
mod signature;
mod transaction;
mod unlock_block;
mod validation;

pub use address::{ED25519_ADDRESS_SERIALIZED_SIZE, WOTS_ADDRESS_SERIALIZED_SIZE};
pub use error::{CodecError, ErrorKind, Family, SupplyRule};
pub use input::{check_output_index, UTXO_INPUT_SIZE};
pub use message::MESSAGE_MIN_SIZE;
pub use mode::Mode;
pub use output::SIG_LOCKED_SINGLE_DEPOSIT_MIN_SIZE;
pub use payload::{
    DATA_PAYLOAD_MIN_SIZE, MILESTONE_PAYLOAD_SIZE, SIGNED_TRANSACTION_PAYLOAD_MIN_SIZE,
};
pub use primitives::{decode_varint, encode_varint, varint_size, MAX_VARINT_LEN_64};
pub use serializable::{
    decode_array, decode_object, encode_array, sort_lexically, ArrayRules, DecodeFn, Selector,
    Serializable, Variant, MIN_OBJECT_SIZE,
};
pub use signature::ED25519_SIGNATURE_SERIALIZED_SIZE;
pub use transaction::{INPUTS_ARRAY_RULES, OUTPUTS_ARRAY_RULES, UNSIGNED_TRANSACTION_MIN_SIZE};
pub use unlock_block::{REFERENCE_UNLOCK_BLOCK_SIZE, SIGNATURE_UNLOCK_BLOCK_MIN_SIZE};
pub use validation::{
    check_deposit_amount, validate_inputs, validate_outputs, validate_unlock_blocks,
    InputsValidation, OutputsValidation, UnlockBlocksValidation,
};

use tangle_types::{Message, SignedTransactionPayload, Transaction};

/// Canonical encoding of a message, fully validated.
pub fn encode_message(msg: &Message) -> Result<Vec<u8>, CodecError> {
    msg.encode(Mode::VALIDATION)
}

/// Decodes a complete message; trailing bytes are an error.
pub fn decode_message(bytes: &[u8]) -> Result<Message, CodecError> {
    Message::from_bytes(bytes, Mode::VALIDATION)
}

pub fn encode_signed_transaction(
    payload: &SignedTransactionPayload,
) -> Result<Vec<u8>, CodecError> {
    payload.encode(Mode::VALIDATION)
}

pub fn decode_signed_transaction(bytes: &[u8]) -> Result<SignedTransactionPayload, CodecError> {
    SignedTransactionPayload::from_bytes(bytes, Mode::VALIDATION)
}

/// The bytes an unlock block signature commits to: the transaction's
/// validated encoding.
pub fn transaction_essence(tx: &Transaction) -> Result<Vec<u8>, CodecError> {
    tx.encode(Mode::VALIDATION)
}
