use tangle_types::{
    DataPayload, MilestonePayload, Payload, SignedTransactionPayload, Transaction, UnlockBlock,
};
use tracing::debug;

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{
    ensure_min_len, read_array, read_type, read_u32_le, read_u64_le, read_varint, take,
    write_bytes, write_u32_le, write_u64_le, write_u8, write_varint, U32_SIZE, U64_SIZE,
};
use crate::serializable::{
    decode_array, decode_object, encode_array, ArrayRules, Selector, Serializable, Variant,
    MIN_OBJECT_SIZE,
};
use crate::validation::validate_unlock_blocks;

/// payload type + transaction object + unlock block count
pub const SIGNED_TRANSACTION_PAYLOAD_MIN_SIZE: usize = 1 + MIN_OBJECT_SIZE + 1;

pub const MILESTONE_PAYLOAD_SIZE: usize = 1
    + U32_SIZE
    + U64_SIZE
    + MilestonePayload::INCLUSION_MERKLE_PROOF_LENGTH
    + MilestonePayload::SIGNATURE_LENGTH;

/// payload type + data length
pub const DATA_PAYLOAD_MIN_SIZE: usize = 2;

/// One unlock block per input, in input order.
fn unlock_block_rules(input_count: usize) -> ArrayRules {
    ArrayRules {
        what: "unlock blocks",
        min: input_count as u64,
        max: input_count as u64,
        lexical_order: false,
    }
}

impl Selector for Payload {
    const FAMILY: Family = Family::Payload;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            SignedTransactionPayload::KIND => Ok(Variant::of::<SignedTransactionPayload>()),
            MilestonePayload::KIND => Ok(Variant::of::<MilestonePayload>()),
            DataPayload::KIND => Ok(Variant::of::<DataPayload>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for Payload {
    const NAME: &'static str = "Payload";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            Payload::SignedTransaction(payload) => payload.encode_into(out, mode),
            Payload::Milestone(payload) => payload.encode_into(out, mode),
            Payload::Data(payload) => payload.encode_into(out, mode),
        }
    }
}

impl Serializable for SignedTransactionPayload {
    const NAME: &'static str = "SignedTransactionPayload";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(
            data,
            SIGNED_TRANSACTION_PAYLOAD_MIN_SIZE,
            "signed transaction payload",
        )?;
        let mut input = data;
        read_type(
            &mut input,
            SignedTransactionPayload::KIND,
            "signed transaction payload",
        )?;

        let (transaction, tx_bytes_read) = Transaction::decode(input, mode)?;
        input = &input[tx_bytes_read..];

        let input_count = transaction.inputs().len();
        let rules = unlock_block_rules(input_count);
        let (unlock_blocks, ub_bytes_read) =
            decode_array::<UnlockBlock>(input, mode, Some(&rules))?;
        if mode.validates() {
            validate_unlock_blocks(&unlock_blocks, input_count).map_err(|err| {
                debug!(stage = "unlock blocks", %err, "rejecting signed transaction");
                err
            })?;
        }

        Ok((
            SignedTransactionPayload {
                transaction,
                unlock_blocks,
            },
            1 + tx_bytes_read + ub_bytes_read,
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        let input_count = self.transaction.inputs().len();
        if mode.validates() {
            validate_unlock_blocks(&self.unlock_blocks, input_count)?;
        }

        let mut body = Vec::new();
        write_u8(&mut body, SignedTransactionPayload::KIND);
        self.transaction.encode_into(&mut body, mode)?;
        encode_array(
            &mut body,
            &self.unlock_blocks,
            mode,
            Some(&unlock_block_rules(input_count)),
        )?;
        out.extend_from_slice(&body);
        Ok(())
    }
}

impl Serializable for MilestonePayload {
    const NAME: &'static str = "MilestonePayload";

    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, MILESTONE_PAYLOAD_SIZE, "milestone payload")?;
        let mut input = data;
        read_type(&mut input, MilestonePayload::KIND, "milestone payload")?;
        let index = read_u32_le(&mut input, "milestone index")?;
        let timestamp = read_u64_le(&mut input, "milestone timestamp")?;
        let inclusion_merkle_proof = read_array(&mut input, "milestone inclusion merkle proof")?;
        let signature = read_array(&mut input, "milestone signature")?;
        Ok((
            MilestonePayload {
                index,
                timestamp,
                inclusion_merkle_proof,
                signature,
            },
            MILESTONE_PAYLOAD_SIZE,
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        write_u8(out, MilestonePayload::KIND);
        write_u32_le(out, self.index);
        write_u64_le(out, self.timestamp);
        write_bytes(out, &self.inclusion_merkle_proof);
        write_bytes(out, &self.signature);
        Ok(())
    }
}

impl Serializable for DataPayload {
    const NAME: &'static str = "DataPayload";

    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, DATA_PAYLOAD_MIN_SIZE, "data payload")?;
        let mut input = data;
        read_type(&mut input, DataPayload::KIND, "data payload")?;
        let len = read_varint(&mut input, "data payload length")?;
        if len > input.len() as u64 {
            return Err(CodecError::InsufficientData {
                what: "data payload bytes",
                need: usize::try_from(len).unwrap_or(usize::MAX),
                have: input.len(),
            });
        }
        let bytes = take(&mut input, len as usize, "data payload bytes")?;
        Ok((DataPayload::new(bytes), data.len() - input.len()))
    }

    fn encode_into(&self, out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        write_u8(out, DataPayload::KIND);
        write_varint(out, self.data.len() as u64);
        write_bytes(out, &self.data);
        Ok(())
    }
}
