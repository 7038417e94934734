use tangle_types::{
    DataPayload, Input, Output, Payload, Transaction, UnsignedTransaction, MAX_INPUTS_COUNT,
    MAX_OUTPUTS_COUNT, MIN_INPUTS_COUNT, MIN_OUTPUTS_COUNT,
};
use tracing::debug;

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{ensure_min_len, read_type, read_varint, take, write_u8, write_varint};
use crate::serializable::{
    decode_array, decode_object, encode_array, ArrayRules, Selector, Serializable, Variant,
};
use crate::validation::{validate_inputs, validate_outputs};

/// transaction type + inputs count + outputs count + payload length
pub const UNSIGNED_TRANSACTION_MIN_SIZE: usize = 4;

pub const INPUTS_ARRAY_RULES: ArrayRules = ArrayRules {
    what: "inputs",
    min: MIN_INPUTS_COUNT,
    max: MAX_INPUTS_COUNT,
    lexical_order: true,
};

pub const OUTPUTS_ARRAY_RULES: ArrayRules = ArrayRules {
    what: "outputs",
    min: MIN_OUTPUTS_COUNT,
    max: MAX_OUTPUTS_COUNT,
    lexical_order: true,
};

impl Selector for Transaction {
    const FAMILY: Family = Family::Transaction;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            UnsignedTransaction::KIND => Ok(Variant::of::<UnsignedTransaction>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for Transaction {
    const NAME: &'static str = "Transaction";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            Transaction::Unsigned(tx) => tx.encode_into(out, mode),
        }
    }
}

fn rejected(stage: &'static str) -> impl FnOnce(CodecError) -> CodecError {
    move |err| {
        debug!(stage, %err, "rejecting transaction");
        err
    }
}

impl Serializable for UnsignedTransaction {
    const NAME: &'static str = "UnsignedTransaction";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, UNSIGNED_TRANSACTION_MIN_SIZE, "unsigned transaction")?;
        let mut input = data;
        read_type(&mut input, UnsignedTransaction::KIND, "unsigned transaction")?;

        let (inputs, n) = decode_array::<Input>(input, mode, Some(&INPUTS_ARRAY_RULES))
            .map_err(rejected("inputs"))?;
        input = &input[n..];
        if mode.validates() {
            validate_inputs(&inputs).map_err(rejected("input validation"))?;
        }

        let (outputs, n) = decode_array::<Output>(input, mode, Some(&OUTPUTS_ARRAY_RULES))
            .map_err(rejected("outputs"))?;
        input = &input[n..];
        if mode.validates() {
            validate_outputs(&outputs).map_err(rejected("output validation"))?;
        }

        let payload = decode_embedded_payload(&mut input, mode).map_err(rejected("payload"))?;

        Ok((
            UnsignedTransaction {
                inputs,
                outputs,
                payload,
            },
            data.len() - input.len(),
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        if mode.validates() {
            validate_inputs(&self.inputs)?;
            validate_outputs(&self.outputs)?;
        }

        let mut body = Vec::new();
        write_u8(&mut body, UnsignedTransaction::KIND);
        encode_array(&mut body, &self.inputs, mode, Some(&INPUTS_ARRAY_RULES))?;
        encode_array(&mut body, &self.outputs, mode, Some(&OUTPUTS_ARRAY_RULES))?;

        match &self.payload {
            Some(payload) => {
                let bytes = payload.encode(mode)?;
                write_varint(&mut body, bytes.len() as u64);
                body.extend_from_slice(&bytes);
            }
            None => write_varint(&mut body, 0),
        }

        out.extend_from_slice(&body);
        Ok(())
    }
}

/// Reads the length-prefixed payload slot. A zero length means no payload;
/// otherwise the payload must be a data payload filling exactly the
/// declared length.
fn decode_embedded_payload(
    input: &mut &[u8],
    mode: Mode,
) -> Result<Option<DataPayload>, CodecError> {
    let declared = read_varint(input, "transaction payload length")?;
    if declared == 0 {
        return Ok(None);
    }
    if declared > input.len() as u64 {
        return Err(CodecError::InsufficientData {
            what: "transaction payload",
            need: usize::try_from(declared).unwrap_or(usize::MAX),
            have: input.len(),
        });
    }
    let bounded = take(input, declared as usize, "transaction payload")?;

    let discriminator = bounded[0];
    Payload::select(discriminator)?;
    if discriminator != DataPayload::KIND {
        return Err(CodecError::TypeMismatch {
            what: "transaction payload",
            expected: DataPayload::KIND,
            actual: discriminator,
        });
    }

    let (payload, consumed) = DataPayload::decode(bounded, mode)
        .map_err(|err| err.in_variant(DataPayload::NAME))?;
    if consumed != bounded.len() {
        return Err(CodecError::LengthMismatch {
            what: "transaction payload",
            declared,
            actual: consumed as u64,
        });
    }
    Ok(Some(payload))
}
