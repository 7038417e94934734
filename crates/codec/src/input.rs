use tangle_types::{
    Input, UtxoInput, REF_UTXO_INDEX_MAX, REF_UTXO_INDEX_MIN, TRANSACTION_ID_LENGTH,
};

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{
    ensure_min_len, read_array, read_type, read_u16_le, write_bytes, write_u16_le, write_u8,
    U16_SIZE,
};
use crate::serializable::{decode_object, Selector, Serializable, Variant};

/// input type + transaction id + output index
pub const UTXO_INPUT_SIZE: usize = 1 + TRANSACTION_ID_LENGTH + U16_SIZE;

impl Selector for Input {
    const FAMILY: Family = Family::Input;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            UtxoInput::KIND => Ok(Variant::of::<UtxoInput>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for Input {
    const NAME: &'static str = "Input";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            Input::Utxo(input) => input.encode_into(out, mode),
        }
    }
}

impl Serializable for UtxoInput {
    const NAME: &'static str = "UtxoInput";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, UTXO_INPUT_SIZE, "UTXO input")?;
        let mut input = data;
        read_type(&mut input, UtxoInput::KIND, "UTXO input")?;
        let transaction_id = read_array(&mut input, "UTXO input transaction id")?;
        let transaction_output_index = read_u16_le(&mut input, "UTXO input output index")?;

        let utxo = UtxoInput {
            transaction_id,
            transaction_output_index,
        };
        if mode.validates() {
            check_output_index(&utxo)?;
        }
        Ok((utxo, UTXO_INPUT_SIZE))
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        if mode.validates() {
            check_output_index(self)?;
        }
        write_u8(out, UtxoInput::KIND);
        write_bytes(out, &self.transaction_id);
        write_u16_le(out, self.transaction_output_index);
        Ok(())
    }
}

/// The referenced output index must lie within
/// `REF_UTXO_INDEX_MIN..=REF_UTXO_INDEX_MAX`.
pub fn check_output_index(input: &UtxoInput) -> Result<(), CodecError> {
    let index = input.transaction_output_index;
    if !(REF_UTXO_INDEX_MIN..=REF_UTXO_INDEX_MAX).contains(&index) {
        return Err(CodecError::BoundsViolation {
            what: "referenced UTXO output index",
            min: u64::from(REF_UTXO_INDEX_MIN),
            max: u64::from(REF_UTXO_INDEX_MAX),
            actual: u64::from(index),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn utxo_bytes(id: u8, index: u16) -> Vec<u8> {
        let mut b = vec![UtxoInput::KIND];
        b.extend_from_slice(&[id; 32]);
        b.extend_from_slice(&index.to_le_bytes());
        b
    }

    #[test]
    fn decode_ok() {
        let data = utxo_bytes(0x11, 126);
        let (input, n) = Input::decode(&data, Mode::default()).unwrap();
        assert_eq!(input, Input::Utxo(UtxoInput::new([0x11; 32], 126)));
        assert_eq!(n, UTXO_INPUT_SIZE);
    }

    #[test]
    fn encode_ok() {
        let input = Input::Utxo(UtxoInput::new([0x22; 32], 7));
        assert_eq!(input.encode(Mode::default()).unwrap(), utxo_bytes(0x22, 7));
    }

    #[test]
    fn output_index_out_of_range() {
        let data = utxo_bytes(0x11, 127);
        let err = Input::decode(&data, Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BoundsViolation);

        let input = UtxoInput::new([0x11; 32], 127);
        assert_eq!(
            input.encode(Mode::default()).unwrap_err().kind(),
            ErrorKind::BoundsViolation
        );

        // trusted path does not range-check
        let (decoded, _) = Input::decode(&data, Mode::empty()).unwrap();
        assert_eq!(decoded, Input::Utxo(input));
    }

    #[test]
    fn truncated_input_is_insufficient_data() {
        let data = utxo_bytes(0x11, 0);
        let err = Input::decode(&data[..data.len() - 1], Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn unknown_input_type() {
        let mut data = utxo_bytes(0x11, 0);
        data[0] = 1;
        let err = Input::decode(&data, Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
    }
}
