use tangle_types::{ReferenceUnlockBlock, Signature, SignatureUnlockBlock, UnlockBlock};

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{ensure_min_len, read_type, read_u16_le, write_u16_le, write_u8, U16_SIZE};
use crate::serializable::{decode_object, Selector, Serializable, Variant, MIN_OBJECT_SIZE};

/// block type + the smallest possible polymorphic signature
pub const SIGNATURE_UNLOCK_BLOCK_MIN_SIZE: usize = 1 + MIN_OBJECT_SIZE;
pub const REFERENCE_UNLOCK_BLOCK_SIZE: usize = 1 + U16_SIZE;

impl Selector for UnlockBlock {
    const FAMILY: Family = Family::UnlockBlock;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            SignatureUnlockBlock::KIND => Ok(Variant::of::<SignatureUnlockBlock>()),
            ReferenceUnlockBlock::KIND => Ok(Variant::of::<ReferenceUnlockBlock>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for UnlockBlock {
    const NAME: &'static str = "UnlockBlock";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            UnlockBlock::Signature(block) => block.encode_into(out, mode),
            UnlockBlock::Reference(block) => block.encode_into(out, mode),
        }
    }
}

impl Serializable for SignatureUnlockBlock {
    const NAME: &'static str = "SignatureUnlockBlock";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, SIGNATURE_UNLOCK_BLOCK_MIN_SIZE, "signature unlock block")?;
        let mut input = data;
        read_type(&mut input, SignatureUnlockBlock::KIND, "signature unlock block")?;
        let (signature, sig_bytes_read) = Signature::decode(input, mode)?;
        Ok((SignatureUnlockBlock { signature }, 1 + sig_bytes_read))
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        let mut sig = Vec::new();
        self.signature.encode_into(&mut sig, mode)?;
        write_u8(out, SignatureUnlockBlock::KIND);
        out.extend_from_slice(&sig);
        Ok(())
    }
}

impl Serializable for ReferenceUnlockBlock {
    const NAME: &'static str = "ReferenceUnlockBlock";

    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, REFERENCE_UNLOCK_BLOCK_SIZE, "reference unlock block")?;
        let mut input = data;
        read_type(&mut input, ReferenceUnlockBlock::KIND, "reference unlock block")?;
        let reference = read_u16_le(&mut input, "unlock block reference")?;
        Ok((ReferenceUnlockBlock { reference }, REFERENCE_UNLOCK_BLOCK_SIZE))
    }

    fn encode_into(&self, out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        write_u8(out, ReferenceUnlockBlock::KIND);
        write_u16_le(out, self.reference);
        Ok(())
    }
}
