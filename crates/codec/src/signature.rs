use tangle_types::{Ed25519Signature, Signature, WotsSignature};

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{ensure_min_len, read_array, read_type, write_bytes, write_u8};
use crate::serializable::{decode_object, Selector, Serializable, Variant};

pub const ED25519_SIGNATURE_SERIALIZED_SIZE: usize =
    1 + Ed25519Signature::PUBLIC_KEY_LENGTH + Ed25519Signature::SIGNATURE_LENGTH;

impl Selector for Signature {
    const FAMILY: Family = Family::Signature;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            WotsSignature::KIND => Ok(Variant::of::<WotsSignature>()),
            Ed25519Signature::KIND => Ok(Variant::of::<Ed25519Signature>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for Signature {
    const NAME: &'static str = "Signature";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            Signature::Wots(sig) => sig.encode_into(out, mode),
            Signature::Ed25519(sig) => sig.encode_into(out, mode),
        }
    }
}

impl Serializable for WotsSignature {
    const NAME: &'static str = "WotsSignature";

    /// Validates the discriminator, then reports the scheme as unsupported.
    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        let mut input = data;
        read_type(&mut input, WotsSignature::KIND, "WOTS signature")?;
        Err(CodecError::NotImplemented("WOTS signature decoding"))
    }

    fn encode_into(&self, _out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        Err(CodecError::NotImplemented("WOTS signature encoding"))
    }
}

impl Serializable for Ed25519Signature {
    const NAME: &'static str = "Ed25519Signature";

    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, ED25519_SIGNATURE_SERIALIZED_SIZE, "Ed25519 signature")?;
        let mut input = data;
        read_type(&mut input, Ed25519Signature::KIND, "Ed25519 signature")?;
        let public_key = read_array(&mut input, "Ed25519 public key")?;
        let signature = read_array(&mut input, "Ed25519 signature")?;
        Ok((
            Ed25519Signature {
                public_key,
                signature,
            },
            ED25519_SIGNATURE_SERIALIZED_SIZE,
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        write_u8(out, Ed25519Signature::KIND);
        write_bytes(out, &self.public_key);
        write_bytes(out, &self.signature);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ed25519_bytes() -> Vec<u8> {
        let mut b = vec![Ed25519Signature::KIND];
        b.extend_from_slice(&[0x33; 32]);
        b.extend_from_slice(&[0x44; 64]);
        b
    }

    #[test]
    fn ed25519_decode_encode() {
        let data = ed25519_bytes();
        let (sig, n) = Signature::decode(&data, Mode::default()).unwrap();
        assert_eq!(n, ED25519_SIGNATURE_SERIALIZED_SIZE);
        let Signature::Ed25519(ed) = sig else {
            panic!("expected Ed25519 signature");
        };
        assert_eq!(ed.public_key, [0x33; 32]);
        assert_eq!(ed.signature, [0x44; 64]);
        assert_eq!(sig.encode(Mode::default()).unwrap(), data);
    }

    #[test]
    fn wots_is_not_implemented() {
        let err = Signature::decode(&[WotsSignature::KIND, 0], Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);

        let err = Signature::Wots(WotsSignature)
            .encode(Mode::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn unknown_signature_type() {
        let err = Signature::decode(&[7, 0, 0], Mode::default()).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownType {
                family: Family::Signature,
                discriminator: 7
            }
        );
    }

    #[test]
    fn truncated_signature() {
        let data = ed25519_bytes();
        let err = Signature::decode(&data[..50], Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
