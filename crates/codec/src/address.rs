use tangle_types::{Address, Ed25519Address, WotsAddress};

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{ensure_min_len, read_array, read_type, write_bytes, write_u8};
use crate::serializable::{decode_object, Selector, Serializable, Variant};

pub const WOTS_ADDRESS_SERIALIZED_SIZE: usize = 1 + WotsAddress::LENGTH;
pub const ED25519_ADDRESS_SERIALIZED_SIZE: usize = 1 + Ed25519Address::LENGTH;

impl Selector for Address {
    const FAMILY: Family = Family::Address;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            WotsAddress::KIND => Ok(Variant::of::<WotsAddress>()),
            Ed25519Address::KIND => Ok(Variant::of::<Ed25519Address>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for Address {
    const NAME: &'static str = "Address";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            Address::Wots(addr) => addr.encode_into(out, mode),
            Address::Ed25519(addr) => addr.encode_into(out, mode),
        }
    }
}

impl Serializable for WotsAddress {
    const NAME: &'static str = "WotsAddress";

    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, WOTS_ADDRESS_SERIALIZED_SIZE, "WOTS address")?;
        let mut input = data;
        read_type(&mut input, WotsAddress::KIND, "WOTS address")?;
        let addr = read_array(&mut input, "WOTS address")?;
        Ok((WotsAddress(addr), WOTS_ADDRESS_SERIALIZED_SIZE))
    }

    fn encode_into(&self, out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        write_u8(out, WotsAddress::KIND);
        write_bytes(out, &self.0);
        Ok(())
    }
}

impl Serializable for Ed25519Address {
    const NAME: &'static str = "Ed25519Address";

    fn decode(data: &[u8], _mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, ED25519_ADDRESS_SERIALIZED_SIZE, "Ed25519 address")?;
        let mut input = data;
        read_type(&mut input, Ed25519Address::KIND, "Ed25519 address")?;
        let addr = read_array(&mut input, "Ed25519 address")?;
        Ok((Ed25519Address(addr), ED25519_ADDRESS_SERIALIZED_SIZE))
    }

    fn encode_into(&self, out: &mut Vec<u8>, _mode: Mode) -> Result<(), CodecError> {
        write_u8(out, Ed25519Address::KIND);
        write_bytes(out, &self.0);
        Ok(())
    }
}
