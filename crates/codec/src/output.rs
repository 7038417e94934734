use tangle_types::{Address, Output, SigLockedSingleDeposit};

use crate::address::ED25519_ADDRESS_SERIALIZED_SIZE;
use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{ensure_min_len, read_type, read_u64_le, write_u64_le, write_u8, U64_SIZE};
use crate::serializable::{decode_object, Selector, Serializable, Variant};
use crate::validation::check_deposit_amount;

/// output type + smallest address + amount
pub const SIG_LOCKED_SINGLE_DEPOSIT_MIN_SIZE: usize = 1 + ED25519_ADDRESS_SERIALIZED_SIZE + U64_SIZE;

impl Selector for Output {
    const FAMILY: Family = Family::Output;

    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError> {
        match discriminator {
            SigLockedSingleDeposit::KIND => Ok(Variant::of::<SigLockedSingleDeposit>()),
            other => Err(Self::unknown(other)),
        }
    }
}

impl Serializable for Output {
    const NAME: &'static str = "Output";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        decode_object(data, mode)
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        match self {
            Output::SigLockedSingleDeposit(dep) => dep.encode_into(out, mode),
        }
    }
}

impl Serializable for SigLockedSingleDeposit {
    const NAME: &'static str = "SigLockedSingleDeposit";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(
            data,
            SIG_LOCKED_SINGLE_DEPOSIT_MIN_SIZE,
            "signature locked single deposit",
        )?;
        let mut input = data;
        read_type(
            &mut input,
            SigLockedSingleDeposit::KIND,
            "signature locked single deposit",
        )?;

        let (address, addr_bytes_read) = Address::decode(input, mode)?;
        input = &input[addr_bytes_read..];

        let amount = read_u64_le(&mut input, "deposit amount")?;
        if mode.validates() {
            check_deposit_amount(None, amount)?;
        }

        Ok((
            SigLockedSingleDeposit { address, amount },
            1 + addr_bytes_read + U64_SIZE,
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        if mode.validates() {
            check_deposit_amount(None, self.amount)?;
        }
        write_u8(out, SigLockedSingleDeposit::KIND);
        self.address.encode_into(out, mode)?;
        write_u64_le(out, self.amount);
        Ok(())
    }
}
