use std::collections::{HashMap, HashSet};

use tangle_types::{
    Address, Ed25519Signature, Input, Output, Signature, TransactionId, UnlockBlock, TOKEN_SUPPLY,
};

use crate::error::{CodecError, SupplyRule};
use crate::input::check_output_index;

/// An output amount must be non-zero and must not exceed the total supply.
pub fn check_deposit_amount(index: Option<usize>, amount: u64) -> Result<(), CodecError> {
    let rule = if amount == 0 {
        SupplyRule::ZeroAmount
    } else if amount > TOKEN_SUPPLY {
        SupplyRule::ExceedsTotalSupply
    } else {
        return Ok(());
    };
    Err(CodecError::SupplyViolation {
        index,
        amount,
        rule,
    })
}

/// Checks output index bounds and that every input spends a distinct UTXO.
#[derive(Debug, Default)]
pub struct InputsValidation {
    refs: HashMap<(TransactionId, u16), usize>,
}

impl InputsValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, index: usize, input: &Input) -> Result<(), CodecError> {
        match input {
            Input::Utxo(utxo) => {
                check_output_index(utxo)?;
                let key = (utxo.transaction_id, utxo.transaction_output_index);
                if let Some(&previous) = self.refs.get(&key) {
                    return Err(CodecError::UniquenessViolation {
                        what: "input UTXO references",
                        index,
                        previous,
                    });
                }
                self.refs.insert(key, index);
            }
        }
        Ok(())
    }
}

/// Checks deposit amounts, their running sum against the total supply and
/// that every output deposits to a distinct address.
#[derive(Debug, Default)]
pub struct OutputsValidation {
    sum: u64,
    addresses: HashMap<Address, usize>,
}

impl OutputsValidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the amounts accepted so far.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    pub fn check(&mut self, index: usize, output: &Output) -> Result<(), CodecError> {
        let amount = output.amount();
        check_deposit_amount(Some(index), amount)?;

        let sum = self
            .sum
            .checked_add(amount)
            .filter(|sum| *sum <= TOKEN_SUPPLY)
            .ok_or(CodecError::SupplyViolation {
                index: Some(index),
                amount,
                rule: SupplyRule::SumExceedsTotalSupply,
            })?;

        if let Some(&previous) = self.addresses.get(output.address()) {
            return Err(CodecError::UniquenessViolation {
                what: "output deposit addresses",
                index,
                previous,
            });
        }

        self.addresses.insert(*output.address(), index);
        self.sum = sum;
        Ok(())
    }
}

/// Checks that signature unlock blocks carry distinct public keys and that
/// reference unlock blocks point back at an earlier signature unlock block.
#[derive(Debug, Default)]
pub struct UnlockBlocksValidation {
    public_keys: HashMap<[u8; Ed25519Signature::PUBLIC_KEY_LENGTH], usize>,
    signature_blocks: HashSet<usize>,
}

impl UnlockBlocksValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, index: usize, block: &UnlockBlock) -> Result<(), CodecError> {
        match block {
            UnlockBlock::Signature(sig_block) => match &sig_block.signature {
                Signature::Ed25519(sig) => {
                    if let Some(&previous) = self.public_keys.get(&sig.public_key) {
                        return Err(CodecError::UniquenessViolation {
                            what: "signature unlock block public keys",
                            index,
                            previous,
                        });
                    }
                    self.public_keys.insert(sig.public_key, index);
                    self.signature_blocks.insert(index);
                }
                Signature::Wots(_) => {
                    return Err(CodecError::NotImplemented(
                        "WOTS signature unlock block validation",
                    ));
                }
            },
            UnlockBlock::Reference(ref_block) => {
                // only earlier blocks are in the set, which rules out
                // self and forward references
                if !self
                    .signature_blocks
                    .contains(&usize::from(ref_block.reference))
                {
                    return Err(CodecError::ReferentialIntegrityViolation {
                        index,
                        reference: ref_block.reference,
                    });
                }
            }
        }
        Ok(())
    }
}

pub fn validate_inputs(inputs: &[Input]) -> Result<(), CodecError> {
    let mut validation = InputsValidation::new();
    inputs
        .iter()
        .enumerate()
        .try_for_each(|(i, input)| validation.check(i, input))
}

pub fn validate_outputs(outputs: &[Output]) -> Result<(), CodecError> {
    let mut validation = OutputsValidation::new();
    outputs
        .iter()
        .enumerate()
        .try_for_each(|(i, output)| validation.check(i, output))
}

/// Validates unlock blocks against the number of inputs they unlock.
pub fn validate_unlock_blocks(
    unlock_blocks: &[UnlockBlock],
    input_count: usize,
) -> Result<(), CodecError> {
    if unlock_blocks.len() != input_count {
        return Err(CodecError::BoundsViolation {
            what: "unlock block count",
            min: input_count as u64,
            max: input_count as u64,
            actual: unlock_blocks.len() as u64,
        });
    }
    let mut validation = UnlockBlocksValidation::new();
    unlock_blocks
        .iter()
        .enumerate()
        .try_for_each(|(i, block)| validation.check(i, block))
}
