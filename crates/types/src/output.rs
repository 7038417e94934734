use serde::{Deserialize, Serialize};

use crate::address::Address;

/// An output which deposits `amount` onto a single address and is unlocked
/// by a signature of that address' owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SigLockedSingleDeposit {
    pub address: Address,
    pub amount: u64,
}

impl SigLockedSingleDeposit {
    pub const KIND: u8 = 0;

    pub fn new(address: impl Into<Address>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    SigLockedSingleDeposit(SigLockedSingleDeposit),
}

impl Output {
    pub fn kind(&self) -> u8 {
        match self {
            Output::SigLockedSingleDeposit(_) => SigLockedSingleDeposit::KIND,
        }
    }

    pub fn address(&self) -> &Address {
        match self {
            Output::SigLockedSingleDeposit(dep) => &dep.address,
        }
    }

    pub fn amount(&self) -> u64 {
        match self {
            Output::SigLockedSingleDeposit(dep) => dep.amount,
        }
    }
}

impl From<SigLockedSingleDeposit> for Output {
    fn from(dep: SigLockedSingleDeposit) -> Self {
        Output::SigLockedSingleDeposit(dep)
    }
}
