use serde::{Deserialize, Serialize};

use crate::input::Input;
use crate::output::Output;
use crate::payload::DataPayload;
use crate::TRANSACTION_ID_LENGTH;

pub type TransactionId = [u8; TRANSACTION_ID_LENGTH];

/// The unsigned part of a transaction, also called its essence.
///
/// Inputs and outputs are expected in the lexical order of their encoded
/// bytes. Encoding checks the order; `tangle_codec::sort_lexically` puts a
/// list into it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<DataPayload>,
}

impl UnsignedTransaction {
    pub const KIND: u8 = 0;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transaction {
    Unsigned(UnsignedTransaction),
}

impl Transaction {
    pub fn kind(&self) -> u8 {
        match self {
            Transaction::Unsigned(_) => UnsignedTransaction::KIND,
        }
    }

    pub fn inputs(&self) -> &[Input] {
        match self {
            Transaction::Unsigned(tx) => &tx.inputs,
        }
    }

    pub fn outputs(&self) -> &[Output] {
        match self {
            Transaction::Unsigned(tx) => &tx.outputs,
        }
    }
}

impl From<UnsignedTransaction> for Transaction {
    fn from(tx: UnsignedTransaction) -> Self {
        Transaction::Unsigned(tx)
    }
}
