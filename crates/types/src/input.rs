use serde::{Deserialize, Serialize};

use crate::serde_hex;
use crate::transaction::TransactionId;

/// References an unspent output by the id of the transaction which created it
/// and the index of the output within that transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtxoInput {
    #[serde(with = "serde_hex")]
    pub transaction_id: TransactionId,
    pub transaction_output_index: u16,
}

impl UtxoInput {
    pub const KIND: u8 = 0;

    pub fn new(transaction_id: TransactionId, transaction_output_index: u16) -> Self {
        Self {
            transaction_id,
            transaction_output_index,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    Utxo(UtxoInput),
}

impl Input {
    pub fn kind(&self) -> u8 {
        match self {
            Input::Utxo(_) => UtxoInput::KIND,
        }
    }
}

impl From<UtxoInput> for Input {
    fn from(input: UtxoInput) -> Self {
        Input::Utxo(input)
    }
}
