use serde::{Deserialize, Serialize};

use crate::payload::Payload;
use crate::serde_hex;
use crate::MESSAGE_ID_LENGTH;

pub type MessageId = [u8; MESSAGE_ID_LENGTH];

/// Top-level envelope: references two parent messages and optionally
/// carries a payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "parent_1", with = "serde_hex")]
    pub parent1: MessageId,
    #[serde(rename = "parent_2", with = "serde_hex")]
    pub parent2: MessageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    pub nonce: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Address, DataPayload, Ed25519Address, Ed25519Signature, Input, Output,
        SigLockedSingleDeposit, SignatureUnlockBlock, SignedTransactionPayload, Transaction,
        UnlockBlock, UnsignedTransaction, UtxoInput,
    };

    fn sample_message() -> Message {
        let tx = UnsignedTransaction {
            inputs: vec![Input::Utxo(UtxoInput::new([0x11; 32], 3))],
            outputs: vec![Output::SigLockedSingleDeposit(SigLockedSingleDeposit::new(
                Ed25519Address([0x22; 32]),
                1337,
            ))],
            payload: Some(DataPayload::new(b"hello".to_vec())),
        };
        let sig = Ed25519Signature {
            public_key: [0x33; 32],
            signature: [0x44; 64],
        };
        Message {
            parent1: [0x55; 32],
            parent2: [0x66; 32],
            payload: Some(Payload::SignedTransaction(SignedTransactionPayload {
                transaction: Transaction::Unsigned(tx),
                unlock_blocks: vec![UnlockBlock::Signature(SignatureUnlockBlock::new(sig))],
            })),
            nonce: 42,
        }
    }

    #[test]
    fn json_roundtrip() {
        let msg = sample_message();
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn byte_fields_render_as_hex() {
        let msg = sample_message();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["parent_1"], "55".repeat(32));
        assert_eq!(value["parent_2"], "66".repeat(32));
        assert!(value.get("parent1").is_none());
        assert_eq!(value["nonce"], 42);

        let input = &value["payload"]["signed_transaction"]["transaction"]["unsigned"]["inputs"][0];
        assert_eq!(input["utxo"]["transaction_id"], "11".repeat(32));
        assert_eq!(input["utxo"]["transaction_output_index"], 3);
    }

    #[test]
    fn wrong_length_hex_is_rejected() {
        let json = r#"{"ed25519":"0011"}"#;
        assert!(serde_json::from_str::<Address>(json).is_err());
    }

    #[test]
    fn absent_payload_is_omitted() {
        let msg = Message {
            payload: None,
            ..sample_message()
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value.get("payload").is_none());
    }
}
