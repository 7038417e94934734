use std::fs;
use std::path::Path;

use tangle_codec::{
    decode_message, decode_signed_transaction, encode_message, encode_signed_transaction,
};
use tangle_types::{
    Ed25519Address, Ed25519Signature, Input, Message, Output, Payload, SigLockedSingleDeposit,
    SignatureUnlockBlock, SignedTransactionPayload, UnlockBlock, UnsignedTransaction, UtxoInput,
};

fn write_or_compare(path: &Path, actual: &[u8]) {
    let update = std::env::var("UPDATE_VECTORS").ok().as_deref() == Some("1");

    if update {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create vectors dir");
        }
        fs::write(path, actual).expect("write vector file");
        return;
    }

    let expected = fs::read(path).unwrap_or_else(|_| {
        panic!("missing vector file: {path:?}. Run with UPDATE_VECTORS=1 to generate.")
    });

    assert_eq!(
        expected, actual,
        "golden vector mismatch for {path:?} (encoding drift?)"
    );
}

fn sample_signed_transaction() -> SignedTransactionPayload {
    let tx = UnsignedTransaction {
        inputs: vec![Input::Utxo(UtxoInput::new([0x11u8; 32], 0))],
        outputs: vec![Output::SigLockedSingleDeposit(SigLockedSingleDeposit::new(
            Ed25519Address([0x22u8; 32]),
            1337,
        ))],
        payload: None,
    };
    let sig = Ed25519Signature {
        public_key: [0x33u8; 32],
        signature: [0x44u8; 64],
    };

    SignedTransactionPayload {
        transaction: tx.into(),
        unlock_blocks: vec![UnlockBlock::Signature(SignatureUnlockBlock::new(sig))],
    }
}

fn sample_message() -> Message {
    Message {
        parent1: [0x55u8; 32],
        parent2: [0x66u8; 32],
        payload: Some(Payload::SignedTransaction(sample_signed_transaction())),
        nonce: 42,
    }
}

#[test]
fn golden_vectors_signed_transaction_and_message() {
    let signed = sample_signed_transaction();
    let msg = sample_message();

    // --- Encode ---
    let signed_bytes = encode_signed_transaction(&signed).expect("encode signed transaction");
    let msg_bytes = encode_message(&msg).expect("encode message");

    assert_eq!(signed_bytes.len(), 181);
    assert_eq!(msg_bytes.len(), 258);

    // --- Decode checks ---
    let decoded_signed = decode_signed_transaction(&signed_bytes).expect("decode signed");
    assert_eq!(decoded_signed, signed);

    let decoded_msg = decode_message(&msg_bytes).expect("decode message");
    assert_eq!(decoded_msg, msg);

    // the message embeds the signed transaction verbatim
    assert_eq!(&msg_bytes[69..69 + 181], &signed_bytes[..]);

    // --- Golden file paths (relative to crates/codec) ---
    let signed_path = Path::new("tests/vectors/signed_transaction.bin");
    let msg_path = Path::new("tests/vectors/message.bin");

    // --- Compare (or generate) ---
    write_or_compare(signed_path, &signed_bytes);
    write_or_compare(msg_path, &msg_bytes);
}
