use blake3::Hasher;
use ed25519_dalek::Signer;
use ed25519_dalek::{Signature as DalekSignature, SigningKey, VerifyingKey};
use rand_core::CryptoRngCore;

use tangle_codec::{
    encode_message, encode_signed_transaction, transaction_essence, validate_unlock_blocks,
    CodecError,
};
use tangle_types::{
    Ed25519Address, Ed25519Signature, Message, MessageId, Signature, SignedTransactionPayload,
    Transaction, TransactionId, UnlockBlock,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid Ed25519 public key")]
    InvalidPublicKey,
    #[error("signature of unlock block {index} does not verify against the transaction essence")]
    InvalidSignature { index: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub fn generate_signing_key<R: CryptoRngCore>(rng: &mut R) -> SigningKey {
    SigningKey::generate(rng)
}

/// Derive the Ed25519 address of a public key:
/// address = blake3(pubkey_bytes)
pub fn address_from_pubkey(pk: &VerifyingKey) -> Ed25519Address {
    let mut hasher = Hasher::new();
    hasher.update(pk.as_bytes());
    Ed25519Address(*hasher.finalize().as_bytes())
}

pub fn sign_bytes(sk: &SigningKey, msg: &[u8]) -> [u8; Ed25519Signature::SIGNATURE_LENGTH] {
    let sig: DalekSignature = sk.sign(msg);
    sig.to_bytes()
}

pub fn verify_bytes(
    pk: &VerifyingKey,
    msg: &[u8],
    sig: &[u8; Ed25519Signature::SIGNATURE_LENGTH],
) -> bool {
    let sig = DalekSignature::from_bytes(sig);
    pk.verify_strict(msg, &sig).is_ok()
}

/// Parse a VerifyingKey from raw 32-byte public key bytes.
pub fn pubkey_from_bytes(
    bytes: &[u8; Ed25519Signature::PUBLIC_KEY_LENGTH],
) -> Result<VerifyingKey, CryptoError> {
    VerifyingKey::from_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)
}

/// Signs the transaction essence. The transaction must pass validation,
/// otherwise there is no canonical essence to commit to.
pub fn sign_essence(sk: &SigningKey, tx: &Transaction) -> Result<Ed25519Signature, CryptoError> {
    let essence = transaction_essence(tx)?;
    Ok(Ed25519Signature {
        public_key: sk.verifying_key().to_bytes(),
        signature: sign_bytes(sk, &essence),
    })
}

/// Checks unlock block structure, then verifies every signature unlock
/// block against the essence. Reference blocks reuse the signature they
/// point at and need no separate check.
pub fn verify_unlock_blocks(payload: &SignedTransactionPayload) -> Result<(), CryptoError> {
    validate_unlock_blocks(&payload.unlock_blocks, payload.transaction.inputs().len())?;
    let essence = transaction_essence(&payload.transaction)?;

    for (index, block) in payload.unlock_blocks.iter().enumerate() {
        let UnlockBlock::Signature(sig_block) = block else {
            continue;
        };
        let Signature::Ed25519(sig) = &sig_block.signature else {
            return Err(CodecError::NotImplemented("WOTS signature verification").into());
        };
        let pk = pubkey_from_bytes(&sig.public_key)?;
        if !verify_bytes(&pk, &essence, &sig.signature) {
            return Err(CryptoError::InvalidSignature { index });
        }
    }
    Ok(())
}

/// transaction id = blake3(encoded signed transaction payload)
pub fn transaction_id(payload: &SignedTransactionPayload) -> Result<TransactionId, CryptoError> {
    let bytes = encode_signed_transaction(payload)?;
    Ok(*blake3::hash(&bytes).as_bytes())
}

/// message id = blake3(encoded message)
pub fn message_id(msg: &Message) -> Result<MessageId, CryptoError> {
    let bytes = encode_message(msg)?;
    Ok(*blake3::hash(&bytes).as_bytes())
}
