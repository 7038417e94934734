use tangle_types::{Message, Payload, MESSAGE_ID_LENGTH, MESSAGE_VERSION};
use tracing::debug;

use crate::error::CodecError;
use crate::mode::Mode;
use crate::primitives::{
    ensure_min_len, read_array, read_u32_le, read_u64_le, read_u8, take, write_bytes,
    write_u32_le, write_u64_le, write_u8, U32_SIZE, U64_SIZE,
};
use crate::serializable::Serializable;

/// version + parents + payload length + nonce
pub const MESSAGE_MIN_SIZE: usize = 1 + 2 * MESSAGE_ID_LENGTH + U32_SIZE + U64_SIZE;

impl Serializable for Message {
    const NAME: &'static str = "Message";

    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError> {
        ensure_min_len(data, MESSAGE_MIN_SIZE, "message")?;
        let mut input = data;

        let version = read_u8(&mut input, "message version")?;
        if version != MESSAGE_VERSION {
            return Err(CodecError::TypeMismatch {
                what: "message version",
                expected: MESSAGE_VERSION,
                actual: version,
            });
        }

        let parent1 = read_array(&mut input, "message parent1")?;
        let parent2 = read_array(&mut input, "message parent2")?;

        let declared = read_u32_le(&mut input, "message payload length")?;
        let payload = if declared == 0 {
            None
        } else {
            let bounded = take(&mut input, declared as usize, "message payload")?;
            let (payload, consumed) = Payload::decode(bounded, mode).map_err(|err| {
                debug!(%err, "rejecting message payload");
                err
            })?;
            if consumed != bounded.len() {
                return Err(CodecError::LengthMismatch {
                    what: "message payload",
                    declared: u64::from(declared),
                    actual: consumed as u64,
                });
            }
            Some(payload)
        };

        let nonce = read_u64_le(&mut input, "message nonce")?;

        Ok((
            Message {
                parent1,
                parent2,
                payload,
                nonce,
            },
            data.len() - input.len(),
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError> {
        let payload = match &self.payload {
            Some(payload) => payload.encode(mode)?,
            None => Vec::new(),
        };
        let payload_len = u32::try_from(payload.len()).map_err(|_| CodecError::LengthOverflow {
            what: "message payload",
        })?;

        write_u8(out, MESSAGE_VERSION);
        write_bytes(out, &self.parent1);
        write_bytes(out, &self.parent2);
        write_u32_le(out, payload_len);
        write_bytes(out, &payload);
        write_u64_le(out, self.nonce);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tangle_types::{DataPayload, MilestonePayload};

    fn message(payload: Option<Payload>) -> Message {
        Message {
            parent1: [0x55; 32],
            parent2: [0x66; 32],
            payload,
            nonce: 42,
        }
    }

    #[test]
    fn message_without_payload() {
        let msg = message(None);
        let bytes = msg.encode(Mode::default()).unwrap();
        assert_eq!(bytes.len(), MESSAGE_MIN_SIZE);
        assert_eq!(&bytes[65..69], &[0, 0, 0, 0]);
        assert_eq!(Message::from_bytes(&bytes, Mode::default()).unwrap(), msg);
    }

    #[test]
    fn message_with_milestone() {
        let msg = message(Some(
            MilestonePayload {
                index: 1,
                timestamp: 2,
                inclusion_merkle_proof: [3; 64],
                signature: [4; 64],
            }
            .into(),
        ));
        let bytes = msg.encode(Mode::default()).unwrap();
        let (decoded, n) = Message::decode(&bytes, Mode::default()).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(n, bytes.len());
    }

    #[test]
    fn wrong_version_rejected() {
        let mut bytes = message(None).encode(Mode::default()).unwrap();
        bytes[0] = 2;
        let err = Message::decode(&bytes, Mode::empty()).unwrap_err();
        assert_eq!(
            err,
            CodecError::TypeMismatch {
                what: "message version",
                expected: MESSAGE_VERSION,
                actual: 2
            }
        );
    }

    #[test]
    fn payload_length_must_match() {
        let msg = message(Some(DataPayload::new(vec![1, 2, 3]).into()));
        let mut bytes = msg.encode(Mode::default()).unwrap();
        // declare one byte more than the payload occupies; the nonce's
        // first byte is pulled into the slot
        bytes[65] += 1;
        let err = Message::decode(&bytes, Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn trailing_bytes_rejected_by_from_bytes() {
        let mut bytes = message(None).encode(Mode::default()).unwrap();
        bytes.push(0);
        let err = Message::from_bytes(&bytes, Mode::default()).unwrap_err();
        assert_eq!(
            err,
            CodecError::TrailingBytes {
                what: "Message",
                remaining: 1
            }
        );
    }

    #[test]
    fn truncated_message() {
        let msg = message(Some(DataPayload::new(vec![7; 10]).into()));
        let bytes = msg.encode(Mode::default()).unwrap();
        for len in [0, 10, MESSAGE_MIN_SIZE - 1, bytes.len() - 1] {
            let err = Message::decode(&bytes[..len], Mode::default()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InsufficientData, "length {len}");
        }
    }
}
