use std::cmp::Ordering;

use tracing::trace;

use crate::error::{CodecError, Family};
use crate::mode::Mode;
use crate::primitives::{read_varint, write_varint};

/// Something which knows how to encode itself into bytes and decode itself
/// from bytes.
pub trait Serializable: Sized {
    /// Name used to tag decode failures.
    const NAME: &'static str;

    /// Decodes an instance from the front of `data` and returns it together
    /// with the number of bytes consumed. Never reads past its own encoding.
    fn decode(data: &[u8], mode: Mode) -> Result<(Self, usize), CodecError>;

    /// Appends the encoding of `self` to `out`. Nothing is appended if an
    /// error is returned at the object's own level, but nested failures may
    /// leave a partial write behind; use [`Serializable::encode`] for an
    /// all-or-nothing result.
    fn encode_into(&self, out: &mut Vec<u8>, mode: Mode) -> Result<(), CodecError>;

    fn encode(&self, mode: Mode) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        self.encode_into(&mut out, mode)?;
        Ok(out)
    }

    /// Decodes `data` and requires that all of it was consumed.
    fn from_bytes(data: &[u8], mode: Mode) -> Result<Self, CodecError> {
        let (obj, consumed) = Self::decode(data, mode)?;
        if consumed != data.len() {
            return Err(CodecError::TrailingBytes {
                what: Self::NAME,
                remaining: data.len() - consumed,
            });
        }
        Ok(obj)
    }
}

pub type DecodeFn<T> = fn(&[u8], Mode) -> Result<(T, usize), CodecError>;

/// One entry of a family's dispatch table: the concrete variant's name and
/// its decoder, lifted into the family type.
pub struct Variant<T> {
    pub name: &'static str,
    pub decode: DecodeFn<T>,
}

impl<T> Variant<T> {
    /// Entry for the concrete type `V`, which converts into the family `T`.
    pub fn of<V>() -> Self
    where
        V: Serializable + Into<T>,
    {
        Self {
            name: V::NAME,
            decode: decode_into::<V, T>,
        }
    }
}

fn decode_into<V, T>(data: &[u8], mode: Mode) -> Result<(T, usize), CodecError>
where
    V: Serializable + Into<T>,
{
    V::decode(data, mode).map(|(v, n)| (v.into(), n))
}

/// A closed polymorphic family, resolving discriminators to variants.
pub trait Selector: Sized {
    const FAMILY: Family;

    /// Resolves `discriminator` or fails with `UnknownType`.
    fn select(discriminator: u8) -> Result<Variant<Self>, CodecError>;

    fn unknown(discriminator: u8) -> CodecError {
        CodecError::UnknownType {
            family: Self::FAMILY,
            discriminator,
        }
    }
}

/// Minimum bytes a polymorphic object occupies: its discriminator plus at
/// least one byte of body.
pub const MIN_OBJECT_SIZE: usize = 2;

/// Decodes one polymorphic object. The discriminator is only peeked at; the
/// selected variant re-reads it as part of its own framing.
pub fn decode_object<S: Selector>(data: &[u8], mode: Mode) -> Result<(S, usize), CodecError> {
    if data.len() < MIN_OBJECT_SIZE {
        return Err(CodecError::InsufficientData {
            what: "type denotation",
            need: MIN_OBJECT_SIZE,
            have: data.len(),
        });
    }
    let variant = S::select(data[0])?;
    trace!(family = %S::FAMILY, variant = variant.name, "decoding object");
    (variant.decode)(data, mode).map_err(|err| err.in_variant(variant.name))
}

/// Constraints on a decoded or encoded array. A bound of 0 leaves that side
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayRules {
    /// Names the array in every violation this rule set reports.
    pub what: &'static str,
    pub min: u64,
    pub max: u64,
    /// Whether the encoded elements must be strictly increasing byte-wise.
    pub lexical_order: bool,
}

impl ArrayRules {
    pub fn check_bounds(&self, count: u64) -> Result<(), CodecError> {
        let below = self.min != 0 && count < self.min;
        let above = self.max != 0 && count > self.max;
        if below || above {
            return Err(CodecError::BoundsViolation {
                what: self.what,
                min: self.min,
                max: self.max,
                actual: count,
            });
        }
        Ok(())
    }

    /// Checks that the element at `index` sorts strictly after the element
    /// at `index - 1`. Equal encodings are rejected as well.
    pub fn check_lexical_order(
        &self,
        index: usize,
        previous: &[u8],
        next: &[u8],
    ) -> Result<(), CodecError> {
        if previous.cmp(next) != Ordering::Less {
            return Err(CodecError::OrderViolation {
                what: self.what,
                index,
                previous: index - 1,
            });
        }
        Ok(())
    }
}

/// Decodes a varint count followed by that many objects.
///
/// `rules` are enforced only when `mode` validates.
pub fn decode_array<T: Serializable>(
    data: &[u8],
    mode: Mode,
    rules: Option<&ArrayRules>,
) -> Result<(Vec<T>, usize), CodecError> {
    let rules = rules.filter(|_| mode.validates());

    let mut input = data;
    let count = read_varint(&mut input, "array count")?;
    if let Some(rules) = rules {
        rules.check_bounds(count)?;
    }
    let len = usize::try_from(count).map_err(|_| CodecError::BoundsViolation {
        what: "array count",
        min: 0,
        max: usize::MAX as u64,
        actual: count,
    })?;
    let header = data.len() - input.len();
    trace!(element = T::NAME, count, "decoding array");

    // never pre-allocate from an untrusted count; every element takes at
    // least one byte, so the remaining input bounds it
    let mut items = Vec::with_capacity(len.min(input.len()));
    let mut offset = 0usize;
    let mut previous: Option<&[u8]> = None;
    for i in 0..len {
        let (item, consumed) = T::decode(&input[offset..], mode)?;
        let bytes = &input[offset..offset + consumed];
        if let Some(rules) = rules.filter(|r| r.lexical_order) {
            if let Some(prev) = previous {
                rules.check_lexical_order(i, prev, bytes)?;
            }
        }
        previous = Some(bytes);
        items.push(item);
        offset += consumed;
    }

    Ok((items, header + offset))
}

/// Writes a varint count followed by each object's encoding.
///
/// Elements are written in the given order. When `mode` validates, `rules`
/// are checked against the bytes as written.
pub fn encode_array<T: Serializable>(
    out: &mut Vec<u8>,
    items: &[T],
    mode: Mode,
    rules: Option<&ArrayRules>,
) -> Result<(), CodecError> {
    let rules = rules.filter(|_| mode.validates());
    let count = items.len() as u64;
    if let Some(rules) = rules {
        rules.check_bounds(count)?;
    }

    let mut body = Vec::new();
    let mut previous = 0..0;
    for (i, item) in items.iter().enumerate() {
        let start = body.len();
        item.encode_into(&mut body, mode)?;
        let current = start..body.len();
        if let Some(rules) = rules.filter(|r| r.lexical_order) {
            if i > 0 {
                rules.check_lexical_order(i, &body[previous.clone()], &body[current.clone()])?;
            }
        }
        previous = current;
    }

    write_varint(out, count);
    out.extend_from_slice(&body);
    Ok(())
}

/// Reorders `items` by their encoded bytes, the order `ArrayRules` with
/// `lexical_order` expect. Nothing is moved if any element fails to encode.
pub fn sort_lexically<T: Serializable>(items: &mut Vec<T>, mode: Mode) -> Result<(), CodecError> {
    let keys = items
        .iter()
        .map(|item| item.encode(mode))
        .collect::<Result<Vec<_>, _>>()?;
    let mut keyed: Vec<(Vec<u8>, T)> = keys.into_iter().zip(items.drain(..)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    items.extend(keyed.into_iter().map(|(_, item)| item));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;
    use tangle_types::{Ed25519Address, Input, UtxoInput};

    const RULES: ArrayRules = ArrayRules {
        what: "inputs",
        min: 1,
        max: 3,
        lexical_order: true,
    };

    fn input(id: u8, index: u16) -> Input {
        Input::Utxo(UtxoInput::new([id; 32], index))
    }

    fn encoded(items: &[Input]) -> Vec<u8> {
        let mut out = Vec::new();
        encode_array(&mut out, items, Mode::empty(), None).unwrap();
        out
    }

    #[test]
    fn decode_object_requires_two_bytes() {
        let err = decode_object::<Input>(&[0], Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn decode_object_tags_variant_failures() {
        let err = decode_object::<Input>(&[0, 1, 2], Mode::default()).unwrap_err();
        match err {
            CodecError::Variant { variant, source } => {
                assert_eq!(variant, "UtxoInput");
                assert_eq!(source.kind(), ErrorKind::InsufficientData);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn decode_object_rejects_unknown_discriminator() {
        let err = decode_object::<Input>(&[9, 0, 0], Mode::default()).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownType {
                family: Family::Input,
                discriminator: 9
            }
        );
    }

    #[test]
    fn array_bounds_are_inclusive() {
        assert!(RULES.check_bounds(1).is_ok());
        assert!(RULES.check_bounds(3).is_ok());
        assert_eq!(
            RULES.check_bounds(0).unwrap_err().kind(),
            ErrorKind::BoundsViolation
        );
        assert_eq!(
            RULES.check_bounds(4).unwrap_err().kind(),
            ErrorKind::BoundsViolation
        );
    }

    #[test]
    fn zero_bounds_mean_unbounded() {
        let rules = ArrayRules {
            what: "anything",
            min: 0,
            max: 0,
            lexical_order: false,
        };
        assert!(rules.check_bounds(0).is_ok());
        assert!(rules.check_bounds(u64::MAX).is_ok());
    }

    #[test]
    fn decode_array_enforces_bounds() {
        let items = [input(1, 0), input(2, 0), input(3, 0), input(4, 0)];
        let data = encoded(&items);
        let err = decode_array::<Input>(&data, Mode::default(), Some(&RULES)).unwrap_err();
        assert_eq!(
            err,
            CodecError::BoundsViolation {
                what: "inputs",
                min: 1,
                max: 3,
                actual: 4
            }
        );

        let data = encoded(&items[..3]);
        let (decoded, consumed) =
            decode_array::<Input>(&data, Mode::default(), Some(&RULES)).unwrap();
        assert_eq!(decoded, items[..3].to_vec());
        assert_eq!(consumed, data.len());
    }

    #[test]
    fn decode_array_enforces_order() {
        let sorted = [input(1, 0), input(1, 1), input(2, 0)];
        let data = encoded(&sorted);
        assert!(decode_array::<Input>(&data, Mode::default(), Some(&RULES)).is_ok());

        let permuted = [input(1, 1), input(1, 0), input(2, 0)];
        let data = encoded(&permuted);
        let err = decode_array::<Input>(&data, Mode::default(), Some(&RULES)).unwrap_err();
        assert_eq!(
            err,
            CodecError::OrderViolation {
                what: "inputs",
                index: 1,
                previous: 0
            }
        );

        // trusted path skips rules entirely
        let (decoded, _) = decode_array::<Input>(&data, Mode::empty(), Some(&RULES)).unwrap();
        assert_eq!(decoded, permuted.to_vec());
    }

    #[test]
    fn equal_neighbours_violate_order() {
        let data = encoded(&[input(5, 5), input(5, 5)]);
        let err = decode_array::<Input>(&data, Mode::default(), Some(&RULES)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OrderViolation);
    }

    #[test]
    fn encode_array_checks_order_when_validating() {
        let permuted = [input(2, 0), input(1, 0)];
        let mut out = Vec::new();
        let err = encode_array(&mut out, &permuted, Mode::default(), Some(&RULES)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OrderViolation);
        assert!(out.is_empty());

        encode_array(&mut out, &permuted, Mode::empty(), Some(&RULES)).unwrap();
        assert_eq!(out.len(), 1 + 2 * 35);
    }

    #[test]
    fn decode_array_with_huge_count_fails_cleanly() {
        let mut data = crate::primitives::encode_varint(u64::MAX);
        data.extend_from_slice(&[0u8; 3]);
        let err = decode_array::<Input>(&data, Mode::empty(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn count_beyond_input_is_not_truncated() {
        // 2^32 + 1 elements followed by a single valid one
        let mut data = crate::primitives::encode_varint((1u64 << 32) + 1);
        data.extend_from_slice(&input(1, 0).encode(Mode::empty()).unwrap());
        let err = decode_array::<Input>(&data, Mode::empty(), None).unwrap_err();
        #[cfg(target_pointer_width = "64")]
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
        #[cfg(not(target_pointer_width = "64"))]
        assert_eq!(err.kind(), ErrorKind::BoundsViolation);
    }

    #[test]
    fn sort_lexically_orders_by_encoding() {
        let mut items = vec![input(2, 0), input(1, 1), input(1, 0)];
        sort_lexically(&mut items, Mode::default()).unwrap();
        assert_eq!(items, vec![input(1, 0), input(1, 1), input(2, 0)]);

        let data = encoded(&items);
        let (decoded, _) = decode_array::<Input>(&data, Mode::default(), Some(&RULES)).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn sort_lexically_leaves_items_on_error() {
        let mut items = vec![input(2, 0), input(1, 127)];
        let err = sort_lexically(&mut items, Mode::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BoundsViolation);
        assert_eq!(items, vec![input(2, 0), input(1, 127)]);
    }

    #[test]
    fn variant_table_entry_names_concrete_type() {
        let variant = Variant::<tangle_types::Address>::of::<Ed25519Address>();
        assert_eq!(variant.name, "Ed25519Address");
    }

    proptest! {
        #[test]
        fn decode_accepts_exactly_sorted_unique_inputs(
            ids in prop::collection::vec((any::<u8>(), 0u16..=126), 1..8)
        ) {
            let items: Vec<Input> = ids.iter().map(|(id, idx)| input(*id, *idx)).collect();
            let data = encoded(&items);
            let rules = ArrayRules { what: "inputs", min: 1, max: 126, lexical_order: true };

            let bytes: Vec<Vec<u8>> = items
                .iter()
                .map(|i| i.encode(Mode::empty()).unwrap())
                .collect();
            let strictly_sorted = bytes.windows(2).all(|w| w[0] < w[1]);

            let result = decode_array::<Input>(&data, Mode::default(), Some(&rules));
            prop_assert_eq!(result.is_ok(), strictly_sorted);
        }
    }
}
