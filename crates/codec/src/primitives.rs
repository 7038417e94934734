use crate::error::CodecError;

/// Longest possible LEB128 encoding of a `u64`.
pub const MAX_VARINT_LEN_64: usize = 10;

pub const U16_SIZE: usize = 2;
pub const U32_SIZE: usize = 4;
pub const U64_SIZE: usize = 8;

pub(crate) fn take<'a>(
    input: &mut &'a [u8],
    n: usize,
    what: &'static str,
) -> Result<&'a [u8], CodecError> {
    if input.len() < n {
        return Err(CodecError::InsufficientData {
            what,
            need: n,
            have: input.len(),
        });
    }
    let (a, b) = input.split_at(n);
    *input = b;
    Ok(a)
}

/// Fails unless `data` holds at least `min` bytes.
pub(crate) fn ensure_min_len(data: &[u8], min: usize, what: &'static str) -> Result<(), CodecError> {
    if data.len() < min {
        return Err(CodecError::InsufficientData {
            what,
            need: min,
            have: data.len(),
        });
    }
    Ok(())
}

pub(crate) fn read_u8(input: &mut &[u8], what: &'static str) -> Result<u8, CodecError> {
    Ok(take(input, 1, what)?[0])
}

pub(crate) fn read_u16_le(input: &mut &[u8], what: &'static str) -> Result<u16, CodecError> {
    let b = take(input, U16_SIZE, what)?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

pub(crate) fn read_u32_le(input: &mut &[u8], what: &'static str) -> Result<u32, CodecError> {
    let b = take(input, U32_SIZE, what)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

pub(crate) fn read_u64_le(input: &mut &[u8], what: &'static str) -> Result<u64, CodecError> {
    let b = take(input, U64_SIZE, what)?;
    Ok(u64::from_le_bytes([
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
    ]))
}

pub(crate) fn read_array<const N: usize>(
    input: &mut &[u8],
    what: &'static str,
) -> Result<[u8; N], CodecError> {
    let b = take(input, N, what)?;
    let mut out = [0u8; N];
    out.copy_from_slice(b);
    Ok(out)
}

/// Reads the one-byte discriminator and checks it against `expected`.
pub(crate) fn read_type(
    input: &mut &[u8],
    expected: u8,
    what: &'static str,
) -> Result<(), CodecError> {
    let actual = read_u8(input, what)?;
    if actual != expected {
        return Err(CodecError::TypeMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn read_varint(input: &mut &[u8], what: &'static str) -> Result<u64, CodecError> {
    let (value, n) = decode_varint(input, what)?;
    *input = &input[n..];
    Ok(value)
}

pub(crate) fn write_u8(out: &mut Vec<u8>, v: u8) {
    out.push(v);
}

pub(crate) fn write_u16_le(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub(crate) fn write_u32_le(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub(crate) fn write_u64_le(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub(crate) fn write_bytes(out: &mut Vec<u8>, b: &[u8]) {
    out.extend_from_slice(b);
}

pub(crate) fn write_varint(out: &mut Vec<u8>, v: u64) {
    let mut buf = [0u8; MAX_VARINT_LEN_64];
    let n = put_varint(&mut buf, v);
    out.extend_from_slice(&buf[..n]);
}

fn put_varint(buf: &mut [u8; MAX_VARINT_LEN_64], mut v: u64) -> usize {
    let mut i = 0;
    while v >= 0x80 {
        buf[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    buf[i] = v as u8;
    i + 1
}

/// Unsigned LEB128 encoding of `v`.
pub fn encode_varint(v: u64) -> Vec<u8> {
    let mut buf = [0u8; MAX_VARINT_LEN_64];
    let n = put_varint(&mut buf, v);
    buf[..n].to_vec()
}

/// Decodes an unsigned LEB128 value, returning it with the number of bytes
/// it occupied.
///
/// Running out of input before the terminating byte is `InsufficientData`;
/// no terminator within ten bytes, or a tenth byte carrying more than the
/// last bit of a `u64`, is `InvalidVarint`.
pub fn decode_varint(data: &[u8], what: &'static str) -> Result<(u64, usize), CodecError> {
    let mut x: u64 = 0;
    let mut shift: u32 = 0;
    for (i, &b) in data.iter().take(MAX_VARINT_LEN_64).enumerate() {
        if b < 0x80 {
            if i == MAX_VARINT_LEN_64 - 1 && b > 1 {
                return Err(CodecError::InvalidVarint {
                    what,
                    reason: "overflows a 64-bit integer",
                });
            }
            return Ok((x | (u64::from(b) << shift), i + 1));
        }
        x |= u64::from(b & 0x7f) << shift;
        shift += 7;
    }
    if data.len() >= MAX_VARINT_LEN_64 {
        return Err(CodecError::InvalidVarint {
            what,
            reason: "no terminating byte within 10 bytes",
        });
    }
    Err(CodecError::InsufficientData {
        what,
        need: data.len() + 1,
        have: data.len(),
    })
}

/// Encoded size of `v` as a varint.
pub fn varint_size(v: u64) -> usize {
    let bits = 64 - (v | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}
