//! ABI return-data decoding

use callwire_primitives::{Address, U256};

use crate::error::AbiError;
use crate::types::{I256, ParamType, Token};

/// Decode function return data against the output descriptors.
///
/// An empty buffer with one or more expected outputs is reported as
/// [`AbiError::NoReturnData`], distinct from a decode failure, so
/// callers can tell "the function returned nothing" apart from
/// corrupted data.
pub fn decode_returns(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    if data.is_empty() && !types.is_empty() {
        return Err(AbiError::NoReturnData);
    }
    decode(types, data)
}

/// Decode tokens from ABI-encoded data
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    let mut offset = 0;
    let mut tokens = Vec::with_capacity(types.len());

    for param_type in types {
        let (token, consumed) = decode_token(param_type, data, offset)?;
        tokens.push(token);
        offset += consumed;
    }

    Ok(tokens)
}

/// Decode a single token from `frame` at `offset`.
///
/// Dynamic offsets are measured from the start of `frame`; array
/// recursion passes the element region as a fresh frame so that nested
/// offsets resolve correctly.
fn decode_token(
    param_type: &ParamType,
    frame: &[u8],
    offset: usize,
) -> Result<(Token, usize), AbiError> {
    match param_type {
        ParamType::Address => {
            check_length(frame, offset + 32)?;
            let mut addr_bytes = [0u8; 20];
            addr_bytes.copy_from_slice(&frame[offset + 12..offset + 32]);
            Ok((Token::Address(Address::from_bytes(addr_bytes)), 32))
        }
        ParamType::Uint(_) => {
            check_length(frame, offset + 32)?;
            let value = U256::from_big_endian(&frame[offset..offset + 32]);
            Ok((Token::Uint(value), 32))
        }
        ParamType::Int(_) => {
            check_length(frame, offset + 32)?;
            let bytes = &frame[offset..offset + 32];

            // Sign bit of the stored word decides two's-complement
            // reconstruction
            let negative = bytes[0] & 0x80 != 0;
            let abs = if negative {
                let mut flipped = [0u8; 32];
                for i in 0..32 {
                    flipped[i] = !bytes[i];
                }
                let mut carry = 1u16;
                for i in (0..32).rev() {
                    let sum = (flipped[i] as u16) + carry;
                    flipped[i] = sum as u8;
                    carry = sum >> 8;
                }
                U256::from_big_endian(&flipped)
            } else {
                U256::from_big_endian(bytes)
            };

            Ok((Token::Int(I256::new(abs, negative)), 32))
        }
        ParamType::Bool => {
            check_length(frame, offset + 32)?;
            let value = frame[offset + 31] != 0;
            Ok((Token::Bool(value), 32))
        }
        ParamType::FixedBytes(size) => {
            check_length(frame, offset + 32)?;
            let bytes = frame[offset..offset + *size].to_vec();
            Ok((Token::FixedBytes(bytes), 32))
        }
        ParamType::Bytes => {
            let data_offset = read_offset(frame, offset)?;
            let (bytes, _) = decode_bytes(frame, data_offset)?;
            Ok((Token::Bytes(bytes), 32))
        }
        ParamType::String => {
            let data_offset = read_offset(frame, offset)?;
            let (bytes, _) = decode_bytes(frame, data_offset)?;
            let s = String::from_utf8(bytes).map_err(|e| AbiError::InvalidUtf8(e.to_string()))?;
            Ok((Token::String(s), 32))
        }
        ParamType::Array(inner) => {
            let data_offset = read_offset(frame, offset)?;
            check_length(frame, data_offset + 32)?;
            let len = read_offset(frame, data_offset)?;

            // Every element occupies at least one head word; bound the
            // declared count against the remaining buffer before
            // allocating.
            let elements = &frame[data_offset + 32..];
            let min_size = len
                .checked_mul(32)
                .ok_or_else(|| AbiError::Decode(format!("element count {} overflows", len)))?;
            if min_size > elements.len() {
                return Err(AbiError::Decode(format!(
                    "element count {} exceeds remaining data ({} bytes)",
                    len,
                    elements.len()
                )));
            }

            let mut tokens = Vec::with_capacity(len);
            let mut inner_offset = 0;
            for _ in 0..len {
                let (token, consumed) = decode_token(inner, elements, inner_offset)?;
                tokens.push(token);
                inner_offset += consumed;
            }

            Ok((Token::Array(tokens), 32))
        }
        ParamType::FixedArray(inner, size) => {
            if inner.is_dynamic() {
                // Whole array is dynamic: its content is a fresh
                // parameter region behind one offset word.
                let data_offset = read_offset(frame, offset)?;
                check_length(frame, data_offset)?;
                let elements = &frame[data_offset..];
                let mut tokens = Vec::with_capacity(*size);
                let mut inner_offset = 0;
                for _ in 0..*size {
                    let (token, consumed) = decode_token(inner, elements, inner_offset)?;
                    tokens.push(token);
                    inner_offset += consumed;
                }
                Ok((Token::FixedArray(tokens), 32))
            } else {
                let mut tokens = Vec::with_capacity(*size);
                let mut inner_offset = offset;
                for _ in 0..*size {
                    let (token, consumed) = decode_token(inner, frame, inner_offset)?;
                    tokens.push(token);
                    inner_offset += consumed;
                }
                Ok((Token::FixedArray(tokens), inner_offset - offset))
            }
        }
    }
}

/// Read a 32-byte word at `offset` as a usize offset/count, rejecting
/// values that cannot index the buffer
fn read_offset(frame: &[u8], offset: usize) -> Result<usize, AbiError> {
    check_length(frame, offset + 32)?;
    let value = U256::from_big_endian(&frame[offset..offset + 32]);
    if value > U256::from(frame.len()) {
        return Err(AbiError::Decode(format!(
            "offset {} out of bounds ({} bytes)",
            value,
            frame.len()
        )));
    }
    Ok(value.low_u64() as usize)
}

/// Decode dynamic bytes content at `offset`: length word then payload
fn decode_bytes(frame: &[u8], offset: usize) -> Result<(Vec<u8>, usize), AbiError> {
    check_length(frame, offset + 32)?;
    let len = read_offset(frame, offset)?;
    check_length(frame, offset + 32 + len)?;
    let bytes = frame[offset + 32..offset + 32 + len].to_vec();

    let padded_len = len.div_ceil(32) * 32;
    Ok((bytes, 32 + padded_len))
}

/// Check that data has at least `required` bytes
fn check_length(data: &[u8], required: usize) -> Result<(), AbiError> {
    if data.len() < required {
        return Err(AbiError::Decode(format!(
            "insufficient data: need {} bytes, have {}",
            required,
            data.len()
        )));
    }
    Ok(())
}
