//! ABI call encoding

use callwire_primitives::U256;

use crate::error::AbiError;
use crate::types::{MethodSignature, ParamType, Token};

/// Encode a full contract call: 4-byte selector followed by the
/// argument encoding.
///
/// Fails with [`AbiError::ArgumentCountMismatch`] when the token count
/// does not match the signature's declared inputs.
pub fn encode_call(signature: &MethodSignature, tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if signature.inputs.len() != tokens.len() {
        return Err(AbiError::ArgumentCountMismatch {
            expected: signature.inputs.len(),
            actual: tokens.len(),
        });
    }
    let mut result = signature.selector().to_vec();
    result.extend(encode_params(&signature.inputs, tokens)?);
    Ok(result)
}

/// Encode an argument body (no selector) against declared types
pub fn encode(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if types.len() != tokens.len() {
        return Err(AbiError::ArgumentCountMismatch {
            expected: types.len(),
            actual: tokens.len(),
        });
    }
    encode_params(types, tokens)
}

/// Compute a function selector (first 4 bytes of keccak256(signature))
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = callwire_crypto::keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Encode a parameter region: head words in order, dynamic payloads
/// appended to a tail buffer, offsets measured from the region start.
fn encode_params(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    let head_size = types.iter().map(head_length).sum::<usize>();

    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for (param_type, token) in types.iter().zip(tokens.iter()) {
        if param_type.is_dynamic() {
            let offset = head_size + tail.len();
            head.extend(encode_u256(&U256::from(offset)));
            tail.extend(encode_token(param_type, token)?);
        } else {
            head.extend(encode_token(param_type, token)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

/// Head size in bytes for a type: 32 for everything except in-place
/// static fixed arrays.
fn head_length(param_type: &ParamType) -> usize {
    match param_type {
        ParamType::FixedArray(inner, size) if !inner.is_dynamic() => head_length(inner) * size,
        _ => 32,
    }
}

/// Encode a single token
fn encode_token(param_type: &ParamType, token: &Token) -> Result<Vec<u8>, AbiError> {
    match (param_type, token) {
        (ParamType::Address, Token::Address(addr)) => {
            let mut buf = [0u8; 32];
            buf[12..32].copy_from_slice(addr.as_bytes());
            Ok(buf.to_vec())
        }
        (ParamType::Uint(_), Token::Uint(value)) => Ok(encode_u256(value)),
        (ParamType::Int(_), Token::Int(value)) => {
            if value.negative {
                Ok(twos_complement(&value.abs).to_vec())
            } else {
                Ok(encode_u256(&value.abs))
            }
        }
        (ParamType::Bool, Token::Bool(b)) => {
            let mut buf = [0u8; 32];
            buf[31] = u8::from(*b);
            Ok(buf.to_vec())
        }
        (ParamType::FixedBytes(size), Token::FixedBytes(data)) => {
            // Left-aligned, zero-padded to a full word
            let mut buf = [0u8; 32];
            let len = data.len().min(*size);
            buf[..len].copy_from_slice(&data[..len]);
            Ok(buf.to_vec())
        }
        (ParamType::Bytes, Token::Bytes(data)) => Ok(encode_bytes(data)),
        (ParamType::String, Token::String(s)) => Ok(encode_bytes(s.as_bytes())),
        (ParamType::Array(inner), Token::Array(tokens)) => {
            let mut result = encode_u256(&U256::from(tokens.len()));
            let inner_types = vec![(**inner).clone(); tokens.len()];
            result.extend(encode_params(&inner_types, tokens)?);
            Ok(result)
        }
        (ParamType::FixedArray(inner, size), Token::FixedArray(tokens)) => {
            if tokens.len() != *size {
                return Err(AbiError::TypeMismatch {
                    expected: param_type.clone(),
                });
            }
            let inner_types = vec![(**inner).clone(); tokens.len()];
            encode_params(&inner_types, tokens)
        }
        _ => Err(AbiError::TypeMismatch {
            expected: param_type.clone(),
        }),
    }
}

/// Convert U256 to a 32-byte big-endian array
fn u256_to_bytes(value: &U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}

/// Encode a U256 as a 32-byte word
fn encode_u256(value: &U256) -> Vec<u8> {
    u256_to_bytes(value).to_vec()
}

/// 32-byte two's complement of a nonzero magnitude: flip bits, add one
fn twos_complement(abs: &U256) -> [u8; 32] {
    let abs_bytes = u256_to_bytes(abs);
    let mut bytes = [0u8; 32];
    for i in 0..32 {
        bytes[i] = !abs_bytes[i];
    }
    let mut carry = 1u16;
    for i in (0..32).rev() {
        let sum = (bytes[i] as u16) + carry;
        bytes[i] = sum as u8;
        carry = sum >> 8;
    }
    bytes
}

/// Encode dynamic bytes: length word, then content right-padded to a
/// multiple of 32 bytes
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_u256(&U256::from(data.len()));

    let padded_len = data.len().div_ceil(32) * 32;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);

    result
}
