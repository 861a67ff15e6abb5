//! Textual argument coercion

use callwire_primitives::{Address, U256};

use crate::error::AbiError;
use crate::types::{I256, ParamType, Token};

/// Convert a textual argument into a [`Token`] matching the descriptor.
///
/// Coercion is recursive for arrays. All failures carry the offending
/// descriptor and text; for nested arrays the innermost failing
/// element's pair is propagated, so callers can pinpoint which element
/// did not fit.
pub fn coerce(ty: &ParamType, text: &str) -> Result<Token, AbiError> {
    match ty {
        ParamType::Address => coerce_address(ty, text),
        ParamType::Uint(bits) => coerce_uint(ty, *bits, text),
        ParamType::Int(bits) => coerce_int(ty, *bits, text),
        ParamType::Bool => match text {
            "true" => Ok(Token::Bool(true)),
            "false" => Ok(Token::Bool(false)),
            _ => Err(AbiError::conversion(ty, text)),
        },
        ParamType::String => Ok(Token::String(text.to_string())),
        ParamType::Bytes => {
            let bytes = hex_bytes(ty, text)?;
            if bytes.is_empty() {
                return Err(AbiError::conversion(ty, text));
            }
            Ok(Token::Bytes(bytes))
        }
        ParamType::FixedBytes(size) => {
            let decoded = hex_bytes(ty, text)?;
            // Over-long input truncates to the declared size; short
            // input zero-fills on the right.
            let mut bytes = vec![0u8; *size];
            let len = decoded.len().min(*size);
            bytes[..len].copy_from_slice(&decoded[..len]);
            Ok(Token::FixedBytes(bytes))
        }
        ParamType::Array(inner) => {
            let tokens = coerce_elements(inner, text)?;
            Ok(Token::Array(tokens))
        }
        ParamType::FixedArray(inner, len) => {
            let segments: Vec<&str> = text.split(',').collect();
            if segments.len() != *len {
                return Err(AbiError::conversion(ty, text));
            }
            let tokens = coerce_elements(inner, text)?;
            Ok(Token::FixedArray(tokens))
        }
    }
}

/// Split on `,` and coerce each segment against the element type.
/// Embedded commas in element text are not escapable.
fn coerce_elements(inner: &ParamType, text: &str) -> Result<Vec<Token>, AbiError> {
    text.split(',').map(|seg| coerce(inner, seg)).collect()
}

fn coerce_address(ty: &ParamType, text: &str) -> Result<Token, AbiError> {
    // 0x prefix plus exactly 40 hex digits; case is accepted without
    // checksum validation.
    let hex_part = match text.strip_prefix("0x") {
        Some(h) if h.len() == 40 => h,
        _ => return Err(AbiError::conversion(ty, text)),
    };
    let addr = Address::from_hex(hex_part).map_err(|_| AbiError::conversion(ty, text))?;
    Ok(Token::Address(addr))
}

fn coerce_uint(ty: &ParamType, bits: usize, text: &str) -> Result<Token, AbiError> {
    let value = U256::from_dec_str(text).map_err(|_| AbiError::conversion(ty, text))?;
    // Out-of-range values are rejected, never truncated.
    if bits < 256 && value.bits() > bits {
        return Err(AbiError::conversion(ty, text));
    }
    Ok(Token::Uint(value))
}

fn coerce_int(ty: &ParamType, bits: usize, text: &str) -> Result<Token, AbiError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let abs = U256::from_dec_str(digits).map_err(|_| AbiError::conversion(ty, text))?;

    // Two's-complement range: [-2^(bits-1), 2^(bits-1) - 1]
    let half = U256::one() << (bits - 1);
    let in_range = if negative { abs <= half } else { abs < half };
    if !in_range {
        return Err(AbiError::conversion(ty, text));
    }

    Ok(Token::Int(I256::new(abs, negative)))
}

/// Decode 0x-prefixed hex text. An odd digit count is tolerated by
/// zero-extending the leading nibble.
fn hex_bytes(ty: &ParamType, text: &str) -> Result<Vec<u8>, AbiError> {
    let hex_part = text
        .strip_prefix("0x")
        .ok_or_else(|| AbiError::conversion(ty, text))?;
    let padded;
    let hex_part = if hex_part.len() % 2 == 1 {
        padded = format!("0{}", hex_part);
        padded.as_str()
    } else {
        hex_part
    };
    hex::decode(hex_part).map_err(|_| AbiError::conversion(ty, text))
}
