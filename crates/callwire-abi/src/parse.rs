//! Type descriptor grammar parser

use crate::error::AbiError;
use crate::types::ParamType;

/// Parse a type string into a [`ParamType`].
///
/// Grammar: a base type (`uint`/`uintN`, `int`/`intN`, `address`,
/// `bool`, `string`, `bytes`, `bytesN`) with an optional single array
/// suffix `[N]` (fixed length) or `[]` (dynamic length). Bare `uint`
/// and `int` alias to their 256-bit forms. Only one level of array
/// suffix is supported.
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    let s = s.trim();

    if let Some(open) = s.find('[') {
        // Array suffix applies to a preceding base type only.
        if open == 0 || !s.ends_with(']') {
            return Err(AbiError::UnsupportedType(s.to_string()));
        }
        let elem = parse_base(&s[..open])?;
        let len_str = &s[open + 1..s.len() - 1];
        if len_str.is_empty() {
            return Ok(ParamType::Array(Box::new(elem)));
        }
        let len: usize = len_str
            .parse()
            .map_err(|_| AbiError::UnsupportedType(s.to_string()))?;
        if len == 0 {
            return Err(AbiError::UnsupportedType(s.to_string()));
        }
        return Ok(ParamType::FixedArray(Box::new(elem), len));
    }

    parse_base(s)
}

/// Parse a base (non-array) type string
fn parse_base(s: &str) -> Result<ParamType, AbiError> {
    if s == "address" {
        return Ok(ParamType::Address);
    }
    if s == "bool" {
        return Ok(ParamType::Bool);
    }
    if s == "string" {
        return Ok(ParamType::String);
    }
    if s == "bytes" {
        return Ok(ParamType::Bytes);
    }

    // uint / uint<N>
    if let Some(rest) = s.strip_prefix("uint") {
        return Ok(ParamType::Uint(parse_bits(s, rest)?));
    }

    // int / int<N>
    if let Some(rest) = s.strip_prefix("int") {
        return Ok(ParamType::Int(parse_bits(s, rest)?));
    }

    // bytes<N>
    if let Some(rest) = s.strip_prefix("bytes") {
        let size: usize = rest
            .parse()
            .map_err(|_| AbiError::UnsupportedType(s.to_string()))?;
        if !(1..=32).contains(&size) {
            return Err(AbiError::UnsupportedType(s.to_string()));
        }
        return Ok(ParamType::FixedBytes(size));
    }

    Err(AbiError::UnsupportedType(s.to_string()))
}

/// Parse an integer bit-width suffix; bare suffix aliases to 256.
/// Widths must be a multiple of 8 in [8, 256].
fn parse_bits(full: &str, rest: &str) -> Result<usize, AbiError> {
    if rest.is_empty() {
        return Ok(256);
    }
    let bits: usize = rest
        .parse()
        .map_err(|_| AbiError::UnsupportedType(full.to_string()))?;
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(AbiError::UnsupportedType(full.to_string()));
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_types() {
        assert_eq!(parse_type("address").unwrap(), ParamType::Address);
        assert_eq!(parse_type("bool").unwrap(), ParamType::Bool);
        assert_eq!(parse_type("string").unwrap(), ParamType::String);
        assert_eq!(parse_type("bytes").unwrap(), ParamType::Bytes);
        assert_eq!(parse_type("bytes32").unwrap(), ParamType::FixedBytes(32));
        assert_eq!(parse_type("bytes1").unwrap(), ParamType::FixedBytes(1));
    }

    #[test]
    fn test_parse_int_widths() {
        assert_eq!(parse_type("uint").unwrap(), ParamType::Uint(256));
        assert_eq!(parse_type("uint256").unwrap(), ParamType::Uint(256));
        assert_eq!(parse_type("uint8").unwrap(), ParamType::Uint(8));
        assert_eq!(parse_type("int").unwrap(), ParamType::Int(256));
        assert_eq!(parse_type("int64").unwrap(), ParamType::Int(64));
    }

    #[test]
    fn test_parse_array_suffix() {
        assert_eq!(
            parse_type("uint256[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)))
        );
        assert_eq!(
            parse_type("address[3]").unwrap(),
            ParamType::FixedArray(Box::new(ParamType::Address), 3)
        );
        assert_eq!(
            parse_type("uint[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)))
        );
        assert_eq!(
            parse_type("string[2]").unwrap(),
            ParamType::FixedArray(Box::new(ParamType::String), 2)
        );
    }

    #[test]
    fn test_parse_rejects_bad_widths() {
        assert!(parse_type("uint0").is_err());
        assert!(parse_type("uint7").is_err());
        assert!(parse_type("uint264").is_err());
        assert!(parse_type("int12x").is_err());
        assert!(parse_type("bytes0").is_err());
        assert!(parse_type("bytes33").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            parse_type("tuple"),
            Err(AbiError::UnsupportedType(_))
        ));
        assert!(parse_type("").is_err());
        assert!(parse_type("fixed128x18").is_err());
    }

    #[test]
    fn test_parse_rejects_nested_arrays() {
        assert!(parse_type("uint256[][]").is_err());
        assert!(parse_type("uint256[2][3]").is_err());
        assert!(parse_type("[2]uint256").is_err());
        assert!(parse_type("[uint256]").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_array_lengths() {
        assert!(parse_type("uint256[0]").is_err());
        assert!(parse_type("uint256[-1]").is_err());
        assert!(parse_type("uint256[abc]").is_err());
        assert!(parse_type("uint256[3").is_err());
    }
}
