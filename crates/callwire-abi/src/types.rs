//! ABI type definitions

use std::fmt;

use callwire_crypto::keccak256;
use callwire_primitives::{Address, U256};

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Address (20 bytes)
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Dynamic-length array
    Array(Box<ParamType>),
    /// Fixed-length array
    FixedArray(Box<ParamType>, usize),
}

impl ParamType {
    /// Check if this type is dynamic (variable encoded length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            _ => false,
        }
    }
}

impl fmt::Display for ParamType {
    /// Canonical type rendering as used in signature strings
    /// (`uint256`, `address[3]`, `bytes32[]`, ...)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => write!(f, "address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Bytes => write!(f, "bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::String => write!(f, "string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, len) => write!(f, "{}[{}]", inner, len),
        }
    }
}

/// Solidity ABI value, tagged to mirror [`ParamType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer
    Uint(U256),
    /// Signed integer
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Fixed-size bytes (exactly the declared size)
    FixedBytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic-length array
    Array(Vec<Token>),
    /// Fixed-length array
    FixedArray(Vec<Token>),
}

/// Signed 256-bit integer, sign-magnitude representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256. Negative zero normalizes to zero.
    pub fn new(abs: U256, negative: bool) -> Self {
        Self {
            negative: negative && !abs.is_zero(),
            abs,
        }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        if value < 0 {
            Self::new(U256::from(value.unsigned_abs()), true)
        } else {
            Self::new(U256::from(value as u128), false)
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

/// A function name with its ordered input types.
///
/// Exists only to derive the canonical signature string and the 4-byte
/// selector; nothing is retained between encode operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Function name
    pub name: String,
    /// Ordered input parameter types
    pub inputs: Vec<ParamType>,
}

impl MethodSignature {
    /// Create a new method signature
    pub fn new(name: impl Into<String>, inputs: Vec<ParamType>) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }

    /// Canonical signature string `name(type1,type2,...)`
    pub fn canonical(&self) -> String {
        let types: Vec<String> = self.inputs.iter().map(|t| t.to_string()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// First 4 bytes of keccak256 of the canonical signature
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.canonical().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash.as_bytes()[..4]);
        selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_is_dynamic() {
        assert!(!ParamType::Address.is_dynamic());
        assert!(!ParamType::Uint(256).is_dynamic());
        assert!(!ParamType::Bool.is_dynamic());
        assert!(!ParamType::FixedBytes(32).is_dynamic());
        assert!(!ParamType::FixedArray(Box::new(ParamType::Uint(8)), 3).is_dynamic());

        assert!(ParamType::Bytes.is_dynamic());
        assert!(ParamType::String.is_dynamic());
        assert!(ParamType::Array(Box::new(ParamType::Uint(256))).is_dynamic());
        assert!(ParamType::FixedArray(Box::new(ParamType::String), 2).is_dynamic());
    }

    #[test]
    fn test_param_type_display() {
        assert_eq!(ParamType::Uint(256).to_string(), "uint256");
        assert_eq!(ParamType::Int(8).to_string(), "int8");
        assert_eq!(ParamType::FixedBytes(32).to_string(), "bytes32");
        assert_eq!(
            ParamType::Array(Box::new(ParamType::Address)).to_string(),
            "address[]"
        );
        assert_eq!(
            ParamType::FixedArray(Box::new(ParamType::Uint(256)), 3).to_string(),
            "uint256[3]"
        );
    }

    #[test]
    fn test_canonical_signature() {
        let sig = MethodSignature::new(
            "transfer",
            vec![ParamType::Address, ParamType::Uint(256)],
        );
        assert_eq!(sig.canonical(), "transfer(address,uint256)");
        assert_eq!(sig.selector(), [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_canonical_signature_no_args() {
        let sig = MethodSignature::new("totalSupply", vec![]);
        assert_eq!(sig.canonical(), "totalSupply()");
    }

    #[test]
    fn test_i256_from_i128() {
        let positive = I256::from_i128(100);
        assert!(!positive.negative);
        assert_eq!(positive.abs, U256::from(100));

        let negative = I256::from_i128(-100);
        assert!(negative.negative);
        assert_eq!(negative.abs, U256::from(100));

        let zero = I256::from_i128(0);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_i256_negative_zero_normalizes() {
        assert_eq!(I256::new(U256::zero(), true), I256::new(U256::zero(), false));
    }

    #[test]
    fn test_i256_display() {
        assert_eq!(I256::from_i128(-42).to_string(), "-42");
        assert_eq!(I256::from_i128(42).to_string(), "42");
    }
}
