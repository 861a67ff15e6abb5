//! ABI codec error types

use thiserror::Error;

use crate::types::ParamType;

/// ABI codec error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Type string matches no grammar rule
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Text cannot be converted to the declared type
    #[error("cannot convert {text:?} to {ty}")]
    ValueConversion {
        /// Declared parameter type
        ty: ParamType,
        /// Offending input text
        text: String,
    },

    /// Value count does not match declared input count
    #[error("argument count mismatch: expected {expected}, got {actual}")]
    ArgumentCountMismatch {
        /// Declared input count
        expected: usize,
        /// Supplied value count
        actual: usize,
    },

    /// Token shape does not match the declared type
    #[error("value does not match declared type {expected}")]
    TypeMismatch {
        /// Declared parameter type
        expected: ParamType,
    },

    /// Return data is truncated or an offset points outside it
    #[error("decode error: {0}")]
    Decode(String),

    /// Empty return buffer with one or more expected outputs
    #[error("no return data")]
    NoReturnData,

    /// Decoded string payload is not valid UTF-8
    #[error("invalid UTF-8 in string data: {0}")]
    InvalidUtf8(String),
}

impl AbiError {
    pub(crate) fn conversion(ty: &ParamType, text: &str) -> Self {
        AbiError::ValueConversion {
            ty: ty.clone(),
            text: text.to_string(),
        }
    }
}
