//! # callwire-abi
//!
//! Dynamic contract-call codec: turns stringly-typed function names and
//! argument type/value pairs into wire-correct Solidity ABI call data,
//! and decodes raw return buffers back into typed display values.
//!
//! The pipeline is purely functional: [`parse_type`] builds a
//! [`ParamType`] descriptor from a type string, [`coerce`] converts a
//! textual argument into a matching [`Token`], [`encode_call`] packs a
//! [`MethodSignature`] plus tokens into selector-prefixed call data, and
//! [`decode_returns`] unpacks return data against output descriptors.
//!
//! # Example
//!
//! ```rust
//! use callwire_abi::{parse_type, coerce, encode_call, decode_returns, MethodSignature};
//!
//! let inputs = vec![parse_type("address")?, parse_type("uint256")?];
//! let args = vec![
//!     coerce(&inputs[0], "0x4Ba80F138543E75AbF788eB3fE2726425586b0ff")?,
//!     coerce(&inputs[1], "1000")?,
//! ];
//! let sig = MethodSignature::new("transfer", inputs);
//! let data = encode_call(&sig, &args)?;
//! assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
//!
//! let outputs = vec![parse_type("bool")?];
//! let mut ret = [0u8; 32];
//! ret[31] = 1;
//! let values = decode_returns(&outputs, &ret)?;
//! assert_eq!(values.len(), 1);
//! # Ok::<(), callwire_abi::AbiError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod coerce;
mod decode;
mod encode;
mod error;
mod parse;
mod types;

pub use coerce::coerce;
pub use decode::{decode, decode_returns};
pub use encode::{encode, encode_call, function_selector};
pub use error::AbiError;
pub use parse::parse_type;
pub use types::{I256, MethodSignature, ParamType, Token};

// Re-export primitives for convenience
pub use callwire_primitives::{Address, U256};
