//! # callwire-crypto
//!
//! Keccak-256 hashing, as used for function selector derivation.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
