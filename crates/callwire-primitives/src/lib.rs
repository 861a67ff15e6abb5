//! # callwire-primitives
//!
//! Primitive types shared by the callwire codec crates: the 20-byte
//! contract/account [`Address`], the 32-byte [`H256`] hash, and the
//! `U256` big integer re-exported from `primitive-types`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::{H256, HashError};

// Re-export primitive-types for U256
pub use primitive_types::U256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_dec_str() {
        let n = U256::from_dec_str("1000000000000000000").unwrap();
        assert_eq!(n, U256::from(10u128.pow(18)));
    }
}
