//! Bitcoin address validation.
//!
//! Validation delegates entirely to the `bitcoin` crate's address parser; any
//! encoding it accepts for the configured network (base58 P2PKH/P2SH, bech32
//! segwit, taproot) is valid here. No address structure is consumed beyond
//! "does it parse".

use crate::error::{Error, Result};
use crate::types::Network;
use bitcoin::address::{Address, NetworkUnchecked};

/// Parse `s` as a Bitcoin address on `network`.
pub fn validate_address(s: &str, network: Network) -> Result<Address> {
    let address: Address<NetworkUnchecked> = s
        .parse()
        .map_err(|e| Error::InvalidAddress(format!("{}: {}", s, e)))?;

    address
        .require_network(network.to_bitcoin_network())
        .map_err(|_| {
            Error::InvalidAddress(format!("{} is not valid on {}", s, network))
        })
}

/// Whether `s` parses as any Bitcoin address encoding on `network`.
pub fn is_valid_address(s: &str, network: Network) -> bool {
    validate_address(s, network).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known mainnet addresses, one per encoding.
    const P2PKH: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
    const P2SH: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";
    const P2WPKH: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
    const P2WSH: &str = "bc1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3qccfmv3";

    #[test]
    fn test_accepts_each_encoding() {
        for address in [P2PKH, P2SH, P2WPKH, P2WSH] {
            assert!(
                is_valid_address(address, Network::Bitcoin),
                "rejected {}",
                address
            );
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_address("", Network::Bitcoin));
        assert!(!is_valid_address("nonsense", Network::Bitcoin));
        assert!(!is_valid_address("bc1qqqqqqqqqqqq", Network::Bitcoin));
    }

    #[test]
    fn test_rejects_wrong_network() {
        // Mainnet address is not valid on testnet and vice versa.
        assert!(!is_valid_address(P2WPKH, Network::Testnet));
        assert!(!is_valid_address(
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
            Network::Bitcoin
        ));
    }

    #[test]
    fn test_validate_returns_typed_error() {
        assert!(matches!(
            validate_address("nonsense", Network::Bitcoin),
            Err(Error::InvalidAddress(_))
        ));
    }
}
