//! Mnemonic-to-seed derivation.
//!
//! All BIP-39 handling delegates to the `bip39` crate; the only derivation
//! done here is the node-identity public key the gateway uses to recognise
//! this wallet.

use crate::error::{Error, Result};
use crate::types::Network;
use bitcoin::bip32::{DerivationPath, Xpriv};
use bitcoin::secp256k1::Secp256k1;

/// Purpose index for the node-identity derivation path (the Lightning port).
const NODE_ID_PURPOSE: u32 = 9735;

/// A BIP-39 wallet seed.
#[derive(Clone)]
pub struct Seed {
    bytes: [u8; 64],
}

impl Seed {
    /// Derive a seed from a recovery phrase (empty passphrase).
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        use bip39::Mnemonic;
        use std::str::FromStr;

        let mnemonic =
            Mnemonic::from_str(phrase).map_err(|e| Error::InvalidMnemonic(format!("{}", e)))?;

        Ok(Self {
            bytes: mnemonic.to_seed(""),
        })
    }

    /// Generate a fresh mnemonic and its seed.
    ///
    /// # Arguments
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    pub fn generate(word_count: usize) -> Result<(String, Self)> {
        use bip39::{Language, Mnemonic};
        use rand::rngs::OsRng;

        let mnemonic = Mnemonic::generate_in_with(&mut OsRng, Language::English, word_count)
            .map_err(|e| Error::KeyDerivation(format!("Failed to generate mnemonic: {}", e)))?;

        let seed = Self {
            bytes: mnemonic.to_seed(""),
        };
        Ok((mnemonic.to_string(), seed))
    }

    /// The raw 64 seed bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.bytes
    }

    /// Derive the node-identity public key registered with the gateway.
    ///
    /// Derivation path: `m/{NODE_ID_PURPOSE}'/0'`, hardened so leaking the
    /// identity key never exposes the parent. Returns the compressed public
    /// key as lowercase hex.
    pub fn node_pubkey(&self, network: Network) -> Result<String> {
        let secp = Secp256k1::new();
        let master = Xpriv::new_master(network.to_bitcoin_network(), &self.bytes)
            .map_err(|e| Error::KeyDerivation(format!("Failed to derive master key: {}", e)))?;

        let path_str = format!("m/{}'/0'", NODE_ID_PURPOSE);
        let path: DerivationPath = path_str
            .parse()
            .map_err(|e| Error::KeyDerivation(format!("Invalid derivation path: {}", e)))?;

        let derived = master
            .derive_priv(&secp, &path)
            .map_err(|e| Error::KeyDerivation(format!("Key derivation failed: {}", e)))?;

        Ok(derived.private_key.public_key(&secp).to_string())
    }
}

impl TryFrom<&[u8]> for Seed {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 64] = bytes
            .try_into()
            .map_err(|_| Error::Secrets("seed must be exactly 64 bytes".to_string()))?;
        Ok(Self { bytes })
    }
}

// Seed bytes must never end up in logs.
impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_from_phrase_is_deterministic() {
        let seed1 = Seed::from_phrase(PHRASE).unwrap();
        let seed2 = Seed::from_phrase(PHRASE).unwrap();
        assert_eq!(seed1.as_bytes(), seed2.as_bytes());
    }

    #[test]
    fn test_from_phrase_rejects_garbage() {
        assert!(matches!(
            Seed::from_phrase("definitely not a valid phrase"),
            Err(Error::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_generate_round_trips() {
        let (phrase, seed) = Seed::generate(12).unwrap();
        assert_eq!(phrase.split_whitespace().count(), 12);

        let restored = Seed::from_phrase(&phrase).unwrap();
        assert_eq!(seed.as_bytes(), restored.as_bytes());
    }

    #[test]
    fn test_node_pubkey_is_stable() {
        let seed = Seed::from_phrase(PHRASE).unwrap();
        let pk1 = seed.node_pubkey(Network::Bitcoin).unwrap();
        let pk2 = seed.node_pubkey(Network::Bitcoin).unwrap();

        assert_eq!(pk1, pk2);
        // Compressed pubkey, hex-encoded.
        assert_eq!(pk1.len(), 66);
        assert!(pk1.starts_with("02") || pk1.starts_with("03"));
    }

    #[test]
    fn test_seed_from_bytes_requires_64() {
        assert!(Seed::try_from(&[0u8; 32][..]).is_err());
        assert!(Seed::try_from(&[0u8; 64][..]).is_ok());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let seed = Seed::from_phrase(PHRASE).unwrap();
        assert_eq!(format!("{:?}", seed), "Seed(..)");
    }
}
