//! Secrets file loader.
//!
//! The secrets file is a local plaintext `key: value` file supplying the
//! recovery phrase, invite code and gateway API key. It is read once at
//! startup and never written by this program.
//!
//! ```text
//! phrase: abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about
//! invite_code: satchel-beta-1234
//! api_key: sk_live_...
//! ```

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Secrets read from the local secrets file.
///
/// All entries are optional at parse time; callers use the `require_*`
/// accessors to produce typed errors for entries their command needs.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    /// BIP-39 recovery phrase.
    pub phrase: Option<String>,
    /// Raw seed bytes (hex in the file). Takes precedence over `phrase`.
    pub seed: Option<Vec<u8>>,
    /// Invite code for node registration.
    pub invite_code: Option<String>,
    /// Gateway API key.
    pub api_key: Option<String>,
}

impl Secrets {
    /// Load and parse the secrets file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Secrets(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    /// Parse secrets from file contents.
    ///
    /// Lines without a `:` and unknown keys are skipped. Only the first `:`
    /// separates key from value.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut secrets = Secrets::default();

        for line in contents.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "phrase" => secrets.phrase = Some(value.to_string()),
                "seed" => {
                    let bytes = hex::decode(value).map_err(|e| {
                        Error::Secrets(format!("invalid hex in `seed` entry: {}", e))
                    })?;
                    secrets.seed = Some(bytes);
                }
                "invite_code" => secrets.invite_code = Some(value.to_string()),
                "api_key" => secrets.api_key = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(secrets)
    }

    /// Get the recovery phrase or fail with a pointed error.
    pub fn require_phrase(&self) -> Result<&str> {
        self.phrase
            .as_deref()
            .ok_or_else(|| Error::Secrets("missing `phrase` entry in secrets file".to_string()))
    }

    /// Get the API key or fail with a pointed error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Secrets("missing `api_key` entry in secrets file".to_string()))
    }
}
