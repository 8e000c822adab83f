//! Wallet configuration.
//!
//! A [`Config`] selects the gateway environment and Bitcoin network and
//! carries the credentials read from the secrets file. It is assembled once
//! at startup and never persisted.

use crate::types::Network;
use serde::{Deserialize, Serialize};

/// Gateway environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production gateway (mainnet nodes).
    Production,
    /// Staging gateway (testnet nodes).
    Staging,
}

impl Environment {
    /// Default gateway base URL for this environment.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://gateway.satchel.cash",
            Environment::Staging => "https://gateway.staging.satchel.cash",
        }
    }

    /// Default Bitcoin network for this environment.
    pub fn default_network(self) -> Network {
        match self {
            Environment::Production => Network::Bitcoin,
            Environment::Staging => Network::Testnet,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            _ => Err(crate::error::Error::Parse(format!(
                "Unknown environment: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Staging => write!(f, "staging"),
        }
    }
}

/// Configuration for connecting a wallet to the node gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gateway environment to connect to.
    pub environment: Environment,
    /// Bitcoin network the node operates on.
    pub network: Network,
    /// Gateway API key, sent as a bearer token on every request.
    pub api_key: String,
    /// Invite code used when registering a new node.
    pub invite_code: Option<String>,
    /// Explicit gateway base URL, overriding the environment default.
    pub base_url: Option<String>,
}

impl Config {
    /// Create a config with the environment defaults.
    pub fn new(environment: Environment, api_key: impl Into<String>) -> Self {
        Self {
            environment,
            network: environment.default_network(),
            api_key: api_key.into(),
            invite_code: None,
            base_url: None,
        }
    }

    /// Resolve the gateway base URL (override or environment default).
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.default_base_url())
    }
}
