//! Satchel wallet - Core Library
//!
//! Everything the command-line front-end needs to talk to the hosted
//! Lightning node gateway: the secrets-file loader, BIP-39 seed derivation,
//! Bitcoin address validation, the typed gateway client, and the high-level
//! [`Wallet`] facade with its event-listener surface.
//!
//! No Lightning or on-chain protocol logic lives here; the gateway owns all
//! of it, and this crate only consumes its documented request/response
//! shapes.
//!
//! # Example
//!
//! ```rust,ignore
//! use satchel_core::{Config, Environment, Secrets, Seed, Wallet};
//!
//! let secrets = Secrets::load("secrets.txt")?;
//! let seed = Seed::from_phrase(secrets.require_phrase()?)?;
//!
//! let mut config = Config::new(Environment::Production, secrets.require_api_key()?);
//! config.invite_code = secrets.invite_code.clone();
//!
//! let wallet = Wallet::connect(config, &seed).await?;
//! let balance = wallet.balance().await?;
//! ```

pub mod address;
pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod secrets;
pub mod seed;
pub mod types;
pub mod wallet;

pub use api::NodeClient;
pub use config::{Config, Environment};
pub use error::{Error, Result};
pub use event::EventListener;
pub use secrets::Secrets;
pub use seed::Seed;
pub use types::Network;
pub use wallet::{Balance, Wallet};
