//! High-level wallet facade over the node gateway.
//!
//! [`Wallet`] pairs the gateway client with the seed-derived node identity
//! and exposes one method per node operation. It holds no wallet state of its
//! own; every query and mutation is a pass-through call to the gateway.

use crate::address;
use crate::api::{
    self, LnUrlPayRequest, LnUrlPayResult, LnUrlWithdrawRequest, LnUrlWithdrawResult, NodeClient,
    NodeEvent, Payment, PaymentTypeFilter, ReceivePaymentRequest, ReceivePaymentResponse,
    RedeemOnchainRequest, RegisterNodeRequest, SendPaymentRequest, SendSpontaneousPaymentRequest,
    SwapInfo,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{EventListener, ListenerRegistry};
use crate::seed::Seed;
use std::sync::Mutex;

/// Channel and on-chain balances, projected from the node state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    /// Balance held in Lightning channels.
    pub channels_balance_msat: u64,
    /// Balance held on-chain.
    pub onchain_balance_msat: u64,
}

impl Balance {
    /// Total balance across both layers.
    pub fn total_msat(&self) -> u64 {
        self.channels_balance_msat
            .saturating_add(self.onchain_balance_msat)
    }
}

/// A connected wallet session against the node gateway.
pub struct Wallet {
    node: NodeClient,
    config: Config,
    node_pubkey: String,
    listeners: ListenerRegistry,
    event_cursor: Mutex<u64>,
}

impl Wallet {
    /// Connect the wallet: derive the node identity from the seed and
    /// register it with the gateway.
    ///
    /// Registration is idempotent; reconnecting an existing node succeeds and
    /// resolves to the same node id.
    pub async fn connect(config: Config, seed: &Seed) -> Result<Wallet> {
        let node = NodeClient::new(config.base_url(), &config.api_key);
        let node_pubkey = seed.node_pubkey(config.network)?;

        let registration = node
            .register_node(&RegisterNodeRequest {
                node_pubkey: node_pubkey.clone(),
                invite_code: config.invite_code.clone(),
            })
            .await?;
        log::info!(
            "connected to {} as node {}",
            node.base_url(),
            registration.node_id
        );

        Ok(Wallet {
            node,
            config,
            node_pubkey,
            listeners: ListenerRegistry::new(),
            event_cursor: Mutex::new(0),
        })
    }

    /// The wallet configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The node-identity public key (hex).
    pub fn node_pubkey(&self) -> &str {
        &self.node_pubkey
    }

    /// The underlying gateway client, for operations not wrapped here.
    pub fn node_client(&self) -> &NodeClient {
        &self.node
    }

    /// Ask the node to sync with the chain.
    pub async fn sync(&self) -> Result<()> {
        self.node.sync().await
    }

    /// Current node state.
    pub async fn node_info(&self) -> Result<api::NodeState> {
        self.node.node_info().await
    }

    /// Information about the node's LSP (id lookup plus detail fetch).
    pub async fn lsp_info(&self) -> Result<api::LspInformation> {
        let lsp_id = self.node.lsp_id().await?;
        self.node.fetch_lsp_info(&lsp_id).await
    }

    /// Channel and on-chain balances.
    pub async fn balance(&self) -> Result<Balance> {
        let info = self.node.node_info().await?;
        Ok(Balance {
            channels_balance_msat: info.channels_balance_msat,
            onchain_balance_msat: info.onchain_balance_msat,
        })
    }

    /// Create an on-chain deposit swap and return its address and state.
    pub async fn receive_onchain(&self) -> Result<SwapInfo> {
        self.node.receive_onchain().await
    }

    /// Sweep on-chain funds to `to_address`.
    ///
    /// The address is validated locally against the configured network before
    /// anything is sent to the gateway.
    pub async fn redeem_onchain(
        &self,
        to_address: &str,
        sat_per_vbyte: Option<u32>,
    ) -> Result<String> {
        let address = address::validate_address(to_address, self.config.network)?;
        let response = self
            .node
            .redeem_onchain(&RedeemOnchainRequest {
                to_address: address.to_string(),
                sat_per_vbyte,
            })
            .await?;
        Ok(response.txid)
    }

    /// Issue an invoice for `amount_sat` satoshis.
    ///
    /// `description` falls back to a generated one when absent.
    pub async fn receive_payment(
        &self,
        amount_sat: u64,
        description: Option<&str>,
    ) -> Result<ReceivePaymentResponse> {
        if amount_sat == 0 {
            return Err(Error::InvalidAmount(
                "invoice amount must be greater than zero".to_string(),
            ));
        }

        let description = match description {
            Some(memo) => memo.to_string(),
            None => format!("Invoice for {} sats", amount_sat),
        };

        self.node
            .receive_payment(&ReceivePaymentRequest {
                amount_msat: amount_sat * 1000,
                description,
            })
            .await
    }

    /// Pay a BOLT-11 invoice. `amount_msat` is only for zero-amount invoices.
    pub async fn send_payment(&self, bolt11: &str, amount_msat: Option<u64>) -> Result<Payment> {
        let response = self
            .node
            .send_payment(&SendPaymentRequest {
                bolt11: bolt11.trim().to_string(),
                amount_msat,
            })
            .await?;
        Ok(response.payment)
    }

    /// Send a spontaneous (keysend) payment to `node_id`.
    pub async fn send_spontaneous_payment(
        &self,
        node_id: &str,
        amount_msat: u64,
    ) -> Result<Payment> {
        if amount_msat == 0 {
            return Err(Error::InvalidAmount(
                "payment amount must be greater than zero".to_string(),
            ));
        }

        let response = self
            .node
            .send_spontaneous_payment(&SendSpontaneousPaymentRequest {
                node_id: node_id.to_string(),
                amount_msat,
            })
            .await?;
        Ok(response.payment)
    }

    /// Pay through an LNURL-pay endpoint or Lightning address.
    pub async fn lnurl_pay(
        &self,
        lnurl: &str,
        amount_msat: u64,
        comment: Option<String>,
    ) -> Result<LnUrlPayResult> {
        self.node
            .lnurl_pay(&LnUrlPayRequest {
                lnurl: lnurl.trim().to_string(),
                amount_msat,
                comment,
            })
            .await
    }

    /// Withdraw from an LNURL-withdraw voucher.
    pub async fn lnurl_withdraw(
        &self,
        lnurl: &str,
        amount_msat: Option<u64>,
    ) -> Result<LnUrlWithdrawResult> {
        self.node
            .lnurl_withdraw(&LnUrlWithdrawRequest {
                lnurl: lnurl.trim().to_string(),
                amount_msat,
            })
            .await
    }

    /// List payment history, optionally bounded by unix timestamps.
    pub async fn list_payments(
        &self,
        filter: PaymentTypeFilter,
        from_timestamp: Option<i64>,
        to_timestamp: Option<i64>,
    ) -> Result<Vec<Payment>> {
        self.node
            .list_payments(filter, from_timestamp, to_timestamp)
            .await
    }

    /// Register an event listener. Returns its id for later removal.
    pub fn add_event_listener(&self, listener: Box<dyn EventListener>) -> String {
        self.listeners.add(listener)
    }

    /// Remove a previously registered event listener.
    pub fn remove_event_listener(&self, id: &str) -> bool {
        self.listeners.remove(id)
    }

    /// Fetch new node events, dispatch them to every registered listener, and
    /// return them.
    pub async fn poll_events(&self) -> Result<Vec<NodeEvent>> {
        let cursor = *self.event_cursor.lock().expect("event cursor poisoned");
        let batch = self.node.poll_events(cursor).await?;
        *self.event_cursor.lock().expect("event cursor poisoned") = batch.next_cursor;

        self.listeners.dispatch(&batch.events);
        Ok(batch.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn offline_wallet() -> Wallet {
        // No request is made until an async operation runs, so an unroutable
        // gateway is fine for argument-validation tests.
        let config = Config::new(Environment::Staging, "test-key");
        Wallet {
            node: NodeClient::new("http://localhost:0", "test-key"),
            config,
            node_pubkey: "02aa".to_string(),
            listeners: ListenerRegistry::new(),
            event_cursor: Mutex::new(0),
        }
    }

    #[tokio::test]
    async fn test_receive_payment_rejects_zero_amount() {
        let wallet = offline_wallet();
        assert!(matches!(
            wallet.receive_payment(0, None).await,
            Err(Error::InvalidAmount(_))
        ));
    }

    #[tokio::test]
    async fn test_spontaneous_payment_rejects_zero_amount() {
        let wallet = offline_wallet();
        assert!(matches!(
            wallet.send_spontaneous_payment("02bb", 0).await,
            Err(Error::InvalidAmount(_))
        ));
    }

    #[tokio::test]
    async fn test_redeem_onchain_rejects_bad_address() {
        let wallet = offline_wallet();
        // Mainnet address, wallet configured for testnet.
        assert!(matches!(
            wallet
                .redeem_onchain("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4", None)
                .await,
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_balance_total_saturates() {
        let balance = Balance {
            channels_balance_msat: u64::MAX,
            onchain_balance_msat: 1,
        };
        assert_eq!(balance.total_msat(), u64::MAX);
    }
}
