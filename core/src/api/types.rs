//! API types for the node gateway.
//!
//! These types match the gateway API schema and are used for request/response
//! serialization. They are consumed as documented shapes only; none of the
//! Lightning semantics behind them live in this crate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;

/// Serde module for serializing byte vectors as hex strings.
mod hex_bytes {
    use super::*;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Same as [`hex_bytes`] but for a list of byte vectors (transaction ids).
mod hex_bytes_vec {
    use super::*;

    pub fn serialize<S>(items: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(items.iter().map(hex::encode))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .into_iter()
            .map(|s| hex::decode(&s).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// State of the hosted node, as reported by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeState {
    /// Node public key (hex).
    pub id: String,
    /// Current block height the node is synced to.
    pub block_height: u32,
    /// Balance held in Lightning channels.
    pub channels_balance_msat: u64,
    /// Balance held on-chain.
    pub onchain_balance_msat: u64,
    /// Number of unspent on-chain outputs.
    pub utxos: u32,
    /// Largest amount payable given current channel liquidity.
    pub max_payable_msat: u64,
    /// Largest amount receivable given current inbound liquidity.
    pub max_receivable_msat: u64,
    /// Largest single payment the node will attempt.
    pub max_single_payment_amount_msat: u64,
    /// Total channel reserve the node must keep.
    pub max_chan_reserve_msats: u64,
    /// Peer ids the node is currently connected to.
    pub connected_peers: Vec<String>,
    /// Inbound liquidity across all channels.
    pub inbound_liquidity_msats: u64,
}

/// Information about the node's Lightning service provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LspInformation {
    pub id: String,
    pub name: String,
    pub widget_url: String,
    pub pubkey: String,
    pub host: String,
    pub channel_capacity: i64,
    pub target_conf: i32,
    pub base_fee_msat: i64,
    pub fee_rate: f64,
    pub time_lock_delta: u32,
    pub min_htlc_msat: i64,
    pub channel_fee_permyriad: i64,
    #[serde(with = "hex_bytes")]
    pub lsp_pubkey: Vec<u8>,
    pub max_inactive_duration: i64,
    pub channel_minimum_fee_msat: i64,
}

/// Direction of a completed or pending payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Sent,
    Received,
    ClosedChannel,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentType::Sent => write!(f, "Sent"),
            PaymentType::Received => write!(f, "Received"),
            PaymentType::ClosedChannel => write!(f, "Closed channel"),
        }
    }
}

/// Filter for listing payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTypeFilter {
    All,
    Sent,
    Received,
    ClosedChannel,
}

impl std::str::FromStr for PaymentTypeFilter {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(PaymentTypeFilter::All),
            "sent" => Ok(PaymentTypeFilter::Sent),
            "received" => Ok(PaymentTypeFilter::Received),
            "closed_channel" | "closed-channel" => Ok(PaymentTypeFilter::ClosedChannel),
            _ => Err(crate::error::Error::Parse(format!(
                "Unknown payment filter: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for PaymentTypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentTypeFilter::All => write!(f, "all"),
            PaymentTypeFilter::Sent => write!(f, "sent"),
            PaymentTypeFilter::Received => write!(f, "received"),
            PaymentTypeFilter::ClosedChannel => write!(f, "closed_channel"),
        }
    }
}

/// A single entry in the node's payment history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Payment id (payment hash for Lightning payments).
    pub id: String,
    pub payment_type: PaymentType,
    /// Unix timestamp of the payment.
    #[serde(with = "time::serde::timestamp")]
    pub payment_time: OffsetDateTime,
    pub amount_msat: u64,
    pub fee_msat: u64,
    pub pending: bool,
    pub description: Option<String>,
}

/// A decoded BOLT-11 invoice issued by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LnInvoice {
    pub bolt11: String,
    pub payment_hash: String,
    pub description: Option<String>,
    pub amount_msat: Option<u64>,
    /// Invoice expiry in seconds.
    pub expiry: u64,
    /// Unix timestamp of invoice creation.
    #[serde(with = "time::serde::timestamp")]
    pub timestamp: OffsetDateTime,
}

/// Request to issue an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivePaymentRequest {
    pub amount_msat: u64,
    pub description: String,
}

/// Response to an invoice request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivePaymentResponse {
    pub ln_invoice: LnInvoice,
    /// Fee the LSP charges for a new channel, if one must be opened to
    /// receive this amount.
    pub opening_fee_msat: Option<u64>,
}

/// Request to pay a BOLT-11 invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPaymentRequest {
    pub bolt11: String,
    /// Amount for zero-amount invoices; must be absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_msat: Option<u64>,
}

/// Request to send a spontaneous (keysend) payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendSpontaneousPaymentRequest {
    pub node_id: String,
    pub amount_msat: u64,
}

/// Response to any payment-sending request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPaymentResponse {
    pub payment: Payment,
}

/// Status of an on-chain deposit swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    Initial,
    WaitingConfirmation,
    Redeemable,
    Redeemed,
    Refundable,
    Expired,
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapStatus::Initial => write!(f, "initial"),
            SwapStatus::WaitingConfirmation => write!(f, "waiting_confirmation"),
            SwapStatus::Redeemable => write!(f, "redeemable"),
            SwapStatus::Redeemed => write!(f, "redeemed"),
            SwapStatus::Refundable => write!(f, "refundable"),
            SwapStatus::Expired => write!(f, "expired"),
        }
    }
}

/// An on-chain deposit swap created by the gateway.
///
/// Funds sent to `bitcoin_address` are swapped into the node's Lightning
/// balance once confirmed. The hash/preimage/script fields describe the swap
/// contract the gateway manages; they are surfaced for display and manual
/// recovery only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapInfo {
    pub bitcoin_address: String,
    #[serde(with = "hex_bytes")]
    pub payment_hash: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub preimage: Vec<u8>,
    /// Refund key for the swap contract; needed for manual recovery, so it
    /// is surfaced to the owner like every other field.
    #[serde(with = "hex_bytes")]
    pub private_key: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub public_key: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub script: Vec<u8>,
    pub paid_sats: u64,
    pub unconfirmed_sats: u64,
    pub confirmed_sats: u64,
    pub status: SwapStatus,
    #[serde(with = "hex_bytes_vec")]
    pub refund_tx_ids: Vec<Vec<u8>>,
    #[serde(with = "hex_bytes_vec")]
    pub unconfirmed_tx_ids: Vec<Vec<u8>>,
    #[serde(with = "hex_bytes_vec")]
    pub confirmed_tx_ids: Vec<Vec<u8>>,
}

/// Request to sweep on-chain funds to an external address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemOnchainRequest {
    pub to_address: String,
    /// Fee rate; the gateway estimates one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_per_vbyte: Option<u32>,
}

/// Response to an on-chain sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemOnchainResponse {
    pub txid: String,
}

/// Request to pay through an LNURL-pay endpoint or Lightning address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LnUrlPayRequest {
    pub lnurl: String,
    pub amount_msat: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Outcome of an LNURL-pay flow. All callback handling is server-side; the
/// gateway reports only the terminal result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LnUrlPayResult {
    Ok {
        payment_hash: String,
        success_message: Option<String>,
    },
    Error {
        reason: String,
    },
}

/// Request to withdraw from an LNURL-withdraw voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LnUrlWithdrawRequest {
    pub lnurl: String,
    /// Amount to withdraw; the voucher maximum is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_msat: Option<u64>,
}

/// Outcome of an LNURL-withdraw flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LnUrlWithdrawResult {
    Ok { invoice: LnInvoice },
    Error { reason: String },
}

/// Request to register this wallet's node identity with the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterNodeRequest {
    pub node_pubkey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

/// Response to node registration. Registering an already-known pubkey
/// returns the existing node id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterNodeResponse {
    pub node_id: String,
}

/// Event emitted by the node, delivered through the gateway's event cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeEvent {
    InvoicePaid {
        payment_hash: String,
        bolt11: String,
    },
    PaymentSucceeded {
        payment: Payment,
    },
    PaymentFailed {
        error: String,
        bolt11: Option<String>,
    },
    Synced,
    NewBlock {
        block: u32,
    },
}

impl std::fmt::Display for NodeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeEvent::InvoicePaid { payment_hash, .. } => {
                write!(f, "invoice paid ({})", payment_hash)
            }
            NodeEvent::PaymentSucceeded { payment } => {
                write!(f, "payment succeeded ({} msat)", payment.amount_msat)
            }
            NodeEvent::PaymentFailed { error, .. } => write!(f, "payment failed: {}", error),
            NodeEvent::Synced => write!(f, "node synced"),
            NodeEvent::NewBlock { block } => write!(f, "new block {}", block),
        }
    }
}

/// A batch of events starting at a cursor position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<NodeEvent>,
    /// Cursor to pass on the next poll.
    pub next_cursor: u64,
}

/// Error body returned by the gateway for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
