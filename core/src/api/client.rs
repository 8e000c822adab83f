//! HTTP client for the node gateway API.

use crate::error::{Error, Result};

use super::types::*;

/// Node gateway API client.
///
/// One method per gateway endpoint; every request carries the API key as a
/// bearer token. This client holds no state beyond the connection pool.
#[derive(Debug, Clone)]
pub struct NodeClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl NodeClient {
    /// Create a new gateway client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the gateway (e.g., "https://gateway.satchel.cash")
    /// * `api_key` - API key sent as a bearer token
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Health check endpoint.
    pub async fn health_check(&self) -> Result<String> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to connect to {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Health check failed: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))
    }

    /// Register the wallet's node identity. Idempotent for known pubkeys.
    pub async fn register_node(
        &self,
        request: &RegisterNodeRequest,
    ) -> Result<RegisterNodeResponse> {
        let url = format!("{}/node/register", self.base_url);
        self.post_json(&url, request).await
    }

    /// Get the current node state.
    pub async fn node_info(&self) -> Result<NodeState> {
        let url = format!("{}/node/info", self.base_url);
        self.get_json(&url).await
    }

    /// Get the id of the LSP the node is paired with.
    pub async fn lsp_id(&self) -> Result<String> {
        let url = format!("{}/lsp/id", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch details for an LSP by id.
    pub async fn fetch_lsp_info(&self, id: &str) -> Result<LspInformation> {
        let url = format!("{}/lsp/{}", self.base_url, id);
        self.get_json(&url).await
    }

    /// Issue a BOLT-11 invoice.
    pub async fn receive_payment(
        &self,
        request: &ReceivePaymentRequest,
    ) -> Result<ReceivePaymentResponse> {
        let url = format!("{}/invoices", self.base_url);
        self.post_json(&url, request).await
    }

    /// Create an on-chain deposit swap and return its address.
    pub async fn receive_onchain(&self) -> Result<SwapInfo> {
        let url = format!("{}/onchain/receive", self.base_url);
        self.post_json(&url, &serde_json::json!({})).await
    }

    /// Sweep on-chain funds to an external address.
    pub async fn redeem_onchain(
        &self,
        request: &RedeemOnchainRequest,
    ) -> Result<RedeemOnchainResponse> {
        let url = format!("{}/onchain/redeem", self.base_url);
        self.post_json(&url, request).await
    }

    /// Pay a BOLT-11 invoice.
    pub async fn send_payment(&self, request: &SendPaymentRequest) -> Result<SendPaymentResponse> {
        let url = format!("{}/payments", self.base_url);
        self.post_json(&url, request).await
    }

    /// Send a spontaneous (keysend) payment.
    pub async fn send_spontaneous_payment(
        &self,
        request: &SendSpontaneousPaymentRequest,
    ) -> Result<SendPaymentResponse> {
        let url = format!("{}/payments/spontaneous", self.base_url);
        self.post_json(&url, request).await
    }

    /// Run an LNURL-pay flow to completion.
    pub async fn lnurl_pay(&self, request: &LnUrlPayRequest) -> Result<LnUrlPayResult> {
        let url = format!("{}/lnurl/pay", self.base_url);
        self.post_json(&url, request).await
    }

    /// Run an LNURL-withdraw flow to completion.
    pub async fn lnurl_withdraw(
        &self,
        request: &LnUrlWithdrawRequest,
    ) -> Result<LnUrlWithdrawResult> {
        let url = format!("{}/lnurl/withdraw", self.base_url);
        self.post_json(&url, request).await
    }

    /// List payment history, optionally bounded by unix timestamps.
    pub async fn list_payments(
        &self,
        filter: PaymentTypeFilter,
        from_timestamp: Option<i64>,
        to_timestamp: Option<i64>,
    ) -> Result<Vec<Payment>> {
        let mut url = format!("{}/payments?filter={}", self.base_url, filter);
        if let Some(from) = from_timestamp {
            url.push_str(&format!("&from_timestamp={}", from));
        }
        if let Some(to) = to_timestamp {
            url.push_str(&format!("&to_timestamp={}", to));
        }
        self.get_json(&url).await
    }

    /// Ask the node to sync with the chain.
    pub async fn sync(&self) -> Result<()> {
        let url = format!("{}/node/sync", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError {
                error: "Unknown error".to_string(),
            });
            return Err(Error::Api(error.error));
        }

        Ok(())
    }

    /// Fetch node events past `cursor`.
    pub async fn poll_events(&self, cursor: u64) -> Result<EventBatch> {
        let url = format!("{}/events?cursor={}", self.base_url, cursor);
        self.get_json(&url).await
    }

    // Helper methods

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to send request to {}: {}", url, e)))?;

        if !response.status().is_success() {
            let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError {
                error: "Unknown error".to_string(),
            });
            return Err(Error::Api(error.error));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))?;

        log::debug!("GET {} response: {}", url, text);

        serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {}. Body: {}", e, text)))
    }

    async fn post_json<T: serde::de::DeserializeOwned, R: serde::Serialize>(
        &self,
        url: &str,
        body: &R,
    ) -> Result<T> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to send request to {}: {}", url, e)))?;

        if !response.status().is_success() {
            let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError {
                error: "Unknown error".to_string(),
            });
            return Err(Error::Api(error.error));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))?;

        log::debug!("POST {} response: {}", url, text);

        serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {}. Body: {}", e, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = NodeClient::new("http://localhost:8080/", "key");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[ignore]
    #[tokio::test]
    async fn manual_gateway_checks() {
        let client = NodeClient::new("http://localhost:8080", "test-key");

        client.health_check().await.unwrap();
        client.node_info().await.unwrap();
        client
            .list_payments(PaymentTypeFilter::All, None, None)
            .await
            .unwrap();
    }
}
