//! Integration tests for manual gateway testing.
//!
//! Run with: cargo test --test integration -- --nocapture --ignored
//!
//! These expect a gateway listening on localhost with a test API key; they
//! are skipped in normal test runs.

use satchel_core::api::PaymentTypeFilter;
use satchel_core::{Config, Environment, NodeClient, Seed, Wallet};

const GATEWAY_URL: &str = "http://localhost:8080";
const API_KEY: &str = "test-key";
const TEST_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn test_config() -> Config {
    let mut config = Config::new(Environment::Staging, API_KEY);
    config.base_url = Some(GATEWAY_URL.to_string());
    config
}

async fn connect() -> Wallet {
    let seed = Seed::from_phrase(TEST_PHRASE).unwrap();
    Wallet::connect(test_config(), &seed)
        .await
        .expect("Failed to connect wallet")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = NodeClient::new(GATEWAY_URL, API_KEY);

    match client.health_check().await {
        Ok(response) => println!("Health check: {}", response),
        Err(e) => println!("Health check failed: {:#}", e),
    }
}

#[tokio::test]
#[ignore] // Run manually with: cargo test --test integration test_connect_and_node_info -- --nocapture --ignored
async fn test_connect_and_node_info() {
    let wallet = connect().await;

    let info = wallet.node_info().await.unwrap();
    println!("Node ID: {}", info.id);
    println!("Block height: {}", info.block_height);
    println!("Channels balance: {} msat", info.channels_balance_msat);
    println!("On-chain balance: {} msat", info.onchain_balance_msat);

    match wallet.lsp_info().await {
        Ok(lsp) => println!("LSP: {} ({})", lsp.name, lsp.id),
        Err(e) => println!("Error getting LSP info: {:#}", e),
    }
}

#[tokio::test]
#[ignore]
async fn test_receive_payment() {
    let wallet = connect().await;

    let response = wallet
        .receive_payment(2500, Some("integration test invoice"))
        .await
        .unwrap();
    println!("pay: {}", response.ln_invoice.bolt11);
    if let Some(fee) = response.opening_fee_msat {
        println!("channel opening fee: {} msat", fee);
    }
}

#[tokio::test]
#[ignore]
async fn test_receive_onchain() {
    let wallet = connect().await;

    let swap = wallet.receive_onchain().await.unwrap();
    println!("Bitcoin address: {}", swap.bitcoin_address);
    println!("Payment hash: {}", hex::encode(&swap.payment_hash));
    println!("Status: {}", swap.status);
}

#[tokio::test]
#[ignore]
async fn test_list_payments() {
    let wallet = connect().await;

    let payments = wallet
        .list_payments(PaymentTypeFilter::All, None, None)
        .await
        .unwrap();
    println!("{} payments:", payments.len());
    for payment in payments {
        println!(
            "  {} {} {} msat (fee {} msat) pending={}",
            payment.id, payment.payment_type, payment.amount_msat, payment.fee_msat, payment.pending
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_poll_events() {
    let wallet = connect().await;

    let events = wallet.poll_events().await.unwrap();
    for event in events {
        println!("event: {}", event);
    }
}
