//! Terminal formatting of gateway responses.
//!
//! Pure projection from response types to text; respects NO_COLOR through
//! `colored`.

use colored::Colorize;
use satchel_core::api::{
    LspInformation, NodeState, Payment, ReceivePaymentResponse, SwapInfo,
};
use satchel_core::Balance;
use time::OffsetDateTime;
use time::macros::format_description;

/// Print error (red) to stderr.
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", format!("{}", msg).red());
}

/// Print section header (cyan bold).
pub fn header(msg: &str) {
    println!("{}", msg.cyan().bold());
}

/// Print a completed action (green label).
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

fn line(label: &str, value: impl std::fmt::Display) {
    println!("  {:<28} {}", format!("{}:", label), value);
}

/// Format a timestamp for table and detail output.
pub fn format_time(ts: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    ts.format(&format)
        .unwrap_or_else(|_| ts.unix_timestamp().to_string())
}

pub fn print_node_info(node: &NodeState) {
    header("=== Node information ===");
    line("Node ID", &node.id);
    line("Block height", node.block_height);
    line("Channels balance (msat)", node.channels_balance_msat);
    line("On-chain balance (msat)", node.onchain_balance_msat);
    line("UTXOs", node.utxos);
    line("Max payable (msat)", node.max_payable_msat);
    line("Max receivable (msat)", node.max_receivable_msat);
    line(
        "Max single payment (msat)",
        node.max_single_payment_amount_msat,
    );
    line("Max channel reserve (msat)", node.max_chan_reserve_msats);
    line("Connected peers", node.connected_peers.join(", "));
    line("Inbound liquidity (msat)", node.inbound_liquidity_msats);
}

pub fn print_lsp_info(lsp: &LspInformation) {
    header("=== LSP information ===");
    line("ID", &lsp.id);
    line("Name", &lsp.name);
    line("Widget URL", &lsp.widget_url);
    line("Public key", &lsp.pubkey);
    line("Host", &lsp.host);
    line("Channel capacity", lsp.channel_capacity);
    line("Target confirmation", lsp.target_conf);
    line("Base fee (msat)", lsp.base_fee_msat);
    line("Fee rate", lsp.fee_rate);
    line("Time lock delta", lsp.time_lock_delta);
    line("Min HTLC (msat)", lsp.min_htlc_msat);
    line("Channel fee (permyriad)", lsp.channel_fee_permyriad);
    line("LSP public key", hex::encode(&lsp.lsp_pubkey));
    line("Max inactive duration", lsp.max_inactive_duration);
    line("Channel minimum fee (msat)", lsp.channel_minimum_fee_msat);
}

pub fn print_balance(balance: &Balance) {
    println!(
        "Lightning balance: {} millisatoshis, On-chain balance: {} millisatoshis",
        balance.channels_balance_msat, balance.onchain_balance_msat
    );
}

pub fn print_swap_info(swap: &SwapInfo) {
    header("=== Deposit address ===");
    line("Bitcoin address", &swap.bitcoin_address);
    line("Payment hash", hex::encode(&swap.payment_hash));
    line("Preimage", hex::encode(&swap.preimage));
    line("Private key", hex::encode(&swap.private_key));
    line("Public key", hex::encode(&swap.public_key));
    line("Script", hex::encode(&swap.script));
    line("Paid satoshis", swap.paid_sats);
    line("Unconfirmed satoshis", swap.unconfirmed_sats);
    line("Confirmed satoshis", swap.confirmed_sats);
    line("Status", swap.status);

    print_tx_id_list("Refund transaction IDs", &swap.refund_tx_ids);
    print_tx_id_list("Unconfirmed transaction IDs", &swap.unconfirmed_tx_ids);
    print_tx_id_list("Confirmed transaction IDs", &swap.confirmed_tx_ids);
}

fn print_tx_id_list(label: &str, tx_ids: &[Vec<u8>]) {
    println!("  {}:", label);
    for tx_id in tx_ids {
        println!("    - {}", hex::encode(tx_id));
    }
}

pub fn print_invoice(response: &ReceivePaymentResponse) {
    action("pay", &response.ln_invoice.bolt11);
    if let Some(fee) = response.opening_fee_msat {
        println!("A new channel will be opened; opening fee: {} msat", fee);
    }
}

pub fn print_payment(payment: &Payment) {
    header("=== Payment ===");
    line("ID", &payment.id);
    line("Type", payment.payment_type);
    line("Time", format_time(payment.payment_time));
    line("Amount (msat)", payment.amount_msat);
    line("Fee (msat)", payment.fee_msat);
    line("Pending", payment.pending);
    line("Description", payment.description.as_deref().unwrap_or("-"));
}

/// Render the payment history as a fixed-width table.
pub fn payments_table(payments: &[Payment]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<64}  {:<14}  {:<19}  {:>13}  {:>10}  {:<7}  {}\n",
        "ID", "Type", "Time", "Amount (msat)", "Fee (msat)", "Pending", "Description"
    ));
    for payment in payments {
        out.push_str(&format!(
            "{:<64}  {:<14}  {:<19}  {:>13}  {:>10}  {:<7}  {}\n",
            payment.id,
            payment.payment_type.to_string(),
            format_time(payment.payment_time),
            payment.amount_msat,
            payment.fee_msat,
            payment.pending,
            payment.description.as_deref().unwrap_or("-"),
        ));
    }
    out
}

pub fn print_payments(payments: &[Payment]) {
    if payments.is_empty() {
        println!("No payments found.");
        return;
    }
    print!("{}", payments_table(payments));
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::api::PaymentType;
    use time::macros::datetime;

    fn sample_payment() -> Payment {
        Payment {
            id: "6ad7".to_string(),
            payment_type: PaymentType::Received,
            payment_time: datetime!(2023-11-14 22:13:20 UTC),
            amount_msat: 2_500_000,
            fee_msat: 0,
            pending: false,
            description: Some("coffee".to_string()),
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(
            format_time(datetime!(2023-11-14 22:13:20 UTC)),
            "2023-11-14 22:13:20"
        );
    }

    #[test]
    fn test_payments_table_contains_fields() {
        let table = payments_table(&[sample_payment()]);

        let mut lines = table.lines();
        let heading = lines.next().unwrap();
        assert!(heading.contains("Amount (msat)"));

        let row = lines.next().unwrap();
        assert!(row.contains("6ad7"));
        assert!(row.contains("Received"));
        assert!(row.contains("2023-11-14 22:13:20"));
        assert!(row.contains("2500000"));
        assert!(row.contains("coffee"));
    }

    #[test]
    fn test_payments_table_handles_missing_description() {
        let mut payment = sample_payment();
        payment.description = None;
        let table = payments_table(&[payment]);
        assert!(table.lines().nth(1).unwrap().trim_end().ends_with('-'));
    }
}
