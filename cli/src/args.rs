//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use satchel_core::api::PaymentTypeFilter;
use satchel_core::{Environment, Network};
use std::path::PathBuf;

/// Command-line wallet for a hosted Lightning node.
#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the secrets file
    #[arg(short, long, global = true, default_value = "secrets.txt")]
    pub secrets: PathBuf,

    /// Gateway environment
    #[arg(short, long, global = true, default_value = "production")]
    pub environment: Environment,

    /// Bitcoin network (default: the environment's network)
    #[arg(short, long, global = true)]
    pub network: Option<Network>,

    /// Override the gateway base URL
    #[arg(long, global = true)]
    pub gateway_url: Option<String>,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node and LSP information
    Info,

    /// Show Lightning and on-chain balances
    Balance,

    /// Sync the node with the chain
    Sync,

    /// Get an on-chain deposit address (swap-in)
    DepositAddress,

    /// Sweep on-chain funds to an address
    SendFunds {
        /// Destination Bitcoin address
        address: String,
        /// Fee rate in sat/vB (gateway estimates one when omitted)
        #[arg(long)]
        sat_per_vbyte: Option<u32>,
    },

    /// Create a Lightning invoice (off-chain receive)
    Invoice {
        /// Amount in satoshis
        amount: u64,
        /// Optional invoice description
        #[arg(short, long)]
        memo: Option<String>,
    },

    /// Pay a BOLT-11 Lightning invoice
    PayInvoice {
        /// The invoice to pay
        bolt11: String,
        /// Amount in millisatoshis, for zero-amount invoices only
        #[arg(long)]
        amount_msat: Option<u64>,
    },

    /// Send a spontaneous (keysend) payment to a node
    SendSpontaneous {
        /// Destination node public key
        node_id: String,
        /// Amount in millisatoshis
        amount_msat: u64,
    },

    /// Pay to an LNURL-pay endpoint or Lightning address
    LnurlPay {
        /// LNURL string or Lightning address
        lnurl: String,
        /// Amount in millisatoshis
        amount_msat: u64,
        /// Optional comment forwarded to the payee
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Withdraw from an LNURL-withdraw voucher
    LnurlWithdraw {
        /// LNURL string
        lnurl: String,
        /// Amount in millisatoshis (voucher maximum when omitted)
        #[arg(long)]
        amount_msat: Option<u64>,
    },

    /// List payment history
    ListPayments {
        /// Payment type filter: all, sent, received, closed_channel
        #[arg(long, default_value = "all")]
        filter: PaymentTypeFilter,
        /// Earliest unix timestamp to include
        #[arg(long)]
        from: Option<i64>,
        /// Latest unix timestamp to include
        #[arg(long)]
        to: Option<i64>,
    },

    /// Check gateway connectivity
    Ping,

    /// Print a fresh BIP-39 recovery phrase (nothing is written anywhere)
    GeneratePhrase {
        /// Number of words (12, 15, 18, 21, or 24)
        #[arg(long, default_value_t = 12)]
        words: usize,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invoice_command() {
        let cli = Cli::parse_from(["satchel", "invoice", "2500", "--memo", "coffee"]);
        match cli.command {
            Some(Commands::Invoice { amount, memo }) => {
                assert_eq!(amount, 2500);
                assert_eq!(memo.as_deref(), Some("coffee"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "satchel",
            "--environment",
            "staging",
            "--network",
            "regtest",
            "-dd",
            "balance",
        ]);
        assert_eq!(cli.environment, Environment::Staging);
        assert_eq!(cli.network, Some(Network::Regtest));
        assert_eq!(cli.debug, 2);
    }

    #[test]
    fn test_parse_list_payments_filter() {
        let cli = Cli::parse_from(["satchel", "list-payments", "--filter", "sent"]);
        match cli.command {
            Some(Commands::ListPayments { filter, .. }) => {
                assert_eq!(filter, PaymentTypeFilter::Sent);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
