//! Command dispatch.
//!
//! Each invocation runs exactly one command: load secrets, connect the
//! wallet, call the matching gateway operation, format the response. After a
//! state-changing operation the event cursor is polled once so node
//! notifications reach the terminal.

use crate::args::{Cli, Commands};
use crate::output;
use anyhow::{Context, Result};
use clap::CommandFactory;
use satchel_core::api::NodeEvent;
use satchel_core::{Config, EventListener, NodeClient, Secrets, Seed, Wallet};
use std::io;

/// Listener that prints every node event as it is dispatched.
struct PrintEventListener;

impl EventListener for PrintEventListener {
    fn on_event(&self, event: &NodeEvent) {
        println!("event: {}", event);
    }
}

pub async fn execute(cli: &Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Commands that need no wallet connection.
    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        Commands::GeneratePhrase { words } => {
            let (phrase, _) = Seed::generate(*words)?;
            println!("{}", phrase);
            println!("Write it down and add it to your secrets file as `phrase: ...`.");
            return Ok(());
        }
        Commands::Ping => {
            let config = load_config(cli)?;
            let node = NodeClient::new(config.base_url(), &config.api_key);
            let status = node.health_check().await?;
            output::action("gateway", &status);
            return Ok(());
        }
        _ => {}
    }

    let wallet = connect(cli).await?;
    wallet.add_event_listener(Box::new(PrintEventListener));

    match command {
        Commands::Info => {
            let info = wallet.node_info().await?;
            output::print_node_info(&info);

            // LSP details are informational; failure to fetch them must not
            // fail the whole command.
            match wallet.lsp_info().await {
                Ok(lsp) => output::print_lsp_info(&lsp),
                Err(e) => output::error(&format!("Error getting LSP info: {:#}", e)),
            }
        }
        Commands::Balance => {
            let balance = wallet.balance().await?;
            output::print_balance(&balance);
        }
        Commands::Sync => {
            wallet.sync().await?;
            output::action("sync", &"node synced");
        }
        Commands::DepositAddress => {
            let swap = wallet.receive_onchain().await?;
            output::print_swap_info(&swap);
        }
        Commands::SendFunds {
            address,
            sat_per_vbyte,
        } => {
            let txid = wallet.redeem_onchain(address, *sat_per_vbyte).await?;
            output::action("txid", &txid);
            output::action("payout address", address);
        }
        Commands::Invoice { amount, memo } => {
            log::info!("getting invoice for {} sats", amount);
            let response = wallet.receive_payment(*amount, memo.as_deref()).await?;
            output::print_invoice(&response);
        }
        Commands::PayInvoice {
            bolt11,
            amount_msat,
        } => {
            let payment = wallet.send_payment(bolt11, *amount_msat).await?;
            output::print_payment(&payment);
        }
        Commands::SendSpontaneous {
            node_id,
            amount_msat,
        } => {
            let payment = wallet
                .send_spontaneous_payment(node_id, *amount_msat)
                .await?;
            output::print_payment(&payment);
        }
        Commands::LnurlPay {
            lnurl,
            amount_msat,
            comment,
        } => {
            let result = wallet
                .lnurl_pay(lnurl, *amount_msat, comment.clone())
                .await?;
            match result {
                satchel_core::api::LnUrlPayResult::Ok {
                    payment_hash,
                    success_message,
                } => {
                    output::action("paid", &payment_hash);
                    if let Some(message) = success_message {
                        println!("{}", message);
                    }
                }
                satchel_core::api::LnUrlPayResult::Error { reason } => {
                    anyhow::bail!("LNURL-pay failed: {}", reason);
                }
            }
        }
        Commands::LnurlWithdraw { lnurl, amount_msat } => {
            let result = wallet.lnurl_withdraw(lnurl, *amount_msat).await?;
            match result {
                satchel_core::api::LnUrlWithdrawResult::Ok { invoice } => {
                    output::action("withdrawing to", &invoice.bolt11);
                }
                satchel_core::api::LnUrlWithdrawResult::Error { reason } => {
                    anyhow::bail!("LNURL-withdraw failed: {}", reason);
                }
            }
        }
        Commands::ListPayments { filter, from, to } => {
            let payments = wallet.list_payments(*filter, *from, *to).await?;
            output::print_payments(&payments);
        }
        // Handled above.
        Commands::Completion { .. } | Commands::GeneratePhrase { .. } | Commands::Ping => {
            unreachable!()
        }
    }

    // Events are best-effort notifications; a failed poll is logged, not fatal.
    if let Err(e) = wallet.poll_events().await {
        log::debug!("event poll failed: {:#}", e);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let secrets = Secrets::load(&cli.secrets)
        .with_context(|| format!("loading secrets from {}", cli.secrets.display()))?;
    build_config(cli, &secrets)
}

fn build_config(cli: &Cli, secrets: &Secrets) -> Result<Config> {
    let mut config = Config::new(cli.environment, secrets.require_api_key()?);
    if let Some(network) = cli.network {
        config.network = network;
    }
    config.invite_code = secrets.invite_code.clone();
    config.base_url = cli.gateway_url.clone();
    Ok(config)
}

async fn connect(cli: &Cli) -> Result<Wallet> {
    let secrets = Secrets::load(&cli.secrets)
        .with_context(|| format!("loading secrets from {}", cli.secrets.display()))?;
    let config = build_config(cli, &secrets)?;

    let seed = match &secrets.seed {
        Some(bytes) => Seed::try_from(bytes.as_slice())?,
        None => Seed::from_phrase(secrets.require_phrase()?)?,
    };

    let wallet = Wallet::connect(config, &seed)
        .await
        .context("connecting to the node gateway")?;
    Ok(wallet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use satchel_core::{Environment, Network};
    use std::io::Write;

    fn secrets() -> Secrets {
        Secrets::parse("api_key: sk_test\ninvite_code: beta-1\n").unwrap()
    }

    #[test]
    fn test_build_config_applies_cli_overrides() {
        let cli = Cli::parse_from([
            "satchel",
            "--environment",
            "staging",
            "--network",
            "regtest",
            "--gateway-url",
            "http://localhost:8080",
            "balance",
        ]);

        let config = build_config(&cli, &secrets()).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.network, Network::Regtest);
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.api_key, "sk_test");
        assert_eq!(config.invite_code.as_deref(), Some("beta-1"));
    }

    #[test]
    fn test_build_config_requires_api_key() {
        let cli = Cli::parse_from(["satchel", "balance"]);
        let empty = Secrets::default();
        assert!(build_config(&cli, &empty).is_err());
    }

    #[test]
    fn test_load_config_reads_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: sk_file").unwrap();

        let cli = Cli::parse_from([
            "satchel",
            "--secrets",
            file.path().to_str().unwrap(),
            "ping",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.api_key, "sk_file");
    }
}
