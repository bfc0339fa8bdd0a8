mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lnd_gateway::{
    config::{self, ConfigError, GatewayConfig},
    Gateway, InvoiceOptions, ListInvoicesOptions, SubscriptionOptions,
};
use serde::Serialize;

/// Talk to an LND node over gRPC: node info, peers, invoices.
#[derive(Debug, Parser)]
#[command(name = "lnd-gateway", version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct ConnectionArgs {
    /// TOML config file; when given, the individual connection flags are ignored.
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,
    #[arg(long, env = config::HOST_ENV, global = true)]
    host: Option<String>,
    #[arg(long, env = config::PORT_ENV, default_value_t = config::DEFAULT_PORT, global = true)]
    port: u16,
    #[arg(long, env = config::MACAROON_PATH_ENV, global = true)]
    macaroon: Option<PathBuf>,
    #[arg(long, env = config::TLS_CERT_PATH_ENV, global = true)]
    tls_cert: Option<PathBuf>,
}

impl ConnectionArgs {
    fn into_config(self) -> Result<GatewayConfig, ConfigError> {
        if let Some(path) = self.config {
            return GatewayConfig::from_toml_file(path);
        }
        let config = GatewayConfig::new(
            self.host.ok_or(ConfigError::Missing("host"))?,
            self.port,
            self.macaroon.ok_or(ConfigError::Missing("macaroon"))?,
            self.tls_cert.ok_or(ConfigError::Missing("tls-cert"))?,
        );
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// GetInfo for the connected node.
    Info,
    /// GetNodeInfo for a peer public key (33-byte compressed, hex).
    Peer {
        pubkey: String,
        /// Also list the peer's channels.
        #[arg(long)]
        channels: bool,
    },
    /// Create an invoice. Without --value the invoice is open-amount.
    AddInvoice {
        #[arg(long, default_value_t = 0)]
        value: i64,
        #[arg(long, default_value_t = 0)]
        expiry: i64,
        #[arg(long, default_value = "")]
        memo: String,
        #[arg(long)]
        private: bool,
    },
    /// List invoices, one page or all of them.
    ListInvoices {
        #[arg(long, default_value_t = lnd_gateway::options::DEFAULT_NUM_MAX_INVOICES)]
        num_max: u64,
        #[arg(long, default_value_t = 0)]
        index_offset: u64,
        #[arg(long)]
        pending_only: bool,
        #[arg(long)]
        reversed: bool,
        /// Keep paging until the node returns an empty page.
        #[arg(long)]
        all: bool,
    },
    /// Stream invoice events as JSON lines until Ctrl-C.
    Subscribe {
        #[arg(long, default_value_t = 0)]
        add_index: u64,
        #[arg(long, default_value_t = 0)]
        settle_index: u64,
    },
    /// Decode a payment request.
    Decode { pay_req: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = cli.conn.into_config()?;
    tracing::debug!(endpoint = %config.endpoint(), "resolved configuration");
    let gateway = Gateway::from_config(&config)?;

    match cli.command {
        Command::Info => print_json(&gateway.get_node_info().await?)?,
        Command::Peer { pubkey, channels } => {
            let info = if channels {
                gateway.get_peer_info_with_channels(&pubkey).await?
            } else {
                gateway.get_peer_info(&pubkey).await?
            };
            print_json(&info)?;
        }
        Command::AddInvoice {
            value,
            expiry,
            memo,
            private,
        } => {
            let options = InvoiceOptions {
                value,
                expiry,
                memo,
                private,
            };
            print_json(&gateway.create_invoice(options).await?)?;
        }
        Command::ListInvoices {
            num_max,
            index_offset,
            pending_only,
            reversed,
            all,
        } => {
            let mut options = ListInvoicesOptions::default()
                .num_max(num_max)
                .index_offset(index_offset)
                .pending_only(pending_only)
                .reversed(reversed);
            loop {
                let page = gateway.list_invoices(options).await?;
                print_json(&page)?;
                match options.next_page(&page) {
                    Some(next) if all => options = next,
                    _ => break,
                }
            }
        }
        Command::Subscribe {
            add_index,
            settle_index,
        } => {
            let options = SubscriptionOptions {
                add_index,
                settle_index,
            };
            let stream = gateway.subscribe_invoices(options).await?;
            let cancel = stream.cancellation_token();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            });
            stream
                .for_each(|invoice| {
                    serde_json::to_string(&invoice).map(|line| println!("{line}"))
                })
                .await?;
        }
        Command::Decode { pay_req } => print_json(&gateway.decode_pay_req(&pay_req).await?)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
