//! relayd — multi-client line-broadcast server.
//!
//! Clients connect over TCP and send newline-delimited text; every line
//! is relayed to all other connected clients as `<sender-addr> >> <line>`.
//!
//! Usage:
//!   relayd                           # listen on 127.0.0.1:7575
//!   relayd --addr 0.0.0.0:9000      # custom listen address
//!   relayd --max-clients 64          # cap concurrent clients

use clap::Parser;
use relay_server::{RelayConfig, RelayServer};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "relayd", about = "Line-broadcast relay server")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:7575")]
    addr: String,

    /// Maximum concurrent clients (unlimited if not set)
    #[arg(long)]
    max_clients: Option<usize>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = RelayConfig {
        addr: cli.addr.clone(),
        max_clients: cli.max_clients,
    };

    let server = match RelayServer::bind(config).await {
        Ok(s) => s,
        Err(e) => {
            error!("failed to bind on {}: {e}", cli.addr);
            std::process::exit(1);
        }
    };

    println!();
    println!("  relayd — line-broadcast relay");
    println!();
    println!("  Listening:   {}", server.local_addr());
    match cli.max_clients {
        Some(max) => println!("  Max clients: {max}"),
        None => println!("  Max clients: unlimited"),
    }
    println!();
    println!("  Press Ctrl+C to stop.");
    println!();

    tokio::select! {
        result = server.run() => {
            // Only an accept failure ends the loop; that is process-fatal.
            if let Err(e) = result {
                error!("accept loop failed: {e}");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("  Shutting down.");
        }
    }
}
