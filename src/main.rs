//! yetibook entry point
//!
//! Parses CLI flags, initializes logging, and starts the HTTP server.
//! All application logic lives in the library modules.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yetibook::http_server::{HttpServer, HttpServerConfig};

#[derive(Debug, Parser)]
#[command(name = "yetibook", version, about = "A minimal yeti directory")]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = HttpServerConfig {
        host: args.host,
        port: args.port,
        ..Default::default()
    };

    if let Err(e) = HttpServer::with_config(config).start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
