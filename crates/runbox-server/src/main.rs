//! Binary entry point for the runbox API server.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use runbox_client::PistonClient;
use runbox_core::RunnerConfig;
use runbox_server::{shutdown_signal, RunboxServer, ServerConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Runbox server - browse languages and run code remotely")]
struct Cli {
    #[clap(long, default_value = "127.0.0.1:3000")]
    bind_addr: String,

    #[clap(
        long,
        help = "Base URL of the Piston-compatible execution API (defaults to the public instance, RUNBOX_API_URL also honored)"
    )]
    api_url: Option<String>,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(long, help = "Disable CORS headers")]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let mut runner_config = RunnerConfig::from_env();
    if let Some(url) = cli.api_url {
        runner_config = runner_config.with_base_url(url);
    }
    log::info!("Using execution API at {}", runner_config.base_url);

    let server_config = ServerConfig::new()
        .with_bind_addr_str(&cli.bind_addr)?
        .with_cors(!cli.no_cors);

    let backend = Arc::new(PistonClient::new(runner_config));
    let server = RunboxServer::with_config(backend, server_config);

    log::info!("Starting runbox server on {}...", cli.bind_addr);
    server.serve_with_shutdown(shutdown_signal()).await?;
    log::info!("Runbox server shut down gracefully.");

    Ok(())
}
