//! envpaged - environment-themed demo page server

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use envpage::{Config, Page, RuntimeEnv, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment-themed demo page server
#[derive(Parser, Debug)]
#[command(name = "envpaged", version, about = "Serve the environment-themed demo page")]
struct Args {
    /// Address to listen on (overrides config file and ENVPAGE_BIND_ADDR)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envpage=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    // Process environment is read once, here
    let runtime = RuntimeEnv::from_process();
    runtime.log_selection();
    let page = Page::resolve(&runtime);

    let server = Server::new(config, page);
    server.run().await?;

    Ok(())
}
