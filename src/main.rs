mod cli;

use reelserve::{config, server};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use rand::RngCore;
use std::path::PathBuf;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    storage_root: Option<PathBuf>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    // Load config, then apply CLI overrides
    let mut config = config::load_config_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(root) = storage_root {
        config.storage.root = root;
    }

    tracing::info!("Starting reelserve");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelserve=trace,tower_http=debug".to_string()
        } else {
            "reelserve=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start {
            host,
            port,
            storage_root,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, storage_root, cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::GenerateApiKey => generate_api_key(),
        Commands::Version => {
            println!("reelserve {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;
    println!("Configuration is valid");
    println!("  server: {}:{}", config.server.host, config.server.port);
    println!("  storage root: {:?}", config.storage.root);
    println!("  chunk size: {} bytes", config.stream.chunk_size_bytes);
    println!(
        "  auth: {}",
        if config.server.auth.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    Ok(())
}

fn generate_api_key() -> Result<()> {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    println!("{}", hex::encode(bytes));
    Ok(())
}
