//! CLI administration tool for kanade.
//!
//! Works directly against the configured store, without going through the
//! HTTP API. Uses the same configuration variables as the server.
//!
//! # Usage
//!
//! ```bash
//! # Check that the store is reachable
//! cargo run --bin admin -- store check
//!
//! # Look up a key
//! cargo run --bin admin -- link get すし
//!
//! # Create a link with a random 6-symbol key
//! cargo run --bin admin -- link create https://example.com --length 6
//!
//! # Create a link with a custom key
//! cargo run --bin admin -- link create https://example.com --key すし
//! ```
//!
//! Link commands need a persistent backend; with the in-memory store they
//! would operate on an empty map that disappears on exit.

use kanade::api::dto::create::{CreateRequest, CreateResponse};
use kanade::application::services::LinkService;
use kanade::config::{self, Config, StoreBackend};
use kanade::domain::entities::CreateOutcome;
use kanade::server::build_link_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use validator::Validate;

/// CLI tool for managing kanade short links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connectivity
    Check,
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the target stored under a key
    Get {
        /// The key in its symbol form (e.g. すし)
        key: String,
    },

    /// Create a short link
    Create {
        /// URL to shorten
        url: String,

        /// Custom key (2-30 characters)
        #[arg(short, long)]
        key: Option<String>,

        /// Random key length (2-30, default 4)
        #[arg(short, long)]
        length: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Store { action } => handle_store_action(action, &config).await?,
        Commands::Link { action } => {
            if config.store_backend == StoreBackend::Memory {
                anyhow::bail!(
                    "Link commands need a persistent store; set REDIS_URL or STORE_BACKEND=redis"
                );
            }
            let service = build_link_service(&config).await?;
            handle_link_action(action, &service).await?;
        }
    }

    Ok(())
}

/// Dispatches store commands.
async fn handle_store_action(action: StoreAction, config: &Config) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "Checking store...".bright_blue().bold());

            let service = build_link_service(config).await?;
            let store = service.store();

            if store.health_check().await {
                println!(
                    "{} {} store reachable (timeout {}ms, reserve mode {})",
                    "✓".green().bold(),
                    store.backend_name().cyan(),
                    config.store_timeout_ms,
                    store.mode()
                );
            } else {
                println!(
                    "{} {} store unreachable",
                    "✗".red().bold(),
                    store.backend_name().cyan()
                );
                anyhow::bail!("Store health check failed");
            }
        }
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::Get { key } => get_link(service, &key).await,
        LinkAction::Create { url, key, length } => {
            create_link(service, CreateRequest { url, key, length }).await
        }
    }
}

/// Prints the stored target for a key.
async fn get_link(service: &LinkService, key: &str) -> Result<()> {
    let link = service
        .resolve(key)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    let urls = service.hosts().render(&link.storage_key);

    println!("{}", "Short link".bright_white().bold());
    println!("  Key:         {}", link.key.cyan());
    println!("  Storage key: {}", link.storage_key.bright_black());
    println!("  Target:      {}", link.target_url.bright_yellow());
    println!("  Native URL:  {}", urls.native);
    println!("  ASCII URL:   {}", urls.ascii);

    Ok(())
}

/// Validates the input the same way the HTTP API does, then creates the link.
async fn create_link(service: &LinkService, request: CreateRequest) -> Result<()> {
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid input: {}", e))?;

    let outcome = service
        .create_short_link(request.into_new_link())
        .await
        .map_err(|e| anyhow::anyhow!("Create failed: {}", e))?;

    if let CreateOutcome::Conflict { key } = &outcome {
        println!(
            "{} Key {} is already taken",
            "✗".red().bold(),
            key.bright_yellow()
        );
        anyhow::bail!("Key conflict");
    }

    let response = CreateResponse::from(outcome);
    println!("{}", "✓ Short link created".green().bold());
    if let Some(key) = response.short_key {
        println!("  Key:        {}", key.cyan());
    }
    if let Some(native) = response.short_url_native {
        println!("  Native URL: {}", native.bright_yellow());
    }
    if let Some(ascii) = response.short_url_ascii {
        println!("  ASCII URL:  {}", ascii.bright_yellow());
    }

    Ok(())
}
