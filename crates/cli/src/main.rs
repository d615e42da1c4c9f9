//! Coral Cart CLI - database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run one service's database migrations
//! coral-cli migrate catalog
//! coral-cli migrate cart
//! coral-cli migrate orders
//! coral-cli migrate storefront
//!
//! # Run every service's migrations
//! coral-cli migrate all
//!
//! # Seed the catalog with the sample product set
//! coral-cli seed catalog
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed a database with sample data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "coral-cli")]
#[command(author, version, about = "Coral Cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Seed a database with sample data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Run catalog database migrations
    Catalog,
    /// Run cart database migrations
    Cart,
    /// Run order database migrations
    Orders,
    /// Create the storefront session table
    Storefront,
    /// Run all database migrations
    All,
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed the catalog with the sample product set (no-op if non-empty)
    Catalog,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Catalog => commands::migrate::catalog().await?,
            MigrateTarget::Cart => commands::migrate::cart().await?,
            MigrateTarget::Orders => commands::migrate::orders().await?,
            MigrateTarget::Storefront => commands::migrate::storefront().await?,
            MigrateTarget::All => {
                commands::migrate::catalog().await?;
                commands::migrate::cart().await?;
                commands::migrate::orders().await?;
                commands::migrate::storefront().await?;
            }
        },
        Commands::Seed { target } => match target {
            SeedTarget::Catalog => commands::seed::catalog().await?,
        },
    }
    Ok(())
}
