//! GearShop CLI - drive the storefront core from a terminal.
//!
//! Commands:
//! - `gearshop catalog` - List products, optionally by category
//! - `gearshop popular` - List the popular picks
//! - `gearshop similar` - Resolve a product's similar list
//! - `gearshop reviews` - Show reviews and the rating summary
//! - `gearshop demo` - Run a scripted cart session

mod commands;
mod output;

use clap::{Parser, Subcommand};
use gearshop_core::prelude::*;

/// GearShop CLI - inspect the catalog and exercise the cart
#[derive(Parser)]
#[command(name = "gearshop")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Restrict to a category ("all", "weapons", "armor")
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },

    /// List products flagged as popular
    Popular,

    /// Resolve the similar-product list for a product
    Similar {
        /// Product id to look up
        id: u32,

        /// Maximum number of entries
        #[arg(short, long, default_value_t = DEFAULT_SIMILAR_LIMIT)]
        limit: usize,
    },

    /// Show reviews and the rating summary
    Reviews,

    /// Run a scripted cart session against the demo catalog
    Demo,
}

fn main() {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();

    let output = output::Output::new(cli.verbose, cli.json);
    let session = Session::new(demo_catalog());

    let result = match cli.command {
        Commands::Catalog { category } => commands::catalog(session, category, &output),
        Commands::Popular => commands::popular(&session, &output),
        Commands::Similar { id, limit } => {
            commands::similar(&session, ProductId::new(id), limit, &output)
        }
        Commands::Reviews => commands::reviews(&session, &output),
        Commands::Demo => commands::demo(session, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
