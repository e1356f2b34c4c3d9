//! shopsearch CLI - Product search from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Search through an in-process server (reads the server's environment)
//! shopsearch search --name shirt
//!
//! # Search through a running server
//! shopsearch search --name shirt --endpoint http://localhost:4000/graphql
//! ```
//!
//! # Commands
//!
//! - `search` - Run `getProductsByName` and print products with their variants

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "shopsearch")]
#[command(author, version, about = "Search Shopify products by name")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products by name
    Search {
        /// Product name or Shopify search expression
        #[arg(short, long)]
        name: String,

        /// GraphQL endpoint of a running server; starts one in-process if omitted
        #[arg(short, long)]
        endpoint: Option<Url>,
    },
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
        Commands::Search { name, endpoint } => {
            commands::search::run(&name, endpoint).await?;
        }
    }
    Ok(())
}
