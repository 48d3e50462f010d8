//! furniture-comps - resale price estimates for used furniture.

use anyhow::Result;
use clap::{Parser, Subcommand};
use furniture_comps::commands::{InterpretCommand, PriceCommand};
use furniture_comps::comps::Query;
use furniture_comps::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "furniture-comps",
    version,
    about = "Resale price estimates for used furniture",
    long_about = "Finds comparable listings for a piece of furniture and recommends a listing price band."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Look up live comps through web search (needs API credentials)
    #[arg(long, global = true)]
    live: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a listing price
    #[command(alias = "p")]
    Price {
        /// Item category (sofa, chair, dining table, ...)
        item: String,

        /// Brand
        #[arg(short, long)]
        brand: Option<String>,

        /// Condition (like new, used, ...)
        #[arg(long)]
        condition: Option<String>,

        /// Price you hope to get
        #[arg(short, long)]
        expected: Option<f64>,
    },

    /// Show comparable listings only
    #[command(alias = "c")]
    Comps {
        /// Item category
        item: String,

        /// Brand
        #[arg(short, long)]
        brand: Option<String>,

        /// Condition
        #[arg(long)]
        condition: Option<String>,
    },

    /// Answer a chat message with the JSON reply document
    Interpret {
        /// Message text, or a {"message": ...} document with --request
        message: String,

        /// Treat the argument as a JSON request document
        #[arg(long)]
        request: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.live {
        config.enable_live_comps = true;
    }

    match cli.command {
        Commands::Price { item, brand, condition, expected } => {
            let query = Query::new(&item, brand.as_deref(), condition.as_deref());
            let output = PriceCommand::new(config).execute(&query, expected).await;
            println!("{}", output);
        }

        Commands::Comps { item, brand, condition } => {
            let query = Query::new(&item, brand.as_deref(), condition.as_deref());
            let output = PriceCommand::new(config).comps(&query).await;
            println!("{}", output);
        }

        Commands::Interpret { message, request } => {
            let cmd = InterpretCommand::new(config);
            let output = if request {
                cmd.execute_request(&message).await?
            } else {
                cmd.execute(&message).await?
            };
            println!("{}", output);
        }
    }

    Ok(())
}
