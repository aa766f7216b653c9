//! Ticker CLI
//!
//! Command-line interface for the BTC ticker API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use ticker_client::TickerClient;

#[derive(Parser)]
#[command(name = "ticker")]
#[command(author, version, about = "BTC ticker API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the ticker API
    #[arg(long, env = "TICKER_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current BTC rates, lowest first
    Rates {
        /// Currency codes to show (comma-separated)
        #[arg(long, value_delimiter = ',')]
        currency: Vec<String>,
    },
    /// Convert between BTC and a fiat currency
    Convert {
        /// Source currency (BTC converts to fiat, anything else converts to BTC)
        #[arg(long)]
        from: String,
        /// Target currency
        #[arg(long)]
        to: String,
        /// Amount to convert (at least 0.01)
        value: f64,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = TickerClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Rates { currency } => {
            let codes: Vec<&str> = currency.iter().map(|c| c.trim()).collect();
            let rates = client.rates(&codes).await?;
            for (code, rate) in rates.iter() {
                println!("{code:>5}  {rate:.2}");
            }
        }

        Commands::Convert { from, to, value } => {
            let result = client.convert(&from, &to, value).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
