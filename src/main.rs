//! Price Tracker CLI
//!
//! Records scraped product-page prices and prints trend summaries.
//! Storage and logging are configured from the environment (see `config`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use price_tracker::config::LogFormat;
use price_tracker::models::{PageContext, ProductId};
use price_tracker::services::{summary, TrackingReport};
use price_tracker::{AppConfig, AppError, AppState};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "price-tracker", version, about = "Track product prices over time")]
struct Cli {
    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a price seen on a product page
    Record {
        /// Product page URL
        #[arg(long)]
        url: String,
        /// Price as displayed, e.g. "$1,299.99"
        #[arg(long)]
        price: String,
        /// Product title
        #[arg(long)]
        title: Option<String>,
        /// Product id, when the URL does not carry one
        #[arg(long)]
        id: Option<String>,
    },
    /// Show the trend summary for a tracked product
    Show { id: String },
    /// List every stored price for a product, newest first
    History { id: String },
    /// List tracked product ids
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("price_tracker={},sqlx=warn", config.log_level).into()
    });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    info!(
        "Using {} storage (key '{}', window {})",
        config.storage.name(),
        config.storage_key,
        config.history_limit
    );

    let state = AppState::connect(&config)
        .await
        .context("failed to open price history storage")?;

    if let Err(e) = run(cli, &state).await {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: Cli, state: &AppState) -> Result<(), AppError> {
    match cli.command {
        Command::Record { url, price, title, id } => {
            let page = PageContext {
                url,
                price_text: Some(price),
                title_text: title,
                id_hint: id,
            };
            let timestamp = chrono::Utc::now().timestamp_millis();
            let report = state.tracker.record_page(page, timestamp).await?;
            print_report(&report, cli.json)?;
        }
        Command::Show { id } => {
            let id = ProductId::new(id)?;
            let report = state.tracker.require_report(&id).await?;
            print_report(&report, cli.json)?;
        }
        Command::History { id } => {
            let id = ProductId::new(id)?;
            let report = state.tracker.require_report(&id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report.record.history)?);
            } else {
                println!("Price history for {}", report.record.title);
                println!("{}", summary::render_history(&report.record.history));
            }
        }
        Command::List => {
            let ids = state.history.product_ids().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else if ids.is_empty() {
                println!("No products tracked yet");
            } else {
                for id in ids {
                    println!("{}", id);
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &TrackingReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", summary::render_summary(&report.record.title, &report.analysis));
    }
    Ok(())
}
