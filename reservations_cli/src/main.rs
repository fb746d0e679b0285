mod commands;
mod output;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reservations_lib::{Config, ListView};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "reservations")]
#[command(about = "Browse and manage cleaning-service reservations from the admin API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides RESERVATIONS_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of reservations
    List(commands::list::ListArgs),
    /// Change a reservation's status, then reload the list
    SetStatus(commands::set_status::SetStatusArgs),
    /// Delete a reservation after confirmation, then reload the list
    Delete(commands::delete::DeleteArgs),
    /// Interactive session: page, filter, and act on reservations
    Browse(commands::browse::BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reservations=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "configured");

    let client = config.client()?;
    let view = ListView::with_per_page(client, config.per_page);

    match &cli.command {
        Commands::List(args) => commands::list::run(args, view, &format).await?,
        Commands::SetStatus(args) => commands::set_status::run(args, view, &format).await?,
        Commands::Delete(args) => commands::delete::run(args, view, &format).await?,
        Commands::Browse(args) => commands::browse::run(args, view, &format).await?,
    }

    Ok(())
}
