mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lotr_sdk::MovieService;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "lotr")]
#[command(about = "Query movies and quotes from The One API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API token (overrides LOTR_API_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies
    Movies(commands::movies::MoviesArgs),
    /// Show a single movie by ID
    Movie(commands::movies::MovieArgs),
    /// List quotes from a movie (trilogy films only)
    Quotes(commands::quotes::QuotesArgs),
    /// Pick a random movie
    Random,
    /// Check whether a movie's Rotten Tomatoes score beats a guess
    Compare(commands::compare::CompareArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lotr=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let service = MovieService::new()?;
    let token = cli.token.as_deref();

    match &cli.command {
        Commands::Movies(args) => commands::movies::run_list(args, &service, token, &format).await?,
        Commands::Movie(args) => commands::movies::run_get(args, &service, token, &format).await?,
        Commands::Quotes(args) => commands::quotes::run(args, &service, token, &format).await?,
        Commands::Random => commands::random::run(&service, token, &format).await?,
        Commands::Compare(args) => commands::compare::run(args, &service, token, &format).await?,
    }

    Ok(())
}
