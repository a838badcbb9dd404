//! The `compare` subcommand.

use anyhow::Result;
use clap::Args;
use lotr_sdk::MovieService;

use super::ensure_success;
use crate::output::{print_movies, OutputFormat};

#[derive(Args)]
pub struct CompareArgs {
    /// Movie ID
    pub movie_id: String,

    /// Score you think the movie beats (Rotten Tomatoes, 0-100)
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

pub async fn run(
    args: &CompareArgs,
    service: &MovieService,
    token: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = service.compare_score(&args.movie_id, args.score, token).await;
    ensure_success(&resp)?;

    if let Some(message) = &resp.message {
        println!("{}", message);
    }
    print_movies(&resp.docs, format)
}
