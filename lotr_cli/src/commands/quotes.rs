//! The `quotes` subcommand.

use anyhow::Result;
use clap::Args;
use lotr_sdk::MovieService;

use super::ensure_success;
use crate::output::{print_quotes, OutputFormat};

#[derive(Args)]
pub struct QuotesArgs {
    /// Movie ID (must be one of the trilogy films)
    pub movie_id: String,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Results to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

pub async fn run(
    args: &QuotesArgs,
    service: &MovieService,
    token: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = service
        .list_quotes(&args.movie_id, args.page, args.limit, args.offset, token)
        .await;
    ensure_success(&resp)?;

    eprintln!(
        "Page {}/{} ({} total quotes)",
        resp.page, resp.pages, resp.total
    );

    print_quotes(&resp.docs, format)
}
