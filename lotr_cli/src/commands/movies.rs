//! The `movies` and `movie` subcommands.

use anyhow::Result;
use clap::Args;
use lotr_sdk::MovieService;

use super::ensure_success;
use crate::output::{print_movies, OutputFormat};

#[derive(Args)]
pub struct MoviesArgs {
    /// Page number (server default: 1)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page (server default: 1000)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Results to skip; the server then reports page 0
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args)]
pub struct MovieArgs {
    /// Movie ID
    pub id: String,
}

pub async fn run_list(
    args: &MoviesArgs,
    service: &MovieService,
    token: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = service
        .list_movies(args.page, args.limit, args.offset, token)
        .await;
    ensure_success(&resp)?;

    eprintln!(
        "Page {}/{} ({} total movies)",
        resp.page, resp.pages, resp.total
    );

    print_movies(&resp.docs, format)
}

pub async fn run_get(
    args: &MovieArgs,
    service: &MovieService,
    token: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = service.get_movie_by_id(&args.id, token).await;
    ensure_success(&resp)?;
    print_movies(&resp.docs, format)
}
