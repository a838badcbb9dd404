//! The `random` subcommand.

use anyhow::Result;
use lotr_sdk::MovieService;

use super::ensure_success;
use crate::output::{print_movies, OutputFormat};

pub async fn run(service: &MovieService, token: Option<&str>, format: &OutputFormat) -> Result<()> {
    let resp = service.random_movie(token).await;
    ensure_success(&resp)?;
    print_movies(&resp.docs, format)
}
