//! CLI subcommand implementations.

pub mod compare;
pub mod movies;
pub mod quotes;
pub mod random;

use anyhow::{bail, Result};
use lotr_sdk::types::Envelope;

/// Turns a failed envelope into a CLI error carrying its message.
pub fn ensure_success<T>(envelope: &Envelope<T>) -> Result<()> {
    if !envelope.success {
        bail!(
            "{}",
            envelope.message.as_deref().unwrap_or("request failed")
        );
    }
    Ok(())
}
