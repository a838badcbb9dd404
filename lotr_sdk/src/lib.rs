//! Operation layer for The One API: typed movie and quote lookups that
//! always answer with an envelope.
//!
//! Wraps the `lotr_api` client, turning transport errors and empty results
//! into failed envelopes with human-readable messages.

pub mod error;
pub mod service;
pub mod verdict;

pub use lotr_api;
pub use lotr_api::types;
pub use lotr_api::{Client, ClientConfig, Pagination};

pub use error::SdkError;
pub use service::MovieService;
pub use verdict::ScoreVerdict;
