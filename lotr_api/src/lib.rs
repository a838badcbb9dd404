mod client;
mod config;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{Pagination, Query};
