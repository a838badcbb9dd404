//! The paginated response envelope shared by every endpoint.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A page of results plus the pagination metadata the server applied.
///
/// Decoded straight from the wire (`docs`, `total`, `limit`, `offset`,
/// `page`, `pages`). `success` and `message` are not sent by the server;
/// they default to a successful envelope without a message and are set by
/// the operation layer when a call fails or a business rule rejects the
/// result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Result items in server order.
    pub docs: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            docs: Vec::new(),
            total: 0,
            limit: 0,
            offset: 0,
            page: 0,
            pages: 0,
            success: true,
            message: None,
        }
    }
}

impl<T> Envelope<T> {
    /// An empty, failed envelope carrying `reason` as its message.
    pub fn failure(reason: impl Display) -> Self {
        Self::default().reject(reason)
    }

    /// Marks this envelope as failed, keeping whatever data it holds.
    pub fn reject(mut self, reason: impl Display) -> Self {
        self.success = false;
        self.message = Some(reason.to_string());
        self
    }

    /// Number of items in `docs`.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when `docs` holds no items.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
