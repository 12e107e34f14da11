//! Remote sync gateway: how the store talks to the content endpoint.

mod http;

pub use http::*;

use async_trait::async_trait;

use crate::errors::SyncError;
use crate::models::{ContentDocument, WriteAction};

/// Reads and writes the shared content document.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch the current document.
    async fn fetch_document(&self) -> Result<ContentDocument, SyncError>;

    /// Submit one write action.
    async fn push(&self, action: WriteAction) -> Result<(), SyncError>;

    /// Replace the whole document.
    async fn push_document(&self, doc: ContentDocument) -> Result<(), SyncError> {
        self.push(WriteAction::UpdateAllData(doc)).await
    }
}
