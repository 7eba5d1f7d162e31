//! Seam to the host word processor.
//!
//! The host is an opaque transactional service: mutations are queued locally
//! and only reach the document when a batch is synced. Everything in this
//! crate that touches a document goes through [`HostDocument`], and every
//! batch is built and submitted through a [`Transaction`].
//!
//! Atomicity of a rejected batch is host-defined. [`MemoryDocument`] applies
//! batches all-or-nothing; no other host is assumed to.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use common::MarkupError;

mod memory;

pub use memory::{MemoryDocument, Node};

/// Identifier the host assigns to a region when it is created.
pub type RegionId = u32;

/// How the host decorates a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Appearance {
    #[default]
    BoundingBox,
    Tags,
    /// No decoration at all; the content reads as plain text.
    Hidden,
}

/// Metadata and content of a region to create at the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpec {
    pub title: String,
    pub tag: String,
    pub appearance: Appearance,
    pub content: String,
}

/// A region as reported back by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionInfo {
    pub id: RegionId,
    pub title: String,
    pub tag: String,
    pub appearance: Appearance,
    pub content: String,
}

/// Where a queued mutation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The current selection.
    Selection,
    /// The empty range just past whatever the same batch inserted last.
    AfterInserted,
}

/// One queued change to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Inserts a flat-OPC markup package at the end of the selection.
    InsertMarkup { package: String },
    /// Creates a region at the selection and replaces its content.
    InsertRegion(RegionSpec),
    InsertText { anchor: Anchor, text: String },
    /// Collapses the selection to the end of `anchor`.
    SelectEnd(Anchor),
    /// Unwraps a region; its text stays in place when `keep_content` is set.
    RemoveRegion { id: RegionId, keep_content: bool },
}

/// Failures reported by the host. Propagated to callers unchanged.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host rejected the batch: {reason}")]
    Rejected { reason: String },

    #[error("after-range requested before anything was inserted")]
    NothingInserted,

    #[error("region {id} does not exist")]
    UnknownRegion { id: RegionId },

    #[error("invalid markup package: {0}")]
    InvalidMarkup(#[from] MarkupError),
}

/// An open document in the host word processor.
#[allow(async_fn_in_trait)]
pub trait HostDocument {
    /// Submits one batch. Once called it cannot be cancelled.
    async fn sync(&mut self, batch: Vec<Mutation>) -> Result<(), HostError>;

    /// Reads every region in the document in one round trip.
    async fn load_regions(&mut self) -> Result<Vec<RegionInfo>, HostError>;
}

/// Scoped batch of mutations against one document.
///
/// Acquire with [`Transaction::new`], queue, then [`Transaction::commit`].
/// Committing consumes the transaction; dropping it uncommitted discards the
/// queue without touching the document.
pub struct Transaction<'d, D: HostDocument> {
    document: &'d mut D,
    queued: Vec<Mutation>,
}

impl<'d, D: HostDocument> Transaction<'d, D> {
    pub fn new(document: &'d mut D) -> Self {
        Self {
            document,
            queued: Vec::new(),
        }
    }

    pub fn queue(&mut self, mutation: Mutation) {
        self.queued.push(mutation);
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Submits every queued mutation as a single batch.
    pub async fn commit(mut self) -> Result<(), HostError> {
        let batch = std::mem::take(&mut self.queued);
        debug!("committing batch of {} mutation(s)", batch.len());
        self.document.sync(batch).await
    }
}

impl<D: HostDocument> Drop for Transaction<'_, D> {
    fn drop(&mut self) {
        if !self.queued.is_empty() {
            debug!(
                "discarding {} uncommitted mutation(s)",
                self.queued.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_commit_sends_one_batch() {
        let mut document = MemoryDocument::new();
        let mut transaction = Transaction::new(&mut document);
        transaction.queue(Mutation::InsertText {
            anchor: Anchor::Selection,
            text: "Hola".to_string(),
        });
        transaction.queue(Mutation::SelectEnd(Anchor::AfterInserted));
        assert_eq!(transaction.len(), 2);

        block_on(transaction.commit()).unwrap();
        assert_eq!(document.syncs(), 1);
        assert_eq!(document.plain_text(), "Hola");
    }

    #[test]
    fn test_dropped_transaction_leaves_document_untouched() {
        let mut document = MemoryDocument::from_text("Hola");
        {
            let mut transaction = Transaction::new(&mut document);
            transaction.queue(Mutation::InsertText {
                anchor: Anchor::Selection,
                text: " mundo".to_string(),
            });
            assert!(!transaction.is_empty());
        }
        assert_eq!(document.syncs(), 0);
        assert_eq!(document.plain_text(), "Hola");
    }

    #[test]
    fn test_rejection_is_propagated() {
        let mut document = MemoryDocument::new();
        document.reject_next_sync("document is read-only");
        let mut transaction = Transaction::new(&mut document);
        transaction.queue(Mutation::SelectEnd(Anchor::Selection));

        let err = block_on(transaction.commit()).unwrap_err();
        assert!(matches!(err, HostError::Rejected { .. }));
        assert!(err.to_string().contains("read-only"));
    }
}
