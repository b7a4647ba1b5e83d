pub mod firestore;
#[cfg(test)]
pub mod memory;
pub mod surreal;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A document body: the top-level fields of one record.
pub type Document = Map<String, Value>;

/// Firestore rejects commits with more than 500 writes.
pub const MAX_BATCH_WRITES: usize = 500;

/// Ids listed per round while clearing a collection.
pub const CLEAR_PAGE_SIZE: usize = 300;

#[derive(Debug, Clone, PartialEq)]
pub enum Write {
	Set {
		collection: String,
		id: String,
		doc: Document,
	},
	Delete {
		collection: String,
		id: String,
	},
}

/// Writes gathered locally and submitted together by [`DocumentStore::commit`].
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
	writes: Vec<Write>,
}

impl WriteBatch {
	pub fn set(&mut self, collection: &str, id: &str, doc: Document) -> &mut Self {
		self.writes.push(Write::Set {
			collection: collection.to_string(),
			id: id.to_string(),
			doc,
		});
		self
	}

	pub fn delete(&mut self, collection: &str, id: &str) -> &mut Self {
		self.writes.push(Write::Delete {
			collection: collection.to_string(),
			id: id.to_string(),
		});
		self
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.writes.len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.writes.is_empty()
	}

	#[cfg(test)]
	pub fn writes(&self) -> &[Write] {
		&self.writes
	}

	/// Split into slices that each fit in a single commit request.
	pub fn chunks(&self) -> impl Iterator<Item = &[Write]> {
		self.writes.chunks(MAX_BATCH_WRITES)
	}
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
	/// Short backend label used in status lines.
	fn name(&self) -> &'static str;

	/// Apply every write of the batch. Returns the number of writes applied.
	async fn commit(&self, batch: WriteBatch) -> Result<usize>;

	/// Insert a document under a store-assigned id and return that id.
	async fn add(&self, collection: &str, doc: Document) -> Result<String>;

	/// Merge `fields` into an existing document.
	async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()>;

	/// Up to `limit` document ids currently in `collection`.
	async fn list_ids(&self, collection: &str, limit: usize) -> Result<Vec<String>>;

	async fn count(&self, collection: &str) -> Result<usize>;

	/// Delete every document in `collection`, one page of ids at a time.
	async fn clear(&self, collection: &str) -> Result<usize> {
		let mut removed = 0usize;
		loop {
			let ids = self.list_ids(collection, CLEAR_PAGE_SIZE).await?;
			if ids.is_empty() {
				break;
			}

			let mut batch = WriteBatch::default();
			for id in &ids {
				batch.delete(collection, id);
			}
			tracing::debug!(collection, page = ids.len(), "deleting page");
			removed += self.commit(batch).await?;
		}
		Ok(removed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn batch_chunks_respect_commit_limit() {
		let mut batch = WriteBatch::default();
		for i in 0..(MAX_BATCH_WRITES * 2 + 3) {
			batch.delete("cards", &format!("doc{i}"));
		}

		let sizes: Vec<usize> = batch.chunks().map(|c| c.len()).collect();
		assert_eq!(sizes, vec![MAX_BATCH_WRITES, MAX_BATCH_WRITES, 3]);
	}

	#[test]
	fn empty_batch_has_no_chunks() {
		let batch = WriteBatch::default();
		assert!(batch.is_empty());
		assert_eq!(batch.chunks().count(), 0);
	}
}
