use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::{Document, DocumentStore, Write, WriteBatch};

#[derive(Debug, Default)]
struct State {
	collections: BTreeMap<String, BTreeMap<String, Document>>,
	next_id: u64,
	commits: usize,
}

/// Process-local store. Auto ids are sequential so runs are reproducible.
#[derive(Debug, Default)]
pub struct MemoryStore {
	state: Mutex<State>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
		let state = self.state.lock().ok()?;
		state.collections.get(collection)?.get(id).cloned()
	}

	pub fn commits(&self) -> usize {
		self.state.lock().map(|s| s.commits).unwrap_or(0)
	}

	fn with_state<T>(&self, f: impl FnOnce(&mut State) -> Result<T>) -> Result<T> {
		let mut state = self
			.state
			.lock()
			.map_err(|_| anyhow!("memory store lock poisoned"))?;
		f(&mut state)
	}
}

#[async_trait]
impl DocumentStore for MemoryStore {
	fn name(&self) -> &'static str {
		"memory"
	}

	async fn commit(&self, batch: WriteBatch) -> Result<usize> {
		self.with_state(|state| {
			state.commits += 1;
			for write in batch.writes() {
				match write {
					Write::Set {
						collection,
						id,
						doc,
					} => {
						state
							.collections
							.entry(collection.clone())
							.or_default()
							.insert(id.clone(), doc.clone());
					}
					Write::Delete { collection, id } => {
						if let Some(docs) = state.collections.get_mut(collection) {
							docs.remove(id);
						}
					}
				}
			}
			Ok(batch.len())
		})
	}

	async fn add(&self, collection: &str, doc: Document) -> Result<String> {
		self.with_state(|state| {
			state.next_id += 1;
			let id = format!("auto{:06}", state.next_id);
			state
				.collections
				.entry(collection.to_string())
				.or_default()
				.insert(id.clone(), doc);
			Ok(id)
		})
	}

	async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
		self.with_state(|state| {
			let doc = state
				.collections
				.get_mut(collection)
				.and_then(|docs| docs.get_mut(id))
				.ok_or_else(|| anyhow!("no document {collection}/{id} to update"))?;
			doc.extend(fields);
			Ok(())
		})
	}

	async fn list_ids(&self, collection: &str, limit: usize) -> Result<Vec<String>> {
		self.with_state(|state| {
			Ok(state
				.collections
				.get(collection)
				.map(|docs| docs.keys().take(limit).cloned().collect())
				.unwrap_or_default())
		})
	}

	async fn count(&self, collection: &str) -> Result<usize> {
		self.with_state(|state| Ok(state.collections.get(collection).map_or(0, |d| d.len())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn doc(value: serde_json::Value) -> Document {
		value.as_object().cloned().expect("object literal")
	}

	#[tokio::test]
	async fn update_merges_into_existing_document() {
		let store = MemoryStore::new();
		let id = store
			.add("cards", doc(json!({"question": "q"})))
			.await
			.expect("add");
		store
			.update("cards", &id, doc(json!({"orderIndex": 0})))
			.await
			.expect("update");

		let stored = store.get("cards", &id).expect("stored");
		assert_eq!(stored["question"], "q");
		assert_eq!(stored["orderIndex"], 0);
	}

	#[tokio::test]
	async fn update_of_missing_document_fails() {
		let store = MemoryStore::new();
		assert!(store.update("cards", "nope", Document::new()).await.is_err());
	}

	#[tokio::test]
	async fn clear_pages_through_large_collections() {
		let store = MemoryStore::new();
		let mut batch = WriteBatch::default();
		for i in 0..700 {
			batch.set("cards", &format!("c{i:04}"), Document::new());
		}
		store.commit(batch).await.expect("seed");

		let removed = store.clear("cards").await.expect("clear");
		assert_eq!(removed, 700);
		assert_eq!(store.count("cards").await.expect("count"), 0);
		// one seed commit plus three pages of at most 300 deletes
		assert_eq!(store.commits(), 4);
	}
}
