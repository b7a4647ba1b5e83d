mod auth;
mod value;

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{Value, json};

use super::{Document, DocumentStore, Write, WriteBatch};
use crate::config::FirestoreCfg;

use auth::ServiceAccount;
use value::{decode_integer, document_id, encode_fields};

const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";
const EMULATOR_TOKEN: &str = "owner";

/// Firestore over its REST API.
pub struct FirestoreStore {
	client: Client,
	base_url: String,
	database: String,
	token: String,
}

impl FirestoreStore {
	pub async fn connect(cfg: &FirestoreCfg) -> Result<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.build()
			.context("building HTTP client")?;

		let (base_url, project, token) = match &cfg.emulator_host {
			Some(host) => {
				let project = match &cfg.project {
					Some(project) => project.clone(),
					None => ServiceAccount::load(&cfg.credentials)?.project_id,
				};
				tracing::info!(%host, %project, "using Firestore emulator");
				(format!("http://{host}/v1"), project, EMULATOR_TOKEN.to_string())
			}
			None => {
				let account = ServiceAccount::load(&cfg.credentials)?;
				let token = auth::fetch_access_token(&client, &account).await?;
				let project = cfg.project.clone().unwrap_or(account.project_id);
				(FIRESTORE_API.to_string(), project, token)
			}
		};

		Ok(Self {
			client,
			base_url,
			database: format!("projects/{project}/databases/{}", cfg.database_id),
			token,
		})
	}

	fn documents_root(&self) -> String {
		format!("{}/documents", self.database)
	}

	fn document_name(&self, collection: &str, id: &str) -> String {
		format!("{}/{collection}/{id}", self.documents_root())
	}

	fn url(&self, resource: &str) -> String {
		format!("{}/{resource}", self.base_url)
	}

	fn encode_write(&self, write: &Write) -> Value {
		match write {
			Write::Set {
				collection,
				id,
				doc,
			} => json!({
				"update": {
					"name": self.document_name(collection, id),
					"fields": encode_fields(doc),
				}
			}),
			Write::Delete { collection, id } => json!({
				"delete": self.document_name(collection, id),
			}),
		}
	}
}

#[async_trait]
impl DocumentStore for FirestoreStore {
	fn name(&self) -> &'static str {
		"firestore"
	}

	async fn commit(&self, batch: WriteBatch) -> Result<usize> {
		let url = self.url(&format!("{}:commit", self.documents_root()));
		let mut applied = 0usize;

		for chunk in batch.chunks() {
			let writes: Vec<Value> = chunk.iter().map(|w| self.encode_write(w)).collect();
			tracing::debug!(writes = writes.len(), "committing batch");

			let resp = self
				.client
				.post(&url)
				.bearer_auth(&self.token)
				.json(&json!({ "writes": writes }))
				.send()
				.await
				.with_context(|| format!("request to {url} failed"))?;
			read_json(resp, "commit").await?;
			applied += chunk.len();
		}
		Ok(applied)
	}

	async fn add(&self, collection: &str, doc: Document) -> Result<String> {
		let url = self.url(&format!("{}/{collection}", self.documents_root()));
		let resp = self
			.client
			.post(&url)
			.bearer_auth(&self.token)
			.json(&json!({ "fields": encode_fields(&doc) }))
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		let body = read_json(resp, "create document").await?;

		let name = body
			.get("name")
			.and_then(Value::as_str)
			.ok_or_else(|| anyhow!("create document response has no name"))?;
		let id = document_id(name)
			.ok_or_else(|| anyhow!("malformed document name '{name}'"))?
			.to_string();
		tracing::debug!(collection, %id, "added document");
		Ok(id)
	}

	async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
		let url = self.url(&self.document_name(collection, id));
		let mut params: Vec<(&str, String)> = fields
			.keys()
			.map(|k| ("updateMask.fieldPaths", k.clone()))
			.collect();
		params.push(("currentDocument.exists", "true".to_string()));

		let resp = self
			.client
			.patch(&url)
			.bearer_auth(&self.token)
			.query(&params)
			.json(&json!({ "fields": encode_fields(&fields) }))
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		read_json(resp, "update document").await?;
		Ok(())
	}

	async fn list_ids(&self, collection: &str, limit: usize) -> Result<Vec<String>> {
		let url = self.url(&format!("{}/{collection}", self.documents_root()));
		let resp = self
			.client
			.get(&url)
			.bearer_auth(&self.token)
			.query(&[
				("pageSize", limit.to_string()),
				("mask.fieldPaths", "__name__".to_string()),
			])
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		let body = read_json(resp, "list documents").await?;

		// An empty collection comes back as `{}`.
		let ids: Vec<String> = body
			.get("documents")
			.and_then(Value::as_array)
			.map(|docs| {
				docs.iter()
					.filter_map(|d| d.get("name").and_then(Value::as_str))
					.filter_map(document_id)
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default();
		Ok(ids)
	}

	async fn count(&self, collection: &str) -> Result<usize> {
		let url = self.url(&format!("{}:runAggregationQuery", self.documents_root()));
		let query = json!({
			"structuredAggregationQuery": {
				"structuredQuery": { "from": [{ "collectionId": collection }] },
				"aggregations": [{ "alias": "total", "count": {} }]
			}
		});
		let resp = self
			.client
			.post(&url)
			.bearer_auth(&self.token)
			.json(&query)
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		let body = read_json(resp, "count query").await?;

		let total = body
			.as_array()
			.into_iter()
			.flatten()
			.find_map(|row| row.pointer("/result/aggregateFields/total"))
			.and_then(decode_integer)
			.ok_or_else(|| anyhow!("count query for {collection} returned no total"))?;
		usize::try_from(total).with_context(|| format!("negative count {total} for {collection}"))
	}
}

/// Turn a response into JSON, failing with the status and body on non-2xx.
async fn read_json(resp: Response, what: &str) -> Result<Value> {
	let status = resp.status();
	let text = resp
		.text()
		.await
		.with_context(|| format!("reading {what} response"))?;

	if !status.is_success() {
		bail!("{what} failed with {status}: {}", text.trim());
	}
	if text.trim().is_empty() {
		return Ok(Value::Null);
	}
	serde_json::from_str(&text).with_context(|| format!("decoding {what} response"))
}
