use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use serde_json::Value;
use surrealdb::{
	Surreal,
	engine::any::{Any, connect},
	opt::{Config, auth::Root, capabilities::Capabilities},
};

use super::{Document, DocumentStore, Write, WriteBatch};
use crate::config::DbCfg;

pub async fn create_surreal_client(address: &str) -> Result<Surreal<Any>, surrealdb::Error> {
	let config = Config::new().capabilities(Capabilities::all());

	connect((address, config)).await
}

/// Collections map onto SurrealDB tables of the same name.
pub struct SurrealStore {
	db: Surreal<Any>,
}

impl SurrealStore {
	pub async fn connect(cfg: &DbCfg) -> Result<Self> {
		let db = create_surreal_client(cfg.host())
			.await
			.with_context(|| format!("Failed connecting to {}", cfg.host()))?;

		db.signin(Root {
			username: cfg.user().to_string(),
			password: cfg.pass().to_string(),
		})
		.await
		.context("signin failed")?;
		db.use_ns(cfg.ns())
			.use_db(cfg.db())
			.await
			.with_context(|| format!("use_ns/use_db failed for ns={} db= {}", cfg.ns(), cfg.db()))?;

		Ok(Self { db })
	}
}

fn table(name: &str) -> Result<&str> {
	let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
	if !valid {
		bail!("'{name}' is not a valid table name");
	}
	Ok(name)
}

fn record(collection: &str, id: &str) -> Result<String> {
	if id.is_empty() || id.contains('⟩') {
		bail!("'{id}' cannot be used as a record id");
	}
	Ok(format!("{}:⟨{id}⟩", table(collection)?))
}

/// Render one chunk of writes as a single transaction. Documents are bound as
/// `$docs` and referenced by position.
fn render_batch(chunk: &[Write]) -> Result<(String, Vec<Value>)> {
	let mut sql = String::from("BEGIN TRANSACTION;\n");
	let mut docs = Vec::new();

	for write in chunk {
		match write {
			Write::Set {
				collection,
				id,
				doc,
			} => {
				sql.push_str(&format!(
					"UPSERT {} CONTENT $docs[{}] RETURN NONE;\n",
					record(collection, id)?,
					docs.len()
				));
				docs.push(Value::Object(doc.clone()));
			}
			Write::Delete { collection, id } => {
				sql.push_str(&format!("DELETE {} RETURN NONE;\n", record(collection, id)?));
			}
		}
	}

	sql.push_str("COMMIT TRANSACTION;");
	Ok((sql, docs))
}

fn id_string(value: Value) -> String {
	match value {
		Value::String(s) => s,
		other => other.to_string(),
	}
}

#[async_trait]
impl DocumentStore for SurrealStore {
	fn name(&self) -> &'static str {
		"surrealdb"
	}

	async fn commit(&self, batch: WriteBatch) -> Result<usize> {
		let mut applied = 0usize;
		for chunk in batch.chunks() {
			let (sql, docs) = render_batch(chunk)?;
			tracing::debug!(writes = chunk.len(), "committing transaction");
			self.db
				.query(&sql)
				.bind(("docs", Value::Array(docs)))
				.await?
				.check()?;
			applied += chunk.len();
		}
		Ok(applied)
	}

	async fn add(&self, collection: &str, doc: Document) -> Result<String> {
		let sql = format!(
			"CREATE {} CONTENT $doc RETURN VALUE record::id(id);",
			table(collection)?
		);
		let mut resp = self
			.db
			.query(&sql)
			.bind(("doc", Value::Object(doc)))
			.await?;
		let ids: Vec<Value> = resp.take(0)?;
		let id = ids
			.into_iter()
			.next()
			.map(id_string)
			.ok_or_else(|| anyhow!("CREATE on {collection} returned no id"))?;
		tracing::debug!(collection, %id, "added record");
		Ok(id)
	}

	async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
		let sql = format!("UPDATE {} MERGE $fields RETURN NONE;", record(collection, id)?);
		self.db
			.query(&sql)
			.bind(("fields", Value::Object(fields)))
			.await?
			.check()?;
		Ok(())
	}

	async fn list_ids(&self, collection: &str, limit: usize) -> Result<Vec<String>> {
		let sql = format!(
			"SELECT VALUE record::id(id) FROM {} LIMIT {limit};",
			table(collection)?
		);
		let mut resp = self.db.query(&sql).await?;
		let rows: Vec<Value> = resp.take(0)?;
		Ok(rows.into_iter().map(id_string).collect())
	}

	async fn count(&self, collection: &str) -> Result<usize> {
		let sql = format!("RETURN array::len(SELECT VALUE id FROM {});", table(collection)?);
		let mut resp = self.db.query(&sql).await?;
		let row: Option<Value> = resp.take(0)?;
		let total = row
			.as_ref()
			.and_then(Value::as_u64)
			.ok_or_else(|| anyhow!("count of {collection} returned no number"))?;
		Ok(total as usize)
	}

	async fn clear(&self, collection: &str) -> Result<usize> {
		let removed = self.count(collection).await?;
		let sql = format!("DELETE {} RETURN NONE;", table(collection)?);
		self.db.query(&sql).await?.check()?;
		Ok(removed)
	}
}
