use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ValueEnum;
use rust_dotenv::dotenv::DotEnv;

use crate::store::{DocumentStore, firestore::FirestoreStore, surreal::SurrealStore};

pub const DEFAULT_CREDENTIALS: &str = "google-services.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
	Firestore,
	Surreal,
}

impl Backend {
	fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"firestore" => Some(Self::Firestore),
			"surreal" | "surrealdb" => Some(Self::Surreal),
			_ => None,
		}
	}
}

#[derive(Debug, Clone)]
pub struct FirestoreCfg {
	pub credentials: PathBuf,
	pub database_id: String,
	pub emulator_host: Option<String>,
	pub project: Option<String>,
	pub timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct DbCfg {
	host: String,
	ns: String,
	db: String,
	user: String,
	pass: String,
}

impl DbCfg {
	fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
		let host = lookup("PUBLIC_DATABASE_HOST").unwrap_or(String::from("http://localhost:8000"));
		let db = lookup("PUBLIC_DATABASE_NAME").unwrap_or(String::from("test"));
		let ns = lookup("PUBLIC_DATABASE_NAMESPACE").unwrap_or(String::from("db"));
		let user = lookup("DATABASE_USER").unwrap_or(String::from("root"));
		let pass = lookup("DATABASE_PASSWORD").unwrap_or(String::from("root"));

		Self {
			host,
			ns,
			db,
			user,
			pass,
		}
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn ns(&self) -> &str {
		&self.ns
	}

	pub fn db(&self) -> &str {
		&self.db
	}

	pub fn user(&self) -> &str {
		&self.user
	}

	pub fn pass(&self) -> &str {
		&self.pass
	}
}

/// Command-line overrides; `None` falls through to the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub backend: Option<Backend>,
	pub credentials: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct StoreCfg {
	pub backend: Backend,
	pub firestore: FirestoreCfg,
	pub surreal: DbCfg,
}

impl StoreCfg {
	pub fn from_env(env: &DotEnv, overrides: Overrides) -> Result<Self> {
		Self::from_lookup(
			|key| {
				env.get_var(key.to_string())
					.or_else(|| std::env::var(key).ok())
			},
			overrides,
		)
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>, overrides: Overrides) -> Result<Self> {
		let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

		let backend = match overrides.backend {
			Some(backend) => backend,
			None => match non_empty("SWIPESEED_BACKEND") {
				Some(raw) => match Backend::parse(&raw) {
					Some(backend) => backend,
					None => bail!("SWIPESEED_BACKEND must be 'firestore' or 'surreal', got '{raw}'"),
				},
				None => Backend::Firestore,
			},
		};

		let credentials = overrides
			.credentials
			.or_else(|| non_empty("SWIPESEED_CREDENTIALS").map(PathBuf::from))
			.unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS));

		let timeout_ms = match non_empty("SWIPESEED_TIMEOUT_MS") {
			Some(raw) => match raw.trim().parse::<u64>() {
				Ok(ms) => ms,
				Err(_) => bail!("SWIPESEED_TIMEOUT_MS must be a number of milliseconds, got '{raw}'"),
			},
			None => 30_000,
		};

		let firestore = FirestoreCfg {
			credentials,
			database_id: non_empty("FIRESTORE_DATABASE_ID").unwrap_or(String::from("(default)")),
			emulator_host: non_empty("FIRESTORE_EMULATOR_HOST"),
			project: non_empty("GCLOUD_PROJECT"),
			timeout_ms,
		};

		Ok(Self {
			backend,
			firestore,
			surreal: DbCfg::from_lookup(&lookup),
		})
	}
}

pub async fn open_store(cfg: &StoreCfg) -> Result<Box<dyn DocumentStore>> {
	match cfg.backend {
		Backend::Firestore => Ok(Box::new(FirestoreStore::connect(&cfg.firestore).await?)),
		Backend::Surreal => {
			tracing::debug!(host = cfg.surreal.host(), "connecting to SurrealDB");
			Ok(Box::new(SurrealStore::connect(&cfg.surreal).await?))
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	fn resolve(vars: &[(&str, &str)], overrides: Overrides) -> Result<StoreCfg> {
		let vars: BTreeMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		StoreCfg::from_lookup(|key| vars.get(key).cloned(), overrides)
	}

	#[test]
	fn defaults_target_firestore_with_credential_file_in_cwd() {
		let cfg = resolve(&[], Overrides::default()).expect("defaults resolve");
		assert_eq!(cfg.backend, Backend::Firestore);
		assert_eq!(cfg.firestore.credentials, PathBuf::from("google-services.json"));
		assert_eq!(cfg.firestore.database_id, "(default)");
		assert!(cfg.firestore.emulator_host.is_none());
		assert_eq!(cfg.surreal.host(), "http://localhost:8000");
	}

	#[test]
	fn flags_take_precedence_over_environment() {
		let cfg = resolve(
			&[
				("SWIPESEED_BACKEND", "firestore"),
				("SWIPESEED_CREDENTIALS", "env.json"),
			],
			Overrides {
				backend: Some(Backend::Surreal),
				credentials: Some(PathBuf::from("flag.json")),
			},
		)
		.expect("resolves");
		assert_eq!(cfg.backend, Backend::Surreal);
		assert_eq!(cfg.firestore.credentials, PathBuf::from("flag.json"));
	}

	#[test]
	fn environment_selects_backend_and_emulator() {
		let cfg = resolve(
			&[
				("SWIPESEED_BACKEND", "SurrealDB"),
				("FIRESTORE_EMULATOR_HOST", "localhost:8080"),
				("PUBLIC_DATABASE_NAMESPACE", "swipe"),
			],
			Overrides::default(),
		)
		.expect("resolves");
		assert_eq!(cfg.backend, Backend::Surreal);
		assert_eq!(cfg.firestore.emulator_host.as_deref(), Some("localhost:8080"));
		assert_eq!(cfg.surreal.ns(), "swipe");
	}

	#[test]
	fn unknown_backend_is_rejected() {
		let err = resolve(&[("SWIPESEED_BACKEND", "mongo")], Overrides::default())
			.expect_err("unknown backend");
		assert!(err.to_string().contains("mongo"));
	}

	#[test]
	fn invalid_timeout_is_rejected() {
		assert!(resolve(&[("SWIPESEED_TIMEOUT_MS", "soon")], Overrides::default()).is_err());
	}
}
