use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use super::read_json;
use crate::core::display;

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

fn default_token_uri() -> String {
	String::from("https://oauth2.googleapis.com/token")
}

/// The parts of a service-account key file needed to obtain a token.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
	#[serde(rename = "type")]
	pub kind: String,
	pub project_id: String,
	pub client_email: String,
	pub private_key: String,
	#[serde(default = "default_token_uri")]
	pub token_uri: String,
}

impl ServiceAccount {
	pub fn load(path: &Path) -> Result<Self> {
		if !path.exists() {
			bail!("credential file not found: {}", display(path));
		}

		let raw = fs::read_to_string(path).with_context(|| format!("reading {}", display(path)))?;
		Self::parse(&raw).with_context(|| format!("parsing {}", display(path)))
	}

	pub fn parse(raw: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(raw).context("credential file is not JSON")?;

		// Firebase console hands out an Android client config under the same name.
		if value.get("project_info").is_some() {
			bail!("this is an app client config, not a service account key");
		}

		let account: ServiceAccount =
			serde_json::from_value(value).context("missing service account fields")?;
		if account.kind != "service_account" {
			bail!(
				"expected \"type\": \"service_account\", found \"{}\"",
				account.kind
			);
		}
		Ok(account)
	}
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
	iss: &'a str,
	scope: &'a str,
	aud: &'a str,
	iat: i64,
	exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
	access_token: String,
	expires_in: Option<u64>,
}

pub fn signed_assertion(account: &ServiceAccount, now: i64) -> Result<String> {
	let claims = Claims {
		iss: &account.client_email,
		scope: DATASTORE_SCOPE,
		aud: &account.token_uri,
		iat: now,
		exp: now + ASSERTION_LIFETIME_SECS,
	};
	let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
		.context("private_key is not a PEM encoded RSA key")?;
	encode(&Header::new(Algorithm::RS256), &claims, &key).context("signing token assertion")
}

pub async fn fetch_access_token(client: &Client, account: &ServiceAccount) -> Result<String> {
	let now = OffsetDateTime::now_utc().unix_timestamp();
	let assertion = signed_assertion(account, now)?;
	let token = exchange_assertion(client, &account.token_uri, &assertion).await?;

	tracing::debug!(client_email = %account.client_email, "obtained access token");
	Ok(token)
}

/// Exchange a signed assertion for a bearer token.
async fn exchange_assertion(client: &Client, token_uri: &str, assertion: &str) -> Result<String> {
	let resp = client
		.post(token_uri)
		.form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)])
		.send()
		.await
		.with_context(|| format!("request to {token_uri} failed"))?;
	let body = read_json(resp, "token exchange").await?;
	let token: TokenResponse =
		serde_json::from_value(body).context("token response has no access_token")?;

	tracing::debug!(expires_in = ?token.expires_in, "token exchange succeeded");
	Ok(token.access_token)
}
