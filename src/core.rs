use std::path::Path;

use sha2::{Digest, Sha256};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub fn display(p: &Path) -> String {
	p.to_string_lossy().into_owned()
}

pub fn sha256_hex(bytes: &[u8]) -> String {
	let mut hasher = Sha256::new();
	hasher.update(bytes);
	hex::encode(hasher.finalize())
}

pub fn now_rfc3339() -> anyhow::Result<String> {
	Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
