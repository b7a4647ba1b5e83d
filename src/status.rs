use anyhow::Result;

use crate::dataset::{CARDS, REWARDS, SURVEYS};
use crate::store::DocumentStore;

pub async fn collection_counts(store: &dyn DocumentStore) -> Result<Vec<(&'static str, usize)>> {
	let mut counts = Vec::new();
	for collection in [CARDS, SURVEYS, REWARDS] {
		counts.push((collection, store.count(collection).await?));
	}
	Ok(counts)
}

pub async fn status(store: &dyn DocumentStore) -> Result<()> {
	let counts = collection_counts(store).await?;

	println!("Collections on {}:", store.name());
	for (collection, count) in counts {
		println!("{collection} {count}");
	}
	Ok(())
}
