use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::sha256_hex;
use crate::dataset::{
	CAMPAIGN_CARDS, CAMPAIGN_REWARDS, CAMPAIGN_SURVEYS, CARDS, REWARDS, SURVEYS, SWIPE_DECK,
	to_documents, validate_campaign, validate_deck,
};
use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedSet {
	Deck,
	Campaign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCollection {
	pub collection: &'static str,
	pub clear_first: bool,
	pub documents: usize,
	pub digest: String,
}

pub fn build_plan(set: SeedSet) -> Result<Vec<PlannedCollection>> {
	match set {
		SeedSet::Deck => {
			validate_deck(SWIPE_DECK)?;
			Ok(vec![planned(CARDS, false, &to_documents(SWIPE_DECK)?)?])
		}
		SeedSet::Campaign => {
			validate_campaign(CAMPAIGN_CARDS, CAMPAIGN_SURVEYS, CAMPAIGN_REWARDS)?;
			Ok(vec![
				planned(CARDS, true, &to_documents(CAMPAIGN_CARDS)?)?,
				planned(SURVEYS, true, &to_documents(CAMPAIGN_SURVEYS)?)?,
				planned(REWARDS, true, &to_documents(CAMPAIGN_REWARDS)?)?,
			])
		}
	}
}

fn planned(collection: &'static str, clear_first: bool, docs: &[Document]) -> Result<PlannedCollection> {
	// Map keys serialize sorted, so the digest only moves when the data does.
	let bytes = serde_json::to_vec(docs).context("serializing payloads for digest")?;
	Ok(PlannedCollection {
		collection,
		clear_first,
		documents: docs.len(),
		digest: sha256_hex(&bytes),
	})
}

pub fn print_plan(set: SeedSet) -> Result<()> {
	let plan = build_plan(set)?;
	for entry in &plan {
		if entry.clear_first {
			println!("DRY RUN: would clear {}", entry.collection);
		}
		println!(
			"DRY RUN: would write {} documents to {} (sha256 {})",
			entry.documents,
			entry.collection,
			&entry.digest[..12]
		);
	}
	if set == SeedSet::Deck {
		for card in SWIPE_DECK {
			println!("  {} {}", card.id, card.question);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deck_plan_writes_cards_without_clearing() {
		let plan = build_plan(SeedSet::Deck).expect("plan builds");
		assert_eq!(plan.len(), 1);
		assert_eq!(plan[0].collection, CARDS);
		assert_eq!(plan[0].documents, 20);
		assert!(!plan[0].clear_first);
	}

	#[test]
	fn campaign_plan_clears_all_three_collections() {
		let plan = build_plan(SeedSet::Campaign).expect("plan builds");
		let shape: Vec<_> = plan
			.iter()
			.map(|p| (p.collection, p.clear_first, p.documents))
			.collect();
		assert_eq!(
			shape,
			vec![(CARDS, true, 4), (SURVEYS, true, 2), (REWARDS, true, 3)]
		);
	}

	#[test]
	fn digests_are_stable_across_runs() {
		let a = build_plan(SeedSet::Deck).expect("plan builds");
		let b = build_plan(SeedSet::Deck).expect("plan builds");
		assert_eq!(a[0].digest, b[0].digest);
		assert_eq!(a[0].digest.len(), 64);

		let campaign = build_plan(SeedSet::Campaign).expect("plan builds");
		assert_ne!(a[0].digest, campaign[0].digest);
	}
}
