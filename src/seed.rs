use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::now_rfc3339;
use crate::dataset::{
	CARDS, Card, PromptCard, REWARDS, Reward, SURVEYS, Survey, to_document, validate_campaign,
	validate_deck,
};
use crate::store::{Document, DocumentStore, WriteBatch};

/// Everything the campaign flow writes.
#[derive(Debug, Clone, Copy)]
pub struct Campaign<'a> {
	pub cards: &'a [PromptCard],
	pub surveys: &'a [Survey],
	pub rewards: &'a [Reward],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignReport {
	pub cleared: Vec<(&'static str, usize)>,
	pub card_ids: Vec<String>,
	pub surveys: usize,
	pub rewards: usize,
}

/// Write the swipe deck in one batch, each card under its own id.
pub async fn seed_deck(store: &dyn DocumentStore, deck: &[Card]) -> Result<usize> {
	validate_deck(deck)?;

	let mut batch = WriteBatch::default();
	for card in deck {
		batch.set(CARDS, card.id, to_document(card)?);
	}

	let count = store.commit(batch).await?;
	println!("Success! {count} cards seeded to {}.", store.name());
	Ok(count)
}

/// Replace cards, surveys and rewards with the campaign records.
pub async fn seed_campaign(store: &dyn DocumentStore, campaign: Campaign<'_>) -> Result<CampaignReport> {
	validate_campaign(campaign.cards, campaign.surveys, campaign.rewards)?;

	let mut report = CampaignReport::default();
	for collection in [CARDS, SURVEYS, REWARDS] {
		let removed = clear(store, collection).await?;
		report.cleared.push((collection, removed));
	}

	let created_at = now_rfc3339()?;
	for (position, card) in campaign.cards.iter().enumerate() {
		let mut doc = to_document(card)?;
		doc.insert("createdAt".to_string(), Value::from(created_at.as_str()));
		let id = store
			.add(CARDS, doc)
			.await
			.with_context(|| format!("adding card '{}'", card.question))?;

		let mut stamp = Document::new();
		stamp.insert("orderIndex".to_string(), Value::from(position));
		store
			.update(CARDS, &id, stamp)
			.await
			.with_context(|| format!("stamping orderIndex on {CARDS}/{id}"))?;
		report.card_ids.push(id);
	}

	for survey in campaign.surveys {
		store
			.add(SURVEYS, to_document(survey)?)
			.await
			.with_context(|| format!("adding survey '{}'", survey.title))?;
		report.surveys += 1;
	}

	for reward in campaign.rewards {
		store
			.add(REWARDS, to_document(reward)?)
			.await
			.with_context(|| format!("adding reward '{}'", reward.title))?;
		report.rewards += 1;
	}

	println!(
		"Success! seeded {} cards, {} surveys, {} rewards to {}.",
		report.card_ids.len(),
		report.surveys,
		report.rewards,
		store.name()
	);
	Ok(report)
}

pub async fn clear(store: &dyn DocumentStore, collection: &str) -> Result<usize> {
	let removed = store
		.clear(collection)
		.await
		.with_context(|| format!("clearing {collection}"))?;
	println!("cleared {removed} documents from {collection}");
	Ok(removed)
}
