mod campaign;
mod deck;

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;

use crate::store::Document;

pub use campaign::{CAMPAIGN_CARDS, CAMPAIGN_REWARDS, CAMPAIGN_SURVEYS};
pub use deck::SWIPE_DECK;

pub const CARDS: &str = "cards";
pub const SURVEYS: &str = "surveys";
pub const REWARDS: &str = "rewards";

/// Swipe direction recorded as the expected answer of a calibration card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Swipe {
	Left,
	Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
	Binary,
	GoldenTicket {
		#[serde(rename = "majorityAnswer")]
		majority_answer: Swipe,
	},
	Trap {
		#[serde(rename = "correctTrapAnswer")]
		correct_trap_answer: bool,
	},
	Sponsored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStats {
	pub yes_percent: u8,
	pub total_votes: u32,
}

/// A card of the swipe deck, stored under its own `id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
	pub id: &'static str,
	#[serde(flatten)]
	pub kind: CardKind,
	pub question: &'static str,
	pub image_url: &'static str,
	pub order_index: u32,
	pub category: &'static str,
	pub created_at: &'static str,
	pub stats: VoteStats,
	pub global_avg_hesitation: f64,
	pub reward_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
	Binary,
	Audio,
}

/// A campaign card. The store assigns its id; `createdAt` and `orderIndex`
/// are stamped while seeding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCard {
	#[serde(rename = "type")]
	pub kind: PromptKind,
	pub question: &'static str,
	pub image_url: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub audio_url: Option<&'static str>,
	pub category: &'static str,
	pub reward_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
	Text,
	Rating,
	YesNo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyQuestion {
	pub id: &'static str,
	pub text: &'static str,
	#[serde(rename = "type")]
	pub input: InputType,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
	pub title: &'static str,
	pub description: &'static str,
	pub reward_points: u32,
	pub is_active: bool,
	pub questions: &'static [SurveyQuestion],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
	pub title: &'static str,
	pub cost: u32,
	pub image_url: &'static str,
	pub is_digital: bool,
	pub stock: u32,
}

/// Serialize a record into the JSON object that gets written as a document.
pub fn to_document<T: Serialize>(record: &T) -> Result<Document> {
	match serde_json::to_value(record).context("serializing seed record")? {
		Value::Object(map) => Ok(map),
		other => bail!("seed record must serialize to an object, got {other}"),
	}
}

pub fn to_documents<T: Serialize>(records: &[T]) -> Result<Vec<Document>> {
	records.iter().map(to_document).collect()
}

/// Check the deck before anything is written: unique ids, and golden tickets
/// whose declared majority agrees with their vote split.
pub fn validate_deck(cards: &[Card]) -> Result<()> {
	let mut seen = BTreeSet::new();
	for card in cards {
		if card.id.trim().is_empty() {
			bail!("card at orderIndex {} has an empty id", card.order_index);
		}
		if !seen.insert(card.id) {
			bail!("duplicate card id '{}'", card.id);
		}
		if card.stats.yes_percent > 100 {
			bail!(
				"card '{}' has yesPercent {} above 100",
				card.id,
				card.stats.yes_percent
			);
		}
		if let CardKind::GoldenTicket { majority_answer } = card.kind {
			let implied = majority_from_percent(card.stats.yes_percent);
			if implied != Some(majority_answer) {
				bail!(
					"golden ticket '{}' declares {:?} but yesPercent is {}",
					card.id,
					majority_answer,
					card.stats.yes_percent
				);
			}
		}
	}
	Ok(())
}

pub fn validate_campaign(cards: &[PromptCard], surveys: &[Survey], rewards: &[Reward]) -> Result<()> {
	for card in cards {
		if card.kind == PromptKind::Audio && card.audio_url.is_none() {
			bail!("audio card '{}' has no audioUrl", card.question);
		}
	}
	for survey in surveys {
		if survey.questions.is_empty() {
			bail!("survey '{}' has no questions", survey.title);
		}
		let mut ids = BTreeSet::new();
		for q in survey.questions {
			if !ids.insert(q.id) {
				bail!("survey '{}' repeats question id '{}'", survey.title, q.id);
			}
		}
	}
	for reward in rewards {
		if reward.cost == 0 {
			bail!("reward '{}' costs nothing", reward.title);
		}
	}
	Ok(())
}

fn majority_from_percent(yes_percent: u8) -> Option<Swipe> {
	match yes_percent {
		0..=49 => Some(Swipe::Left),
		50 => None,
		_ => Some(Swipe::Right),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deck_ids_are_unique() {
		let ids: BTreeSet<_> = SWIPE_DECK.iter().map(|c| c.id).collect();
		assert_eq!(ids.len(), SWIPE_DECK.len());
		assert_eq!(SWIPE_DECK.len(), 20);
	}

	#[test]
	fn shipped_datasets_pass_validation() {
		validate_deck(SWIPE_DECK).expect("deck should be valid");
		validate_campaign(CAMPAIGN_CARDS, CAMPAIGN_SURVEYS, CAMPAIGN_REWARDS)
			.expect("campaign should be valid");
	}

	#[test]
	fn golden_tickets_agree_with_their_vote_split() {
		let docs = to_documents(SWIPE_DECK).expect("deck serializes");
		let golden: Vec<_> = docs
			.iter()
			.filter(|d| d.get("type") == Some(&Value::from("golden_ticket")))
			.collect();
		assert_eq!(golden.len(), 3);

		for doc in golden {
			let answer = doc["majorityAnswer"].as_str().expect("majorityAnswer is a string");
			let percent = doc["stats"]["yesPercent"].as_u64().expect("yesPercent is a number");
			match answer {
				"RIGHT" => assert!(percent > 50),
				"LEFT" => assert!(percent < 50),
				other => panic!("unexpected majorityAnswer {other}"),
			}
		}

		let math = SWIPE_DECK
			.iter()
			.find(|c| c.question == "Is 2 + 2 = 5?")
			.expect("math card present");
		assert_eq!(math.stats.yes_percent, 1);
		assert_eq!(
			math.kind,
			CardKind::GoldenTicket {
				majority_answer: Swipe::Left
			}
		);
	}

	#[test]
	fn trap_documents_carry_a_boolean_answer() {
		let docs = to_documents(SWIPE_DECK).expect("deck serializes");
		let traps: Vec<_> = docs
			.iter()
			.filter(|d| d.get("type") == Some(&Value::from("trap")))
			.collect();
		assert_eq!(traps.len(), 2);
		for doc in traps {
			assert!(doc["correctTrapAnswer"].is_boolean());
			assert!(!doc.contains_key("majorityAnswer"));
		}
	}

	#[test]
	fn card_serializes_with_camel_case_fields() {
		let doc = to_document(&SWIPE_DECK[0]).expect("card serializes");
		assert_eq!(doc["id"], "pilot_001");
		assert_eq!(doc["type"], "binary");
		assert_eq!(doc["orderIndex"], 1);
		assert_eq!(doc["stats"]["totalVotes"], 0);
		assert!(doc["globalAvgHesitation"].is_f64());
		assert!(!doc.contains_key("correctTrapAnswer"));
	}

	#[test]
	fn validation_rejects_duplicate_ids() {
		let cards = [SWIPE_DECK[0].clone(), SWIPE_DECK[0].clone()];
		let err = validate_deck(&cards).expect_err("duplicate should fail");
		assert!(err.to_string().contains("duplicate card id 'pilot_001'"));
	}

	#[test]
	fn validation_rejects_inconsistent_golden_ticket() {
		let mut card = SWIPE_DECK
			.iter()
			.find(|c| c.id == "gold_003")
			.cloned()
			.expect("gold_003 present");
		card.kind = CardKind::GoldenTicket {
			majority_answer: Swipe::Right,
		};
		assert!(validate_deck(&[card]).is_err());
	}

	#[test]
	fn campaign_has_expected_shape() {
		assert_eq!(CAMPAIGN_CARDS.len(), 4);
		assert_eq!(CAMPAIGN_SURVEYS.len(), 2);
		assert_eq!(CAMPAIGN_REWARDS.len(), 3);

		let docs = to_documents(CAMPAIGN_CARDS).expect("campaign cards serialize");
		assert!(docs.iter().all(|d| !d.contains_key("orderIndex")));
		assert!(docs.iter().any(|d| d.contains_key("audioUrl")));

		let survey = to_document(&CAMPAIGN_SURVEYS[0]).expect("survey serializes");
		assert_eq!(survey["isActive"], true);
		assert!(survey["questions"][0]["type"].is_string());
	}
}
