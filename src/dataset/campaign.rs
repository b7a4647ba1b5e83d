use super::{InputType, PromptCard, PromptKind, Reward, Survey, SurveyQuestion};

const CATEGORY: &str = "valentines";

pub const CAMPAIGN_CARDS: &[PromptCard] = &[
	PromptCard {
		kind: PromptKind::Binary,
		question: "Candlelit dinner beats a movie night for Valentine's Day?",
		image_url: "https://placehold.co/600x800/E91E63/FFFFFF/png?text=Dinner+vs+Movie",
		audio_url: None,
		category: CATEGORY,
		reward_points: 10,
	},
	PromptCard {
		kind: PromptKind::Binary,
		question: "Is celebrating Valentine's Day with friends better than a date?",
		image_url: "https://placehold.co/600x800/F06292/FFFFFF/png?text=Galentines",
		audio_url: None,
		category: CATEGORY,
		reward_points: 10,
	},
	PromptCard {
		kind: PromptKind::Audio,
		question: "Listen to this voice note. Does it sound like a love confession?",
		image_url: "https://placehold.co/600x800/AD1457/FFFFFF/png?text=Voice+Note",
		audio_url: Some("https://cdn.example.com/audio/valentine_voice_note.mp3"),
		category: CATEGORY,
		reward_points: 20,
	},
	PromptCard {
		kind: PromptKind::Binary,
		question: "Roses or chocolates: are roses the better gift?",
		image_url: "https://placehold.co/600x800/C2185B/FFFFFF/png?text=Roses+vs+Chocolates",
		audio_url: None,
		category: CATEGORY,
		reward_points: 10,
	},
];

pub const CAMPAIGN_SURVEYS: &[Survey] = &[
	Survey {
		title: "Valentine's Day Plans",
		description: "Tell us how campus is celebrating this year.",
		reward_points: 30,
		is_active: true,
		questions: &[
			SurveyQuestion {
				id: "q1",
				text: "How are you planning to spend Valentine's Day?",
				input: InputType::Text,
			},
			SurveyQuestion {
				id: "q2",
				text: "How excited are you about Valentine's Day this year?",
				input: InputType::Rating,
			},
			SurveyQuestion {
				id: "q3",
				text: "Have you already bought a gift?",
				input: InputType::YesNo,
			},
		],
	},
	Survey {
		title: "Campus Love Stories",
		description: "Anonymous answers only. Share what dating on campus is really like.",
		reward_points: 50,
		is_active: true,
		questions: &[
			SurveyQuestion {
				id: "q1",
				text: "Describe your ideal first date on campus.",
				input: InputType::Text,
			},
			SurveyQuestion {
				id: "q2",
				text: "Have you ever had a crush on a classmate?",
				input: InputType::YesNo,
			},
			SurveyQuestion {
				id: "q3",
				text: "Rate the canteen as a date spot.",
				input: InputType::Rating,
			},
		],
	},
];

pub const CAMPAIGN_REWARDS: &[Reward] = &[
	Reward {
		title: "Free Canteen Coffee",
		cost: 100,
		image_url: "https://placehold.co/400x400/795548/FFFFFF/png?text=Coffee",
		is_digital: false,
		stock: 50,
	},
	Reward {
		title: "Spotify Premium (1 Month)",
		cost: 500,
		image_url: "https://placehold.co/400x400/1DB954/FFFFFF/png?text=Spotify",
		is_digital: true,
		stock: 20,
	},
	Reward {
		title: "Valentine's Rose Delivery",
		cost: 250,
		image_url: "https://placehold.co/400x400/D81B60/FFFFFF/png?text=Rose",
		is_digital: false,
		stock: 30,
	},
];
