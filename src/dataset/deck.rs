use super::{Card, CardKind, Swipe, VoteStats};

const CREATED_AT: &str = "2026-01-12T23:36:51.000Z";

/// The swipe deck, in presentation order.
pub const SWIPE_DECK: &[Card] = &[
	Card {
		id: "pilot_001",
		kind: CardKind::Binary,
		question: "Blind Taste Test: Did you prefer Sample A (Spicy) over Sample B?",
		image_url: "https://placehold.co/600x800/FF5722/FFFFFF/png?text=Sample+A+vs+B",
		order_index: 1,
		category: "pilot_canteen",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 800.0,
		reward_points: 10,
	},
	Card {
		id: "pilot_002",
		kind: CardKind::Binary,
		question: "Is ₹20 a fair price for a Samosa in the canteen?",
		image_url: "https://placehold.co/600x800/FFC107/000000/png?text=Samosa+Price",
		order_index: 2,
		category: "pilot_canteen",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 600.0,
		reward_points: 10,
	},
	Card {
		id: "pilot_003",
		kind: CardKind::Binary,
		question: "Should we bring back 'Maggi' to the late-night menu?",
		image_url: "https://placehold.co/600x800/FDD835/000000/png?text=Maggi+Comeback",
		order_index: 3,
		category: "pilot_canteen",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 500.0,
		reward_points: 10,
	},
	Card {
		id: "pilot_004",
		kind: CardKind::Binary,
		question: "Balaji Wafers vs. Lays: Is Balaji the superior chip?",
		image_url: "https://placehold.co/600x800/4CAF50/FFFFFF/png?text=Balaji+vs+Lays",
		order_index: 4,
		category: "pilot_canteen",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1200.0,
		reward_points: 10,
	},
	Card {
		id: "gold_001",
		kind: CardKind::GoldenTicket {
			majority_answer: Swipe::Right,
		},
		question: "Is the sky blue on a clear day?",
		image_url: "https://placehold.co/600x800/2196F3/FFFFFF/png?text=Sky+Color",
		order_index: 5,
		category: "calibration",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 99,
			total_votes: 100,
		},
		global_avg_hesitation: 400.0,
		reward_points: 50,
	},
	Card {
		id: "gold_002",
		kind: CardKind::GoldenTicket {
			majority_answer: Swipe::Right,
		},
		question: "Do humans need water to survive?",
		image_url: "https://placehold.co/600x800/00BCD4/FFFFFF/png?text=Water+Survival",
		order_index: 6,
		category: "calibration",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 99,
			total_votes: 100,
		},
		global_avg_hesitation: 400.0,
		reward_points: 50,
	},
	Card {
		id: "gold_003",
		kind: CardKind::GoldenTicket {
			majority_answer: Swipe::Left,
		},
		question: "Is 2 + 2 = 5?",
		image_url: "https://placehold.co/600x800/F44336/FFFFFF/png?text=Basic+Math",
		order_index: 7,
		category: "calibration",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 1,
			total_votes: 100,
		},
		global_avg_hesitation: 600.0,
		reward_points: 50,
	},
	Card {
		id: "life_001",
		kind: CardKind::Binary,
		question: "Have you ever skipped a lecture to sleep?",
		image_url: "https://placehold.co/600x800/9C27B0/FFFFFF/png?text=Sleep+vs+Class",
		order_index: 8,
		category: "lifestyle",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 900.0,
		reward_points: 10,
	},
	Card {
		id: "life_002",
		kind: CardKind::Binary,
		question: "Is Python better than Java for interviews?",
		image_url: "https://placehold.co/600x800/3F51B5/FFFFFF/png?text=Python+vs+Java",
		order_index: 9,
		category: "tech",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1500.0,
		reward_points: 10,
	},
	Card {
		id: "life_003",
		kind: CardKind::Binary,
		question: "Do you believe AI will replace Junior Developers in 2 years?",
		image_url: "https://placehold.co/600x800/607D8B/FFFFFF/png?text=AI+Future",
		order_index: 10,
		category: "tech",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 2000.0,
		reward_points: 10,
	},
	Card {
		id: "trap_001",
		kind: CardKind::Trap {
			correct_trap_answer: false,
		},
		question: "Swipe LEFT if you are a human.",
		image_url: "https://placehold.co/600x800/000000/FFFFFF/png?text=READ+CAREFULLY",
		order_index: 11,
		category: "security",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 0,
			total_votes: 0,
		},
		global_avg_hesitation: 2500.0,
		reward_points: 0,
	},
	Card {
		id: "trap_002",
		kind: CardKind::Trap {
			correct_trap_answer: true,
		},
		question: "Tap the screen... wait... actually just Swipe RIGHT.",
		image_url: "https://placehold.co/600x800/795548/FFFFFF/png?text=Attention+Check",
		order_index: 12,
		category: "security",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 0,
			total_votes: 0,
		},
		global_avg_hesitation: 2000.0,
		reward_points: 0,
	},
	Card {
		id: "ad_001",
		kind: CardKind::Sponsored,
		question: "Would you buy a 'Nothing Phone 3' if it costs ₹30k?",
		image_url: "https://placehold.co/600x800/000000/FFFFFF/png?text=Nothing+Phone",
		order_index: 13,
		category: "market_research",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1200.0,
		reward_points: 50,
	},
	Card {
		id: "ad_002",
		kind: CardKind::Sponsored,
		question: "Are you interested in a 6-month internship at a Fintech startup?",
		image_url: "https://placehold.co/600x800/009688/FFFFFF/png?text=Hiring+Now",
		order_index: 14,
		category: "recruitment",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1500.0,
		reward_points: 50,
	},
	Card {
		id: "pol_001",
		kind: CardKind::Binary,
		question: "Should Student Council elections be held online this year?",
		image_url: "https://placehold.co/600x800/E91E63/FFFFFF/png?text=Student+Elections",
		order_index: 15,
		category: "politics",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1000.0,
		reward_points: 20,
	},
	Card {
		id: "ent_001",
		kind: CardKind::Binary,
		question: "Netflix or YouTube Premium: Which subscription is more worth it?",
		image_url: "https://placehold.co/600x800/E50914/FFFFFF/png?text=Netflix+vs+YouTube",
		order_index: 16,
		category: "entertainment",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1100.0,
		reward_points: 10,
	},
	Card {
		id: "ent_002",
		kind: CardKind::Binary,
		question: "Would you pay extra for eco-friendly packaging on products?",
		image_url: "https://placehold.co/600x800/4CAF50/FFFFFF/png?text=Eco+Friendly",
		order_index: 17,
		category: "sustainability",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1300.0,
		reward_points: 10,
	},
	Card {
		id: "food_001",
		kind: CardKind::Binary,
		question: "Swiggy vs Zomato: Do you prefer Swiggy for food delivery?",
		image_url: "https://placehold.co/600x800/FC8019/FFFFFF/png?text=Swiggy+vs+Zomato",
		order_index: 18,
		category: "food_delivery",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 800.0,
		reward_points: 10,
	},
	Card {
		id: "tech_001",
		kind: CardKind::Binary,
		question: "Do you think Crypto/Web3 is the future or just hype?",
		image_url: "https://placehold.co/600x800/F7931A/FFFFFF/png?text=Crypto+Future",
		order_index: 19,
		category: "tech",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1800.0,
		reward_points: 15,
	},
	Card {
		id: "game_001",
		kind: CardKind::Binary,
		question: "Mobile Gaming (BGMI/COD) vs PC/Console: Do you prefer mobile?",
		image_url: "https://placehold.co/600x800/00D9FF/000000/png?text=Mobile+Gaming",
		order_index: 20,
		category: "gaming",
		created_at: CREATED_AT,
		stats: VoteStats {
			yes_percent: 50,
			total_votes: 0,
		},
		global_avg_hesitation: 1000.0,
		reward_points: 10,
	},
];
