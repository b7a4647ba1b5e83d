use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_dotenv::dotenv::DotEnv;
use tracing_subscriber::EnvFilter;

mod config;
mod core;
mod dataset;
mod plan;
mod seed;
mod status;
mod store;

use config::{Backend, Overrides, StoreCfg, open_store};
use dataset::{CAMPAIGN_CARDS, CAMPAIGN_REWARDS, CAMPAIGN_SURVEYS, SWIPE_DECK};
use plan::SeedSet;
use seed::Campaign;
use store::DocumentStore;

#[derive(Parser, Debug)]
#[command(version, about = "Seed the swipe survey app's collections")]
pub struct Cli {
	/// Increase output
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Store to write to (defaults to SWIPESEED_BACKEND, then firestore)
	#[arg(long, global = true, value_enum)]
	backend: Option<Backend>,

	/// Service account key file (defaults to ./google-services.json)
	#[arg(long, global = true)]
	credentials: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Batch-write the swipe deck into `cards` under fixed ids
	Deck,
	/// Clear cards, surveys and rewards, then insert the Valentine's campaign
	Campaign,
	/// Delete every document in one collection
	Clear { collection: String },
	/// Show what a seed set would write without connecting
	Plan {
		#[arg(value_enum)]
		set: SeedSet,
	},
	/// Count documents in the seeded collections
	Status,
}

fn load_env() -> DotEnv {
	// Load .env in CWD if present, ignore missing
	DotEnv::new("")
}

/// `RUST_LOG` (from `.env` or the process) wins; otherwise `--verbose` picks the level.
fn log_directives(rust_log: Option<String>, verbose: bool) -> String {
	match rust_log.filter(|v| !v.trim().is_empty()) {
		Some(directives) => directives,
		None if verbose => String::from("swipeseed=debug,warn"),
		None => String::from("warn"),
	}
}

fn init_tracing(env: &DotEnv, verbose: bool) {
	let rust_log = env
		.get_var("RUST_LOG".to_string())
		.or_else(|| std::env::var("RUST_LOG").ok());
	let filter = EnvFilter::try_new(log_directives(rust_log, verbose))
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Cli::parse();
	let env = load_env();
	init_tracing(&env, args.verbose);

	let overrides = Overrides {
		backend: args.backend,
		credentials: args.credentials,
	};

	match args.command {
		Commands::Plan { set } => plan::print_plan(set)?,
		Commands::Deck => {
			let store = connect(&env, overrides).await?;
			println!("Seeding swipe deck...");
			seed::seed_deck(store.as_ref(), SWIPE_DECK).await?;
		}
		Commands::Campaign => {
			let store = connect(&env, overrides).await?;
			println!("Seeding campaign...");
			seed::seed_campaign(
				store.as_ref(),
				Campaign {
					cards: CAMPAIGN_CARDS,
					surveys: CAMPAIGN_SURVEYS,
					rewards: CAMPAIGN_REWARDS,
				},
			)
			.await?;
		}
		Commands::Clear { collection } => {
			let store = connect(&env, overrides).await?;
			seed::clear(store.as_ref(), &collection).await?;
		}
		Commands::Status => {
			let store = connect(&env, overrides).await?;
			status::status(store.as_ref()).await?;
		}
	}

	Ok(())
}

async fn connect(env: &DotEnv, overrides: Overrides) -> anyhow::Result<Box<dyn DocumentStore>> {
	let cfg = StoreCfg::from_env(env, overrides)?;
	tracing::debug!(backend = ?cfg.backend, "opening store");
	open_store(&cfg).await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rust_log_overrides_verbose_flag() {
		assert_eq!(
			log_directives(Some("swipeseed=trace".to_string()), true),
			"swipeseed=trace"
		);
		assert_eq!(
			log_directives(Some("swipeseed=trace".to_string()), false),
			"swipeseed=trace"
		);
	}

	#[test]
	fn verbose_flag_applies_without_rust_log() {
		assert_eq!(log_directives(None, true), "swipeseed=debug,warn");
		assert_eq!(log_directives(None, false), "warn");
		assert_eq!(log_directives(Some("  ".to_string()), false), "warn");
	}
}
