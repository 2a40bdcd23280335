use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use speedrun::{GameId, VariableSelections};
use speedrun_history::Config;
use speedrun_history::notifications::{
	FetchKind,
	Notification,
	Notifier,
	StderrNotifier,
	TracingNotifier,
};
use speedrun_history::selection::Selection;
use speedrun_history::services::SpeedrunComService;
use speedrun_history::services::speedrun_com::{Category, FetchError, Game, Variable};

mod cli;

const DEFAULT_CONFIG_PATH: &str = "./speedrun-history.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode>
{
	let cli_args = cli::args();
	let mut config = if let Some(config_path) = cli_args.config_path.as_deref() {
		Config::load_from_file(config_path)?
	} else if fs::exists(DEFAULT_CONFIG_PATH)? {
		Config::load_from_file(Path::new(DEFAULT_CONFIG_PATH))?
	} else {
		Config::default()
	};

	cli_args.apply_to_config(&mut config);

	let tracing = speedrun_history::init_tracing(&config.tracing).context("failed to initialize tracing")?;
	let notifier: &dyn Notifier = if tracing.has_output() { &TracingNotifier } else { &StderrNotifier };

	let service = SpeedrunComService::from_config(config.speedrun_com)
		.context("failed to build http client")?;

	match run(&service, cli_args.command).await {
		Ok(()) => Ok(ExitCode::SUCCESS),
		Err(Failure::Fetch(kind, error)) => {
			notifier.notify(Notification::fetch_failed(kind, &error));
			Ok(ExitCode::FAILURE)
		},
		Err(Failure::Output(error)) => Err(error).context("failed to write output"),
	}
}

enum Failure
{
	Fetch(FetchKind, FetchError),
	Output(io::Error),
}

impl From<io::Error> for Failure
{
	fn from(error: io::Error) -> Self
	{
		Self::Output(error)
	}
}

async fn run(service: &SpeedrunComService, command: cli::Command) -> Result<(), Failure>
{
	match command {
		cli::Command::Game { game } => {
			let game = service
				.fetch_game(&game)
				.await
				.map_err(|error| Failure::Fetch(FetchKind::Game, error))?;

			print_json(&GameSummary::new(&game))
		},
		cli::Command::Leaderboard { leaderboard } => {
			let selection = resolve_selection(service, leaderboard).await?;
			let snapshot = service
				.fetch_leaderboard(&selection)
				.await
				.map_err(|error| Failure::Fetch(FetchKind::Leaderboard, error))?;

			print_json(&snapshot)
		},
		cli::Command::History { leaderboard, as_of } => {
			let selection = resolve_selection(service, leaderboard).await?;
			let history = service
				.fetch_top_ten_history(&selection)
				.await
				.map_err(|error| Failure::Fetch(FetchKind::Runs, error))?;

			match as_of {
				Some(date) => print_json(&history.top_ten_as_of(date)),
				None => print_json(history.frames()),
			}
		},
	}
}

/// Falls back to the game's default variable values if none were given.
async fn resolve_selection(
	service: &SpeedrunComService,
	cli::LeaderboardArgs { game, category, variables }: cli::LeaderboardArgs,
) -> Result<Selection, Failure>
{
	let variables = if variables.is_empty() {
		service
			.fetch_game(&game)
			.await
			.map(|game| game.default_selections(&category))
			.map_err(|error| Failure::Fetch(FetchKind::Game, error))?
	} else {
		variables.into_iter().collect()
	};

	Ok(Selection::new(game, category, variables))
}

fn print_json(value: &impl Serialize) -> Result<(), Failure>
{
	let mut stdout = io::stdout().lock();

	serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::from)?;
	writeln!(stdout)?;

	Ok(())
}

#[derive(Serialize)]
struct GameSummary<'a>
{
	id: &'a GameId,
	name: &'a str,
	categories: Vec<CategorySummary<'a>>,
}

#[derive(Serialize)]
struct CategorySummary<'a>
{
	#[serde(flatten)]
	category: &'a Category,
	variables: Vec<&'a Variable>,
	default_selections: VariableSelections,
}

impl<'a> GameSummary<'a>
{
	fn new(game: &'a Game) -> Self
	{
		let categories = game
			.full_game_categories()
			.map(|category| CategorySummary {
				category,
				variables: game.mandatory_variables(&category.id).collect(),
				default_selections: game.default_selections(&category.id),
			})
			.collect();

		Self { id: &game.id, name: &game.name, categories }
	}
}
