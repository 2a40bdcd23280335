//! CLI argument handling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use speedrun::{CategoryId, GameId, ValueId, VariableId};
use speedrun_history::Config;
use speedrun_history::config::tracing::Filter;
use time::Date;
use time::macros::format_description;

/* NOTE:
 * We expose a free function here so callers don't need to have
 * `clap::Parser` in-scope.
 */

/// Parses the command line arguments of the current process.
pub fn args() -> Args
{
	Args::parse()
}

/// Browse speedrun.com leaderboards and reconstruct how their top 10 changed
/// over time.
///
/// All output is JSON, written to stdout.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args
{
	/// Path to the configuration file.
	///
	/// Defaults to `./speedrun-history.toml`, if it exists.
	#[arg(long = "config")]
	pub config_path: Option<PathBuf>,

	/// Additional log filter directives.
	///
	/// These are applied on top of the ones in the configuration file.
	#[arg(long = "log", value_name = "DIRECTIVE")]
	pub log_filters: Vec<Filter>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command
{
	/// Print a game's full-game categories and their mandatory variables.
	Game
	{
		/// The game's ID.
		game: GameId,
	},

	/// Print the current top of a leaderboard, as ranked by speedrun.com.
	Leaderboard
	{
		#[command(flatten)]
		leaderboard: LeaderboardArgs,
	},

	/// Print every change to the top 10 of a leaderboard.
	History
	{
		#[command(flatten)]
		leaderboard: LeaderboardArgs,

		/// Only print the top 10 as it stood at the end of this day (YYYY-MM-DD).
		#[arg(long, value_parser = parse_date)]
		as_of: Option<Date>,
	},
}

#[derive(Debug, clap::Args)]
pub struct LeaderboardArgs
{
	/// The game's ID.
	pub game: GameId,

	/// The category's ID.
	pub category: CategoryId,

	/// Select a variable value.
	///
	/// If none are given, the first value of every mandatory variable of the
	/// category is selected.
	#[arg(long = "var", value_name = "ID=VALUE", value_parser = parse_variable)]
	pub variables: Vec<(VariableId, ValueId)>,
}

impl Args
{
	/// Applies any relevant config overrides specified as CLI flags in the
	/// given `config` object.
	pub fn apply_to_config(&self, config: &mut Config)
	{
		config.tracing.filters.extend(self.log_filters.iter().cloned());
	}
}

fn parse_date(arg: &str) -> Result<Date, time::error::Parse>
{
	Date::parse(arg, format_description!("[year]-[month]-[day]"))
}

fn parse_variable(arg: &str) -> Result<(VariableId, ValueId), String>
{
	arg.split_once('=')
		.filter(|(variable, value)| !variable.is_empty() && !value.is_empty())
		.map(|(variable, value)| (VariableId::from(variable), ValueId::from(value)))
		.ok_or_else(|| format!("`{arg}` is not of the form ID=VALUE"))
}

#[cfg(test)]
mod tests
{
	use clap::CommandFactory;
	use time::macros::date;

	use super::*;

	#[test]
	fn verify_cli()
	{
		Args::command().debug_assert();
	}

	#[test]
	fn history_command() -> anyhow::Result<()>
	{
		let args = Args::try_parse_from([
			"speedrun-history",
			"--log",
			"speedrun_history=trace",
			"history",
			"o1y9wo6q",
			"wkpoo02r",
			"--var",
			"e8m7em86=zqoyz021",
			"--as-of",
			"2020-02-29",
		])?;

		let Command::History { leaderboard, as_of } = &args.command else {
			anyhow::bail!("expected `history` command, got {:?}", args.command);
		};

		assert_eq!(leaderboard.game.as_str(), "o1y9wo6q");
		assert_eq!(leaderboard.category.as_str(), "wkpoo02r");
		assert_eq!(leaderboard.variables, [(VariableId::from("e8m7em86"), ValueId::from("zqoyz021"))]);
		assert_eq!(*as_of, Some(date!(2020 - 02 - 29)));

		let mut config = Config::default();
		args.apply_to_config(&mut config);

		assert_eq!(config.tracing.filters.len(), 1);

		Ok(())
	}

	#[test]
	fn rejects_malformed_arguments()
	{
		let cases: [&[&str]; 4] = [
			&["speedrun-history", "leaderboard", "game", "category", "--var", "novalue"],
			&["speedrun-history", "leaderboard", "game", "category", "--var", "=x"],
			&["speedrun-history", "history", "game", "category", "--as-of", "2020-13-01"],
			&["speedrun-history", "game"],
		];

		for argv in cases {
			assert!(Args::try_parse_from(argv).is_err(), "{argv:?} should be rejected");
		}
	}
}
