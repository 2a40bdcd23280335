//! Fetching the current state of a leaderboard.

use serde::{Deserialize, Serialize};
use speedrun::{Contributor, Run, RunId};
use url::Url;

use super::models::{ApiPlayer, ApiRun};
use super::{Envelope, FetchError, SpeedrunComService, Transport};
use crate::selection::Selection;

/// A leaderboard as ranked by speedrun.com.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardSnapshot
{
	/// Link to the leaderboard on the website.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weblink: Option<Url>,

	/// The ranked runs, in the order speedrun.com returned them.
	pub runs: Vec<PlacedRun>,

	/// Everyone who appears in [`runs`](Self::runs).
	pub players: Vec<Contributor>,
}

/// A run and the place speedrun.com assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedRun
{
	/// 1-based place. Tied runs share a place.
	pub place: u32,

	pub id: RunId,

	/// The run, or `None` if speedrun.com returned something we can't make
	/// sense of (no time, no players).
	pub run: Option<Run>,
}

impl LeaderboardSnapshot
{
	/// Returns the name to display for `contributor`.
	///
	/// Runs on leaderboards only reference users by ID, so their names have
	/// to be looked up in [`players`](Self::players).
	pub fn display_name<'a>(&'a self, contributor: &'a Contributor) -> Option<&'a str>
	{
		let Contributor::User { id, name } = contributor else {
			return contributor.display_name();
		};

		name.as_deref().or_else(|| {
			self.players.iter().find_map(|player| match player {
				Contributor::User { id: player_id, name } if player_id == id => name.as_deref(),
				Contributor::User { .. } | Contributor::Guest { .. } => None,
			})
		})
	}
}

#[derive(Debug, Deserialize)]
struct ApiLeaderboard
{
	#[serde(default)]
	weblink: Option<Url>,
	runs: Vec<ApiPlacedRun>,

	#[serde(default)]
	players: Option<ApiEmbeddedPlayers>,
}

#[derive(Debug, Deserialize)]
struct ApiPlacedRun
{
	place: u32,
	run: ApiRun,
}

#[derive(Debug, Deserialize)]
struct ApiEmbeddedPlayers
{
	data: Vec<ApiPlayer>,
}

impl From<ApiLeaderboard> for LeaderboardSnapshot
{
	fn from(leaderboard: ApiLeaderboard) -> Self
	{
		let runs = leaderboard
			.runs
			.into_iter()
			.map(|ApiPlacedRun { place, run }| {
				let id = run.id.clone();
				let run = run
					.into_run()
					.inspect_err(|error| warn!(%id, %error, "malformed leaderboard run"))
					.ok();

				PlacedRun { place, id, run }
			})
			.collect();

		let players = leaderboard
			.players
			.into_iter()
			.flat_map(|players| players.data)
			.map(Contributor::from)
			.collect();

		Self { weblink: leaderboard.weblink, runs, players }
	}
}

impl<T> SpeedrunComService<T>
where
	T: Transport,
{
	/// Fetches the top of a leaderboard, ranked by speedrun.com.
	#[instrument(skip_all, fields(selection = %selection), err(Debug, level = "debug"))]
	pub async fn fetch_leaderboard(&self, selection: &Selection) -> Result<LeaderboardSnapshot, FetchError>
	{
		let mut url = self.endpoint(&[
			"leaderboards",
			selection.game.as_str(),
			"category",
			selection.category.as_str(),
		])?;

		url.query_pairs_mut()
			.append_pair("top", &self.config.leaderboard_size.to_string())
			.append_pair("embed", "players")
			.extend_pairs(selection.variables.query_pairs());

		self.get_json::<Envelope<ApiLeaderboard>>(&url)
			.await
			.map(|Envelope { data }| LeaderboardSnapshot::from(data))
	}
}
