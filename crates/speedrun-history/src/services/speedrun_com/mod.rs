//! This module contains the [`SpeedrunComService`].
//!
//! It talks to the [speedrun.com REST API] to fetch games, leaderboard
//! snapshots, and, most importantly, the complete run history of a
//! leaderboard.
//!
//! [speedrun.com REST API]: https://github.com/speedruncomorg/api

use std::sync::Arc;

use http::StatusCode;
use serde::de::DeserializeOwned;
use speedrun::GameId;
use url::Url;

use crate::config::SpeedrunComConfig;
use crate::history::TopTenHistory;
use crate::selection::Selection;

mod errors;
pub use errors::FetchError;

mod transport;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};

mod pagination;
use pagination::{Envelope, Page};

mod models;
use models::ApiRun;

mod runs;

mod leaderboard;
pub use leaderboard::{LeaderboardSnapshot, PlacedRun};

mod games;
pub use games::{Category, CategoryKind, Game, Variable, VariableValue};


/// The speedrun.com service.
#[derive(Debug, Clone)]
pub struct SpeedrunComService<T = ReqwestTransport>
{
	/// Used to make HTTP requests.
	transport: T,

	/// Shared configuration.
	config: Arc<SpeedrunComConfig>,
}

impl SpeedrunComService
{
	/// Creates a service backed by a new [`reqwest`] client.
	pub fn from_config(config: SpeedrunComConfig) -> reqwest::Result<Self>
	{
		let transport = ReqwestTransport::new(&config.user_agent, config.request_timeout)?;

		Ok(Self::new(transport, config))
	}
}

impl<T> SpeedrunComService<T>
where
	T: Transport,
{
	/// Creates a service backed by an arbitrary [`Transport`].
	pub fn new(transport: T, config: SpeedrunComConfig) -> Self
	{
		Self { transport, config: Arc::new(config) }
	}

	/// Returns the configuration this service was created with.
	pub fn config(&self) -> &SpeedrunComConfig
	{
		&self.config
	}

	/// Fetches a game, including its categories and variables.
	#[instrument(skip(self), err(Debug, level = "debug"))]
	pub async fn fetch_game(&self, game: &GameId) -> Result<Game, FetchError>
	{
		let mut url = self.endpoint(&["games", game.as_str()])?;
		url.query_pairs_mut().append_pair("embed", "categories,variables");

		self.get_json::<Envelope<Game>>(&url)
			.await
			.map(|Envelope { data }| data)
	}

	/// Fetches every run of a leaderboard and builds its top 10 history.
	#[instrument(skip_all, fields(selection = %selection), err(Debug, level = "debug"))]
	pub async fn fetch_top_ten_history(&self, selection: &Selection) -> Result<TopTenHistory, FetchError>
	{
		let runs = self.fetch_all_runs(selection).await?;
		let history = TopTenHistory::new(runs);

		debug!(runs = history.runs().len(), frames = history.frames().len(), "built history");

		Ok(history)
	}

	/// Builds a URL for the API endpoint at `segments`.
	fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError>
	{
		let mut url = self.config.base_url.clone();

		url.path_segments_mut()
			.map_err(|()| FetchError::InvalidBaseUrl)?
			.pop_if_empty()
			.extend(segments);

		Ok(url)
	}

	/// Requests `url` and decodes the JSON response.
	///
	/// Rate-limited requests are retried after a fixed backoff until they
	/// succeed.
	async fn get_json<R>(&self, url: &Url) -> Result<R, FetchError>
	where
		R: DeserializeOwned,
	{
		let response = loop {
			let response = self.transport.get(url).await?;

			if !is_rate_limited(response.status) {
				break response;
			}

			warn!(
				%url,
				status = %response.status,
				backoff = ?self.config.rate_limit_backoff,
				"rate limited by speedrun.com; retrying",
			);

			tokio::time::sleep(self.config.rate_limit_backoff).await;
		};

		if !response.status.is_success() {
			let response_body = String::from_utf8_lossy(&response.body);
			error!(%url, status = %response.status, %response_body, "request to speedrun.com failed");

			return Err(FetchError::Status { status: response.status, url: url.clone() });
		}

		serde_json::from_slice(&response.body)
			.map_err(|error| FetchError::Deserialize { url: url.clone(), error })
	}
}

/// speedrun.com answers with `420 Enhance Your Calm` when throttling, but we
/// also honor the standard status.
fn is_rate_limited(status: StatusCode) -> bool
{
	matches!(status.as_u16(), 420 | 429)
}
