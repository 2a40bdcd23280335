//! Configuration for talking to the speedrun.com API.

use std::num::NonZero;
use std::time::Duration;

use serde::{Deserialize, Deserializer, de};
use url::Url;

/// The largest page size speedrun.com accepts.
pub const MAX_PAGE_SIZE: u8 = 200;

/// Configuration for the speedrun.com API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SpeedrunComConfig
{
	/// Base URL of the API, including the version segment.
	///
	/// Always ends with a `/`.
	#[serde(
		default = "SpeedrunComConfig::default_base_url",
		deserialize_with = "SpeedrunComConfig::deserialize_base_url"
	)]
	pub base_url: Url,

	/// How many runs to request per page.
	#[serde(
		default = "SpeedrunComConfig::default_page_size",
		deserialize_with = "SpeedrunComConfig::deserialize_page_size"
	)]
	pub page_size: NonZero<u8>,

	/// How many runs the forward sweep collects before switching directions.
	///
	/// speedrun.com refuses to paginate past 10,000 results, so this should
	/// not be larger than that.
	#[serde(default = "SpeedrunComConfig::default_sweep_threshold")]
	pub sweep_threshold: NonZero<usize>,

	/// How long to wait before retrying a rate-limited request.
	#[serde(
		default = "SpeedrunComConfig::default_rate_limit_backoff",
		deserialize_with = "deserialize_seconds"
	)]
	pub rate_limit_backoff: Duration,

	/// How many entries to request for leaderboard snapshots.
	#[serde(default = "SpeedrunComConfig::default_leaderboard_size")]
	pub leaderboard_size: NonZero<u16>,

	/// Timeout for individual HTTP requests.
	#[serde(
		default = "SpeedrunComConfig::default_request_timeout",
		deserialize_with = "deserialize_seconds"
	)]
	pub request_timeout: Duration,

	/// Value for the `User-Agent` header.
	#[serde(default = "SpeedrunComConfig::default_user_agent")]
	pub user_agent: Box<str>,
}

impl Default for SpeedrunComConfig
{
	fn default() -> Self
	{
		Self {
			base_url: Self::default_base_url(),
			page_size: Self::default_page_size(),
			sweep_threshold: Self::default_sweep_threshold(),
			rate_limit_backoff: Self::default_rate_limit_backoff(),
			leaderboard_size: Self::default_leaderboard_size(),
			request_timeout: Self::default_request_timeout(),
			user_agent: Self::default_user_agent(),
		}
	}
}

impl SpeedrunComConfig
{
	fn default_base_url() -> Url
	{
		Url::parse("https://www.speedrun.com/api/v1/").unwrap_or_else(|_| unreachable!())
	}

	fn deserialize_base_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
	where
		D: Deserializer<'de>,
	{
		let mut url = Url::deserialize(deserializer)?;

		if url.cannot_be_a_base() {
			return Err(de::Error::custom("base url must be able to hold path segments"));
		}

		if !url.path().ends_with('/') {
			let path = format!("{}/", url.path());
			url.set_path(&path);
		}

		Ok(url)
	}

	fn default_page_size() -> NonZero<u8>
	{
		NonZero::new(MAX_PAGE_SIZE).unwrap_or(NonZero::<u8>::MIN)
	}

	fn deserialize_page_size<'de, D>(deserializer: D) -> Result<NonZero<u8>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let page_size = NonZero::<u8>::deserialize(deserializer)?;

		if page_size.get() > MAX_PAGE_SIZE {
			return Err(de::Error::custom(format_args!(
				"page size must be at most {MAX_PAGE_SIZE}"
			)));
		}

		Ok(page_size)
	}

	fn default_sweep_threshold() -> NonZero<usize>
	{
		NonZero::new(10_000).unwrap_or(NonZero::<usize>::MIN)
	}

	fn default_rate_limit_backoff() -> Duration
	{
		Duration::from_secs(1)
	}

	fn default_leaderboard_size() -> NonZero<u16>
	{
		NonZero::new(100).unwrap_or(NonZero::<u16>::MIN)
	}

	fn default_request_timeout() -> Duration
	{
		Duration::from_secs(30)
	}

	fn default_user_agent() -> Box<str>
	{
		Box::from(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
	}
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	<f64 as Deserialize<'de>>::deserialize(deserializer)
		.and_then(|secs| Duration::try_from_secs_f64(secs).map_err(de::Error::custom))
}
