//! Configuration for the fetcher and the command line front end.
//!
//! The [`Config`] is usually read from a TOML file, but every section has
//! sensible defaults, so an empty file (or no file at all) is valid.

use std::path::Path;
use std::{fs, io};

use serde::Deserialize;

pub mod speedrun_com;
pub use speedrun_com::SpeedrunComConfig;

pub mod tracing;

/// Top-level configuration.
///
/// See [`SpeedrunComConfig`] and [`tracing::Config`] for the individual sections.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config
{
	/// Logging.
	#[serde(default)]
	pub tracing: tracing::Config,

	/// The speedrun.com API client.
	#[serde(default)]
	pub speedrun_com: SpeedrunComConfig,
}

/// Errors that can occur when loading a [`Config`] from a file.
#[derive(Debug, Error)]
pub enum LoadFromFileError
{
	/// The file could not be read.
	#[error("failed to read configuration file: {0}")]
	ReadFile(#[source] io::Error),

	/// The file's contents are not a valid configuration.
	#[error("failed to parse configuration file: {0}")]
	Deserialize(#[source] toml::de::Error),
}

impl Config
{
	/// Loads a file into memory and parses it into a [`Config`] object.
	pub fn load_from_file(path: &Path) -> Result<Self, LoadFromFileError>
	{
		fs::read_to_string(path)
			.map(|file_contents| toml::from_str(&file_contents))
			.map_err(LoadFromFileError::ReadFile)?
			.map_err(LoadFromFileError::Deserialize)
	}
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use super::*;

	#[test]
	fn empty_file_is_valid() -> anyhow::Result<()>
	{
		let config = toml::from_str::<Config>("")?;

		assert!(config.tracing.enable);
		assert!(config.tracing.has_output());
		assert_eq!(config.speedrun_com.base_url.as_str(), "https://www.speedrun.com/api/v1/");
		assert_eq!(config.speedrun_com.page_size.get(), 200);
		assert_eq!(config.speedrun_com.sweep_threshold.get(), 10_000);
		assert_eq!(config.speedrun_com.rate_limit_backoff, Duration::from_secs(1));
		assert_eq!(config.speedrun_com.leaderboard_size.get(), 100);

		Ok(())
	}

	#[test]
	fn full_file() -> anyhow::Result<()>
	{
		let config = toml::from_str::<Config>(
			r#"
			[tracing]
			enable = false
			filters = ["speedrun_history=debug"]

			[tracing.stderr]
			enable = true
			ansi = false

			[tracing.files]
			enable = true
			directory = "./logs"

			[speedrun-com]
			base-url = "http://127.0.0.1:8080/api/v1"
			page-size = 50
			sweep-threshold = 500
			rate-limit-backoff = 0.25
			leaderboard-size = 10
			request-timeout = 5
			user-agent = "test"
			"#,
		)?;

		assert!(!config.tracing.enable);
		assert_eq!(config.tracing.filters.len(), 1);
		assert!(config.tracing.stderr.as_ref().is_some_and(|stderr| !stderr.ansi));
		assert!(config.tracing.files.as_ref().is_some_and(|files| files.enable));
		assert!(!config.tracing.has_output());

		let speedrun_com = &config.speedrun_com;

		// a trailing slash is added so relative joins keep the `v1` segment
		assert_eq!(speedrun_com.base_url.as_str(), "http://127.0.0.1:8080/api/v1/");
		assert_eq!(speedrun_com.page_size.get(), 50);
		assert_eq!(speedrun_com.sweep_threshold.get(), 500);
		assert_eq!(speedrun_com.rate_limit_backoff, Duration::from_millis(250));
		assert_eq!(speedrun_com.leaderboard_size.get(), 10);
		assert_eq!(speedrun_com.request_timeout, Duration::from_secs(5));
		assert_eq!(&*speedrun_com.user_agent, "test");

		Ok(())
	}

	#[test]
	fn output_requires_an_enabled_layer() -> anyhow::Result<()>
	{
		let silent = toml::from_str::<Config>("[tracing.stderr]\nenable = false\n")?;
		assert!(silent.tracing.enable);
		assert!(!silent.tracing.has_output());

		let files_only = toml::from_str::<Config>(
			"[tracing.stderr]\nenable = false\n[tracing.files]\nenable = true\ndirectory = \"./logs\"\n",
		)?;
		assert!(files_only.tracing.has_output());

		Ok(())
	}

	#[test]
	fn rejects_bad_values()
	{
		for bad in [
			"[speedrun-com]\npage-size = 0",
			"[speedrun-com]\npage-size = 201",
			"[speedrun-com]\nsweep-threshold = 0",
			"[speedrun-com]\nrate-limit-backoff = -1.0",
			"[speedrun-com]\nbase-url = \"mailto:someone@example.org\"",
			"[speedrun-com]\nunknown-field = 1",
			"[unknown-section]",
		] {
			assert!(toml::from_str::<Config>(bad).is_err(), "{bad:?} should be rejected");
		}
	}
}
